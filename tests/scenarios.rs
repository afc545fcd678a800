//! End-to-end validation scenarios with a string-list error type

use std::cell::Cell;

use accrete::{assert_valid, assert_validation_errors, NearSemiring, Semigroup, Validated};

type Errors = Vec<String>;

fn errs(messages: &[&str]) -> Errors {
    messages.iter().map(|m| m.to_string()).collect()
}

// String list whose `choose` is concatenation.
#[derive(Debug, Clone, PartialEq)]
struct Messages(Errors);

impl Semigroup for Messages {
    fn combine(self, other: Self) -> Self {
        Messages(self.0.combine(other.0))
    }
}

impl NearSemiring for Messages {
    fn choose(self, other: Self) -> Self {
        Messages(self.0.combine(other.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn validate_name(name: &str) -> Validated<Errors, String> {
    if name.is_empty() {
        Validated::invalid(errs(&["bad name"]))
    } else {
        Validated::valid(name.to_string())
    }
}

fn validate_age(age: i64) -> Validated<Errors, u32> {
    if (0..=150).contains(&age) {
        Validated::valid(age as u32)
    } else {
        Validated::invalid(errs(&["bad age"]))
    }
}

#[test]
fn apply_valid_function_to_valid_value() {
    let f = Validated::<Errors, _>::valid(|x: i32| x + 1);
    assert_eq!(f.apply(Validated::valid(5)), Validated::Valid(6));
}

#[test]
fn apply_valid_function_to_invalid_value() {
    let f = Validated::<Errors, _>::valid(|x: i32| x + 1);
    let result = f.apply(Validated::invalid(errs(&["too small"])));
    assert_validation_errors!(result, errs(&["too small"]));
}

#[test]
fn apply_invalid_to_invalid_merges_left_then_right() {
    let f = Validated::<Errors, fn(u32) -> u32>::invalid(errs(&["bad name"]));
    let result = f.apply(Validated::invalid(errs(&["bad age"])));
    assert_validation_errors!(result, errs(&["bad name", "bad age"]));
}

#[test]
fn combine2_accumulates_every_field() {
    let person = validate_name("").map2(validate_age(-1), |name, age| Person { name, age });
    assert_validation_errors!(person, errs(&["bad name", "bad age"]));
}

#[test]
fn combine2_builds_record_when_fields_pass() {
    let person = validate_name("Grace").map2(validate_age(85), |name, age| Person { name, age });
    assert_valid!(person.clone());
    assert_eq!(
        person,
        Validated::Valid(Person {
            name: "Grace".to_string(),
            age: 85
        })
    );
}

#[test]
fn fallback_between_two_failures_concatenates() {
    let result = Validated::<_, i32>::invalid(Messages(errs(&["e1"])))
        .or_else(|| Validated::invalid(Messages(errs(&["e2"]))));
    assert_validation_errors!(result, Messages(errs(&["e1", "e2"])));
}

#[test]
fn fallback_is_skipped_after_success() {
    let counter = Cell::new(0);
    let result = Validated::valid(5).or_else(|| {
        counter.set(counter.get() + 1);
        Validated::invalid(Messages(errs(&["e2"])))
    });
    assert_eq!(result, Validated::Valid(5));
    assert_eq!(counter.get(), 0);
}

#[test]
fn curried_applicative_matches_map2() {
    let person = |name: String| move |age: u32| Person { name, age };
    let curried = Validated::<Errors, _>::valid(person)
        .apply(validate_name(""))
        .apply(validate_age(200));
    let lifted = validate_name("").map2(validate_age(200), |name, age| Person { name, age });
    assert_eq!(curried, lifted);
}

#[test]
fn monadic_chain_reports_only_first_failure() {
    let chained =
        validate_name("").and_then(|name| validate_age(-1).map(|age| Person { name, age }));
    assert_validation_errors!(chained, errs(&["bad name"]));
}
