//! Fallback between alternative validations.
//!
//! Available when the error type is a [`NearSemiring`]: two alternatives that both
//! fail report `choose` of their errors, while sequencing keeps using `combine`.

use crate::{NearSemiring, Validated};

impl<E: NearSemiring, A> Validated<E, A> {
    /// Try `secondary` only if `self` failed.
    ///
    /// | `self` | `secondary()` | result |
    /// |---|---|---|
    /// | `Valid(a)` | not evaluated | `Valid(a)` |
    /// | `Invalid(_)` | `Valid(b)` | `Valid(b)` |
    /// | `Invalid(e1)` | `Invalid(e2)` | `Invalid(e1.choose(e2))` |
    ///
    /// `secondary` runs at most once, and never when `self` is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::{Alternatives, Validated};
    ///
    /// let email = Validated::<_, String>::invalid(Alternatives::single("bad email"));
    /// let contact = email.or_else(|| Validated::valid("555-0100".to_string()));
    /// assert_eq!(contact, Validated::Valid("555-0100".to_string()));
    /// ```
    pub fn or_else<F>(self, secondary: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(e1) => match secondary() {
                Validated::Valid(value) => Validated::Valid(value),
                Validated::Invalid(e2) => Validated::Invalid(e1.choose(e2)),
            },
        }
    }

    /// Eager form of [`or_else`](Validated::or_else) for an already computed
    /// alternative.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        self.or_else(|| other)
    }

    /// The first valid alternative, or every failure merged with `choose`.
    ///
    /// Items are pulled from the iterator only until one is valid, so a lazy
    /// iterator skips the remaining work. Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::{Cheapest, Validated};
    ///
    /// let attempts = vec![
    ///     Validated::<_, &str>::invalid(Cheapest(5u32)),
    ///     Validated::invalid(Cheapest(2)),
    /// ];
    /// assert_eq!(
    ///     Validated::first_valid(attempts),
    ///     Some(Validated::Invalid(Cheapest(2)))
    /// );
    /// ```
    pub fn first_valid<I>(alternatives: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut alternatives = alternatives.into_iter();
        let mut acc = alternatives.next()?;
        while acc.is_invalid() {
            match alternatives.next() {
                Some(next) => acc = acc.or(next),
                None => break,
            }
        }
        Some(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Alternatives, Semigroup};
    use std::cell::Cell;

    // Error list whose choice is plain concatenation.
    #[derive(Debug, Clone, PartialEq)]
    struct Trail(Vec<&'static str>);

    impl Semigroup for Trail {
        fn combine(self, other: Self) -> Self {
            Trail(self.0.combine(other.0))
        }
    }

    impl NearSemiring for Trail {
        fn choose(self, other: Self) -> Self {
            Trail(self.0.combine(other.0))
        }
    }

    #[test]
    fn test_or_else_merges_both_failures_with_choose() {
        let primary = Validated::<_, i32>::invalid(Trail(vec!["e1"]));
        let result = primary.or_else(|| Validated::invalid(Trail(vec!["e2"])));
        assert_eq!(result, Validated::Invalid(Trail(vec!["e1", "e2"])));
    }

    #[test]
    fn test_or_else_takes_secondary_value() {
        let primary = Validated::<_, i32>::invalid(Trail(vec!["e1"]));
        assert_eq!(primary.or_else(|| Validated::valid(7)), Validated::Valid(7));
    }

    #[test]
    fn test_or_else_does_not_evaluate_secondary_when_valid() {
        let counter = Cell::new(0);
        let result = Validated::<Trail, i32>::valid(5).or_else(|| {
            counter.set(counter.get() + 1);
            Validated::invalid(Trail(vec!["e2"]))
        });
        assert_eq!(result, Validated::Valid(5));
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_or_else_evaluates_secondary_once_when_invalid() {
        let counter = Cell::new(0);
        let _ = Validated::<_, i32>::invalid(Trail(vec!["e1"])).or_else(|| {
            counter.set(counter.get() + 1);
            Validated::valid(1)
        });
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_or_with_alternatives() {
        let a = Validated::<_, u8>::invalid(Alternatives::single("bad email"));
        let b = Validated::invalid(Alternatives::single("bad phone"));
        let merged = a.or(b);
        assert_eq!(
            merged,
            Validated::Invalid(Alternatives::new(vec!["bad email"], [vec!["bad phone"]]))
        );
    }

    #[test]
    fn test_fallback_inside_sequenced_validation() {
        let name = Validated::<_, &str>::invalid(Alternatives::single("bad name"));
        let contact = Validated::<_, &str>::invalid(Alternatives::single("bad email"))
            .or_else(|| Validated::invalid(Alternatives::single("bad phone")));

        let result = name.zip(contact);
        assert_eq!(
            result,
            Validated::Invalid(Alternatives::new(
                vec!["bad name", "bad email"],
                [vec!["bad name", "bad phone"]],
            ))
        );
    }

    #[test]
    fn test_first_valid_stops_pulling() {
        let pulled = Cell::new(0);
        let inputs = [Err("a"), Ok(1), Ok(2), Err("b")];
        let result = Validated::first_valid(inputs.iter().map(|input| {
            pulled.set(pulled.get() + 1);
            match input {
                Ok(n) => Validated::valid(*n),
                Err(e) => Validated::invalid(Trail(vec![*e])),
            }
        }));
        assert_eq!(result, Some(Validated::Valid(1)));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_first_valid_merges_all_failures() {
        let result = Validated::<_, i32>::first_valid(vec![
            Validated::invalid(Trail(vec!["a"])),
            Validated::invalid(Trail(vec!["b"])),
            Validated::invalid(Trail(vec!["c"])),
        ]);
        assert_eq!(result, Some(Validated::Invalid(Trail(vec!["a", "b", "c"]))));
    }

    #[test]
    fn test_first_valid_empty() {
        let result = Validated::<Trail, i32>::first_valid(Vec::new());
        assert_eq!(result, None);
    }
}
