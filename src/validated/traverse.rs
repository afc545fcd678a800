//! Validating collections and tuples of independent values.
//!
//! Everything here is built on [`Validated::map2`] / [`Validated::apply`], so every
//! failure is kept, in input order.

use crate::{Semigroup, Validated};

impl<E: Semigroup, A> Validated<E, A> {
    /// Turn a collection of validations into a validation of a collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let vals = vec![
    ///     Validated::<_, i32>::invalid(vec!["error1"]),
    ///     Validated::valid(2),
    ///     Validated::invalid(vec!["error2"]),
    /// ];
    /// assert_eq!(
    ///     Validated::sequence(vals),
    ///     Validated::Invalid(vec!["error1", "error2"])
    /// );
    /// ```
    pub fn sequence<I>(validations: I) -> Validated<E, Vec<A>>
    where
        I: IntoIterator<Item = Validated<E, A>>,
    {
        validations
            .into_iter()
            .fold(Validated::Valid(Vec::new()), |acc, next| {
                acc.map2(next, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

/// Turn a collection of validations into a validation of a collection.
///
/// Free-function form of [`Validated::sequence`].
pub fn sequence<E, A, I>(validations: I) -> Validated<E, Vec<A>>
where
    E: Semigroup,
    I: IntoIterator<Item = Validated<E, A>>,
{
    Validated::sequence(validations)
}

/// Validate every element with `f`, accumulating every failure.
///
/// # Examples
///
/// ```
/// use accrete::{traverse, Validated};
///
/// fn parse(s: &str) -> Validated<Vec<String>, i32> {
///     s.parse()
///         .map(Validated::valid)
///         .unwrap_or_else(|_| Validated::invalid(vec![format!("not a number: {}", s)]))
/// }
///
/// assert_eq!(traverse(["1", "2"], parse), Validated::Valid(vec![1, 2]));
/// assert_eq!(
///     traverse(["x", "2", "y"], parse),
///     Validated::Invalid(vec!["not a number: x".to_string(), "not a number: y".to_string()])
/// );
/// ```
pub fn traverse<T, E, A, F, I>(items: I, f: F) -> Validated<E, Vec<A>>
where
    E: Semigroup,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Validated<E, A>,
{
    Validated::sequence(items.into_iter().map(f))
}

/// Combine a tuple of validations with heterogeneous value types.
///
/// Implemented for tuples of two to six validations sharing one error type.
pub trait ValidateAll<E: Semigroup> {
    /// The tuple of values when every validation succeeds
    type Output;

    /// Combine all validations, accumulating errors left to right
    fn validate_all(self) -> Validated<E, Self::Output>;
}

/// Combine a tuple of validations.
///
/// # Examples
///
/// ```
/// use accrete::{all, Validated};
///
/// let result = all((
///     Validated::<Vec<&str>, _>::valid("Ada"),
///     Validated::valid(36u8),
///     Validated::valid(true),
/// ));
/// assert_eq!(result, Validated::Valid(("Ada", 36, true)));
/// ```
pub fn all<E, V>(validations: V) -> Validated<E, V::Output>
where
    E: Semigroup,
    V: ValidateAll<E>,
{
    validations.validate_all()
}

// Curries a tuple constructor so it can be fed one `apply` per component.
macro_rules! impl_validate_all {
    (@curry [$v:ident $T:ident] $body:expr) => {
        move |$v: $T| $body
    };
    (@curry [$v:ident $T:ident, $($rest_v:ident $rest_T:ident),+] $body:expr) => {
        move |$v: $T| impl_validate_all!(@curry [$($rest_v $rest_T),+] $body)
    };
    ($($v:ident $T:ident),+) => {
        impl<E: Semigroup, $($T),+> ValidateAll<E> for ($(Validated<E, $T>,)+) {
            type Output = ($($T,)+);

            fn validate_all(self) -> Validated<E, Self::Output> {
                let ($($v,)+) = self;
                Validated::<E, _>::Valid(impl_validate_all!(@curry [$($v $T),+] ($($v,)+)))
                    $(.apply($v))+
            }
        }
    };
}

impl_validate_all!(a A, b B);
impl_validate_all!(a A, b B, c C);
impl_validate_all!(a A, b B, c C, d D);
impl_validate_all!(a A, b B, c C, d D, e5 E5);
impl_validate_all!(a A, b B, c C, d D, e5 E5, f F);

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(x: i32) -> Validated<Vec<String>, i32> {
        if x > 0 {
            Validated::valid(x)
        } else {
            Validated::invalid(vec![format!("{} is not positive", x)])
        }
    }

    #[test]
    fn test_sequence_empty() {
        let result = Validated::<Vec<String>, i32>::sequence(Vec::new());
        assert_eq!(result, Validated::Valid(vec![]));
    }

    #[test]
    fn test_sequence_all_valid() {
        let result = sequence(vec![positive(1), positive(2), positive(3)]);
        assert_eq!(result, Validated::Valid(vec![1, 2, 3]));
    }

    #[test]
    fn test_traverse_keeps_every_failure_in_order() {
        let result = traverse(vec![1, -2, 3, -4], positive);
        assert_eq!(
            result,
            Validated::Invalid(vec![
                "-2 is not positive".to_string(),
                "-4 is not positive".to_string(),
            ])
        );
    }

    #[test]
    fn test_validate_all_two() {
        let result = (positive(1), positive(2)).validate_all();
        assert_eq!(result, Validated::Valid((1, 2)));
    }

    #[test]
    fn test_validate_all_mixed_types() {
        let name = Validated::<Vec<&str>, _>::valid("Ada".to_string());
        let age = Validated::valid(36u8);
        let admin = Validated::valid(false);
        let email = Validated::valid("ada@example.com");
        assert_eq!(
            all((name, age, admin, email)),
            Validated::Valid(("Ada".to_string(), 36, false, "ada@example.com"))
        );
    }

    #[test]
    fn test_validate_all_accumulates() {
        let result = all((
            Validated::<_, i32>::invalid(vec!["e1"]),
            Validated::valid(2),
            Validated::<_, i32>::invalid(vec!["e3"]),
            Validated::valid(4),
            Validated::<_, i32>::invalid(vec!["e5"]),
            Validated::valid(6),
        ));
        assert_eq!(result, Validated::Invalid(vec!["e1", "e3", "e5"]));
    }
}
