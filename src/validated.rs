//! Validated type for accumulating errors
//!
//! This module provides [`Validated`], a two-variant result type designed for
//! validation: when independent computations fail, combining them keeps *every*
//! failure instead of stopping at the first one.
//!
//! The operations available depend on what the error type can do:
//!
//! | Bound on `E` | Operations |
//! |---|---|
//! | none | `fold`, `map`, `map_err`, `bimap`, `and_then`, conversions, `Eq`, `Ord` |
//! | [`Semigroup`] | `apply`, `map2`, `zip`, `sequence`, `traverse`, `validate_all` |
//! | [`NearSemiring`](crate::NearSemiring) | `or_else`, `or`, `first_valid` |
//!
//! # Examples
//!
//! ## Accumulating errors
//!
//! ```
//! use accrete::Validated;
//!
//! let name = Validated::<_, String>::invalid(vec!["bad name"]);
//! let age = Validated::<_, u8>::invalid(vec!["bad age"]);
//!
//! let person = name.map2(age, |name, age| (name, age));
//! assert_eq!(person, Validated::Invalid(vec!["bad name", "bad age"]));
//! ```
//!
//! ## Applicative style
//!
//! ```
//! use accrete::{pure, Validated};
//!
//! let add = pure::<Vec<&str>, _>(|a: i32| move |b: i32| a + b);
//! let sum = add.apply(Validated::valid(2)).apply(Validated::valid(3));
//! assert_eq!(sum, Validated::Valid(5));
//! ```

use crate::{Monoid, Semigroup};

mod alt;
mod traverse;

pub use traverse::{all, sequence, traverse, ValidateAll};

/// A validation that either holds a value or an accumulated error
///
/// Unlike `Result`, combining two `Validated` values with [`apply`](Validated::apply)
/// (or anything built on it) merges the errors of *both* sides when both fail, using
/// the error type's [`Semigroup`] instance.
///
/// # Type Parameters
///
/// * `E` - The accumulated error
/// * `A` - The success value
///
/// # Ordering
///
/// Every `Invalid` sorts strictly before every `Valid`; values of the same variant
/// compare by their payload.
///
/// ```
/// use accrete::Validated;
///
/// let bad = Validated::<u32, u32>::Invalid(99);
/// let good = Validated::<u32, u32>::Valid(0);
/// assert!(bad < good);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<E, A> {
    // Variant order is significant: the derived ordering ranks `Invalid` first.
    /// Failed validation with the accumulated error
    Invalid(E),
    /// Successful validation with a value
    Valid(A),
}

/// Lift a plain value into a successful validation.
///
/// This is the applicative unit: `pure(f).apply(pure(a)) == pure(f(a))`.
///
/// # Examples
///
/// ```
/// use accrete::{pure, Validated};
///
/// let v = pure::<String, _>(5);
/// assert_eq!(v, Validated::Valid(5));
/// ```
#[inline]
pub fn pure<E, A>(value: A) -> Validated<E, A> {
    Validated::Valid(value)
}

impl<E, A> Validated<E, A> {
    /// Create a successful validation
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<String, i32>::valid(42);
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn valid(value: A) -> Self {
        Validated::Valid(value)
    }

    /// Create a failed validation
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<Vec<&str>, i32>::invalid(vec!["error"]);
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validated::Invalid(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validated::Valid(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::Invalid(error),
        }
    }

    /// Convert this validation to a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<String, _>::valid(42);
    /// assert_eq!(v.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(error) => Err(error),
        }
    }

    /// Eliminate the wrapper, handling each variant with its own function.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<Vec<&str>, i32>::invalid(vec!["a", "b"]);
    /// let summary = v.fold(|errors| format!("{} errors", errors.len()), |n| n.to_string());
    /// assert_eq!(summary, "2 errors");
    /// ```
    #[inline]
    pub fn fold<C, F, G>(self, on_invalid: F, on_valid: G) -> C
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> C,
    {
        match self {
            Validated::Valid(value) => on_valid(value),
            Validated::Invalid(error) => on_invalid(error),
        }
    }

    /// Check if this validation holds a value
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.as_ref().fold(|_| false, |_| true)
    }

    /// Check if this validation holds an error
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrow the contents.
    #[inline]
    pub fn as_ref(&self) -> Validated<&E, &A> {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(error) => Validated::Invalid(error),
        }
    }

    /// The value, if valid.
    #[inline]
    pub fn ok(self) -> Option<A> {
        self.fold(|_| None, Some)
    }

    /// The accumulated error, if invalid.
    #[inline]
    pub fn err(self) -> Option<E> {
        self.fold(Some, |_| None)
    }

    /// Transform the value if present; errors pass through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<String, _>::valid(5);
    /// assert_eq!(v.map(|x| x * 2), Validated::Valid(10));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(error) => Validated::Invalid(error),
        }
    }

    /// Transform the error if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<_, i32>::invalid(vec!["error"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validated::Invalid(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validated<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(error) => Validated::Invalid(f(error)),
        }
    }

    /// Transform whichever side is present.
    ///
    /// `bimap(f, g)` is `map_err(f)` followed by `map(g)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<&str, i32>::invalid("too small");
    /// assert_eq!(v.bimap(str::len, |n| n + 1), Validated::Invalid(9));
    /// ```
    #[inline]
    pub fn bimap<E2, B, F, G>(self, on_invalid: F, on_valid: G) -> Validated<E2, B>
    where
        F: FnOnce(E) -> E2,
        G: FnOnce(A) -> B,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(on_valid(value)),
            Validated::Invalid(error) => Validated::Invalid(on_invalid(error)),
        }
    }

    /// Chain a dependent validation.
    ///
    /// This short-circuits: `f` only runs on a valid value, and a failure here
    /// is reported alone. Use [`apply`](Validated::apply) or
    /// [`map2`](Validated::map2) when the validations are independent and every
    /// failure should be reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v = Validated::<Vec<&str>, _>::valid(5);
    /// let result = v.and_then(|x| {
    ///     if x > 0 {
    ///         Validated::valid(x * 2)
    ///     } else {
    ///         Validated::invalid(vec!["must be positive"])
    ///     }
    /// });
    /// assert_eq!(result, Validated::Valid(10));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> Validated<E, B>,
    {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(error) => Validated::Invalid(error),
        }
    }
}

impl<E: Semigroup, F> Validated<E, F> {
    /// Apply a wrapped function to a wrapped argument, accumulating errors.
    ///
    /// | `self` | `arg` | result |
    /// |---|---|---|
    /// | `Valid(f)` | `Valid(a)` | `Valid(f(a))` |
    /// | `Valid(f)` | `Invalid(e)` | `Invalid(e)` |
    /// | `Invalid(e)` | `Valid(a)` | `Invalid(e)` |
    /// | `Invalid(e1)` | `Invalid(e2)` | `Invalid(e1.combine(e2))` |
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let f = Validated::<Vec<&str>, fn(i32) -> i32>::invalid(vec!["bad name"]);
    /// let a = Validated::<Vec<&str>, i32>::invalid(vec!["bad age"]);
    /// assert_eq!(f.apply(a), Validated::Invalid(vec!["bad name", "bad age"]));
    /// ```
    pub fn apply<A, B>(self, arg: Validated<E, A>) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, arg) {
            (Validated::Valid(f), Validated::Valid(a)) => Validated::Valid(f(a)),
            (Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e),
            (Validated::Invalid(e), Validated::Valid(_)) => Validated::Invalid(e),
            (Validated::Invalid(e1), Validated::Invalid(e2)) => Validated::Invalid(e1.combine(e2)),
        }
    }
}

impl<E: Semigroup, A> Validated<E, A> {
    /// Combine two independent validations with a two-argument function.
    ///
    /// Built as `self.map(curried f).apply(other)`, so failures on both sides are
    /// accumulated left then right.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let a = Validated::<Vec<&str>, _>::valid(2);
    /// let b = Validated::<Vec<&str>, _>::valid(3);
    /// assert_eq!(a.map2(b, |x, y| x * y), Validated::Valid(6));
    /// ```
    pub fn map2<B, C, F>(self, other: Validated<E, B>, f: F) -> Validated<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.map(move |a| move |b| f(a, b)).apply(other)
    }

    /// Pair two independent validations, accumulating errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Validated;
    ///
    /// let v1 = Validated::<_, i32>::invalid(vec!["error1"]);
    /// let v2 = Validated::<_, i32>::invalid(vec!["error2"]);
    /// assert_eq!(v1.zip(v2), Validated::Invalid(vec!["error1", "error2"]));
    /// ```
    #[inline]
    pub fn zip<B>(self, other: Validated<E, B>) -> Validated<E, (A, B)> {
        self.map2(other, |a, b| (a, b))
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    fn from(result: Result<A, E>) -> Self {
        Validated::from_result(result)
    }
}

impl<E, A> From<Validated<E, A>> for Result<A, E> {
    fn from(validated: Validated<E, A>) -> Self {
        validated.into_result()
    }
}

// Values combine when both sides are valid; errors accumulate otherwise.
impl<E: Semigroup, A: Semigroup> Semigroup for Validated<E, A> {
    fn combine(self, other: Self) -> Self {
        self.map2(other, A::combine)
    }
}

impl<E: Semigroup, A: Monoid> Monoid for Validated<E, A> {
    fn empty() -> Self {
        Validated::Valid(A::empty())
    }
}
