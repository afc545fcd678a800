//! Testing utilities for validations and error algebras
//!
//! This module provides assertion macros for [`Validated`](crate::Validated) values, law
//! checkers for user-defined error algebras, and (behind the `proptest` feature) an `Arbitrary`
//! implementation so validations can be generated in property tests.
//!
//! # Assertion Macros
//!
//! ```rust
//! use accrete::{Validated, assert_valid, assert_invalid};
//!
//! let ok = Validated::<Vec<String>, _>::valid(42);
//! assert_valid!(ok);
//!
//! let bad = Validated::<_, i32>::invalid(vec!["error".to_string()]);
//! assert_invalid!(bad);
//! ```
//!
//! # Checking Your Own Error Type
//!
//! ```rust
//! use accrete::Semigroup;
//! use accrete::testing::laws;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Worst(u8);
//!
//! impl Semigroup for Worst {
//!     fn combine(self, other: Self) -> Self {
//!         Worst(self.0.max(other.0))
//!     }
//! }
//!
//! let (a, b, c) = (Worst(1), Worst(7), Worst(3));
//! assert!(laws::semigroup_associative(&a, &b, &c));
//! ```

/// Assert that a validation is `Valid`.
///
/// Panics with the accumulated error if it is `Invalid`.
///
/// # Example
///
/// ```rust
/// use accrete::{Validated, assert_valid};
///
/// assert_valid!(Validated::<Vec<String>, _>::valid(42));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Valid(_) => {}
            $crate::Validated::Invalid(e) => {
                panic!("Expected Valid, got Invalid: {:?}", e);
            }
        }
    };
}

/// Assert that a validation is `Invalid`.
///
/// # Example
///
/// ```rust
/// use accrete::{Validated, assert_invalid};
///
/// assert_invalid!(Validated::<_, i32>::invalid(vec!["error"]));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Invalid(_) => {}
            $crate::Validated::Valid(v) => {
                panic!("Expected Invalid, got Valid: {:?}", v);
            }
        }
    };
}

/// Assert that a validation is `Invalid` with exactly the expected error.
///
/// # Example
///
/// ```rust
/// use accrete::{Validated, assert_validation_errors};
///
/// let v = Validated::<_, i32>::invalid(vec!["error1", "error2"]);
/// assert_validation_errors!(v, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validated:expr, $expected:expr) => {
        match $validated {
            $crate::Validated::Invalid(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validated::Valid(v) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Checkers for the algebraic laws error types are expected to obey.
///
/// Each function evaluates one law on concrete values and returns whether it
/// held, which makes them usable both in plain `assert!` and in `prop_assert!`.
pub mod laws {
    use crate::{Monoid, NearSemiring, Semigroup};

    /// `(a <> b) <> c == a <> (b <> c)`
    pub fn semigroup_associative<S>(a: &S, b: &S, c: &S) -> bool
    where
        S: Semigroup + Clone + PartialEq,
    {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.clone().combine(b.clone().combine(c.clone()));
        left == right
    }

    /// `empty <> a == a` and `a <> empty == a`
    pub fn monoid_identity<M>(a: &M) -> bool
    where
        M: Monoid + Clone + PartialEq,
    {
        M::empty().combine(a.clone()) == *a && a.clone().combine(M::empty()) == *a
    }

    /// `(a + b) + c == a + (b + c)` for `choose`
    pub fn choose_associative<N>(a: &N, b: &N, c: &N) -> bool
    where
        N: NearSemiring + Clone + PartialEq,
    {
        let left = a.clone().choose(b.clone()).choose(c.clone());
        let right = a.clone().choose(b.clone().choose(c.clone()));
        left == right
    }

    /// `a * (b + c) == (a * b) + (a * c)`
    ///
    /// `*` is [`Semigroup::combine`], the product every sequencing combinator on
    /// [`Validated`](crate::Validated) uses.
    pub fn left_distributive<N>(a: &N, b: &N, c: &N) -> bool
    where
        N: NearSemiring + Clone + PartialEq,
    {
        let left = a.clone().combine(b.clone().choose(c.clone()));
        let right = a
            .clone()
            .combine(b.clone())
            .choose(a.clone().combine(c.clone()));
        left == right
    }

    /// `(a + b) * c == (a * c) + (b * c)`, with `*` as [`Semigroup::combine`]
    pub fn right_distributive<N>(a: &N, b: &N, c: &N) -> bool
    where
        N: NearSemiring + Clone + PartialEq,
    {
        let left = a.clone().choose(b.clone()).combine(c.clone());
        let right = a
            .clone()
            .combine(c.clone())
            .choose(b.clone().combine(c.clone()));
        left == right
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<E, A> Arbitrary for crate::Validated<E, A>
where
    E: Arbitrary + 'static,
    A: Arbitrary + 'static,
    E::Strategy: 'static,
    A::Strategy: 'static,
{
    type Parameters = (E::Parameters, A::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, a_params) = args;
        prop_oneof![
            any_with::<E>(e_params).prop_map(crate::Validated::invalid),
            any_with::<A>(a_params).prop_map(crate::Validated::valid),
        ]
        .boxed()
    }
}
