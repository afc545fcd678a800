//! Semigroup trait: the minimal error-combination algebra
//!
//! A Semigroup is a type with an associative binary operation. It is the smallest
//! algebra [`Validated`](crate::Validated) needs in order to accumulate errors: when
//! two independent computations both fail, their errors are merged with `combine`
//! instead of the second one being thrown away.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Commutativity is *not* required. `Vec<T>` keeps errors in left-then-right order,
//! which is exactly the order in which a caller wrote the validations.
//!
//! # Examples
//!
//! ```
//! use accrete::Semigroup;
//!
//! let v1 = vec!["bad name"];
//! let v2 = vec!["bad age"];
//! assert_eq!(v1.combine(v2), vec!["bad name", "bad age"]);
//!
//! // Tuples combine component-wise
//! let t1 = (vec![1], "a".to_string());
//! let t2 = (vec![2], "b".to_string());
//! assert_eq!(t1.combine(t2), (vec![1, 2], "ab".to_string()));
//! ```
//!
//! # Custom Implementations
//!
//! ```
//! use accrete::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct FieldErrors(Vec<(String, String)>);
//!
//! impl Semigroup for FieldErrors {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// [`testing::laws::semigroup_associative`](crate::testing::laws::semigroup_associative)
/// checks this for concrete triples.
///
/// # Note on Ownership
///
/// The `combine` method takes `self` by value, not by reference. If you need to
/// preserve the original values, you must clone them before combining.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use accrete::Semigroup;
    ///
    /// let result = vec![1, 2].combine(vec![3, 4]);
    /// assert_eq!(result, vec![1, 2, 3, 4]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// `None` acts as an identity; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup_keeps_order() {
        let v1 = vec!["bad name"];
        let v2 = vec!["bad age"];
        assert_eq!(v1.combine(v2), vec!["bad name", "bad age"]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let v1: Vec<i32> = vec![];
        assert_eq!(v1.combine(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_string_semigroup() {
        let s1 = "Hello, ".to_string();
        assert_eq!(s1.combine("World!".to_string()), "Hello, World!");
    }

    #[test]
    fn test_option_semigroup() {
        assert_eq!(Some(vec![1]).combine(Some(vec![2])), Some(vec![1, 2]));
        assert_eq!(Some(vec![1]).combine(None), Some(vec![1]));
        assert_eq!(None::<Vec<i32>>.combine(Some(vec![2])), Some(vec![2]));
        assert_eq!(None::<Vec<i32>>.combine(None), None);
    }

    #[test]
    fn test_tuple_3_semigroup() {
        let t1 = (vec![1], "a".to_string(), vec!["x"]);
        let t2 = (vec![2], "b".to_string(), vec!["y"]);
        assert_eq!(
            t1.combine(t2),
            (vec![1, 2], "ab".to_string(), vec!["x", "y"])
        );
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3, 4];
        let c = vec![5, 6];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_vec_is_not_commutative() {
        let a = vec!["first"];
        let b = vec!["second"];
        assert_ne!(a.clone().combine(b.clone()), b.combine(a));
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_vec_associativity(a: Vec<i32>, b: Vec<i32>, c: Vec<i32>) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_string_associativity(a: String, b: String, c: String) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_option_associativity(
                a: Option<Vec<u8>>,
                b: Option<Vec<u8>>,
                c: Option<Vec<u8>>
            ) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }

            #[test]
            fn prop_tuple_associativity(
                a: (Vec<u8>, String),
                b: (Vec<u8>, String),
                c: (Vec<u8>, String)
            ) {
                let left = a.clone().combine(b.clone()).combine(c.clone());
                let right = a.combine(b.combine(c));
                prop_assert_eq!(left, right);
            }
        }
    }
}
