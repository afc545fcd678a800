//! Near-semiring: the full error-combination algebra
//!
//! A [`Semigroup`] gives errors one way to combine: *both* computations failed, so
//! keep both failures. Validation with fallbacks needs a second way: *either*
//! alternative would have been acceptable, and both failed. A `NearSemiring`
//! provides the two operations side by side:
//!
//! - `multiply` sequences failures (AND). It is the semigroup `combine` under its
//!   algebraic name, and it is what [`Validated::apply`](crate::Validated::apply) uses.
//! - `choose` merges the failures of alternatives (OR). It is what
//!   [`Validated::or_else`](crate::Validated::or_else) uses.
//!
//! # Laws
//!
//! Both operations are associative, and `multiply` distributes over `choose` from
//! both sides:
//!
//! ```text
//! a.choose(b).choose(c)   == a.choose(b.choose(c))
//! a.multiply(b.choose(c)) == a.multiply(b).choose(a.multiply(c))   (left)
//! a.choose(b).multiply(c) == a.multiply(c).choose(b.multiply(c))   (right)
//! ```
//!
//! Distributivity is what allows a validation that mixes fallbacks and sequencing
//! to be regrouped without changing the reported failure.
//!
//! # Examples
//!
//! ```
//! use accrete::{Alternatives, Multiply, NearSemiring};
//!
//! // Either the email or the phone number would do, and each failed.
//! let contact = Alternatives::single("bad email").choose(Alternatives::single("bad phone"));
//!
//! // ...and the name failed too, independently.
//! let report = Alternatives::single("bad name").multiply(contact);
//!
//! let paths: Vec<_> = report.paths().cloned().collect();
//! assert_eq!(
//!     paths,
//!     vec![vec!["bad name", "bad email"], vec!["bad name", "bad phone"]]
//! );
//! ```

use std::collections::BTreeSet;

use crate::{Monoid, Semigroup};

/// An error algebra with a choice operation and a sequential product.
///
/// The sequential product is the [`Semigroup`] operation; implementors only add
/// `choose`. See the [module documentation](self) for the laws.
pub trait NearSemiring: Semigroup {
    /// Merge the failures of two alternatives.
    fn choose(self, other: Self) -> Self;
}

/// The sequential product of a [`NearSemiring`], under its algebraic name.
///
/// Every near-semiring gets this through a blanket impl that forwards to
/// [`Semigroup::combine`], so `multiply` and the combinators on
/// [`Validated`](crate::Validated) can never disagree.
///
/// # Example
///
/// ```
/// use accrete::{Cheapest, Multiply, Semigroup};
///
/// assert_eq!(Cheapest(2u32).multiply(Cheapest(3)), Cheapest(2).combine(Cheapest(3)));
/// ```
pub trait Multiply: NearSemiring {
    /// Sequence two failures.
    fn multiply(self, other: Self) -> Self;
}

impl<N: NearSemiring> Multiply for N {
    #[inline]
    fn multiply(self, other: Self) -> Self {
        self.combine(other)
    }
}

/// A non-empty set of alternative failure paths.
///
/// Each path is the sequence of errors produced along one way of satisfying a
/// validation; the set lists every way that was tried. `choose` takes the union of
/// the two sets, `multiply` extends every path on the left with every path on the
/// right.
///
/// Paths are kept in a `BTreeSet`, so the order in which alternatives are offered
/// does not matter and duplicate paths collapse. Both distributive laws hold.
///
/// There is always at least one path. A set with no paths would absorb every other
/// failure under `multiply`, so none of the constructors can produce one.
///
/// # Example
///
/// ```
/// use accrete::{Alternatives, NearSemiring};
///
/// let a = Alternatives::single("no @ in email");
/// let b = Alternatives::single("phone too short");
/// assert_eq!(a.choose(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alternatives<E: Ord> {
    paths: BTreeSet<Vec<E>>,
}

impl<E: Ord> Alternatives<E> {
    /// Build from a first path and any number of further paths.
    ///
    /// # Example
    ///
    /// ```
    /// use accrete::Alternatives;
    ///
    /// let alts = Alternatives::new(vec!["bad email"], [vec!["bad phone"]]);
    /// assert_eq!(alts.len(), 2);
    /// ```
    pub fn new(head: Vec<E>, rest: impl IntoIterator<Item = Vec<E>>) -> Self {
        let mut paths: BTreeSet<Vec<E>> = rest.into_iter().collect();
        paths.insert(head);
        Self { paths }
    }

    /// A single path holding a single error.
    pub fn single(error: E) -> Self {
        Self::path(vec![error])
    }

    /// A single path made of the given errors, in order.
    pub fn path(errors: impl IntoIterator<Item = E>) -> Self {
        Self::new(errors.into_iter().collect(), std::iter::empty())
    }

    /// Build from any number of paths.
    ///
    /// Returns `None` when there are no paths.
    ///
    /// # Example
    ///
    /// ```
    /// use accrete::Alternatives;
    ///
    /// assert!(Alternatives::<&str>::from_paths(Vec::new()).is_none());
    /// assert!(Alternatives::from_paths(vec![vec!["e"]]).is_some());
    /// ```
    pub fn from_paths(paths: impl IntoIterator<Item = Vec<E>>) -> Option<Self> {
        let paths: BTreeSet<Vec<E>> = paths.into_iter().collect();
        if paths.is_empty() {
            None
        } else {
            Some(Self { paths })
        }
    }

    /// Iterate the paths in ascending order.
    pub fn paths(&self) -> impl Iterator<Item = &Vec<E>> {
        self.paths.iter()
    }

    /// Number of distinct paths. Always at least one.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always `false`; present for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consume into the underlying set.
    pub fn into_paths(self) -> BTreeSet<Vec<E>> {
        self.paths
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for Alternatives<E>
where
    E: Ord + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<E: Ord> {
            paths: BTreeSet<Vec<E>>,
        }

        let raw = Raw::<E>::deserialize(deserializer)?;
        Self::from_paths(raw.paths)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one failure path"))
    }
}

impl<E: Ord + Clone> Semigroup for Alternatives<E> {
    fn combine(self, other: Self) -> Self {
        let mut paths = BTreeSet::new();
        for left in &self.paths {
            for right in &other.paths {
                let mut path = Vec::with_capacity(left.len() + right.len());
                path.extend(left.iter().cloned());
                path.extend(right.iter().cloned());
                paths.insert(path);
            }
        }
        Self { paths }
    }
}

impl<E: Ord + Clone> NearSemiring for Alternatives<E> {
    fn choose(mut self, other: Self) -> Self {
        self.paths.extend(other.paths);
        self
    }
}

// The single empty path leaves every path unchanged under `multiply`.
impl<E: Ord + Clone> Monoid for Alternatives<E> {
    fn empty() -> Self {
        Self::path(std::iter::empty())
    }
}

/// The cost of a failure: alternatives keep the cheapest, sequencing adds up.
///
/// This is the tropical (min, +) algebra over unsigned integers. Addition saturates
/// at the type's maximum, which keeps it associative and monotone, so both laws
/// still hold at the boundary.
///
/// # Example
///
/// ```
/// use accrete::{Cheapest, NearSemiring, Semigroup};
///
/// assert_eq!(Cheapest(3u32).combine(Cheapest(4)), Cheapest(7));
/// assert_eq!(Cheapest(3u32).choose(Cheapest(4)), Cheapest(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cheapest<T>(pub T);

macro_rules! impl_cheapest {
    ($($t:ty),+) => {
        $(
            impl Semigroup for Cheapest<$t> {
                #[inline]
                fn combine(self, other: Self) -> Self {
                    Cheapest(self.0.saturating_add(other.0))
                }
            }

            impl NearSemiring for Cheapest<$t> {
                #[inline]
                fn choose(self, other: Self) -> Self {
                    Cheapest(self.0.min(other.0))
                }
            }

            impl Monoid for Cheapest<$t> {
                fn empty() -> Self {
                    Cheapest(0)
                }
            }
        )+
    };
}

impl_cheapest!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_near_semiring_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: NearSemiring),+> NearSemiring for ($($T,)+) {
            #[inline]
            fn choose(self, other: Self) -> Self {
                (
                    $(self.$idx.choose(other.$idx)),+
                )
            }
        }
    };
}

impl_near_semiring_tuple!(0 T1, 1 T2);
impl_near_semiring_tuple!(0 T1, 1 T2, 2 T3);
impl_near_semiring_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
