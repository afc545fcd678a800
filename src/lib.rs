//! # Accrete
//!
//! Composable validation that accumulates *every* failure.
//!
//! Ordinary error propagation (`Result` and `?`) stops at the first failure. When
//! a caller validates a form, a config file or a request, it wants all the
//! problems at once. [`Validated`] combines independent computations and merges
//! their errors with an algebra supplied by the error type:
//!
//! - [`Semigroup`]: one associative `combine`, used when sequencing.
//! - [`NearSemiring`]: adds `choose` for alternatives, so a validation can fall
//!   back to a second option with [`Validated::or_else`] and still report both
//!   failures if neither works.
//!
//! ## Quick Example
//!
//! ```rust
//! use accrete::Validated;
//!
//! fn validate_email(email: &str) -> Validated<Vec<String>, String> {
//!     if email.contains('@') {
//!         Validated::valid(email.to_string())
//!     } else {
//!         Validated::invalid(vec!["Email must contain @".to_string()])
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validated<Vec<String>, i32> {
//!     if age >= 18 {
//!         Validated::valid(age)
//!     } else {
//!         Validated::invalid(vec!["Must be 18 or older".to_string()])
//!     }
//! }
//!
//! let result = validate_email("nope").map2(validate_age(12), |email, age| (email, age));
//!
//! assert_eq!(
//!     result,
//!     Validated::Invalid(vec![
//!         "Email must contain @".to_string(),
//!         "Must be 18 or older".to_string(),
//!     ])
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Validated`], [`Alternatives`] and [`Cheapest`]
//! - `tracing`: `ValidatedTracingExt::trace_outcome` for recording outcomes
//! - `proptest`: `Arbitrary` for [`Validated`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod monoid;
pub mod near_semiring;
pub mod semigroup;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod validated;

// Re-exports
pub use monoid::Monoid;
pub use near_semiring::{Alternatives, Cheapest, Multiply, NearSemiring};
pub use semigroup::Semigroup;
pub use validated::{all, pure, sequence, traverse, ValidateAll, Validated};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::monoid::Monoid;
    pub use crate::near_semiring::{Alternatives, Cheapest, Multiply, NearSemiring};
    pub use crate::semigroup::Semigroup;
    #[cfg(feature = "tracing")]
    pub use crate::tracing::ValidatedTracingExt;
    pub use crate::validated::{pure, ValidateAll, Validated};
}
