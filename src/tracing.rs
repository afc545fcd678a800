//! Tracing support for validation pipelines.
//!
//! This module provides [`ValidatedTracingExt`], which records the outcome of a
//! validation as a `tracing` event without changing it. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use std::fmt::Debug;

use crate::Validated;

/// Extension trait for recording validation outcomes.
///
/// # Example
///
/// ```rust
/// use accrete::Validated;
/// use accrete::tracing::ValidatedTracingExt;
///
/// let age = Validated::<Vec<&str>, u8>::invalid(vec!["bad age"]).trace_outcome("age");
/// assert!(age.is_invalid());
/// ```
pub trait ValidatedTracingExt: Sized {
    /// Emit a `debug` event when valid, or a `warn` event carrying the
    /// accumulated error when invalid. Returns `self` unchanged.
    fn trace_outcome(self, label: &str) -> Self;
}

impl<E: Debug, A> ValidatedTracingExt for Validated<E, A> {
    fn trace_outcome(self, label: &str) -> Self {
        match &self {
            Validated::Valid(_) => tracing::debug!(label, "validation passed"),
            Validated::Invalid(errors) => tracing::warn!(label, ?errors, "validation failed"),
        }
        self
    }
}
