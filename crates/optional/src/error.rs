//! Error types for the Optional container.

use thiserror::Error;

/// Errors that can occur when constructing or inspecting an [`Optional`].
///
/// Every failure is surfaced synchronously to the immediate caller; the
/// container never catches, wraps, or retries anything.
///
/// [`Optional`]: crate::Optional
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionalError {
    /// Caller misuse: a constructor that requires a value was given none.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The container was asked for its value while empty.
    #[error("No value present")]
    NoSuchElement,
}
