//! The Optional container.
//!
//! Two logical states, fixed at construction: `Present` holds exactly one
//! value, `Empty` holds none. Instances are never mutated in place; every
//! transformation consumes the source and produces a new, independent
//! container.

use serde::{Deserialize, Serialize};

use crate::digest::{empty_digest, DebugHash};
use crate::error::OptionalError;

/// A container holding either exactly one value of type `T`, or no value.
///
/// Absence is a variant, not a sentinel, so a "null" can never be stored
/// as a present value. Interop with nullable external data goes through
/// [`Optional::of_nullable`] and [`Optional::of_required`], which accept a
/// `std::option::Option<T>` at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Optional<T> {
    /// The container holds a value.
    Present(T),
    /// The container holds no value.
    #[default]
    Empty,
}

impl<T> Optional<T> {
    /// Wrap a value that is known to exist at this call site.
    pub fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Strict nullable-boundary constructor: absence here is caller misuse.
    ///
    /// # Errors
    ///
    /// [`OptionalError::InvalidArgument`] when `value` is `None`.
    pub fn of_required(value: Option<T>) -> Result<Self, OptionalError> {
        match value {
            Some(value) => Ok(Self::Present(value)),
            None => Err(OptionalError::InvalidArgument(
                "value cannot be absent".to_string(),
            )),
        }
    }

    /// Tolerant nullable-boundary constructor: `None` yields an empty
    /// container, `Some(v)` a present one.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }

    /// An empty container.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// True iff the container holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Return the held value.
    ///
    /// # Errors
    ///
    /// [`OptionalError::NoSuchElement`] when empty. This is the only
    /// operation that fails solely due to absence; check
    /// [`Optional::is_present`] first or use one of the `or_else`
    /// fallbacks.
    pub fn get(self) -> Result<T, OptionalError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(OptionalError::NoSuchElement),
        }
    }

    /// Return the held value, or `fallback` when empty.
    ///
    /// `fallback` is evaluated eagerly by the caller; use
    /// [`Optional::or_else_get`] when the fallback is expensive.
    pub fn or_else(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => fallback,
        }
    }

    /// Return the held value, or invoke `supplier` for one when empty.
    ///
    /// The supplier runs at most once, and only when empty.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => supplier(),
        }
    }

    /// Return the held value, or surface an error built by `supplier`.
    ///
    /// The error value is propagated unmodified; the container does not
    /// construct, wrap, or interpret it. The supplier runs at most once,
    /// and only when empty.
    ///
    /// # Errors
    ///
    /// Whatever `supplier` produces, when empty.
    pub fn or_else_throw<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(supplier()),
        }
    }

    /// Invoke `consumer` with the held value exactly once when present;
    /// do nothing when empty.
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = self {
            consumer(value);
        }
    }

    /// Transform the held value, tolerating an absent result.
    ///
    /// When present, `mapper` runs exactly once and its result is wrapped
    /// with the same tolerance as [`Optional::of_nullable`]: a `None` from
    /// the mapper yields an empty container, not an error. When empty, the
    /// mapper never runs and the result is empty.
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Optional::of_nullable(mapper(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Transform the held value with an `Optional`-bearing mapper.
    ///
    /// When present, `mapper` runs exactly once and its result is passed
    /// through unchanged, with no re-wrapping. When empty, the mapper
    /// never runs and the result is empty.
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => mapper(value),
            Self::Empty => Optional::Empty,
        }
    }
}

impl<T: DebugHash> Optional<T> {
    /// Content-derived debug digest string.
    ///
    /// Present plain values digest their serialized bytes; present
    /// [`Shared`] handles digest their allocation address, so two
    /// field-equal instances hash differently on purpose, matching the
    /// identity equality policy. Empty digests the serialized sentinel, a
    /// fixed constant.
    ///
    /// [`Shared`]: crate::Shared
    pub fn hash_code(&self) -> String {
        match self {
            Self::Present(value) => value.debug_hash(),
            Self::Empty => empty_digest(),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}
