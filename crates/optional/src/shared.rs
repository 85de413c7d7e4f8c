//! Identity-compared handles for object values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::digest::{value_digest, DebugHash};

/// A shared handle to an object value, compared by instance identity.
///
/// Rust defaults to structural equality for composite types. `Shared`
/// deliberately opts out: two handles are equal only when they denote the
/// same allocation, never because their contents look alike. Cloning a
/// handle preserves identity, so a clone compares equal to its source.
///
/// The debug digest follows the same policy and hashes the allocation
/// address, so two field-equal instances report different digests while
/// one instance reports the same digest across calls.
pub struct Shared<T>(Arc<T>);

impl<T> Shared<T> {
    /// Move `value` into a fresh allocation and hand back its identity.
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// True when both handles denote the same allocation.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Shared<T> {}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.0).finish()
    }
}

impl<T> DebugHash for Shared<T> {
    fn debug_hash(&self) -> String {
        value_digest(&(Arc::as_ptr(&self.0) as usize))
    }
}
