//! Debug digests for contained values.
//!
//! The digest is a hex-encoded BLAKE3 hash over the value's bincode
//! serialization. It exists for debugging and logging, not as a stable
//! structural hash: [`Shared`] handles digest their pointer address, so
//! two field-equal instances produce different digests on purpose,
//! mirroring the identity equality policy.
//!
//! [`Shared`]: crate::Shared

use serde::Serialize;
use tracing::warn;

/// Fed to the hasher when a value refuses to serialize. Collisions between
/// such values are acceptable for a debug digest.
const UNSERIALIZABLE_MARKER: &[u8] = b"<unserializable>";

/// A value that can report a debug digest of itself.
///
/// Implemented for the primitive and string types (content digest) and for
/// [`Shared`] (identity digest).
///
/// [`Shared`]: crate::Shared
pub trait DebugHash {
    /// Hex-encoded BLAKE3 digest string.
    fn debug_hash(&self) -> String;
}

/// Digest a serializable value's byte form (one-shot).
pub fn value_digest<T: Serialize + ?Sized>(value: &T) -> String {
    match bincode::serialize(value) {
        Ok(bytes) => hex::encode(blake3::hash(&bytes).as_bytes()),
        Err(err) => {
            warn!(error = %err, "value could not be serialized for debug digest");
            hex::encode(blake3::hash(UNSERIALIZABLE_MARKER).as_bytes())
        }
    }
}

/// Digest of the serialized "no value" sentinel. Constant across calls.
pub fn empty_digest() -> String {
    value_digest(&None::<()>)
}

macro_rules! impl_debug_hash {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DebugHash for $ty {
                fn debug_hash(&self) -> String {
                    value_digest(self)
                }
            }
        )*
    };
}

impl_debug_hash!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl<T: DebugHash + ?Sized> DebugHash for &T {
    fn debug_hash(&self) -> String {
        (**self).debug_hash()
    }
}

impl<T: Serialize> DebugHash for Vec<T> {
    fn debug_hash(&self) -> String {
        value_digest(self)
    }
}
