//! # Optional
//!
//! A container object which may or may not hold a value. If a value is
//! present, [`Optional::is_present`] returns true and [`Optional::get`]
//! returns the value. Combinators covering the common presence/absence
//! patterns are provided, such as [`Optional::or_else`] (fallback when
//! empty) and [`Optional::if_present`] (run a closure against the value).
//!
//! ## Components
//!
//! | Module | Contents |
//! |--------|----------|
//! | `optional` | The [`Optional`] container and its combinators |
//! | `shared` | [`Shared`], an identity-compared handle for object values |
//! | `digest` | [`DebugHash`] debug digests (BLAKE3 over bincode bytes) |
//! | `error` | [`OptionalError`] taxonomy |
//!
//! ## Equality policy
//!
//! Plain values compare structurally through `PartialEq`. Object-like
//! values wrapped in [`Shared`] compare by instance identity: two handles
//! are equal only when they point at the same allocation, regardless of
//! field contents. The debug digest follows the same policy.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod digest;
pub mod error;
pub mod optional;
pub mod shared;

// Re-exports
pub use digest::DebugHash;
pub use error::OptionalError;
pub use optional::Optional;
pub use shared::Shared;
