//! Hash algorithms exposed by the crate.
//!
//! Currently includes BLAKE2b (RFC 7693) with a pure-Rust implementation,
//! plus the Argon2 variable-length construction H' built on top of it.

pub mod blake2b;

/// Re-exports of the BLAKE2b convenience functions.
pub use blake2b::core::{blake2b, blake2b512};
pub use blake2b::long::blake2b_long;
