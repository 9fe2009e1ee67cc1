//! Password-based derivation algorithms.
//!
//! Currently Argon2id (RFC 9106). The exports here are the raw engine:
//! a password and salt in, a tag out. The PHC string format and the
//! salt-generating convenience layer live in `phc` and `password`.

pub mod argon2id;

/// Re-exports of the Argon2id entry point and its parameter types.
pub use argon2id::core::argon2id;
pub use argon2id::params::{InvalidParameters, Params};
