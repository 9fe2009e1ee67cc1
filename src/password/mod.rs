//! Caller-facing password hashing operations.
//!
//! This layer ties the deterministic engine to the two things callers
//! actually do: create an encoded hash for storage, and check a password
//! against a stored hash later. Salt generation lives here and nowhere
//! else; the engine itself never touches randomness.
//!
//! Wrong passwords are a normal outcome (`Ok(false)`), not an error.
//! Errors are reserved for structural failures: invalid parameters and
//! malformed stored hashes. Callers must be able to tell "user typed the
//! wrong password" apart from "the stored hash is corrupt".

use rand::RngCore;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroize;

use crate::derivation::argon2id::core::argon2id;
use crate::derivation::argon2id::params::{InvalidParameters, Params};
use crate::phc::{HashOutput, MalformedEncoding};

/// Structural failures of the password operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Cost parameters violate an algorithm invariant.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] InvalidParameters),
    /// A stored hash string could not be parsed.
    #[error("malformed encoded hash: {0}")]
    MalformedEncoding(#[from] MalformedEncoding),
}

/// Hashes a password with a fresh random salt and returns the encoded
/// `$argon2id$...` string.
///
/// The salt is `params.salt_len` bytes from the thread-local CSPRNG,
/// generated per call and never reused.
pub fn hash_password(password: &[u8], params: &Params) -> Result<String, PasswordError> {
    params.validate()?;

    let mut salt = vec![0u8; params.salt_len];
    rand::rng().fill_bytes(&mut salt);

    hash_password_with_salt(password, &salt, params)
}

/// Hashes a password with a caller-supplied salt.
///
/// Deterministic given its inputs; useful for interoperability checks
/// and tests. Production callers should prefer [`hash_password`].
pub fn hash_password_with_salt(
    password: &[u8],
    salt: &[u8],
    params: &Params,
) -> Result<String, PasswordError> {
    let tag = argon2id(password, salt, params)?;

    let output = HashOutput {
        mem_kib: params.mem_kib,
        time: params.time,
        lanes: params.lanes,
        salt: salt.to_vec(),
        tag,
    };

    Ok(output.encode())
}

/// Verifies a password against a stored hash string.
///
/// Recomputes the tag with the embedded parameters and salt, then
/// compares in constant time. Returns `Ok(false)` for a wrong password;
/// a hash string that cannot be parsed, or that embeds invalid
/// parameters, is an error instead.
pub fn verify_password(encoded: &str, password: &[u8]) -> Result<bool, PasswordError> {
    let stored = HashOutput::decode(encoded)?;

    let params = Params {
        mem_kib: stored.mem_kib,
        time: stored.time,
        lanes: stored.lanes,
        tag_len: stored.tag.len(),
        salt_len: stored.salt.len(),
        secret: None,
        associated_data: None,
    };

    let mut computed = argon2id(password, &stored.salt, &params)?;

    let matches: bool = computed.ct_eq(&stored.tag).into();

    // A mismatching tag is still derived from the attempted password.
    computed.zeroize();

    Ok(matches)
}

/// Reports whether a stored hash was produced with outdated parameters.
///
/// Returns true if any of the stored cost parameters, the tag length,
/// or the salt length differs from `params`. After a successful verify,
/// a caller seeing `true` here should rehash the password with current
/// settings and replace the stored string.
pub fn needs_rehash(encoded: &str, params: &Params) -> Result<bool, MalformedEncoding> {
    let stored = HashOutput::decode(encoded)?;

    Ok(stored.mem_kib != params.mem_kib
        || stored.time != params.time
        || stored.lanes != params.lanes
        || stored.tag.len() != params.tag_len
        || stored.salt.len() != params.salt_len)
}
