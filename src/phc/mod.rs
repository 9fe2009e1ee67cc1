//! PHC string format encoder and decoder.
//!
//! The portable serialized form of a hash:
//!
//! ```text
//! $argon2id$v=19$m=<mem_kib>,t=<passes>,p=<lanes>$<b64(salt)>$<b64(tag)>
//! ```
//!
//! Salt and tag use the standard base64 alphabet without padding, which
//! is what every interoperable Argon2 encoder emits. Decoding failures
//! are structural errors; they are never folded into a "wrong password"
//! verification result.

use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD as B64};
use thiserror::Error;

use crate::derivation::argon2id::params::VERSION;

/// Algorithm identifier in the encoded form.
pub const ALGORITHM_ID: &str = "argon2id";

/// Parse failures for stored hash strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedEncoding {
    /// The algorithm tag is not `argon2id` (e.g. `argon2i`, `scrypt`).
    #[error("unknown algorithm identifier `{0}`, expected `{ALGORITHM_ID}`")]
    UnknownAlgorithm(String),
    /// The version field is missing or names an unsupported version.
    #[error("unsupported version field `{0}`, expected `v=19`")]
    UnknownVersion(String),
    /// The string does not have exactly five `$`-separated fields.
    #[error("expected five `$`-separated fields")]
    WrongFieldCount,
    /// The cost parameter list is not exactly `m=<n>,t=<n>,p=<n>`.
    #[error("malformed cost parameters `{0}`, expected `m=<n>,t=<n>,p=<n>`")]
    MalformedCosts(String),
    /// A salt or tag field is not valid unpadded base64.
    #[error("invalid base64 in {0} field")]
    InvalidBase64(&'static str),
}

/// A decoded hash: cost parameters, salt, and tag.
///
/// This is the canonical immutable result of a hash computation; the
/// encoded string is its serialized form and `decode(encode(x)) == x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOutput {
    /// Memory cost in KiB, as requested (not rounded).
    pub mem_kib: u32,
    /// Number of passes.
    pub time: u32,
    /// Degree of parallelism.
    pub lanes: u32,
    /// The salt the tag was computed with.
    pub salt: Vec<u8>,
    /// The derived tag.
    pub tag: Vec<u8>,
}

impl HashOutput {
    /// Serializes to the portable `$argon2id$...` form.
    pub fn encode(&self) -> String {
        format!(
            "${ALGORITHM_ID}$v={VERSION}$m={},t={},p={}${}${}",
            self.mem_kib,
            self.time,
            self.lanes,
            B64.encode(&self.salt),
            B64.encode(&self.tag),
        )
    }

    /// Parses a stored hash string.
    ///
    /// Strict by design: field order is fixed, unknown versions and
    /// algorithm tags are rejected, and no field may be missing,
    /// duplicated, or trailing.
    pub fn decode(encoded: &str) -> Result<Self, MalformedEncoding> {
        let body = encoded
            .strip_prefix('$')
            .ok_or(MalformedEncoding::WrongFieldCount)?;

        let fields: Vec<&str> = body.split('$').collect();
        let [algorithm, version, costs, salt, tag] = fields[..] else {
            return Err(MalformedEncoding::WrongFieldCount);
        };

        if algorithm != ALGORITHM_ID {
            return Err(MalformedEncoding::UnknownAlgorithm(algorithm.to_string()));
        }

        let version_ok = version
            .strip_prefix("v=")
            .and_then(|v| v.parse::<u32>().ok())
            .is_some_and(|v| v == VERSION);
        if !version_ok {
            return Err(MalformedEncoding::UnknownVersion(version.to_string()));
        }

        let (mem_kib, time, lanes) = parse_costs(costs)
            .ok_or_else(|| MalformedEncoding::MalformedCosts(costs.to_string()))?;

        let salt = B64
            .decode(salt)
            .map_err(|_| MalformedEncoding::InvalidBase64("salt"))?;
        let tag = B64
            .decode(tag)
            .map_err(|_| MalformedEncoding::InvalidBase64("tag"))?;

        Ok(Self {
            mem_kib,
            time,
            lanes,
            salt,
            tag,
        })
    }
}

/// Parses `m=<n>,t=<n>,p=<n>` with fixed key order.
fn parse_costs(list: &str) -> Option<(u32, u32, u32)> {
    let mut parts = list.split(',');

    let mem_kib = parts.next()?.strip_prefix("m=")?.parse().ok()?;
    let time = parts.next()?.strip_prefix("t=")?.parse().ok()?;
    let lanes = parts.next()?.strip_prefix("p=")?.parse().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some((mem_kib, time, lanes))
}
