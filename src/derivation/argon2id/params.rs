//! Parameter definitions and validation for Argon2id.
//!
//! All cost parameters are validated up front: a bad configuration fails
//! before a single block of working memory is allocated.

use thiserror::Error;

/// Protocol version, `v=19` in the encoded form.
pub const VERSION: u32 = 0x13;

/// Minimum salt length in bytes accepted by the engine.
pub const MIN_SALT_LEN: usize = 8;

/// Maximum degree of parallelism, 2^24 − 1 (RFC 9106 §3.1).
///
/// Also what keeps the `8 × lanes` and `4 × lanes` arithmetic below
/// comfortably inside `u32`.
pub const MAX_LANES: u32 = 0xFF_FFFF;

/// Configuration parameters for the Argon2id algorithm.
///
/// These control the memory and time cost of the hash function, allowing
/// the security level to be tuned for the target hardware and threat
/// model. `salt_len` only affects salt generation in the `password`
/// layer; the engine itself takes the salt as an explicit input.
///
/// The defaults follow the OWASP password-storage recommendation:
/// 19 MiB of memory, 2 passes, a single lane, 32-byte tag, 16-byte salt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Memory size in KiB (minimum 8 × lanes).
    pub mem_kib: u32,
    /// Number of passes over memory (minimum 1).
    pub time: u32,
    /// Degree of parallelism (number of lanes, minimum 1).
    pub lanes: u32,
    /// Length of the output tag in bytes (4..=1024).
    pub tag_len: usize,
    /// Length of generated salts in bytes (minimum 8).
    pub salt_len: usize,
    /// Optional secret key for keyed hashing.
    pub secret: Option<Vec<u8>>,
    /// Optional associated data.
    pub associated_data: Option<Vec<u8>>,
}

/// Pre-flight validation failures.
///
/// Each variant is fatal: no partial computation is ever attempted with
/// parameters that violate the Argon2 requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidParameters {
    /// Memory must be at least 8 × lanes KiB.
    #[error("memory cost must be at least 8 KiB per lane")]
    MemoryTooSmall,
    /// Lanes must be at least 1.
    #[error("parallelism degree must be at least 1")]
    TooFewLanes,
    /// Lanes must be at most 2^24 − 1.
    #[error("parallelism degree must be at most {MAX_LANES}")]
    TooManyLanes,
    /// Time (passes) must be at least 1.
    #[error("pass count must be at least 1")]
    TooFewPasses,
    /// Tag length must be between 4 and 1024 bytes.
    #[error("tag length must be between 4 and 1024 bytes")]
    TagLengthInvalid,
    /// Salts shorter than 8 bytes are rejected.
    #[error("salt must be at least {MIN_SALT_LEN} bytes")]
    SaltTooShort,
}

impl Params {
    /// Checks every invariant the algorithm relies on.
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        if self.lanes < 1 {
            return Err(InvalidParameters::TooFewLanes);
        }

        // Checked first: every later bound multiplies by the lane count.
        if self.lanes > MAX_LANES {
            return Err(InvalidParameters::TooManyLanes);
        }

        if self.time < 1 {
            return Err(InvalidParameters::TooFewPasses);
        }

        if self.mem_kib < 8 * self.lanes {
            return Err(InvalidParameters::MemoryTooSmall);
        }

        if !(4..=1024).contains(&self.tag_len) {
            return Err(InvalidParameters::TagLengthInvalid);
        }

        if self.salt_len < MIN_SALT_LEN {
            return Err(InvalidParameters::SaltTooShort);
        }

        Ok(())
    }

    /// Effective memory size: `mem_kib` rounded down to a multiple of
    /// 4 × lanes, so every lane holds a whole number of equal slices.
    pub(crate) fn effective_mem_kib(&self) -> u32 {
        let granularity = 4 * self.lanes;
        (self.mem_kib.max(8 * self.lanes) / granularity) * granularity
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            mem_kib: 19 * 1024,
            time: 2,
            lanes: 1,
            tag_len: 32,
            salt_len: 16,
            secret: None,
            associated_data: None,
        }
    }
}
