//! Variable-length hashing H' (RFC 9106 §3.3).
//!
//! Argon2 needs digests longer than the 64 bytes BLAKE2b can produce:
//! 1024 bytes for seeding memory blocks and up to 2^32 − 1 bytes for the
//! final tag. H' stretches BLAKE2b by chaining 64-byte digests and taking
//! the first 32 bytes of each as output, sizing the last call so the
//! result fills `out_len` exactly.

use super::core::{blake2b, blake2b512};

/// Computes H'(X) for the requested output length.
///
/// The input is prefixed with `out_len` as a 32-bit little-endian integer,
/// so the same input hashed to different lengths yields unrelated digests.
/// For `out_len` of at most 64 bytes this is a single BLAKE2b call;
/// longer outputs are assembled from a chain of rehashed 64-byte values.
///
/// Deterministic for a given input; no error conditions.
pub fn blake2b_long(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut prefixed = Vec::with_capacity(4 + input.len());
    prefixed.extend_from_slice(&(out_len as u32).to_le_bytes());
    prefixed.extend_from_slice(input);

    if out_len <= 64 {
        return blake2b(out_len, &prefixed);
    }

    let mut out = Vec::with_capacity(out_len);

    let mut chain = blake2b512(&prefixed);
    out.extend_from_slice(&chain[..32]);

    let mut remaining = out_len - 32;
    while remaining > 64 {
        chain = blake2b512(&chain);
        out.extend_from_slice(&chain[..32]);
        remaining -= 32;
    }

    out.extend_from_slice(&blake2b(remaining, &chain));

    out
}
