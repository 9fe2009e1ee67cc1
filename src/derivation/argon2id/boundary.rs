//! Initialization and finalization for Argon2id.
//!
//! The boundary operations of the algorithm: computing the initial H0
//! digest from all inputs, and extracting the final tag from the filled
//! memory.

use zeroize::Zeroize;

use super::block::Block;
use super::params::{Params, VERSION};
use crate::hash::{blake2b_long, blake2b512};

/// Computes the initial 64-byte digest H0 (RFC 9106 §3.2).
///
/// H0 binds every input of the computation:
///
/// ```text
/// H0 = BLAKE2b-512(p || T || m || t || v || y || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
///
/// where each variable-length field is prefixed with its 32-bit
/// little-endian length. `m` is the memory cost exactly as requested;
/// rounding to lane granularity only affects how the matrix is sized,
/// never H0. Other implementations do the same, and a requested `m`
/// that is not a multiple of 4 × lanes must still interoperate.
pub(crate) fn init(password: &[u8], salt: &[u8], params: &Params) -> [u8; 64] {
    let secret = params.secret.as_deref().unwrap_or(&[]);
    let associated = params.associated_data.as_deref().unwrap_or(&[]);

    let mut buf = Vec::with_capacity(40 + password.len() + salt.len() + secret.len() + associated.len());

    buf.extend_from_slice(&params.lanes.to_le_bytes());
    buf.extend_from_slice(&(params.tag_len as u32).to_le_bytes());
    buf.extend_from_slice(&params.mem_kib.to_le_bytes());
    buf.extend_from_slice(&params.time.to_le_bytes());
    buf.extend_from_slice(&VERSION.to_le_bytes());
    buf.extend_from_slice(&2u32.to_le_bytes()); // algorithm type: Argon2id

    for field in [password, salt, secret, associated] {
        buf.extend_from_slice(&(field.len() as u32).to_le_bytes());
        buf.extend_from_slice(field);
    }

    let h0 = blake2b512(&buf);

    // The buffer held the password; clear it before the allocation is
    // returned to the allocator.
    buf.zeroize();

    h0
}

/// Seeds the first two blocks of a lane: H'^(1024)(H0 || column || lane).
pub(crate) fn seed_block(h0: &[u8; 64], lane: u32, column: u32) -> Block {
    let mut input = [0u8; 72];
    input[..64].copy_from_slice(h0);
    input[64..68].copy_from_slice(&column.to_le_bytes());
    input[68..72].copy_from_slice(&lane.to_le_bytes());

    let mut expanded = blake2b_long(1024, &input);
    let block = Block::from_bytes(expanded.as_slice().try_into().unwrap());

    input.zeroize();
    expanded.zeroize();

    block
}

/// Extracts the output tag from the filled memory.
///
/// XORs the last block of every lane into a single block, then applies
/// H' for the requested tag length. Folding all lanes in means no lane's
/// work can be skipped without changing the tag.
pub(crate) fn finalize(memory: &[Block], lanes: u32, lane_len: u32, tag_len: usize) -> Vec<u8> {
    let mut folded = Block::ZERO;

    for lane in 0..lanes {
        let last = ((lane + 1) * lane_len - 1) as usize;
        folded.xor_assign(&memory[last]);
    }

    let mut bytes = folded.to_bytes();
    let tag = blake2b_long(tag_len, &bytes);
    bytes.zeroize();

    tag
}
