//! Entry point for the raw Argon2id computation.

use zeroize::Zeroize;

use super::block::Block;
use super::boundary::{finalize, init, seed_block};
use super::memory::MemoryLayout;
use super::params::{InvalidParameters, MIN_SALT_LEN, Params};

/// Computes the Argon2id tag for the given password and salt.
///
/// This is the deterministic core: the same inputs always produce the
/// same tag. Parameters are validated before any working memory is
/// allocated, and the memory matrix is wiped before returning.
///
/// # Arguments
///
/// * `password` - The password to hash
/// * `salt` - A random salt (minimum 8 bytes, recommended 16+ bytes)
/// * `params` - Cost parameters (memory, passes, lanes, tag length)
///
/// # Returns
///
/// The derived tag as a byte vector, or [`InvalidParameters`] if the
/// configuration violates an algorithm invariant.
///
/// # Example
///
/// ```rust, ignore
/// use argonite::derivation::{Params, argon2id};
///
/// let tag = argon2id(b"my_password", b"random_salt_16b!", &Params::default()).unwrap();
/// assert_eq!(tag.len(), 32);
/// ```
pub fn argon2id(
    password: &[u8],
    salt: &[u8],
    params: &Params,
) -> Result<Vec<u8>, InvalidParameters> {
    params.validate()?;

    if salt.len() < MIN_SALT_LEN {
        return Err(InvalidParameters::SaltTooShort);
    }

    let layout = MemoryLayout::new(params);

    let mut h0 = init(password, salt, params);

    let mut memory = vec![Block::ZERO; layout.total_blocks as usize];

    // The first two columns of each lane are seeded from H0 rather than
    // computed through G.
    for lane in 0..layout.lanes {
        for column in 0..2u32 {
            memory[layout.index(lane, column)] = seed_block(&h0, lane, column);
        }
    }

    h0.zeroize();

    layout.fill(&mut memory, params.time);

    let tag = finalize(&memory, layout.lanes, layout.lane_len, params.tag_len);

    // The matrix held password-derived material for the whole
    // computation; clear it with stores the compiler cannot elide.
    memory.zeroize();

    Ok(tag)
}
