//! BLAKE2b core hashing functions
//!
//! This module implements the core logic of the BLAKE2b cryptographic hash
//! function as defined in RFC 7693.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a complete one-shot hashing function for arbitrary-length input and
//!   digest lengths up to 64 bytes
//!
//! Only the unkeyed sequential mode is implemented, which is all Argon2
//! needs. Words are little-endian throughout, unlike the SHA-2 family.

/// BLAKE2b initialization vector (identical to the SHA-512 IV).
const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message word schedule. Rounds 10 and 11 reuse rows 0 and 1.
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// The G mixing function (RFC 7693 §3.1).
///
/// Mixes two message words `x` and `y` into four state words with
/// addition modulo 2^64 and rotations by 32, 24, 16, and 63 bits.
#[inline(always)]
fn g(a: u64, b: u64, c: u64, d: u64, x: u64, y: u64) -> (u64, u64, u64, u64) {
    let a = a.wrapping_add(b).wrapping_add(x);
    let d = (d ^ a).rotate_right(32);
    let c = c.wrapping_add(d);
    let b = (b ^ c).rotate_right(24);

    let a = a.wrapping_add(b).wrapping_add(y);
    let d = (d ^ a).rotate_right(16);
    let c = c.wrapping_add(d);
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// Compresses a single 1024-bit message block.
///
/// This function performs the BLAKE2b compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `state`: The current hash state (8 × 64-bit words)
/// - `block`: A 1024-bit (128-byte) message block
/// - `counter`: Total number of input bytes hashed so far, including this
///   block (128-bit little-endian offset counter)
/// - `last`: Whether this is the final block of the message
///
/// # Notes
/// - Input words are interpreted as little-endian, as required by BLAKE2b.
/// - Twelve rounds are applied, cycling through the ten SIGMA rows.
pub fn compress(state: &mut [u64; 8], block: &[u8; 128], counter: u128, last: bool) {
    let mut m = [0u64; 16];

    for (slot, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_le_bytes(chunk.try_into().unwrap());
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(state);
    v[8..].copy_from_slice(&IV);

    v[12] ^= counter as u64;
    v[13] ^= (counter >> 64) as u64;

    if last {
        v[14] = !v[14];
    }

    for round in 0..12 {
        let s = &SIGMA[round % 10];

        // Columns
        (v[0], v[4], v[8], v[12]) = g(v[0], v[4], v[8], v[12], m[s[0]], m[s[1]]);
        (v[1], v[5], v[9], v[13]) = g(v[1], v[5], v[9], v[13], m[s[2]], m[s[3]]);
        (v[2], v[6], v[10], v[14]) = g(v[2], v[6], v[10], v[14], m[s[4]], m[s[5]]);
        (v[3], v[7], v[11], v[15]) = g(v[3], v[7], v[11], v[15], m[s[6]], m[s[7]]);

        // Diagonals
        (v[0], v[5], v[10], v[15]) = g(v[0], v[5], v[10], v[15], m[s[8]], m[s[9]]);
        (v[1], v[6], v[11], v[12]) = g(v[1], v[6], v[11], v[12], m[s[10]], m[s[11]]);
        (v[2], v[7], v[8], v[13]) = g(v[2], v[7], v[8], v[13], m[s[12]], m[s[13]]);
        (v[3], v[4], v[9], v[14]) = g(v[3], v[4], v[9], v[14], m[s[14]], m[s[15]]);
    }

    for i in 0..8 {
        state[i] ^= v[i] ^ v[i + 8];
    }
}

/// Hashes the input and returns the full serialized 64-byte state.
///
/// The requested digest length still matters: it is folded into the
/// parameter block, so truncating this output to `out_len` bytes yields
/// the proper BLAKE2b-`out_len` digest (not a prefix of BLAKE2b-512).
fn blake2b_state(out_len: usize, input: &[u8]) -> [u8; 64] {
    debug_assert!((1..=64).contains(&out_len));

    let mut state = IV;

    // Parameter block word 0: digest length, no key, fanout = depth = 1
    state[0] ^= 0x0101_0000 ^ out_len as u64;

    let mut i = 0;
    let len = input.len();

    // Process all blocks except the last; the final block is always
    // compressed with the last-block flag set, even when empty.
    while len - i > 128 {
        let block: &[u8; 128] = input[i..i + 128].try_into().unwrap();
        i += 128;
        compress(&mut state, block, i as u128, false);
    }

    let mut block = [0u8; 128];
    block[..len - i].copy_from_slice(&input[i..]);
    compress(&mut state, &block, len as u128, true);

    let mut out = [0u8; 64];
    for (i, word) in state.iter().enumerate() {
        out[i * 8..(i + 1) * 8].copy_from_slice(&word.to_le_bytes());
    }

    out
}

/// Computes the BLAKE2b hash of the given input.
///
/// # Parameters
/// - `out_len`: Digest length in bytes (1 to 64)
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The digest as a byte vector of length `out_len`
pub fn blake2b(out_len: usize, input: &[u8]) -> Vec<u8> {
    blake2b_state(out_len, input)[..out_len].to_vec()
}

/// Computes the fixed-width BLAKE2b-512 hash of the given input.
///
/// This is the variant Argon2 uses for its initial H0 digest.
pub fn blake2b512(input: &[u8]) -> [u8; 64] {
    blake2b_state(64, input)
}
