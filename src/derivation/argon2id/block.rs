//! Block operations for Argon2id.
//!
//! Defines the 1024-byte memory block and the compression function G
//! (RFC 9106 §3.5). G is the memory- and CPU-hard step of the algorithm
//! and must match the reference arithmetic bit for bit, since Argon2id
//! outputs are protocol-fixed.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 1024-byte memory block (128 × 64-bit words).
///
/// Blocks are the atomic unit of the memory matrix. Every block filled
/// during a hash transiently holds password-derived material, so blocks
/// wipe themselves with non-elidable stores when dropped.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Block(pub(crate) [u64; 128]);

impl Block {
    pub(crate) const ZERO: Self = Self([0u64; 128]);

    pub(crate) fn xor_assign(&mut self, other: &Block) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }

    pub(crate) fn from_bytes(bytes: &[u8; 1024]) -> Self {
        Block(core::array::from_fn(|i| {
            u64::from_le_bytes(bytes[i * 8..i * 8 + 8].try_into().unwrap())
        }))
    }

    pub(crate) fn to_bytes(&self) -> [u8; 1024] {
        let mut out = [0u8; 1024];
        self.0.iter().enumerate().for_each(|(i, word)| {
            out[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
        });
        out
    }

    /// Compression function G (RFC 9106 §3.5).
    ///
    /// Computes G(X, Y) = P-rounds(X ⊕ Y) ⊕ X ⊕ Y, where the permutation
    /// is the modified BLAKE2b round applied first to the 8 rows of 16
    /// consecutive words, then to 8 column groups of interleaved word
    /// pairs. The final XOR feeds both inputs forward into the output.
    pub(crate) fn compress(x: &Self, y: &Self) -> Self {
        let mut r = x.clone();
        r.xor_assign(y);

        let mut z = r.clone();

        // Row-wise: P over groups of 16 consecutive words
        for row in 0..8 {
            let base = 16 * row;
            let mut v: [u64; 16] = z.0[base..base + 16].try_into().unwrap();
            round_p(&mut v);
            z.0[base..base + 16].copy_from_slice(&v);
        }

        // Column-wise: P over pairs of words spaced 16 apart
        for col in 0..8 {
            let idx: [usize; 16] = core::array::from_fn(|k| 2 * col + 16 * (k / 2) + (k & 1));

            let mut v = idx.map(|i| z.0[i]);
            round_p(&mut v);

            for (word, i) in v.into_iter().zip(idx) {
                z.0[i] = word;
            }
        }

        z.xor_assign(&r);

        z
    }

    /// Builds an address block for data-independent indexing.
    ///
    /// In data-independent mode (first pass, slices 0-1) the reference
    /// indices are drawn from this block instead of from memory contents,
    /// so the access pattern is a pure function of the position counter.
    /// Defined as G(0, G(0, Z)) with Z packing the position parameters.
    pub(crate) fn address_block(
        pass: u32,
        lane: u32,
        slice: u32,
        total_blocks: u32,
        passes: u32,
        counter: u32,
    ) -> Self {
        let mut z = Block::ZERO;
        z.0[0] = pass as u64;
        z.0[1] = lane as u64;
        z.0[2] = slice as u64;
        z.0[3] = total_blocks as u64;
        z.0[4] = passes as u64;
        z.0[5] = 2; // algorithm type: Argon2id
        z.0[6] = counter as u64;

        Block::compress(&Block::ZERO, &Block::compress(&Block::ZERO, &z))
    }
}

/// One quarter-round step of GB: `a = a + b + 2·lo32(a)·lo32(b)`.
///
/// Where BLAKE2b adds a message word, Argon2 multiplies the lower 32 bits
/// of its operands, which diffuses faster through the 64-bit lanes.
#[inline(always)]
fn mix(a: u64, b: u64) -> u64 {
    a.wrapping_add(b).wrapping_add(
        2u64.wrapping_mul(a as u32 as u64)
            .wrapping_mul(b as u32 as u64),
    )
}

/// GB mixing function (Argon2 variant of BLAKE2b's G).
///
/// Rotation amounts are 32, 24, 16, and 63 bits, as in BLAKE2b.
#[inline(always)]
fn gb(a: u64, b: u64, c: u64, d: u64) -> (u64, u64, u64, u64) {
    let a = mix(a, b);
    let d = (d ^ a).rotate_right(32);

    let c = mix(c, d);
    let b = (b ^ c).rotate_right(24);

    let a = mix(a, b);
    let d = (d ^ a).rotate_right(16);

    let c = mix(c, d);
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// P permutation: one BLAKE2b-style round over a 4×4 matrix of words,
/// first along columns, then along diagonals.
#[inline(always)]
fn round_p(v: &mut [u64; 16]) {
    (v[0], v[4], v[8], v[12]) = gb(v[0], v[4], v[8], v[12]);
    (v[1], v[5], v[9], v[13]) = gb(v[1], v[5], v[9], v[13]);
    (v[2], v[6], v[10], v[14]) = gb(v[2], v[6], v[10], v[14]);
    (v[3], v[7], v[11], v[15]) = gb(v[3], v[7], v[11], v[15]);

    (v[0], v[5], v[10], v[15]) = gb(v[0], v[5], v[10], v[15]);
    (v[1], v[6], v[11], v[12]) = gb(v[1], v[6], v[11], v[12]);
    (v[2], v[7], v[8], v[13]) = gb(v[2], v[7], v[8], v[13]);
    (v[3], v[4], v[9], v[14]) = gb(v[3], v[4], v[9], v[14]);
}
