use argonite::hash::{blake2b, blake2b512, blake2b_long};

use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2b512, Blake2bVar, Digest};

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

/// RFC 7693 Appendix A test vector.
#[test]
fn blake2b512_abc_vector() {
    let expected = hex(
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
         7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
    );

    assert_eq!(blake2b512(b"abc").to_vec(), expected);
    assert_eq!(blake2b(64, b"abc"), expected);
}

#[test]
fn blake2b512_empty_input() {
    let expected = hex(
        "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
         d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce",
    );

    assert_eq!(blake2b512(b"").to_vec(), expected);
}

/// Cross-check against an independent implementation across block
/// boundaries (the counter and final-block flag are easy to get wrong).
#[test]
fn blake2b512_matches_reference_crate() {
    for len in [0, 1, 63, 64, 65, 127, 128, 129, 255, 256, 1000] {
        let input: Vec<u8> = (0..len).map(|i| i as u8).collect();

        let reference = Blake2b512::digest(&input);

        assert_eq!(
            blake2b512(&input).to_vec(),
            reference.to_vec(),
            "mismatch at input length {len}"
        );
    }
}

/// Shorter digests are parameterized, not truncated: BLAKE2b-256 of an
/// input is not a prefix of its BLAKE2b-512 digest.
#[test]
fn blake2b_digest_length_is_parameterized() {
    let short = blake2b(32, b"parameter block");
    let long = blake2b512(b"parameter block");

    assert_eq!(short.len(), 32);
    assert_ne!(short[..], long[..32]);
}

#[test]
fn blake2b_variable_lengths_match_reference_crate() {
    for out_len in [1, 16, 20, 32, 48, 64] {
        let mut var = Blake2bVar::new(out_len).unwrap();
        var.update(b"variable output");
        let mut reference = vec![0u8; out_len];
        var.finalize_variable(&mut reference).unwrap();

        assert_eq!(blake2b(out_len, b"variable output"), reference);
    }
}

#[test]
fn blake2b_long_short_outputs_use_length_prefix() {
    // For out_len <= 64, H'(X) hashes LE32(out_len) || X directly.
    let mut prefixed = 32u32.to_le_bytes().to_vec();
    prefixed.extend_from_slice(b"seed material");

    assert_eq!(blake2b_long(32, b"seed material"), blake2b(32, &prefixed));
}

#[test]
fn blake2b_long_produces_exact_lengths() {
    for out_len in [4, 32, 64, 65, 100, 128, 1024] {
        let out = blake2b_long(out_len, b"block seed");
        assert_eq!(out.len(), out_len);
    }
}

#[test]
fn blake2b_long_is_deterministic_and_length_bound() {
    let a = blake2b_long(1024, b"input");
    let b = blake2b_long(1024, b"input");
    assert_eq!(a, b);

    // The length prefix separates domains: a longer output does not
    // start with the shorter one.
    let c = blake2b_long(128, b"input");
    assert_ne!(a[..128], c[..]);
}
