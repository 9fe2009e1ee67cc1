//! BLAKE2b cryptographic hash function (RFC 7693).
//!
//! BLAKE2b is the hash function Argon2 is built on: it expands the initial
//! H0 digest into the first memory blocks and extracts the final tag. The
//! implementation here is the unkeyed, sequential variant with a
//! configurable digest length of 1 to 64 bytes.
//!
//! Two layers are provided:
//! - `core`: the compression function and one-shot hashing for outputs of
//!   at most 64 bytes.
//! - `long`: the H' construction from RFC 9106 §3.3 that stretches BLAKE2b
//!   to arbitrary output lengths, as Argon2 requires for 1 KiB blocks.

pub mod core;
pub mod long;
