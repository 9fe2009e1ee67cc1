//! Self-contained Argon2id password hashing engine.
//!
//! This crate implements the Argon2id memory-hard password hashing function
//! (RFC 9106) end-to-end: the BLAKE2b primitive it is built on, the block
//! compression function, the memory-filling schedule, the portable PHC
//! string format, and constant-time verification.
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! algorithmic core is pure and deterministic: the same password, salt, and
//! parameters always produce the same tag, byte for byte, interoperable
//! with other Argon2 implementations.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions. Currently BLAKE2b (RFC 7693) together
//!   with the Argon2 variable-length construction H' used to expand seed
//!   material and extract the final tag.
//!
//! - `derivation`
//!   The Argon2id algorithm itself: parameters and validation, the 1 KiB
//!   block type and compression function G, reference-block addressing,
//!   and the pass/slice/lane filling schedule. The entry point is
//!   [`derivation::argon2id()`], which maps a password and salt to a raw
//!   tag.
//!
//! - `phc`
//!   Encoder and decoder for the portable hash string format
//!   (`$argon2id$v=19$m=...,t=...,p=...$salt$tag`). Decoding failures are
//!   structural errors, kept strictly apart from verification outcomes.
//!
//! - `password`
//!   The caller-facing surface: [`password::hash_password`] (fresh random
//!   salt, encoded output), [`password::verify_password`] (constant-time
//!   tag comparison), and [`password::needs_rehash`] (parameter drift
//!   detection for stored hashes).
//!
//! # Design goals
//!
//! - Bit-exact interoperability with the Argon2 reference implementation
//! - Explicit parameter validation before any memory is allocated
//! - Constant-time comparison and non-elidable wiping of password-derived
//!   working memory
//! - Minimal and explicit APIs

pub mod derivation;
pub mod hash;
pub mod password;
pub mod phc;
