//! Argon2id password hashing function (RFC 9106).
//!
//! Argon2id is a memory-hard password hashing function designed to resist
//! both GPU-based brute-force attacks and side-channel attacks. It combines
//! the features of Argon2i (data-independent addressing) and Argon2d
//! (data-dependent addressing).
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: Compute H0 = BLAKE2b(params || password || salt || ...)
//! 2. **Lane seeding**: Generate the first two blocks of each lane using
//!    H' (variable-length BLAKE2b).
//! 3. **Memory filling**: Fill the remaining blocks with the compression
//!    function G, which is the BLAKE2b round function with an extra
//!    multiplication for diffusion.
//! 4. **Finalization**: XOR the last block of each lane together and apply
//!    H' to produce the final tag.
//!
//! # Memory Organization
//!
//! Memory is a matrix of 1024-byte blocks:
//! - **Lanes**: independent rows, filled concurrently on threads when the
//!   parallelism degree is above one.
//! - **Slices**: each lane is divided into 4 slices; slice boundaries are
//!   the synchronization points between lanes.
//! - **Segments**: the blocks of one lane within one slice.
//!
//! # Addressing Modes
//!
//! - **Data-independent** (first pass, slices 0-1): reference block
//!   indices come from a counter-derived address block, so the memory
//!   access pattern leaks nothing about the password during the most
//!   attack-critical phase.
//! - **Data-dependent** (everything else): indices come from previously
//!   computed block contents, which strengthens resistance to
//!   time-memory trade-off attacks.

pub(crate) mod block;
pub(crate) mod boundary;
pub mod core;
pub(crate) mod memory;
pub mod params;
pub(crate) mod reference;
