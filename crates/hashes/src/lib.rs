//! Cryptographic digests.
//!
//! This crate is `no_std` compatible (it needs `alloc` for the padded message
//! buffer) and has zero library dependencies outside the fips180 workspace.
//! Dev-only dependencies are used for oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - Cryptographic hash functions.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

pub mod crypto;

mod util;

pub use traits::{Digest, LengthOverflow};
