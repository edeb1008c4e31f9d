//! Core digest traits for the fips180 crates.
//!
//! This crate provides the foundational trait the hash implementations
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | One-shot cryptographic hash functions | SHA-256 |
//!
//! # Error Types
//!
//! - [`LengthOverflow`] - Message too long for the algorithm's length field
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;
pub mod error;

pub use digest::Digest;
pub use error::LengthOverflow;
