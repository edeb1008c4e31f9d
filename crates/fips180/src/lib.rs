//! Pure Rust SHA-256 (FIPS 180-4).
//!
//! `fips180` re-exports the portable SHA-256 from the `hashes` crate together
//! with the shared [`Digest`] trait. Zero dependencies and `no_std` (with
//! `alloc`).
//!
//! # Quick Start
//!
//! ```
//! use fips180::{Digest, Sha256};
//!
//! let digest = fips180::sha256(b"abc")?;
//! assert_eq!(digest, Sha256::digest(b"abc")?);
//! assert_eq!(digest.len(), <Sha256 as Digest>::OUTPUT_SIZE);
//!
//! // Several buffers, hashed as one message.
//! assert_eq!(Sha256::digest_vectored(&[b"a".as_slice(), b"bc".as_slice()])?, digest);
//! # Ok::<(), fips180::LengthOverflow>(())
//! ```
//!
//! # Limits
//!
//! Messages longer than [`MAX_MESSAGE_LEN`] bytes (`2^61 - 1` on 64-bit
//! targets) are rejected with [`LengthOverflow`] rather than wrapping the
//! encoded bit length.
#![no_std]

pub use hashes::crypto::{
  Sha256,
  sha256::{self, HashState, MAX_MESSAGE_LEN, MessageSchedule, PaddedMessage},
};
pub use traits::{Digest, LengthOverflow};

/// SHA-256 of `data`.
///
/// # Errors
///
/// Returns [`LengthOverflow`] if `data` is longer than [`MAX_MESSAGE_LEN`].
#[inline]
pub fn sha256(data: &[u8]) -> Result<[u8; 32], LengthOverflow> {
  Sha256::digest(data)
}
