//! Cryptographic digest traits.
//!
//! Digests here are one-shot: the whole message, and therefore its length, is
//! known before padding starts. There is no incremental `update`/`finalize`.

use core::fmt::Debug;

use crate::LengthOverflow;

/// Cryptographic hash function producing a fixed-size digest.
///
/// This trait is intended for Merkle-Damgard hashes like SHA-256.
pub trait Digest {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Compression block size in bytes.
  const BLOCK_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Compute the digest of the concatenation of `bufs` in one shot.
  ///
  /// # Errors
  ///
  /// Returns [`LengthOverflow`] if the combined length does not fit the
  /// algorithm's length field.
  fn digest_vectored(bufs: &[&[u8]]) -> Result<Self::Output, LengthOverflow>;

  /// Compute the digest of `data` in one shot.
  ///
  /// # Errors
  ///
  /// Returns [`LengthOverflow`] if `data` is too long for the algorithm's
  /// length field.
  #[inline]
  fn digest(data: &[u8]) -> Result<Self::Output, LengthOverflow> {
    Self::digest_vectored(&[data])
  }
}
