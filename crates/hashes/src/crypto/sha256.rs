//! SHA-256 (FIPS 180-4).
//!
//! The digest is computed in four stages, each in its own module:
//!
//! - [`pad`] - terminator, zero fill, and bit-length field
//! - [`PaddedMessage::blocks`] - 64-byte blocks in message order
//! - [`schedule`] - expansion of one block into 64 words
//! - [`compress`] - 64 rounds plus feed-forward into the chaining value
//!
//! # Examples
//!
//! ```
//! use hashes::crypto::Sha256;
//!
//! let digest = Sha256::digest(b"abc")?;
//! assert_eq!(digest[..4], [0xba, 0x78, 0x16, 0xbf]);
//! # Ok::<(), hashes::LengthOverflow>(())
//! ```

use traits::{Digest, LengthOverflow};

pub mod compress;
pub mod consts;
pub mod pad;
pub mod schedule;

pub use compress::HashState;
pub use consts::{BLOCK_LEN, OUTPUT_LEN};
pub use pad::{MAX_MESSAGE_LEN, PaddedMessage};
pub use schedule::MessageSchedule;

/// SHA-256 one-shot hasher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256;

impl Sha256 {
  /// Compute the digest of `data` in one shot.
  ///
  /// # Errors
  ///
  /// Returns [`LengthOverflow`] if `data` is longer than [`MAX_MESSAGE_LEN`]
  /// bytes.
  #[inline]
  pub fn digest(data: &[u8]) -> Result<[u8; OUTPUT_LEN], LengthOverflow> {
    Self::digest_vectored(&[data])
  }

  /// Compute the digest of the concatenation of `bufs` in one shot.
  ///
  /// # Errors
  ///
  /// Returns [`LengthOverflow`] if the combined length is longer than
  /// [`MAX_MESSAGE_LEN`] bytes.
  pub fn digest_vectored(bufs: &[&[u8]]) -> Result<[u8; OUTPUT_LEN], LengthOverflow> {
    let padded = PaddedMessage::from_slices(bufs)?;

    let mut state = HashState::initial();
    for block in padded.blocks() {
      Self::compress_block(&mut state, block);
    }
    Ok(state.to_bytes())
  }

  /// Fold one already-padded block into `state`.
  #[inline]
  pub fn compress_block(state: &mut HashState, block: &[u8; BLOCK_LEN]) {
    let schedule = MessageSchedule::expand(block);
    state.compress(&schedule);
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = OUTPUT_LEN;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; OUTPUT_LEN];

  #[inline]
  fn digest_vectored(bufs: &[&[u8]]) -> Result<Self::Output, LengthOverflow> {
    Sha256::digest_vectored(bufs)
  }

  #[inline]
  fn digest(data: &[u8]) -> Result<Self::Output, LengthOverflow> {
    Sha256::digest(data)
  }
}
