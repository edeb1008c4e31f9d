//! Message padding (FIPS 180-4 §5.1.1) and block splitting.
//!
//! A padded message is the original bytes, one `0x80` terminator, the minimal
//! zero fill, and the message length in bits as a big-endian `u64`. Its length
//! is always a positive multiple of [`BLOCK_LEN`].

use alloc::vec::Vec;

use traits::LengthOverflow;

use super::consts::BLOCK_LEN;

/// Width of the trailing bit-length field.
const LEN_FIELD: usize = 8;

/// Terminator plus length field: the padding every message gets.
const MIN_PADDING: usize = 1 + LEN_FIELD;

/// Longest message in bytes whose padding can be built on this target.
///
/// The FIPS limit is `2^61 - 1` bytes (`2^64 - 1` bits); narrower targets are
/// further capped so the padded buffer stays within `isize::MAX`, the largest
/// allocation a `Vec` accepts.
pub const MAX_MESSAGE_LEN: u64 = {
  let fips = (1u64 << 61) - 1;
  let addressable = (isize::MAX as u64).saturating_sub((BLOCK_LEN + LEN_FIELD) as u64);
  if addressable < fips { addressable } else { fips }
};

/// Number of zero bytes between the `0x80` terminator and the length field.
///
/// Solves `len + 1 + z + 8 ≡ 0 (mod 64)` for the smallest `z ≥ 0`. The outer
/// reduction matters: at `len % 64 == 55` the answer is 0, not 64.
#[inline]
#[must_use]
pub const fn zero_fill_len(len: u64) -> usize {
  let rem = (len % BLOCK_LEN as u64) as usize;
  (BLOCK_LEN - (rem + MIN_PADDING) % BLOCK_LEN) % BLOCK_LEN
}

/// Message length in bits, as stored in the length field.
///
/// # Errors
///
/// Returns [`LengthOverflow`] if `len` exceeds [`MAX_MESSAGE_LEN`].
#[inline]
pub const fn bit_len(len: u64) -> Result<u64, LengthOverflow> {
  if len > MAX_MESSAGE_LEN {
    return Err(LengthOverflow::new(len, MAX_MESSAGE_LEN));
  }
  Ok(len << 3)
}

/// Total size of the padded message for a `len`-byte input.
///
/// # Errors
///
/// Returns [`LengthOverflow`] if `len` exceeds [`MAX_MESSAGE_LEN`].
#[inline]
pub fn padded_len(len: u64) -> Result<usize, LengthOverflow> {
  layout(len).map(|(_, total)| total)
}

/// Bit-length field and padded size, range-checked once.
fn layout(len: u64) -> Result<(u64, usize), LengthOverflow> {
  let bits = bit_len(len)?;
  let total = len + MIN_PADDING as u64 + zero_fill_len(len) as u64;
  let total = usize::try_from(total).map_err(|_| LengthOverflow::new(len, MAX_MESSAGE_LEN))?;
  Ok((bits, total))
}

/// Combined length of `bufs`, saturating at `u64::MAX` in the error.
fn message_len(bufs: &[&[u8]]) -> Result<u64, LengthOverflow> {
  bufs
    .iter()
    .try_fold(0u64, |acc, buf| u64::try_from(buf.len()).ok().and_then(|n| acc.checked_add(n)))
    .ok_or(LengthOverflow::new(u64::MAX, MAX_MESSAGE_LEN))
}

/// A message padded to a whole number of compression blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
  bytes: Vec<u8>,
}

impl PaddedMessage {
  /// Pad `data`.
  ///
  /// # Errors
  ///
  /// Returns [`LengthOverflow`] if `data` exceeds [`MAX_MESSAGE_LEN`].
  #[inline]
  pub fn new(data: &[u8]) -> Result<Self, LengthOverflow> {
    Self::from_slices(&[data])
  }

  /// Pad the concatenation of `bufs`.
  ///
  /// The buffer is allocated once at its final size.
  ///
  /// # Errors
  ///
  /// Returns [`LengthOverflow`] if the combined length exceeds
  /// [`MAX_MESSAGE_LEN`].
  pub fn from_slices(bufs: &[&[u8]]) -> Result<Self, LengthOverflow> {
    let len = message_len(bufs)?;
    let (bits, total) = layout(len)?;

    let mut bytes = Vec::with_capacity(total);
    for buf in bufs {
      bytes.extend_from_slice(buf);
    }
    bytes.push(0x80);
    bytes.resize(total - LEN_FIELD, 0);
    bytes.extend_from_slice(&bits.to_be_bytes());
    debug_assert_eq!(bytes.len() % BLOCK_LEN, 0);

    Ok(Self { bytes })
  }

  /// The padded bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  /// Number of 64-byte blocks (always at least one).
  #[inline]
  #[must_use]
  pub fn block_count(&self) -> usize {
    self.bytes.len() / BLOCK_LEN
  }

  /// Consecutive, non-overlapping blocks in message order.
  #[inline]
  pub fn blocks(&self) -> core::slice::Iter<'_, [u8; BLOCK_LEN]> {
    let (blocks, rest) = self.bytes.as_chunks::<BLOCK_LEN>();
    debug_assert!(rest.is_empty());
    blocks.iter()
  }
}
