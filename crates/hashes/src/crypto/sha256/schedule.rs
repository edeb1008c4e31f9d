#![allow(clippy::indexing_slicing)] // Fixed 64-word schedule, indices bounded by the round loop

use super::consts::BLOCK_LEN;
use crate::util::rotr32;

/// Words in one expanded schedule, one per compression round.
pub const SCHEDULE_LEN: usize = 64;

#[inline(always)]
pub(crate) fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
pub(crate) fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// The 64 words consumed by the compression rounds of one block.
///
/// Words 0..16 are the block read as big-endian `u32`s; each later word is
/// `w[n-16] + σ0(w[n-15]) + w[n-7] + σ1(w[n-2])` mod 2^32.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageSchedule([u32; SCHEDULE_LEN]);

impl MessageSchedule {
  /// Expand one 64-byte block.
  #[must_use]
  pub fn expand(block: &[u8; BLOCK_LEN]) -> Self {
    let mut w = [0u32; SCHEDULE_LEN];

    let (words, _) = block.as_chunks::<4>();
    for (slot, bytes) in w.iter_mut().zip(words) {
      *slot = u32::from_be_bytes(*bytes);
    }

    for n in 16..SCHEDULE_LEN {
      w[n] = w[n - 16]
        .wrapping_add(small_sigma0(w[n - 15]))
        .wrapping_add(w[n - 7])
        .wrapping_add(small_sigma1(w[n - 2]));
    }

    Self(w)
  }

  /// The expanded words, indexed by round.
  #[inline]
  #[must_use]
  pub const fn words(&self) -> &[u32; SCHEDULE_LEN] {
    &self.0
  }
}
