use super::{
  consts::{H0, K, OUTPUT_LEN},
  schedule::MessageSchedule,
};
use crate::util::rotr32;

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

/// Running SHA-256 chaining value `H0..H7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashState([u32; 8]);

impl Default for HashState {
  #[inline]
  fn default() -> Self {
    Self::initial()
  }
}

impl HashState {
  /// The FIPS 180-4 initial hash value.
  #[inline]
  #[must_use]
  pub const fn initial() -> Self {
    Self(H0)
  }

  /// State from raw chaining words, e.g. a midstate saved by a caller.
  #[inline]
  #[must_use]
  pub const fn from_words(words: [u32; 8]) -> Self {
    Self(words)
  }

  /// The eight chaining words `a..h`.
  #[inline]
  #[must_use]
  pub const fn words(&self) -> &[u32; 8] {
    &self.0
  }

  /// Run the 64 rounds over `schedule` and feed the result forward into the
  /// state (Davies-Meyer).
  pub fn compress(&mut self, schedule: &MessageSchedule) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

    for (&k, &w) in K.iter().zip(schedule.words()) {
      let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
      let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

      h = g;
      g = f;
      f = e;
      e = d.wrapping_add(t1);
      d = c;
      c = b;
      b = a;
      a = t1.wrapping_add(t2);
    }

    for (word, v) in self.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
      *word = word.wrapping_add(v);
    }
  }

  /// Serialize as the big-endian concatenation of the eight words.
  #[must_use]
  pub fn to_bytes(&self) -> [u8; OUTPUT_LEN] {
    let mut out = [0u8; OUTPUT_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (chunk, word) in chunks.iter_mut().zip(self.0) {
      *chunk = word.to_be_bytes();
    }
    out
  }
}
