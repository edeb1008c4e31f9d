//! Error types for digest operations.
//!
//! One-shot digests are total over every message that fits the length field
//! of the algorithm. The only failure is a message too long to encode.

use core::fmt;

/// Message length cannot be represented in the digest's length field.
///
/// Returned instead of silently wrapping the encoded bit length, which would
/// produce a digest that disagrees with the standard.
///
/// # Examples
///
/// ```
/// use traits::LengthOverflow;
///
/// fn check(len: u64, max: u64) -> Result<u64, LengthOverflow> {
///   if len > max { Err(LengthOverflow::new(len, max)) } else { Ok(len) }
/// }
///
/// let err = check(10, 8).unwrap_err();
/// assert_eq!(err.len(), 10);
/// assert_eq!(err.max(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthOverflow {
  len: u64,
  max: u64,
}

impl LengthOverflow {
  /// Create a new error for a `len`-byte message against a `max`-byte limit.
  ///
  /// Lengths that do not even fit in a `u64` are reported as `u64::MAX`.
  #[inline]
  #[must_use]
  pub const fn new(len: u64, max: u64) -> Self {
    Self { len, max }
  }

  /// Length of the rejected message in bytes (saturated at `u64::MAX`).
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)]
  pub const fn len(&self) -> u64 {
    self.len
  }

  /// Largest accepted message length in bytes.
  #[inline]
  #[must_use]
  pub const fn max(&self) -> u64 {
    self.max
  }
}

impl fmt::Display for LengthOverflow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "message length {} bytes exceeds the {}-byte limit", self.len, self.max)
  }
}

impl core::error::Error for LengthOverflow {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    let err = LengthOverflow::new(1 << 61, (1 << 61) - 1);
    assert_eq!(
      err.to_string(),
      "message length 2305843009213693952 bytes exceeds the 2305843009213693951-byte limit"
    );
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", LengthOverflow::new(3, 2));
    assert_eq!(dbg, "LengthOverflow { len: 3, max: 2 }");
  }

  #[test]
  fn accessors() {
    let err = LengthOverflow::new(u64::MAX, 64);
    assert_eq!(err.len(), u64::MAX);
    assert_eq!(err.max(), 64);
  }

  #[test]
  fn is_copy_and_eq() {
    let e = LengthOverflow::new(9, 8);
    let e2 = e;
    assert_eq!(e, e2);
    assert_ne!(e, LengthOverflow::new(10, 8));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<LengthOverflow>();
    assert_sync::<LengthOverflow>();
    assert_error::<LengthOverflow>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    assert!(LengthOverflow::new(1, 0).source().is_none());
  }
}
