#![no_main]

use hashes::crypto::Sha256;
use libfuzzer_sys::fuzz_target;

// First byte picks the split stride; the rest is the message.
fuzz_target!(|data: &[u8]| {
  let Some((&stride, msg)) = data.split_first() else {
    return;
  };
  let parts: Vec<&[u8]> = msg.chunks(usize::from(stride) + 1).collect();

  let vectored = Sha256::digest_vectored(&parts).expect("fuzz inputs are far below the length limit");
  let contiguous = Sha256::digest(msg).expect("fuzz inputs are far below the length limit");
  assert_eq!(vectored, contiguous);
});
