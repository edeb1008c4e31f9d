use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashes::crypto::Sha256;

mod common;

fn oneshot(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("sha256/oneshot");

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("hashes", len), data, |b, d| {
      b.iter(|| black_box(Sha256::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("sha2", len), data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        let out = sha2::Sha256::digest(black_box(d));
        black_box(out)
      })
    });
  }

  group.finish();
}

fn stages(c: &mut Criterion) {
  use hashes::crypto::sha256::{HashState, MessageSchedule, PaddedMessage};

  let data = common::pseudo_random_bytes(64 * 1024, 0x5eed);
  let mut group = c.benchmark_group("sha256/stages");
  common::set_throughput(&mut group, data.len());

  group.bench_function("pad", |b| b.iter(|| black_box(PaddedMessage::new(black_box(&data)))));

  let block = [0x5au8; 64];
  group.bench_function("schedule", |b| b.iter(|| black_box(MessageSchedule::expand(black_box(&block)))));

  let schedule = MessageSchedule::expand(&block);
  group.bench_function("compress", |b| {
    b.iter(|| {
      let mut state = HashState::initial();
      state.compress(black_box(&schedule));
      black_box(state)
    })
  });

  group.finish();
}

criterion_group!(benches, oneshot, stages);
criterion_main!(benches);
