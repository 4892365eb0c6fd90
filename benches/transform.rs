// Copyright (c) 2018-2023, the av1-txfm contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use criterion::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use av1_txfm::transform::{
  av1_fdct16, av1_fdct32, av1_fdct64, forward_transform,
};
use av1_txfm::{CoeffMode, TxSize, TxType};

fn init_buffers(size: usize) -> (Vec<i32>, Vec<i32>) {
  let mut ra = ChaChaRng::from_seed([0; 32]);
  let input: Vec<i32> = (0..size).map(|_| ra.gen_range(-1024..1024)).collect();
  let output = vec![0i32; size];

  (input, output)
}

fn residual_block(area: usize) -> Vec<i16> {
  let mut ra = ChaChaRng::from_seed([1; 32]);
  (0..area).map(|_| ra.gen_range(-255..=255)).collect()
}

pub fn fdct16(c: &mut Criterion) {
  let (input, mut output) = init_buffers(16);

  c.bench_function("av1_fdct16", move |b| {
    b.iter(|| av1_fdct16(&input[..], &mut output[..], 13))
  });
}

pub fn fdct32(c: &mut Criterion) {
  let (input, mut output) = init_buffers(32);

  c.bench_function("av1_fdct32", move |b| {
    b.iter(|| av1_fdct32(&input[..], &mut output[..], 12))
  });
}

pub fn fdct64(c: &mut Criterion) {
  let (input, mut output) = init_buffers(64);

  c.bench_function("av1_fdct64", move |b| {
    b.iter(|| av1_fdct64(&input[..], &mut output[..], 12))
  });
}

pub fn fwd_16x16_full(c: &mut Criterion) {
  let res = residual_block(16 * 16);
  let mut freq = vec![0i32; 16 * 16];

  c.bench_function("fwd_txfm2d_16x16", move |b| {
    b.iter(|| {
      forward_transform(
        &res,
        &mut freq,
        16,
        TxSize::TX_16X16,
        TxType::DCT_DCT,
        8,
        CoeffMode::Full,
      )
    })
  });
}

pub fn fwd_16x16_n2(c: &mut Criterion) {
  let res = residual_block(16 * 16);
  let mut freq = vec![0i32; 16 * 16];

  c.bench_function("fwd_txfm2d_16x16_n2", move |b| {
    b.iter(|| {
      forward_transform(
        &res,
        &mut freq,
        16,
        TxSize::TX_16X16,
        TxType::DCT_DCT,
        8,
        CoeffMode::N2,
      )
    })
  });
}

pub fn fwd_64x64(c: &mut Criterion) {
  let res = residual_block(64 * 64);
  let mut freq = vec![0i32; 64 * 64];

  c.bench_function("fwd_txfm2d_64x64", move |b| {
    b.iter(|| {
      forward_transform(
        &res,
        &mut freq,
        64,
        TxSize::TX_64X64,
        TxType::DCT_DCT,
        8,
        CoeffMode::Full,
      )
    })
  });
}

criterion_group!(
  transform,
  fdct16,
  fdct32,
  fdct64,
  fwd_16x16_full,
  fwd_16x16_n2,
  fwd_64x64
);
criterion_main!(transform);
