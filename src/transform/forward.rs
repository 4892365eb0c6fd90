// Copyright (c) 2018-2023, the av1-txfm contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

use super::*;
use crate::util::*;

pub type TxfmShift = [i8; 3];

// Per-size shift triples: input pre-scale, post-column rounding, post-row
// rounding. Negative values shift right. The totals are tuned so that the
// 2-D gain of every size lands on the same power of two the inverse undoes,
// and every intermediate stays within i32 up to 12-bit input.
const FWD_TXFM_SHIFT_LS: [TxfmShift; TxSize::TX_SIZES_ALL] = [
  [2, 0, 0],   // 4x4
  [2, -1, 0],  // 8x8
  [2, -2, 0],  // 16x16
  [2, -4, 0],  // 32x32
  [0, -2, -2], // 64x64
  [2, -1, 0],  // 4x8
  [2, -1, 0],  // 8x4
  [2, -2, 0],  // 8x16
  [2, -2, 0],  // 16x8
  [2, -4, 0],  // 16x32
  [2, -4, 0],  // 32x16
  [0, -2, -2], // 32x64
  [0, -2, -2], // 64x32
  [2, -1, 0],  // 4x16
  [2, -1, 0],  // 16x4
  [2, -2, 0],  // 8x32
  [2, -2, 0],  // 32x8
  [0, -2, 0],  // 16x64
  [0, -2, 0],  // 64x16
];

// Working precision of the column and row passes, indexed by
// [width_index][height_index]. Zero marks a geometry that does not exist.
const FWD_COS_BIT_COL: [[usize; 5]; 5] = [
  [13, 13, 13, 0, 0],
  [13, 13, 13, 12, 0],
  [13, 13, 13, 12, 13],
  [0, 13, 13, 12, 13],
  [0, 0, 13, 12, 13],
];

const FWD_COS_BIT_ROW: [[usize; 5]; 5] = [
  [13, 13, 12, 0, 0],
  [13, 13, 13, 12, 0],
  [13, 13, 12, 13, 12],
  [0, 12, 13, 12, 11],
  [0, 0, 12, 11, 10],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxfmType {
  DCT4,
  DCT8,
  DCT16,
  DCT32,
  DCT64,
  ADST4,
  ADST8,
  ADST16,
  Identity4,
  Identity8,
  Identity16,
  Identity32,
}

impl TxfmType {
  const TX_TYPES_1D: usize = 4;
  const AV1_TXFM_TYPE_LS: [[Option<TxfmType>; Self::TX_TYPES_1D]; 5] = [
    [
      Some(TxfmType::DCT4),
      Some(TxfmType::ADST4),
      Some(TxfmType::ADST4),
      Some(TxfmType::Identity4),
    ],
    [
      Some(TxfmType::DCT8),
      Some(TxfmType::ADST8),
      Some(TxfmType::ADST8),
      Some(TxfmType::Identity8),
    ],
    [
      Some(TxfmType::DCT16),
      Some(TxfmType::ADST16),
      Some(TxfmType::ADST16),
      Some(TxfmType::Identity16),
    ],
    [Some(TxfmType::DCT32), None, None, Some(TxfmType::Identity32)],
    [Some(TxfmType::DCT64), None, None, None],
  ];
}

#[derive(Debug, Clone, Copy)]
pub struct Txfm2DFlipCfg {
  pub tx_size: TxSize,
  /// Flip upside down
  pub ud_flip: bool,
  /// Flip left to right
  pub lr_flip: bool,
  pub shift: TxfmShift,
  pub cos_bit_col: usize,
  pub cos_bit_row: usize,
  pub txfm_type_col: TxfmType,
  pub txfm_type_row: TxfmType,
}

impl Txfm2DFlipCfg {
  /// # Panics
  ///
  /// - If called with an invalid combination of `tx_size` and `tx_type`
  pub fn fwd(tx_type: TxType, tx_size: TxSize, bd: usize) -> Self {
    debug_assert!(bd == 8 || bd == 10 || bd == 12);
    let tx_type_1d_col = VTX_TAB[tx_type as usize];
    let tx_type_1d_row = HTX_TAB[tx_type as usize];
    let txw_idx = tx_size.width_index();
    let txh_idx = tx_size.height_index();
    let txfm_type_col = TxfmType::AV1_TXFM_TYPE_LS[txh_idx]
      [tx_type_1d_col as usize]
      .expect("transform type not supported for this block height");
    let txfm_type_row = TxfmType::AV1_TXFM_TYPE_LS[txw_idx]
      [tx_type_1d_row as usize]
      .expect("transform type not supported for this block width");
    let (ud_flip, lr_flip) = Self::get_flip_cfg(tx_type);

    Txfm2DFlipCfg {
      tx_size,
      ud_flip,
      lr_flip,
      shift: FWD_TXFM_SHIFT_LS[tx_size as usize],
      cos_bit_col: FWD_COS_BIT_COL[txw_idx][txh_idx],
      cos_bit_row: FWD_COS_BIT_ROW[txw_idx][txh_idx],
      txfm_type_col,
      txfm_type_row,
    }
  }

  /// Determine the flip config, returning `(ud_flip, lr_flip)`
  pub(crate) const fn get_flip_cfg(tx_type: TxType) -> (bool, bool) {
    use self::TxType::*;
    match tx_type {
      DCT_DCT | ADST_DCT | DCT_ADST | ADST_ADST | IDTX | V_DCT | H_DCT
      | V_ADST | H_ADST => (false, false),
      FLIPADST_DCT | FLIPADST_ADST | V_FLIPADST => (true, false),
      DCT_FLIPADST | ADST_FLIPADST | H_FLIPADST => (false, true),
      FLIPADST_FLIPADST => (true, true),
    }
  }
}

// The N-point DCT-II below is built by radix-2 decomposition: the mirrored
// sums recurse into the N/2-point kernel and land on the even output
// indices, while the mirrored differences run through a ladder of
// table-driven butterflies and land on the odd indices. Outputs are in
// increasing frequency order.

pub fn av1_fdct4(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let cospi = cospi_arr(cos_bit);

  let s0 = input[0] + input[3];
  let s1 = input[1] + input[2];
  let s2 = input[1] - input[2];
  let s3 = input[0] - input[3];

  output[0] = half_btf(cospi[32], s0, cospi[32], s1, cos_bit);
  output[2] = half_btf(cospi[32], s0, -cospi[32], s1, cos_bit);
  output[1] = half_btf(cospi[48], s2, cospi[16], s3, cos_bit);
  output[3] = half_btf(cospi[48], s3, -cospi[16], s2, cos_bit);
}

pub fn av1_fdct8(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let cospi = cospi_arr(cos_bit);

  let sums = [
    input[0] + input[7],
    input[1] + input[6],
    input[2] + input[5],
    input[3] + input[4],
  ];
  let d = [
    input[3] - input[4],
    input[2] - input[5],
    input[1] - input[6],
    input[0] - input[7],
  ];

  let mut even = [0i32; 4];
  av1_fdct4(&sums, &mut even, cos_bit);
  for (i, &e) in even.iter().enumerate() {
    output[2 * i] = e;
  }

  let t1 = half_btf(-cospi[32], d[1], cospi[32], d[2], cos_bit);
  let t2 = half_btf(cospi[32], d[2], cospi[32], d[1], cos_bit);

  let u0 = d[0] + t1;
  let u1 = d[0] - t1;
  let u2 = -t2 + d[3];
  let u3 = t2 + d[3];

  output[1] = half_btf(cospi[56], u0, cospi[8], u3, cos_bit);
  output[7] = half_btf(cospi[56], u3, -cospi[8], u0, cos_bit);
  output[5] = half_btf(cospi[24], u1, cospi[40], u2, cos_bit);
  output[3] = half_btf(cospi[24], u2, -cospi[40], u1, cos_bit);
}

pub fn av1_fdct16(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let cospi = cospi_arr(cos_bit);

  let mut sums = [0i32; 8];
  let mut d = [0i32; 8];
  for i in 0..8 {
    sums[i] = input[i] + input[15 - i];
    d[i] = input[7 - i] - input[8 + i];
  }

  let mut even = [0i32; 8];
  av1_fdct8(&sums, &mut even, cos_bit);
  for (i, &e) in even.iter().enumerate() {
    output[2 * i] = e;
  }

  let mut t = d;
  for j in 2..4 {
    t[j] = half_btf(-cospi[32], d[j], cospi[32], d[7 - j], cos_bit);
    t[7 - j] = half_btf(cospi[32], d[7 - j], cospi[32], d[j], cos_bit);
  }

  let mut u = [0i32; 8];
  for j in 0..2 {
    u[j] = t[j] + t[3 - j];
    u[3 - j] = t[j] - t[3 - j];
    u[4 + j] = -t[4 + j] + t[7 - j];
    u[7 - j] = t[4 + j] + t[7 - j];
  }

  let mut w = u;
  w[1] = half_btf(-cospi[16], u[1], cospi[48], u[6], cos_bit);
  w[2] = half_btf(-cospi[48], u[2], -cospi[16], u[5], cos_bit);
  w[5] = half_btf(-cospi[16], u[2], cospi[48], u[5], cos_bit);
  w[6] = half_btf(cospi[48], u[1], cospi[16], u[6], cos_bit);

  let z = [
    w[0] + w[1],
    w[0] - w[1],
    -w[2] + w[3],
    w[2] + w[3],
    w[4] + w[5],
    w[4] - w[5],
    -w[6] + w[7],
    w[6] + w[7],
  ];

  output[1] = half_btf(cospi[60], z[0], cospi[4], z[7], cos_bit);
  output[15] = half_btf(cospi[60], z[7], -cospi[4], z[0], cos_bit);
  output[9] = half_btf(cospi[28], z[1], cospi[36], z[6], cos_bit);
  output[7] = half_btf(cospi[28], z[6], -cospi[36], z[1], cos_bit);
  output[5] = half_btf(cospi[44], z[2], cospi[20], z[5], cos_bit);
  output[11] = half_btf(cospi[44], z[5], -cospi[20], z[2], cos_bit);
  output[13] = half_btf(cospi[12], z[3], cospi[52], z[4], cos_bit);
  output[3] = half_btf(cospi[12], z[4], -cospi[52], z[3], cos_bit);
}

pub fn av1_fdct32(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let cospi = cospi_arr(cos_bit);

  let mut sums = [0i32; 16];
  let mut d = [0i32; 16];
  for i in 0..16 {
    sums[i] = input[i] + input[31 - i];
    d[i] = input[15 - i] - input[16 + i];
  }

  let mut even = [0i32; 16];
  av1_fdct16(&sums, &mut even, cos_bit);
  for (i, &e) in even.iter().enumerate() {
    output[2 * i] = e;
  }

  let mut t = d;
  for j in 4..8 {
    t[j] = half_btf(-cospi[32], d[j], cospi[32], d[15 - j], cos_bit);
    t[15 - j] = half_btf(cospi[32], d[15 - j], cospi[32], d[j], cos_bit);
  }

  let mut u = [0i32; 16];
  for j in 0..4 {
    u[j] = t[j] + t[7 - j];
    u[7 - j] = t[j] - t[7 - j];
    u[8 + j] = -t[8 + j] + t[15 - j];
    u[15 - j] = t[8 + j] + t[15 - j];
  }

  let mut w = u;
  for j in 2..4 {
    w[j] = half_btf(-cospi[16], u[j], cospi[48], u[15 - j], cos_bit);
    w[15 - j] = half_btf(cospi[48], u[j], cospi[16], u[15 - j], cos_bit);
  }
  for j in 4..6 {
    w[j] = half_btf(-cospi[48], u[j], -cospi[16], u[15 - j], cos_bit);
    w[15 - j] = half_btf(-cospi[16], u[j], cospi[48], u[15 - j], cos_bit);
  }

  let mut z = [0i32; 16];
  for j in 0..2 {
    z[j] = w[j] + w[3 - j];
    z[3 - j] = w[j] - w[3 - j];
    z[4 + j] = -w[4 + j] + w[7 - j];
    z[7 - j] = w[4 + j] + w[7 - j];
    z[8 + j] = w[8 + j] + w[11 - j];
    z[11 - j] = w[8 + j] - w[11 - j];
    z[12 + j] = -w[12 + j] + w[15 - j];
    z[15 - j] = w[12 + j] + w[15 - j];
  }

  let mut v = z;
  v[1] = half_btf(-cospi[8], z[1], cospi[56], z[14], cos_bit);
  v[14] = half_btf(cospi[56], z[1], cospi[8], z[14], cos_bit);
  v[2] = half_btf(-cospi[56], z[2], -cospi[8], z[13], cos_bit);
  v[13] = half_btf(-cospi[8], z[2], cospi[56], z[13], cos_bit);
  v[5] = half_btf(-cospi[40], z[5], cospi[24], z[10], cos_bit);
  v[10] = half_btf(cospi[24], z[5], cospi[40], z[10], cos_bit);
  v[6] = half_btf(-cospi[24], z[6], -cospi[40], z[9], cos_bit);
  v[9] = half_btf(-cospi[40], z[6], cospi[24], z[9], cos_bit);

  let mut r = [0i32; 16];
  for j in 0..8 {
    let (a, b) = (2 * j, 2 * j + 1);
    if j % 2 == 0 {
      r[a] = v[a] + v[b];
      r[b] = v[a] - v[b];
    } else {
      r[a] = -v[a] + v[b];
      r[b] = v[a] + v[b];
    }
  }

  // Final rotations: (weight, partner weight, low output, high output) per
  // difference-ladder lane.
  const FINAL_ROT: [(usize, usize, usize, usize); 8] = [
    (62, 2, 1, 31),
    (30, 34, 17, 15),
    (46, 18, 9, 23),
    (14, 50, 25, 7),
    (54, 10, 5, 27),
    (22, 42, 21, 11),
    (38, 26, 13, 19),
    (6, 58, 29, 3),
  ];
  for (j, &(a, b, lo, hi)) in FINAL_ROT.iter().enumerate() {
    output[lo] = half_btf(cospi[a], r[j], cospi[b], r[15 - j], cos_bit);
    output[hi] = half_btf(cospi[a], r[15 - j], -cospi[b], r[j], cos_bit);
  }
}

pub fn av1_fdct64(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let cospi = cospi_arr(cos_bit);

  let mut sums = [0i32; 32];
  let mut d = [0i32; 32];
  for i in 0..32 {
    sums[i] = input[i] + input[63 - i];
    d[i] = input[31 - i] - input[32 + i];
  }

  let mut even = [0i32; 32];
  av1_fdct32(&sums, &mut even, cos_bit);
  for (i, &e) in even.iter().enumerate() {
    output[2 * i] = e;
  }

  let mut t = d;
  for j in 8..16 {
    t[j] = half_btf(-cospi[32], d[j], cospi[32], d[31 - j], cos_bit);
    t[31 - j] = half_btf(cospi[32], d[31 - j], cospi[32], d[j], cos_bit);
  }

  let mut u = [0i32; 32];
  for j in 0..8 {
    u[j] = t[j] + t[15 - j];
    u[15 - j] = t[j] - t[15 - j];
    u[16 + j] = -t[16 + j] + t[31 - j];
    u[31 - j] = t[16 + j] + t[31 - j];
  }

  let mut w = u;
  for j in 4..8 {
    w[j] = half_btf(-cospi[16], u[j], cospi[48], u[31 - j], cos_bit);
    w[31 - j] = half_btf(cospi[48], u[j], cospi[16], u[31 - j], cos_bit);
  }
  for j in 8..12 {
    w[j] = half_btf(-cospi[48], u[j], -cospi[16], u[31 - j], cos_bit);
    w[31 - j] = half_btf(-cospi[16], u[j], cospi[48], u[31 - j], cos_bit);
  }

  let mut z = [0i32; 32];
  for j in 0..4 {
    z[j] = w[j] + w[7 - j];
    z[7 - j] = w[j] - w[7 - j];
    z[8 + j] = -w[8 + j] + w[15 - j];
    z[15 - j] = w[8 + j] + w[15 - j];
    z[16 + j] = w[16 + j] + w[23 - j];
    z[23 - j] = w[16 + j] - w[23 - j];
    z[24 + j] = -w[24 + j] + w[31 - j];
    z[31 - j] = w[24 + j] + w[31 - j];
  }

  let mut v = z;
  for j in 2..4 {
    v[j] = half_btf(-cospi[8], z[j], cospi[56], z[31 - j], cos_bit);
    v[31 - j] = half_btf(cospi[56], z[j], cospi[8], z[31 - j], cos_bit);
  }
  for j in 4..6 {
    v[j] = half_btf(-cospi[56], z[j], -cospi[8], z[31 - j], cos_bit);
    v[31 - j] = half_btf(-cospi[8], z[j], cospi[56], z[31 - j], cos_bit);
  }
  for j in 10..12 {
    v[j] = half_btf(-cospi[40], z[j], cospi[24], z[31 - j], cos_bit);
    v[31 - j] = half_btf(cospi[24], z[j], cospi[40], z[31 - j], cos_bit);
  }
  for j in 12..14 {
    v[j] = half_btf(-cospi[24], z[j], -cospi[40], z[31 - j], cos_bit);
    v[31 - j] = half_btf(-cospi[40], z[j], cospi[24], z[31 - j], cos_bit);
  }

  let mut r = [0i32; 32];
  for g in 0..8 {
    let base = 4 * g;
    for j in 0..2 {
      if g % 2 == 0 {
        r[base + j] = v[base + j] + v[base + 3 - j];
        r[base + 3 - j] = v[base + j] - v[base + 3 - j];
      } else {
        r[base + j] = -v[base + j] + v[base + 3 - j];
        r[base + 3 - j] = v[base + j] + v[base + 3 - j];
      }
    }
  }

  let mut q = r;
  for &(k, a, b) in &[(1usize, 60usize, 4usize), (5, 28, 36), (9, 44, 20), (13, 12, 52)]
  {
    q[k] = half_btf(-cospi[b], r[k], cospi[a], r[31 - k], cos_bit);
    q[31 - k] = half_btf(cospi[a], r[k], cospi[b], r[31 - k], cos_bit);
    q[k + 1] = half_btf(-cospi[a], r[k + 1], -cospi[b], r[30 - k], cos_bit);
    q[30 - k] = half_btf(-cospi[b], r[k + 1], cospi[a], r[30 - k], cos_bit);
  }

  let mut p = [0i32; 32];
  for j in 0..16 {
    let a = 2 * j;
    if j % 2 == 0 {
      p[a] = q[a] + q[a + 1];
      p[a + 1] = q[a] - q[a + 1];
    } else {
      p[a] = -q[a] + q[a + 1];
      p[a + 1] = q[a] + q[a + 1];
    }
  }

  const FINAL_ROT: [(usize, usize, usize, usize); 16] = [
    (63, 1, 1, 63),
    (31, 33, 33, 31),
    (47, 17, 17, 47),
    (15, 49, 49, 15),
    (55, 9, 9, 55),
    (23, 41, 41, 23),
    (39, 25, 25, 39),
    (7, 57, 57, 7),
    (59, 5, 5, 59),
    (27, 37, 37, 27),
    (43, 21, 21, 43),
    (11, 53, 53, 11),
    (51, 13, 13, 51),
    (19, 45, 45, 19),
    (35, 29, 29, 35),
    (3, 61, 61, 3),
  ];
  for (j, &(a, b, lo, hi)) in FINAL_ROT.iter().enumerate() {
    output[lo] = half_btf(cospi[a], p[j], cospi[b], p[31 - j], cos_bit);
    output[hi] = half_btf(cospi[a], p[31 - j], -cospi[b], p[j], cos_bit);
  }
}

// The 4-point ADST is a dedicated network over the sine table; each output
// is rounded exactly once.
pub fn av1_fadst4(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let sinpi = sinpi_arr(cos_bit);

  let x0 = i64::from(input[0]);
  let x1 = i64::from(input[1]);
  let x2 = i64::from(input[2]);
  let x3 = i64::from(input[3]);

  let sp = |k: usize| i64::from(sinpi[k]);

  let s0 = sp(1) * x0 + sp(2) * x1 + sp(3) * x2 + sp(4) * x3;
  let s1 = sp(3) * (x0 + x1 - x3);
  let s2 = sp(4) * x0 - sp(1) * x1 - sp(3) * x2 + sp(2) * x3;
  let s3 = sp(2) * x0 - sp(4) * x1 + sp(3) * x2 - sp(1) * x3;

  output[0] = round_shift_wide(s0, cos_bit);
  output[1] = round_shift_wide(s1, cos_bit);
  output[2] = round_shift_wide(s2, cos_bit);
  output[3] = round_shift_wide(s3, cos_bit);
}

// The longer ADSTs feed a sign-flipped input permutation into a DCT-shaped
// butterfly ladder and finish with a fixed output permutation.
pub fn av1_fadst8(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let cospi = cospi_arr(cos_bit);

  let x = [
    input[0], -input[7], -input[3], input[4], -input[1], input[6], input[2],
    -input[5],
  ];

  let mut s = x;
  for j in (2..8).step_by(4) {
    s[j] = half_btf(cospi[32], x[j], cospi[32], x[j + 1], cos_bit);
    s[j + 1] = half_btf(cospi[32], x[j], -cospi[32], x[j + 1], cos_bit);
  }

  let mut t = [0i32; 8];
  for g in (0..8).step_by(4) {
    for j in 0..2 {
      t[g + j] = s[g + j] + s[g + j + 2];
      t[g + j + 2] = s[g + j] - s[g + j + 2];
    }
  }

  let mut u = t;
  u[4] = half_btf(cospi[16], t[4], cospi[48], t[5], cos_bit);
  u[5] = half_btf(cospi[48], t[4], -cospi[16], t[5], cos_bit);
  u[6] = half_btf(-cospi[48], t[6], cospi[16], t[7], cos_bit);
  u[7] = half_btf(cospi[16], t[6], cospi[48], t[7], cos_bit);

  let mut v = [0i32; 8];
  for j in 0..4 {
    v[j] = u[j] + u[j + 4];
    v[j + 4] = u[j] - u[j + 4];
  }

  let w = [
    half_btf(cospi[4], v[0], cospi[60], v[1], cos_bit),
    half_btf(cospi[60], v[0], -cospi[4], v[1], cos_bit),
    half_btf(cospi[20], v[2], cospi[44], v[3], cos_bit),
    half_btf(cospi[44], v[2], -cospi[20], v[3], cos_bit),
    half_btf(cospi[36], v[4], cospi[28], v[5], cos_bit),
    half_btf(cospi[28], v[4], -cospi[36], v[5], cos_bit),
    half_btf(cospi[52], v[6], cospi[12], v[7], cos_bit),
    half_btf(cospi[12], v[6], -cospi[52], v[7], cos_bit),
  ];

  output[0] = w[1];
  output[1] = w[6];
  output[2] = w[3];
  output[3] = w[4];
  output[4] = w[5];
  output[5] = w[2];
  output[6] = w[7];
  output[7] = w[0];
}

pub fn av1_fadst16(input: &[i32], output: &mut [i32], cos_bit: usize) {
  let cospi = cospi_arr(cos_bit);

  let x = [
    input[0], -input[15], -input[7], input[8], -input[3], input[12],
    input[4], -input[11], -input[1], input[14], input[6], -input[9],
    input[2], -input[13], -input[5], input[10],
  ];

  let mut s = x;
  for j in (2..16).step_by(4) {
    s[j] = half_btf(cospi[32], x[j], cospi[32], x[j + 1], cos_bit);
    s[j + 1] = half_btf(cospi[32], x[j], -cospi[32], x[j + 1], cos_bit);
  }

  let mut t = [0i32; 16];
  for g in (0..16).step_by(4) {
    for j in 0..2 {
      t[g + j] = s[g + j] + s[g + j + 2];
      t[g + j + 2] = s[g + j] - s[g + j + 2];
    }
  }

  let mut u = t;
  for g in (4..16).step_by(8) {
    u[g] = half_btf(cospi[16], t[g], cospi[48], t[g + 1], cos_bit);
    u[g + 1] = half_btf(cospi[48], t[g], -cospi[16], t[g + 1], cos_bit);
    u[g + 2] = half_btf(-cospi[48], t[g + 2], cospi[16], t[g + 3], cos_bit);
    u[g + 3] = half_btf(cospi[16], t[g + 2], cospi[48], t[g + 3], cos_bit);
  }

  let mut v = [0i32; 16];
  for g in (0..16).step_by(8) {
    for j in 0..4 {
      v[g + j] = u[g + j] + u[g + j + 4];
      v[g + j + 4] = u[g + j] - u[g + j + 4];
    }
  }

  let mut w = v;
  w[8] = half_btf(cospi[8], v[8], cospi[56], v[9], cos_bit);
  w[9] = half_btf(cospi[56], v[8], -cospi[8], v[9], cos_bit);
  w[10] = half_btf(cospi[40], v[10], cospi[24], v[11], cos_bit);
  w[11] = half_btf(cospi[24], v[10], -cospi[40], v[11], cos_bit);
  w[12] = half_btf(-cospi[56], v[12], cospi[8], v[13], cos_bit);
  w[13] = half_btf(cospi[8], v[12], cospi[56], v[13], cos_bit);
  w[14] = half_btf(-cospi[24], v[14], cospi[40], v[15], cos_bit);
  w[15] = half_btf(cospi[40], v[14], cospi[24], v[15], cos_bit);

  let mut g = [0i32; 16];
  for j in 0..8 {
    g[j] = w[j] + w[j + 8];
    g[j + 8] = w[j] - w[j + 8];
  }

  const FINAL_ROT: [(usize, usize); 8] = [
    (2, 62),
    (10, 54),
    (18, 46),
    (26, 38),
    (34, 30),
    (42, 22),
    (50, 14),
    (58, 6),
  ];
  let mut y = [0i32; 16];
  for (j, &(a, b)) in FINAL_ROT.iter().enumerate() {
    y[2 * j] = half_btf(cospi[a], g[2 * j], cospi[b], g[2 * j + 1], cos_bit);
    y[2 * j + 1] =
      half_btf(cospi[b], g[2 * j], -cospi[a], g[2 * j + 1], cos_bit);
  }

  output[15] = y[0];
  output[0] = y[1];
  output[13] = y[2];
  output[2] = y[3];
  output[11] = y[4];
  output[4] = y[5];
  output[9] = y[6];
  output[6] = y[7];
  output[7] = y[8];
  output[8] = y[9];
  output[5] = y[10];
  output[10] = y[11];
  output[3] = y[12];
  output[12] = y[13];
  output[1] = y[14];
  output[14] = y[15];
}

pub fn av1_fidentity4(input: &[i32], output: &mut [i32], _cos_bit: usize) {
  for i in 0..4 {
    output[i] =
      round_shift_wide(i64::from(input[i]) * i64::from(SQRT2), SQRT2_BITS);
  }
}

pub fn av1_fidentity8(input: &[i32], output: &mut [i32], _cos_bit: usize) {
  for i in 0..8 {
    output[i] = input[i] * 2;
  }
}

pub fn av1_fidentity16(input: &[i32], output: &mut [i32], _cos_bit: usize) {
  for i in 0..16 {
    output[i] = round_shift_wide(
      i64::from(input[i]) * 2 * i64::from(SQRT2),
      SQRT2_BITS,
    );
  }
}

pub fn av1_fidentity32(input: &[i32], output: &mut [i32], _cos_bit: usize) {
  for i in 0..32 {
    output[i] = input[i] * 4;
  }
}

type TxfmFunc = fn(&[i32], &mut [i32], usize);

#[inline]
fn get_func(t: TxfmType) -> TxfmFunc {
  use self::TxfmType::*;
  match t {
    DCT4 => av1_fdct4,
    DCT8 => av1_fdct8,
    DCT16 => av1_fdct16,
    DCT32 => av1_fdct32,
    DCT64 => av1_fdct64,
    ADST4 => av1_fadst4,
    ADST8 => av1_fadst8,
    ADST16 => av1_fadst16,
    Identity4 => av1_fidentity4,
    Identity8 => av1_fidentity8,
    Identity16 => av1_fidentity16,
    Identity32 => av1_fidentity32,
  }
}

pub trait FwdTxfm2D: Dim {
  fn fwd_txfm2d<T: Coefficient>(
    input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
    bd: usize, coeff_mode: CoeffMode,
  ) {
    assert!(stride >= Self::W);
    assert!(output.len() >= Self::W * Self::H);
    let mut tmp: AlignedArray<[i32; 64 * 64]> = AlignedArray::new([0; 64 * 64]);
    let buf = &mut tmp.array[..Self::W * Self::H];
    let cfg =
      Txfm2DFlipCfg::fwd(tx_type, TxSize::by_dims(Self::W, Self::H), bd);
    let rect_type = get_rect_tx_log_ratio(Self::W, Self::H);

    let txfm_size_col = Self::W;
    let txfm_size_row = Self::H;

    // A 64-point axis only ever populates its 32 low frequencies; the
    // partial-coefficient modes shrink the computed region further. Every
    // position outside it is deterministic zero.
    let max_cols = if txfm_size_col == 64 { 32 } else { txfm_size_col };
    let max_rows = if txfm_size_row == 64 { 32 } else { txfm_size_row };
    let out_cols = (txfm_size_col >> coeff_mode.log2_ratio()).min(max_cols);
    let out_rows = (txfm_size_row >> coeff_mode.log2_ratio()).min(max_rows);

    let txfm_func_col = get_func(cfg.txfm_type_col);
    let txfm_func_row = get_func(cfg.txfm_type_row);

    // Columns. Every column runs at full length: each retained frequency
    // depends on all H input samples.
    for c in 0..txfm_size_col {
      let mut col_in = [0i32; 64];
      if cfg.ud_flip {
        // flip upside down
        for r in 0..txfm_size_row {
          col_in[r] = input[(txfm_size_row - r - 1) * stride + c].into();
        }
      } else {
        for r in 0..txfm_size_row {
          col_in[r] = input[r * stride + c].into();
        }
      }
      av1_round_shift_array(&mut col_in, txfm_size_row, -cfg.shift[0]);
      let mut col_out = [0i32; 64];
      txfm_func_col(
        &col_in[..txfm_size_row],
        &mut col_out[..txfm_size_row],
        cfg.cos_bit_col,
      );
      av1_round_shift_array(&mut col_out, txfm_size_row, -cfg.shift[1]);
      let dst_c =
        if cfg.lr_flip { txfm_size_col - c - 1 } else { c };
      for r in 0..out_rows {
        buf[r * txfm_size_col + dst_c] = col_out[r];
      }
    }

    // Rows. Only the frequency rows that survive the coefficient mode are
    // transformed at all.
    for r in 0..out_rows {
      let mut row_out = [0i32; 64];
      txfm_func_row(
        &buf[r * txfm_size_col..][..txfm_size_col],
        &mut row_out[..txfm_size_col],
        cfg.cos_bit_row,
      );
      av1_round_shift_array(&mut row_out, txfm_size_col, -cfg.shift[2]);
      if rect_type.abs() == 1 {
        // Rectangles halfway between two square sizes carry a sqrt(2)
        // energy correction.
        for v in row_out.iter_mut().take(out_cols) {
          *v = round_shift_wide(i64::from(*v) * i64::from(SQRT2), SQRT2_BITS);
        }
      }
      for c in 0..out_cols {
        output[r * txfm_size_col + c] = T::cast_from(row_out[c]);
      }
      for c in out_cols..txfm_size_col {
        output[r * txfm_size_col + c] = T::cast_from(0i32);
      }
    }
    for v in
      output[out_rows * txfm_size_col..txfm_size_row * txfm_size_col].iter_mut()
    {
      *v = T::cast_from(0i32);
    }
  }
}

macro_rules! impl_fwd_txs {
  ($(($W:expr, $H:expr)),+) => {
    $(
      paste::paste! {
        impl FwdTxfm2D for [<Block $W x $H>] {}
      }
    )*
  }
}

impl_fwd_txs! { (4, 4), (8, 8), (16, 16), (32, 32), (64, 64) }
impl_fwd_txs! { (4, 8), (8, 16), (16, 32), (32, 64) }
impl_fwd_txs! { (8, 4), (16, 8), (32, 16), (64, 32) }
impl_fwd_txs! { (4, 16), (8, 32), (16, 64) }
impl_fwd_txs! { (16, 4), (32, 8), (64, 16) }

pub fn fht4x4<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block4x4::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht8x8<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block8x8::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht16x16<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block16x16::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht32x32<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block32x32::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht64x64<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block64x64::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht4x8<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block4x8::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht8x4<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block8x4::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht8x16<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block8x16::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht16x8<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block16x8::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht16x32<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block16x32::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht32x16<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block32x16::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht32x64<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block32x64::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht64x32<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block64x32::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht4x16<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block4x16::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht16x4<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  Block16x4::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht8x32<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block8x32::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht32x8<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block32x8::fwd_txfm2d(input, output, stride, tx_type, bit_depth, coeff_mode);
}

pub fn fht16x64<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block16x64::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}

pub fn fht64x16<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize, coeff_mode: CoeffMode,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block64x16::fwd_txfm2d(
    input, output, stride, tx_type, bit_depth, coeff_mode,
  );
}
