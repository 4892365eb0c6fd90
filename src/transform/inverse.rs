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

use std::cmp;

// The inverse always runs at 12-bit table precision.
const INV_COS_BIT: usize = 12;

// The N-point inverse DCT mirrors the forward decomposition: the even
// frequencies recurse into the N/2-point kernel, the odd frequencies run
// the difference ladder in reverse, and the two halves recombine with a
// final mirrored butterfly. Intermediate butterflies clamp to the
// bit-depth-derived `range` as the AV1 inverse-transform process requires.

pub fn av1_idct4(input: &[i32], output: &mut [i32], range: usize) {
  let cospi = cospi_arr(INV_COS_BIT);

  let stg1 = [input[0], input[2], input[1], input[3]];

  let stg2 = [
    half_btf(cospi[32], stg1[0], cospi[32], stg1[1], INV_COS_BIT),
    half_btf(cospi[32], stg1[0], -cospi[32], stg1[1], INV_COS_BIT),
    half_btf(cospi[48], stg1[2], -cospi[16], stg1[3], INV_COS_BIT),
    half_btf(cospi[16], stg1[2], cospi[48], stg1[3], INV_COS_BIT),
  ];

  output[0] = clamp_value(stg2[0] + stg2[3], range);
  output[1] = clamp_value(stg2[1] + stg2[2], range);
  output[2] = clamp_value(stg2[1] - stg2[2], range);
  output[3] = clamp_value(stg2[0] - stg2[3], range);
}

pub fn av1_idct8(input: &[i32], output: &mut [i32], range: usize) {
  let cospi = cospi_arr(INV_COS_BIT);

  let temp_in = [input[0], input[2], input[4], input[6]];
  let mut e: [i32; 4] = [0; 4];
  av1_idct4(&temp_in, &mut e, range);

  let x = [input[1], input[5], input[3], input[7]];

  let y = [
    half_btf(cospi[56], x[0], -cospi[8], x[3], INV_COS_BIT),
    half_btf(cospi[24], x[1], -cospi[40], x[2], INV_COS_BIT),
    half_btf(cospi[40], x[1], cospi[24], x[2], INV_COS_BIT),
    half_btf(cospi[8], x[0], cospi[56], x[3], INV_COS_BIT),
  ];

  let z = [
    clamp_value(y[0] + y[1], range),
    clamp_value(y[0] - y[1], range),
    clamp_value(-y[2] + y[3], range),
    clamp_value(y[2] + y[3], range),
  ];

  let g = [
    z[0],
    half_btf(-cospi[32], z[1], cospi[32], z[2], INV_COS_BIT),
    half_btf(cospi[32], z[1], cospi[32], z[2], INV_COS_BIT),
    z[3],
  ];

  for k in 0..4 {
    output[k] = clamp_value(e[k] + g[3 - k], range);
    output[4 + k] = clamp_value(e[3 - k] - g[k], range);
  }
}

pub fn av1_idct16(input: &[i32], output: &mut [i32], range: usize) {
  let cospi = cospi_arr(INV_COS_BIT);

  let mut temp_in = [0i32; 8];
  for (i, v) in temp_in.iter_mut().enumerate() {
    *v = input[2 * i];
  }
  let mut e: [i32; 8] = [0; 8];
  av1_idct8(&temp_in, &mut e, range);

  let x = [
    input[1], input[9], input[5], input[13], input[3], input[11], input[7],
    input[15],
  ];

  let y = [
    half_btf(cospi[60], x[0], -cospi[4], x[7], INV_COS_BIT),
    half_btf(cospi[28], x[1], -cospi[36], x[6], INV_COS_BIT),
    half_btf(cospi[44], x[2], -cospi[20], x[5], INV_COS_BIT),
    half_btf(cospi[12], x[3], -cospi[52], x[4], INV_COS_BIT),
    half_btf(cospi[52], x[3], cospi[12], x[4], INV_COS_BIT),
    half_btf(cospi[20], x[2], cospi[44], x[5], INV_COS_BIT),
    half_btf(cospi[36], x[1], cospi[28], x[6], INV_COS_BIT),
    half_btf(cospi[4], x[0], cospi[60], x[7], INV_COS_BIT),
  ];

  let z = [
    clamp_value(y[0] + y[1], range),
    clamp_value(y[0] - y[1], range),
    clamp_value(-y[2] + y[3], range),
    clamp_value(y[2] + y[3], range),
    clamp_value(y[4] + y[5], range),
    clamp_value(y[4] - y[5], range),
    clamp_value(-y[6] + y[7], range),
    clamp_value(y[6] + y[7], range),
  ];

  let w = [
    z[0],
    half_btf(-cospi[16], z[1], cospi[48], z[6], INV_COS_BIT),
    half_btf(-cospi[48], z[2], -cospi[16], z[5], INV_COS_BIT),
    z[3],
    z[4],
    half_btf(-cospi[16], z[2], cospi[48], z[5], INV_COS_BIT),
    half_btf(cospi[48], z[1], cospi[16], z[6], INV_COS_BIT),
    z[7],
  ];

  let v = [
    clamp_value(w[0] + w[3], range),
    clamp_value(w[1] + w[2], range),
    clamp_value(w[1] - w[2], range),
    clamp_value(w[0] - w[3], range),
    clamp_value(-w[4] + w[7], range),
    clamp_value(-w[5] + w[6], range),
    clamp_value(w[5] + w[6], range),
    clamp_value(w[4] + w[7], range),
  ];

  let g = [
    v[0],
    v[1],
    half_btf(-cospi[32], v[2], cospi[32], v[5], INV_COS_BIT),
    half_btf(-cospi[32], v[3], cospi[32], v[4], INV_COS_BIT),
    half_btf(cospi[32], v[3], cospi[32], v[4], INV_COS_BIT),
    half_btf(cospi[32], v[2], cospi[32], v[5], INV_COS_BIT),
    v[6],
    v[7],
  ];

  for k in 0..8 {
    output[k] = clamp_value(e[k] + g[7 - k], range);
    output[8 + k] = clamp_value(e[7 - k] - g[k], range);
  }
}

pub fn av1_idct32(input: &[i32], output: &mut [i32], range: usize) {
  let cospi = cospi_arr(INV_COS_BIT);

  let mut temp_in = [0i32; 16];
  for (i, v) in temp_in.iter_mut().enumerate() {
    *v = input[2 * i];
  }
  let mut e: [i32; 16] = [0; 16];
  av1_idct16(&temp_in, &mut e, range);

  let x = [
    input[1], input[17], input[9], input[25], input[5], input[21], input[13],
    input[29], input[3], input[19], input[11], input[27], input[7],
    input[23], input[15], input[31],
  ];

  const ROT: [(usize, usize); 8] = [
    (62, 2),
    (30, 34),
    (46, 18),
    (14, 50),
    (54, 10),
    (22, 42),
    (38, 26),
    (6, 58),
  ];
  let mut y = [0i32; 16];
  for (j, &(a, b)) in ROT.iter().enumerate() {
    y[j] = half_btf(cospi[a], x[j], -cospi[b], x[15 - j], INV_COS_BIT);
    y[15 - j] = half_btf(cospi[b], x[j], cospi[a], x[15 - j], INV_COS_BIT);
  }

  let mut z = [0i32; 16];
  for j in 0..8 {
    let a = 2 * j;
    if j % 2 == 0 {
      z[a] = clamp_value(y[a] + y[a + 1], range);
      z[a + 1] = clamp_value(y[a] - y[a + 1], range);
    } else {
      z[a] = clamp_value(-y[a] + y[a + 1], range);
      z[a + 1] = clamp_value(y[a] + y[a + 1], range);
    }
  }

  let mut w = z;
  w[1] = half_btf(-cospi[8], z[1], cospi[56], z[14], INV_COS_BIT);
  w[14] = half_btf(cospi[56], z[1], cospi[8], z[14], INV_COS_BIT);
  w[2] = half_btf(-cospi[56], z[2], -cospi[8], z[13], INV_COS_BIT);
  w[13] = half_btf(-cospi[8], z[2], cospi[56], z[13], INV_COS_BIT);
  w[5] = half_btf(-cospi[40], z[5], cospi[24], z[10], INV_COS_BIT);
  w[10] = half_btf(cospi[24], z[5], cospi[40], z[10], INV_COS_BIT);
  w[6] = half_btf(-cospi[24], z[6], -cospi[40], z[9], INV_COS_BIT);
  w[9] = half_btf(-cospi[40], z[6], cospi[24], z[9], INV_COS_BIT);

  let mut v = [0i32; 16];
  for g in 0..4 {
    let base = 4 * g;
    for j in 0..2 {
      if g % 2 == 0 {
        v[base + j] = clamp_value(w[base + j] + w[base + 3 - j], range);
        v[base + 3 - j] = clamp_value(w[base + j] - w[base + 3 - j], range);
      } else {
        v[base + j] = clamp_value(-w[base + j] + w[base + 3 - j], range);
        v[base + 3 - j] = clamp_value(w[base + j] + w[base + 3 - j], range);
      }
    }
  }

  let mut r = v;
  r[2] = half_btf(-cospi[16], v[2], cospi[48], v[13], INV_COS_BIT);
  r[13] = half_btf(cospi[48], v[2], cospi[16], v[13], INV_COS_BIT);
  r[3] = half_btf(-cospi[16], v[3], cospi[48], v[12], INV_COS_BIT);
  r[12] = half_btf(cospi[48], v[3], cospi[16], v[12], INV_COS_BIT);
  r[4] = half_btf(-cospi[48], v[4], -cospi[16], v[11], INV_COS_BIT);
  r[11] = half_btf(-cospi[16], v[4], cospi[48], v[11], INV_COS_BIT);
  r[5] = half_btf(-cospi[48], v[5], -cospi[16], v[10], INV_COS_BIT);
  r[10] = half_btf(-cospi[16], v[5], cospi[48], v[10], INV_COS_BIT);

  let mut s = [0i32; 16];
  for j in 0..4 {
    s[j] = clamp_value(r[j] + r[7 - j], range);
    s[7 - j] = clamp_value(r[j] - r[7 - j], range);
    s[8 + j] = clamp_value(-r[8 + j] + r[15 - j], range);
    s[15 - j] = clamp_value(r[8 + j] + r[15 - j], range);
  }

  let mut g = s;
  for j in 4..8 {
    g[j] = half_btf(-cospi[32], s[j], cospi[32], s[15 - j], INV_COS_BIT);
    g[15 - j] = half_btf(cospi[32], s[15 - j], cospi[32], s[j], INV_COS_BIT);
  }

  for k in 0..16 {
    output[k] = clamp_value(e[k] + g[15 - k], range);
    output[16 + k] = clamp_value(e[15 - k] - g[k], range);
  }
}

pub fn av1_idct64(input: &[i32], output: &mut [i32], range: usize) {
  let cospi = cospi_arr(INV_COS_BIT);

  let mut temp_in = [0i32; 32];
  for (i, v) in temp_in.iter_mut().enumerate() {
    *v = input[2 * i];
  }
  let mut e: [i32; 32] = [0; 32];
  av1_idct32(&temp_in, &mut e, range);

  let x = [
    input[1], input[33], input[17], input[49], input[9], input[41],
    input[25], input[57], input[5], input[37], input[21], input[53],
    input[13], input[45], input[29], input[61], input[3], input[35],
    input[19], input[51], input[11], input[43], input[27], input[59],
    input[7], input[39], input[23], input[55], input[15], input[47],
    input[31], input[63],
  ];

  const ROT: [(usize, usize); 16] = [
    (63, 1),
    (31, 33),
    (47, 17),
    (15, 49),
    (55, 9),
    (23, 41),
    (39, 25),
    (7, 57),
    (59, 5),
    (27, 37),
    (43, 21),
    (11, 53),
    (51, 13),
    (19, 45),
    (35, 29),
    (3, 61),
  ];
  let mut y = [0i32; 32];
  for (j, &(a, b)) in ROT.iter().enumerate() {
    y[j] = half_btf(cospi[a], x[j], -cospi[b], x[31 - j], INV_COS_BIT);
    y[31 - j] = half_btf(cospi[b], x[j], cospi[a], x[31 - j], INV_COS_BIT);
  }

  let mut z = [0i32; 32];
  for j in 0..16 {
    let a = 2 * j;
    if j % 2 == 0 {
      z[a] = clamp_value(y[a] + y[a + 1], range);
      z[a + 1] = clamp_value(y[a] - y[a + 1], range);
    } else {
      z[a] = clamp_value(-y[a] + y[a + 1], range);
      z[a + 1] = clamp_value(y[a] + y[a + 1], range);
    }
  }

  let mut w = z;
  for &(k, a, b) in
    &[(1usize, 60usize, 4usize), (5, 28, 36), (9, 44, 20), (13, 12, 52)]
  {
    w[k] = half_btf(-cospi[b], z[k], cospi[a], z[31 - k], INV_COS_BIT);
    w[31 - k] = half_btf(cospi[a], z[k], cospi[b], z[31 - k], INV_COS_BIT);
    w[k + 1] =
      half_btf(-cospi[a], z[k + 1], -cospi[b], z[30 - k], INV_COS_BIT);
    w[30 - k] =
      half_btf(-cospi[b], z[k + 1], cospi[a], z[30 - k], INV_COS_BIT);
  }

  let mut v = [0i32; 32];
  for g in 0..8 {
    let base = 4 * g;
    for j in 0..2 {
      if g % 2 == 0 {
        v[base + j] = clamp_value(w[base + j] + w[base + 3 - j], range);
        v[base + 3 - j] = clamp_value(w[base + j] - w[base + 3 - j], range);
      } else {
        v[base + j] = clamp_value(-w[base + j] + w[base + 3 - j], range);
        v[base + 3 - j] = clamp_value(w[base + j] + w[base + 3 - j], range);
      }
    }
  }

  let mut r = v;
  for j in 2..4 {
    r[j] = half_btf(-cospi[8], v[j], cospi[56], v[31 - j], INV_COS_BIT);
    r[31 - j] = half_btf(cospi[56], v[j], cospi[8], v[31 - j], INV_COS_BIT);
  }
  for j in 4..6 {
    r[j] = half_btf(-cospi[56], v[j], -cospi[8], v[31 - j], INV_COS_BIT);
    r[31 - j] = half_btf(-cospi[8], v[j], cospi[56], v[31 - j], INV_COS_BIT);
  }
  for j in 10..12 {
    r[j] = half_btf(-cospi[40], v[j], cospi[24], v[31 - j], INV_COS_BIT);
    r[31 - j] = half_btf(cospi[24], v[j], cospi[40], v[31 - j], INV_COS_BIT);
  }
  for j in 12..14 {
    r[j] = half_btf(-cospi[24], v[j], -cospi[40], v[31 - j], INV_COS_BIT);
    r[31 - j] = half_btf(-cospi[40], v[j], cospi[24], v[31 - j], INV_COS_BIT);
  }

  let mut s = [0i32; 32];
  for g in 0..4 {
    let base = 8 * g;
    for j in 0..4 {
      if g % 2 == 0 {
        s[base + j] = clamp_value(r[base + j] + r[base + 7 - j], range);
        s[base + 7 - j] = clamp_value(r[base + j] - r[base + 7 - j], range);
      } else {
        s[base + j] = clamp_value(-r[base + j] + r[base + 7 - j], range);
        s[base + 7 - j] = clamp_value(r[base + j] + r[base + 7 - j], range);
      }
    }
  }

  let mut g = s;
  for j in 4..8 {
    g[j] = half_btf(-cospi[16], s[j], cospi[48], s[31 - j], INV_COS_BIT);
    g[31 - j] = half_btf(cospi[48], s[j], cospi[16], s[31 - j], INV_COS_BIT);
  }
  for j in 8..12 {
    g[j] = half_btf(-cospi[48], s[j], -cospi[16], s[31 - j], INV_COS_BIT);
    g[31 - j] = half_btf(-cospi[16], s[j], cospi[48], s[31 - j], INV_COS_BIT);
  }

  let mut h = [0i32; 32];
  for j in 0..8 {
    h[j] = clamp_value(g[j] + g[15 - j], range);
    h[15 - j] = clamp_value(g[j] - g[15 - j], range);
    h[16 + j] = clamp_value(-g[16 + j] + g[31 - j], range);
    h[31 - j] = clamp_value(g[16 + j] + g[31 - j], range);
  }

  let mut m = h;
  for j in 8..16 {
    m[j] = half_btf(-cospi[32], h[j], cospi[32], h[31 - j], INV_COS_BIT);
    m[31 - j] = half_btf(cospi[32], h[31 - j], cospi[32], h[j], INV_COS_BIT);
  }

  for k in 0..32 {
    output[k] = clamp_value(e[k] + m[31 - k], range);
    output[32 + k] = clamp_value(e[31 - k] - m[k], range);
  }
}

pub fn av1_iadst4(input: &[i32], output: &mut [i32], _range: usize) {
  let bit = INV_COS_BIT;
  let sinpi = sinpi_arr(bit);

  let x0 = input[0];
  let x1 = input[1];
  let x2 = input[2];
  let x3 = input[3];

  let s0 = sinpi[1] * x0;
  let s1 = sinpi[2] * x0;
  let s2 = sinpi[3] * x1;
  let s3 = sinpi[4] * x2;
  let s4 = sinpi[1] * x2;
  let s5 = sinpi[2] * x3;
  let s6 = sinpi[4] * x3;

  let s7 = (x0 - x2) + x3;

  let s0 = s0 + s3;
  let s1 = s1 - s4;
  let s3 = s2;
  let s2 = sinpi[3] * s7;

  let s0 = s0 + s5;
  let s1 = s1 - s6;

  let x0 = s0 + s3;
  let x1 = s1 + s3;
  let x2 = s2;
  let x3 = (s0 + s1) - s3;

  output[0] = round_shift(x0, bit);
  output[1] = round_shift(x1, bit);
  output[2] = round_shift(x2, bit);
  output[3] = round_shift(x3, bit);
}

pub fn av1_iadst8(input: &[i32], output: &mut [i32], range: usize) {
  let cospi = cospi_arr(INV_COS_BIT);

  let x = [
    input[7], input[0], input[5], input[2], input[3], input[4], input[1],
    input[6],
  ];

  const ROT: [(usize, usize); 4] = [(4, 60), (20, 44), (36, 28), (52, 12)];
  let mut s = [0i32; 8];
  for (j, &(a, b)) in ROT.iter().enumerate() {
    s[2 * j] = half_btf(cospi[a], x[2 * j], cospi[b], x[2 * j + 1], INV_COS_BIT);
    s[2 * j + 1] =
      half_btf(cospi[b], x[2 * j], -cospi[a], x[2 * j + 1], INV_COS_BIT);
  }

  let mut t = [0i32; 8];
  for j in 0..4 {
    t[j] = clamp_value(s[j] + s[j + 4], range);
    t[j + 4] = clamp_value(s[j] - s[j + 4], range);
  }

  let mut u = t;
  u[4] = half_btf(cospi[16], t[4], cospi[48], t[5], INV_COS_BIT);
  u[5] = half_btf(cospi[48], t[4], -cospi[16], t[5], INV_COS_BIT);
  u[6] = half_btf(-cospi[48], t[6], cospi[16], t[7], INV_COS_BIT);
  u[7] = half_btf(cospi[16], t[6], cospi[48], t[7], INV_COS_BIT);

  let mut v = [0i32; 8];
  for g in (0..8).step_by(4) {
    for j in 0..2 {
      v[g + j] = clamp_value(u[g + j] + u[g + j + 2], range);
      v[g + j + 2] = clamp_value(u[g + j] - u[g + j + 2], range);
    }
  }

  let mut w = v;
  for j in (2..8).step_by(4) {
    w[j] = half_btf(cospi[32], v[j], cospi[32], v[j + 1], INV_COS_BIT);
    w[j + 1] = half_btf(cospi[32], v[j], -cospi[32], v[j + 1], INV_COS_BIT);
  }

  output[0] = w[0];
  output[1] = -w[4];
  output[2] = w[6];
  output[3] = -w[2];
  output[4] = w[3];
  output[5] = -w[7];
  output[6] = w[5];
  output[7] = -w[1];
}

pub fn av1_iadst16(input: &[i32], output: &mut [i32], range: usize) {
  let cospi = cospi_arr(INV_COS_BIT);

  let x = [
    input[15], input[0], input[13], input[2], input[11], input[4], input[9],
    input[6], input[7], input[8], input[5], input[10], input[3], input[12],
    input[1], input[14],
  ];

  const ROT: [(usize, usize); 8] = [
    (2, 62),
    (10, 54),
    (18, 46),
    (26, 38),
    (34, 30),
    (42, 22),
    (50, 14),
    (58, 6),
  ];
  let mut s = [0i32; 16];
  for (j, &(a, b)) in ROT.iter().enumerate() {
    s[2 * j] = half_btf(cospi[a], x[2 * j], cospi[b], x[2 * j + 1], INV_COS_BIT);
    s[2 * j + 1] =
      half_btf(cospi[b], x[2 * j], -cospi[a], x[2 * j + 1], INV_COS_BIT);
  }

  let mut t = [0i32; 16];
  for j in 0..8 {
    t[j] = clamp_value(s[j] + s[j + 8], range);
    t[j + 8] = clamp_value(s[j] - s[j + 8], range);
  }

  let mut u = t;
  u[8] = half_btf(cospi[8], t[8], cospi[56], t[9], INV_COS_BIT);
  u[9] = half_btf(cospi[56], t[8], -cospi[8], t[9], INV_COS_BIT);
  u[10] = half_btf(cospi[40], t[10], cospi[24], t[11], INV_COS_BIT);
  u[11] = half_btf(cospi[24], t[10], -cospi[40], t[11], INV_COS_BIT);
  u[12] = half_btf(-cospi[56], t[12], cospi[8], t[13], INV_COS_BIT);
  u[13] = half_btf(cospi[8], t[12], cospi[56], t[13], INV_COS_BIT);
  u[14] = half_btf(-cospi[24], t[14], cospi[40], t[15], INV_COS_BIT);
  u[15] = half_btf(cospi[40], t[14], cospi[24], t[15], INV_COS_BIT);

  let mut v = [0i32; 16];
  for g in (0..16).step_by(8) {
    for j in 0..4 {
      v[g + j] = clamp_value(u[g + j] + u[g + j + 4], range);
      v[g + j + 4] = clamp_value(u[g + j] - u[g + j + 4], range);
    }
  }

  let mut w = v;
  for g in (4..16).step_by(8) {
    w[g] = half_btf(cospi[16], v[g], cospi[48], v[g + 1], INV_COS_BIT);
    w[g + 1] = half_btf(cospi[48], v[g], -cospi[16], v[g + 1], INV_COS_BIT);
    w[g + 2] =
      half_btf(-cospi[48], v[g + 2], cospi[16], v[g + 3], INV_COS_BIT);
    w[g + 3] = half_btf(cospi[16], v[g + 2], cospi[48], v[g + 3], INV_COS_BIT);
  }

  let mut g = [0i32; 16];
  for b in (0..16).step_by(4) {
    for j in 0..2 {
      g[b + j] = clamp_value(w[b + j] + w[b + j + 2], range);
      g[b + j + 2] = clamp_value(w[b + j] - w[b + j + 2], range);
    }
  }

  let mut y = g;
  for j in (2..16).step_by(4) {
    y[j] = half_btf(cospi[32], g[j], cospi[32], g[j + 1], INV_COS_BIT);
    y[j + 1] = half_btf(cospi[32], g[j], -cospi[32], g[j + 1], INV_COS_BIT);
  }

  output[0] = y[0];
  output[1] = -y[8];
  output[2] = y[12];
  output[3] = -y[4];
  output[4] = y[6];
  output[5] = -y[14];
  output[6] = y[10];
  output[7] = -y[2];
  output[8] = y[3];
  output[9] = -y[11];
  output[10] = y[15];
  output[11] = -y[7];
  output[12] = y[5];
  output[13] = -y[13];
  output[14] = y[9];
  output[15] = -y[1];
}

pub fn av1_iidentity4(input: &[i32], output: &mut [i32], _range: usize) {
  for i in 0..4 {
    output[i] =
      round_shift_wide(i64::from(input[i]) * i64::from(SQRT2), SQRT2_BITS);
  }
}

pub fn av1_iidentity8(input: &[i32], output: &mut [i32], _range: usize) {
  for i in 0..8 {
    output[i] = 2 * input[i];
  }
}

pub fn av1_iidentity16(input: &[i32], output: &mut [i32], _range: usize) {
  for i in 0..16 {
    output[i] = round_shift_wide(
      i64::from(input[i]) * 2 * i64::from(SQRT2),
      SQRT2_BITS,
    );
  }
}

pub fn av1_iidentity32(input: &[i32], output: &mut [i32], _range: usize) {
  for i in 0..32 {
    output[i] = input[i] * 4;
  }
}

type InvTxfmFunc = fn(&[i32], &mut [i32], usize);

// FLIPADST rows reuse the ADST kernels; the driver applies the mirroring.
static INV_TXFM_FNS: [[Option<InvTxfmFunc>; 5]; 4] = [
  [
    Some(av1_idct4),
    Some(av1_idct8),
    Some(av1_idct16),
    Some(av1_idct32),
    Some(av1_idct64),
  ],
  [Some(av1_iadst4), Some(av1_iadst8), Some(av1_iadst16), None, None],
  [Some(av1_iadst4), Some(av1_iadst8), Some(av1_iadst16), None, None],
  [
    Some(av1_iidentity4),
    Some(av1_iidentity8),
    Some(av1_iidentity16),
    Some(av1_iidentity32),
    None,
  ],
];

trait InvTxfm2D: Dim {
  /* From the AV1 2-D inverse transform process:
  Transform_Row_Shift[ TX_SIZES_ALL ] = {
    0, 1, 2, 2, 2, 0, 0, 1, 1,
    1, 1, 1, 1, 1, 1, 2, 2, 2, 2
  } */
  const INTERMEDIATE_SHIFT: usize;

  fn inv_txfm2d_add<T: Pixel>(
    input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
    bd: usize,
  ) {
    assert!(stride >= Self::W);
    assert!(input.len() >= Self::W * Self::H);
    let buffer = &mut [0i32; 64 * 64][..Self::W * Self::H];
    let rect_type = get_rect_tx_log_ratio(Self::W, Self::H);
    let tx_type_1d_col = VTX_TAB[tx_type as usize];
    let tx_type_1d_row = HTX_TAB[tx_type as usize];
    let (ud_flip, lr_flip) = Txfm2DFlipCfg::get_flip_cfg(tx_type);

    // perform inv txfm on every row
    let range = bd + 8;
    let txfm_fn = INV_TXFM_FNS[tx_type_1d_row as usize]
      [Self::W.ilog2() as usize - 2]
      .expect("transform type not supported for this block width");
    for (input_slice, buffer_slice) in
      input.chunks(Self::W).zip(buffer.chunks_mut(Self::W)).take(Self::H)
    {
      let mut temp_in: [i32; 64] = [0; 64];
      for (raw, clamped) in input_slice.iter().zip(temp_in.iter_mut()) {
        let mut val: i32 = (*raw).into();
        if rect_type.abs() == 1 {
          val = round_shift(val * INV_SQRT2, SQRT2_BITS);
        }
        *clamped = clamp_value(val, range);
      }
      txfm_fn(&temp_in[..Self::W], buffer_slice, range);
    }

    // perform inv txfm on every col
    let range = cmp::max(bd + 6, 16);
    let txfm_fn = INV_TXFM_FNS[tx_type_1d_col as usize]
      [Self::H.ilog2() as usize - 2]
      .expect("transform type not supported for this block height");
    for c in 0..Self::W {
      let mut temp_in: [i32; 64] = [0; 64];
      let mut temp_out: [i32; 64] = [0; 64];
      let src_c = if lr_flip { Self::W - c - 1 } else { c };
      for (raw, clamped) in
        buffer[src_c..].iter().step_by(Self::W).zip(temp_in.iter_mut())
      {
        *clamped =
          clamp_value(round_shift(*raw, Self::INTERMEDIATE_SHIFT), range);
      }
      txfm_fn(&temp_in[..Self::H], &mut temp_out[..Self::H], range);
      for (r, temp) in temp_out.iter().take(Self::H).enumerate() {
        let dst_r = if ud_flip { Self::H - r - 1 } else { r };
        let p = &mut output[dst_r * stride + c];
        let v: i32 = (*p).into();
        *p = T::cast_from(clamp(
          v + round_shift(*temp, 4),
          0,
          (1 << bd) - 1,
        ));
      }
    }
  }
}

macro_rules! impl_inv_txs {
  ($(($W:expr, $H:expr)),+ $SH:expr) => {
    $(
      paste::paste! {
        impl InvTxfm2D for [<Block $W x $H>] {
          const INTERMEDIATE_SHIFT: usize = $SH;
        }
      }
    )*
  }
}

impl_inv_txs! { (4, 4), (4, 8), (8, 4) 0 }

impl_inv_txs! { (8, 8), (8, 16), (16, 8) 1 }
impl_inv_txs! { (4, 16), (16, 4), (16, 32), (32, 16) 1 }
impl_inv_txs! { (32, 64), (64, 32) 1 }

impl_inv_txs! { (16, 16), (16, 64), (64, 16), (64, 64) 2 }
impl_inv_txs! { (32, 32), (8, 32), (32, 8) 2 }

pub fn iht4x4_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block4x4::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht8x8_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block8x8::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht16x16_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block16x16::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht32x32_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block32x32::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht64x64_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block64x64::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht4x8_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block4x8::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht8x4_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block8x4::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht8x16_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block8x16::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht16x8_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block16x8::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht16x32_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block16x32::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht32x16_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block32x16::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht32x64_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block32x64::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht64x32_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block64x32::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht4x16_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block4x16::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht16x4_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  Block16x4::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht8x32_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block8x32::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht32x8_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT || tx_type == TxType::IDTX);
  Block32x8::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht16x64_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block16x64::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}

pub fn iht64x16_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_type: TxType,
  bit_depth: usize,
) {
  assert!(tx_type == TxType::DCT_DCT);
  Block64x16::inv_txfm2d_add(input, output, stride, tx_type, bit_depth);
}
