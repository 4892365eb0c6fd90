// Copyright (c) 2018-2023, the av1-txfm contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

pub use self::forward::*;
pub use self::inverse::*;

use crate::util::*;

pub mod forward;
pub mod inverse;

pub static SQRT2_BITS: usize = 12;
pub static SQRT2: i32 = 5793; // 2^12 * sqrt(2)
pub static INV_SQRT2: i32 = 2896; // 2^12 / sqrt(2)

/// Fixed-point cosine tables, `cospi[bit - 10][i] = round(2^bit * cos(i*PI/128))`.
///
/// The working precision of a transform pass selects the table row through
/// [`cospi_arr`]; every butterfly weight in the DCT and ADST ladders is drawn
/// from here.
static COSPI_ARR_DATA: [[i32; 64]; 4] = [
  [
    1024, 1024, 1023, 1021, 1019, 1016, 1013, 1009, 1004, 999, 993, 987, 980,
    972, 964, 955, 946, 936, 926, 915, 903, 891, 878, 865, 851, 837, 822, 807,
    792, 775, 759, 742, 724, 706, 688, 669, 650, 630, 610, 590, 569, 548, 526,
    505, 483, 460, 438, 415, 392, 369, 345, 321, 297, 273, 249, 224, 200, 175,
    150, 125, 100, 75, 50, 25,
  ],
  [
    2048, 2047, 2046, 2042, 2038, 2033, 2026, 2018, 2009, 1998, 1987, 1974,
    1960, 1945, 1928, 1911, 1892, 1872, 1851, 1829, 1806, 1782, 1757, 1730,
    1703, 1674, 1645, 1615, 1583, 1551, 1517, 1483, 1448, 1412, 1375, 1338,
    1299, 1260, 1220, 1179, 1138, 1096, 1053, 1009, 965, 921, 876, 830, 784,
    737, 690, 642, 595, 546, 498, 449, 400, 350, 301, 251, 201, 151, 100, 50,
  ],
  [
    4096, 4095, 4091, 4085, 4076, 4065, 4052, 4036, 4017, 3996, 3973, 3948,
    3920, 3889, 3857, 3822, 3784, 3745, 3703, 3659, 3612, 3564, 3513, 3461,
    3406, 3349, 3290, 3229, 3166, 3102, 3035, 2967, 2896, 2824, 2751, 2675,
    2598, 2520, 2440, 2359, 2276, 2191, 2106, 2019, 1931, 1842, 1751, 1660,
    1567, 1474, 1380, 1285, 1189, 1092, 995, 897, 799, 700, 601, 501, 401,
    301, 201, 101,
  ],
  [
    8192, 8190, 8182, 8170, 8153, 8130, 8103, 8071, 8035, 7993, 7946, 7895,
    7839, 7779, 7713, 7643, 7568, 7489, 7405, 7317, 7225, 7128, 7027, 6921,
    6811, 6698, 6580, 6458, 6333, 6203, 6070, 5933, 5793, 5649, 5501, 5351,
    5197, 5040, 4880, 4717, 4551, 4383, 4212, 4038, 3862, 3683, 3503, 3320,
    3135, 2948, 2760, 2570, 2378, 2185, 1990, 1795, 1598, 1401, 1202, 1003,
    803, 603, 402, 201,
  ],
];

/// Fixed-point sine tables for the 4-point ADST,
/// `sinpi[bit - 10][k] = round(2^bit * 2*sqrt(2)/3 * sin(k*PI/9))`.
static SINPI_ARR_DATA: [[i32; 5]; 4] = [
  [0, 330, 621, 836, 951],
  [0, 660, 1241, 1672, 1902],
  [0, 1321, 2482, 3344, 3803],
  [0, 2642, 4965, 6689, 7606],
];

pub const COS_BIT_MIN: usize = 10;
pub const COS_BIT_MAX: usize = 13;

#[inline]
pub fn cospi_arr(bit: usize) -> &'static [i32; 64] {
  debug_assert!((COS_BIT_MIN..=COS_BIT_MAX).contains(&bit));
  &COSPI_ARR_DATA[bit - COS_BIT_MIN]
}

#[inline]
pub fn sinpi_arr(bit: usize) -> &'static [i32; 5] {
  debug_assert!((COS_BIT_MIN..=COS_BIT_MAX).contains(&bit));
  &SINPI_ARR_DATA[bit - COS_BIT_MIN]
}

// performs half a butterfly
#[inline]
pub(crate) fn half_btf(
  w0: i32, in0: i32, w1: i32, in1: i32, bit: usize,
) -> i32 {
  // Ensure defined behaviour for when a product or the product sum
  //   transiently overflows but w0*in0 + w1*in1 + rounding doesn't.
  let result = w0.wrapping_mul(in0).wrapping_add(w1.wrapping_mul(in1));
  // Implement a version of round_shift with wrapping
  if bit == 0 {
    result
  } else {
    result.wrapping_add(1 << (bit - 1)) >> bit
  }
}

// clamps value to a signed integer type of bit bits
#[inline]
pub(crate) fn clamp_value(value: i32, bit: usize) -> i32 {
  let max_value: i32 = ((1i64 << (bit - 1)) - 1) as i32;
  let min_value: i32 = (-(1i64 << (bit - 1))) as i32;
  clamp(value, min_value, max_value)
}

// round_shift over a 64-bit intermediate, for the sqrt2-class rectangular
// scale where the 32-bit product can exceed i32 range.
#[inline]
pub(crate) const fn round_shift_wide(value: i64, bit: usize) -> i32 {
  ((value + (1 << bit >> 1)) >> bit) as i32
}

pub fn av1_round_shift_array(arr: &mut [i32], size: usize, bit: i8) {
  if bit == 0 {
    return;
  }
  if bit > 0 {
    let bit = bit as usize;
    for v in arr.iter_mut().take(size) {
      *v = round_shift(*v, bit);
    }
  } else {
    for v in arr.iter_mut().take(size) {
      *v <<= -bit;
    }
  }
}

/// Utility function that returns the log of the ratio of the col and row
/// sizes.
#[inline]
pub fn get_rect_tx_log_ratio(col: usize, row: usize) -> i8 {
  debug_assert!(col > 0 && row > 0);
  col.ilog2() as i8 - row.ilog2() as i8
}

pub const TX_TYPES: usize = 16;

/// Transform block geometry, all AV1-legal (width, height) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum TxSize {
  TX_4X4,
  TX_8X8,
  TX_16X16,
  TX_32X32,
  TX_64X64,
  TX_4X8,
  TX_8X4,
  TX_8X16,
  TX_16X8,
  TX_16X32,
  TX_32X16,
  TX_32X64,
  TX_64X32,
  TX_4X16,
  TX_16X4,
  TX_8X32,
  TX_32X8,
  TX_16X64,
  TX_64X16,
}

impl TxSize {
  pub const TX_SIZES_ALL: usize = 19;

  pub const fn width(self) -> usize {
    1 << self.width_log2()
  }

  pub const fn width_log2(self) -> usize {
    use self::TxSize::*;
    match self {
      TX_4X4 | TX_4X8 | TX_4X16 => 2,
      TX_8X8 | TX_8X4 | TX_8X16 | TX_8X32 => 3,
      TX_16X16 | TX_16X8 | TX_16X32 | TX_16X4 | TX_16X64 => 4,
      TX_32X32 | TX_32X16 | TX_32X64 | TX_32X8 => 5,
      TX_64X64 | TX_64X32 | TX_64X16 => 6,
    }
  }

  /// Index of the width within the supported set {4, 8, 16, 32, 64}.
  pub const fn width_index(self) -> usize {
    self.width_log2() - TxSize::TX_4X4.width_log2()
  }

  pub const fn height(self) -> usize {
    1 << self.height_log2()
  }

  pub const fn height_log2(self) -> usize {
    use self::TxSize::*;
    match self {
      TX_4X4 | TX_8X4 | TX_16X4 => 2,
      TX_8X8 | TX_4X8 | TX_16X8 | TX_32X8 => 3,
      TX_16X16 | TX_8X16 | TX_32X16 | TX_4X16 | TX_64X16 => 4,
      TX_32X32 | TX_16X32 | TX_64X32 | TX_8X32 => 5,
      TX_64X64 | TX_32X64 | TX_16X64 => 6,
    }
  }

  /// Index of the height within the supported set {4, 8, 16, 32, 64}.
  pub const fn height_index(self) -> usize {
    self.height_log2() - TxSize::TX_4X4.height_log2()
  }

  pub const fn area(self) -> usize {
    self.width() * self.height()
  }

  /// # Panics
  ///
  /// - If the dimensions are not an AV1-legal transform size
  pub fn by_dims(w: usize, h: usize) -> TxSize {
    use self::TxSize::*;
    match (w, h) {
      (4, 4) => TX_4X4,
      (8, 8) => TX_8X8,
      (16, 16) => TX_16X16,
      (32, 32) => TX_32X32,
      (64, 64) => TX_64X64,
      (4, 8) => TX_4X8,
      (8, 4) => TX_8X4,
      (8, 16) => TX_8X16,
      (16, 8) => TX_16X8,
      (16, 32) => TX_16X32,
      (32, 16) => TX_32X16,
      (32, 64) => TX_32X64,
      (64, 32) => TX_64X32,
      (4, 16) => TX_4X16,
      (16, 4) => TX_16X4,
      (8, 32) => TX_8X32,
      (32, 8) => TX_32X8,
      (16, 64) => TX_16X64,
      (64, 16) => TX_64X16,
      _ => unreachable!("unsupported transform size {}x{}", w, h),
    }
  }
}

/// The 16 transform type combinations, one 1-D kernel per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[allow(non_camel_case_types)]
pub enum TxType {
  DCT_DCT,
  ADST_DCT,
  DCT_ADST,
  ADST_ADST,
  FLIPADST_DCT,
  DCT_FLIPADST,
  FLIPADST_FLIPADST,
  ADST_FLIPADST,
  FLIPADST_ADST,
  IDTX,
  V_DCT,
  H_DCT,
  V_ADST,
  H_ADST,
  V_FLIPADST,
  H_FLIPADST,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TxType1D {
  DCT,
  ADST,
  FLIPADST,
  IDTX,
}

pub(crate) const VTX_TAB: [TxType1D; TX_TYPES] = [
  TxType1D::DCT,
  TxType1D::ADST,
  TxType1D::DCT,
  TxType1D::ADST,
  TxType1D::FLIPADST,
  TxType1D::DCT,
  TxType1D::FLIPADST,
  TxType1D::ADST,
  TxType1D::FLIPADST,
  TxType1D::IDTX,
  TxType1D::DCT,
  TxType1D::IDTX,
  TxType1D::ADST,
  TxType1D::IDTX,
  TxType1D::FLIPADST,
  TxType1D::IDTX,
];

pub(crate) const HTX_TAB: [TxType1D; TX_TYPES] = [
  TxType1D::DCT,
  TxType1D::DCT,
  TxType1D::ADST,
  TxType1D::ADST,
  TxType1D::DCT,
  TxType1D::FLIPADST,
  TxType1D::FLIPADST,
  TxType1D::FLIPADST,
  TxType1D::ADST,
  TxType1D::IDTX,
  TxType1D::IDTX,
  TxType1D::DCT,
  TxType1D::IDTX,
  TxType1D::ADST,
  TxType1D::IDTX,
  TxType1D::FLIPADST,
];

/// How much of the coefficient block the forward transform actually computes.
///
/// `N2` and `N4` populate only the low-frequency top-left quarter (resp.
/// sixteenth) of the block, bit-identical to the same region of a `Full`
/// call, and write zero everywhere else. The rate-distortion search uses
/// them to cheapen repeated candidate evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoeffMode {
  Full,
  N2,
  N4,
}

impl CoeffMode {
  /// log2 of the per-axis reduction of the computed region.
  #[inline]
  pub const fn log2_ratio(self) -> usize {
    match self {
      CoeffMode::Full => 0,
      CoeffMode::N2 => 1,
      CoeffMode::N4 => 2,
    }
  }
}

/// Forward transform of a residual block into frequency-domain coefficients.
///
/// `input` is a row-major residual block with the given `stride`; `output`
/// receives `W*H` coefficients, row-major, and is fully overwritten
/// (including the deterministic zero region in `N2`/`N4` mode and beyond
/// coefficient 32 of a 64-point axis).
///
/// # Panics
///
/// - If `tx_type` is not legal for `tx_size`
pub fn forward_transform<T: Coefficient>(
  input: &[i16], output: &mut [T], stride: usize, tx_size: TxSize,
  tx_type: TxType, bit_depth: usize, coeff_mode: CoeffMode,
) {
  use self::TxSize::*;
  match tx_size {
    TX_4X4 => fht4x4(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_8X8 => fht8x8(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_16X16 => {
      fht16x16(input, output, stride, tx_type, bit_depth, coeff_mode)
    }
    TX_32X32 => {
      fht32x32(input, output, stride, tx_type, bit_depth, coeff_mode)
    }
    TX_64X64 => {
      fht64x64(input, output, stride, tx_type, bit_depth, coeff_mode)
    }

    TX_4X8 => fht4x8(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_8X4 => fht8x4(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_8X16 => fht8x16(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_16X8 => fht16x8(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_16X32 => {
      fht16x32(input, output, stride, tx_type, bit_depth, coeff_mode)
    }
    TX_32X16 => {
      fht32x16(input, output, stride, tx_type, bit_depth, coeff_mode)
    }
    TX_32X64 => {
      fht32x64(input, output, stride, tx_type, bit_depth, coeff_mode)
    }
    TX_64X32 => {
      fht64x32(input, output, stride, tx_type, bit_depth, coeff_mode)
    }

    TX_4X16 => fht4x16(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_16X4 => fht16x4(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_8X32 => fht8x32(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_32X8 => fht32x8(input, output, stride, tx_type, bit_depth, coeff_mode),
    TX_16X64 => {
      fht16x64(input, output, stride, tx_type, bit_depth, coeff_mode)
    }
    TX_64X16 => {
      fht64x16(input, output, stride, tx_type, bit_depth, coeff_mode)
    }
  }
}

/// Inverse transform of a coefficient block, added into the prediction in
/// `output` with bit-depth clamping. The companion of [`forward_transform`];
/// the round-trip of the two reconstructs the residual within the documented
/// fixed-point tolerance.
///
/// # Panics
///
/// - If `tx_type` is not legal for `tx_size`
pub fn inverse_transform_add<T: Pixel>(
  input: &[T::Coeff], output: &mut [T], stride: usize, tx_size: TxSize,
  tx_type: TxType, bit_depth: usize,
) {
  use self::TxSize::*;
  match tx_size {
    TX_4X4 => iht4x4_add(input, output, stride, tx_type, bit_depth),
    TX_8X8 => iht8x8_add(input, output, stride, tx_type, bit_depth),
    TX_16X16 => iht16x16_add(input, output, stride, tx_type, bit_depth),
    TX_32X32 => iht32x32_add(input, output, stride, tx_type, bit_depth),
    TX_64X64 => iht64x64_add(input, output, stride, tx_type, bit_depth),

    TX_4X8 => iht4x8_add(input, output, stride, tx_type, bit_depth),
    TX_8X4 => iht8x4_add(input, output, stride, tx_type, bit_depth),
    TX_8X16 => iht8x16_add(input, output, stride, tx_type, bit_depth),
    TX_16X8 => iht16x8_add(input, output, stride, tx_type, bit_depth),
    TX_16X32 => iht16x32_add(input, output, stride, tx_type, bit_depth),
    TX_32X16 => iht32x16_add(input, output, stride, tx_type, bit_depth),
    TX_32X64 => iht32x64_add(input, output, stride, tx_type, bit_depth),
    TX_64X32 => iht64x32_add(input, output, stride, tx_type, bit_depth),

    TX_4X16 => iht4x16_add(input, output, stride, tx_type, bit_depth),
    TX_16X4 => iht16x4_add(input, output, stride, tx_type, bit_depth),
    TX_8X32 => iht8x32_add(input, output, stride, tx_type, bit_depth),
    TX_32X8 => iht32x8_add(input, output, stride, tx_type, bit_depth),
    TX_16X64 => iht16x64_add(input, output, stride, tx_type, bit_depth),
    TX_64X16 => iht64x16_add(input, output, stride, tx_type, bit_depth),
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use rand::{Rng, SeedableRng};
  use rand_chacha::ChaChaRng;

  const ALL_SIZES: [TxSize; TxSize::TX_SIZES_ALL] = [
    TxSize::TX_4X4,
    TxSize::TX_8X8,
    TxSize::TX_16X16,
    TxSize::TX_32X32,
    TxSize::TX_64X64,
    TxSize::TX_4X8,
    TxSize::TX_8X4,
    TxSize::TX_8X16,
    TxSize::TX_16X8,
    TxSize::TX_16X32,
    TxSize::TX_32X16,
    TxSize::TX_32X64,
    TxSize::TX_64X32,
    TxSize::TX_4X16,
    TxSize::TX_16X4,
    TxSize::TX_8X32,
    TxSize::TX_32X8,
    TxSize::TX_16X64,
    TxSize::TX_64X16,
  ];

  // The 64-point kernels and the 32-point ADST do not exist; everything
  // else is fair game for a given size.
  fn legal_types(tx_size: TxSize) -> &'static [TxType] {
    use self::TxType::*;
    let big = tx_size.width().max(tx_size.height());
    if big == 64 {
      &[DCT_DCT]
    } else if big == 32 {
      &[DCT_DCT, IDTX]
    } else {
      &[
        DCT_DCT,
        ADST_DCT,
        DCT_ADST,
        ADST_ADST,
        FLIPADST_DCT,
        DCT_FLIPADST,
        FLIPADST_FLIPADST,
        ADST_FLIPADST,
        FLIPADST_ADST,
        IDTX,
        V_DCT,
        H_DCT,
        V_ADST,
        H_ADST,
        V_FLIPADST,
        H_FLIPADST,
      ]
    }
  }

  fn test_roundtrip(tx_size: TxSize, tx_type: TxType, tolerance: i16) {
    let mut ra = ChaChaRng::from_seed([tx_size as u8; 32]);
    let area = tx_size.area();
    let mut src_storage = [0u8; 64 * 64];
    let src = &mut src_storage[..area];
    let mut dst_storage = [0u8; 64 * 64];
    let dst = &mut dst_storage[..area];
    let mut res_storage = [0i16; 64 * 64];
    let res = &mut res_storage[..area];
    let mut freq_storage = [0i16; 64 * 64];
    let freq = &mut freq_storage[..area];
    for ((r, s), d) in res.iter_mut().zip(src.iter_mut()).zip(dst.iter_mut())
    {
      *s = ra.gen::<u8>();
      *d = ra.gen::<u8>();
      *r = i16::from(*s) - i16::from(*d);
    }
    forward_transform(
      res,
      freq,
      tx_size.width(),
      tx_size,
      tx_type,
      8,
      CoeffMode::Full,
    );
    inverse_transform_add(freq, dst, tx_size.width(), tx_size, tx_type, 8);

    for (s, d) in src.iter().zip(dst.iter()) {
      assert!(
        (i16::from(*s) - i16::from(*d)).abs() <= tolerance,
        "roundtrip mismatch for {:?} {:?}: {} vs {}",
        tx_size,
        tx_type,
        s,
        d
      );
    }
  }

  #[test]
  fn log_tx_ratios() {
    let combinations = [
      (TxSize::TX_4X4, 0),
      (TxSize::TX_8X8, 0),
      (TxSize::TX_16X16, 0),
      (TxSize::TX_32X32, 0),
      (TxSize::TX_64X64, 0),
      (TxSize::TX_4X8, -1),
      (TxSize::TX_8X4, 1),
      (TxSize::TX_8X16, -1),
      (TxSize::TX_16X8, 1),
      (TxSize::TX_16X32, -1),
      (TxSize::TX_32X16, 1),
      (TxSize::TX_32X64, -1),
      (TxSize::TX_64X32, 1),
      (TxSize::TX_4X16, -2),
      (TxSize::TX_16X4, 2),
      (TxSize::TX_8X32, -2),
      (TxSize::TX_32X8, 2),
      (TxSize::TX_16X64, -2),
      (TxSize::TX_64X16, 2),
    ];

    for &(tx_size, expected) in combinations.iter() {
      assert_eq!(
        get_rect_tx_log_ratio(tx_size.width(), tx_size.height()),
        expected
      );
    }
  }

  #[test]
  fn tx_size_dims() {
    for &tx_size in ALL_SIZES.iter() {
      assert_eq!(
        TxSize::by_dims(tx_size.width(), tx_size.height()),
        tx_size
      );
      assert_eq!(tx_size.area(), tx_size.width() * tx_size.height());
    }
  }

  #[test]
  fn roundtrips() {
    use self::TxSize::*;
    use self::TxType::*;
    let combinations = [
      (TX_4X4, DCT_DCT, 2),
      (TX_4X4, ADST_DCT, 2),
      (TX_4X4, DCT_ADST, 2),
      (TX_4X4, ADST_ADST, 2),
      (TX_4X4, FLIPADST_DCT, 2),
      (TX_4X4, DCT_FLIPADST, 2),
      (TX_4X4, FLIPADST_FLIPADST, 2),
      (TX_4X4, ADST_FLIPADST, 2),
      (TX_4X4, FLIPADST_ADST, 2),
      (TX_4X4, IDTX, 2),
      (TX_4X4, V_DCT, 2),
      (TX_4X4, H_DCT, 2),
      (TX_4X4, V_ADST, 2),
      (TX_4X4, H_ADST, 2),
      (TX_4X4, V_FLIPADST, 2),
      (TX_4X4, H_FLIPADST, 2),
      (TX_8X8, DCT_DCT, 2),
      (TX_8X8, ADST_DCT, 2),
      (TX_8X8, DCT_ADST, 2),
      (TX_8X8, ADST_ADST, 2),
      (TX_8X8, FLIPADST_DCT, 2),
      (TX_8X8, DCT_FLIPADST, 2),
      (TX_8X8, FLIPADST_FLIPADST, 2),
      (TX_8X8, ADST_FLIPADST, 2),
      (TX_8X8, FLIPADST_ADST, 2),
      (TX_8X8, IDTX, 2),
      (TX_8X8, V_DCT, 2),
      (TX_8X8, H_DCT, 2),
      (TX_8X8, V_ADST, 2),
      (TX_8X8, H_ADST, 2),
      (TX_8X8, V_FLIPADST, 2),
      (TX_8X8, H_FLIPADST, 2),
      (TX_16X16, DCT_DCT, 2),
      (TX_16X16, ADST_DCT, 2),
      (TX_16X16, DCT_ADST, 2),
      (TX_16X16, ADST_ADST, 2),
      (TX_16X16, FLIPADST_FLIPADST, 2),
      (TX_16X16, IDTX, 2),
      (TX_16X16, V_DCT, 2),
      (TX_16X16, H_DCT, 2),
      // 32x transforms only use DCT_DCT and IDTX
      (TX_32X32, DCT_DCT, 4),
      (TX_32X32, IDTX, 4),
      (TX_4X8, DCT_DCT, 2),
      (TX_4X8, ADST_ADST, 2),
      (TX_4X8, FLIPADST_DCT, 2),
      (TX_8X4, DCT_DCT, 2),
      (TX_8X4, DCT_FLIPADST, 2),
      (TX_4X16, DCT_DCT, 2),
      (TX_4X16, H_ADST, 2),
      (TX_16X4, DCT_DCT, 2),
      (TX_16X4, V_ADST, 2),
      (TX_8X16, DCT_DCT, 2),
      (TX_8X16, ADST_ADST, 2),
      (TX_16X8, DCT_DCT, 2),
      (TX_16X8, FLIPADST_FLIPADST, 2),
      (TX_8X32, DCT_DCT, 4),
      (TX_8X32, IDTX, 4),
      (TX_32X8, DCT_DCT, 4),
      (TX_32X8, IDTX, 4),
      (TX_16X32, DCT_DCT, 4),
      (TX_32X16, DCT_DCT, 4),
    ];
    for &(tx_size, tx_type, tolerance) in combinations.iter() {
      test_roundtrip(tx_size, tx_type, tolerance);
    }
  }

  fn test_roundtrip_hbd(
    tx_size: TxSize, tx_type: TxType, tolerance: i32, bit_depth: usize,
  ) {
    let mut ra = ChaChaRng::from_seed([bit_depth as u8; 32]);
    let area = tx_size.area();
    let mut src_storage = [0u16; 64 * 64];
    let src = &mut src_storage[..area];
    let mut dst_storage = [0u16; 64 * 64];
    let dst = &mut dst_storage[..area];
    let mut res_storage = [0i16; 64 * 64];
    let res = &mut res_storage[..area];
    let mut freq_storage = [0i32; 64 * 64];
    let freq = &mut freq_storage[..area];
    let max_pixel = (1u16 << bit_depth) - 1;
    for ((r, s), d) in res.iter_mut().zip(src.iter_mut()).zip(dst.iter_mut())
    {
      *s = ra.gen_range(0..=max_pixel);
      *d = ra.gen_range(0..=max_pixel);
      *r = *s as i16 - *d as i16;
    }
    forward_transform(
      res,
      freq,
      tx_size.width(),
      tx_size,
      tx_type,
      bit_depth,
      CoeffMode::Full,
    );
    inverse_transform_add(
      freq,
      dst,
      tx_size.width(),
      tx_size,
      tx_type,
      bit_depth,
    );

    for (s, d) in src.iter().zip(dst.iter()) {
      assert!(
        (i32::from(*s) - i32::from(*d)).abs() <= tolerance,
        "roundtrip mismatch for {:?} {:?} at {} bits: {} vs {}",
        tx_size,
        tx_type,
        bit_depth,
        s,
        d
      );
    }
  }

  #[test]
  fn roundtrips_hbd() {
    use self::TxSize::*;
    use self::TxType::*;
    let combinations = [
      (TX_4X4, DCT_DCT, 2, 10),
      (TX_4X4, ADST_ADST, 2, 10),
      (TX_8X8, DCT_DCT, 2, 10),
      (TX_8X16, ADST_DCT, 2, 10),
      (TX_16X16, DCT_DCT, 2, 10),
      (TX_32X32, DCT_DCT, 4, 10),
      (TX_4X4, DCT_DCT, 2, 12),
      (TX_8X8, FLIPADST_FLIPADST, 3, 12),
      (TX_16X16, DCT_DCT, 3, 12),
      (TX_32X32, DCT_DCT, 4, 12),
    ];
    for &(tx_size, tx_type, tolerance, bit_depth) in combinations.iter() {
      test_roundtrip_hbd(tx_size, tx_type, tolerance, bit_depth);
    }
  }

  #[test]
  fn roundtrip_64x64_dc() {
    let src = [140u8; 64 * 64];
    let mut dst = [120u8; 64 * 64];
    let res = [20i16; 64 * 64];
    let mut freq = [0i16; 64 * 64];
    forward_transform(
      &res,
      &mut freq,
      64,
      TxSize::TX_64X64,
      TxType::DCT_DCT,
      8,
      CoeffMode::Full,
    );
    inverse_transform_add(
      &freq,
      &mut dst,
      64,
      TxSize::TX_64X64,
      TxType::DCT_DCT,
      8,
    );
    for (s, d) in src.iter().zip(dst.iter()) {
      assert!((i16::from(*s) - i16::from(*d)).abs() <= 2);
    }
  }

  fn test_partial_consistency(
    tx_size: TxSize, tx_type: TxType, coeff_mode: CoeffMode,
  ) {
    let mut ra = ChaChaRng::from_seed([tx_size as u8 ^ 0x55; 32]);
    let w = tx_size.width();
    let h = tx_size.height();
    let area = tx_size.area();
    let res: Vec<i16> = (0..area).map(|_| ra.gen_range(-255..=255)).collect();
    let mut full = vec![0i32; area];
    // poison the partial buffer so unwritten positions are caught
    let mut part = vec![777i32; area];
    forward_transform(
      &res,
      &mut full,
      w,
      tx_size,
      tx_type,
      8,
      CoeffMode::Full,
    );
    forward_transform(&res, &mut part, w, tx_size, tx_type, 8, coeff_mode);
    let sub_w = w >> coeff_mode.log2_ratio();
    let sub_h = h >> coeff_mode.log2_ratio();
    for r in 0..h {
      for c in 0..w {
        let v = part[r * w + c];
        if r < sub_h && c < sub_w {
          assert_eq!(
            v,
            full[r * w + c],
            "{:?} {:?} {:?}: corner mismatch at ({}, {})",
            tx_size,
            tx_type,
            coeff_mode,
            r,
            c
          );
        } else {
          assert_eq!(
            v, 0,
            "{:?} {:?} {:?}: expected zero fill at ({}, {})",
            tx_size, tx_type, coeff_mode, r, c
          );
        }
      }
    }
  }

  #[test]
  fn partial_modes_match_full() {
    for &tx_size in ALL_SIZES.iter() {
      for &tx_type in legal_types(tx_size) {
        for coeff_mode in [CoeffMode::N2, CoeffMode::N4] {
          test_partial_consistency(tx_size, tx_type, coeff_mode);
        }
      }
    }
  }

  #[test]
  fn dct64_high_frequencies_are_zeroed() {
    let mut ra = ChaChaRng::from_seed([3; 32]);
    for &tx_size in
      &[TxSize::TX_64X64, TxSize::TX_64X16, TxSize::TX_16X64]
    {
      let w = tx_size.width();
      let h = tx_size.height();
      let res: Vec<i16> =
        (0..tx_size.area()).map(|_| ra.gen_range(-255..=255)).collect();
      let mut freq = vec![777i32; tx_size.area()];
      forward_transform(
        &res,
        &mut freq,
        w,
        tx_size,
        TxType::DCT_DCT,
        8,
        CoeffMode::Full,
      );
      for r in 0..h {
        for c in 0..w {
          if r >= 32 || c >= 32 {
            assert_eq!(freq[r * w + c], 0, "({}, {}) of {:?}", r, c, tx_size);
          }
        }
      }
    }
  }

  #[test]
  fn extreme_input_stays_in_range() {
    let mut ra = ChaChaRng::from_seed([9; 32]);
    for &tx_size in ALL_SIZES.iter() {
      let w = tx_size.width();
      let area = tx_size.area();
      for &tx_type in legal_types(tx_size) {
        for &bit_depth in &[8usize, 10, 12] {
          let limit = ((1i32 << bit_depth) - 1) as i16;
          for pattern in 0..3 {
            let res: Vec<i16> = (0..area)
              .map(|i| match pattern {
                0 => limit,
                1 => {
                  if (i % w + i / w) % 2 == 0 {
                    limit
                  } else {
                    -limit
                  }
                }
                _ => ra.gen_range(-limit..=limit),
              })
              .collect();
            let mut freq = vec![0i32; area];
            forward_transform(
              &res,
              &mut freq,
              w,
              tx_size,
              tx_type,
              bit_depth,
              CoeffMode::Full,
            );
            for &c in freq.iter() {
              assert!(
                c.abs() < 1 << (bit_depth + 7),
                "{:?} {:?} at {} bits: coefficient {} out of range",
                tx_size,
                tx_type,
                bit_depth,
                c
              );
            }
          }
        }
      }
    }
  }

  #[test]
  fn fdct4_is_nearly_linear() {
    let mut ra = ChaChaRng::from_seed([11; 32]);
    for _ in 0..200 {
      let mut x = [0i32; 4];
      let mut y = [0i32; 4];
      let mut sum = [0i32; 4];
      for i in 0..4 {
        x[i] = ra.gen_range(-1024..=1024);
        y[i] = ra.gen_range(-1024..=1024);
        sum[i] = x[i] + y[i];
      }
      let mut fx = [0i32; 4];
      let mut fy = [0i32; 4];
      let mut fsum = [0i32; 4];
      av1_fdct4(&x, &mut fx, 13);
      av1_fdct4(&y, &mut fy, 13);
      av1_fdct4(&sum, &mut fsum, 13);
      for i in 0..4 {
        assert!((fsum[i] - fx[i] - fy[i]).abs() <= 1);
      }
    }
  }

  #[test]
  fn fidentity4_is_nearly_linear() {
    let mut ra = ChaChaRng::from_seed([13; 32]);
    for _ in 0..200 {
      let mut x = [0i32; 4];
      let mut y = [0i32; 4];
      let mut sum = [0i32; 4];
      for i in 0..4 {
        x[i] = ra.gen_range(-4096..=4096);
        y[i] = ra.gen_range(-4096..=4096);
        sum[i] = x[i] + y[i];
      }
      let mut fx = [0i32; 4];
      let mut fy = [0i32; 4];
      let mut fsum = [0i32; 4];
      av1_fidentity4(&x, &mut fx, 13);
      av1_fidentity4(&y, &mut fy, 13);
      av1_fidentity4(&sum, &mut fsum, 13);
      for i in 0..4 {
        assert!((fsum[i] - fx[i] - fy[i]).abs() <= 1);
      }
    }
  }

  #[test]
  fn identity8_kernel_doubles() {
    let input: [i32; 8] = [1, -3, 7, 0, 25, -40, 9, 3];
    let mut out = [0i32; 8];
    av1_fidentity8(&input, &mut out, 13);
    for (o, i) in out.iter().zip(input.iter()) {
      assert_eq!(*o, i * 2);
    }
  }

  #[test]
  fn all_zero_8x8_produces_all_zero() {
    let res = [0i16; 64];
    let mut freq = [777i32; 64];
    forward_transform(
      &res,
      &mut freq,
      8,
      TxSize::TX_8X8,
      TxType::DCT_DCT,
      8,
      CoeffMode::Full,
    );
    assert_eq!(freq, [0i32; 64]);
  }

  #[test]
  fn constant_block_8x8_yields_dc_only() {
    let c = 73i16;
    let res = [c; 64];
    let mut freq = [0i32; 64];
    forward_transform(
      &res,
      &mut freq,
      8,
      TxSize::TX_8X8,
      TxType::DCT_DCT,
      8,
      CoeffMode::Full,
    );
    // replicate the stage chain for a constant column, then a constant row
    let cospi = cospi_arr(13);
    let col =
      half_btf(cospi[32], i32::from(c) << 4, cospi[32], i32::from(c) << 4, 13);
    let col = round_shift(col, 1);
    let dc = half_btf(cospi[32], col << 2, cospi[32], col << 2, 13);
    assert_eq!(freq[0], dc);
    for (i, &v) in freq.iter().enumerate().skip(1) {
      assert_eq!(v, 0, "AC coefficient at {} should be zero", i);
    }
  }

  #[test]
  fn idtx_4x4_delta_scales_only_dc_position() {
    let mut res = [0i16; 16];
    res[0] = 1;
    let mut freq = [0i32; 16];
    forward_transform(
      &res,
      &mut freq,
      4,
      TxSize::TX_4X4,
      TxType::IDTX,
      8,
      CoeffMode::Full,
    );
    // 1 << shift[0], then the sqrt2 identity scaling once per axis: the two
    // passes double the pre-scaled sample
    let v =
      round_shift_wide(i64::from(1i32 << 2) * i64::from(SQRT2), SQRT2_BITS);
    let v = round_shift_wide(i64::from(v) * i64::from(SQRT2), SQRT2_BITS);
    assert_eq!(v, (1 << 2) << 1);
    assert_eq!(freq[0], v);
    for &v in freq[1..].iter() {
      assert_eq!(v, 0);
    }
  }

  #[test]
  fn flip_variants_only_change_read_order() {
    let mut ra = ChaChaRng::from_seed([17; 32]);
    let res: Vec<i16> = (0..64).map(|_| ra.gen_range(-255..=255)).collect();
    let mut flipped = vec![0i16; 64];
    for r in 0..8 {
      for c in 0..8 {
        flipped[r * 8 + c] = res[(7 - r) * 8 + c];
      }
    }
    let mut freq_flip = [0i32; 64];
    let mut freq_manual = [0i32; 64];
    forward_transform(
      &res,
      &mut freq_flip,
      8,
      TxSize::TX_8X8,
      TxType::FLIPADST_DCT,
      8,
      CoeffMode::Full,
    );
    forward_transform(
      &flipped,
      &mut freq_manual,
      8,
      TxSize::TX_8X8,
      TxType::ADST_DCT,
      8,
      CoeffMode::Full,
    );
    assert_eq!(freq_flip, freq_manual);
  }

  #[test]
  fn wide_stride_reads_only_the_block() {
    let mut ra = ChaChaRng::from_seed([23; 32]);
    let stride = 100;
    let mut padded = vec![0i16; stride * 8];
    let mut tight = vec![0i16; 64];
    for r in 0..8 {
      for c in 0..8 {
        let v: i16 = ra.gen_range(-255..=255);
        padded[r * stride + c] = v;
        tight[r * 8 + c] = v;
      }
      // garbage beyond the block width must not leak in
      for c in 8..stride {
        padded[r * stride + c] = 12345;
      }
    }
    let mut freq_padded = [0i32; 64];
    let mut freq_tight = [0i32; 64];
    forward_transform(
      &padded,
      &mut freq_padded,
      stride,
      TxSize::TX_8X8,
      TxType::DCT_DCT,
      8,
      CoeffMode::Full,
    );
    forward_transform(
      &tight,
      &mut freq_tight,
      8,
      TxSize::TX_8X8,
      TxType::DCT_DCT,
      8,
      CoeffMode::Full,
    );
    assert_eq!(freq_padded, freq_tight);
  }
}
