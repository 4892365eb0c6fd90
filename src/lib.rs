// Copyright (c) 2018-2023, the av1-txfm contributors. All rights reserved
//
// This source code is subject to the terms of the BSD 2 Clause License and
// the Alliance for Open Media Patent License 1.0. If the BSD 2 Clause License
// was not distributed with this source code in the LICENSE file, you can
// obtain it at www.aomedia.org/license/software. If the Alliance for Open
// Media Patent License 1.0 was not distributed with this source code in the
// PATENTS file, you can obtain it at www.aomedia.org/license/patent.

//! Integer forward transforms for AV1-class video encoders.
//!
//! The crate turns 2-D blocks of residual samples into frequency-domain
//! coefficients: an exact fixed-point DCT-II, the discrete-sine-based ADST,
//! and the identity transform, combined per axis over every AV1-legal block
//! geometry from 4x4 to 64x64. A partial-coefficient mode computes only the
//! low-frequency corner for cheaper rate-distortion probes, and the matching
//! integer inverse is included so the round-trip contract is testable
//! in-tree.
//!
//! Everything is a pure function over caller-provided buffers; the only
//! shared state is a set of immutable constant tables, so the entry points
//! can be called concurrently from any number of threads.

pub mod transform;
pub mod util;

pub use crate::transform::{
  forward_transform, inverse_transform_add, CoeffMode, TxSize, TxType,
};
