// Copyright 2024-2025 Irreducible Inc.

//! Fixed parameters of the SWIFFT construction.
//!
//! These never vary at runtime; every table and kernel in the workspace is specialized to them.

use static_assertions::const_assert_eq;

/// The prime modulus.
pub const P: i32 = 257;

/// Transform length, the number of coefficients per input row and the number of output elements.
pub const N: usize = 64;

/// Number of input rows (and key rows) combined by one compression call.
pub const M: usize = 16;

/// Base-2 logarithm of [`W`].
pub const LOG2_W: usize = 3;

/// Number of lanes per group, and the number of input bits carried by one input byte.
pub const W: usize = 1 << LOG2_W;

/// Number of byte groups per input row.
pub const G: usize = N / W;

/// Base-2 logarithm of [`V`]: one bit level per bit of an input byte.
pub const LOG2_V: usize = W;

/// Size of the per-group digit alphabet indexing the combination table (one byte of bits).
pub const V: usize = 1 << LOG2_V;

/// Primitive root of unity of order exactly [`OMEGA_ORDER`] modulo [`P`].
pub const OMEGA: i32 = 42;

/// Multiplicative order of [`OMEGA`].
pub const OMEGA_ORDER: usize = 2 * N;

/// Number of bytes holding one input row.
pub const ROW_BYTES: usize = N / u8::BITS as usize;

/// Size in bytes of one input block (and of one sign block).
pub const INPUT_BLOCK_SIZE: usize = M * ROW_BYTES;

/// Size in bytes of one output block of `N` 16-bit field elements.
pub const OUTPUT_BLOCK_SIZE: usize = N * std::mem::size_of::<i16>();

/// Number of entries in the multiplier table.
pub const MULTIPLIERS_LEN: usize = N;

/// Number of entries in the combination table.
pub const FFT_TABLE_LEN: usize = V * V * W;

/// Number of entries in the key matrix.
pub const KEY_LEN: usize = M * N;

const_assert_eq!(G, W);
const_assert_eq!(G * W, N);
const_assert_eq!(ROW_BYTES, G);
const_assert_eq!(INPUT_BLOCK_SIZE, 128);
