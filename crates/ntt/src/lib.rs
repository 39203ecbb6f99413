// Copyright 2024-2025 Irreducible Inc.

//! Precomputation of the SWIFFT transform tables and key.
//!
//! The transform evaluates a row of binary coefficients $x$ at the odd powers of a primitive
//! $2N$-th root of unity $\omega$, i.e. $y_i = \sum_k x_k \omega^{(2i+1)k}$. The fast evaluation
//! is split into an inner 8-point transform over the bits of each input byte, which is fully
//! tabulated in the [`CombinationTable`], and an outer 8-point transform across bytes whose
//! per-position twiddles live in the [`MultiplierTable`]. The [`KeyMatrix`] is derived from the
//! decimal expansion of π.

mod digits;
mod error;
mod fft_table;
mod key;
pub mod reference;
mod tables;
mod transform;
pub mod twiddle;

pub use digits::{DecimalDigits, PI_DIGITS};
pub use error::Error;
pub use fft_table::CombinationTable;
pub use key::KeyMatrix;
pub use tables::SwifftTables;
pub use transform::forward_transform_row;
pub use twiddle::{MultiplierTable, OmegaPowers};
