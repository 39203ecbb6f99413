// Copyright 2024-2025 Irreducible Inc.

//! The SWIFFT compression function.
//!
//! A block of `M = 16` rows of `N = 64` bits is compressed into `N` elements of
//! $\mathbb{Z}_{257}$: every row is transformed by a number-theoretic transform, multiplied
//! element-wise by its key row, and the products are summed. Rows may carry sign bits, which makes
//! the coefficients range over $\{-1, 0, 1\}$.
//!
//! Kernels exist for several instruction-set levels under [`arch`] and produce identical results.
//! [`SwifftObject`] binds the widest one the executing CPU supports:
//!
//! ```
//! use swifft_hash::{Input, Output, SwifftObject};
//!
//! let swifft = SwifftObject::detect();
//! let mut output = Output::ZERO;
//! swifft.compute(&Input::ZERO, &mut output);
//! assert_eq!(output, Output::ZERO);
//! ```

pub mod arch;
mod buffer;
mod error;
mod object;
mod parallel;
mod tables;

pub use buffer::*;
pub use error::Error;
pub use object::*;
pub use tables::default_tables;
