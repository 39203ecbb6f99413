// Copyright 2024-2025 Irreducible Inc.

//! Arithmetic in the prime field $\mathbb{Z}_{257}$ as used by the SWIFFT compression function.
//!
//! Field elements are always kept in *centered* form, i.e. as the unique representative of the
//! residue class in $(-P/2, P/2]$, which for $P = 257$ is the integer range `[-128, 128]`. Keeping
//! values signed and small is what lets the vectorized kernels work in 16-bit lanes.

mod arithmetic;
pub mod params;
mod z257;

pub use arithmetic::*;
pub use params::*;
pub use z257::Z257;
