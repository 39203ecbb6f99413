// Copyright 2024-2025 Irreducible Inc.

//! Powers of the transform root and the per-position multipliers derived from them.

use std::ops::Deref;

use swifft_field::{reverse_bits, Z257, G, LOG2_W, OMEGA, OMEGA_ORDER, W};

use crate::Error;

/// The powers $\omega^0, \ldots, \omega^{2N}$ of a primitive $2N$-th root of unity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmegaPowers {
	omega: Z257,
	powers: Vec<Z257>,
}

impl OmegaPowers {
	/// Tabulates the powers of `omega`.
	///
	/// Fails with [`Error::InvalidRoot`] unless `omega` has multiplicative order exactly
	/// [`OMEGA_ORDER`] modulo 257.
	pub fn generate(omega: i32) -> Result<Self, Error> {
		let root = Z257::new(omega);
		// The order is exactly 2N, a power of two, iff the N-th power is -1.
		if root.pow(OMEGA_ORDER as u64 / 2) != -Z257::ONE {
			return Err(Error::InvalidRoot {
				omega,
				expected_order: OMEGA_ORDER,
			});
		}

		let powers = std::iter::successors(Some(Z257::ONE), |&x| Some(x * root))
			.take(OMEGA_ORDER + 1)
			.collect::<Vec<_>>();

		Ok(Self {
			omega: root,
			powers,
		})
	}

	pub fn omega(&self) -> Z257 {
		self.omega
	}

	/// Returns $\omega^{exponent}$ for any exponent, reducing it modulo the root order.
	#[inline]
	pub fn get(&self, exponent: usize) -> Z257 {
		self.powers[exponent % OMEGA_ORDER]
	}

	/// Twiddles of the outer transform across the `G` groups.
	///
	/// Entry `t` is $\omega^{2N t / G}$, the `t`-th power of a primitive `2G`-th root of unity. The
	/// butterfly `t` of a stage spanning `len` groups uses entry `t * G / len`.
	pub fn outer_twiddles(&self) -> [i16; G / 2] {
		std::array::from_fn(|t| self.get(OMEGA_ORDER / G * t).val())
	}
}

impl Default for OmegaPowers {
	fn default() -> Self {
		Self::generate(OMEGA).expect("the built-in root has the required order")
	}
}

impl Deref for OmegaPowers {
	type Target = [Z257];

	fn deref(&self) -> &Self::Target {
		&self.powers
	}
}

/// Multipliers applied to the combination table output before the outer transform.
///
/// Entry `i * W + j` is $\omega^{rev(i) \cdot (2j + 1)}$, where `rev` reverses the
/// [`LOG2_W`] low bits of the group index `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplierTable([[i16; W]; G]);

impl MultiplierTable {
	pub fn generate(powers: &OmegaPowers) -> Self {
		let mut table = [[0i16; W]; G];
		for (group, row) in table.iter_mut().enumerate() {
			let shift = reverse_bits(group, 1 << LOG2_W);
			for (lane, entry) in row.iter_mut().enumerate() {
				*entry = powers.get(shift * (2 * lane + 1)).val();
			}
		}
		Self(table)
	}

	/// The multipliers for one input byte position.
	#[inline]
	pub fn group(&self, group: usize) -> &[i16; W] {
		&self.0[group]
	}

	/// All [`MULTIPLIERS_LEN`](swifft_field::MULTIPLIERS_LEN) multipliers in group-major order.
	pub fn as_slice(&self) -> &[i16] {
		bytemuck::cast_slice(&self.0)
	}
}
