// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::{Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};
use rand::{Rng, RngCore};

use crate::{arithmetic::center, params::P};

/// An element of $\mathbb{Z}_{257}$ stored in centered form.
///
/// The inner value is always in `[-128, 128]`, so two elements are equal exactly when their inner
/// values are equal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct Z257(i16);

impl Z257 {
	pub const ZERO: Self = Self(0);
	pub const ONE: Self = Self(1);

	/// Creates the element congruent to `value`.
	pub const fn new(value: i32) -> Self {
		Self(center(value) as i16)
	}

	/// The centered representative.
	pub const fn val(self) -> i16 {
		self.0
	}

	/// The representative in `[0, P)`.
	pub const fn canonical(self) -> u16 {
		(self.0 as i32).rem_euclid(P) as u16
	}

	pub fn random(mut rng: impl RngCore) -> Self {
		Self::new(rng.gen_range(0..P))
	}

	pub fn pow(self, mut exp: u64) -> Self {
		let mut base = self;
		let mut result = Self::ONE;
		while exp > 0 {
			if exp & 1 == 1 {
				result *= base;
			}
			base *= base;
			exp >>= 1;
		}
		result
	}
}

impl From<i32> for Z257 {
	fn from(value: i32) -> Self {
		Self::new(value)
	}
}

impl From<i16> for Z257 {
	fn from(value: i16) -> Self {
		Self::new(value as i32)
	}
}

impl From<Z257> for i16 {
	fn from(value: Z257) -> Self {
		value.0
	}
}

impl From<Z257> for i32 {
	fn from(value: Z257) -> Self {
		value.0 as i32
	}
}

impl Display for Z257 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Neg for Z257 {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Self::new(-(self.0 as i32))
	}
}

macro_rules! impl_z257_binop {
	($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
		impl $trait<Self> for Z257 {
			type Output = Self;

			#[inline]
			fn $method(self, rhs: Self) -> Self::Output {
				Self::new(self.0 as i32 $op rhs.0 as i32)
			}
		}

		impl $trait<&Self> for Z257 {
			type Output = Self;

			#[inline]
			fn $method(self, rhs: &Self) -> Self::Output {
				self $op *rhs
			}
		}

		impl $assign_trait<Self> for Z257 {
			#[inline]
			fn $assign_method(&mut self, rhs: Self) {
				*self = *self $op rhs;
			}
		}

		impl $assign_trait<&Self> for Z257 {
			#[inline]
			fn $assign_method(&mut self, rhs: &Self) {
				*self = *self $op *rhs;
			}
		}
	};
}

impl_z257_binop!(Add, add, AddAssign, add_assign, +);
impl_z257_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_z257_binop!(Mul, mul, MulAssign, mul_assign, *);

impl Sum<Self> for Z257 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for Z257 {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl Product<Self> for Z257 {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<'a> Product<&'a Self> for Z257 {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::params::{OMEGA, OMEGA_ORDER};

	#[test]
	fn test_omega_order() {
		let omega = Z257::new(OMEGA);
		assert_eq!(omega.pow(OMEGA_ORDER as u64), Z257::ONE);
		assert_eq!(omega.pow(OMEGA_ORDER as u64 / 2), -Z257::ONE);
		assert_eq!(omega.pow(16), Z257::new(4));
	}

	#[test]
	fn test_canonical() {
		assert_eq!(Z257::new(-1).canonical(), 256);
		assert_eq!(Z257::new(128).canonical(), 128);
		assert_eq!(Z257::new(129).canonical(), 129);
		assert_eq!(Z257::new(129).val(), -128);
	}

	fn z257() -> impl Strategy<Value = Z257> {
		any::<i32>().prop_map(Z257::new)
	}

	proptest! {
		#[test]
		fn test_add_matches_integers(a in any::<i16>(), b in any::<i16>()) {
			let expected = Z257::new(a as i32 + b as i32);
			prop_assert_eq!(Z257::from(a) + Z257::from(b), expected);
		}

		#[test]
		fn test_mul_matches_integers(a in any::<i16>(), b in any::<i16>()) {
			let expected = Z257::new(a as i32 * b as i32);
			prop_assert_eq!(Z257::from(a) * Z257::from(b), expected);
		}

		#[test]
		fn test_sub_neg(a in z257(), b in z257()) {
			prop_assert_eq!(a - b, a + (-b));
			prop_assert_eq!(a - a, Z257::ZERO);
		}

		#[test]
		fn test_fermat(a in z257()) {
			prop_assume!(a != Z257::ZERO);
			prop_assert_eq!(a.pow((P - 1) as u64), Z257::ONE);
		}
	}
}
