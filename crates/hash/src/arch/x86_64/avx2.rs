// Copyright 2024-2025 Irreducible Inc.

//! 256-bit kernel: two input rows per vector.

use std::arch::x86_64::*;

use swifft_field::W;

use super::lanes::Lanes;

impl Lanes for __m256i {
	const ROWS: usize = 2;

	#[inline(always)]
	unsafe fn splat(value: i16) -> Self {
		_mm256_set1_epi16(value)
	}

	#[inline(always)]
	unsafe fn load(src: &[i16]) -> Self {
		debug_assert!(src.len() >= Self::LANES);
		_mm256_loadu_si256(src.as_ptr() as *const __m256i)
	}

	#[inline(always)]
	unsafe fn load_rows(rows: &[&[i16; W]]) -> Self {
		_mm256_loadu2_m128i(rows[1].as_ptr() as *const __m128i, rows[0].as_ptr() as *const __m128i)
	}

	#[inline(always)]
	unsafe fn store(self, dst: &mut [i16]) {
		debug_assert!(dst.len() >= Self::LANES);
		_mm256_storeu_si256(dst.as_mut_ptr() as *mut __m256i, self)
	}

	#[inline(always)]
	unsafe fn add(self, rhs: Self) -> Self {
		_mm256_add_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn sub(self, rhs: Self) -> Self {
		_mm256_sub_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn mullo(self, rhs: Self) -> Self {
		_mm256_mullo_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn and(self, rhs: Self) -> Self {
		_mm256_and_si256(self, rhs)
	}

	#[inline(always)]
	unsafe fn shr8(self) -> Self {
		_mm256_srai_epi16::<8>(self)
	}

	#[inline(always)]
	unsafe fn fold_above_half(self) -> Self {
		let above = _mm256_cmpgt_epi16(self, _mm256_set1_epi16(128));
		_mm256_sub_epi16(self, _mm256_and_si256(above, _mm256_set1_epi16(257)))
	}
}

define_entry_points!("avx2", __m256i);
