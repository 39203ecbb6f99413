// Copyright 2024-2025 Irreducible Inc.

//! 128-bit kernel: one input row per vector.

use std::arch::x86_64::*;

use swifft_field::W;

use super::lanes::Lanes;

impl Lanes for __m128i {
	const ROWS: usize = 1;

	#[inline(always)]
	unsafe fn splat(value: i16) -> Self {
		_mm_set1_epi16(value)
	}

	#[inline(always)]
	unsafe fn load(src: &[i16]) -> Self {
		debug_assert!(src.len() >= Self::LANES);
		_mm_loadu_si128(src.as_ptr() as *const __m128i)
	}

	#[inline(always)]
	unsafe fn load_rows(rows: &[&[i16; W]]) -> Self {
		_mm_loadu_si128(rows[0].as_ptr() as *const __m128i)
	}

	#[inline(always)]
	unsafe fn store(self, dst: &mut [i16]) {
		debug_assert!(dst.len() >= Self::LANES);
		_mm_storeu_si128(dst.as_mut_ptr() as *mut __m128i, self)
	}

	#[inline(always)]
	unsafe fn add(self, rhs: Self) -> Self {
		_mm_add_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn sub(self, rhs: Self) -> Self {
		_mm_sub_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn mullo(self, rhs: Self) -> Self {
		_mm_mullo_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn and(self, rhs: Self) -> Self {
		_mm_and_si128(self, rhs)
	}

	#[inline(always)]
	unsafe fn shr8(self) -> Self {
		_mm_srai_epi16::<8>(self)
	}

	#[inline(always)]
	unsafe fn fold_above_half(self) -> Self {
		let above = _mm_cmpgt_epi16(self, _mm_set1_epi16(128));
		_mm_sub_epi16(self, _mm_and_si128(above, _mm_set1_epi16(257)))
	}
}

define_entry_points!("avx", __m128i);
