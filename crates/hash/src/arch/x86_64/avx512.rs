// Copyright 2024-2025 Irreducible Inc.

//! 512-bit kernel: four input rows per vector.

use std::arch::x86_64::*;

use swifft_field::W;

use super::lanes::Lanes;

impl Lanes for __m512i {
	const ROWS: usize = 4;

	#[inline(always)]
	unsafe fn splat(value: i16) -> Self {
		_mm512_set1_epi16(value)
	}

	#[inline(always)]
	unsafe fn load(src: &[i16]) -> Self {
		debug_assert!(src.len() >= Self::LANES);
		_mm512_loadu_epi16(src.as_ptr())
	}

	#[inline(always)]
	unsafe fn load_rows(rows: &[&[i16; W]]) -> Self {
		let low = _mm256_loadu2_m128i(
			rows[1].as_ptr() as *const __m128i,
			rows[0].as_ptr() as *const __m128i,
		);
		let high = _mm256_loadu2_m128i(
			rows[3].as_ptr() as *const __m128i,
			rows[2].as_ptr() as *const __m128i,
		);
		_mm512_inserti64x4::<1>(_mm512_castsi256_si512(low), high)
	}

	#[inline(always)]
	unsafe fn store(self, dst: &mut [i16]) {
		debug_assert!(dst.len() >= Self::LANES);
		_mm512_storeu_epi16(dst.as_mut_ptr(), self)
	}

	#[inline(always)]
	unsafe fn add(self, rhs: Self) -> Self {
		_mm512_add_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn sub(self, rhs: Self) -> Self {
		_mm512_sub_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn mullo(self, rhs: Self) -> Self {
		_mm512_mullo_epi16(self, rhs)
	}

	#[inline(always)]
	unsafe fn and(self, rhs: Self) -> Self {
		_mm512_and_si512(self, rhs)
	}

	#[inline(always)]
	unsafe fn shr8(self) -> Self {
		_mm512_srai_epi16::<8>(self)
	}

	#[inline(always)]
	unsafe fn fold_above_half(self) -> Self {
		let above = _mm512_cmpgt_epi16_mask(self, _mm512_set1_epi16(128));
		_mm512_mask_sub_epi16(self, above, self, _mm512_set1_epi16(257))
	}
}

define_entry_points!("avx512f,avx512bw", __m512i);
