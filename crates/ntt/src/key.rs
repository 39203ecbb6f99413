// Copyright 2024-2025 Irreducible Inc.

use swifft_field::{center, KEY_LEN, M, N, P};

use crate::{digits::DecimalDigits, Error, PI_DIGITS};

/// Digits per candidate key element.
const DIGIT_GROUP_WIDTH: usize = 3;

/// The `M x N` key matrix, one row of `N` centered elements per input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
	rows: [[i16; N]; M],
}

impl KeyMatrix {
	/// Derives the key from a decimal digit source.
	///
	/// Digits are read in groups of three. A group `d` below `3 * P` contributes the element
	/// `d mod P`, any other group is skipped so that every residue is equally likely. Elements fill
	/// the matrix row by row.
	pub fn from_digits(source: &str) -> Result<Self, Error> {
		let mut elements = Vec::with_capacity(KEY_LEN);
		for group in DecimalDigits::new(source).groups(DIGIT_GROUP_WIDTH) {
			let group = group? as i32;
			if group < 3 * P {
				elements.push(center(group % P) as i16);
				if elements.len() == KEY_LEN {
					return Self::from_elements(&elements);
				}
			}
		}
		Err(Error::DigitsExhausted {
			needed: KEY_LEN,
			produced: elements.len(),
		})
	}

	/// The standard key, derived from the fractional digits of π.
	pub fn pi() -> Result<Self, Error> {
		Self::from_digits(PI_DIGITS)
	}

	/// Builds a key from `M * N` row-major elements, reducing each into centered form.
	pub fn from_elements(elements: &[i16]) -> Result<Self, Error> {
		if elements.len() != KEY_LEN {
			return Err(Error::KeyShape {
				expected: KEY_LEN,
				actual: elements.len(),
			});
		}
		let mut rows = [[0i16; N]; M];
		for (row, chunk) in rows.iter_mut().zip(elements.chunks_exact(N)) {
			for (dst, &src) in row.iter_mut().zip(chunk) {
				*dst = center(src as i32) as i16;
			}
		}
		Ok(Self { rows })
	}

	pub fn from_rows(rows: [[i16; N]; M]) -> Self {
		Self {
			rows: rows.map(|row| row.map(|x| center(x as i32) as i16)),
		}
	}

	#[inline]
	pub fn row(&self, index: usize) -> &[i16; N] {
		&self.rows[index]
	}

	pub fn rows(&self) -> &[[i16; N]; M] {
		&self.rows
	}

	/// All elements in row-major order.
	pub fn as_slice(&self) -> &[i16] {
		bytemuck::cast_slice(&self.rows)
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;
	use proptest::prelude::*;

	use super::*;

	/// The π key in canonical form `[0, P)`, row after row.
	#[rustfmt::skip]
	const PI_KEY_CANONICAL: [i16; KEY_LEN] = [
		141,  78, 139,  75, 238, 205, 129, 126,  22, 245, 197, 169, 142, 118, 105,  78,
		 50, 149,  29, 208, 114,  34,  85, 117,  67, 148,  86, 256,  25,  49, 133,  93,
		 95,  36,  68, 231, 211, 102, 151, 128, 224, 117, 193,  27, 102, 187,   7, 105,
		 45, 130, 108, 124, 171, 151, 189, 128, 218, 134, 233, 165,  14, 201, 145, 134,
		 52, 203,  91,  96, 197,  69, 134, 213, 136,  93,   3, 249, 141,  16, 210,  73,
		  6,  92,  58,  74, 174,   6, 254,  91, 201, 107, 110,  76, 103,  11,  73,  16,
		 34, 209,   7, 127, 146, 254,  95, 176,  57,  13, 108, 245,  77,  92, 186, 117,
		124,  97, 105, 118,  34,  74, 205, 122, 235,  53,  94, 238, 210, 227, 183,  11,
		129, 159, 105, 183, 142, 129,  86,  21, 137, 138, 224, 223, 190, 188, 179, 188,
		256,  25, 217, 176,  36, 176, 238, 127, 160, 210, 155, 148, 132,   0,  54, 127,
		145,   6,  46,  85, 243,  95, 173, 123, 178, 207, 211, 183, 224, 173, 146,  35,
		 71, 114,  50,  22, 175,   1,  28,  19, 112, 129,  21,  34, 161, 159, 115,  52,
		  4, 193, 211,  92, 115,  49,  59, 217, 218,  96,  61,  81,  24, 202, 198,  89,
		 45, 128,   8,  51, 253,  87, 171,  35,   4, 188, 171,  10,   3, 137, 238,  73,
		 19, 208, 124, 163, 103, 177, 155, 147,  46,  84, 253, 233, 171, 241, 211, 217,
		159,  48,  96,  79, 237,  18, 171, 226,  99,   1,  97, 195, 216, 163, 198,  95,
		  0, 201,  65, 228,  21, 153, 124, 230,  44,  35,  44, 108,  85, 156, 249, 207,
		 26, 222, 131,   1,  60, 242, 197, 150, 181,  19, 116, 213,  75,  98, 124, 240,
		123, 207,  62, 255,  60, 143, 187, 157, 139,   9,  12, 104,  89,  49, 193, 146,
		104, 196, 181,  82, 198, 253, 192, 191, 255, 122, 212, 104,  47,  20, 132, 208,
		 46, 170,   2,  69, 234,  36,  56, 163,  28, 152, 104, 238, 162,  56,  24,  58,
		 38, 150, 193, 254, 253, 125, 173,  35,  73, 126, 247, 239, 216,   6, 199,  15,
		 90,  12,  97, 122,   9,  84, 207, 127, 219,  72,  58,  30,  29, 182,  41, 192,
		235, 248, 237,  74,  72, 176, 210, 252,  45,  64, 165,  87, 202, 241, 236, 223,
		151, 242, 119, 239,  52, 112, 169,  28,  13,  37, 160,  60, 158,  81, 133,  60,
		 16, 145, 249, 192, 173, 217, 214,  93, 141, 184,  54,  34, 161, 104, 157,  95,
		 38, 133, 218, 227, 211, 181,   9,  66, 137, 143,  77,  33, 248, 159,   4,  55,
		228,  48,  99, 219, 222, 184,  15,  36, 254, 256, 157, 237,  87, 139, 209, 113,
		232,  85, 126, 167, 197, 100, 103, 166,  64, 225, 125, 205, 117, 135,  84, 128,
		231, 112,  90, 241,  28,  22, 210, 147, 186,  49, 230,  21, 108,  39, 194,  47,
		123, 199, 107, 114,  30, 210, 250, 143,  59, 156, 131, 133, 221,  27,  76,  99,
		208, 250,  78,  12, 211, 141,  95,  81, 195, 106,   8, 232, 150, 212, 205, 221,
		 11, 225,  87, 219, 126, 136, 137, 180, 198,  48,  68, 203, 239, 252, 194, 235,
		142, 137, 174, 172, 190, 145, 250, 221, 182, 204,   1, 195, 130, 153,  83, 241,
		161, 239, 211, 138,  11, 169, 155, 245, 174,  49,  10, 166,  16, 130, 181, 139,
		222, 222, 112,  99, 124,  94,  51, 243, 133, 194, 244, 136,  35, 248, 201, 177,
		178, 186, 129, 102,  89, 184, 180,  41, 149,  96, 165,  72, 225, 231, 134, 158,
		199,  28, 249,  16, 225, 195,  10, 210, 164, 252, 138,   8,  35, 152, 213, 199,
		 82, 116,  97, 230,  63, 199, 241,  35,  79, 120,  54, 174,  67, 112,   1,  76,
		 69, 222, 194,  96,  82,  94,  25, 228, 196, 145, 155, 136, 228, 234,  46, 101,
		246,  51, 103, 166, 246,  75,   9, 200, 161,   4, 108,  35, 129, 168, 208, 144,
		 50,  14,  13, 220,  41, 132, 122, 127, 194,   9, 232, 234, 107,  28, 187,   8,
		 51, 141,  97, 221, 225,   9, 113, 170, 166, 102, 135,  22, 231, 185, 227, 187,
		110, 145, 251, 146,  76,  22, 146, 228,   7,  53,  64,  25,  62, 198, 130, 190,
		221, 232, 169,  64, 188, 199, 237, 249, 173, 218, 196, 191,  48, 224,   5, 113,
		100, 166, 160,  21, 191, 197,  61, 162, 149, 171, 240, 183, 129, 231, 123, 204,
		192, 179, 134,  15,  47, 161, 142, 177, 239, 234, 186, 237, 231,  53, 208,  95,
		146,  36, 225, 231,  89, 142,  93, 248, 137, 124,  83,  39,  69,  77,  89, 208,
		182,  48,  85, 147, 244, 164, 246,  68,  38, 190, 220,  35, 202,  91, 157, 151,
		201, 240, 185, 218,   4, 152,   2, 132, 177,  88, 190, 196, 229,  74, 220, 135,
		137, 196,  11,  47,   5, 251, 106, 144, 163,  60, 222, 127,  52,  57, 202, 102,
		 64, 140, 110, 206,  23, 182,  39, 245,   1, 163, 157, 186, 163,  80,   7, 230,
		 44, 249, 176, 102, 164, 125, 147, 120,  18, 191, 186, 125,  64,  65, 198, 157,
		164, 213,  95,  61,  13, 181, 208,  91, 242, 197, 158,  34,  98, 169,  91,  14,
		 17,  93, 157,  17,  65,  30, 183,   6, 139,  58, 255, 108, 100, 136, 209, 144,
		164,   6, 237,  33, 210, 110,  57, 126, 197, 136, 125, 244, 165, 151, 168,   3,
		143, 251, 247, 155, 136, 130,  88,  14,  74, 121, 250, 133,  21, 226, 185, 232,
		118, 132,  89,  64, 204, 161,   2,  70, 224, 159,  35, 204, 123, 180,  13,  52,
		231,  57,  25,  78,  66,  69,  97,  42, 198,  84, 176,  59,   8, 232, 125, 134,
		193,   2, 232, 109, 216,  69,  90, 142,  32,  38, 249,  37,  75, 180, 184, 188,
		 19,  47, 120,  87, 146,  70, 232, 120, 191,  45,  33,  38,  19, 248, 110, 110,
		 44,  64,   2,  84, 244, 228, 252, 228, 170, 123,  38, 144, 213, 144, 171, 212,
		243,  87, 189,  46, 128, 110,  84,  77,  65, 183,  61, 184, 101,  44, 168,  68,
		 14, 106, 105,   8, 227, 211, 166,  39, 152,  43,  52, 254, 197,  55, 119,  89,
	];

	#[test]
	fn test_pi_key_known_values() {
		let key = KeyMatrix::pi().unwrap();
		assert_eq!(
			&key.as_slice()[..16],
			&[-116, 78, -118, 75, -19, -52, -128, 126, 22, -12, -60, -88, -115, 118, 105, 78]
		);
		assert_eq!(key.row(0)[..3], [-116, 78, -118]);
	}

	#[test]
	fn test_pi_key_full_table() {
		let key = KeyMatrix::pi().unwrap();
		for (index, (&value, &canonical)) in
			key.as_slice().iter().zip(&PI_KEY_CANONICAL).enumerate()
		{
			assert_eq!(value as i32, center(canonical as i32), "key element {index}");
		}
	}

	#[test]
	fn test_groups_above_bound_are_skipped() {
		// 771 and 999 are rejected, 770 maps to 770 - 2 * 257 = 256, i.e. -1.
		let mut source = String::from("771999770");
		source.push_str(&"000".repeat(KEY_LEN - 1));
		let key = KeyMatrix::from_digits(&source).unwrap();
		assert_eq!(key.as_slice()[0], -1);
		assert!(key.as_slice()[1..].iter().all(|&x| x == 0));
	}

	#[test]
	fn test_short_source_is_exhausted() {
		assert_matches!(
			KeyMatrix::from_digits("141592653"),
			Err(Error::DigitsExhausted {
				needed: KEY_LEN,
				produced: 3
			})
		);
	}

	#[test]
	fn test_invalid_source() {
		assert_matches!(
			KeyMatrix::from_digits("141.592"),
			Err(Error::InvalidDigit { position: 3, .. })
		);
	}

	#[test]
	fn test_from_elements_shape() {
		assert_matches!(
			KeyMatrix::from_elements(&[0; KEY_LEN - 1]),
			Err(Error::KeyShape {
				expected: KEY_LEN,
				actual
			}) if actual == KEY_LEN - 1
		);
	}

	proptest! {
		#[test]
		fn test_from_elements_centers(
			elements in proptest::collection::vec(any::<i16>(), KEY_LEN),
		) {
			let key = KeyMatrix::from_elements(&elements).unwrap();
			for (&raw, &reduced) in elements.iter().zip(key.as_slice()) {
				prop_assert_eq!(reduced as i32, center(raw as i32));
			}
		}
	}
}
