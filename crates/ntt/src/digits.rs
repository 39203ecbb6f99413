// Copyright 2024-2025 Irreducible Inc.

use crate::Error;

/// Fractional decimal digits of π, starting right after the decimal point.
pub static PI_DIGITS: &str = include_str!("../data/pi_digits.txt");

/// Iterator over the decimal digits of a text source.
///
/// ASCII whitespace is skipped, so digit sources may be wrapped across lines. Any other
/// non-digit character yields [`Error::InvalidDigit`] and ends the iteration.
#[derive(Debug, Clone)]
pub struct DecimalDigits<'a> {
	source: std::str::CharIndices<'a>,
	failed: bool,
}

impl<'a> DecimalDigits<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source: source.char_indices(),
			failed: false,
		}
	}

	/// Groups the digits into base-10 numbers of `width` digits each.
	///
	/// A trailing group with fewer than `width` digits is dropped.
	pub fn groups(self, width: usize) -> DigitGroups<'a> {
		DigitGroups {
			digits: self,
			width,
		}
	}
}

impl Iterator for DecimalDigits<'_> {
	type Item = Result<u8, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed {
			return None;
		}
		for (position, character) in self.source.by_ref() {
			if character.is_ascii_whitespace() {
				continue;
			}
			return match character.to_digit(10) {
				Some(digit) => Some(Ok(digit as u8)),
				None => {
					self.failed = true;
					Some(Err(Error::InvalidDigit {
						position,
						character,
					}))
				}
			};
		}
		None
	}
}

/// Iterator over fixed-width decimal numbers, see [`DecimalDigits::groups`].
#[derive(Debug, Clone)]
pub struct DigitGroups<'a> {
	digits: DecimalDigits<'a>,
	width: usize,
}

impl Iterator for DigitGroups<'_> {
	type Item = Result<u32, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		let mut group = 0u32;
		for _ in 0..self.width {
			match self.digits.next()? {
				Ok(digit) => group = group * 10 + digit as u32,
				Err(err) => return Some(Err(err)),
			}
		}
		Some(Ok(group))
	}
}
