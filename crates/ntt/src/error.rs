// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("omega = {omega} does not have multiplicative order {expected_order} modulo 257")]
	InvalidRoot { omega: i32, expected_order: usize },
	#[error("digit source exhausted after producing {produced} of {needed} key elements")]
	DigitsExhausted { needed: usize, produced: usize },
	#[error("invalid character {character:?} at position {position} of the digit source")]
	InvalidDigit { position: usize, character: char },
	#[error("key matrix must have exactly {expected} elements, got {actual}")]
	KeyShape { expected: usize, actual: usize },
}
