// Copyright 2024-2025 Irreducible Inc.

//! Scalar kernel, available on every target.

use swifft_field::{center, center_i16, M, N};
use swifft_ntt::{forward_transform_row, SwifftTables};

use crate::buffer::{FftOutput, Input, Output, SignInput};

/// Transforms every row of a signed input block.
pub fn fft(tables: &SwifftTables, input: &Input, sign: &SignInput, output: &mut FftOutput) {
	for (m, row) in output.0.iter_mut().enumerate() {
		*row = forward_transform_row(tables, input.row(m), sign.row(m));
	}
}

/// Keyed reduction of the row transforms produced by [`fft`].
pub fn fft_sum(tables: &SwifftTables, transformed: &FftOutput, output: &mut Output) {
	let mut acc = [0i32; N];
	for m in 0..M {
		accumulate(&mut acc, tables.key().row(m), transformed.row(m));
	}
	output.0 = acc.map(|x| x as i16);
}

pub fn compute(tables: &SwifftTables, input: &Input, output: &mut Output) {
	compute_signed(tables, input, &Input::ZERO, output)
}

pub fn compute_signed(tables: &SwifftTables, input: &Input, sign: &SignInput, output: &mut Output) {
	let mut acc = [0i32; N];
	for m in 0..M {
		let transformed = forward_transform_row(tables, input.row(m), sign.row(m));
		accumulate(&mut acc, tables.key().row(m), &transformed);
	}
	output.0 = acc.map(|x| x as i16);
}

pub fn compute_multiple(tables: &SwifftTables, inputs: &[Input], outputs: &mut [Output]) {
	assert_eq!(inputs.len(), outputs.len());
	for (input, output) in inputs.iter().zip(outputs) {
		compute(tables, input, output);
	}
}

pub fn compute_multiple_signed(
	tables: &SwifftTables,
	inputs: &[Input],
	signs: &[SignInput],
	outputs: &mut [Output],
) {
	assert_eq!(inputs.len(), outputs.len());
	assert_eq!(signs.len(), outputs.len());
	for ((input, sign), output) in inputs.iter().zip(signs).zip(outputs) {
		compute_signed(tables, input, sign, output);
	}
}

#[inline]
fn accumulate(acc: &mut [i32; N], key: &[i16; N], transformed: &[i16; N]) {
	for t in 0..N {
		acc[t] = center(acc[t] + key[t] as i32 * transformed[t] as i32);
	}
}

#[inline]
fn zip_apply(output: &mut Output, operand: &Output, op: impl Fn(i32, i32) -> i32) {
	for (dst, &src) in output.0.iter_mut().zip(&operand.0) {
		*dst = center(op(*dst as i32, src as i32)) as i16;
	}
}

#[inline]
fn const_apply(output: &mut Output, operand: i16, op: impl Fn(i32, i32) -> i32) {
	let operand = center(operand as i32);
	for dst in output.0.iter_mut() {
		*dst = center(op(*dst as i32, operand)) as i16;
	}
}

pub fn set(output: &mut Output, operand: &Output) {
	output.0 = operand.0;
}

pub fn add(output: &mut Output, operand: &Output) {
	zip_apply(output, operand, |a, b| a + b)
}

pub fn sub(output: &mut Output, operand: &Output) {
	zip_apply(output, operand, |a, b| a - b)
}

pub fn mul(output: &mut Output, operand: &Output) {
	zip_apply(output, operand, |a, b| a * b)
}

pub fn const_set(output: &mut Output, operand: i16) {
	output.0 = [center_i16(operand); N];
}

pub fn const_add(output: &mut Output, operand: i16) {
	const_apply(output, operand, |a, b| a + b)
}

pub fn const_sub(output: &mut Output, operand: i16) {
	const_apply(output, operand, |a, b| a - b)
}

pub fn const_mul(output: &mut Output, operand: i16) {
	const_apply(output, operand, |a, b| a * b)
}

macro_rules! define_multiple {
	($($name:ident => $single:ident: $operand:ty),* $(,)?) => {
		$(
			pub fn $name(outputs: &mut [Output], operands: &[$operand]) {
				assert_eq!(outputs.len(), operands.len());
				for (output, operand) in outputs.iter_mut().zip(operands) {
					$single(output, operand);
				}
			}
		)*
	};
}

define_multiple!(
	set_multiple => set: Output,
	add_multiple => add: Output,
	sub_multiple => sub: Output,
	mul_multiple => mul: Output,
);

macro_rules! define_const_multiple {
	($($name:ident => $single:ident),* $(,)?) => {
		$(
			pub fn $name(outputs: &mut [Output], operands: &[i16]) {
				assert_eq!(outputs.len(), operands.len());
				for (output, &operand) in outputs.iter_mut().zip(operands) {
					$single(output, operand);
				}
			}
		)*
	};
}

define_const_multiple!(
	const_set_multiple => const_set,
	const_add_multiple => const_add,
	const_sub_multiple => const_sub,
	const_mul_multiple => const_mul,
);
