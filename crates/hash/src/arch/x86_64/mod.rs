// Copyright 2024-2025 Irreducible Inc.

//! Vectorized kernels for x86-64.
//!
//! Each submodule implements [`lanes::Lanes`] for one vector width and instantiates the shared
//! kernel behind `#[target_feature]` entry points. Those entry points are `unsafe`: calling them on
//! a CPU without the named features is undefined behavior.

mod kernel;
mod lanes;

/// Defines the full set of entry points for one vector type under the given target features.
macro_rules! define_entry_points {
	($features:literal, $lanes:ty) => {
		use swifft_ntt::SwifftTables;

		use crate::{
			arch::x86_64::kernel,
			buffer::{FftOutput, Input, Output, SignInput},
		};

		/// Transforms every row of a signed input block.
		#[target_feature(enable = $features)]
		pub unsafe fn fft(
			tables: &SwifftTables,
			input: &Input,
			sign: &SignInput,
			output: &mut FftOutput,
		) {
			kernel::fft::<$lanes>(tables, input, sign, output)
		}

		/// Keyed reduction of the row transforms produced by [`fft`].
		#[target_feature(enable = $features)]
		pub unsafe fn fft_sum(tables: &SwifftTables, transformed: &FftOutput, output: &mut Output) {
			kernel::fft_sum::<$lanes>(tables, transformed, output)
		}

		#[target_feature(enable = $features)]
		pub unsafe fn compute(tables: &SwifftTables, input: &Input, output: &mut Output) {
			kernel::compute_signed::<$lanes>(tables, input, &Input::ZERO, output)
		}

		#[target_feature(enable = $features)]
		pub unsafe fn compute_signed(
			tables: &SwifftTables,
			input: &Input,
			sign: &SignInput,
			output: &mut Output,
		) {
			kernel::compute_signed::<$lanes>(tables, input, sign, output)
		}

		#[target_feature(enable = $features)]
		pub unsafe fn compute_multiple(
			tables: &SwifftTables,
			inputs: &[Input],
			outputs: &mut [Output],
		) {
			assert_eq!(inputs.len(), outputs.len());
			for (input, output) in inputs.iter().zip(outputs) {
				kernel::compute_signed::<$lanes>(tables, input, &Input::ZERO, output);
			}
		}

		#[target_feature(enable = $features)]
		pub unsafe fn compute_multiple_signed(
			tables: &SwifftTables,
			inputs: &[Input],
			signs: &[SignInput],
			outputs: &mut [Output],
		) {
			assert_eq!(inputs.len(), outputs.len());
			assert_eq!(signs.len(), outputs.len());
			for ((input, sign), output) in inputs.iter().zip(signs).zip(outputs) {
				kernel::compute_signed::<$lanes>(tables, input, sign, output);
			}
		}

		#[target_feature(enable = $features)]
		pub unsafe fn set(output: &mut Output, operand: &Output) {
			output.0 = operand.0;
		}

		#[target_feature(enable = $features)]
		pub unsafe fn add(output: &mut Output, operand: &Output) {
			kernel::binary_op::<$lanes>(output, operand, |a, b| kernel::add(a, b))
		}

		#[target_feature(enable = $features)]
		pub unsafe fn sub(output: &mut Output, operand: &Output) {
			kernel::binary_op::<$lanes>(output, operand, |a, b| kernel::sub(a, b))
		}

		#[target_feature(enable = $features)]
		pub unsafe fn mul(output: &mut Output, operand: &Output) {
			kernel::binary_op::<$lanes>(output, operand, |a, b| kernel::mul(a, b))
		}

		#[target_feature(enable = $features)]
		pub unsafe fn const_set(output: &mut Output, operand: i16) {
			kernel::const_op::<$lanes>(output, operand, |_, c| c)
		}

		#[target_feature(enable = $features)]
		pub unsafe fn const_add(output: &mut Output, operand: i16) {
			kernel::const_op::<$lanes>(output, operand, |a, c| kernel::add(a, c))
		}

		#[target_feature(enable = $features)]
		pub unsafe fn const_sub(output: &mut Output, operand: i16) {
			kernel::const_op::<$lanes>(output, operand, |a, c| kernel::sub(a, c))
		}

		#[target_feature(enable = $features)]
		pub unsafe fn const_mul(output: &mut Output, operand: i16) {
			kernel::const_op::<$lanes>(output, operand, |a, c| kernel::mul(a, c))
		}

		define_entry_points!(@multiple $features,
			set_multiple => set: &Output,
			add_multiple => add: &Output,
			sub_multiple => sub: &Output,
			mul_multiple => mul: &Output,
		);

		define_entry_points!(@const_multiple $features,
			const_set_multiple => const_set,
			const_add_multiple => const_add,
			const_sub_multiple => const_sub,
			const_mul_multiple => const_mul,
		);
	};
	(@multiple $features:literal, $($name:ident => $single:ident: &$operand:ty),* $(,)?) => {
		$(
			#[target_feature(enable = $features)]
			pub unsafe fn $name(outputs: &mut [Output], operands: &[$operand]) {
				assert_eq!(outputs.len(), operands.len());
				for (output, operand) in outputs.iter_mut().zip(operands) {
					$single(output, operand);
				}
			}
		)*
	};
	(@const_multiple $features:literal, $($name:ident => $single:ident),* $(,)?) => {
		$(
			#[target_feature(enable = $features)]
			pub unsafe fn $name(outputs: &mut [Output], operands: &[i16]) {
				assert_eq!(outputs.len(), operands.len());
				for (output, &operand) in outputs.iter_mut().zip(operands) {
					$single(output, operand);
				}
			}
		)*
	};
}

pub mod avx;
pub mod avx2;
pub mod avx512;
