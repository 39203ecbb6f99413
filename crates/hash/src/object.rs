// Copyright 2024-2025 Irreducible Inc.

//! Runtime selection of the compression kernel.

use std::fmt::{Display, Formatter};

use swifft_ntt::SwifftTables;
use swifft_utils::env::boolean_env_flag_set;
use tracing::debug;

#[cfg(target_arch = "x86_64")]
use crate::arch::x86_64::{avx, avx2, avx512};
use crate::{
	arch::portable,
	buffer::{FftOutput, Input, Output, SignInput},
	default_tables, Error,
};

/// Environment flag that restricts [`InstructionSet::detect`] to the portable kernel.
pub const FORCE_PORTABLE_ENV: &str = "SWIFFT_FORCE_PORTABLE";

/// The instruction-set levels a kernel is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InstructionSet {
	Portable,
	Avx,
	Avx2,
	Avx512,
}

impl InstructionSet {
	/// All levels, from the baseline to the widest.
	pub const ALL: [Self; 4] = [Self::Portable, Self::Avx, Self::Avx2, Self::Avx512];

	/// Number of field elements processed per vector instruction.
	pub const fn lanes(self) -> usize {
		match self {
			Self::Portable => 1,
			Self::Avx => 8,
			Self::Avx2 => 16,
			Self::Avx512 => 32,
		}
	}

	/// Whether the kernel for this level is part of the build.
	pub const fn is_compiled(self) -> bool {
		match self {
			Self::Portable => true,
			Self::Avx | Self::Avx2 | Self::Avx512 => cfg!(target_arch = "x86_64"),
		}
	}

	/// Whether the executing CPU supports this level.
	pub fn is_supported(self) -> bool {
		match self {
			Self::Portable => true,
			#[cfg(target_arch = "x86_64")]
			Self::Avx => is_x86_feature_detected!("avx"),
			#[cfg(target_arch = "x86_64")]
			Self::Avx2 => is_x86_feature_detected!("avx2"),
			#[cfg(target_arch = "x86_64")]
			Self::Avx512 => {
				is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw")
			}
			#[cfg(not(target_arch = "x86_64"))]
			_ => false,
		}
	}

	/// The widest level that is both compiled and supported.
	pub fn detect() -> Self {
		if boolean_env_flag_set(FORCE_PORTABLE_ENV) {
			return Self::Portable;
		}
		Self::ALL
			.into_iter()
			.rev()
			.find(|isa| isa.is_compiled() && isa.is_supported())
			.unwrap_or(Self::Portable)
	}
}

impl Display for InstructionSet {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Portable => "portable",
			Self::Avx => "AVX",
			Self::Avx2 => "AVX2",
			Self::Avx512 => "AVX-512",
		};
		f.write_str(name)
	}
}

pub type FftFn = unsafe fn(&SwifftTables, &Input, &SignInput, &mut FftOutput);
pub type FftSumFn = unsafe fn(&SwifftTables, &FftOutput, &mut Output);
pub type ComputeFn = unsafe fn(&SwifftTables, &Input, &mut Output);
pub type ComputeSignedFn = unsafe fn(&SwifftTables, &Input, &SignInput, &mut Output);
pub type ComputeMultipleFn = unsafe fn(&SwifftTables, &[Input], &mut [Output]);
pub type ComputeMultipleSignedFn = unsafe fn(&SwifftTables, &[Input], &[SignInput], &mut [Output]);
pub type BinaryOpFn = unsafe fn(&mut Output, &Output);
pub type ConstOpFn = unsafe fn(&mut Output, i16);
pub type BinaryOpMultipleFn = unsafe fn(&mut [Output], &[Output]);
pub type ConstOpMultipleFn = unsafe fn(&mut [Output], &[i16]);

/// Transform entry points.
#[derive(Clone, Copy)]
pub struct FftObject {
	pub fft: FftFn,
	pub fft_sum: FftSumFn,
}

/// Element-wise arithmetic on outputs, modulo 257.
#[derive(Clone, Copy)]
pub struct ArithObject {
	pub set: BinaryOpFn,
	pub add: BinaryOpFn,
	pub sub: BinaryOpFn,
	pub mul: BinaryOpFn,
	pub const_set: ConstOpFn,
	pub const_add: ConstOpFn,
	pub const_sub: ConstOpFn,
	pub const_mul: ConstOpFn,
	pub set_multiple: BinaryOpMultipleFn,
	pub add_multiple: BinaryOpMultipleFn,
	pub sub_multiple: BinaryOpMultipleFn,
	pub mul_multiple: BinaryOpMultipleFn,
	pub const_set_multiple: ConstOpMultipleFn,
	pub const_add_multiple: ConstOpMultipleFn,
	pub const_sub_multiple: ConstOpMultipleFn,
	pub const_mul_multiple: ConstOpMultipleFn,
}

/// Compression entry points.
#[derive(Clone, Copy)]
pub struct HashObject {
	pub compute: ComputeFn,
	pub compute_signed: ComputeSignedFn,
	pub compute_multiple: ComputeMultipleFn,
	pub compute_multiple_signed: ComputeMultipleSignedFn,
}

macro_rules! bind_kernel {
	($module:ident) => {
		(
			FftObject {
				fft: $module::fft,
				fft_sum: $module::fft_sum,
			},
			ArithObject {
				set: $module::set,
				add: $module::add,
				sub: $module::sub,
				mul: $module::mul,
				const_set: $module::const_set,
				const_add: $module::const_add,
				const_sub: $module::const_sub,
				const_mul: $module::const_mul,
				set_multiple: $module::set_multiple,
				add_multiple: $module::add_multiple,
				sub_multiple: $module::sub_multiple,
				mul_multiple: $module::mul_multiple,
				const_set_multiple: $module::const_set_multiple,
				const_add_multiple: $module::const_add_multiple,
				const_sub_multiple: $module::const_sub_multiple,
				const_mul_multiple: $module::const_mul_multiple,
			},
			HashObject {
				compute: $module::compute,
				compute_signed: $module::compute_signed,
				compute_multiple: $module::compute_multiple,
				compute_multiple_signed: $module::compute_multiple_signed,
			},
		)
	};
}

/// The entry points of one kernel, bound to a set of tables.
///
/// A `SwifftObject` obtained through [`SwifftObject::new`] or [`SwifftObject::detect`] only binds
/// kernels the executing CPU supports, so its methods are safe to call. The public `fn` pointers
/// in [`Self::fft`], [`Self::arith`] and [`Self::hash`] may be invoked directly under the same
/// guarantee.
#[derive(Clone, Copy)]
pub struct SwifftObject<'a> {
	isa: InstructionSet,
	tables: &'a SwifftTables,
	pub fft: FftObject,
	pub arith: ArithObject,
	pub hash: HashObject,
}

impl SwifftObject<'static> {
	/// Binds the kernel for `isa` to the default tables.
	pub fn new(isa: InstructionSet) -> Result<Self, Error> {
		if !isa.is_compiled() {
			return Err(Error::NotCompiled(isa));
		}
		if !isa.is_supported() {
			return Err(Error::Unsupported(isa));
		}
		// SAFETY: checked above.
		Ok(unsafe { Self::new_unchecked(isa) })
	}

	/// Binds the kernel for `isa` without probing the CPU.
	///
	/// # Panics
	/// Panics if the kernel for `isa` is not compiled into this build.
	///
	/// # Safety
	/// The executing CPU must support `isa`.
	pub unsafe fn new_unchecked(isa: InstructionSet) -> Self {
		let (fft, arith, hash) = match isa {
			InstructionSet::Portable => bind_kernel!(portable),
			#[cfg(target_arch = "x86_64")]
			InstructionSet::Avx => bind_kernel!(avx),
			#[cfg(target_arch = "x86_64")]
			InstructionSet::Avx2 => bind_kernel!(avx2),
			#[cfg(target_arch = "x86_64")]
			InstructionSet::Avx512 => bind_kernel!(avx512),
			#[cfg(not(target_arch = "x86_64"))]
			_ => panic!("{}", Error::NotCompiled(isa)),
		};
		debug!(%isa, "bound SWIFFT kernel");
		Self {
			isa,
			tables: default_tables(),
			fft,
			arith,
			hash,
		}
	}

	/// Binds the widest kernel available on the executing CPU.
	pub fn detect() -> Self {
		let isa = InstructionSet::detect();
		// SAFETY: `detect` only returns compiled and supported levels.
		unsafe { Self::new_unchecked(isa) }
	}
}

impl std::fmt::Debug for SwifftObject<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SwifftObject")
			.field("isa", &self.isa)
			.finish_non_exhaustive()
	}
}

impl Default for SwifftObject<'static> {
	fn default() -> Self {
		Self::detect()
	}
}

impl<'a> SwifftObject<'a> {
	pub fn isa(&self) -> InstructionSet {
		self.isa
	}

	pub fn tables(&self) -> &'a SwifftTables {
		self.tables
	}

	/// Rebinds the same kernel to other tables, such as ones generated with a different key.
	pub fn with_tables<'b>(self, tables: &'b SwifftTables) -> SwifftObject<'b> {
		SwifftObject {
			isa: self.isa,
			tables,
			fft: self.fft,
			arith: self.arith,
			hash: self.hash,
		}
	}

	// SAFETY (all methods below): the bound kernel is supported by the executing CPU, see the
	// constructors.

	pub fn fft(&self, input: &Input, sign: &SignInput, output: &mut FftOutput) {
		unsafe { (self.fft.fft)(self.tables, input, sign, output) }
	}

	/// # Preconditions
	/// Every element of `transformed` is centered. Other values give kernel-dependent results.
	pub fn fft_sum(&self, transformed: &FftOutput, output: &mut Output) {
		unsafe { (self.fft.fft_sum)(self.tables, transformed, output) }
	}

	pub fn compute(&self, input: &Input, output: &mut Output) {
		unsafe { (self.hash.compute)(self.tables, input, output) }
	}

	pub fn compute_signed(&self, input: &Input, sign: &SignInput, output: &mut Output) {
		unsafe { (self.hash.compute_signed)(self.tables, input, sign, output) }
	}

	/// # Panics
	/// Panics if `inputs` and `outputs` differ in length.
	pub fn compute_multiple(&self, inputs: &[Input], outputs: &mut [Output]) {
		unsafe { (self.hash.compute_multiple)(self.tables, inputs, outputs) }
	}

	/// # Panics
	/// Panics if `inputs`, `signs` and `outputs` differ in length.
	pub fn compute_multiple_signed(
		&self,
		inputs: &[Input],
		signs: &[SignInput],
		outputs: &mut [Output],
	) {
		unsafe { (self.hash.compute_multiple_signed)(self.tables, inputs, signs, outputs) }
	}

	pub fn set(&self, output: &mut Output, operand: &Output) {
		unsafe { (self.arith.set)(output, operand) }
	}

	/// # Preconditions
	/// Every element of `output` and `operand` is centered.
	pub fn add(&self, output: &mut Output, operand: &Output) {
		unsafe { (self.arith.add)(output, operand) }
	}

	/// # Preconditions
	/// Every element of `output` and `operand` is centered.
	pub fn sub(&self, output: &mut Output, operand: &Output) {
		unsafe { (self.arith.sub)(output, operand) }
	}

	/// # Preconditions
	/// Every element of `output` and `operand` is centered.
	pub fn mul(&self, output: &mut Output, operand: &Output) {
		unsafe { (self.arith.mul)(output, operand) }
	}

	pub fn const_set(&self, output: &mut Output, operand: i16) {
		unsafe { (self.arith.const_set)(output, operand) }
	}

	/// # Preconditions
	/// Every element of `output` is centered. `operand` may be any value.
	pub fn const_add(&self, output: &mut Output, operand: i16) {
		unsafe { (self.arith.const_add)(output, operand) }
	}

	/// # Preconditions
	/// Every element of `output` is centered. `operand` may be any value.
	pub fn const_sub(&self, output: &mut Output, operand: i16) {
		unsafe { (self.arith.const_sub)(output, operand) }
	}

	/// # Preconditions
	/// Every element of `output` is centered. `operand` may be any value.
	pub fn const_mul(&self, output: &mut Output, operand: i16) {
		unsafe { (self.arith.const_mul)(output, operand) }
	}

	pub fn set_multiple(&self, outputs: &mut [Output], operands: &[Output]) {
		unsafe { (self.arith.set_multiple)(outputs, operands) }
	}

	/// # Preconditions
	/// Every element of `outputs` and `operands` is centered.
	pub fn add_multiple(&self, outputs: &mut [Output], operands: &[Output]) {
		unsafe { (self.arith.add_multiple)(outputs, operands) }
	}

	/// # Preconditions
	/// Every element of `outputs` and `operands` is centered.
	pub fn sub_multiple(&self, outputs: &mut [Output], operands: &[Output]) {
		unsafe { (self.arith.sub_multiple)(outputs, operands) }
	}

	/// # Preconditions
	/// Every element of `outputs` and `operands` is centered.
	pub fn mul_multiple(&self, outputs: &mut [Output], operands: &[Output]) {
		unsafe { (self.arith.mul_multiple)(outputs, operands) }
	}

	pub fn const_set_multiple(&self, outputs: &mut [Output], operands: &[i16]) {
		unsafe { (self.arith.const_set_multiple)(outputs, operands) }
	}

	pub fn const_add_multiple(&self, outputs: &mut [Output], operands: &[i16]) {
		unsafe { (self.arith.const_add_multiple)(outputs, operands) }
	}

	pub fn const_sub_multiple(&self, outputs: &mut [Output], operands: &[i16]) {
		unsafe { (self.arith.const_sub_multiple)(outputs, operands) }
	}

	pub fn const_mul_multiple(&self, outputs: &mut [Output], operands: &[i16]) {
		unsafe { (self.arith.const_mul_multiple)(outputs, operands) }
	}
}
