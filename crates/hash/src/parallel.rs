// Copyright 2024-2025 Irreducible Inc.

use rayon::prelude::*;

use crate::{
	buffer::{Input, Output, SignInput},
	SwifftObject,
};

/// Blocks handed to one rayon task.
const BLOCKS_PER_TASK: usize = 64;

impl SwifftObject<'_> {
	/// [`Self::compute_multiple`] split across the rayon thread pool.
	///
	/// # Panics
	/// Panics if `inputs` and `outputs` differ in length.
	pub fn par_compute_multiple(&self, inputs: &[Input], outputs: &mut [Output]) {
		assert_eq!(inputs.len(), outputs.len());
		inputs
			.par_chunks(BLOCKS_PER_TASK)
			.zip(outputs.par_chunks_mut(BLOCKS_PER_TASK))
			.for_each(|(inputs, outputs)| self.compute_multiple(inputs, outputs));
	}

	/// [`Self::compute_multiple_signed`] split across the rayon thread pool.
	///
	/// # Panics
	/// Panics if `inputs`, `signs` and `outputs` differ in length.
	pub fn par_compute_multiple_signed(
		&self,
		inputs: &[Input],
		signs: &[SignInput],
		outputs: &mut [Output],
	) {
		assert_eq!(inputs.len(), outputs.len());
		assert_eq!(signs.len(), outputs.len());
		inputs
			.par_chunks(BLOCKS_PER_TASK)
			.zip(signs.par_chunks(BLOCKS_PER_TASK))
			.zip(outputs.par_chunks_mut(BLOCKS_PER_TASK))
			.for_each(|((inputs, signs), outputs)| {
				self.compute_multiple_signed(inputs, signs, outputs)
			});
	}
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, SeedableRng};

	use super::*;

	#[test]
	fn test_parallel_matches_sequential() {
		let mut rng = StdRng::seed_from_u64(5);
		let object = SwifftObject::detect();
		let inputs = (0..200).map(|_| Input::random(&mut rng)).collect::<Vec<_>>();
		let signs = (0..200).map(|_| Input::random(&mut rng)).collect::<Vec<_>>();

		let mut expected = vec![Output::ZERO; inputs.len()];
		object.compute_multiple_signed(&inputs, &signs, &mut expected);
		let mut actual = vec![Output::ZERO; inputs.len()];
		object.par_compute_multiple_signed(&inputs, &signs, &mut actual);
		assert_eq!(actual, expected);

		object.compute_multiple(&inputs, &mut expected);
		object.par_compute_multiple(&inputs, &mut actual);
		assert_eq!(actual, expected);
	}
}
