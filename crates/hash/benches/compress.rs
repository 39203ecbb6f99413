// Copyright 2024-2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::thread_rng;
use swifft_field::INPUT_BLOCK_SIZE;
use swifft_hash::{FftOutput, Input, InstructionSet, Output, SwifftObject};

const BATCH: usize = 1 << 10;

fn bench_compute(c: &mut Criterion) {
	let mut group = c.benchmark_group("SWIFFT");
	let mut rng = thread_rng();

	let input = Input::random(&mut rng);
	let sign = Input::random(&mut rng);
	let inputs = (0..BATCH).map(|_| Input::random(&mut rng)).collect::<Vec<_>>();
	let mut outputs = vec![Output::ZERO; BATCH];

	for isa in InstructionSet::ALL {
		let Ok(object) = SwifftObject::new(isa) else {
			continue;
		};

		group.throughput(Throughput::Bytes(INPUT_BLOCK_SIZE as u64));
		group.bench_function(BenchmarkId::new("compute", isa), |bench| {
			let mut output = Output::ZERO;
			bench.iter(|| object.compute(&input, &mut output))
		});
		group.bench_function(BenchmarkId::new("compute_signed", isa), |bench| {
			let mut output = Output::ZERO;
			bench.iter(|| object.compute_signed(&input, &sign, &mut output))
		});
		group.bench_function(BenchmarkId::new("fft", isa), |bench| {
			let mut output = FftOutput::ZERO;
			bench.iter(|| object.fft(&input, &sign, &mut output))
		});

		group.throughput(Throughput::Bytes((BATCH * INPUT_BLOCK_SIZE) as u64));
		group.bench_function(BenchmarkId::new("compute_multiple", isa), |bench| {
			bench.iter(|| object.compute_multiple(&inputs, &mut outputs))
		});
		group.bench_function(BenchmarkId::new("par_compute_multiple", isa), |bench| {
			bench.iter(|| object.par_compute_multiple(&inputs, &mut outputs))
		});
	}

	group.finish()
}

criterion_group!(compress, bench_compute);
criterion_main!(compress);
