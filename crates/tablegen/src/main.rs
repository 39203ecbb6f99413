// Copyright 2024-2025 Irreducible Inc.

use std::{
	fs::{self, File},
	io::{BufWriter, Write},
	path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use swifft_field::OMEGA;
use swifft_ntt::{SwifftTables, PI_DIGITS};
use swifft_tablegen::write_tables;
use swifft_utils::tracing::init_tracing;
use tracing::info;

#[derive(Debug, Parser)]
struct Args {
	/// File that receives the generated tables.
	outpath: PathBuf,
	/// Primitive 128th root of unity modulo 257 used for the transform.
	#[arg(long, default_value_t = OMEGA, allow_negative_numbers = true)]
	omega: i32,
	/// Text file of decimal digits used to derive the key. Defaults to the digits of pi.
	#[arg(long)]
	digits: Option<PathBuf>,
}

fn main() -> Result<()> {
	init_tracing();

	let args = Args::parse();

	let digits = match &args.digits {
		Some(path) => fs::read_to_string(path)
			.with_context(|| format!("failed to read digits from {}", path.display()))?,
		None => PI_DIGITS.to_owned(),
	};

	let _guard = tracing::info_span!("generate", omega = args.omega).entered();
	let tables = SwifftTables::generate_with(args.omega, &digits)
		.with_context(|| format!("failed to generate tables for omega = {}", args.omega))?;

	let file = File::create(&args.outpath)
		.with_context(|| format!("failed to create {}", args.outpath.display()))?;
	let mut writer = BufWriter::new(file);
	write_tables(&mut writer, &tables)
		.and_then(|()| writer.flush())
		.with_context(|| format!("failed to write {}", args.outpath.display()))?;

	info!(path = %args.outpath.display(), "wrote SWIFFT tables");
	Ok(())
}
