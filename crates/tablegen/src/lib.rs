// Copyright 2024-2025 Irreducible Inc.

//! Emits the generated SWIFFT tables as Rust source.

use std::io::{self, Write};

use itertools::Itertools;
use swifft_ntt::SwifftTables;

/// Values per line of an emitted array.
const VALUES_PER_LINE: usize = 8;

/// Writes `values` as a `pub static` array named `name`, eight right-aligned values per line.
pub fn write_array(mut out: impl Write, name: &str, values: &[i16]) -> io::Result<()> {
	writeln!(out, "pub static {name}: [i16; {}] = [", values.len())?;
	for line in &values.iter().chunks(VALUES_PER_LINE) {
		let line = line.map(|value| format!("{value:>4},")).join(" ");
		writeln!(out, "\t{line}")?;
	}
	writeln!(out, "];")
}

/// Writes the multiplier table, the combination table and the key, separated by blank lines.
pub fn write_tables(mut out: impl Write, tables: &SwifftTables) -> io::Result<()> {
	write_array(&mut out, "MULTIPLIERS", tables.multipliers().as_slice())?;
	writeln!(out)?;
	write_array(&mut out, "FFT_TABLE", tables.fft_table().as_slice())?;
	writeln!(out)?;
	write_array(&mut out, "PI_KEY", tables.key().as_slice())
}
