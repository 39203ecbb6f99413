// Copyright 2024-2025 Irreducible Inc.

use crate::InstructionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("the {0} kernel is not compiled into this build")]
	NotCompiled(InstructionSet),
	#[error("the executing CPU does not support the {0} instruction set")]
	Unsupported(InstructionSet),
}
