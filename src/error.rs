//! Error types

use crate::components::ArchetypeMask;
use std::fmt;

/// Storage error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
	/// A pushed row's computed archetype mask does not equal the target
	/// store's fixed mask. Raised before any column is mutated.
	ArchetypeMismatch {
		expected: ArchetypeMask,
		actual: ArchetypeMask,
	},
}

impl fmt::Display for StorageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StorageError::ArchetypeMismatch { expected, actual } => {
				write!(
					f,
					"components do not match the archetype mask: expected {expected}, got {actual}"
				)
			},
		}
	}
}

impl std::error::Error for StorageError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, StorageError>;
