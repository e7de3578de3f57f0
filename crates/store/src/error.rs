//! Error types for the typed property store.

use propwire_codec::CodecError;
use thiserror::Error;

/// Errors that can occur when reading or writing typed properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
	/// A stored value failed to decode.
	#[error(transparent)]
	Codec(#[from] CodecError),

	/// An absent item was passed for an indexed sequence.
	#[error("{prefix}{index} has null value")]
	NullItem {
		/// Key prefix of the sequence.
		prefix: String,
		/// Position of the absent item in the input.
		index: usize,
	},

	/// The store was constructed without a backing map.
	#[error("properties cannot be null")]
	MissingBackingStore,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
