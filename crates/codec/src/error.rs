//! Error types for typed value decoding.

use std::num::ParseIntError;

use propwire_properties::PropertiesError;
use thiserror::Error;

/// Errors that can occur when decoding an encoded value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
	/// The tag is not one of the supported types. Always a producer bug.
	#[error("unknown parameter type: {0}")]
	UnknownType(String),

	/// A class name could not be resolved in the active resolution context.
	#[error("cannot resolve class '{name}': {reason}")]
	ClassResolution {
		/// The name that failed to resolve.
		name: String,
		/// Why the resolver rejected it.
		reason: String,
	},

	/// An embedded properties payload is not valid property-file text.
	#[error("bug in property conversion")]
	Corrupt(#[source] PropertiesError),

	/// The encoded string has no `|` between tag and payload.
	#[error("missing type separator in encoded value '{0}'")]
	MissingSeparator(String),

	/// A number payload is not a decimal 32-bit integer.
	#[error("invalid integer payload '{payload}'")]
	InvalidNumber {
		/// The rejected payload.
		payload: String,
		/// The underlying parse failure.
		#[source]
		source: ParseIntError,
	},
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
