//! Error types for property-file parsing.

use thiserror::Error;

/// Errors that can occur when parsing property-file text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesError {
	/// A `\u` escape was not followed by four hexadecimal digits.
	#[error("malformed \\uxxxx encoding on line {line}")]
	MalformedUnicodeEscape {
		/// Line (1-based) on which the logical line containing the escape starts.
		line: usize,
	},

	/// A `\u` escape produced a UTF-16 surrogate with no partner.
	#[error("unpaired UTF-16 surrogate escape on line {line}")]
	UnpairedSurrogate {
		/// Line (1-based) on which the logical line containing the escape starts.
		line: usize,
	},
}

/// Result type for property-file operations.
pub type Result<T> = std::result::Result<T, PropertiesError>;
