//! ISO-8859-1 (Latin-1) byte mapping.
//!
//! Property-file text is only byte-faithful under Latin-1: every byte maps to
//! the code point of the same value and back.

/// Replacement byte for characters outside `U+0000..=U+00FF`.
pub const REPLACEMENT: u8 = b'?';

/// Encodes `text` as Latin-1 bytes.
///
/// Characters above `U+00FF` have no Latin-1 form and become [`REPLACEMENT`].
pub fn encode(text: &str) -> Vec<u8> {
	text.chars().map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT)).collect()
}

/// Decodes Latin-1 bytes. Never fails: every byte is a valid code point.
pub fn decode(bytes: &[u8]) -> String {
	bytes.iter().copied().map(char::from).collect()
}
