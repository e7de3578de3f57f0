//! Comma-joined string lists.
//!
//! Elements containing a literal `,` cannot round-trip: the wire format has
//! no escaping, and producers already depend on that.

/// Element separator.
pub const LIST_SEPARATOR: char = ',';

/// Joins `items` with `,`. No brackets are added.
pub fn encode_list<I>(items: I) -> String
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let mut out = String::new();
	for (i, item) in items.into_iter().enumerate() {
		if i > 0 {
			out.push(LIST_SEPARATOR);
		}
		out.push_str(item.as_ref());
	}
	out
}

/// Splits a list on `,` and trims every element.
///
/// One pair of enclosing `[` `]` is stripped first, for producers that write
/// bracketed lists. Splitting is naive: empty segments are kept, so `""`
/// decodes to `[""]`.
pub fn decode_list(encoded: &str) -> Vec<String> {
	let inner = encoded
		.strip_prefix('[')
		.and_then(|rest| rest.strip_suffix(']'))
		.unwrap_or(encoded);
	inner.split(LIST_SEPARATOR).map(|item| item.trim().to_string()).collect()
}
