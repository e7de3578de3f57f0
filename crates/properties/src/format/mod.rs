//! Standard property-file line syntax.
//!
//! Reading follows the usual rules: `#`/`!` comment lines, blank lines
//! skipped, backslash line continuation, a key terminated by the first
//! unescaped `=`, `:` or whitespace, and `\t \n \r \f \uXXXX` escapes.
//! Writing produces pure ASCII so the text survives any 8-bit transport.

use crate::error::{PropertiesError, Result};
use crate::latin1;
use crate::map::PropertyMap;


/// Parses property-file text into a map. Later duplicates of a key win.
pub fn load(text: &str) -> Result<PropertyMap> {
	let mut map = PropertyMap::new();
	for line in logical_lines(text) {
		let (raw_key, raw_value) = split_key_value(&line.content);
		let key = unescape(raw_key, line.number)?;
		let value = unescape(raw_value, line.number)?;
		map.set(key, value);
	}
	Ok(map)
}

/// Parses ISO-8859-1 encoded property-file bytes.
pub fn load_latin1(bytes: &[u8]) -> Result<PropertyMap> {
	load(&latin1::decode(bytes))
}

/// Serializes `map` as property-file text, one `key=value` line per entry in
/// insertion order. Each line of `comment`, if given, is written first as a
/// `#` comment line.
pub fn store(map: &PropertyMap, comment: Option<&str>) -> String {
	let mut out = String::new();
	if let Some(comment) = comment {
		for line in comment.lines() {
			out.push('#');
			for c in line.chars() {
				if is_printable_ascii(c) {
					out.push(c);
				} else {
					push_unicode_escape(&mut out, c);
				}
			}
			out.push('\n');
		}
	}
	for (key, value) in map.iter() {
		escape_into(&mut out, key, true);
		out.push('=');
		escape_into(&mut out, value, false);
		out.push('\n');
	}
	out
}

/// A line after comment removal and continuation joining.
struct LogicalLine {
	/// Natural line (1-based) the logical line starts on.
	number: usize,
	content: String,
}

fn is_blank(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\x0c')
}

fn is_printable_ascii(c: char) -> bool {
	(' '..='~').contains(&c)
}

/// Splits on `\n`, `\r` and `\r\n`.
fn natural_lines(text: &str) -> impl Iterator<Item = &str> {
	let mut rest = text;
	std::iter::from_fn(move || {
		if rest.is_empty() {
			return None;
		}
		let Some(pos) = rest.find(['\r', '\n']) else {
			return Some(std::mem::take(&mut rest));
		};
		let line = &rest[..pos];
		let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
		rest = &rest[pos + terminator..];
		Some(line)
	})
}

fn logical_lines(text: &str) -> Vec<LogicalLine> {
	let mut lines = Vec::new();
	let mut current: Option<LogicalLine> = None;

	for (idx, natural) in natural_lines(text).enumerate() {
		let body = natural.trim_start_matches(is_blank);
		// Comments and blank lines only count at the start of a logical line.
		if current.is_none() && (body.is_empty() || body.starts_with(['#', '!'])) {
			continue;
		}

		let (content, continues) = strip_continuation(body);
		let line = current.get_or_insert_with(|| LogicalLine {
			number: idx + 1,
			content: String::new(),
		});
		line.content.push_str(content);
		if !continues {
			lines.extend(current.take().filter(|line| !line.content.is_empty()));
		}
	}

	// A continuation that never picked up content is a blank line.
	lines.extend(current.filter(|line| !line.content.is_empty()));
	lines
}

/// Drops a trailing continuation backslash. Only an odd run of trailing
/// backslashes continues the line; an even run is escaped backslashes.
fn strip_continuation(body: &str) -> (&str, bool) {
	let trailing = body.chars().rev().take_while(|&c| c == '\\').count();
	if trailing % 2 == 1 {
		(&body[..body.len() - 1], true)
	} else {
		(body, false)
	}
}

fn split_key_value(line: &str) -> (&str, &str) {
	let mut key_end = line.len();
	let mut value_start = line.len();
	let mut has_separator = false;
	let mut escaped = false;

	for (i, c) in line.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match c {
			'\\' => escaped = true,
			'=' | ':' => {
				key_end = i;
				value_start = i + 1;
				has_separator = true;
				break;
			}
			c if is_blank(c) => {
				key_end = i;
				value_start = i + c.len_utf8();
				break;
			}
			_ => {}
		}
	}

	let mut value = line[value_start..].trim_start_matches(is_blank);
	if !has_separator && let Some(rest) = value.strip_prefix(['=', ':']) {
		value = rest.trim_start_matches(is_blank);
	}
	(&line[..key_end], value)
}

fn unescape(raw: &str, line: usize) -> Result<String> {
	let mut units: Vec<u16> = Vec::with_capacity(raw.len());
	let mut buf = [0u16; 2];
	let mut chars = raw.chars();

	while let Some(c) = chars.next() {
		if c != '\\' {
			units.extend_from_slice(c.encode_utf16(&mut buf));
			continue;
		}
		let Some(escaped) = chars.next() else {
			break;
		};
		match escaped {
			'u' => {
				let mut unit: u16 = 0;
				for _ in 0..4 {
					let digit = chars
						.next()
						.and_then(|d| d.to_digit(16))
						.ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
					unit = (unit << 4) | digit as u16;
				}
				units.push(unit);
			}
			't' => units.push(u16::from(b'\t')),
			'n' => units.push(u16::from(b'\n')),
			'r' => units.push(u16::from(b'\r')),
			'f' => units.push(0x0c),
			other => units.extend_from_slice(other.encode_utf16(&mut buf)),
		}
	}

	String::from_utf16(&units).map_err(|_| PropertiesError::UnpairedSurrogate { line })
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
	for (i, c) in text.chars().enumerate() {
		match c {
			' ' if is_key || i == 0 => out.push_str("\\ "),
			'\\' => out.push_str("\\\\"),
			'\t' => out.push_str("\\t"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\x0c' => out.push_str("\\f"),
			'=' | ':' | '#' | '!' => {
				out.push('\\');
				out.push(c);
			}
			c if is_printable_ascii(c) => out.push(c),
			c => push_unicode_escape(out, c),
		}
	}
}

fn push_unicode_escape(out: &mut String, c: char) {
	let mut buf = [0u16; 2];
	for unit in c.encode_utf16(&mut buf) {
		out.push_str(&format!("\\u{unit:04X}"));
	}
}
