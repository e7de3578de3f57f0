//! `<tag>|<payload>` scalar codec.

use std::path::PathBuf;

use propwire_properties::{format, latin1};
use tracing::{trace, warn};

use crate::class::ClassResolver;
use crate::error::{CodecError, Result};
use crate::list::{decode_list, encode_list};
use crate::tag::TypeTag;
use crate::value::Value;


/// Separates the tag from the payload.
pub const TAG_SEPARATOR: char = '|';

/// Encodes `value` as `<tag>|<payload>`.
///
/// Paths are written lossily: bytes that are not UTF-8 become U+FFFD. Lists
/// are joined without escaping, see [`Value::StringList`] for which lists
/// decode back unchanged.
pub fn encode(value: &Value) -> String {
	let payload = match value {
		Value::Text(text) => text.clone(),
		Value::Class(class) => class.as_str().to_string(),
		Value::Path(path) => path.to_string_lossy().into_owned(),
		Value::PathList(paths) => encode_list(paths.iter().map(|p| p.to_string_lossy())),
		Value::StringList(items) => encode_list(items),
		Value::Flag(flag) => flag.to_string(),
		Value::Number(number) => number.to_string(),
		Value::Properties(map) => format::store(map, None),
	};
	format!("{}{TAG_SEPARATOR}{payload}", value.tag())
}

/// Decodes a `<tag>|<payload>` string.
///
/// The string is split on the first `|`. A blank tag (or a blank string with
/// no separator at all) decodes to `None`: the key is present but carries no
/// typed value.
pub fn decode(encoded: &str, resolver: &dyn ClassResolver) -> Result<Option<Value>> {
	match encoded.split_once(TAG_SEPARATOR) {
		Some((tag, payload)) => decode_payload(tag, payload, resolver),
		None if encoded.trim().is_empty() => Ok(None),
		None => Err(CodecError::MissingSeparator(encoded.to_string())),
	}
}

/// Decodes `payload` as the type named by `tag`.
pub fn decode_payload(tag: &str, payload: &str, resolver: &dyn ClassResolver) -> Result<Option<Value>> {
	if tag.trim().is_empty() {
		return Ok(None);
	}

	let tag: TypeTag = tag.parse()?;
	trace!(%tag, payload_len = payload.len(), "decoding typed value");

	let value = match tag {
		TypeTag::Text => Value::Text(payload.to_string()),
		TypeTag::Class => Value::Class(resolver.resolve(payload)?),
		TypeTag::Path => Value::Path(PathBuf::from(payload)),
		TypeTag::PathList => Value::PathList(decode_list(payload).into_iter().map(PathBuf::from).collect()),
		TypeTag::StringList => Value::StringList(decode_list(payload)),
		TypeTag::Flag => Value::Flag(parse_flag(payload)),
		TypeTag::Number => Value::Number(payload.parse().map_err(|source| CodecError::InvalidNumber {
			payload: payload.to_string(),
			source,
		})?),
		TypeTag::Properties => {
			let bytes = latin1::encode(payload);
			let map = format::load_latin1(&bytes).map_err(|error| {
				warn!(%error, "embedded properties payload is corrupt");
				CodecError::Corrupt(error)
			})?;
			Value::Properties(map)
		}
	};
	Ok(Some(value))
}

/// Lenient boolean parsing: `true` in any letter case is `true`, anything
/// else is `false`.
pub fn parse_flag(text: &str) -> bool {
	text.eq_ignore_ascii_case("true")
}
