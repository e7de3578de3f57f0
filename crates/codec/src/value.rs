use std::fmt;
use std::path::PathBuf;

use propwire_properties::PropertyMap;

use crate::class::ClassName;
use crate::tag::TypeTag;

/// A decoded value of one of the supported types.
///
/// Decoding always builds a fresh value; nothing is shared with the
/// encoding side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	Text(String),
	Class(ClassName),
	/// Encoded with [`Path::to_string_lossy`](std::path::Path::to_string_lossy),
	/// so only UTF-8 paths survive a round trip.
	Path(PathBuf),
	/// Same element rules as [`Value::StringList`]; elements must also be UTF-8.
	PathList(Vec<PathBuf>),
	/// Round-trips when the list is non-empty and every element is comma-free
	/// with no leading or trailing whitespace. An empty list decodes as `[""]`.
	StringList(Vec<String>),
	Flag(bool),
	Number(i32),
	Properties(PropertyMap),
}

impl Value {
	/// The tag this value is encoded under.
	pub fn tag(&self) -> TypeTag {
		match self {
			Self::Text(_) => TypeTag::Text,
			Self::Class(_) => TypeTag::Class,
			Self::Path(_) => TypeTag::Path,
			Self::PathList(_) => TypeTag::PathList,
			Self::StringList(_) => TypeTag::StringList,
			Self::Flag(_) => TypeTag::Flag,
			Self::Number(_) => TypeTag::Number,
			Self::Properties(_) => TypeTag::Properties,
		}
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	pub fn as_flag(&self) -> Option<bool> {
		match self {
			Self::Flag(flag) => Some(*flag),
			_ => None,
		}
	}

	pub fn as_number(&self) -> Option<i32> {
		match self {
			Self::Number(number) => Some(*number),
			_ => None,
		}
	}

	pub fn as_properties(&self) -> Option<&PropertyMap> {
		match self {
			Self::Properties(map) => Some(map),
			_ => None,
		}
	}
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = T>) -> fmt::Result {
	f.write_str("[")?;
	for (i, item) in items.enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	f.write_str("]")
}

/// Human-readable rendering. Lists print bracketed, which the list decoder
/// tolerates, but this is not the wire form; use [`crate::encode`] for that.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Class(class) => write!(f, "{class}"),
			Self::Path(path) => write!(f, "{}", path.display()),
			Self::PathList(paths) => write_list(f, paths.iter().map(|p| p.display())),
			Self::StringList(items) => write_list(f, items.iter()),
			Self::Flag(flag) => write!(f, "{flag}"),
			Self::Number(number) => write!(f, "{number}"),
			Self::Properties(map) => {
				f.write_str("{")?;
				for (i, (key, value)) in map.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{key}={value}")?;
				}
				f.write_str("}")
			}
		}
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<ClassName> for Value {
	fn from(class: ClassName) -> Self {
		Self::Class(class)
	}
}

impl From<PathBuf> for Value {
	fn from(path: PathBuf) -> Self {
		Self::Path(path)
	}
}

impl From<Vec<PathBuf>> for Value {
	fn from(paths: Vec<PathBuf>) -> Self {
		Self::PathList(paths)
	}
}

impl From<Vec<String>> for Value {
	fn from(items: Vec<String>) -> Self {
		Self::StringList(items)
	}
}

impl From<bool> for Value {
	fn from(flag: bool) -> Self {
		Self::Flag(flag)
	}
}

impl From<i32> for Value {
	fn from(number: i32) -> Self {
		Self::Number(number)
	}
}

impl From<PropertyMap> for Value {
	fn from(map: PropertyMap) -> Self {
		Self::Properties(map)
	}
}
