use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Closed set of supported value types.
///
/// Adding a type means adding a variant here and an arm to every exhaustive
/// match in [`crate::scalar`]; there is no open-ended name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
	/// Plain text.
	Text,
	/// A resolvable class reference.
	Class,
	/// A single filesystem path.
	Path,
	/// An ordered list of filesystem paths.
	PathList,
	/// An ordered list of strings.
	StringList,
	/// A boolean.
	Flag,
	/// A 32-bit signed integer.
	Number,
	/// A nested property map.
	Properties,
}

impl TypeTag {
	/// Every tag, in wire-table order.
	pub const ALL: [TypeTag; 8] = [
		Self::Text,
		Self::Class,
		Self::Path,
		Self::PathList,
		Self::StringList,
		Self::Flag,
		Self::Number,
		Self::Properties,
	];

	/// The stable wire name of this tag.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Text => "java.lang.String",
			Self::Class => "java.lang.Class",
			Self::Path => "java.io.File",
			Self::PathList => "[Ljava.io.File;",
			Self::StringList => "java.util.ArrayList",
			Self::Flag => "java.lang.Boolean",
			Self::Number => "java.lang.Integer",
			Self::Properties => "java.util.Properties",
		}
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TypeTag {
	type Err = CodecError;

	/// Matches wire names exactly (case-sensitive, no trimming).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|tag| tag.as_str() == s)
			.ok_or_else(|| CodecError::UnknownType(s.to_string()))
	}
}
