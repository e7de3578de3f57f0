//! Class reference resolution.
//!
//! A `java.lang.Class` payload is only a name; turning it into a usable
//! reference needs a resolution context supplied by the caller.

use std::collections::HashSet;
use std::fmt;

use crate::error::{CodecError, Result};

/// A syntactically valid fully-qualified class name, such as
/// `org.example.Outer$Inner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
	/// Validates `name` as dot-separated identifier segments. `$` counts as an
	/// identifier character so nested class names are accepted.
	pub fn parse(name: &str) -> Option<Self> {
		let valid = name.split('.').all(|segment| {
			let mut chars = segment.chars();
			chars
				.next()
				.is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
				&& chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
		});
		valid.then(|| Self(name.to_string()))
	}

	/// The fully-qualified name.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The name without its package.
	pub fn simple_name(&self) -> &str {
		self.0.rsplit_once('.').map_or(self.0.as_str(), |(_, simple)| simple)
	}

	/// The package, if the class is not in the default package.
	pub fn package(&self) -> Option<&str> {
		self.0.rsplit_once('.').map(|(package, _)| package)
	}
}

impl fmt::Display for ClassName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Resolves class names found in `java.lang.Class` payloads.
pub trait ClassResolver {
	/// Resolves `name`, failing with [`CodecError::ClassResolution`].
	fn resolve(&self, name: &str) -> Result<ClassName>;
}

fn invalid_name(name: &str) -> CodecError {
	CodecError::ClassResolution {
		name: name.to_string(),
		reason: "not a valid class name".to_string(),
	}
}

/// Accepts every syntactically valid class name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyClass;

impl ClassResolver for AnyClass {
	fn resolve(&self, name: &str) -> Result<ClassName> {
		ClassName::parse(name).ok_or_else(|| invalid_name(name))
	}
}

/// Resolves only the class names registered up front.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
	known: HashSet<ClassName>,
}

impl ClassRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `name`, returning `false` if it is not a valid class name.
	pub fn register(&mut self, name: &str) -> bool {
		match ClassName::parse(name) {
			Some(class) => {
				self.known.insert(class);
				true
			}
			None => false,
		}
	}

	pub fn contains(&self, name: &str) -> bool {
		self.known.iter().any(|class| class.as_str() == name)
	}

	pub fn len(&self) -> usize {
		self.known.len()
	}

	pub fn is_empty(&self) -> bool {
		self.known.is_empty()
	}
}

impl<'a> FromIterator<&'a str> for ClassRegistry {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		let mut registry = Self::new();
		for name in iter {
			registry.register(name);
		}
		registry
	}
}

impl ClassResolver for ClassRegistry {
	fn resolve(&self, name: &str) -> Result<ClassName> {
		let class = ClassName::parse(name).ok_or_else(|| invalid_name(name))?;
		if self.known.contains(&class) {
			Ok(class)
		} else {
			Err(CodecError::ClassResolution {
				name: name.to_string(),
				reason: "class is not registered".to_string(),
			})
		}
	}
}
