use std::env::{self, JoinPathsError};
use std::ffi::OsString;
use std::path::PathBuf;

/// An ordered list of classpath elements (directories or archives).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classpath {
	elements: Vec<String>,
}

impl Classpath {
	/// Wraps `elements` as-is, duplicates included.
	pub fn new(elements: Vec<String>) -> Self {
		Self { elements }
	}

	pub fn elements(&self) -> &[String] {
		&self.elements
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.elements.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.elements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Appends `element` unless it is already present. Returns whether it was added.
	pub fn push(&mut self, element: impl Into<String>) -> bool {
		let element = element.into();
		if self.elements.contains(&element) {
			return false;
		}
		self.elements.push(element);
		true
	}

	pub fn to_paths(&self) -> Vec<PathBuf> {
		self.elements.iter().map(PathBuf::from).collect()
	}

	/// Joins the elements with the platform path-list separator.
	pub fn join(&self) -> Result<OsString, JoinPathsError> {
		env::join_paths(&self.elements)
	}
}

impl<S: Into<String>> FromIterator<S> for Classpath {
	/// Collects with [`Classpath::push`] semantics, dropping repeats.
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut classpath = Self::default();
		for element in iter {
			classpath.push(element);
		}
		classpath
	}
}

impl From<Vec<String>> for Classpath {
	fn from(elements: Vec<String>) -> Self {
		Self::new(elements)
	}
}
