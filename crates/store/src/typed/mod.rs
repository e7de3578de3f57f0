//! Typed getters and setters over a [`PropertyMap`].

use std::fmt::Display;
use std::path::{Path, PathBuf};

use propwire_codec::{ClassResolver, Value, decode, encode, parse_flag};
use propwire_properties::PropertyMap;
use tracing::{debug, trace};

use crate::classpath::Classpath;
use crate::error::{Result, StoreError};
use crate::indexed;
use crate::sink::PropertySink;


/// Owns a raw [`PropertyMap`] and reads and writes typed values through it.
///
/// Setters given `None` leave the map untouched, so an unset key and one
/// that was never written look the same. Getters return `None` for unset
/// keys, except [`Self::bool_property`], which reads an unset key as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedProperties {
	properties: PropertyMap,
}

impl TypedProperties {
	pub fn new(properties: PropertyMap) -> Self {
		Self { properties }
	}

	/// Wraps an optional map, failing with [`StoreError::MissingBackingStore`]
	/// when there is none.
	pub fn from_optional(properties: Option<PropertyMap>) -> Result<Self> {
		properties.map(Self::new).ok_or(StoreError::MissingBackingStore)
	}

	pub fn properties(&self) -> &PropertyMap {
		&self.properties
	}

	pub fn properties_mut(&mut self) -> &mut PropertyMap {
		&mut self.properties
	}

	pub fn into_properties(self) -> PropertyMap {
		self.properties
	}

	/// The raw string stored under `key`.
	pub fn property(&self, key: &str) -> Option<&str> {
		self.properties.get(key)
	}

	/// Reads `key` as a boolean. Unset and unrecognized values are `false`.
	pub fn bool_property(&self, key: &str) -> bool {
		self.bool_value(key).unwrap_or(false)
	}

	/// Reads `key` as a boolean, `None` when unset.
	pub fn bool_value(&self, key: &str) -> Option<bool> {
		self.property(key).map(parse_flag)
	}

	/// Reads the raw value of `key` as a path.
	pub fn path_property(&self, key: &str) -> Option<PathBuf> {
		self.property(key).map(PathBuf::from)
	}

	/// Decodes the `<tag>|<payload>` value stored under `key`.
	///
	/// Unset keys and blank tags both give `Ok(None)`.
	pub fn type_decoded(&self, key: &str, resolver: &dyn ClassResolver) -> Result<Option<Value>> {
		let Some(encoded) = self.property(key) else {
			return Ok(None);
		};
		trace!(key, "type-decoding property");
		Ok(decode(encoded, resolver)?)
	}

	/// Reads the indexed sequence under `prefix`.
	pub fn string_list(&self, prefix: &str) -> Vec<String> {
		indexed::string_list(&self.properties, prefix)
	}

	pub fn classpath(&self, prefix: &str) -> Classpath {
		Classpath::new(self.string_list(prefix))
	}

	pub fn set_property(&mut self, key: &str, value: Option<&str>) {
		if let Some(value) = value {
			trace!(key, "setting property");
			self.properties.set(key, value);
		}
	}

	/// Stores `path` as text. A non-UTF-8 path is stored lossily.
	pub fn set_path_property(&mut self, key: &str, path: Option<&Path>) {
		let value = path.map(|path| path.to_string_lossy());
		self.set_property(key, value.as_deref());
	}

	pub fn set_bool_property(&mut self, key: &str, flag: Option<bool>) {
		self.set_property(key, flag.map(|flag| if flag { "true" } else { "false" }));
	}

	/// Stores `value` in `<tag>|<payload>` form.
	pub fn set_type_encoded(&mut self, key: &str, value: Option<&Value>) {
		let encoded = value.map(encode);
		self.set_property(key, encoded.as_deref());
	}

	/// Stores each classpath element verbatim under `prefix0`, `prefix1`, ...
	pub fn set_classpath(&mut self, prefix: &str, classpath: &Classpath) {
		for (index, element) in classpath.iter().enumerate() {
			self.properties.set(indexed::indexed_key(prefix, index), element);
		}
		debug!(prefix, elements = classpath.len(), "stored classpath");
	}

	/// Stores `items` as a comma-flattened indexed sequence under `prefix`.
	/// See [`indexed::add_list`].
	pub fn add_list<T, I>(&mut self, prefix: &str, items: I) -> Result<usize>
	where
		T: Display,
		I: IntoIterator<Item = Option<T>>,
	{
		indexed::add_list(&mut self.properties, prefix, items)
	}

	/// Copies every entry, in insertion order, into `sink`.
	pub fn export_to(&self, sink: &mut dyn PropertySink) {
		for (key, value) in self.properties.iter() {
			sink.set_property(key, value);
		}
		debug!(entries = self.properties.len(), "exported properties");
	}
}

impl From<PropertyMap> for TypedProperties {
	fn from(properties: PropertyMap) -> Self {
		Self::new(properties)
	}
}
