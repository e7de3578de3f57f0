use indexmap::IndexMap;

/// Flat string-keyed property store.
///
/// Keys are unique. Iteration follows insertion order, which is the order
/// entries are exported in; overwriting a key keeps its original position.
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
	entries: IndexMap<String, String>,
}

impl PropertyMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Stores `value` under `key`, returning the previous value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.entries.insert(key.into(), value.into())
	}

	/// Removes `key`, preserving the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.entries.shift_remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Iterates keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for PropertyMap {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.set(key, value);
		}
	}
}

impl IntoIterator for PropertyMap {
	type Item = (String, String);
	type IntoIter = indexmap::map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
