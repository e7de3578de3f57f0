//! Sequences stored as numbered keys.
//!
//! A sequence under `prefix` occupies `prefix0 .. prefix(n-1)`. Readers scan
//! from 0 and stop at the first missing index, so a gap truncates the
//! sequence there.

use std::fmt::Display;

use propwire_codec::list::LIST_SEPARATOR;
use propwire_properties::PropertyMap;
use tracing::debug;

use crate::error::{Result, StoreError};

/// The key holding item `index` of the sequence under `prefix`.
pub fn indexed_key(prefix: &str, index: usize) -> String {
	format!("{prefix}{index}")
}

/// Stores `items` as numbered keys under `prefix`, returning how many keys
/// were written.
///
/// Each item's string form is split on `,` and every piece gets its own key,
/// so one item may occupy several indices. Any `None` item fails the call
/// with [`StoreError::NullItem`] before a single key is written. An empty
/// input writes nothing.
pub fn add_list<T, I>(map: &mut PropertyMap, prefix: &str, items: I) -> Result<usize>
where
	T: Display,
	I: IntoIterator<Item = Option<T>>,
{
	let rendered = items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			item.map(|item| item.to_string()).ok_or_else(|| StoreError::NullItem {
				prefix: prefix.to_string(),
				index,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	let mut written = 0;
	for piece in rendered.iter().flat_map(|item| item.split(LIST_SEPARATOR)) {
		map.set(indexed_key(prefix, written), piece);
		written += 1;
	}
	if written > 0 {
		debug!(prefix, items = rendered.len(), keys = written, "stored indexed sequence");
	}
	Ok(written)
}

/// Reads the sequence under `prefix`, stopping at the first missing index.
pub fn string_list(map: &PropertyMap, prefix: &str) -> Vec<String> {
	(0..)
		.map_while(|index| map.get(&indexed_key(prefix, index)))
		.map(str::to_string)
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn keys_are_plain_decimal() {
		assert_eq!(indexed_key("cp", 0), "cp0");
		assert_eq!(indexed_key("cp", 12), "cp12");
	}

	#[test]
	fn add_then_read() {
		let mut map = PropertyMap::new();
		assert_eq!(add_list(&mut map, "item", [Some("a"), Some("b"), Some("c")]).unwrap(), 3);
		assert_eq!(string_list(&map, "item"), ["a", "b", "c"]);
	}

	#[test]
	fn commas_flatten_into_extra_keys() {
		let mut map = PropertyMap::new();
		assert_eq!(add_list(&mut map, "p", [Some("a,b"), Some("c")]).unwrap(), 3);
		assert_eq!(map.get("p0"), Some("a"));
		assert_eq!(map.get("p1"), Some("b"));
		assert_eq!(map.get("p2"), Some("c"));
	}

	#[test]
	fn items_use_display() {
		let mut map = PropertyMap::new();
		add_list(&mut map, "n", [Some(1), Some(22)]).unwrap();
		assert_eq!(string_list(&map, "n"), ["1", "22"]);
	}

	#[test]
	fn empty_input_writes_nothing() {
		let mut map = PropertyMap::new();
		assert_eq!(add_list(&mut map, "p", Vec::<Option<String>>::new()).unwrap(), 0);
		assert!(map.is_empty());
	}

	#[test]
	fn null_item_is_rejected_before_writing() {
		let mut map = PropertyMap::new();
		let err = add_list(&mut map, "p", [Some("a"), None, Some("c")]).unwrap_err();
		assert_eq!(
			err,
			StoreError::NullItem {
				prefix: "p".into(),
				index: 1
			}
		);
		assert_eq!(err.to_string(), "p1 has null value");
		assert!(map.is_empty());
	}

	#[test]
	fn missing_first_index_is_empty() {
		let map: PropertyMap = [("p1", "x")].into_iter().collect();
		assert!(string_list(&map, "p").is_empty());
	}

	#[test]
	fn gap_truncates() {
		let mut map = PropertyMap::new();
		add_list(&mut map, "p", [Some("zero"), Some("one"), Some("two")]).unwrap();
		map.remove("p1");
		assert_eq!(string_list(&map, "p"), ["zero"]);
	}

	#[test]
	fn prefixes_are_independent() {
		let mut map = PropertyMap::new();
		add_list(&mut map, "a", [Some("x")]).unwrap();
		add_list(&mut map, "b", [Some("y"), Some("z")]).unwrap();
		assert_eq!(string_list(&map, "a"), ["x"]);
		assert_eq!(string_list(&map, "b"), ["y", "z"]);
	}

	proptest! {
		/// Comma-free items come back one key each, in order.
		#[test]
		fn prop_comma_free_roundtrip(items in prop::collection::vec("[^,]*", 0..10)) {
			let mut map = PropertyMap::new();
			let written = add_list(&mut map, "p", items.iter().map(Some)).unwrap();
			prop_assert_eq!(written, items.len());
			prop_assert_eq!(string_list(&map, "p"), items);
		}
	}
}
