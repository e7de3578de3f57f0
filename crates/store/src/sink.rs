//! Destinations for bulk export of a property store.

use std::collections::{BTreeMap, HashMap};

use propwire_properties::PropertyMap;
use tracing::{debug, warn};

use crate::typed::TypedProperties;

/// Receives entries during [`TypedProperties::export_to`].
pub trait PropertySink {
	fn set_property(&mut self, key: &str, value: &str);
}

impl PropertySink for PropertyMap {
	fn set_property(&mut self, key: &str, value: &str) {
		self.set(key, value);
	}
}

impl PropertySink for HashMap<String, String> {
	fn set_property(&mut self, key: &str, value: &str) {
		self.insert(key.to_string(), value.to_string());
	}
}

impl PropertySink for BTreeMap<String, String> {
	fn set_property(&mut self, key: &str, value: &str) {
		self.insert(key.to_string(), value.to_string());
	}
}

/// The process environment as a sink.
///
/// Only obtainable through [`bootstrap_process_environment`], so the one
/// place that mutates process-global state stays explicit.
#[derive(Debug)]
pub struct ProcessEnvironment {
	_private: (),
}

impl PropertySink for ProcessEnvironment {
	fn set_property(&mut self, key: &str, value: &str) {
		if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
			warn!(key, "skipping entry that cannot be an environment variable");
			return;
		}
		// SAFETY: a ProcessEnvironment only exists inside
		// bootstrap_process_environment, whose caller guarantees no other
		// thread touches the environment.
		unsafe { std::env::set_var(key, value) };
	}
}

/// Copies every entry of `properties` into the process environment.
///
/// Entries whose key or value cannot be represented as an environment
/// variable (empty key, `=` in the key, NUL anywhere) are skipped with a
/// warning.
///
/// # Safety
///
/// Call once during process bootstrap, before any other thread is spawned
/// that may read or write the environment. See [`std::env::set_var`].
pub unsafe fn bootstrap_process_environment(properties: &TypedProperties) {
	debug!(entries = properties.properties().len(), "exporting properties to process environment");
	let mut env = ProcessEnvironment { _private: () };
	properties.export_to(&mut env);
}
