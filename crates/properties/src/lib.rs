//! Raw string properties and their property-file text form.
//!
//! [`PropertyMap`] is the flat `String -> String` store every other propwire
//! crate builds on. The [`format`] module reads and writes it as standard
//! property-file text (`key=value` lines with backslash escapes), and
//! [`latin1`] provides the ISO-8859-1 byte mapping the text is exchanged in.
//!
//! ```
//! use propwire_properties::{PropertyMap, format};
//!
//! let mut map = PropertyMap::new();
//! map.set("greeting", "hello world");
//! map.set("path", "C:\\tmp");
//!
//! let text = format::store(&map, None);
//! assert_eq!(format::load(&text).unwrap(), map);
//! ```

pub mod error;
/// Property-file text reader and writer.
pub mod format;
pub mod latin1;
/// Ordered string map.
pub mod map;

pub use error::{PropertiesError, Result};
pub use format::{load, load_latin1, store};
pub use map::PropertyMap;
