//! Type-tagged string codecs.
//!
//! Every typed value crosses the process boundary as a single string of the
//! form `<tag>|<payload>`. The tag names one member of the closed [`TypeTag`]
//! set and the payload is that type's string rendering:
//!
//! | tag                    | [`Value`] variant | payload                          |
//! |------------------------|-------------------|----------------------------------|
//! | `java.lang.String`     | `Text`            | the text itself                  |
//! | `java.lang.Class`      | `Class`           | fully-qualified class name       |
//! | `java.io.File`         | `Path`            | the path                         |
//! | `[Ljava.io.File;`      | `PathList`        | list-encoded paths               |
//! | `java.util.ArrayList`  | `StringList`      | list-encoded strings             |
//! | `java.lang.Boolean`    | `Flag`            | `true` / `false`                 |
//! | `java.lang.Integer`    | `Number`          | decimal `i32`                    |
//! | `java.util.Properties` | `Properties`      | ISO-8859-1 property-file text    |
//!
//! The tag strings are the interop contract with existing producers and must
//! not change.
//!
//! ```
//! use propwire_codec::{AnyClass, Value, decode, encode};
//!
//! let wire = encode(&Value::Number(42));
//! assert_eq!(wire, "java.lang.Integer|42");
//! assert_eq!(decode(&wire, &AnyClass).unwrap(), Some(Value::Number(42)));
//! ```

pub mod class;
pub mod error;
pub mod list;
pub mod scalar;
pub mod tag;
pub mod value;

pub use class::{AnyClass, ClassName, ClassRegistry, ClassResolver};
pub use error::{CodecError, Result};
pub use list::{decode_list, encode_list};
pub use scalar::{TAG_SEPARATOR, decode, decode_payload, encode, parse_flag};
pub use tag::TypeTag;
pub use value::Value;
