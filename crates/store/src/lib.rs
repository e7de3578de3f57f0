//! Typed configuration handoff over a flat string property map.
//!
//! A parent process fills a [`TypedProperties`] with typed values, ships the
//! underlying [`PropertyMap`] across the process boundary as plain strings,
//! and the child reads the same typed values back:
//!
//! - scalars go through the `<tag>|<payload>` codec from [`propwire_codec`];
//! - open-ended sequences become numbered keys `prefix0`, `prefix1`, ... (see
//!   [`indexed`]), read back by a contiguous scan from index 0;
//! - [`Classpath`] is such a sequence of path elements.
//!
//! A store is populated, transferred and read once by a single thread.
//! Copying it into the process environment is a separate, explicit bootstrap
//! step ([`bootstrap_process_environment`]).

pub mod classpath;
pub mod error;
pub mod indexed;
pub mod sink;
pub mod typed;

pub use classpath::Classpath;
pub use error::{Result, StoreError};
pub use propwire_codec::{AnyClass, ClassName, ClassRegistry, ClassResolver, TypeTag, Value};
pub use propwire_properties::PropertyMap;
pub use sink::{ProcessEnvironment, PropertySink, bootstrap_process_environment};
pub use typed::TypedProperties;
