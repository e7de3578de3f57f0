//! Parent populates a store, ships it as property-file bytes, child decodes it.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use propwire_properties::{format, latin1};
use propwire_store::{
	AnyClass, ClassName, ClassRegistry, Classpath, PropertyMap, StoreError, TypedProperties, Value, bootstrap_process_environment,
};

fn transfer(parent: TypedProperties) -> TypedProperties {
	let bytes = latin1::encode(&format::store(parent.properties(), Some("handoff")));
	TypedProperties::new(format::load_latin1(&bytes).expect("child can parse what parent wrote"))
}

#[test]
fn typed_values_survive_the_process_boundary() {
	let nested: PropertyMap = [("user.language", "fr"), ("motto", "caf\u{e9} \u{2615}: ok")].into_iter().collect();
	let provider = ClassName::parse("org.example.JUnitProvider").unwrap();

	let mut parent = TypedProperties::default();
	parent.set_type_encoded("providerClass", Some(&Value::Class(provider.clone())));
	parent.set_type_encoded("reportsDirectory", Some(&Value::Path(PathBuf::from("target/reports"))));
	parent.set_type_encoded("threadCount", Some(&Value::Number(4)));
	parent.set_type_encoded("failIfNoTests", Some(&Value::Flag(true)));
	parent.set_type_encoded("includes", Some(&Value::StringList(vec!["**/*Test".into(), "**/Test*".into()])));
	parent.set_type_encoded("systemProperties", Some(&Value::Properties(nested.clone())));
	parent.set_type_encoded("title", Some(&Value::Text("a|b = c".into())));
	parent.set_bool_property("useSystemClassLoader", Some(true));
	parent.set_property("skipped", None);
	parent.set_classpath("classPathUrl.", &["target/classes", "lib/a.jar"].into_iter().collect());
	parent.add_list("tc.", [Some("FooTest,BarTest"), Some("BazTest")]).unwrap();

	let child = transfer(parent);
	let registry: ClassRegistry = ["org.example.JUnitProvider"].into_iter().collect();

	assert_eq!(child.type_decoded("providerClass", &registry), Ok(Some(Value::Class(provider))));
	assert_eq!(
		child.type_decoded("reportsDirectory", &AnyClass),
		Ok(Some(Value::Path(PathBuf::from("target/reports"))))
	);
	assert_eq!(child.type_decoded("threadCount", &AnyClass), Ok(Some(Value::Number(4))));
	assert_eq!(child.type_decoded("failIfNoTests", &AnyClass), Ok(Some(Value::Flag(true))));
	assert_eq!(
		child.type_decoded("includes", &AnyClass),
		Ok(Some(Value::StringList(vec!["**/*Test".into(), "**/Test*".into()])))
	);
	assert_eq!(child.type_decoded("systemProperties", &AnyClass), Ok(Some(Value::Properties(nested))));
	assert_eq!(child.type_decoded("title", &AnyClass), Ok(Some(Value::Text("a|b = c".into()))));
	assert!(child.bool_property("useSystemClassLoader"));
	assert_eq!(child.property("skipped"), None);
	assert_eq!(child.type_decoded("skipped", &AnyClass), Ok(None));
	assert_eq!(
		child.classpath("classPathUrl."),
		Classpath::new(vec!["target/classes".into(), "lib/a.jar".into()])
	);
	assert_eq!(child.string_list("tc."), ["FooTest", "BarTest", "BazTest"]);
}

#[test]
fn missing_backing_store() {
	assert_eq!(TypedProperties::from_optional(None), Err(StoreError::MissingBackingStore));
}

#[test]
fn bootstrap_exports_into_process_environment() {
	let key = format!("PROPWIRE_BOOTSTRAP_TEST_{}", std::process::id());
	let mut props = TypedProperties::default();
	props.set_property(&key, Some("exported"));
	props.set_property("bad=key", Some("skipped"));

	// SAFETY: no other test in this binary touches the environment.
	unsafe { bootstrap_process_environment(&props) };

	assert_eq!(std::env::var(&key).as_deref(), Ok("exported"));
}
