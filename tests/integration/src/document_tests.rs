//! End-to-end decode, encode and re-decode of documents mixing inline and
//! included fields.

use include_core::{DetectFormat, DirResolver, Include, ReaderResolver, Wrapper, set_root_path};
use include_test_utils::Fixtures;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Catalog {
    #[serde(flatten)]
    person: Person,
    inline_string: Include<String>,
    inline_int: Include<i64>,
    inline_struct: Include<Person>,
    inline_array: Include<Vec<Person>>,
    included_string: Include<String>,
    included_int: Include<i64>,
    included_struct: Include<Person>,
    included_array: Include<Vec<Person>>,
}

const CATALOG: &str = r#"{
    "name": "Catalog",
    "age": 3,
    "inline_string": "Sphinx",
    "inline_int": 123,
    "inline_struct": {"name": "Sphinx", "age": 1},
    "inline_array": [{"name": "Sphinx", "age": 1}],
    "included_string": {"include": "string.json"},
    "included_int": {"include": "int.json"},
    "included_struct": {"include": "struct.json"},
    "included_array": {"include": "array.json"}
}"#;

fn assert_catalog(catalog: &Catalog) {
    let sphinx = Person {
        name: "Sphinx".into(),
        age: 1,
    };
    assert_eq!(catalog.person.name, "Catalog");
    assert_eq!(catalog.inline_string.value(), "Sphinx");
    assert_eq!(*catalog.inline_int.value(), 123);
    assert_eq!(catalog.inline_struct.value(), &sphinx);
    assert_eq!(catalog.inline_array.value(), &vec![sphinx.clone()]);
    assert_eq!(catalog.included_string.value(), "Sphinx");
    assert_eq!(*catalog.included_int.value(), 123);
    assert_eq!(catalog.included_struct.value(), &sphinx);
    assert_eq!(catalog.included_array.value(), &vec![sphinx]);
}

// Sole user of the process-wide root in this binary.
#[test]
fn test_catalog_round_trip_collapses_includes() {
    let fixtures = Fixtures::standard();
    set_root_path(fixtures.root());

    let catalog: Catalog = serde_json::from_str(CATALOG).unwrap();
    assert_catalog(&catalog);

    let encoded = serde_json::to_string(&catalog).unwrap();
    assert!(!encoded.contains("\"include\""), "include survived: {encoded}");

    let again: Catalog = serde_json::from_str(&encoded).unwrap();
    assert_catalog(&again);
    assert_eq!(serde_json::to_string(&again).unwrap(), encoded);
}

#[derive(Debug, Default)]
struct Settings {
    greeting: Wrapper<DirResolver, String>,
    owner: Wrapper<DetectFormat<ReaderResolver>, Person>,
}

#[test]
fn test_contexts_supplied_before_decode() {
    let fixtures = Fixtures::standard();
    let mut settings = Settings {
        greeting: Wrapper::with_context(DirResolver::new(fixtures.root()), String::new()),
        owner: Wrapper::with_context(
            DetectFormat::new(ReaderResolver::new(fixtures.root())),
            Person::default(),
        ),
    };

    let doc: serde_json::Value = serde_json::from_str(
        r#"{"greeting": {"include": "string.json"}, "owner": {"include": "struct.yaml"}}"#,
    )
    .unwrap();
    settings.greeting.decode_value(doc["greeting"].clone()).unwrap();
    settings.owner.decode_value(doc["owner"].clone()).unwrap();

    assert_eq!(settings.greeting.value(), "Sphinx");
    assert_eq!(settings.owner.value().age, 1);
}

#[test]
fn test_struct_field_pointing_at_string_document_fails() {
    let fixtures = Fixtures::standard();
    let mut owner = Wrapper::with_context(DirResolver::new(fixtures.root()), Person::default());

    let err = owner.decode(br#"{"include":"string.json"}"#).unwrap_err();

    assert!(err.is_content_invalid(), "unexpected error: {err}");
    assert_eq!(owner.value(), &Person::default());
}
