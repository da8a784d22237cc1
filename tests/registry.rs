use microhelp::{
    docs::DocRegistry,
    help_texts::{TYPE_DOCS, VALUE_DOCS, WELCOME_SECTIONS},
    host::ObjectModel,
    runtime::Runtime,
    symbols::SymbolTable,
    value::{TypeObject, Value},
};

#[test]
fn every_documented_path_resolves() {
    let runtime = Runtime::new();
    for (path, _) in VALUE_DOCS {
        assert!(
            runtime.lookup_path(path).is_some(),
            "`{path}` should name an object"
        );
    }
    for (name, _) in TYPE_DOCS {
        assert!(runtime.type_named(name).is_some(), "`{name}` should name a type");
    }
    assert_eq!(runtime.docs().values().len(), VALUE_DOCS.len());
    assert_eq!(runtime.docs().types().len(), TYPE_DOCS.len());
}

#[test]
fn every_text_ends_with_newline() {
    for (key, text) in VALUE_DOCS.iter().chain(TYPE_DOCS) {
        assert!(text.ends_with('\n'), "text for `{key}` must end with a newline");
    }
    for section in WELCOME_SECTIONS {
        assert!(section.ends_with('\n'));
    }
}

#[test]
fn registered_keys_are_distinct() {
    let runtime = Runtime::new();
    let values = runtime.docs().values();
    for (idx, entry) in values.iter().enumerate() {
        for other in &values[idx + 1..] {
            assert!(!entry.value.is(&other.value));
        }
    }
}

#[test]
fn find_by_value_uses_identity() {
    let ty = TypeObject::plain("Thing", SymbolTable::new());
    let first = Value::instance(ty.clone());
    let twin = Value::instance(ty);
    let mut registry = DocRegistry::new();
    assert!(registry.register_value(first.clone(), "first\n"));

    assert_eq!(registry.find_by_value(&first), Some("first\n"));
    assert_eq!(registry.find_by_value(&first.clone()), Some("first\n"));
    assert_eq!(registry.find_by_value(&twin), None);
}

#[test]
fn duplicate_registration_keeps_first_entry() {
    let ty = TypeObject::plain("Thing", SymbolTable::new());
    let value = Value::instance(ty.clone());
    let mut registry = DocRegistry::new();
    assert!(registry.register_value(value.clone(), "first\n"));
    assert!(!registry.register_value(value.clone(), "second\n"));
    assert!(registry.register_type(ty.clone(), "type\n"));
    assert!(!registry.register_type(ty.clone(), "again\n"));

    assert_eq!(registry.find_by_value(&value), Some("first\n"));
    assert_eq!(registry.find_by_type(&ty), Some("type\n"));
    assert_eq!(registry.values().len(), 1);
    assert_eq!(registry.types().len(), 1);
}

#[test]
fn value_or_type_prefers_value_table() {
    let runtime = Runtime::new();
    let ty = TypeObject::plain("Thing", SymbolTable::new());
    let special = Value::instance(ty.clone());
    let ordinary = Value::instance(ty.clone());
    let mut registry = DocRegistry::new();
    registry.register_type(ty.clone(), "any thing\n");
    registry.register_value(special.clone(), "the special thing\n");

    assert_eq!(
        registry.find_by_value_or_type(&special, &runtime.type_of(&special)),
        Some("the special thing\n")
    );
    assert_eq!(
        registry.find_by_value_or_type(&ordinary, &runtime.type_of(&ordinary)),
        Some("any thing\n")
    );
}

#[test]
fn type_entry_matches_type_object_itself() {
    let runtime = Runtime::new();
    let ty = TypeObject::plain("Thing", SymbolTable::new());
    let mut registry = DocRegistry::new();
    registry.register_type(ty.clone(), "any thing\n");

    let as_value = Value::ty(ty.clone());
    let meta = runtime.type_of(&as_value);
    assert_eq!(meta.name, "type");
    assert_eq!(registry.find_by_value_or_type(&as_value, &meta), Some("any thing\n"));
    assert_eq!(registry.find_by_type(&meta), None);
}

#[test]
fn type_objects_may_key_the_value_table() {
    let runtime = Runtime::new();
    let ty = TypeObject::plain("Thing", SymbolTable::new());
    let mut registry = DocRegistry::new();
    registry.register_type(ty.clone(), "instances of Thing\n");
    registry.register_value(Value::ty(ty.clone()), "the Thing class\n");

    let as_value = Value::ty(ty.clone());
    assert_eq!(
        registry.find_by_value_or_type(&as_value, &runtime.type_of(&as_value)),
        Some("the Thing class\n")
    );
}

#[test]
fn misses_are_none() {
    let runtime = Runtime::new();
    let registry = DocRegistry::new();
    let value = Value::int(5);
    assert_eq!(registry.find_by_value(&value), None);
    assert_eq!(registry.find_by_type(&runtime.type_of(&value)), None);
    assert_eq!(
        registry.find_by_value_or_type(&value, &runtime.type_of(&value)),
        None
    );
}

#[test]
fn resolve_skips_unknown_and_repeated_keys() {
    let runtime = Runtime::new();
    let registry = DocRegistry::resolve(
        &[
            ("microbit.display", "display\n"),
            ("microbit.nowhere", "missing\n"),
            ("microbit.display", "display again\n"),
        ],
        &[("MicroBitCompass", "compass type\n"), ("Ghost", "ghost\n")],
        |path| runtime.lookup_path(path),
        |name| runtime.type_named(name),
    );
    assert_eq!(registry.values().len(), 1);
    assert_eq!(registry.values()[0].text, "display\n");
    assert_eq!(registry.types().len(), 1);
}

#[test]
fn display_pixel_docs_keep_the_board_wording() {
    let runtime = Runtime::new();
    let mut out = Vec::new();
    runtime
        .eval_line("help(microbit.display.get_pixel)", &mut out)
        .expect("evaluates");
    runtime
        .eval_line("help(microbit.display.set_pixel)", &mut out)
        .expect("evaluates");
    let expected = "\
Use get_brightness(x, y) to return the display's brightness at LED pixel (x,y).
Brightness can be from 0 (LED is off) to 9 (maximum LED brightness).
Use set_brightness(x, y, b) to set the display at LED pixel (x,y) to brightness 'b'.
brightness 'b', which can be set between 0 (off) to 9 (full brightness).
";
    assert_eq!(String::from_utf8(out).expect("utf-8"), expected);
}
