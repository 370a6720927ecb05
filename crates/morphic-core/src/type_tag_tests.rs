use super::TypeTag;

#[test]
fn equality_is_exact() {
    assert_eq!(TypeTag::of::<String>(), TypeTag::of::<String>());
    assert_ne!(TypeTag::of::<String>(), TypeTag::of::<&'static str>());
    assert_ne!(TypeTag::of::<u32>(), TypeTag::of::<u64>());
    assert_ne!(TypeTag::of::<Option<u32>>(), TypeTag::of::<u32>());
}

#[test]
fn is_checks_type() {
    assert!(TypeTag::of::<i64>().is::<i64>());
    assert!(!TypeTag::of::<i64>().is::<i32>());
}

#[test]
fn short_name_strips_paths() {
    assert_eq!(TypeTag::of::<String>().short_name(), "String");
    assert_eq!(TypeTag::of::<Option<String>>().short_name(), "Option<String>");
    assert_eq!(
        TypeTag::of::<std::collections::HashMap<String, Vec<u8>>>().short_name(),
        "HashMap<String, Vec<u8>>"
    );
    assert_eq!(TypeTag::of::<&'static str>().short_name(), "&str");
    assert_eq!(TypeTag::of::<(u8, bool)>().short_name(), "(u8, bool)");
}

#[test]
fn display_uses_short_name() {
    assert_eq!(TypeTag::of::<Vec<String>>().to_string(), "Vec<String>");
    assert_eq!(
        format!("{:?}", TypeTag::of::<String>()),
        "TypeTag(alloc::string::String)"
    );
}
