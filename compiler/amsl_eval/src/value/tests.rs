use super::*;

#[test]
fn defaults_by_declared_type() {
    assert_eq!(Value::default_for(Some("int")), Value::Int(0));
    assert_eq!(Value::default_for(Some("str")), Value::Str(String::new()));
    assert_eq!(Value::default_for(Some("string")), Value::Str(String::new()));
    assert_eq!(Value::default_for(Some("float")), Value::Unit);
    assert_eq!(Value::default_for(None), Value::Unit);
}

#[test]
fn display_is_unquoted() {
    assert_eq!(Value::from(-12).to_string(), "-12");
    assert_eq!(Value::from("a \"b\"").to_string(), "a \"b\"");
    assert_eq!(Value::Unit.to_string(), "()");
}

#[test]
fn accessors() {
    assert_eq!(Value::Int(4).as_int(), Some(4));
    assert_eq!(Value::from("x").as_int(), None);
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert!(Value::default().is_unit());
    assert_eq!(Value::Unit.type_name(), "unit");
}
