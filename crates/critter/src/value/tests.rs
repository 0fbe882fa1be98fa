use super::*;

#[test]
fn option_none_converts_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("ice")), Value::Text("ice".to_string()));
}

#[test]
fn integer_conversions_pick_signedness() {
    assert_eq!(Value::from(-3i8), Value::Int(-3));
    assert_eq!(Value::from(7u16), Value::Uint(7));
}

#[test]
fn display_quotes_and_escapes_text() {
    assert_eq!(Value::from("it's").to_string(), "'it''s'");
    assert_eq!(Value::from(vec![1, 2]).to_string(), "(1, 2)");
    assert_eq!(Value::Null.to_string(), "NULL");
}

#[test]
fn kind_labels_are_stable() {
    assert_eq!(Value::Bool(true).kind(), "bool");
    assert_eq!(Value::List(vec![]).kind(), "list");
}
