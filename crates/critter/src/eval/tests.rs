use super::*;
use crate::{
    criteria::CriteriaBuilder,
    entity::Root,
    spec::{distinct, equal_to, like_ic, starts_with_escaped, value_in},
};

struct Item;

impl Entity for Item {
    const ENTITY_NAME: &'static str = "item";
}

type TestRow = BTreeMap<String, Value>;

fn row(name: impl Into<Value>, qty: impl Into<Value>) -> TestRow {
    BTreeMap::from([
        ("name".to_string(), name.into()),
        ("qty".to_string(), qty.into()),
    ])
}

fn name(root: &Root<Item>) -> Expression {
    root.get("name")
}

fn qty(root: &Root<Item>) -> Expression {
    root.get("qty")
}

#[test]
fn null_comparison_is_unknown() {
    let cb = CriteriaBuilder::new();
    let pred = cb.equal(Expression::path("item", "name"), "ice");

    assert_eq!(evaluate(&pred, &row(Value::Null, 1)), Ok(None));
    assert_eq!(evaluate(&!pred, &row(Value::Null, 1)), Ok(None));
}

#[test]
fn three_valued_junctions() {
    let cb = CriteriaBuilder::new();
    let unknown = cb.is_null(Expression::literal(1)) | cb.equal(cb.literal(Value::Null), 1);
    let r = row("a", 1);

    assert_eq!(evaluate(&unknown, &r), Ok(None));
    assert_eq!(
        evaluate(&(unknown.clone() & Predicate::False), &r),
        Ok(Some(false))
    );
    assert_eq!(
        evaluate(&(unknown.clone() | Predicate::True), &r),
        Ok(Some(true))
    );
    assert_eq!(evaluate(&(unknown & Predicate::True), &r), Ok(None));
}

#[test]
fn in_with_null_candidate_is_unknown_on_miss() {
    let pred = Predicate::In {
        expr: Expression::path("item", "qty"),
        values: vec![Value::Int(1), Value::Null],
    };

    assert_eq!(evaluate(&pred, &row("a", 1)), Ok(Some(true)));
    assert_eq!(evaluate(&pred, &row("a", 2)), Ok(None));
}

#[test]
fn signed_and_unsigned_compare_numerically() {
    let pred = CriteriaBuilder::new().equal(Expression::path("item", "qty"), 5u64);

    assert_eq!(evaluate(&pred, &row("a", 5)), Ok(Some(true)));
    assert_eq!(evaluate(&pred, &row("a", -5)), Ok(Some(false)));
}

#[test]
fn incompatible_types_are_engine_errors() {
    let spec = equal_to(qty, "five").expect("non-null value");

    assert_eq!(
        matches(&spec, &row("a", 5)),
        Err(EvalError::IncompatibleTypes {
            left: "int",
            right: "text",
        })
    );
}

#[test]
fn unknown_field_is_reported_at_evaluation() {
    let spec = equal_to(|root: &Root<Item>| root.get("colour"), "red").expect("non-null value");

    assert_eq!(
        matches(&spec, &row("a", 1)),
        Err(EvalError::UnknownField {
            entity: "item",
            field: "colour".to_string(),
        })
    );
}

#[test]
fn like_on_non_text_field_fails() {
    let spec = like_ic(qty, "1").expect("text");

    assert_eq!(
        matches(&spec, &row("a", 1)),
        Err(EvalError::NotText {
            op: "UPPER",
            found: "int",
        })
    );
}

#[test]
fn like_ic_ignores_case() {
    let spec = like_ic(name, "CiCl").expect("text");

    assert_eq!(matches(&spec, &row("Icicle", 1)), Ok(true));
    assert_eq!(matches(&spec, &row("igloo", 1)), Ok(false));
}

#[test]
fn escaped_prefix_matches_literal_percent() {
    let spec = starts_with_escaped(name, "50%").expect("text");

    assert_eq!(matches(&spec, &row("50% off", 1)), Ok(true));
    assert_eq!(matches(&spec, &row("500 off", 1)), Ok(false));
}

#[test]
fn empty_value_in_selects_nothing() {
    let rows = vec![row("a", 1), row("b", 2)];
    let spec = value_in(qty, Vec::<i64>::new());

    assert_eq!(find_all(&spec, &rows), Ok(vec![]));
}

#[test]
fn distinct_drops_repeated_rows() {
    let rows = vec![row("a", 1), row("b", 2), row("a", 1), row("c", 1)];
    let spec = value_in(qty, [1]);

    let all = find_all(&spec, &rows).expect("evaluates");
    let unique = find_all(&distinct(spec), &rows).expect("evaluates");

    assert_eq!(all.len(), 3);
    assert_eq!(unique, vec![&rows[0], &rows[3]]);
}

#[test]
fn unrestricted_query_selects_everything() {
    let rows = vec![row("a", 1), row("b", 2)];
    let query = CriteriaQuery::<Item>::new();

    assert_eq!(select(&query, &rows).expect("evaluates").len(), 2);
}

fn hash_row(name: &str, qty: i64) -> HashMap<String, Value> {
    HashMap::from([
        ("name".to_string(), Value::from(name)),
        ("qty".to_string(), Value::from(qty)),
    ])
}

#[test]
fn hash_map_rows_are_selectable() {
    let rows = vec![hash_row("a", 1), hash_row("b", 1), hash_row("a", 1)];
    let spec = equal_to(qty, 1).expect("non-null value");

    let all = find_all(&spec, &rows).expect("evaluates");
    let unique = find_all(&distinct(spec), &rows).expect("evaluates");

    assert_eq!(all.len(), 3);
    assert_eq!(unique, vec![&rows[0], &rows[1]]);
}

#[test]
fn distinct_key_ignores_hash_map_iteration_order() {
    let first = hash_row("a", 1);
    let mut second = HashMap::new();
    second.insert("qty".to_string(), Value::from(1));
    second.insert("name".to_string(), Value::from("a"));

    assert_eq!(first.distinct_key(), second.distinct_key());
    assert_eq!(first.distinct_key(), row("a", 1).distinct_key());
}
