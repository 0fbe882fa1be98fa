use super::*;
use crate::{
    entity::Root,
    spec::{distinct, equal_to, ends_with_ic, like_escaped, value_in},
};

struct Order;

impl Entity for Order {
    const ENTITY_NAME: &'static str = "order";
}

fn status(root: &Root<Order>) -> Expression {
    root.get("status")
}

fn numbered() -> RenderConfig {
    RenderConfig {
        placeholder: Placeholder::Numbered,
        quote_identifiers: true,
    }
}

#[test]
fn renders_select_with_bound_parameters() {
    let spec = equal_to(status, "open")
        .expect("non-null value")
        .and(value_in(|root: &Root<Order>| root.get("region"), ["eu", "us"]));
    let query = CriteriaQuery::from_spec(&spec);

    let rendered = render_query(&query, "orders", &numbered()).expect("renders");

    assert_eq!(
        rendered.sql,
        r#"SELECT * FROM "orders" WHERE ("status" = $1 AND "region" IN ($2, $3))"#
    );
    assert_eq!(
        rendered.params,
        vec![Value::from("open"), Value::from("eu"), Value::from("us")]
    );
}

#[test]
fn distinct_query_renders_select_distinct() {
    let query = CriteriaQuery::from_spec(&distinct(ends_with_ic(status, "ed").expect("text")));

    let rendered = render_query(&query, "orders", &RenderConfig::default()).expect("renders");

    assert_eq!(
        rendered.sql,
        r#"SELECT DISTINCT * FROM "orders" WHERE UPPER("status") LIKE ?"#
    );
    assert_eq!(rendered.params, vec![Value::from("%ED")]);
}

#[test]
fn empty_membership_never_renders_empty_in_list() {
    let query = CriteriaQuery::from_spec(&value_in(status, Vec::<&str>::new()));

    let rendered = render_query(&query, "orders", &RenderConfig::default()).expect("renders");

    assert!(!rendered.sql.contains("IN ()"));
    assert!(rendered.sql.ends_with("WHERE 1 = 0"));
    assert!(rendered.params.is_empty());
}

#[test]
fn escaped_like_renders_escape_clause() {
    let query = CriteriaQuery::from_spec(&like_escaped(status, "10%").expect("text"));

    let rendered = render_where(query.restriction().expect("restricted"), &numbered())
        .expect("renders");

    assert_eq!(rendered.sql, r#""status" LIKE $1 ESCAPE '\'"#);
    assert_eq!(rendered.params, vec![Value::from("%10\\%%")]);
}

#[test]
fn unquoted_identifiers_and_negation() {
    let config = RenderConfig {
        quote_identifiers: false,
        ..RenderConfig::default()
    };
    let spec = !equal_to(status, "open").expect("non-null value");
    let query = CriteriaQuery::from_spec(&spec);

    let rendered = render_query(&query, "orders", &config).expect("renders");

    assert_eq!(rendered.sql, "SELECT * FROM orders WHERE NOT (status = ?)");
}

#[test]
fn list_literals_cannot_be_bound() {
    let pred = Predicate::Equal {
        left: Expression::path("order", "tags"),
        right: Expression::literal(vec!["a"]),
    };

    let err = render_where(&pred, &RenderConfig::default()).expect_err("list literal");

    assert!(matches!(err, RenderError::UnsupportedValue { kind: "list" }));
}

#[test]
fn config_loads_from_json_with_defaults() {
    let config = RenderConfig::from_json(r#"{ "placeholder": "numbered" }"#).expect("valid json");

    assert_eq!(config, numbered());
}

#[test]
fn config_rejects_unknown_keys() {
    let err = RenderConfig::from_json(r#"{ "dialect": "pg" }"#).expect_err("unknown key");

    assert!(matches!(err, RenderError::Config(_)));
}
