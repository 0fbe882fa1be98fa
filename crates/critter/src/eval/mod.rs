//! Module: eval
//! Responsibility: reference evaluation of predicates over in-memory rows.
//! Does not own: predicate construction or SQL generation.
//! Boundary: SQL three-valued logic; `None` is UNKNOWN and only TRUE rows
//! are selected.

#[cfg(test)]
mod tests;

use crate::{
    criteria::{CriteriaQuery, Expression, Predicate},
    entity::Entity,
    error::EvalError,
    pattern::like_matches,
    spec::Spec,
    value::Value,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace};

///
/// FieldPresence
///
/// Result of reading a field from a row. A present field may still hold
/// `Value::Null`; a missing one is unknown to the row.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Field access used by evaluation. Decouples predicates from concrete
/// record types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;

    /// Every field, sorted by name. Distinct selection treats two rows
    /// with the same key as duplicates.
    fn distinct_key(&self) -> Vec<(String, Value)>;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        self.get(name)
            .map_or(FieldPresence::Missing, |v| FieldPresence::Present(v.clone()))
    }

    fn distinct_key(&self) -> Vec<(String, Value)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<S: std::hash::BuildHasher> Row for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> FieldPresence {
        self.get(name)
            .map_or(FieldPresence::Missing, |v| FieldPresence::Present(v.clone()))
    }

    fn distinct_key(&self) -> Vec<(String, Value)> {
        let mut key: Vec<_> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        key.sort_by(|a, b| a.0.cmp(&b.0));

        key
    }
}

/// Evaluate `pred` against `row`.
///
/// Returns `Some(true)`/`Some(false)` for definite results and `None` when
/// a NULL operand makes the outcome UNKNOWN.
pub fn evaluate<R: Row + ?Sized>(pred: &Predicate, row: &R) -> Result<Option<bool>, EvalError> {
    let outcome = match pred {
        Predicate::True => Some(true),
        Predicate::False => Some(false),
        Predicate::And(preds) => {
            let mut unknown = false;
            let mut any_false = false;
            for p in preds {
                match evaluate(p, row)? {
                    Some(false) => any_false = true,
                    None => unknown = true,
                    Some(true) => {}
                }
            }
            if any_false {
                Some(false)
            } else if unknown {
                None
            } else {
                Some(true)
            }
        }
        Predicate::Or(preds) => {
            let mut unknown = false;
            let mut any_true = false;
            for p in preds {
                match evaluate(p, row)? {
                    Some(true) => any_true = true,
                    None => unknown = true,
                    Some(false) => {}
                }
            }
            if any_true {
                Some(true)
            } else if unknown {
                None
            } else {
                Some(false)
            }
        }
        Predicate::Not(inner) => evaluate(inner, row)?.map(|b| !b),
        Predicate::Equal { left, right } => {
            let left = eval_expr(left, row)?;
            let right = eval_expr(right, row)?;
            compare_eq(&left, &right)?
        }
        Predicate::In { expr, values } => {
            let value = eval_expr(expr, row)?;
            eval_in(&value, values)?
        }
        Predicate::Like {
            expr,
            pattern,
            escape,
        } => match eval_expr(expr, row)? {
            Value::Null => None,
            Value::Text(text) => Some(like_matches(&text, pattern, *escape)),
            other => {
                return Err(EvalError::NotText {
                    op: "LIKE",
                    found: other.kind(),
                });
            }
        },
        Predicate::IsNull(expr) => Some(eval_expr(expr, row)?.is_null()),
    };

    Ok(outcome)
}

/// Rows of `rows` selected by `query`, in input order. Distinct queries
/// drop repeated rows after the first occurrence.
pub fn select<'a, E, R>(query: &CriteriaQuery<E>, rows: &'a [R]) -> Result<Vec<&'a R>, EvalError>
where
    E: Entity,
    R: Row,
{
    let mut seen = HashSet::new();
    let mut selected = Vec::new();

    for row in rows {
        let matched = match query.restriction() {
            Some(pred) => evaluate(pred, row)? == Some(true),
            None => true,
        };
        trace!(entity = E::ENTITY_NAME, matched, "evaluated row");

        if !matched || (query.is_distinct() && !seen.insert(row.distinct_key())) {
            continue;
        }
        selected.push(row);
    }

    debug!(
        entity = E::ENTITY_NAME,
        scanned = rows.len(),
        selected = selected.len(),
        distinct = query.is_distinct(),
        "selected rows"
    );

    Ok(selected)
}

/// Build a query from `spec` and run it over `rows`.
pub fn find_all<'a, E, R>(spec: &Spec<E>, rows: &'a [R]) -> Result<Vec<&'a R>, EvalError>
where
    E: Entity,
    R: Row,
{
    select(&CriteriaQuery::from_spec(spec), rows)
}

/// Whether a single row satisfies `spec`.
pub fn matches<E: Entity, R: Row + ?Sized>(spec: &Spec<E>, row: &R) -> Result<bool, EvalError> {
    let query = CriteriaQuery::from_spec(spec);

    match query.restriction() {
        Some(pred) => Ok(evaluate(pred, row)? == Some(true)),
        None => Ok(true),
    }
}

// ----------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------

fn eval_expr<R: Row + ?Sized>(expr: &Expression, row: &R) -> Result<Value, EvalError> {
    match expr {
        Expression::Path { entity, field } => match row.field(field) {
            FieldPresence::Present(value) => Ok(value),
            FieldPresence::Missing => Err(EvalError::UnknownField {
                entity: *entity,
                field: field.clone(),
            }),
        },
        Expression::Literal(value) => Ok(value.clone()),
        Expression::Upper(inner) => match eval_expr(inner, row)? {
            Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
            Value::Null => Ok(Value::Null),
            other => Err(EvalError::NotText {
                op: "UPPER",
                found: other.kind(),
            }),
        },
    }
}

fn compare_eq(left: &Value, right: &Value) -> Result<Option<bool>, EvalError> {
    let eq = match (left, right) {
        (Value::Null, _) | (_, Value::Null) => return Ok(None),
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Uint(a), Value::Uint(b)) => a == b,
        (Value::Int(a), Value::Uint(b)) | (Value::Uint(b), Value::Int(a)) => {
            u64::try_from(*a).is_ok_and(|a| a == *b)
        }
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::List(a), Value::List(b)) => a == b,
        _ => {
            return Err(EvalError::IncompatibleTypes {
                left: left.kind(),
                right: right.kind(),
            });
        }
    };

    Ok(Some(eq))
}

fn eval_in(value: &Value, candidates: &[Value]) -> Result<Option<bool>, EvalError> {
    let mut unknown = false;
    for candidate in candidates {
        match compare_eq(value, candidate)? {
            Some(true) => return Ok(Some(true)),
            Some(false) => {}
            None => unknown = true,
        }
    }

    Ok(if unknown { None } else { Some(false) })
}
