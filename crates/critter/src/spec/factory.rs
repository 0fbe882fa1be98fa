use crate::{
    criteria::{CriteriaBuilder, CriteriaQuery, Expression, Predicate},
    entity::{Entity, Root},
    error::SpecError,
    pattern::{DEFAULT_ESCAPE, PatternKind, escape_like},
    spec::{Extractor, Spec, Specification},
    value::Value,
};
use std::sync::Arc;
use tracing::{Level, debug, enabled};

// ----------------------------------------------------------------------
// Facade
// ----------------------------------------------------------------------

/// Field equals `value`.
///
/// Fails with [`SpecError::NullValue`] when `value` is null; use an
/// explicit null check instead.
pub fn equal_to<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    let extractor: Extractor<E> = Arc::new(extractor);
    let value = value.into();

    if value.is_null() {
        return Err(SpecError::NullValue {
            field: describe(&extractor),
        });
    }

    if enabled!(Level::DEBUG) {
        let field = describe(&extractor);
        debug!(entity = E::ENTITY_NAME, %field, %value, "equal_to specification");
    }

    Ok(Spec::new(EqualsSpec { extractor, value }))
}

/// Field is one of `values`.
///
/// An empty collection yields a specification that matches no rows. Null
/// elements are kept but, as in SQL, never match.
pub fn value_in<E, F, I>(extractor: F, values: I) -> Spec<E>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let extractor: Extractor<E> = Arc::new(extractor);
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();

    if enabled!(Level::DEBUG) {
        debug!(
            entity = E::ENTITY_NAME,
            field = %describe(&extractor),
            count = values.len(),
            "value_in specification"
        );
    }

    Spec::new(ValueInSpec { extractor, values })
}

/// Case-sensitive substring match (`%value%`).
pub fn like<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::Contains, false, false)
}

/// Case-insensitive substring match (`UPPER(field) LIKE %VALUE%`).
pub fn like_ic<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::Contains, true, false)
}

/// Case-sensitive prefix match (`value%`).
pub fn starts_with<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::StartsWith, false, false)
}

/// Case-insensitive prefix match.
pub fn starts_with_ic<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::StartsWith, true, false)
}

/// Case-sensitive suffix match (`%value`).
pub fn ends_with<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::EndsWith, false, false)
}

/// Case-insensitive suffix match.
pub fn ends_with_ic<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::EndsWith, true, false)
}

// The `_escaped` variants match `%` and `_` in the value literally.

pub fn like_escaped<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::Contains, false, true)
}

pub fn like_ic_escaped<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::Contains, true, true)
}

pub fn starts_with_escaped<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::StartsWith, false, true)
}

pub fn starts_with_ic_escaped<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::StartsWith, true, true)
}

pub fn ends_with_escaped<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::EndsWith, false, true)
}

pub fn ends_with_ic_escaped<E, F, V>(extractor: F, value: V) -> Result<Spec<E>, SpecError>
where
    E: Entity,
    F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
    V: Into<Value>,
{
    LikeSpec::build(extractor, value, PatternKind::EndsWith, true, true)
}

/// Wrap `spec` so the enclosing query returns distinct rows.
#[must_use]
pub fn distinct<E: Entity>(spec: Spec<E>) -> Spec<E> {
    Spec::new(DistinctSpec { delegate: spec })
}

// Label for errors and logs: the field the extractor reads, if any.
// Runs the extractor, so only call it on error paths or when logging.
fn describe<E: Entity>(extractor: &Extractor<E>) -> String {
    let expr = extractor(&Root::new());

    expr.field_name()
        .map_or_else(|| expr.to_string(), ToString::to_string)
}

// ----------------------------------------------------------------------
// Specifications
// ----------------------------------------------------------------------

///
/// EqualsSpec
///

struct EqualsSpec<E: Entity> {
    extractor: Extractor<E>,
    value: Value,
}

impl<E: Entity> Specification<E> for EqualsSpec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        _query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        cb.equal((self.extractor)(root), self.value.clone())
    }
}

///
/// ValueInSpec
///

struct ValueInSpec<E: Entity> {
    extractor: Extractor<E>,
    values: Vec<Value>,
}

impl<E: Entity> Specification<E> for ValueInSpec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        _query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        cb.in_((self.extractor)(root), self.values.iter().cloned())
    }
}

///
/// LikeSpec
///
/// Pattern is final at construction: wildcards placed, escaped and
/// upper-cased as requested.
///

struct LikeSpec<E: Entity> {
    extractor: Extractor<E>,
    pattern: String,
    ignore_case: bool,
    escape: Option<char>,
}

impl<E: Entity> LikeSpec<E> {
    fn build<F, V>(
        extractor: F,
        value: V,
        kind: PatternKind,
        ignore_case: bool,
        escaped: bool,
    ) -> Result<Spec<E>, SpecError>
    where
        F: Fn(&Root<E>) -> Expression + Send + Sync + 'static,
        V: Into<Value>,
    {
        let extractor: Extractor<E> = Arc::new(extractor);

        let raw = match value.into() {
            Value::Text(s) => s,
            Value::Null => {
                return Err(SpecError::NullValue {
                    field: describe(&extractor),
                });
            }
            other => {
                return Err(SpecError::TextRequired {
                    field: describe(&extractor),
                    found: other.kind(),
                });
            }
        };

        let escape = escaped.then_some(DEFAULT_ESCAPE);
        let mut pattern = match escape {
            Some(c) => kind.apply(&escape_like(&raw, c)),
            None => kind.apply(&raw),
        };
        if ignore_case {
            pattern = pattern.to_uppercase();
        }

        if enabled!(Level::DEBUG) {
            let field = describe(&extractor);
            debug!(
                entity = E::ENTITY_NAME,
                %field,
                kind = kind.label(),
                ignore_case,
                %pattern,
                "pattern specification"
            );
        }

        Ok(Spec::new(Self {
            extractor,
            pattern,
            ignore_case,
            escape,
        }))
    }
}

impl<E: Entity> Specification<E> for LikeSpec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        _query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        let mut expr = (self.extractor)(root);
        if self.ignore_case {
            expr = cb.upper(expr);
        }

        match self.escape {
            Some(c) => cb.like_escaped(expr, self.pattern.clone(), c),
            None => cb.like(expr, self.pattern.clone()),
        }
    }
}

///
/// DistinctSpec
///

struct DistinctSpec<E: Entity> {
    delegate: Spec<E>,
}

impl<E: Entity> Specification<E> for DistinctSpec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        query.distinct(true);
        self.delegate.to_predicate(root, query, cb)
    }
}
