use crate::{
    criteria::{Expression, Predicate},
    value::Value,
};

///
/// CriteriaBuilder
///
/// Factory for expressions and predicates. Stateless; specifications
/// receive a shared reference while building their restriction.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CriteriaBuilder;

impl CriteriaBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    #[must_use]
    pub fn literal(&self, value: impl Into<Value>) -> Expression {
        Expression::literal(value)
    }

    #[must_use]
    pub fn upper(&self, expr: Expression) -> Expression {
        expr.upper()
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// Always-true predicate (empty conjunction).
    #[must_use]
    pub const fn conjunction(&self) -> Predicate {
        Predicate::True
    }

    /// Always-false predicate (empty disjunction).
    #[must_use]
    pub const fn disjunction(&self) -> Predicate {
        Predicate::False
    }

    #[must_use]
    pub fn equal(&self, expr: Expression, value: impl Into<Value>) -> Predicate {
        Predicate::Equal {
            left: expr,
            right: Expression::literal(value),
        }
    }

    /// Membership test. An empty value set matches nothing, so it is
    /// returned as `False` instead of an `IN ()` the engine cannot run.
    #[must_use]
    pub fn in_<I, V>(&self, expr: Expression, values: I) -> Predicate
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Predicate::False;
        }

        Predicate::In { expr, values }
    }

    #[must_use]
    pub fn like(&self, expr: Expression, pattern: impl Into<String>) -> Predicate {
        Predicate::Like {
            expr,
            pattern: pattern.into(),
            escape: None,
        }
    }

    #[must_use]
    pub fn like_escaped(
        &self,
        expr: Expression,
        pattern: impl Into<String>,
        escape: char,
    ) -> Predicate {
        Predicate::Like {
            expr,
            pattern: pattern.into(),
            escape: Some(escape),
        }
    }

    #[must_use]
    pub const fn is_null(&self, expr: Expression) -> Predicate {
        Predicate::IsNull(expr)
    }

    #[must_use]
    pub const fn and(&self, preds: Vec<Predicate>) -> Predicate {
        Predicate::and(preds)
    }

    #[must_use]
    pub const fn or(&self, preds: Vec<Predicate>) -> Predicate {
        Predicate::or(preds)
    }

    #[must_use]
    pub fn not(&self, pred: Predicate) -> Predicate {
        !pred
    }
}
