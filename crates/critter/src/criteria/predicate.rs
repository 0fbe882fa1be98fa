use crate::{criteria::Expression, value::Value};
use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
};

///
/// Predicate
///
/// Boolean restriction produced by the criteria builder. Pure data: it
/// carries no evaluation logic and is immutable once built.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Equal {
        left: Expression,
        right: Expression,
    },
    In {
        expr: Expression,
        values: Vec<Value>,
    },
    Like {
        expr: Expression,
        pattern: String,
        escape: Option<char>,
    },
    IsNull(Expression),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, preds: &[Predicate], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, pred) in preds.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{pred}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("TRUE"),
            Self::False => f.write_str("FALSE"),
            Self::And(preds) if preds.is_empty() => f.write_str("TRUE"),
            Self::Or(preds) if preds.is_empty() => f.write_str("FALSE"),
            Self::And(preds) => write_joined(f, preds, " AND "),
            Self::Or(preds) => write_joined(f, preds, " OR "),
            Self::Not(inner) => write!(f, "NOT {inner}"),
            Self::Equal { left, right } => write!(f, "{left} = {right}"),
            Self::In { expr, values } => {
                write!(f, "{expr} IN {}", Value::List(values.clone()))
            }
            Self::Like {
                expr,
                pattern,
                escape,
            } => {
                write!(f, "{expr} LIKE {}", Value::Text(pattern.clone()))?;
                if let Some(c) = escape {
                    write!(f, " ESCAPE '{c}'")?;
                }
                Ok(())
            }
            Self::IsNull(expr) => write!(f, "{expr} IS NULL"),
        }
    }
}
