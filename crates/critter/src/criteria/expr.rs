use crate::value::Value;
use std::fmt;

///
/// Expression
///
/// Scalar expression a predicate compares. Extractors produce paths;
/// the criteria builder wraps them (e.g. `Upper`) and adds literals.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Expression {
    Path { entity: &'static str, field: String },
    Literal(Value),
    Upper(Box<Self>),
}

impl Expression {
    #[must_use]
    pub fn path(entity: &'static str, field: impl Into<String>) -> Self {
        Self::Path {
            entity,
            field: field.into(),
        }
    }

    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    #[must_use]
    pub fn upper(self) -> Self {
        Self::Upper(Box::new(self))
    }

    /// Innermost field name, if this expression reads a field.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Path { field, .. } => Some(field),
            Self::Literal(_) => None,
            Self::Upper(inner) => inner.field_name(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path { entity, field } => write!(f, "{entity}.{field}"),
            Self::Literal(value) => write!(f, "{value}"),
            Self::Upper(inner) => write!(f, "UPPER({inner})"),
        }
    }
}
