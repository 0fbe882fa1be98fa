//! Module: error
//! Responsibility: error taxonomy for specification construction,
//! in-memory evaluation, and SQL rendering.
//! Boundary: construction errors surface before any query is evaluated.

use thiserror::Error as ThisError;

///
/// SpecError
///
/// Precondition failures raised while a specification is being built.
/// These never reach the criteria engine.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SpecError {
    #[error("comparison value for '{field}' must not be null")]
    NullValue { field: String },

    #[error("pattern value for '{field}' must be text, found {found}")]
    TextRequired { field: String, found: &'static str },
}

///
/// EvalError
///
/// Failures owned by the criteria engine: they depend on the row being
/// evaluated, not on how the specification was built.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EvalError {
    #[error("unknown field '{field}' on entity '{entity}'")]
    UnknownField {
        entity: &'static str,
        field: String,
    },

    #[error("cannot compare {left} with {right}")]
    IncompatibleTypes {
        left: &'static str,
        right: &'static str,
    },

    #[error("{op} requires a text operand, found {found}")]
    NotText { op: &'static str, found: &'static str },
}

///
/// RenderError
///

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("value of kind {kind} cannot be bound as a SQL parameter")]
    UnsupportedValue { kind: &'static str },

    #[error("invalid render config: {0}")]
    Config(#[from] serde_json::Error),
}
