//! Composable query specifications: deferred predicates built from a
//! field extractor and a comparison value, evaluated later by a criteria
//! engine against an entity's query root.
#![warn(unreachable_pub)]

pub mod criteria;
pub mod entity;
pub mod error;
pub mod eval;
pub mod pattern;
pub mod render;
pub mod spec;
pub mod value;

///
/// Prelude
///
/// Vocabulary for building specifications. Evaluation and rendering stay
/// behind their modules.
///

pub mod prelude {
    pub use crate::{
        criteria::{CriteriaBuilder, CriteriaQuery, Expression, Predicate},
        entity::{Entity, Root},
        error::SpecError,
        spec::{
            Spec, Specification, distinct, ends_with, ends_with_escaped, ends_with_ic,
            ends_with_ic_escaped, equal_to, like, like_escaped, like_ic, like_ic_escaped,
            starts_with, starts_with_escaped, starts_with_ic, starts_with_ic_escaped, value_in,
        },
        value::Value,
    };
}
