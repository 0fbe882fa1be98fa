//! Module: criteria
//! Responsibility: expression/predicate trees and the query they restrict.
//! Does not own: evaluation (`eval`) or SQL text (`render`).
//! Boundary: specifications build predicates exclusively through
//! `CriteriaBuilder`.

mod builder;
mod expr;
mod predicate;
mod query;


pub use builder::CriteriaBuilder;
pub use expr::Expression;
pub use predicate::Predicate;
pub use query::CriteriaQuery;
