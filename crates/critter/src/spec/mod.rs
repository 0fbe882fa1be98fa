//! Module: spec
//! Responsibility: the `Specification` seam, the shared `Spec` handle, and
//! the facade constructors for common predicate shapes.
//! Does not own: predicate evaluation or SQL generation.

mod combinator;
mod factory;


use crate::{
    criteria::{CriteriaBuilder, CriteriaQuery, Expression, Predicate},
    entity::{Entity, Root},
};
use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
    sync::Arc,
};

// re-exports
pub use factory::{
    distinct, ends_with, ends_with_escaped, ends_with_ic, ends_with_ic_escaped, equal_to, like,
    like_escaped, like_ic, like_ic_escaped, starts_with, starts_with_escaped, starts_with_ic,
    starts_with_ic_escaped, value_in,
};

///
/// Extractor
///
/// Caller-supplied navigation from the query root to a field expression.
///

pub type Extractor<E> = Arc<dyn Fn(&Root<E>) -> Expression + Send + Sync>;

///
/// Specification
///
/// Deferred restriction over entity `E`. Nothing is evaluated until the
/// criteria engine asks for the predicate.
///

pub trait Specification<E: Entity>: Send + Sync {
    fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate;
}

///
/// Spec
///
/// Cheaply cloneable handle to a specification. Every facade constructor
/// returns one, and the combinators compose them.
///

pub struct Spec<E: Entity> {
    inner: Arc<dyn Specification<E>>,
}

impl<E: Entity> Spec<E> {
    pub fn new(spec: impl Specification<E> + 'static) -> Self {
        Self {
            inner: Arc::new(spec),
        }
    }

    /// Specification that restricts nothing.
    #[must_use]
    pub fn all() -> Self {
        Self::new(combinator::AllSpec)
    }

    /// Ad-hoc specification from a closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Root<E>, &mut CriteriaQuery<E>, &CriteriaBuilder) -> Predicate
            + Send
            + Sync
            + 'static,
    {
        Self::new(combinator::FnSpec(f))
    }

    /// Both specifications must hold; same as `self & other`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        self & other
    }

    /// Either specification must hold; same as `self | other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        self | other
    }

    /// Build the restriction for `root`, possibly flagging `query`.
    #[must_use]
    pub fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        self.inner.to_predicate(root, query, cb)
    }
}

impl<E: Entity> Specification<E> for Spec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        self.inner.to_predicate(root, query, cb)
    }
}

impl<E: Entity> BitAnd for Spec<E> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::new(combinator::AndSpec(self, rhs))
    }
}

impl<E: Entity> BitOr for Spec<E> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(combinator::OrSpec(self, rhs))
    }
}

impl<E: Entity> Not for Spec<E> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(combinator::NotSpec(self))
    }
}

impl<E: Entity> Clone for Spec<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> fmt::Debug for Spec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("entity", &E::ENTITY_NAME)
            .finish_non_exhaustive()
    }
}
