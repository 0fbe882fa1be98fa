use crate::criteria::Expression;
use std::{fmt, marker::PhantomData};

///
/// Entity
///
/// Marker for a queryable record type. Specifications are typed by the
/// entity they restrict, so a `Spec<User>` cannot be applied to orders.
///

pub trait Entity: 'static {
    /// Name the criteria engine uses to qualify field paths.
    const ENTITY_NAME: &'static str;
}

///
/// Root
///
/// Query root handed to extractors. Extractors navigate from the root to
/// the field expression a predicate compares against.
///

pub struct Root<E: Entity> {
    _marker: PhantomData<fn() -> E>,
}

impl<E: Entity> Root<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        E::ENTITY_NAME
    }

    /// Path expression for a field on this root.
    ///
    /// Field names are not checked here; unknown fields are reported by
    /// whichever engine consumes the predicate.
    #[must_use]
    pub fn get(&self, field: impl Into<String>) -> Expression {
        Expression::path(E::ENTITY_NAME, field)
    }
}

impl<E: Entity> Clone for Root<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for Root<E> {}

impl<E: Entity> Default for Root<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> fmt::Debug for Root<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Root").field(&E::ENTITY_NAME).finish()
    }
}
