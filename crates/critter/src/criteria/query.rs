use crate::{
    criteria::{CriteriaBuilder, Predicate},
    entity::{Entity, Root},
    spec::Spec,
};
use std::{fmt, marker::PhantomData};
use tracing::debug;

///
/// CriteriaQuery
///
/// Query under construction for entity `E`. Specifications may flag it as
/// distinct; the restriction is the predicate they return.
///

pub struct CriteriaQuery<E: Entity> {
    distinct: bool,
    restriction: Option<Predicate>,
    _marker: PhantomData<fn() -> E>,
}

impl<E: Entity> CriteriaQuery<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            distinct: false,
            restriction: None,
            _marker: PhantomData,
        }
    }

    /// Build a query restricted by `spec`.
    #[must_use]
    pub fn from_spec(spec: &Spec<E>) -> Self {
        let mut query = Self::new();
        let root = Root::<E>::new();
        let cb = CriteriaBuilder::new();

        let predicate = spec.to_predicate(&root, &mut query, &cb);
        debug!(
            entity = E::ENTITY_NAME,
            distinct = query.distinct,
            restriction = %predicate,
            "built criteria query"
        );
        query.restrict(predicate);

        query
    }

    pub const fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn restrict(&mut self, predicate: Predicate) -> &mut Self {
        self.restriction = Some(predicate);
        self
    }

    #[must_use]
    pub const fn restriction(&self) -> Option<&Predicate> {
        self.restriction.as_ref()
    }
}

impl<E: Entity> Default for CriteriaQuery<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> fmt::Debug for CriteriaQuery<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CriteriaQuery")
            .field("entity", &E::ENTITY_NAME)
            .field("distinct", &self.distinct)
            .field("restriction", &self.restriction)
            .finish()
    }
}
