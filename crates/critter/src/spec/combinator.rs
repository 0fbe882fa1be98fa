use crate::{
    criteria::{CriteriaBuilder, CriteriaQuery, Predicate},
    entity::{Entity, Root},
    spec::{Spec, Specification},
};

pub(super) struct AllSpec;

impl<E: Entity> Specification<E> for AllSpec {
    fn to_predicate(
        &self,
        _root: &Root<E>,
        _query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        cb.conjunction()
    }
}

pub(super) struct FnSpec<F>(pub(super) F);

impl<E, F> Specification<E> for FnSpec<F>
where
    E: Entity,
    F: Fn(&Root<E>, &mut CriteriaQuery<E>, &CriteriaBuilder) -> Predicate + Send + Sync,
{
    fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        (self.0)(root, query, cb)
    }
}

// Both operands always run, so a distinct flag set by either side sticks.
pub(super) struct AndSpec<E: Entity>(pub(super) Spec<E>, pub(super) Spec<E>);

impl<E: Entity> Specification<E> for AndSpec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        let left = self.0.to_predicate(root, query, cb);
        let right = self.1.to_predicate(root, query, cb);

        cb.and(vec![left, right])
    }
}

pub(super) struct OrSpec<E: Entity>(pub(super) Spec<E>, pub(super) Spec<E>);

impl<E: Entity> Specification<E> for OrSpec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        let left = self.0.to_predicate(root, query, cb);
        let right = self.1.to_predicate(root, query, cb);

        cb.or(vec![left, right])
    }
}

pub(super) struct NotSpec<E: Entity>(pub(super) Spec<E>);

impl<E: Entity> Specification<E> for NotSpec<E> {
    fn to_predicate(
        &self,
        root: &Root<E>,
        query: &mut CriteriaQuery<E>,
        cb: &CriteriaBuilder,
    ) -> Predicate {
        cb.not(self.0.to_predicate(root, query, cb))
    }
}
