//! Method-call syntax for slices and vectors.

use crate::callback::Callback;
use crate::sift::FilterMap;
use crate::truthy::Truthy;
use alloc::vec::Vec;

/// Extension methods running the combined filter-map pass.
pub trait SiftExt<T> {
    /// Element-only pass over a shared slice.
    fn sift<B, R>(&self, predicate: impl FnMut(&T) -> B, transform: impl FnMut(&T) -> R) -> Vec<R>
    where
        B: Truthy;

    /// Pass with arbitrary callbacks and no receiver context.
    fn sift_by<B, R, P, M>(&mut self, predicate: P, transform: M) -> Vec<R>
    where
        B: Truthy,
        P: Callback<T, (), B>,
        M: Callback<T, (), R>;

    /// Pass with arbitrary callbacks and a receiver context.
    fn sift_with<C, B, R, P, M>(&mut self, predicate: P, transform: M, context: &C) -> Vec<R>
    where
        C: ?Sized,
        B: Truthy,
        P: Callback<T, C, B>,
        M: Callback<T, C, R>;
}

impl<T> SiftExt<T> for [T] {
    fn sift<B, R>(
        &self,
        mut predicate: impl FnMut(&T) -> B,
        mut transform: impl FnMut(&T) -> R,
    ) -> Vec<R>
    where
        B: Truthy,
    {
        let mut out = Vec::new();
        for item in self {
            if predicate(item).is_truthy() {
                out.push(transform(item));
            }
        }
        out
    }

    fn sift_by<B, R, P, M>(&mut self, predicate: P, transform: M) -> Vec<R>
    where
        B: Truthy,
        P: Callback<T, (), B>,
        M: Callback<T, (), R>,
    {
        FilterMap::new().run(self, predicate, transform)
    }

    fn sift_with<C, B, R, P, M>(&mut self, predicate: P, transform: M, context: &C) -> Vec<R>
    where
        C: ?Sized,
        B: Truthy,
        P: Callback<T, C, B>,
        M: Callback<T, C, R>,
    {
        FilterMap::new()
            .context(context)
            .run(self, predicate, transform)
    }
}
