//! The combined filter-map pass.
//!
//! One forward pass over the source: for each index the predicate is invoked,
//! and only when it returns a truthy value the transform is invoked and its
//! result appended. The source is visited exactly once, there is no
//! intermediate collection, and the result is always a freshly allocated
//! `Vec`, never the source itself.
//!
//! # Example
//!
//! ```
//! use siftmap_core::{element, filter_map};
//!
//! let mut ages = vec![12, 25, 17, 40];
//! let adults = filter_map(
//!     &mut ages,
//!     element(|a: &i32| *a >= 18),
//!     element(|a: &i32| a.to_string()),
//! );
//! assert_eq!(adults, ["25", "40"]);
//! ```

use crate::advisory::{Advisor, AdvisorySink, Role, TracingSink};
use crate::callback::{Callback, Visit};
use crate::options::FilterMapOptions;
use crate::truthy::Truthy;
use alloc::vec::Vec;
use core::convert::Infallible;

/// A configured filter-map pass.
///
/// Holds the optional receiver context, the advisory sink and the options.
/// A single `FilterMap` can run several passes; the advisory latch is reset
/// for each one.
pub struct FilterMap<'c, C: ?Sized = (), S = TracingSink> {
    context: Option<&'c C>,
    sink: S,
    options: FilterMapOptions,
}

impl FilterMap<'static, (), TracingSink> {
    /// Creates a pass with no context, default options and a `tracing` sink.
    pub fn new() -> Self {
        Self {
            context: None,
            sink: TracingSink,
            options: FilterMapOptions::default(),
        }
    }
}

impl Default for FilterMap<'static, (), TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c, C: ?Sized, S: AdvisorySink> FilterMap<'c, C, S> {
    /// Binds a receiver context for both callbacks.
    pub fn context<'d, D: ?Sized>(self, context: &'d D) -> FilterMap<'d, D, S> {
        self.maybe_context(Some(context))
    }

    /// Binds an optional receiver context.
    pub fn maybe_context<'d, D: ?Sized>(self, context: Option<&'d D>) -> FilterMap<'d, D, S> {
        FilterMap {
            context,
            sink: self.sink,
            options: self.options,
        }
    }

    /// Replaces the advisory sink.
    pub fn sink<S2: AdvisorySink>(self, sink: S2) -> FilterMap<'c, C, S2> {
        FilterMap {
            context: self.context,
            sink,
            options: self.options,
        }
    }

    /// Replaces the options.
    pub fn options(mut self, options: FilterMapOptions) -> Self {
        self.options = options;
        self
    }

    /// Consumes the pass and returns its advisory sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs the pass over `source`.
    pub fn run<T, B, R, P, M>(&mut self, source: &mut [T], predicate: P, transform: M) -> Vec<R>
    where
        B: Truthy,
        P: Callback<T, C, B>,
        M: Callback<T, C, R>,
    {
        match self.try_run::<T, B, R, Infallible, _, _>(
            source,
            Infallibly(predicate),
            Infallibly(transform),
        ) {
            Ok(out) => out,
            Err(never) => match never {},
        }
    }

    /// Runs the pass with fallible callbacks.
    ///
    /// The first error returned by either callback aborts the pass and is
    /// returned as-is; results gathered so far are dropped.
    pub fn try_run<T, B, R, E, P, M>(
        &mut self,
        source: &mut [T],
        mut predicate: P,
        mut transform: M,
    ) -> Result<Vec<R>, E>
    where
        B: Truthy,
        P: Callback<T, C, Result<B, E>>,
        M: Callback<T, C, Result<R, E>>,
    {
        let len = source.len();
        let mut out = if self.options.presize() {
            Vec::with_capacity(len)
        } else {
            Vec::new()
        };
        let mut advisor = Advisor::new(&mut self.sink, self.options.advise_positional());

        for index in 0..len {
            let mut visit = Visit::new(index, &mut *source, self.context);

            advisor.observe(Role::Predicate, predicate.arity(), index);
            if !predicate.call(&mut visit)?.is_truthy() {
                continue;
            }

            advisor.observe(Role::Transform, transform.arity(), index);
            out.push(transform.call(&mut visit)?);
        }

        Ok(out)
    }
}

struct Infallibly<F>(F);

impl<T, C: ?Sized, R, F: Callback<T, C, R>> Callback<T, C, Result<R, Infallible>> for Infallibly<F> {
    #[inline]
    fn arity(&self) -> usize {
        self.0.arity()
    }

    #[inline]
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> Result<R, Infallible> {
        Ok(self.0.call(visit))
    }
}

/// Filters and maps `source` in one pass, with no receiver context.
pub fn filter_map<T, B, R, P, M>(source: &mut [T], predicate: P, transform: M) -> Vec<R>
where
    B: Truthy,
    P: Callback<T, (), B>,
    M: Callback<T, (), R>,
{
    FilterMap::new().run(source, predicate, transform)
}

/// Filters and maps `source` in one pass, exposing `context` to both callbacks.
pub fn filter_map_with<T, C, B, R, P, M>(
    source: &mut [T],
    predicate: P,
    transform: M,
    context: Option<&C>,
) -> Vec<R>
where
    C: ?Sized,
    B: Truthy,
    P: Callback<T, C, B>,
    M: Callback<T, C, R>,
{
    FilterMap::new()
        .maybe_context(context)
        .run(source, predicate, transform)
}

/// Fallible form of [`filter_map_with`].
pub fn try_filter_map<T, C, B, R, E, P, M>(
    source: &mut [T],
    predicate: P,
    transform: M,
    context: Option<&C>,
) -> Result<Vec<R>, E>
where
    C: ?Sized,
    B: Truthy,
    P: Callback<T, C, Result<B, E>>,
    M: Callback<T, C, Result<R, E>>,
{
    FilterMap::new()
        .maybe_context(context)
        .try_run(source, predicate, transform)
}

/// Filters and maps `source`, consuming it.
///
/// Element-only: the transform receives each accepted element by value, and
/// neither callback sees an index or the source, so no advisory is raised.
pub fn filter_map_owned<T, B, R, P, M>(source: Vec<T>, mut predicate: P, mut transform: M) -> Vec<R>
where
    B: Truthy,
    P: FnMut(&T) -> B,
    M: FnMut(T) -> R,
{
    let mut out = Vec::new();
    for item in source {
        if predicate(&item).is_truthy() {
            out.push(transform(item));
        }
    }
    out
}
