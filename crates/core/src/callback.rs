//! Callback model for the combined filter-map pass.
//!
//! A callback is invoked with a [`Visit`]: the current index, a live mutable
//! view of the whole source, and the optional receiver context. Each callback
//! also reports its declared parameter count ([`Callback::arity`]), which is
//! what decides whether the pass raises its positional-access advisory.
//!
//! Pick the adapter matching what the callback actually reads:
//!
//! | adapter        | closure shape                    | arity |
//! |----------------|----------------------------------|-------|
//! | [`element`]    | `FnMut(&T) -> R`                 | 1     |
//! | [`receiver`]   | `FnMut(Option<&C>, &T) -> R`     | 1     |
//! | [`indexed`]    | `FnMut(&T, usize) -> R`          | 2     |
//! | [`positional`] | `FnMut(&mut Visit<T, C>) -> R`   | 3     |
//! | [`declared`]   | `FnMut(&mut Visit<T, C>) -> R`   | any   |
//!
//! # Mutation visibility
//!
//! Nothing is snapshotted. A positional predicate that writes to
//! `source_mut()[i]` is observed by the transform for the same index and by
//! every later invocation. Results therefore depend on invocation order.

/// The view handed to a callback for one invocation.
pub struct Visit<'a, T, C: ?Sized = ()> {
    index: usize,
    source: &'a mut [T],
    context: Option<&'a C>,
}

impl<'a, T, C: ?Sized> Visit<'a, T, C> {
    /// Creates a visit of `source[index]`.
    ///
    /// `index` must be in bounds.
    pub fn new(index: usize, source: &'a mut [T], context: Option<&'a C>) -> Self {
        debug_assert!(index < source.len());
        Self {
            index,
            source,
            context,
        }
    }

    /// Returns the index being visited.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the current element, read live from the source.
    #[inline]
    pub fn element(&self) -> &T {
        &self.source[self.index]
    }

    /// Returns the current element mutably.
    #[inline]
    pub fn element_mut(&mut self) -> &mut T {
        &mut self.source[self.index]
    }

    /// Returns the whole source sequence.
    #[inline]
    pub fn source(&self) -> &[T] {
        self.source
    }

    /// Returns the whole source sequence mutably.
    #[inline]
    pub fn source_mut(&mut self) -> &mut [T] {
        self.source
    }

    /// Returns the source length.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true if the source is empty. Never true during a pass.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns the receiver context, if one was supplied.
    #[inline]
    pub fn context(&self) -> Option<&'a C> {
        self.context
    }
}

/// A predicate or transform callback.
pub trait Callback<T, C: ?Sized, R> {
    /// Declared parameter count: 1 for element only, 2 with the index,
    /// 3 with the source.
    fn arity(&self) -> usize;

    /// Invokes the callback.
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> R;
}

impl<T, C: ?Sized, R, F: Callback<T, C, R> + ?Sized> Callback<T, C, R> for &mut F {
    #[inline]
    fn arity(&self) -> usize {
        (**self).arity()
    }

    #[inline]
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> R {
        (**self).call(visit)
    }
}

/// Callback that reads only the element.
#[derive(Clone, Copy)]
pub struct Element<F>(F);

/// Callback that reads the receiver context and the element.
#[derive(Clone, Copy)]
pub struct Receiver<F>(F);

/// Callback that reads the element and its index.
#[derive(Clone, Copy)]
pub struct Indexed<F>(F);

/// Callback with full access to the visit.
#[derive(Clone, Copy)]
pub struct Positional<F>(F);

/// Callback with full access to the visit and an explicit declared arity.
#[derive(Clone, Copy)]
pub struct Declared<F> {
    arity: usize,
    f: F,
}

/// Wraps `f(element)`.
pub fn element<T, R, F>(f: F) -> Element<F>
where
    F: FnMut(&T) -> R,
{
    Element(f)
}

/// Wraps `f(context, element)`.
pub fn receiver<T, C: ?Sized, R, F>(f: F) -> Receiver<F>
where
    F: FnMut(Option<&C>, &T) -> R,
{
    Receiver(f)
}

/// Wraps `f(element, index)`.
pub fn indexed<T, R, F>(f: F) -> Indexed<F>
where
    F: FnMut(&T, usize) -> R,
{
    Indexed(f)
}

/// Wraps `f(visit)` with the element, index and source all in use.
pub fn positional<T, C: ?Sized, R, F>(f: F) -> Positional<F>
where
    F: FnMut(&mut Visit<'_, T, C>) -> R,
{
    Positional(f)
}

/// Wraps `f(visit)` and reports `arity` as its declared parameter count.
pub fn declared<T, C: ?Sized, R, F>(arity: usize, f: F) -> Declared<F>
where
    F: FnMut(&mut Visit<'_, T, C>) -> R,
{
    Declared { arity, f }
}

impl<T, C: ?Sized, R, F: FnMut(&T) -> R> Callback<T, C, R> for Element<F> {
    #[inline]
    fn arity(&self) -> usize {
        1
    }

    #[inline]
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> R {
        (self.0)(visit.element())
    }
}

impl<T, C: ?Sized, R, F: FnMut(Option<&C>, &T) -> R> Callback<T, C, R> for Receiver<F> {
    #[inline]
    fn arity(&self) -> usize {
        1
    }

    #[inline]
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> R {
        (self.0)(visit.context(), visit.element())
    }
}

impl<T, C: ?Sized, R, F: FnMut(&T, usize) -> R> Callback<T, C, R> for Indexed<F> {
    #[inline]
    fn arity(&self) -> usize {
        2
    }

    #[inline]
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> R {
        (self.0)(visit.element(), visit.index())
    }
}

impl<T, C: ?Sized, R, F> Callback<T, C, R> for Positional<F>
where
    F: FnMut(&mut Visit<'_, T, C>) -> R,
{
    #[inline]
    fn arity(&self) -> usize {
        3
    }

    #[inline]
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> R {
        (self.0)(visit)
    }
}

impl<T, C: ?Sized, R, F> Callback<T, C, R> for Declared<F>
where
    F: FnMut(&mut Visit<'_, T, C>) -> R,
{
    #[inline]
    fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    fn call(&mut self, visit: &mut Visit<'_, T, C>) -> R {
        (self.f)(visit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_visit_reads_live_source() {
        let mut data = vec![1, 2, 3];
        let mut visit: Visit<'_, i32> = Visit::new(1, &mut data, None);

        assert_eq!(visit.index(), 1);
        assert_eq!(*visit.element(), 2);
        visit.source_mut()[1] = 20;
        assert_eq!(*visit.element(), 20);
        *visit.element_mut() += 1;
        assert_eq!(visit.source(), &[1, 21, 3]);
        assert_eq!(visit.len(), 3);
        assert!(visit.context().is_none());
    }

    #[test]
    fn test_adapter_arity() {
        assert_eq!(Callback::<i32, (), i32>::arity(&element(|x: &i32| *x)), 1);
        assert_eq!(
            Callback::<i32, i32, i32>::arity(&receiver(|c: Option<&i32>, x: &i32| {
                c.copied().unwrap_or(*x)
            })),
            1
        );
        assert_eq!(
            Callback::<i32, (), usize>::arity(&indexed(|_: &i32, i: usize| i)),
            2
        );
        assert_eq!(
            Callback::<i32, (), i32>::arity(&positional(|v: &mut Visit<'_, i32>| *v.element())),
            3
        );
        assert_eq!(
            Callback::<i32, (), i32>::arity(&declared(0, |v: &mut Visit<'_, i32>| *v.element())),
            0
        );
    }

    #[test]
    fn test_receiver_sees_context() {
        let mut data = vec![1, 2];
        let ctx = 7;
        let mut cb = receiver(|c: Option<&i32>, x: &i32| c.copied().unwrap_or(0) + *x);
        let mut visit = Visit::new(0, &mut data, Some(&ctx));
        assert_eq!(cb.call(&mut visit), 8);
    }

    #[test]
    fn test_callback_through_mut_ref() {
        let mut data = vec![5];
        let mut cb = indexed(|x: &i32, i: usize| *x + i as i32);
        let by_ref: &mut dyn Callback<i32, (), i32> = &mut cb;
        let mut visit = Visit::new(0, &mut data, None);
        assert_eq!(by_ref.arity(), 2);
        assert_eq!(by_ref.call(&mut visit), 5);
    }
}
