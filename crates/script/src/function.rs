//! Native function values.

use crate::value::Value;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;
use siftmap_core::{Result, Visit};

type Body = dyn Fn(&mut Visit<'_, Value, Value>) -> Result<Value>;

/// A callable value.
///
/// The body receives the visit for one element: `element()`, `index()`,
/// `source()`/`source_mut()`, and the bound receiver through `context()`.
/// `params` is the declared parameter count, as a script function would
/// report it; it is what the filter-map pass inspects, independent of what the
/// body actually reads.
#[derive(Clone)]
pub struct Function {
    inner: Rc<Inner>,
}

struct Inner {
    name: String,
    params: usize,
    body: Box<Body>,
}

impl Function {
    /// Creates a function named `name` declaring `params` parameters.
    pub fn new<F>(name: impl Into<String>, params: usize, body: F) -> Self
    where
        F: Fn(&mut Visit<'_, Value, Value>) -> Result<Value> + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                name: name.into(),
                params,
                body: Box::new(body),
            }),
        }
    }

    /// Creates an anonymous function.
    pub fn anonymous<F>(params: usize, body: F) -> Self
    where
        F: Fn(&mut Visit<'_, Value, Value>) -> Result<Value> + 'static,
    {
        Self::new("", params, body)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declared parameter count.
    #[inline]
    pub fn params(&self) -> usize {
        self.inner.params
    }

    /// Invokes the body. Errors raised by the body are returned unchanged.
    pub fn call(&self, visit: &mut Visit<'_, Value, Value>) -> Result<Value> {
        (self.inner.body)(visit)
    }

    /// Returns true if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.inner.name)
            .field("params", &self.inner.params)
            .finish()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}() {{ [native code] }}", self.inner.name)
    }
}
