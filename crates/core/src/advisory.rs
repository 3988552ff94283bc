//! One-shot advisory for callbacks that declare index or source parameters.
//!
//! A pass hands every callback a live view of the source, so a callback that
//! reads positions while something mutates the source sees a moving target.
//! The first invocation of a callback with arity greater than one raises a
//! single [`Advisory`] for the whole call.

use alloc::vec::Vec;
use core::fmt;

/// Which callback raised the advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Predicate,
    Transform,
}

impl Role {
    /// Returns the role name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Predicate => "predicate",
            Role::Transform => "transform",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The advisory raised once per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    /// Callback that triggered it.
    pub role: Role,
    /// Its declared parameter count.
    pub arity: usize,
    /// Index being visited when it fired.
    pub index: usize,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} declares {} parameters (first used at index {}); index and source \
             access inside a single-pass filter-map observe in-flight mutation",
            self.role, self.arity, self.index
        )
    }
}

/// Destination for advisories.
pub trait AdvisorySink {
    fn advise(&mut self, advisory: &Advisory);
}

/// Emits advisories as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn advise(&mut self, advisory: &Advisory) {
        tracing::warn!(
            callback = advisory.role.as_str(),
            arity = advisory.arity,
            index = advisory.index,
            "filter-map callback uses index/source parameters; mutation during the pass is visible to later callbacks"
        );
    }
}

/// Collects advisories in memory.
impl AdvisorySink for Vec<Advisory> {
    fn advise(&mut self, advisory: &Advisory) {
        self.push(*advisory);
    }
}

impl<S: AdvisorySink + ?Sized> AdvisorySink for &mut S {
    fn advise(&mut self, advisory: &Advisory) {
        (**self).advise(advisory)
    }
}

/// Per-call latch that forwards at most one advisory.
pub(crate) struct Advisor<'s, S: ?Sized> {
    sink: &'s mut S,
    enabled: bool,
    fired: bool,
}

impl<'s, S: AdvisorySink + ?Sized> Advisor<'s, S> {
    pub(crate) fn new(sink: &'s mut S, enabled: bool) -> Self {
        Self {
            sink,
            enabled,
            fired: false,
        }
    }

    /// Records an invocation of a callback with the given arity.
    #[inline]
    pub(crate) fn observe(&mut self, role: Role, arity: usize, index: usize) {
        if self.fired || !self.enabled || arity <= 1 {
            return;
        }
        self.fired = true;
        self.sink.advise(&Advisory { role, arity, index });
    }

    #[cfg(test)]
    pub(crate) fn fired(&self) -> bool {
        self.fired
    }
}
