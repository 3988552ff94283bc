//! Pass configuration.

/// Configuration for a filter-map pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMapOptions {
    advise_positional: bool,
    presize: bool,
}

impl Default for FilterMapOptions {
    fn default() -> Self {
        Self {
            advise_positional: true,
            presize: false,
        }
    }
}

impl FilterMapOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the positional-access advisory.
    pub fn with_advisory(mut self, enabled: bool) -> Self {
        self.advise_positional = enabled;
        self
    }

    /// Reserves `source.len()` slots in the result up front.
    ///
    /// Off by default: the result grows like an accumulating reduce, which is
    /// cheaper when most elements are rejected.
    pub fn with_presize(mut self, presize: bool) -> Self {
        self.presize = presize;
        self
    }

    #[inline]
    pub fn advise_positional(&self) -> bool {
        self.advise_positional
    }

    #[inline]
    pub fn presize(&self) -> bool {
        self.presize
    }
}
