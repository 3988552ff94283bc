//! Siftmap Core - single-pass combined filter and map.
//!
//! This crate replaces the `filter(..).map(..)` pattern with one pass that
//! never builds an intermediate collection:
//!
//! - `filter_map` / `filter_map_with`: the combined pass, optionally exposing a
//!   receiver context to both callbacks
//! - `try_filter_map`: the same pass with fallible callbacks
//! - `filter_map_owned`: consuming, element-only variant
//! - `FilterMap`: builder carrying context, options and the advisory sink
//! - `Callback` and its adapters (`element`, `receiver`, `indexed`,
//!   `positional`, `declared`): how a callback declares what it reads
//! - `Advisory`: the one-per-pass warning for callbacks that read the index or
//!   the source
//! - `Error`: errors for the dynamically-checked entry points
//!
//! # Live source
//!
//! Callbacks receive a mutable view of the source, not a snapshot. Writes made
//! by the predicate are visible to the transform for the same index and to all
//! later invocations. This is part of the contract.
//!
//! # Example
//!
//! ```rust
//! use siftmap_core::{filter_map_with, element, positional, receiver, Visit};
//!
//! struct Item { id: u32, label: String }
//!
//! let mut items = vec![
//!     Item { id: 1, label: "a".into() },
//!     Item { id: 2, label: "b".into() },
//! ];
//!
//! // Annotate in place, then collect the annotated labels.
//! let labels = filter_map_with(
//!     &mut items,
//!     positional(|v: &mut Visit<'_, Item, str>| {
//!         let suffix = v.context().unwrap_or("");
//!         v.element_mut().label.push_str(suffix);
//!         true
//!     }),
//!     element(|item: &Item| item.label.clone()),
//!     Some("!"),
//! );
//! assert_eq!(labels, ["a!", "b!"]);
//! assert_eq!(items[1].label, "b!");
//!
//! let tags = filter_map_with(
//!     &mut items,
//!     element(|item: &Item| item.id > 1),
//!     receiver(|tag: Option<&str>, item: &Item| format!("{}{}", tag.unwrap_or(""), item.id)),
//!     Some("#"),
//! );
//! assert_eq!(tags, ["#2"]);
//! ```

#![no_std]

extern crate alloc;

pub mod advisory;
pub mod callback;
mod error;
mod ext;
mod options;
mod sift;
mod truthy;

pub use advisory::{Advisory, AdvisorySink, Role, TracingSink};
pub use callback::{
    declared, element, indexed, positional, receiver, Callback, Declared, Element, Indexed,
    Positional, Receiver, Visit,
};
pub use error::{Error, Result};
pub use ext::SiftExt;
pub use options::FilterMapOptions;
pub use sift::{filter_map, filter_map_owned, filter_map_with, try_filter_map, FilterMap};
pub use truthy::Truthy;
