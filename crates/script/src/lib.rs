//! Siftmap Script - dynamically-typed values and runtime-checked filter-map.
//!
//! The typed API in `siftmap-core` rules out non-callable callbacks at compile
//! time. This crate is the counterpart for callables that only exist at
//! runtime, e.g. values coming from an embedded interpreter or a config-driven
//! pipeline:
//!
//! - `Value`: undefined, null, bool, number, string, array, object, function
//! - `Object`: property map with sorted keys
//! - `Function`: native body plus a declared parameter count
//! - `filter_map`: validates both callables, then runs the core single pass
//!
//! # Example
//!
//! ```rust
//! use siftmap_script::{filter_map, Function, Value};
//!
//! let mut source = vec![
//!     Value::object([("id", Value::from(1))]),
//!     Value::object([("id", Value::from(2))]),
//! ];
//! let keep = Function::anonymous(0, |_| Ok(Value::Bool(true)));
//! let this_id = Function::anonymous(0, |v| {
//!     Ok(v.context().map(|this| this.property("id")).unwrap_or(Value::Undefined))
//! });
//! let this = Value::object([("id", Value::from(4))]);
//!
//! let out = filter_map(&mut source, &keep.into(), &this_id.into(), Some(&this)).unwrap();
//! assert_eq!(out, [Value::from(4), Value::from(4)]);
//! ```

#![no_std]

extern crate alloc;

mod function;
mod object;
mod run;
mod value;

pub use function::Function;
pub use object::Object;
pub use run::{filter_map, filter_map_in};
pub use value::Value;
