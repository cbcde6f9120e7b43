//! nyan - containers for the nyan data language
//!
//! nyan values can be containers (sets and ordered sets) holding other
//! values. All containers share one interface, [`Container`], and one
//! iterator handle, [`ContainerIter`], so code can walk any container
//! without knowing its concrete kind.
//!
//! # Quick Start
//!
//! ```
//! use nyan::{Container, OrderedSet, Value};
//!
//! let mut abilities = OrderedSet::new();
//! assert!(abilities.add(Value::object("engine.ability.Move").into()));
//! assert!(abilities.add(Value::object("engine.ability.Attack").into()));
//! assert!(!abilities.add(Value::object("engine.ability.Move").into()));
//!
//! let names: Vec<&str> = abilities.iter().filter_map(Value::as_object).collect();
//! assert_eq!(names, ["engine.ability.Move", "engine.ability.Attack"]);
//! ```
//!
//! # Architecture
//!
//! Everything lives in the `nyan-core` crate and is re-exported here.

// Re-export the public API from nyan-core
pub use nyan_core::*;
