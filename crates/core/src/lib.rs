//! Core types and traits for nyan containers
//!
//! This crate defines the container layer of the nyan value hierarchy:
//! - Value: the dynamically-typed nyan value, with its ValueKind tag
//! - ValueHolder: move-only wrapper that hands a value to a container
//! - Container: the uniform size/add/contains/remove/begin/end contract
//! - ContainerIter: value-semantic iterator handle over a boxed Cursor
//! - Set, OrderedSet: the built-in containers
//! - Limits, Config: value limits and their TOML configuration
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod config;
pub mod container;
pub mod error;
pub mod holder;
pub mod limits;
pub mod value;

// Re-export commonly used types and traits
pub use config::Config;
pub use container::{
    Container, ContainerIter, Cursor, CursorClone, CursorKind, CursorPosition, OrderedSet, Set,
};
pub use error::{Error, Result};
pub use holder::ValueHolder;
pub use limits::{LimitError, Limits};
pub use value::{Value, ValueKind};
