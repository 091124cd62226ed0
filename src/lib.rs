#![warn(missing_docs)]

//! Schematic generation for Akita entity stores
//!
//! Produces the boilerplate TypeScript source for an Akita `EntityStore`
//! class from a feature name and a couple of flags. Rendering is a pure
//! string transform: no filesystem access, no knowledge of Akita or Angular
//! runtime semantics. Writing the result to disk is the caller's job.

pub mod entity_store;
pub mod error;
pub mod models;
pub mod naming;

// Re-export public API
pub use entity_store::EntityStoreSchematic;
pub use error::SchematicsError;
pub use models::{EntityStoreOptions, GeneratedFile};
