//! Core data models for schematic generation

use serde::{Deserialize, Serialize};

/// Invocation parameters for the entity-store schematic
///
/// Mirrors the parameter bag an invoking scaffolding tool supplies:
/// `name`, `withActive`, `extensionState`. No other keys are recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntityStoreOptions {
    /// Raw feature name, emitted verbatim as the store-config name and
    /// transformed to produce the generated identifiers
    pub name: String,
    /// Whether the store tracks a currently-active entity
    #[serde(default)]
    pub with_active: bool,
    /// Base type the state interface extends
    pub extension_state: String,
}

/// A generated source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File path relative to the feature directory
    pub path: String,
    /// File content
    pub content: String,
    /// Programming language of the content
    pub language: String,
}
