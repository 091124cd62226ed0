//! Error types for schematic generation

use thiserror::Error;

/// Errors that can occur while invoking a schematic
///
/// Rendering itself is infallible; the only failure mode is a parameter bag
/// that does not deserialize into the schematic's options.
#[derive(Debug, Error)]
pub enum SchematicsError {
    /// Parameter bag could not be deserialized into schematic options
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
