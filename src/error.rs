use thiserror::Error;

/// Errors reading or writing a paper configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    /// The persisted configuration was not valid JSON, or did not match the schema
    Json(#[from] serde_json::Error),

    #[error("unknown paper size type: {0}")]
    /// A size identifier that is not in the catalog
    UnknownSizeType(String),
}

/// Reasons the host cannot print badges right now. The [`Display`](std::fmt::Display)
/// output is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    #[error("Printing is not supported in this environment")]
    /// The host has no native print action
    PrintUnsupported,

    #[error("Badge print container not found (expected element #{0})")]
    /// There is nothing to print: the badge container element does not exist
    BadgeContainerMissing(String),
}

/// A capability probe could not complete. Never surfaced to callers; probes
/// fall back to a safe default instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("capability probe failed: {0}")]
pub struct ProbeError(pub String);
