//! Error types for configuration payload operations.

use thiserror::Error;

/// Errors that can occur while building or loading a configuration payload.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The selected feature has no geometry of the kind it watches
    #[error("{feature} requires at least one {kind}")]
    MissingGeometry {
        /// Internal feature name
        feature: String,
        /// Geometry kind the feature watches ("region" or "line")
        kind: String,
    },

    /// A line entry with the wrong number of points
    #[error("line {id} needs exactly 2 points, got {count}")]
    BadLinePoints {
        /// Line identifier from the payload
        id: u32,
        /// Number of points found
        count: usize,
    },

    /// A region entry with too few points
    #[error("region {id} needs at least 3 points, got {count}")]
    BadRegionPoints {
        /// Region identifier from the payload
        id: u32,
        /// Number of points found
        count: usize,
    },

    /// A crossing line that never went through the direction picker
    #[error("line {id} has no crossing direction")]
    UndirectedLine {
        /// Line identifier from the payload
        id: u32,
    },

    /// The configuration names a feature the editor does not know
    #[error("unknown feature '{name}'")]
    UnknownFeature {
        /// Feature name as spelled in the configuration
        name: String,
    },

    /// The configuration carries no feature entry at all
    #[error("configuration lists no feature")]
    NoFeature,

    /// An error message passed through from the backend, verbatim
    #[error("{message}")]
    Backend {
        /// The backend's own description of what went wrong
        message: String,
    },
}

impl FormatError {
    /// Create a MissingGeometry error.
    pub fn missing_geometry(feature: impl Into<String>, kind: impl Into<String>) -> Self {
        FormatError::MissingGeometry {
            feature: feature.into(),
            kind: kind.into(),
        }
    }

    /// Create an UnknownFeature error.
    pub fn unknown_feature(name: impl Into<String>) -> Self {
        FormatError::UnknownFeature { name: name.into() }
    }

    /// Wrap a backend failure message without rewording it.
    pub fn backend(message: impl Into<String>) -> Self {
        FormatError::Backend {
            message: message.into(),
        }
    }
}
