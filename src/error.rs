//! Crate error type.
//!
//! Only systemic failures surface here: invalid palette input at the
//! collaborator boundary, or a descriptor list / preference store that
//! cannot be loaded at all. Per-descriptor problems during a render pass
//! never produce an [`Error`]; they are reported through the
//! [`RenderReport`](crate::RenderReport) instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced at the boundaries of a render pass.
#[derive(Debug, Error)]
pub enum Error {
    /// A palette value was not a well-formed 6-digit hex color.
    ///
    /// The upstream theme generator is responsible for well-formed output,
    /// so this fails the pass rather than guessing.
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    /// A role name did not match any known [`ColorRole`](crate::ColorRole).
    #[error("unknown color role `{0}`")]
    UnknownRole(String),

    /// The descriptor list file could not be read.
    #[error("could not read descriptor list at {path}")]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor list file was not valid JSON.
    #[error("could not parse descriptor list at {path}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The preference store exists but could not be read.
    #[error("could not read preference store at {path}")]
    PrefsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
