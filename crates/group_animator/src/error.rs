// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types.

use thiserror::Error;

/// Failure reported by a target or one of its drivers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The target could not hand out a driver
    #[error("Driver unavailable: {0}")]
    Unavailable(String),

    /// The driver refused to start playback
    #[error("Driver commit failed: {0}")]
    CommitFailed(String),
}

/// Animator errors
#[derive(Debug, Error)]
pub enum AnimatorError {
    /// A property was registered before any target was selected
    #[error("No target selected; call using_target() first")]
    NoTarget,

    /// Driver failure, passed through unchanged
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// Configuration could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    /// Configuration could not be serialized
    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] ron::Error),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for animator operations
pub type Result<T> = std::result::Result<T, AnimatorError>;
