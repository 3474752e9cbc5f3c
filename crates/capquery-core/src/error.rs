// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for capquery.

use thiserror::Error;

/// Top-level error type for all capquery operations.
///
/// A denied permission or a single-window layout is never an error; those
/// are ordinary `false` answers.
#[derive(Debug, Error)]
pub enum CapQueryError {
    // -- Host transport --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,

    // -- Settings navigation --
    #[error("no activity can handle settings action {action}")]
    NoSettingsHandler { action: String },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CapQueryError>;
