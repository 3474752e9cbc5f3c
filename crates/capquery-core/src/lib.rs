// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// capquery — Core types, version gates and error definitions shared by the
// bridge backends.

pub mod config;
pub mod error;
pub mod gates;
pub mod types;

pub use config::BridgeConfig;
pub use error::CapQueryError;
pub use gates::{Feature, VersionGates};
pub use types::*;
