// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types
//!
//! The CLUT itself has no failure modes: undefined register combinations are
//! ignored exactly like the hardware ignores them. Errors only arise at the
//! edges where configuration files, register state files and VRAM dumps are
//! read from disk.

use thiserror::Error;

/// Errors raised while loading configuration or memory images
#[derive(Debug, Error)]
pub enum ClutError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document could not be parsed
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A value could not be written as TOML
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A VRAM dump does not match the size of GS local memory
    #[error("Invalid VRAM dump size: expected {expected} bytes, got {actual} bytes")]
    InvalidVramSize { expected: usize, actual: usize },
}

/// Result type alias for fallible operations
pub type Result<T> = std::result::Result<T, ClutError>;
