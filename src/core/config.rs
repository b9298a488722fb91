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

//! CLUT configuration
//!
//! Settings that can be saved/loaded as TOML. Missing keys fall back to
//! their defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! duplicate_buffer = true
//! log_ignored_writes = false
//! ```
//!
//! Draw-state files use the same format to capture the registers of a single
//! draw. Register values are hex strings since TEX0 does not fit in a TOML
//! integer once CLD is 4 or above.
//!
//! ```toml
//! tex0 = "0x2000_2000_0130_0000"
//! texclut = "0x0"
//! texa = "0x80_0000_0080"
//! ```

use std::num::ParseIntError;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::Result;
use super::gs::{Tex0, TexA, TexClut};

/// CLUT configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClutConfig {
    /// Build the 64-bit duplicate buffer for 4-bit palettes
    ///
    /// Only consumers that fetch two 4-bit texels per byte need it; the
    /// rasterizer samples the 32-bit buffer.
    pub duplicate_buffer: bool,

    /// Log loads that resolve to the no-op routine
    ///
    /// Non-paletted textures hit the no-op routine constantly, so this is
    /// mostly useful when tracking down a title that issues odd CPSM/PSM pairs.
    pub log_ignored_writes: bool,
}

impl Default for ClutConfig {
    fn default() -> Self {
        Self {
            duplicate_buffer: true,
            log_ignored_writes: true,
        }
    }
}

impl ClutConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Parse a register value written in hex
///
/// Accepts an optional `0x` prefix and `_` digit separators.
pub fn parse_hex(value: &str) -> std::result::Result<u64, ParseIntError> {
    let digits = value.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    u64::from_str_radix(&digits.replace('_', ""), 16)
}

fn serialize_hex<S>(value: &u64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("0x{:016X}", value))
}

fn deserialize_hex<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_hex(&text)
        .map_err(|e| serde::de::Error::custom(format!("invalid hex value {text:?}: {e}")))
}

/// Register values of a single draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawState {
    #[serde(serialize_with = "serialize_hex", deserialize_with = "deserialize_hex")]
    pub tex0: u64,

    #[serde(serialize_with = "serialize_hex", deserialize_with = "deserialize_hex")]
    pub texclut: u64,

    #[serde(serialize_with = "serialize_hex", deserialize_with = "deserialize_hex")]
    pub texa: u64,
}

impl DrawState {
    pub fn tex0(&self) -> Tex0 {
        Tex0(self.tex0)
    }

    pub fn texclut(&self) -> TexClut {
        TexClut(self.texclut)
    }

    pub fn texa(&self) -> TexA {
        TexA(self.texa)
    }

    /// Parse a draw state from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a draw state from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Save a draw state to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ClutError;

    #[test]
    fn test_default_config() {
        let config = ClutConfig::default();
        assert!(config.duplicate_buffer);
        assert!(config.log_ignored_writes);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ClutConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClutConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = ClutConfig::from_toml_str("duplicate_buffer = false").unwrap();
        assert!(!config.duplicate_buffer);
        assert!(config.log_ignored_writes);
    }

    #[test]
    fn test_invalid_document() {
        let result = ClutConfig::from_toml_str("duplicate_buffer = \"yes\"");
        assert!(matches!(result, Err(ClutError::ConfigParse(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clut.toml");

        let config = ClutConfig {
            duplicate_buffer: false,
            log_ignored_writes: false,
        };
        config.save(&path).unwrap();

        let loaded = ClutConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x1F").unwrap(), 0x1F);
        assert_eq!(parse_hex("ff").unwrap(), 0xFF);
        assert_eq!(parse_hex(" 0X8000_0000_0000_0000 ").unwrap(), 1 << 63);
        assert!(parse_hex("0xZZ").is_err());
    }

    #[test]
    fn test_draw_state_document() {
        let state = DrawState::from_toml_str(
            r#"
            tex0 = "0xA000_2000_0130_0000"
            texa = "0x80_0000_8040"
            "#,
        )
        .unwrap();

        assert_eq!(state.tex0().cld(), 5);
        assert_eq!(state.tex0().cbp(), 0x100);
        assert_eq!(state.tex0().psm(), 0x13);
        assert_eq!(state.texclut(), TexClut::default());
        assert_eq!(state.texa().ta1(), 0x80);
        assert!(state.texa().aem());
    }

    #[test]
    fn test_draw_state_rejects_bad_hex() {
        let result = DrawState::from_toml_str("tex0 = \"0xnope\"");
        assert!(matches!(result, Err(ClutError::ConfigParse(_))));
    }

    #[test]
    fn test_draw_state_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draw.toml");

        let state = DrawState {
            tex0: u64::MAX,
            texclut: 0x1234,
            texa: 0x80,
        };
        state.save(&path).unwrap();

        assert_eq!(DrawState::load(&path).unwrap(), state);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ClutConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ClutError::Io(_))));
    }
}
