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

//! gsclut: PlayStation 2 Graphics Synthesizer CLUT emulation
//!
//! This crate emulates the palette cache (CLUT, color lookup table) of the
//! PS2 Graphics Synthesizer: deciding when a draw reloads the on-chip palette,
//! performing the reload from GS local memory with the hardware's entry
//! reordering, and expanding the palette into sampleable 32-bit colors.
//!
//! # Architecture
//!
//! - [`core::gs`]: GS registers, pixel formats, local memory and the CLUT itself
//! - [`core::config`]: CLUT configuration (TOML)
//! - [`core::error`]: Error types for the fallible edges (files, dumps)
//!
//! # Example
//!
//! ```
//! use gsclut::core::gs::{psm, Clut, LocalMemory, TexA, TexClut, Tex0};
//!
//! let mem = LocalMemory::new();
//! let mut clut = Clut::new();
//!
//! let tex0 = Tex0::default().with_psm(psm::PSMT8).with_cpsm(psm::PSMCT32).with_cld(1);
//! let texclut = TexClut::default();
//!
//! // First draw with an indexed format always reloads
//! assert!(clut.load(tex0, texclut, &mem));
//!
//! clut.read32(tex0, TexA::default());
//! let (amin, amax) = clut.alpha_min_max32();
//! assert!(amin <= amax);
//! ```
//!
//! # Error Handling
//!
//! The palette core never fails. File-facing helpers return [`core::error::Result<T>`],
//! an alias for `Result<T, ClutError>`.

pub mod core;

// Re-export commonly used types
pub use core::error::{ClutError, Result};
