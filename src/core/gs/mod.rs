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

//! Graphics Synthesizer CLUT subsystem
//!
//! This module emulates the palette cache of the PS2 Graphics Synthesizer.
//! Indexed textures (PSMT8, PSMT4 and their H variants) do not carry colors;
//! every texel is looked up in an on-chip CLUT buffer of 512 halfword entries
//! that is refreshed from GS local memory according to TEX0.CLD.
//!
//! # Buffer Layout
//!
//! ```text
//! entries   0-255: low 16 bits of 32-bit colors, or whole 16-bit colors
//! entries 256-511: high 16 bits of 32-bit colors
//! ```
//!
//! A 32-bit palette entry `n` is therefore split across `clut[n]` and
//! `clut[n + 256]`, while 16-bit palettes may use all 512 slots (CSA 0-31).
//!
//! # Pipeline
//!
//! 1. [`Clut::write_test`] decides from TEX0/TEXCLUT whether a draw reloads
//! 2. [`Clut::write`] copies entries from local memory into the buffer
//! 3. [`Clut::read32`] expands the buffer into 32-bit colors using TEXA
//! 4. [`Clut::alpha_min_max32`] reports the alpha range of the expanded palette
//!
//! # References
//!
//! - GS User's Manual, section 3.5 "CLUT Buffer"

mod clut;
mod memory;
pub mod psm;
mod registers;

// Public re-exports
pub use clut::{Clut, ClutLoad, CLUT_ENTRIES};
pub use memory::{
    block_address16, block_address32, pixel_address16, pixel_address16s, pixel_address32,
    LocalMemory, VideoMemory,
};
pub use registers::{Tex0, TexA, TexClut};
