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

//! CLUT (color lookup table) buffer
//!
//! The [`Clut`] tracks which palette the on-chip buffer currently holds,
//! reloads it from local memory when a draw asks for a different one, and
//! expands it into 32-bit colors for sampling.
//!
//! # CLD (CLUT Load Control)
//!
//! ```text
//! 0: Keep the buffer contents
//! 1: Load
//! 2: Load and copy CBP to CBP0
//! 3: Load and copy CBP to CBP1
//! 4: Load only if CBP != CBP0, then copy CBP to CBP0
//! 5: Load only if CBP != CBP1, then copy CBP to CBP1
//! 6-7: Keep the buffer contents
//! ```
//!
//! "Load" still only happens when the palette identity changed since the
//! last load (CBP, CPSM, CSM, CSA, the texel depth, TEXCLUT for CSM2) or
//! after an invalidation.

use super::memory::VideoMemory;
use super::psm::is_indexed;
use super::registers::{Tex0, TexClut};
use crate::core::config::ClutConfig;

mod alpha;
mod dispatch;
mod expand;
mod invalidate;
mod lanes;
mod load;
mod state;
#[cfg(test)]
mod tests;

pub use dispatch::ClutLoad;

use dispatch::WriteDispatch;
use state::{ReadState, WriteState};

/// Number of 16-bit entries in the CLUT buffer
pub const CLUT_ENTRIES: usize = 512;

pub(crate) type Palette = [u16; CLUT_ENTRIES];

/// GS CLUT buffer state
///
/// # Examples
///
/// ```
/// use gsclut::core::gs::{psm, Clut, LocalMemory, TexA, TexClut, Tex0};
///
/// let mut mem = LocalMemory::new();
/// mem.write_pixel32(0x100, 1, 1, 0, 0x80FF_0000);
///
/// let mut clut = Clut::new();
/// let tex0 = Tex0::default()
///     .with_psm(psm::PSMT4)
///     .with_cpsm(psm::PSMCT32)
///     .with_cbp(0x100)
///     .with_cld(1);
///
/// assert!(clut.load(tex0, TexClut::default(), &mem));
/// assert_eq!(clut.read32(tex0, TexA::default())[1], 0x80FF_0000);
/// ```
pub struct Clut {
    /// On-chip buffer, split as described in the module docs
    clut: Box<Palette>,

    /// Expanded 32-bit colors
    buffer32: Box<[u32; 256]>,

    /// Color pairs for 4-bit index palettes
    buffer64: Box<[u64; 256]>,

    write: WriteState,
    read: ReadState,

    /// CBP0/CBP1, the base pointer slots used by CLD 2-5
    cbp: [u32; 2],

    dispatch: WriteDispatch,
    config: ClutConfig,
}

impl Clut {
    /// Create a CLUT with the default configuration
    pub fn new() -> Self {
        Self::with_config(ClutConfig::default())
    }

    /// Create a CLUT with a custom configuration
    pub fn with_config(config: ClutConfig) -> Self {
        Self {
            clut: Box::new([0; CLUT_ENTRIES]),
            buffer32: Box::new([0; 256]),
            buffer64: Box::new([0; 256]),
            write: WriteState::new(),
            read: ReadState::new(),
            cbp: [0; 2],
            dispatch: WriteDispatch::new(),
            config,
        }
    }

    /// Reset to power-on state, keeping the configuration
    pub fn reset(&mut self) {
        self.clut.fill(0);
        self.buffer32.fill(0);
        self.buffer64.fill(0);
        self.write = WriteState::new();
        self.read = ReadState::new();
        self.cbp = [0; 2];
    }

    pub fn config(&self) -> &ClutConfig {
        &self.config
    }

    /// Raw CLUT buffer
    pub fn palette(&self) -> &[u16; CLUT_ENTRIES] {
        &self.clut
    }

    /// Colors produced by the last [`Clut::read32`]
    pub fn buffer32(&self) -> &[u32; 256] {
        &self.buffer32
    }

    /// Color pairs produced by the last 4-bit index expansion
    pub fn buffer64(&self) -> &[u64; 256] {
        &self.buffer64
    }

    /// Current CBP0/CBP1 slot values
    pub fn cbp_slots(&self) -> [u32; 2] {
        self.cbp
    }

    /// Load routine a draw with `tex0` would use
    pub fn routine(&self, tex0: Tex0) -> ClutLoad {
        self.dispatch.resolve(tex0)
    }

    /// Decide whether a draw reloads the CLUT
    ///
    /// Applies TEX0.CLD (which may update CBP0/CBP1) and then checks the
    /// registers against the last load. Non-indexed formats return false
    /// before touching the CBP slots.
    ///
    /// # Arguments
    ///
    /// * `tex0` - TEX0 of the draw
    /// * `texclut` - TEXCLUT of the draw (only compared for CSM2)
    ///
    /// # Returns
    ///
    /// true if [`Clut::write`] should be called for this draw
    pub fn write_test(&mut self, tex0: Tex0, texclut: TexClut) -> bool {
        if !is_indexed(tex0.psm()) {
            return false;
        }

        let cbp = tex0.cbp();
        match tex0.cld() {
            0 | 6 | 7 => return false,
            1 => {}
            2 => self.cbp[0] = cbp,
            3 => self.cbp[1] = cbp,
            4 => {
                if self.cbp[0] == cbp {
                    return false;
                }
                self.cbp[0] = cbp;
            }
            5 => {
                if self.cbp[1] == cbp {
                    return false;
                }
                self.cbp[1] = cbp;
            }
            _ => unreachable!(),
        }

        let dirty = self.write.is_dirty(tex0, texclut);
        log::debug!(
            "CLUT write test: cld={} cbp=0x{:04X} -> {}",
            tex0.cld(),
            cbp,
            if dirty { "reload" } else { "keep" }
        );
        dirty
    }

    /// Load the palette described by `tex0`/`texclut` from `mem`
    ///
    /// The registers become the new load snapshot and the expanded buffers
    /// are marked stale, even when the combination is undefined and nothing
    /// is copied.
    pub fn write(&mut self, tex0: Tex0, texclut: TexClut, mem: &dyn VideoMemory) {
        self.write.tex0 = tex0;
        self.write.texclut = texclut;
        self.read.dirty = true;
        self.write.dirty = false;

        let routine = self.dispatch.resolve(tex0);
        if routine == ClutLoad::Ignore {
            if self.config.log_ignored_writes {
                log::debug!(
                    "CLUT write ignored (psm: 0x{:02X}, cpsm: 0x{:X}, csm: {})",
                    tex0.psm(),
                    tex0.cpsm(),
                    tex0.csm()
                );
            }
            return;
        }

        log::trace!(
            "CLUT load {:?}: cbp=0x{:04X} csa={}",
            routine,
            tex0.cbp(),
            tex0.csa()
        );
        routine.execute(&mut self.clut, tex0, texclut, mem);
    }

    /// Run [`Clut::write_test`] and, if it passes, [`Clut::write`]
    ///
    /// # Returns
    ///
    /// true if the palette was reloaded
    pub fn load(&mut self, tex0: Tex0, texclut: TexClut, mem: &dyn VideoMemory) -> bool {
        if self.write_test(tex0, texclut) {
            self.write(tex0, texclut, mem);
            true
        } else {
            false
        }
    }
}

impl Default for Clut {
    fn default() -> Self {
        Self::new()
    }
}
