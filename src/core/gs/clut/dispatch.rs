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

//! Load routine dispatch
//!
//! The routine for a load is selected by `[CSM][CPSM][PSM]`. The table is
//! built once per [`Clut`](super::Clut) and every slot holds a routine, so an
//! unsupported combination simply resolves to [`ClutLoad::Ignore`].
//!
//! # Table Contents
//!
//! ```text
//! CSM1: PSM & 7 == 3 -> 8-bit index routine for CPSM
//!       PSM & 7 == 4 -> 4-bit index routine for CPSM
//! CSM2: PSMT8/PSMT8H            -> 256 entries
//!       PSMT4/PSMT4HL/PSMT4HH   -> 16 entries
//! CPSM: PSMCT32/PSMCT24 (32-bit), PSMCT16, PSMCT16S
//! ```

use serde::Serialize;

use super::super::memory::VideoMemory;
use super::super::psm::{
    PSMCT16, PSMCT16S, PSMCT24, PSMCT32, PSMT4, PSMT4HH, PSMT4HL, PSMT8, PSMT8H,
};
use super::super::registers::{Tex0, TexClut};
use super::load;
use super::Palette;

/// A CLUT load routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClutLoad {
    /// Undefined CSM/CPSM/PSM combination, nothing is loaded
    Ignore,
    /// 32-bit colors, 256 entries, CSM1
    T32I8,
    /// 32-bit colors, 16 entries, CSM1
    T32I4,
    /// PSMCT16 colors, 256 entries, CSM1
    T16I8,
    /// PSMCT16 colors, 16 entries, CSM1
    T16I4,
    /// PSMCT16S colors, 256 entries, CSM1
    T16SI8,
    /// PSMCT16S colors, 16 entries, CSM1
    T16SI4,
    /// 32-bit colors from a CSM2 pixel row
    Csm2T32 { entries: u16 },
    /// PSMCT16 colors from a CSM2 pixel row
    Csm2T16 { entries: u16 },
    /// PSMCT16S colors from a CSM2 pixel row
    Csm2T16S { entries: u16 },
}

impl ClutLoad {
    /// Number of entries the routine loads (0 for [`ClutLoad::Ignore`])
    pub fn entries(self) -> usize {
        match self {
            ClutLoad::Ignore => 0,
            ClutLoad::T32I8 | ClutLoad::T16I8 | ClutLoad::T16SI8 => 256,
            ClutLoad::T32I4 | ClutLoad::T16I4 | ClutLoad::T16SI4 => 16,
            ClutLoad::Csm2T32 { entries }
            | ClutLoad::Csm2T16 { entries }
            | ClutLoad::Csm2T16S { entries } => entries as usize,
        }
    }

    /// Run the routine against `mem`, filling `clut`
    pub(crate) fn execute(
        self,
        clut: &mut Palette,
        tex0: Tex0,
        texclut: TexClut,
        mem: &dyn VideoMemory,
    ) {
        let cbp = tex0.cbp();
        match self {
            ClutLoad::Ignore => {}
            ClutLoad::T32I8 => {
                let mut src = [0u32; 256];
                mem.read_block32(cbp, &mut src);
                load::write_t32_i8_csm1(&src, clut, (tex0.csa() & 15) as usize);
            }
            ClutLoad::T32I4 => {
                let mut src = [0u32; 16];
                mem.read_block32(cbp, &mut src);
                load::write_t32_i4_csm1(&src, clut, ((tex0.csa() & 15) << 4) as usize);
            }
            ClutLoad::T16I8 | ClutLoad::T16SI8 => {
                let mut src = [0u16; 256];
                mem.read_block16(cbp, &mut src);
                load::write_t16_i8_csm1(&src, clut, (tex0.csa() << 4) as usize);
            }
            ClutLoad::T16I4 | ClutLoad::T16SI4 => {
                let mut src = [0u16; 32];
                mem.read_block16(cbp, &mut src);
                load::write_t16_i4_csm1(&src, clut, (tex0.csa() << 4) as usize);
            }
            ClutLoad::Csm2T32 { entries } => {
                load::write_32_csm2(mem, tex0, texclut, clut, entries as usize);
            }
            ClutLoad::Csm2T16 { entries } => {
                load::write_16_csm2(
                    |bp, bw, x, y| mem.pixel16(bp, bw, x, y),
                    tex0,
                    texclut,
                    clut,
                    entries as usize,
                );
            }
            ClutLoad::Csm2T16S { entries } => {
                load::write_16_csm2(
                    |bp, bw, x, y| mem.pixel16s(bp, bw, x, y),
                    tex0,
                    texclut,
                    clut,
                    entries as usize,
                );
            }
        }
    }
}

/// `[CSM][CPSM][PSM]` lookup table of load routines
pub(crate) struct WriteDispatch {
    table: Box<[[[ClutLoad; 64]; 16]; 2]>,
}

impl WriteDispatch {
    pub fn new() -> Self {
        let mut table = Box::new([[[ClutLoad::Ignore; 64]; 16]; 2]);

        for psm in 0..64 {
            let (eight, four) = match psm & 7 {
                3 => (true, false),
                4 => (false, true),
                _ => continue,
            };
            let csm1 = &mut table[0];
            if eight {
                csm1[PSMCT32 as usize][psm] = ClutLoad::T32I8;
                csm1[PSMCT24 as usize][psm] = ClutLoad::T32I8;
                csm1[PSMCT16 as usize][psm] = ClutLoad::T16I8;
                csm1[PSMCT16S as usize][psm] = ClutLoad::T16SI8;
            }
            if four {
                csm1[PSMCT32 as usize][psm] = ClutLoad::T32I4;
                csm1[PSMCT24 as usize][psm] = ClutLoad::T32I4;
                csm1[PSMCT16 as usize][psm] = ClutLoad::T16I4;
                csm1[PSMCT16S as usize][psm] = ClutLoad::T16SI4;
            }
        }

        let csm2 = &mut table[1];
        for (psm, entries) in [
            (PSMT8, 256),
            (PSMT8H, 256),
            (PSMT4, 16),
            (PSMT4HL, 16),
            (PSMT4HH, 16),
        ] {
            let psm = psm as usize;
            csm2[PSMCT32 as usize][psm] = ClutLoad::Csm2T32 { entries };
            csm2[PSMCT24 as usize][psm] = ClutLoad::Csm2T32 { entries };
            csm2[PSMCT16 as usize][psm] = ClutLoad::Csm2T16 { entries };
            csm2[PSMCT16S as usize][psm] = ClutLoad::Csm2T16S { entries };
        }

        Self { table }
    }

    /// Select the routine for the CLUT fields of `tex0`
    #[inline(always)]
    pub fn resolve(&self, tex0: Tex0) -> ClutLoad {
        self.table[tex0.csm() as usize][tex0.cpsm() as usize][tex0.psm() as usize]
    }
}
