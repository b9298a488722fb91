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

//! Change tracking for the load and expansion stages

use super::super::psm::{psm_info, PSMCT24};
use super::super::registers::{Tex0, TexA, TexClut};

/// Register snapshot of the last CLUT load
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WriteState {
    pub tex0: Tex0,
    pub texclut: TexClut,
    pub dirty: bool,
}

impl WriteState {
    pub fn new() -> Self {
        Self {
            dirty: true,
            ..Default::default()
        }
    }

    /// Check whether `tex0`/`texclut` describe a different palette
    ///
    /// When they do not, the snapshot is refreshed with the new registers so
    /// that fields outside the tracked set follow the latest draw.
    pub fn is_dirty(&mut self, tex0: Tex0, texclut: TexClut) -> bool {
        let dirty = self.dirty
            || (self.tex0.0 ^ tex0.0) & Tex0::CLUT_MASK != 0
            || psm_info(self.tex0.psm()).bpp != psm_info(tex0.psm()).bpp
            || (tex0.csm() == 1 && self.texclut.low() != texclut.low());

        if !dirty {
            self.tex0 = tex0;
            self.texclut = texclut;
        }

        dirty
    }
}

/// Register snapshot of the last palette expansion
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ReadState {
    pub tex0: Tex0,
    pub texa: TexA,
    pub dirty: bool,
    /// Alpha range needs recomputing
    pub adirty: bool,
    pub amin: u8,
    pub amax: u8,
}

impl ReadState {
    pub fn new() -> Self {
        Self {
            dirty: true,
            adirty: true,
            ..Default::default()
        }
    }

    /// Check whether `tex0`/`texa` produce a different expanded palette
    ///
    /// TEXA only matters for formats that take alpha from it: TA0/AEM for
    /// CT24 and TA0/TA1/AEM for the 16-bit formats.
    pub fn is_dirty(&mut self, tex0: Tex0, texa: TexA) -> bool {
        let mut dirty = self.dirty
            || (self.tex0.0 ^ tex0.0) & Tex0::CLUT_MASK != 0
            || psm_info(self.tex0.psm()).bpp != psm_info(tex0.psm()).bpp;

        if !dirty {
            let cpsm = tex0.cpsm();
            if cpsm == PSMCT24 {
                dirty = (self.texa.0 ^ texa.0) & TexA::MASK_24 != 0;
            } else if cpsm >= 2 {
                dirty = (self.texa.0 ^ texa.0) & TexA::MASK_16 != 0;
            }
        }

        if !dirty {
            self.tex0 = tex0;
            self.texa = texa;
        }

        dirty
    }
}
