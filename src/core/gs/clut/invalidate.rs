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

//! Invalidation after local memory writes
//!
//! A transfer that overwrites the palette source must force the next
//! reload-capable draw to reload, even if its registers did not change.

use super::super::psm::psm_info;
use super::Clut;

impl Clut {
    /// Force the next reload-capable draw to reload
    pub fn invalidate(&mut self) {
        self.write.dirty = true;
    }

    /// Invalidate if the palette source may overlap blocks `start..=end`
    ///
    /// The palette footprint is 4 blocks, halved for 16-bit colors and halved
    /// again for 4-bit index formats.
    pub fn invalidate_range(&mut self, start_block: u32, end_block: u32) {
        let tex0 = self.write.tex0;

        let mut blocks = 4;
        if psm_info(tex0.cpsm()).bpp == 16 {
            blocks >>= 1;
        }
        if psm_info(tex0.psm()).bpp == 4 {
            blocks >>= 1;
        }

        let cbp = tex0.cbp();
        if cbp + blocks >= start_block && cbp <= end_block {
            log::trace!(
                "CLUT invalidated by blocks 0x{:04X}-0x{:04X} (cbp=0x{:04X})",
                start_block,
                end_block,
                cbp
            );
            self.write.dirty = true;
        }
    }

    /// Invalidate if `block` lies in the same page as the palette source
    ///
    /// The whole page is checked so a palette slightly offset from a page
    /// boundary is not missed.
    pub fn invalidate_block(&mut self, block: u32) {
        if (block ^ self.write.tex0.cbp()) & !0x1F == 0 {
            self.write.dirty = true;
        }
    }
}
