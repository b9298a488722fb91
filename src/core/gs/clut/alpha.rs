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

//! Alpha range of the expanded palette

use super::super::psm::psm_info;
use super::Clut;

/// Minimum and maximum alpha byte of `colors`
pub(crate) fn alpha_range(colors: &[u32]) -> (u8, u8) {
    colors
        .iter()
        .map(|&c| (c >> 24) as u8)
        .fold((u8::MAX, u8::MIN), |(amin, amax), a| {
            (amin.min(a), amax.max(a))
        })
}

impl Clut {
    /// Minimum and maximum alpha of the expanded palette
    ///
    /// CT24 palettes without alpha expansion report TEXA.TA0 for both bounds.
    /// Otherwise the range covers 256 entries for 8-bit index formats and 16
    /// entries for everything else. The result is cached until the next
    /// expansion.
    ///
    /// # Panics
    ///
    /// Panics if the palette was reloaded since the last [`Clut::read32`].
    pub fn alpha_min_max32(&mut self) -> (u8, u8) {
        assert!(
            !self.read.dirty,
            "CLUT alpha range requested before read32 expanded the palette"
        );

        if self.read.adirty {
            self.read.adirty = false;

            let tex0 = self.read.tex0;
            let texa = self.read.texa;

            let (amin, amax) = if psm_info(tex0.cpsm()).trbpp == 24 && !texa.aem() {
                (texa.ta0(), texa.ta0())
            } else if psm_info(tex0.psm()).pal == 256 {
                alpha_range(&self.buffer32[..])
            } else {
                alpha_range(&self.buffer32[..16])
            };

            self.read.amin = amin;
            self.read.amax = amax;
        }

        (self.read.amin, self.read.amax)
    }
}
