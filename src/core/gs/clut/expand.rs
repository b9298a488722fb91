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

//! Palette expansion
//!
//! Converts the CLUT buffer into the 32-bit colors the rasterizer samples.
//!
//! # 16-bit Color Expansion
//!
//! ```text
//! Bit 0-4:   Red    -> bits 3-7
//! Bit 5-9:   Green  -> bits 11-15
//! Bit 10-14: Blue   -> bits 19-23
//! Bit 15:    Alpha select (0 = TEXA.TA0, 1 = TEXA.TA1) -> bits 24-31
//! ```
//!
//! With TEXA.AEM set, a color whose 16 bits are all zero expands to alpha 0.

use super::super::psm::{is_index4, is_index8, PSMCT16, PSMCT16S, PSMCT24, PSMCT32};
use super::super::registers::{Tex0, TexA};
use super::lanes::{sw16, Lanes16};
use super::{Clut, Palette, CLUT_ENTRIES};

const WRAP: usize = CLUT_ENTRIES - 1;

/// Last group start that still fits in the low half of the buffer
const LAST_GROUP: usize = 240;

#[inline(always)]
fn lanes_at(clut: &Palette, pos: usize) -> Lanes16 {
    let mut lanes = [0u16; 8];
    for (i, lane) in lanes.iter_mut().enumerate() {
        *lane = clut[(pos + i) & WRAP];
    }
    Lanes16(lanes)
}

/// Recombine 16 split entries at `base` into 32-bit colors
pub(crate) fn read_t32_i4(clut: &Palette, base: usize, dst: &mut [u32]) {
    let mut v0 = lanes_at(clut, base);
    let mut v1 = lanes_at(clut, base + 8);
    let mut v2 = lanes_at(clut, base + 256);
    let mut v3 = lanes_at(clut, base + 264);

    sw16(&mut v0, &mut v2, &mut v1, &mut v3);

    v0.store32(&mut dst[0..4]);
    v1.store32(&mut dst[4..8]);
    v2.store32(&mut dst[8..12]);
    v3.store32(&mut dst[12..16]);
}

/// Recombine 256 split entries starting at `offset`
///
/// Groups that would run past entry 255 repeat the last group instead of
/// wrapping around to the start of the buffer.
pub(crate) fn read_t32_i8(clut: &Palette, offset: usize, dst: &mut [u32; 256]) {
    for i in (0..256).step_by(16) {
        read_t32_i4(clut, (i + offset).min(LAST_GROUP), &mut dst[i..i + 16]);
    }
}

/// Expand one 16-bit color to 32 bits
#[inline(always)]
pub(crate) fn expand16_color(c: u16, texa: TexA) -> u32 {
    let c = c as u32;
    let rgb = ((c & 0x001F) << 3) | ((c & 0x03E0) << 6) | ((c & 0x7C00) << 9);

    let alpha = if texa.aem() && c == 0 {
        0
    } else if c & 0x8000 != 0 {
        texa.ta1()
    } else {
        texa.ta0()
    };

    rgb | ((alpha as u32) << 24)
}

/// Expand `dst.len()` 16-bit entries starting at `base`
pub(crate) fn expand16(clut: &Palette, base: usize, dst: &mut [u32], texa: TexA) {
    for (i, color) in dst.iter_mut().enumerate() {
        *color = expand16_color(clut[(base + i) & WRAP], texa);
    }
}

/// Build the 256-entry pair table of a 16-color palette
///
/// Entry `hi * 16 + lo` holds color `hi` in the upper word and color `lo`
/// in the lower word, so one byte of 4-bit texels fetches both colors.
pub(crate) fn expand64(src: &[u32], dst: &mut [u64; 256]) {
    for (hi, &high) in src[..16].iter().enumerate() {
        for (lo, &low) in src[..16].iter().enumerate() {
            dst[hi * 16 + lo] = ((high as u64) << 32) | low as u64;
        }
    }
}

impl Clut {
    /// Expand the CLUT buffer into 32-bit colors
    ///
    /// The expansion is skipped when neither a load nor a relevant TEX0/TEXA
    /// change happened since the last call. Only 256 entries (8-bit index)
    /// or 16 entries (4-bit index) of the returned buffer are meaningful.
    ///
    /// # Arguments
    ///
    /// * `tex0` - TEX0 of the draw (PSM, CPSM and CSA select the palette)
    /// * `texa` - TEXA of the draw (alpha for CT24 and 16-bit colors)
    pub fn read32(&mut self, tex0: Tex0, texa: TexA) -> &[u32; 256] {
        if self.read.is_dirty(tex0, texa) {
            self.read.tex0 = tex0;
            self.read.texa = texa;
            self.read.dirty = false;
            self.read.adirty = true;

            self.expand(tex0, texa);
        }

        &self.buffer32
    }

    fn expand(&mut self, tex0: Tex0, texa: TexA) {
        let psm = tex0.psm();

        match tex0.cpsm() {
            PSMCT32 | PSMCT24 => {
                let offset = ((tex0.csa() & 15) << 4) as usize;
                if is_index8(psm) {
                    read_t32_i8(&self.clut, offset, &mut self.buffer32);
                } else if is_index4(psm) {
                    read_t32_i4(&self.clut, offset, &mut self.buffer32[..16]);
                    self.expand_duplicates();
                }
            }
            PSMCT16 | PSMCT16S => {
                let offset = (tex0.csa() << 4) as usize;
                if is_index8(psm) {
                    expand16(&self.clut, offset, &mut self.buffer32[..], texa);
                } else if is_index4(psm) {
                    expand16(&self.clut, offset, &mut self.buffer32[..16], texa);
                    self.expand_duplicates();
                }
            }
            cpsm => log::trace!("CLUT read with unsupported CPSM 0x{:X}", cpsm),
        }

        log::trace!(
            "CLUT expanded: psm=0x{:02X} cpsm=0x{:X} csa={}",
            psm,
            tex0.cpsm(),
            tex0.csa()
        );
    }

    fn expand_duplicates(&mut self) {
        if self.config.duplicate_buffer {
            expand64(&self.buffer32[..], &mut self.buffer64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand16_color_channels() {
        let texa = TexA::default();
        assert_eq!(expand16_color(0x001F, texa), 0x0000_00F8);
        assert_eq!(expand16_color(0x03E0, texa), 0x0000_F800);
        assert_eq!(expand16_color(0x7C00, texa), 0x00F8_0000);
    }

    #[test]
    fn test_expand16_alpha_select() {
        let texa = TexA::default().with_ta0(0x20).with_ta1(0x90);
        assert_eq!(expand16_color(0x7FFF, texa), 0x20F8_F8F8);
        assert_eq!(expand16_color(0xFFFF, texa), 0x90F8_F8F8);
        // Without AEM black keeps TA0
        assert_eq!(expand16_color(0x0000, texa), 0x2000_0000);
    }

    #[test]
    fn test_expand16_aem_zero_is_transparent() {
        let texa = TexA::default().with_ta0(0x80).with_ta1(0x80).with_aem(true);
        assert_eq!(expand16_color(0x0000, texa), 0);
        // Only an all-zero color qualifies, bit 15 alone is not black
        assert_eq!(expand16_color(0x8000, texa), 0x8000_0000);
        assert_eq!(expand16_color(0x0001, texa), 0x8000_0008);
    }

    #[test]
    fn test_read_t32_i4_recombines_halves() {
        let mut clut = [0u16; CLUT_ENTRIES];
        for i in 0..16 {
            clut[32 + i] = i as u16;
            clut[32 + 256 + i] = 0x100 + i as u16;
        }

        let mut dst = [0u32; 16];
        read_t32_i4(&clut, 32, &mut dst);
        for (i, &c) in dst.iter().enumerate() {
            assert_eq!(c, ((0x100 + i as u32) << 16) | i as u32);
        }
    }

    #[test]
    fn test_read_t32_i8_clamps_last_group() {
        let mut clut = [0u16; CLUT_ENTRIES];
        for (i, entry) in clut[..256].iter_mut().enumerate() {
            *entry = i as u16;
        }

        let mut dst = [0u32; 256];
        read_t32_i8(&clut, 224, &mut dst);

        assert_eq!(dst[0], 224);
        assert_eq!(dst[16], 240);
        // Every later group repeats entries 240..256
        for group in 2..16 {
            assert_eq!(dst[group * 16], 240);
            assert_eq!(dst[group * 16 + 15], 255);
        }
    }

    #[test]
    fn test_expand16_wraps() {
        let mut clut = [0u16; CLUT_ENTRIES];
        clut[511] = 0x001F;
        clut[0] = 0x03E0;

        let mut dst = [0u32; 2];
        expand16(&clut, 511, &mut dst, TexA::default());
        assert_eq!(dst, [0xF8, 0xF800]);
    }

    #[test]
    fn test_expand64_pairs() {
        let src: Vec<u32> = (0..16).collect();
        let mut dst = [0u64; 256];
        expand64(&src, &mut dst);

        assert_eq!(dst[0], 0);
        assert_eq!(dst[0x12], (1u64 << 32) | 2);
        assert_eq!(dst[0xF3], (15u64 << 32) | 3);
    }
}
