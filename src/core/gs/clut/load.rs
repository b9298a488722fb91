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

//! CLUT load routines
//!
//! Each routine copies one palette from local memory into the CLUT buffer.
//!
//! # CSM1
//!
//! The palette is stored as a swizzled 16×16 (8-bit index) or 8×2 (4-bit
//! index) image whose first block sits at CBP. The block is copied in memory
//! order and reordered with lane shuffles so that entry `n` ends up at
//! position `n` of the buffer.
//!
//! # CSM2
//!
//! The palette is a single row of pixels at (COU × 16, COV) in a buffer of
//! width CBW, read one pixel at a time in logical order.
//!
//! 32-bit colors are split: the low halfword goes to `base + i`, the high
//! halfword to `base + i + 256`. All positions wrap inside the buffer.

use super::super::memory::VideoMemory;
use super::super::registers::{Tex0, TexClut};
use super::lanes::{sw16, sw32, Lanes16};
use super::{Palette, CLUT_ENTRIES};

const WRAP: usize = CLUT_ENTRIES - 1;

/// Source word order for each 16-entry group of an 8-bit CSM1 palette
///
/// Row `r` covers the 16 words that follow `CLUT_TABLE_T32_I8[r * 16]`
/// inside one half (128 words) of the palette block pair.
#[rustfmt::skip]
pub(crate) const CLUT_TABLE_T32_I8: [u8; 128] = [
    0, 1, 4, 5, 8, 9, 12, 13, 2, 3, 6, 7, 10, 11, 14, 15,
    64, 65, 68, 69, 72, 73, 76, 77, 66, 67, 70, 71, 74, 75, 78, 79,
    16, 17, 20, 21, 24, 25, 28, 29, 18, 19, 22, 23, 26, 27, 30, 31,
    80, 81, 84, 85, 88, 89, 92, 93, 82, 83, 86, 87, 90, 91, 94, 95,
    32, 33, 36, 37, 40, 41, 44, 45, 34, 35, 38, 39, 42, 43, 46, 47,
    96, 97, 100, 101, 104, 105, 108, 109, 98, 99, 102, 103, 106, 107, 110, 111,
    48, 49, 52, 53, 56, 57, 60, 61, 50, 51, 54, 55, 58, 59, 62, 63,
    112, 113, 116, 117, 120, 121, 124, 125, 114, 115, 118, 119, 122, 123, 126, 127,
];

/// Source halfword for each entry of a 16-bit, 4-bit index CSM1 palette
pub(crate) const CLUT_TABLE_T16_I4: [u8; 16] = [
    0, 2, 8, 10, 16, 18, 24, 26, 4, 6, 12, 14, 20, 22, 28, 30,
];

#[inline(always)]
fn store(clut: &mut Palette, pos: usize, lanes: Lanes16) {
    for (i, &half) in lanes.0.iter().enumerate() {
        clut[(pos + i) & WRAP] = half;
    }
}

/// Reorder one 16-word group and store it split into both buffer halves
pub(crate) fn write_t32_i4_csm1(src: &[u32], clut: &mut Palette, base: usize) {
    let mut v0 = Lanes16::load32(&src[0..4]);
    let mut v1 = Lanes16::load32(&src[4..8]);
    let mut v2 = Lanes16::load32(&src[8..12]);
    let mut v3 = Lanes16::load32(&src[12..16]);

    sw16(&mut v0, &mut v1, &mut v2, &mut v3);
    sw32(&mut v0, &mut v1, &mut v2, &mut v3);
    sw16(&mut v0, &mut v2, &mut v1, &mut v3);

    store(clut, base, v0);
    store(clut, base + 8, v2);
    store(clut, base + 256, v1);
    store(clut, base + 264, v3);
}

/// Load a 256-entry 32-bit palette, starting at group `first`
///
/// Groups before `first` keep their old contents.
pub(crate) fn write_t32_i8_csm1(src: &[u32; 256], clut: &mut Palette, first: usize) {
    for group in first..16 {
        let off = group << 4;
        let s = CLUT_TABLE_T32_I8[off & 0x70] as usize | (off & 0x80);
        write_t32_i4_csm1(&src[s..s + 16], clut, off);
    }
}

/// Load a 256-entry 16-bit palette at buffer position `base`
pub(crate) fn write_t16_i8_csm1(src: &[u16; 256], clut: &mut Palette, base: usize) {
    for i in (0..32).step_by(4) {
        let mut v0 = Lanes16::load16(&src[i * 8..]);
        let mut v1 = Lanes16::load16(&src[(i + 1) * 8..]);
        let mut v2 = Lanes16::load16(&src[(i + 2) * 8..]);
        let mut v3 = Lanes16::load16(&src[(i + 3) * 8..]);

        sw16(&mut v0, &mut v1, &mut v2, &mut v3);
        sw32(&mut v0, &mut v1, &mut v2, &mut v3);
        sw16(&mut v0, &mut v2, &mut v1, &mut v3);

        store(clut, base + i * 8, v0);
        store(clut, base + (i + 1) * 8, v2);
        store(clut, base + (i + 2) * 8, v1);
        store(clut, base + (i + 3) * 8, v3);
    }
}

/// Load a 16-entry 16-bit palette at buffer position `base`
pub(crate) fn write_t16_i4_csm1(src: &[u16; 32], clut: &mut Palette, base: usize) {
    for (i, &s) in CLUT_TABLE_T16_I4.iter().enumerate() {
        clut[(base + i) & WRAP] = src[s as usize];
    }
}

/// Load `count` 32-bit entries from a CSM2 pixel row
pub(crate) fn write_32_csm2(
    mem: &dyn VideoMemory,
    tex0: Tex0,
    texclut: TexClut,
    clut: &mut Palette,
    count: usize,
) {
    let base = ((tex0.csa() & 15) << 4) as usize;
    let x0 = texclut.cou() << 4;
    for i in 0..count {
        let c = mem.pixel32(tex0.cbp(), texclut.cbw(), x0 + i as u32, texclut.cov());
        clut[(base + i) & WRAP] = c as u16;
        clut[(base + i + 256) & WRAP] = (c >> 16) as u16;
    }
}

/// Load `count` 16-bit entries from a CSM2 pixel row
///
/// `pixel` selects the 16-bit storage layout (PSMCT16 or PSMCT16S).
pub(crate) fn write_16_csm2(
    pixel: impl Fn(u32, u32, u32, u32) -> u16,
    tex0: Tex0,
    texclut: TexClut,
    clut: &mut Palette,
    count: usize,
) {
    let base = (tex0.csa() << 4) as usize;
    let x0 = texclut.cou() << 4;
    for i in 0..count {
        clut[(base + i) & WRAP] = pixel(tex0.cbp(), texclut.cbw(), x0 + i as u32, texclut.cov());
    }
}
