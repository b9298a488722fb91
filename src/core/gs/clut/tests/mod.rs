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

//! Tests for the CLUT buffer

mod properties;

use crate::core::gs::psm::{PSMCT32, PSMT4, PSMT8};
use crate::core::gs::{LocalMemory, Tex0};

/// CSM1 palette position of 8-bit index entry `n` in a 16×16 CT32/CT16 image
pub(super) fn csm1_position(n: u32) -> (u32, u32) {
    let x = (n & 7) | ((n & 0x10) >> 1);
    let y = ((n & 8) >> 3) | ((n & 0xE0) >> 4);
    (x, y)
}

/// Deterministic, distinct test colors
pub(super) fn test_color(n: u32) -> u32 {
    n.wrapping_mul(0x0103_0507) ^ 0x8040_2010
}

/// Store a 256-entry 32-bit palette at `cbp` in CSM1 order
pub(super) fn store_palette32_i8(mem: &mut LocalMemory, cbp: u32, colors: &[u32; 256]) {
    for (n, &color) in colors.iter().enumerate() {
        let (x, y) = csm1_position(n as u32);
        mem.write_pixel32(cbp, 1, x, y, color);
    }
}

/// Store a 16-entry 32-bit palette at `cbp` in CSM1 order
pub(super) fn store_palette32_i4(mem: &mut LocalMemory, cbp: u32, colors: &[u32]) {
    for (n, &color) in colors[..16].iter().enumerate() {
        let n = n as u32;
        mem.write_pixel32(cbp, 1, n & 7, n >> 3, color);
    }
}

pub(super) fn palette32() -> [u32; 256] {
    let mut colors = [0u32; 256];
    for (n, color) in colors.iter_mut().enumerate() {
        *color = test_color(n as u32);
    }
    colors
}

/// 8-bit index, 32-bit color draw that always asks for a load
pub(super) fn t8_tex0(cbp: u32) -> Tex0 {
    Tex0::default()
        .with_psm(PSMT8)
        .with_cpsm(PSMCT32)
        .with_cbp(cbp)
        .with_cld(1)
}

pub(super) fn t4_tex0(cbp: u32) -> Tex0 {
    t8_tex0(cbp).with_psm(PSMT4)
}
