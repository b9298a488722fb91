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

//! GS pixel storage modes (PSM)
//!
//! The 6-bit PSM codes used by TEX0.PSM and the 4-bit codes used by
//! TEX0.CPSM, together with the per-format metadata the CLUT needs.
//!
//! # Indexed Formats
//!
//! The GS decides whether a texture is paletted by looking at the low 3 bits
//! of the PSM only:
//!
//! ```text
//! PSM & 7 == 3  -> 8-bit index  (PSMT8  = 0x13, PSMT8H  = 0x1B)
//! PSM & 7 == 4  -> 4-bit index  (PSMT4  = 0x14, PSMT4HL = 0x24, PSMT4HH = 0x2C)
//! PSM & 7 <  3  -> direct color (no CLUT reload)
//! ```

/// 32-bit RGBA
pub const PSMCT32: u32 = 0x00;
/// 24-bit RGB (alpha taken from TEXA.TA0)
pub const PSMCT24: u32 = 0x01;
/// 16-bit RGBA 5-5-5-1
pub const PSMCT16: u32 = 0x02;
/// 16-bit RGBA 5-5-5-1, alternate block arrangement
pub const PSMCT16S: u32 = 0x0A;
/// 24-bit video input format
pub const PSGPU24: u32 = 0x12;
/// 8-bit index
pub const PSMT8: u32 = 0x13;
/// 4-bit index
pub const PSMT4: u32 = 0x14;
/// 8-bit index stored in the upper 8 bits of a 32-bit pixel
pub const PSMT8H: u32 = 0x1B;
/// 4-bit index stored in bits 24-27 of a 32-bit pixel
pub const PSMT4HL: u32 = 0x24;
/// 4-bit index stored in bits 28-31 of a 32-bit pixel
pub const PSMT4HH: u32 = 0x2C;
/// 32-bit Z
pub const PSMZ32: u32 = 0x30;
/// 24-bit Z
pub const PSMZ24: u32 = 0x31;
/// 16-bit Z
pub const PSMZ16: u32 = 0x32;
/// 16-bit Z, alternate block arrangement
pub const PSMZ16S: u32 = 0x3A;

/// Storage metadata for one pixel storage mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsmInfo {
    /// Bits per pixel in memory
    pub bpp: u8,

    /// Bits per pixel that carry texel data (24 for CT24, 8 for T8H, ...)
    pub trbpp: u8,

    /// Palette size for indexed formats (0 for direct color)
    pub pal: u16,
}

impl PsmInfo {
    const DEFAULT: Self = Self {
        bpp: 32,
        trbpp: 32,
        pal: 0,
    };
}

/// Look up the storage metadata for a PSM code
///
/// Only the low 6 bits are significant. Undefined codes report the
/// 32-bit defaults, the same as the hardware tables leave them.
pub const fn psm_info(psm: u32) -> PsmInfo {
    match psm & 0x3F {
        PSMCT24 | PSMZ24 => PsmInfo {
            trbpp: 24,
            ..PsmInfo::DEFAULT
        },
        PSMCT16 | PSMCT16S | PSMZ16 | PSMZ16S => PsmInfo {
            bpp: 16,
            trbpp: 16,
            pal: 0,
        },
        PSGPU24 => PsmInfo {
            bpp: 16,
            trbpp: 24,
            pal: 0,
        },
        PSMT8 => PsmInfo {
            bpp: 8,
            trbpp: 8,
            pal: 256,
        },
        PSMT8H => PsmInfo {
            bpp: 32,
            trbpp: 8,
            pal: 256,
        },
        PSMT4 => PsmInfo {
            bpp: 4,
            trbpp: 4,
            pal: 16,
        },
        PSMT4HL | PSMT4HH => PsmInfo {
            bpp: 32,
            trbpp: 4,
            pal: 16,
        },
        _ => PsmInfo::DEFAULT,
    }
}

/// Check whether the GS treats a PSM code as paletted
#[inline(always)]
pub const fn is_indexed(psm: u32) -> bool {
    (psm & 0x7) >= 3
}

/// Check whether a PSM code is an 8-bit index format (PSMT8 / PSMT8H)
#[inline(always)]
pub const fn is_index8(psm: u32) -> bool {
    matches!(psm & 0x3F, PSMT8 | PSMT8H)
}

/// Check whether a PSM code is a 4-bit index format (PSMT4 / PSMT4HL / PSMT4HH)
#[inline(always)]
pub const fn is_index4(psm: u32) -> bool {
    matches!(psm & 0x3F, PSMT4 | PSMT4HL | PSMT4HH)
}
