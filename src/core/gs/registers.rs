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

//! GS register type definitions
//!
//! This module contains the GIF registers consumed by the CLUT: TEX0 (texture
//! and CLUT setup), TEXCLUT (CSM2 CLUT position) and TEXA (alpha expansion).
//! Each register is kept as its raw 64-bit value so that change detection can
//! compare whole bit ranges with a mask, exactly like the hardware latches.

use serde::{Deserialize, Serialize};

#[inline(always)]
const fn field(value: u64, shift: u32, bits: u32) -> u32 {
    ((value >> shift) & ((1u64 << bits) - 1)) as u32
}

#[inline(always)]
const fn set_field(value: u64, shift: u32, bits: u32, v: u32) -> u64 {
    let mask = ((1u64 << bits) - 1) << shift;
    (value & !mask) | (((v as u64) << shift) & mask)
}

/// TEX0 register (texture information setting)
///
/// # Register Format
///
/// ```text
///   Bit 0-13:  TBP0  Texture base pointer (blocks)
///   Bit 14-19: TBW   Texture buffer width (64 pixel units)
///   Bit 20-25: PSM   Texture pixel storage mode
///   Bit 26-29: TW    Texture width (log2)
///   Bit 30-33: TH    Texture height (log2)
///   Bit 34:    TCC   Texture color component
///   Bit 35-36: TFX   Texture function
///   Bit 37-50: CBP   CLUT buffer base pointer (blocks)
///   Bit 51-54: CPSM  CLUT pixel storage mode
///   Bit 55:    CSM   CLUT storage mode (0=CSM1, 1=CSM2)
///   Bit 56-60: CSA   CLUT entry offset (16 entry units)
///   Bit 61-63: CLD   CLUT buffer load control
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tex0(pub u64);

impl Tex0 {
    /// Bits 37-60: CBP, CPSM, CSM and CSA
    pub const CLUT_MASK: u64 = 0x1FFF_FFE0_0000_0000;

    pub const fn tbp0(self) -> u32 {
        field(self.0, 0, 14)
    }

    pub const fn tbw(self) -> u32 {
        field(self.0, 14, 6)
    }

    pub const fn psm(self) -> u32 {
        field(self.0, 20, 6)
    }

    pub const fn cbp(self) -> u32 {
        field(self.0, 37, 14)
    }

    pub const fn cpsm(self) -> u32 {
        field(self.0, 51, 4)
    }

    pub const fn csm(self) -> u32 {
        field(self.0, 55, 1)
    }

    pub const fn csa(self) -> u32 {
        field(self.0, 56, 5)
    }

    pub const fn cld(self) -> u32 {
        field(self.0, 61, 3)
    }

    pub const fn with_tbp0(self, tbp0: u32) -> Self {
        Self(set_field(self.0, 0, 14, tbp0))
    }

    pub const fn with_psm(self, psm: u32) -> Self {
        Self(set_field(self.0, 20, 6, psm))
    }

    pub const fn with_cbp(self, cbp: u32) -> Self {
        Self(set_field(self.0, 37, 14, cbp))
    }

    pub const fn with_cpsm(self, cpsm: u32) -> Self {
        Self(set_field(self.0, 51, 4, cpsm))
    }

    pub const fn with_csm(self, csm: u32) -> Self {
        Self(set_field(self.0, 55, 1, csm))
    }

    pub const fn with_csa(self, csa: u32) -> Self {
        Self(set_field(self.0, 56, 5, csa))
    }

    pub const fn with_cld(self, cld: u32) -> Self {
        Self(set_field(self.0, 61, 3, cld))
    }
}

/// TEXCLUT register (CLUT position for CSM2)
///
/// # Register Format
///
/// ```text
///   Bit 0-5:   CBW  CLUT buffer width (64 pixel units)
///   Bit 6-11:  COU  CLUT offset U (16 pixel units)
///   Bit 12-21: COV  CLUT offset V (pixels)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TexClut(pub u64);

impl TexClut {
    pub const fn cbw(self) -> u32 {
        field(self.0, 0, 6)
    }

    pub const fn cou(self) -> u32 {
        field(self.0, 6, 6)
    }

    pub const fn cov(self) -> u32 {
        field(self.0, 12, 10)
    }

    /// Low 32 bits, the part the CSM2 change check compares
    pub const fn low(self) -> u32 {
        self.0 as u32
    }

    pub const fn with_cbw(self, cbw: u32) -> Self {
        Self(set_field(self.0, 0, 6, cbw))
    }

    pub const fn with_cou(self, cou: u32) -> Self {
        Self(set_field(self.0, 6, 6, cou))
    }

    pub const fn with_cov(self, cov: u32) -> Self {
        Self(set_field(self.0, 12, 10, cov))
    }
}

/// TEXA register (alpha expansion for 24-bit and 16-bit colors)
///
/// # Register Format
///
/// ```text
///   Bit 0-7:   TA0  Alpha for CT24 texels and 16-bit texels with bit 15 clear
///   Bit 15:    AEM  Alpha expansion mode (1 = black texels become transparent)
///   Bit 32-39: TA1  Alpha for 16-bit texels with bit 15 set
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TexA(pub u64);

impl TexA {
    /// AEM and TA0, the fields a CT24 palette depends on
    pub const MASK_24: u64 = 0x80FF;

    /// TA1, AEM and TA0, the fields a 16-bit palette depends on
    pub const MASK_16: u64 = 0xFF_0000_80FF;

    pub const fn ta0(self) -> u8 {
        field(self.0, 0, 8) as u8
    }

    pub const fn aem(self) -> bool {
        field(self.0, 15, 1) != 0
    }

    pub const fn ta1(self) -> u8 {
        field(self.0, 32, 8) as u8
    }

    pub const fn with_ta0(self, ta0: u8) -> Self {
        Self(set_field(self.0, 0, 8, ta0 as u32))
    }

    pub const fn with_aem(self, aem: bool) -> Self {
        Self(set_field(self.0, 15, 1, aem as u32))
    }

    pub const fn with_ta1(self, ta1: u8) -> Self {
        Self(set_field(self.0, 32, 8, ta1 as u32))
    }
}
