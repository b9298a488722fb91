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

//! GS local memory
//!
//! The GS owns 4MB of local memory that is never addressed linearly by the
//! drawing engine. Memory is split into 8KB pages, pages into 32 blocks of
//! 256 bytes, and blocks into 4 columns. Each pixel storage mode arranges
//! blocks inside a page and pixels inside a block differently.
//!
//! # Layout
//!
//! ```text
//! PSMCT32:  page 64×32 pixels, block 8×8 pixels
//! PSMCT16:  page 64×64 pixels, block 16×8 pixels
//! PSMCT16S: page 64×64 pixels, block 16×8 pixels (different block order)
//! ```
//!
//! Buffer widths (`bw`) are in units of 64 pixels, base pointers (`bp`) in
//! blocks. Block numbers wrap at 0x4000 and addresses wrap at 4MB.
//!
//! The CLUT only consumes memory through the [`VideoMemory`] trait, so a
//! renderer with its own memory model can feed it directly.

use super::super::error::{ClutError, Result};

/// Block arrangement inside a PSMCT32 page, indexed by `[y / 8 % 4][x / 8 % 8]`
const BLOCK_TABLE_32: [[u32; 8]; 4] = [
    [0, 1, 4, 5, 16, 17, 20, 21],
    [2, 3, 6, 7, 18, 19, 22, 23],
    [8, 9, 12, 13, 24, 25, 28, 29],
    [10, 11, 14, 15, 26, 27, 30, 31],
];

/// Block arrangement inside a PSMCT16 page, indexed by `[y / 8 % 8][x / 16 % 4]`
const BLOCK_TABLE_16: [[u32; 4]; 8] = [
    [0, 2, 8, 10],
    [1, 3, 9, 11],
    [4, 6, 12, 14],
    [5, 7, 13, 15],
    [16, 18, 24, 26],
    [17, 19, 25, 27],
    [20, 22, 28, 30],
    [21, 23, 29, 31],
];

/// Block arrangement inside a PSMCT16S page, indexed by `[y / 8 % 8][x / 16 % 4]`
const BLOCK_TABLE_16S: [[u32; 4]; 8] = [
    [0, 2, 16, 18],
    [1, 3, 17, 19],
    [8, 10, 24, 26],
    [9, 11, 25, 27],
    [4, 6, 20, 22],
    [5, 7, 21, 23],
    [12, 14, 28, 30],
    [13, 15, 29, 31],
];

/// Word offset of a PSMCT32 pixel inside its block, indexed by `[y % 8][x % 8]`
const COLUMN_TABLE_32: [[u32; 8]; 8] = [
    [0, 1, 4, 5, 8, 9, 12, 13],
    [2, 3, 6, 7, 10, 11, 14, 15],
    [16, 17, 20, 21, 24, 25, 28, 29],
    [18, 19, 22, 23, 26, 27, 30, 31],
    [32, 33, 36, 37, 40, 41, 44, 45],
    [34, 35, 38, 39, 42, 43, 46, 47],
    [48, 49, 52, 53, 56, 57, 60, 61],
    [50, 51, 54, 55, 58, 59, 62, 63],
];

/// Halfword offset of a 16-bit pixel inside its block, indexed by `[y % 8][x % 16]`
const COLUMN_TABLE_16: [[u32; 16]; 8] = [
    [0, 2, 8, 10, 16, 18, 24, 26, 1, 3, 9, 11, 17, 19, 25, 27],
    [4, 6, 12, 14, 20, 22, 28, 30, 5, 7, 13, 15, 21, 23, 29, 31],
    [32, 34, 40, 42, 48, 50, 56, 58, 33, 35, 41, 43, 49, 51, 57, 59],
    [36, 38, 44, 46, 52, 54, 60, 62, 37, 39, 45, 47, 53, 55, 61, 63],
    [64, 66, 72, 74, 80, 82, 88, 90, 65, 67, 73, 75, 81, 83, 89, 91],
    [68, 70, 76, 78, 84, 86, 92, 94, 69, 71, 77, 79, 85, 87, 93, 95],
    [96, 98, 104, 106, 112, 114, 120, 122, 97, 99, 105, 107, 113, 115, 121, 123],
    [100, 102, 108, 110, 116, 118, 124, 126, 101, 103, 109, 111, 117, 119, 125, 127],
];

const BLOCK_MASK: u32 = 0x3FFF;

/// Word address of the first pixel of block `bp`
#[inline(always)]
pub const fn block_address32(bp: u32) -> u32 {
    (bp & BLOCK_MASK) << 6
}

/// Halfword address of the first pixel of block `bp`
#[inline(always)]
pub const fn block_address16(bp: u32) -> u32 {
    (bp & BLOCK_MASK) << 7
}

/// Word address of PSMCT32 pixel `(x, y)` in a buffer at `bp` with width `bw`
#[inline(always)]
pub const fn pixel_address32(bp: u32, bw: u32, x: u32, y: u32) -> u32 {
    let page = (y & !0x1F) * bw + ((x >> 1) & !0x1F);
    let block = (bp + page + BLOCK_TABLE_32[((y >> 3) & 3) as usize][((x >> 3) & 7) as usize])
        & BLOCK_MASK;
    (block << 6) + COLUMN_TABLE_32[(y & 7) as usize][(x & 7) as usize]
}

/// Halfword address of PSMCT16 pixel `(x, y)`
#[inline(always)]
pub const fn pixel_address16(bp: u32, bw: u32, x: u32, y: u32) -> u32 {
    let page = ((y >> 1) & !0x1F) * bw + ((x >> 1) & !0x1F);
    let block = (bp + page + BLOCK_TABLE_16[((y >> 3) & 7) as usize][((x >> 4) & 3) as usize])
        & BLOCK_MASK;
    (block << 7) + COLUMN_TABLE_16[(y & 7) as usize][(x & 15) as usize]
}

/// Halfword address of PSMCT16S pixel `(x, y)`
#[inline(always)]
pub const fn pixel_address16s(bp: u32, bw: u32, x: u32, y: u32) -> u32 {
    let page = ((y >> 1) & !0x1F) * bw + ((x >> 1) & !0x1F);
    let block = (bp + page + BLOCK_TABLE_16S[((y >> 3) & 7) as usize][((x >> 4) & 3) as usize])
        & BLOCK_MASK;
    (block << 7) + COLUMN_TABLE_16[(y & 7) as usize][(x & 15) as usize]
}

/// Read access to GS local memory
///
/// Implementors supply raw word and halfword reads; the swizzled pixel
/// accessors are provided on top of them. Addresses wrap at 4MB.
pub trait VideoMemory {
    /// Read the 32-bit word at word address `addr`
    fn read32(&self, addr: u32) -> u32;

    /// Read the 16-bit halfword at halfword address `addr`
    fn read16(&self, addr: u32) -> u16;

    /// Read a PSMCT32 pixel
    fn pixel32(&self, bp: u32, bw: u32, x: u32, y: u32) -> u32 {
        self.read32(pixel_address32(bp, bw, x, y))
    }

    /// Read a PSMCT16 pixel
    fn pixel16(&self, bp: u32, bw: u32, x: u32, y: u32) -> u16 {
        self.read16(pixel_address16(bp, bw, x, y))
    }

    /// Read a PSMCT16S pixel
    fn pixel16s(&self, bp: u32, bw: u32, x: u32, y: u32) -> u16 {
        self.read16(pixel_address16s(bp, bw, x, y))
    }

    /// Copy consecutive words starting at block `bp`
    fn read_block32(&self, bp: u32, out: &mut [u32]) {
        let base = block_address32(bp);
        for (i, word) in out.iter_mut().enumerate() {
            *word = self.read32(base.wrapping_add(i as u32));
        }
    }

    /// Copy consecutive halfwords starting at block `bp`
    fn read_block16(&self, bp: u32, out: &mut [u16]) {
        let base = block_address16(bp);
        for (i, half) in out.iter_mut().enumerate() {
            *half = self.read16(base.wrapping_add(i as u32));
        }
    }
}

/// 4MB GS local memory
///
/// Stored as a flat Vec of little-endian words in linear (block-ordered)
/// address order, the same layout as a raw GS memory dump.
///
/// # Examples
///
/// ```
/// use gsclut::core::gs::{LocalMemory, VideoMemory};
///
/// let mut mem = LocalMemory::new();
/// mem.write_pixel32(0, 1, 9, 3, 0x8040_2010);
/// assert_eq!(mem.pixel32(0, 1, 9, 3), 0x8040_2010);
/// ```
pub struct LocalMemory {
    vm: Vec<u32>,
}

impl LocalMemory {
    /// Memory size in bytes
    pub const SIZE: usize = 4 * 1024 * 1024;

    /// Memory size in 32-bit words
    pub const WORDS: usize = Self::SIZE / 4;

    const WORD_MASK: u32 = (Self::WORDS as u32) - 1;
    const HALF_MASK: u32 = (Self::WORDS as u32 * 2) - 1;

    /// Create zero-filled local memory
    pub fn new() -> Self {
        Self {
            vm: vec![0; Self::WORDS],
        }
    }

    /// Create local memory from a raw 4MB little-endian dump
    ///
    /// # Errors
    ///
    /// Returns [`ClutError::InvalidVramSize`] if `bytes` is not exactly 4MB.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE {
            return Err(ClutError::InvalidVramSize {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }

        let mut vm = vec![0u32; Self::WORDS];
        bytemuck::cast_slice_mut::<u32, u8>(&mut vm).copy_from_slice(bytes);
        for word in &mut vm {
            *word = u32::from_le(*word);
        }

        Ok(Self { vm })
    }

    /// Load a raw dump from disk
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Raw memory contents in native byte order
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vm)
    }

    /// Write the 32-bit word at word address `addr`
    #[inline(always)]
    pub fn write32(&mut self, addr: u32, value: u32) {
        self.vm[(addr & Self::WORD_MASK) as usize] = value;
    }

    /// Write the 16-bit halfword at halfword address `addr`
    #[inline(always)]
    pub fn write16(&mut self, addr: u32, value: u16) {
        let addr = addr & Self::HALF_MASK;
        let shift = (addr & 1) * 16;
        let word = &mut self.vm[(addr >> 1) as usize];
        *word = (*word & !(0xFFFF << shift)) | ((value as u32) << shift);
    }

    /// Write a PSMCT32 pixel
    pub fn write_pixel32(&mut self, bp: u32, bw: u32, x: u32, y: u32, color: u32) {
        self.write32(pixel_address32(bp, bw, x, y), color);
    }

    /// Write a PSMCT16 pixel
    pub fn write_pixel16(&mut self, bp: u32, bw: u32, x: u32, y: u32, color: u16) {
        self.write16(pixel_address16(bp, bw, x, y), color);
    }

    /// Write a PSMCT16S pixel
    pub fn write_pixel16s(&mut self, bp: u32, bw: u32, x: u32, y: u32, color: u16) {
        self.write16(pixel_address16s(bp, bw, x, y), color);
    }

    /// Clear all memory to zero
    pub fn clear(&mut self) {
        self.vm.fill(0);
    }
}

impl Default for LocalMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoMemory for LocalMemory {
    #[inline(always)]
    fn read32(&self, addr: u32) -> u32 {
        self.vm[(addr & Self::WORD_MASK) as usize]
    }

    #[inline(always)]
    fn read16(&self, addr: u32) -> u16 {
        let addr = addr & Self::HALF_MASK;
        (self.vm[(addr >> 1) as usize] >> ((addr & 1) * 16)) as u16
    }
}
