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

//! 128-bit lane shuffles
//!
//! The CLUT reorders entries in groups of eight 16-bit lanes. [`Lanes16`]
//! models one such register with plain arrays so that the unpack/swap
//! sequence stays identical on every target.
//!
//! # Unpack Semantics
//!
//! ```text
//! upl16(a, b) = a0 b0 a1 b1 a2 b2 a3 b3     (16-bit lanes, low half)
//! uph16(a, b) = a4 b4 a5 b5 a6 b6 a7 b7     (16-bit lanes, high half)
//! upl32(a, b) = A0 B0 A1 B1                 (32-bit lanes, low half)
//! uph32(a, b) = A2 B2 A3 B3                 (32-bit lanes, high half)
//! ```

/// Eight 16-bit lanes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Lanes16(pub [u16; 8]);

impl Lanes16 {
    /// Load eight halfwords
    #[inline(always)]
    pub fn load16(src: &[u16]) -> Self {
        let mut lanes = [0u16; 8];
        lanes.copy_from_slice(&src[..8]);
        Self(lanes)
    }

    /// Load four words, low halfword first
    #[inline(always)]
    pub fn load32(src: &[u32]) -> Self {
        let mut lanes = [0u16; 8];
        for (i, word) in src[..4].iter().enumerate() {
            lanes[i * 2] = *word as u16;
            lanes[i * 2 + 1] = (*word >> 16) as u16;
        }
        Self(lanes)
    }

    /// Store as four words, pairing adjacent lanes
    #[inline(always)]
    pub fn store32(self, dst: &mut [u32]) {
        for (i, word) in dst[..4].iter_mut().enumerate() {
            *word = self.0[i * 2] as u32 | ((self.0[i * 2 + 1] as u32) << 16);
        }
    }

    #[inline(always)]
    pub fn upl16(self, b: Self) -> Self {
        let (a, b) = (self.0, b.0);
        Self([a[0], b[0], a[1], b[1], a[2], b[2], a[3], b[3]])
    }

    #[inline(always)]
    pub fn uph16(self, b: Self) -> Self {
        let (a, b) = (self.0, b.0);
        Self([a[4], b[4], a[5], b[5], a[6], b[6], a[7], b[7]])
    }

    #[inline(always)]
    pub fn upl32(self, b: Self) -> Self {
        let (a, b) = (self.0, b.0);
        Self([a[0], a[1], b[0], b[1], a[2], a[3], b[2], b[3]])
    }

    #[inline(always)]
    pub fn uph32(self, b: Self) -> Self {
        let (a, b) = (self.0, b.0);
        Self([a[4], a[5], b[4], b[5], a[6], a[7], b[6], b[7]])
    }
}

/// Interleave two register pairs at 16-bit granularity
///
/// ```text
/// a, b, c, d  ->  upl16(a, b), upl16(c, d), uph16(a, b), uph16(c, d)
/// ```
///
/// The results land in `a`, `b`, `c`, `d` in that order.
#[inline(always)]
pub(crate) fn sw16(a: &mut Lanes16, b: &mut Lanes16, c: &mut Lanes16, d: &mut Lanes16) {
    let (e, f) = (*a, *c);
    *a = e.upl16(*b);
    *c = e.uph16(*b);
    *b = f.upl16(*d);
    *d = f.uph16(*d);
}

/// Interleave two register pairs at 32-bit granularity
#[inline(always)]
pub(crate) fn sw32(a: &mut Lanes16, b: &mut Lanes16, c: &mut Lanes16, d: &mut Lanes16) {
    let (e, f) = (*a, *c);
    *a = e.upl32(*b);
    *c = e.uph32(*b);
    *b = f.upl32(*d);
    *d = f.uph32(*d);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(start: u16) -> Lanes16 {
        let mut lanes = [0u16; 8];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = start + i as u16;
        }
        Lanes16(lanes)
    }

    #[test]
    fn test_load_store32() {
        let words = [0x0001_0000, 0x0003_0002, 0x0005_0004, 0x0007_0006];
        let lanes = Lanes16::load32(&words);
        assert_eq!(lanes, seq(0));

        let mut out = [0u32; 4];
        lanes.store32(&mut out);
        assert_eq!(out, words);
    }

    #[test]
    fn test_unpack16() {
        let (a, b) = (seq(0), seq(10));
        assert_eq!(a.upl16(b).0, [0, 10, 1, 11, 2, 12, 3, 13]);
        assert_eq!(a.uph16(b).0, [4, 14, 5, 15, 6, 16, 7, 17]);
    }

    #[test]
    fn test_unpack32() {
        let (a, b) = (seq(0), seq(10));
        assert_eq!(a.upl32(b).0, [0, 1, 10, 11, 2, 3, 12, 13]);
        assert_eq!(a.uph32(b).0, [4, 5, 14, 15, 6, 7, 16, 17]);
    }

    #[test]
    fn test_sw16_result_order() {
        let (mut a, mut b, mut c, mut d) = (seq(0), seq(10), seq(20), seq(30));
        sw16(&mut a, &mut b, &mut c, &mut d);

        assert_eq!(a.0, [0, 10, 1, 11, 2, 12, 3, 13]);
        assert_eq!(b.0, [20, 30, 21, 31, 22, 32, 23, 33]);
        assert_eq!(c.0, [4, 14, 5, 15, 6, 16, 7, 17]);
        assert_eq!(d.0, [24, 34, 25, 35, 26, 36, 27, 37]);
    }

    #[test]
    fn test_sw32_result_order() {
        let (mut a, mut b, mut c, mut d) = (seq(0), seq(10), seq(20), seq(30));
        sw32(&mut a, &mut b, &mut c, &mut d);

        assert_eq!(a.0, [0, 1, 10, 11, 2, 3, 12, 13]);
        assert_eq!(b.0, [20, 21, 30, 31, 22, 23, 32, 33]);
        assert_eq!(c.0, [4, 5, 14, 15, 6, 7, 16, 17]);
        assert_eq!(d.0, [24, 25, 34, 35, 26, 27, 36, 37]);
    }
}
