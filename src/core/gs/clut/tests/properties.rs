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

//! Property tests over arbitrary register values and palettes

use proptest::prelude::*;

use crate::core::gs::clut::expand::expand16_color;
use crate::core::gs::psm::{PSGPU24, PSMCT16, PSMCT16S, PSMCT32, PSMZ16, PSMZ32};
use crate::core::gs::{Clut, LocalMemory, Tex0, TexA, TexClut};
use super::{csm1_position, t4_tex0, t8_tex0};

fn non_indexed_psm() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![PSMCT32, 0x01, PSMCT16, PSMCT16S, PSGPU24, PSMZ32, PSMZ16])
}

proptest! {
    #[test]
    fn prop_repeated_registers_never_reload(tex0 in any::<u64>(), texclut in any::<u64>()) {
        let mem = LocalMemory::new();
        let mut clut = Clut::new();
        let (tex0, texclut) = (Tex0(tex0), TexClut(texclut));

        clut.load(tex0, texclut, &mem);
        prop_assert!(!clut.load(tex0, texclut, &mem));
        prop_assert!(!clut.load(tex0, texclut, &mem));
    }

    #[test]
    fn prop_cld_6_and_7_never_reload(
        draws in prop::collection::vec((any::<u64>(), any::<u64>(), 6u32..8), 1..32),
    ) {
        let mut clut = Clut::new();
        for (tex0, texclut, cld) in draws {
            clut.invalidate();
            let tex0 = Tex0(tex0).with_cld(cld);
            prop_assert!(!clut.write_test(tex0, TexClut(texclut)));
        }
        prop_assert_eq!(clut.cbp_slots(), [0, 0]);
    }

    #[test]
    fn prop_non_indexed_formats_keep_slots(
        draws in prop::collection::vec((any::<u64>(), non_indexed_psm()), 1..32),
    ) {
        let mut clut = Clut::new();
        for (tex0, psm) in draws {
            let tex0 = Tex0(tex0).with_psm(psm);
            prop_assert!(!clut.write_test(tex0, TexClut::default()));
        }
        prop_assert_eq!(clut.cbp_slots(), [0, 0]);
    }

    #[test]
    fn prop_cld_4_reloads_only_on_new_cbp(cbps in prop::collection::vec(0u32..0x4000, 1..16)) {
        let mem = LocalMemory::new();
        let mut clut = Clut::new();
        let mut slot = 0;
        for cbp in cbps {
            let reloaded = clut.load(t8_tex0(cbp).with_cld(4), TexClut::default(), &mem);
            prop_assert_eq!(reloaded, cbp != slot);
            slot = cbp;
            prop_assert_eq!(clut.cbp_slots()[0], slot);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_csm1_t32_i8_roundtrip(
        cbp in 0u32..0x4000,
        colors in prop::collection::vec(any::<u32>(), 256),
    ) {
        let mut mem = LocalMemory::new();
        for (n, &color) in colors.iter().enumerate() {
            let (x, y) = csm1_position(n as u32);
            mem.write_pixel32(cbp, 1, x, y, color);
        }

        let mut clut = Clut::new();
        let tex0 = t8_tex0(cbp);
        prop_assert!(clut.load(tex0, TexClut::default(), &mem));
        prop_assert_eq!(&clut.read32(tex0, TexA::default())[..], &colors[..]);
    }

    #[test]
    fn prop_csm1_t16_i4_roundtrip(
        cbp in 0u32..0x4000,
        csa in 0u32..32,
        colors in prop::collection::vec(any::<u16>(), 16),
        texa in any::<u64>(),
    ) {
        let mut mem = LocalMemory::new();
        for (n, &color) in colors.iter().enumerate() {
            let n = n as u32;
            mem.write_pixel16(cbp, 1, n & 7, n >> 3, color);
        }

        let mut clut = Clut::new();
        let tex0 = t4_tex0(cbp).with_cpsm(PSMCT16).with_csa(csa);
        let texa = TexA(texa);
        prop_assert!(clut.load(tex0, TexClut::default(), &mem));

        let expanded = clut.read32(tex0, texa);
        for (n, &color) in colors.iter().enumerate() {
            prop_assert_eq!(expanded[n], expand16_color(color, texa));
        }
    }
}
