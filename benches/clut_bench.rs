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


use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gsclut::core::gs::{psm, Clut, LocalMemory, TexA, TexClut, Tex0};

fn filled_memory() -> LocalMemory {
    let mut mem = LocalMemory::new();
    for y in 0..16 {
        for x in 0..16 {
            let n = y * 16 + x;
            mem.write_pixel32(0x100, 1, x, y, n.wrapping_mul(0x0103_0507));
            mem.write_pixel16(0x200, 1, x, y, n as u16 | 0x8000);
        }
    }
    mem
}

fn bench_load(c: &mut Criterion) {
    let mem = filled_memory();
    let mut group = c.benchmark_group("clut_load");

    let cases = [
        ("t32_i8", Tex0::default().with_psm(psm::PSMT8).with_cbp(0x100)),
        ("t32_i4", Tex0::default().with_psm(psm::PSMT4).with_cbp(0x100)),
        (
            "t16_i8",
            Tex0::default()
                .with_psm(psm::PSMT8)
                .with_cpsm(psm::PSMCT16)
                .with_cbp(0x200),
        ),
        (
            "csm2_t32",
            Tex0::default().with_psm(psm::PSMT8).with_cbp(0x100).with_csm(1),
        ),
    ];

    for (name, tex0) in cases {
        let texclut = TexClut::default().with_cbw(1);
        group.bench_with_input(BenchmarkId::from_parameter(name), &tex0, |b, &tex0| {
            let mut clut = Clut::new();
            b.iter(|| clut.write(black_box(tex0), texclut, &mem));
        });
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mem = filled_memory();
    let mut group = c.benchmark_group("clut_read32");

    for (name, cpsm) in [("ct32", psm::PSMCT32), ("ct16", psm::PSMCT16)] {
        let cbp = if cpsm == psm::PSMCT32 { 0x100 } else { 0x200 };
        let tex0 = Tex0::default()
            .with_psm(psm::PSMT8)
            .with_cpsm(cpsm)
            .with_cbp(cbp)
            .with_cld(1);

        group.bench_function(name, |b| {
            let mut clut = Clut::new();
            clut.load(tex0, TexClut::default(), &mem);
            b.iter(|| {
                // Force a full expansion every iteration
                clut.write(tex0, TexClut::default(), &mem);
                black_box(clut.read32(tex0, TexA::default().with_ta0(0x80))[255])
            });
        });
    }

    group.finish();
}

fn bench_write_test(c: &mut Criterion) {
    let mem = filled_memory();
    let tex0 = Tex0::default()
        .with_psm(psm::PSMT8)
        .with_cbp(0x100)
        .with_cld(1);

    c.bench_function("clut_write_test_clean", |b| {
        let mut clut = Clut::new();
        clut.load(tex0, TexClut::default(), &mem);
        b.iter(|| clut.write_test(black_box(tex0), TexClut::default()));
    });
}

criterion_group!(benches, bench_load, bench_read, bench_write_test);
criterion_main!(benches);
