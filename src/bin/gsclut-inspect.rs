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

//! gsclut-inspect: load a palette from a GS memory dump and print it
//!
//! ```text
//! gsclut-inspect vram.bin --tex0 0x2000200001300000 --texa 0x8000000080
//! gsclut-inspect vram.bin --state draw.toml --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use gsclut::core::config::parse_hex;
use gsclut::core::gs::{psm, Clut, ClutLoad, LocalMemory};
use gsclut::core::{ClutConfig, DrawState};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Inspect a GS CLUT load from a local memory dump")]
struct Args {
    /// Raw 4MB GS local memory dump
    vram: PathBuf,

    /// TOML file with the draw registers (tex0, texclut, texa)
    #[arg(long)]
    state: Option<PathBuf>,

    /// TEX0 value in hex, overrides the state file
    #[arg(long, value_parser = parse_hex)]
    tex0: Option<u64>,

    /// TEXCLUT value in hex, overrides the state file
    #[arg(long, value_parser = parse_hex)]
    texclut: Option<u64>,

    /// TEXA value in hex, overrides the state file
    #[arg(long, value_parser = parse_hex)]
    texa: Option<u64>,

    /// CLUT configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Serialize)]
struct Report {
    draw: DrawState,
    routine: ClutLoad,
    reloaded: bool,
    alpha_min: u8,
    alpha_max: u8,
    colors: Vec<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut draw = match &args.state {
        Some(path) => DrawState::load(path)?,
        None => DrawState::default(),
    };
    draw.tex0 = args.tex0.unwrap_or(draw.tex0);
    draw.texclut = args.texclut.unwrap_or(draw.texclut);
    draw.texa = args.texa.unwrap_or(draw.texa);

    let config = match &args.config {
        Some(path) => ClutConfig::load(path)?,
        None => ClutConfig::default(),
    };

    log::info!("Loading VRAM dump: {}", args.vram.display());
    let mem = LocalMemory::load(&args.vram)?;

    let mut clut = Clut::with_config(config);
    let tex0 = draw.tex0();
    let routine = clut.routine(tex0);
    let reloaded = clut.load(tex0, draw.texclut(), &mem);
    if !reloaded {
        log::warn!(
            "Registers do not trigger a CLUT load (psm: 0x{:02X}, cld: {})",
            tex0.psm(),
            tex0.cld()
        );
    }

    let count = psm::psm_info(tex0.psm()).pal as usize;
    let colors = clut.read32(tex0, draw.texa())[..count].to_vec();
    let (alpha_min, alpha_max) = clut.alpha_min_max32();

    let report = Report {
        draw,
        routine,
        reloaded,
        alpha_min,
        alpha_max,
        colors,
    };

    print_report(&report, args.format)?;

    Ok(())
}

fn print_report(report: &Report, format: Format) -> gsclut::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
        Format::Text => print_text(report),
    }
    Ok(())
}

fn print_text(report: &Report) {
    println!("TEX0:     0x{:016X}", report.draw.tex0);
    println!("TEXCLUT:  0x{:016X}", report.draw.texclut);
    println!("TEXA:     0x{:016X}", report.draw.texa);
    println!("Routine:  {:?}", report.routine);
    println!("Reloaded: {}", report.reloaded);
    println!(
        "Alpha:    0x{:02X}-0x{:02X}",
        report.alpha_min, report.alpha_max
    );

    for (row, chunk) in report.colors.chunks(8).enumerate() {
        let line: Vec<String> = chunk.iter().map(|c| format!("{:08X}", c)).collect();
        println!("{:3}: {}", row * 8, line.join(" "));
    }
}
