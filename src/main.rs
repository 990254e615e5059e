// Copyright (c) 2026 bin2verilog Authors.
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

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use bin2verilog::format::{DEFAULT_LABEL_DIGITS, MAX_LABEL_DIGITS};
use bin2verilog::utils::DEFAULT_INPUT;
use bin2verilog::{debug, display_path, Converter, LineStyle};

/// Translate an assembler binary into lines for a Verilog case statement
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Binary of little-endian 32-bit instruction words
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Hex digits in each case label
    #[arg(
        short = 'w',
        long = "label-digits",
        default_value_t = DEFAULT_LABEL_DIGITS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_LABEL_DIGITS as i64)
    )]
    label_digits: u32,

    /// Emit Verilog sized literals (8'h00 / 32'b...)
    #[arg(short = 's', long = "sized-literals", default_value_t = false)]
    sized_literals: bool,

    /// Enable debug output
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    debug::set_debug(args.debug);
    let _logger = debug::init_logging().context("Failed to start logger")?;

    let style = if args.sized_literals {
        LineStyle::Sized
    } else {
        LineStyle::Plain
    };
    let converter = Converter::new()
        .with_label_digits(args.label_digits)?
        .with_style(style);

    let shown = display_path(&args.input);
    log::debug!("Reading {}", shown);
    let input = File::open(&args.input).with_context(|| format!("Failed to open {}", shown))?;

    // The file is closed when `input` is dropped inside convert_to, on every path
    let stdout = io::stdout();
    let summary = converter
        .convert_to(input, stdout.lock())
        .with_context(|| format!("Failed to convert {}", shown))?;

    log::debug!(
        "{} record(s), {} trailing byte(s) dropped",
        summary.records,
        summary.trailing_bytes
    );
    Ok(())
}
