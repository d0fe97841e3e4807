// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Analyzes a comma-joined sample of Hebrew and Latin letters, then prints the number of
//! paragraphs and the first paragraph in visual order.
//!
//! Directional properties come from the compiled ICU4X data, or from a postcard data blob passed
//! with `--data`. Set `RUST_LOG=debug` to see the engine's log output.

use std::path::PathBuf;

use anyhow::Context;
use bidi_reorder::{Level, Session};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about)]
struct Args {
    /// ICU4X data blob holding the `Bidi_Class` property.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Force a right-to-left paragraph level.
    #[arg(long, conflicts_with = "ltr")]
    rtl: bool,

    /// Force a left-to-right paragraph level.
    #[arg(long)]
    ltr: bool,

    /// Pieces of text, joined with commas.
    #[arg(default_values = ["א", "ב", "ג", "a", "b", "c"])]
    pieces: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let session = match &args.data {
        Some(path) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            log::info!("loaded {} bytes of property data", bytes.len());
            Session::try_from_bytes(&bytes)?
        }
        None => Session::compiled(),
    };

    let base_level = if args.rtl {
        Some(Level::RTL)
    } else if args.ltr {
        Some(Level::LTR)
    } else {
        None
    };

    let text = args.pieces.join(",");
    let analysis = session.analyze_with_base_level(&text, base_level)?;
    println!("Paragraphs: {}", analysis.paragraph_count());
    println!("Input:      {text}");
    if analysis.is_empty() {
        return Ok(());
    }

    let paragraph = analysis.paragraph_at(0)?;
    let visual = paragraph.reorder_line_string(paragraph.range_start(), paragraph.range_end())?;
    println!("Reordered:  {visual}");
    Ok(())
}
