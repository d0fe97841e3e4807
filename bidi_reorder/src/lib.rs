// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bidirectional text reordering.
//!
//! `bidi_reorder` implements the parts of the Unicode Bidirectional Algorithm
//! ([UAX #9](https://www.unicode.org/reports/tr9/)) needed to display mixed left-to-right and
//! right-to-left text: paragraph segmentation, embedding level resolution and line reordering.
//! Bracket pairs (N0) and glyph mirroring (L4) are left to the caller.
//!
//! Directional character types come from a [`BidiClassSource`], usually a [`PropertyTable`]
//! loaded from an ICU4X data blob or from the data compiled into the binary.
//!
//! ```
//! # #[cfg(feature = "compiled_data")]
//! # fn main() -> Result<(), bidi_reorder::Error> {
//! use bidi_reorder::Session;
//!
//! let session = Session::compiled();
//! let analysis = session.analyze("א,ב,ג,a,b,c")?;
//! assert_eq!(analysis.paragraph_count(), 1);
//!
//! let paragraph = analysis.paragraph_at(0)?;
//! let visual = paragraph.reorder_line_string(paragraph.range_start(), paragraph.range_end())?;
//! assert_eq!(visual, "a,b,c,ג,ב,א");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "compiled_data"))]
//! # fn main() {}
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the Rust standard library.
//! - `compiled_data` (enabled by default): Enables [`Session::compiled`].
//! - `rayon`: Resolves the paragraphs of a text in parallel.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod error;
mod explicit;
mod implicit;
mod level;
mod paragraph;
mod reorder;
mod resolve;
mod sequence;
mod session;

#[cfg(test)]
mod tests;

pub use bidi_reorder_data::{BidiClass, BidiClassSource, PropertyTable, UnknownClass};

pub use error::{Error, ErrorKind};
pub use level::{Direction, Level, MAX_DEPTH};
pub use paragraph::split_paragraphs;
pub use reorder::reorder_visual;
pub use resolve::BidiResolver;
pub use session::{Analysis, Paragraph, Session};
