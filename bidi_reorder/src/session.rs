// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bidi session: text analysis and per-paragraph queries.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use bidi_reorder_data::{BidiClassSource, PropertyTable};
use unicode_bidi::BidiClass;

use crate::level::{Direction, Level};
use crate::paragraph::split_paragraphs;
use crate::reorder::{line_levels, reorder_visual};
use crate::resolve::BidiResolver;
use crate::Error;

/// Entry point for bidirectional analysis, holding the directional property source.
///
/// A session is cheap to keep around and can analyze any number of texts. To share one property
/// table between several sessions, wrap it in an `Arc` (or pass a reference).
#[derive(Clone, Debug)]
pub struct Session<S = PropertyTable> {
    source: S,
}

impl Session<PropertyTable> {
    /// Creates a session from an ICU4X data blob containing the `Bidi_Class` property.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let table = PropertyTable::try_from_blob(bytes).map_err(Error::invalid_data)?;
        Ok(Self::new(table))
    }

    /// Creates a session backed by the property data compiled into the binary.
    #[cfg(feature = "compiled_data")]
    pub fn compiled() -> Self {
        Self::new(PropertyTable::compiled())
    }
}

impl<S: BidiClassSource> Session<S> {
    /// Creates a session that reads directional types from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the directional property source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Analyzes `text`, taking each paragraph's direction from its first strong character.
    pub fn analyze(&self, text: &str) -> Result<Analysis, Error> {
        self.analyze_with_base_level(text, None)
    }

    /// Analyzes `text`, using `base_level` as the level of every paragraph when it is given.
    ///
    /// Either the whole text is analyzed or an error is returned; a partial analysis is never
    /// produced.
    pub fn analyze_with_base_level(
        &self,
        text: &str,
        base_level: Option<Level>,
    ) -> Result<Analysis, Error> {
        let text: Vec<char> = text.chars().collect();
        let classes = text
            .iter()
            .enumerate()
            .map(|(offset, &ch)| {
                self.source
                    .bidi_class(ch)
                    .map_err(|err| Error::unknown_class(offset, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ranges = split_paragraphs(&text, &classes);
        let resolved = resolve_paragraphs(&classes, &ranges, base_level);

        let mut levels = Vec::with_capacity(text.len());
        let mut paragraphs = Vec::with_capacity(ranges.len());
        for (range, (level, paragraph_levels)) in ranges.into_iter().zip(resolved) {
            levels.extend_from_slice(&paragraph_levels);
            paragraphs.push(ParagraphInfo { range, level });
        }
        log::debug!(
            "analyzed {} characters into {} paragraphs",
            text.len(),
            paragraphs.len()
        );

        Ok(Analysis {
            text,
            classes,
            levels,
            paragraphs,
        })
    }
}

#[cfg(not(feature = "rayon"))]
fn resolve_paragraphs(
    classes: &[BidiClass],
    ranges: &[Range<usize>],
    base_level: Option<Level>,
) -> Vec<(Level, Vec<Level>)> {
    let mut resolver = BidiResolver::new();
    ranges
        .iter()
        .map(|range| {
            resolver.resolve(&classes[range.clone()], base_level);
            (resolver.base_level(), resolver.levels().to_vec())
        })
        .collect()
}

#[cfg(feature = "rayon")]
fn resolve_paragraphs(
    classes: &[BidiClass],
    ranges: &[Range<usize>],
    base_level: Option<Level>,
) -> Vec<(Level, Vec<Level>)> {
    use rayon::prelude::*;

    ranges
        .par_iter()
        .map_init(BidiResolver::new, |resolver, range| {
            resolver.resolve(&classes[range.clone()], base_level);
            (resolver.base_level(), resolver.levels().to_vec())
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
struct ParagraphInfo {
    range: Range<usize>,
    level: Level,
}

/// The immutable result of analyzing a text: its paragraphs and resolved embedding levels.
///
/// All offsets are code-point offsets into the analyzed text.
#[derive(Clone, Debug)]
pub struct Analysis {
    text: Vec<char>,
    classes: Vec<BidiClass>,
    levels: Vec<Level>,
    paragraphs: Vec<ParagraphInfo>,
}

impl Analysis {
    /// Returns the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Returns the paragraph at `index`.
    pub fn paragraph_at(&self, index: usize) -> Result<Paragraph<'_>, Error> {
        if index < self.paragraphs.len() {
            Ok(Paragraph {
                analysis: self,
                index,
            })
        } else {
            Err(Error::paragraph_out_of_range(index, self.paragraphs.len()))
        }
    }

    /// Returns an iterator over the paragraphs in text order.
    pub fn paragraphs(&self) -> impl Iterator<Item = Paragraph<'_>> + '_ {
        (0..self.paragraphs.len()).map(move |index| Paragraph {
            analysis: self,
            index,
        })
    }

    /// Returns the index of the paragraph containing the character at `offset`.
    pub fn paragraph_index_of(&self, offset: usize) -> Result<usize, Error> {
        self.check_offset(offset)?;
        Ok(self
            .paragraphs
            .partition_point(|paragraph| paragraph.range.end <= offset))
    }

    /// Returns the resolved level of the character at `offset`.
    pub fn level_at(&self, offset: usize) -> Result<Level, Error> {
        self.check_offset(offset)?;
        Ok(self.levels[offset])
    }

    /// Returns the analyzed text.
    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// Returns the resolved level of every character, before any line-level adjustment.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns the length of the text in code points.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the analyzed text was empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn check_offset(&self, offset: usize) -> Result<(), Error> {
        if offset < self.text.len() {
            Ok(())
        } else {
            Err(Error::offset_out_of_range(offset, 0..self.text.len()))
        }
    }
}

/// A paragraph of an [`Analysis`].
#[derive(Copy, Clone, Debug)]
pub struct Paragraph<'a> {
    analysis: &'a Analysis,
    index: usize,
}

impl<'a> Paragraph<'a> {
    fn info(&self) -> &'a ParagraphInfo {
        &self.analysis.paragraphs[self.index]
    }

    /// Returns the index of this paragraph in the analysis.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the offset of the first character of the paragraph.
    pub fn range_start(&self) -> usize {
        self.info().range.start
    }

    /// Returns the offset one past the last character of the paragraph, separator included.
    pub fn range_end(&self) -> usize {
        self.info().range.end
    }

    /// Returns the range of the paragraph.
    pub fn range(&self) -> Range<usize> {
        self.info().range.clone()
    }

    /// Returns the paragraph embedding level.
    pub fn level(&self) -> Level {
        self.info().level
    }

    /// Returns whether the paragraph resolved to left-to-right, right-to-left or mixed levels.
    pub fn direction(&self) -> Direction {
        Direction::of_levels(&self.analysis.levels[self.range()], self.level())
    }

    /// Returns the characters of the paragraph in logical order.
    pub fn text(&self) -> &'a [char] {
        &self.analysis.text[self.range()]
    }

    /// Returns the resolved level of the character at `offset`, which must lie in this paragraph.
    pub fn level_at(&self, offset: usize) -> Result<Level, Error> {
        if self.info().range.contains(&offset) {
            Ok(self.analysis.levels[offset])
        } else {
            Err(Error::offset_out_of_range(offset, self.range()))
        }
    }

    /// Returns the offsets of the line `start..end` in visual order.
    ///
    /// `start..end` must lie within the paragraph. Invalid ranges are rejected, never clamped.
    pub fn visual_order(&self, start: usize, end: usize) -> Result<Vec<usize>, Error> {
        let bounds = self.range();
        if start > end || start < bounds.start || end > bounds.end {
            return Err(Error::range_out_of_range(start, end, bounds));
        }
        let line = line_levels(
            &self.analysis.classes[start..end],
            &self.analysis.levels[start..end],
            self.level(),
        );
        Ok(reorder_visual(&line)
            .into_iter()
            .map(|index| start + index)
            .collect())
    }

    /// Returns the characters of the line `start..end` in visual order.
    ///
    /// The result always holds `end - start` characters; only their order changes. Glyph
    /// mirroring is left to the renderer.
    pub fn reorder_line(&self, start: usize, end: usize) -> Result<Vec<char>, Error> {
        let text = &self.analysis.text;
        Ok(self
            .visual_order(start, end)?
            .into_iter()
            .map(|offset| text[offset])
            .collect())
    }

    /// Like [`reorder_line`](Self::reorder_line), collected into a string.
    pub fn reorder_line_string(&self, start: usize, end: usize) -> Result<String, Error> {
        Ok(self.reorder_line(start, end)?.into_iter().collect())
    }
}
