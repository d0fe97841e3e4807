// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Analysis, Level, PropertyTable, Session};

/// A session over the compiled ICU4X tables.
pub(crate) fn session() -> Session {
    Session::new(PropertyTable::compiled())
}

pub(crate) fn analyze(text: &str) -> Analysis {
    session().analyze(text).unwrap()
}

pub(crate) fn numbers(levels: &[Level]) -> Vec<u8> {
    levels.iter().map(|level| level.number()).collect()
}

/// Reorders a whole paragraph into a string.
pub(crate) fn reorder_paragraph(analysis: &Analysis, index: usize) -> String {
    let paragraph = analysis.paragraph_at(index).unwrap();
    paragraph
        .reorder_line_string(paragraph.range_start(), paragraph.range_end())
        .unwrap()
}
