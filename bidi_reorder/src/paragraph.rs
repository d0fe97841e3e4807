// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph segmentation (UAX #9 rule P1).

use alloc::vec::Vec;
use core::ops::Range;

use unicode_bidi::BidiClass;

/// Splits text into paragraphs, returning the code-point range of each.
///
/// A paragraph ends after each character of class `B`, which stays with the paragraph it
/// terminates; a carriage return directly followed by a line feed is a single separator. The
/// returned ranges are contiguous and cover the whole text. Empty text has no paragraphs, and a
/// trailing separator does not start an empty one.
///
/// `text` and `classes` must have the same length.
pub fn split_paragraphs(text: &[char], classes: &[BidiClass]) -> Vec<Range<usize>> {
    debug_assert_eq!(
        text.len(),
        classes.len(),
        "every character needs exactly one class"
    );
    let mut paragraphs = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < classes.len() {
        if classes[i] != BidiClass::B {
            i += 1;
            continue;
        }
        let mut end = i + 1;
        if text[i] == '\r' && text.get(end) == Some(&'\n') {
            end += 1;
        }
        paragraphs.push(start..end);
        start = end;
        i = end;
    }
    if start < classes.len() {
        paragraphs.push(start..classes.len());
    }
    paragraphs
}
