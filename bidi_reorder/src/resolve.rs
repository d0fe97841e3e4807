// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedding level resolution for a single paragraph.

use alloc::vec::Vec;

use bidi_reorder_data::needs_bidi_resolution;
use unicode_bidi::BidiClass;

use crate::explicit::{
    assign_removed_levels, first_strong_level, match_isolates, resolve_explicit,
};
use crate::implicit::{resolve_implicit, resolve_neutral, resolve_weak};
use crate::level::Level;
use crate::sequence::isolating_run_sequences;

/// Resolver for the embedding levels of a paragraph.
///
/// The resolver keeps its buffers between calls, so reusing one instance for many paragraphs
/// avoids repeated allocation. Results depend only on the input of the latest
/// [`resolve`](Self::resolve) call.
#[derive(Clone, Debug, Default)]
pub struct BidiResolver {
    base_level: Level,
    levels: Vec<Level>,
    resolved: Vec<BidiClass>,
    matches: Vec<Option<usize>>,
}

impl BidiResolver {
    /// Creates a new resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the results of the previous call to [`resolve`](Self::resolve).
    pub fn clear(&mut self) {
        self.base_level = Level::LTR;
        self.levels.clear();
        self.resolved.clear();
        self.matches.clear();
    }

    /// Resolves the embedding levels for one paragraph.
    ///
    /// `classes` holds the bidirectional class of every character of the paragraph; a paragraph
    /// separator may only appear last. When `base_level` is `None` the paragraph level is taken
    /// from the first strong character, defaulting to left-to-right.
    pub fn resolve(&mut self, classes: &[BidiClass], base_level: Option<Level>) {
        self.clear();
        match_isolates(classes, &mut self.matches);
        let para_level = base_level
            .or_else(|| first_strong_level(classes, &self.matches, 0..classes.len()))
            .unwrap_or(Level::LTR);
        self.base_level = para_level;
        self.levels.resize(classes.len(), para_level);

        if para_level.is_ltr() && !classes.iter().any(|&class| needs_bidi_resolution(class)) {
            // Nothing can raise a level above an even paragraph level.
            return;
        }

        self.resolved.extend_from_slice(classes);
        resolve_explicit(
            classes,
            &self.matches,
            para_level,
            &mut self.levels,
            &mut self.resolved,
        );
        for seq in isolating_run_sequences(classes, &self.matches, &self.levels, para_level) {
            resolve_weak(&seq, &mut self.resolved);
            resolve_neutral(&seq, &mut self.resolved);
            resolve_implicit(&seq, &self.resolved, &mut self.levels);
        }
        assign_removed_levels(classes, para_level, &mut self.levels);
    }

    /// Returns the resolved paragraph level.
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// Returns the resolved level of every character of the paragraph.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_bidi::BidiClass::*;

    fn levels(classes: &[BidiClass], base_level: Option<Level>) -> (u8, Vec<u8>) {
        let mut resolver = BidiResolver::new();
        resolver.resolve(classes, base_level);
        (
            resolver.base_level().number(),
            resolver.levels().iter().map(|level| level.number()).collect(),
        )
    }

    #[test]
    fn base_level_from_first_strong() {
        assert_eq!(levels(&[ON, R, L], None).0, 1);
        assert_eq!(levels(&[EN, AL], None).0, 1);
        assert_eq!(levels(&[WS, L, R], None).0, 0);
        assert_eq!(levels(&[EN, ON], None).0, 0);
        assert_eq!(levels(&[], None).0, 0);
        // Isolated content does not count.
        assert_eq!(levels(&[RLI, R, PDI, L], None).0, 0);
    }

    #[test]
    fn base_level_override() {
        assert_eq!(levels(&[L, L], Some(Level::RTL)), (1, alloc::vec![2, 2]));
        assert_eq!(levels(&[R], Some(Level::LTR)), (0, alloc::vec![1]));
    }

    #[test]
    fn ltr_fast_path() {
        assert_eq!(levels(&[L, WS, EN, ON, L], None), (0, alloc::vec![0; 5]));
    }

    #[test]
    fn mixed_paragraph() {
        // "א,ב,ג,a,b,c"
        let classes = [R, CS, R, CS, R, CS, L, CS, L, CS, L];
        assert_eq!(
            levels(&classes, None),
            (1, alloc::vec![1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2])
        );
    }

    #[test]
    fn numbers_in_rtl() {
        // "אב 12 גד"
        let classes = [R, R, WS, EN, EN, WS, R, R];
        assert_eq!(
            levels(&classes, None),
            (1, alloc::vec![1, 1, 1, 2, 2, 1, 1, 1])
        );
    }

    #[test]
    fn arabic_numbers_in_ltr() {
        // "a ١٢ b"
        let classes = [L, WS, AN, AN, WS, L];
        assert_eq!(levels(&classes, None), (0, alloc::vec![0, 0, 2, 2, 0, 0]));
    }

    #[test]
    fn override_and_removed_characters() {
        // "a RLO b c PDF d"
        let classes = [L, RLO, L, L, PDF, L];
        assert_eq!(levels(&classes, None), (0, alloc::vec![0, 0, 1, 1, 1, 0]));
    }

    #[test]
    fn isolate_in_ltr() {
        // "a RLI b PDI c": the isolate is resolved on its own.
        let classes = [L, RLI, L, PDI, L];
        assert_eq!(levels(&classes, None), (0, alloc::vec![0, 0, 2, 0, 0]));
    }

    #[test]
    fn deterministic() {
        let classes = [R, WS, EN, CS, EN, WS, L, ON, AL, NSM, B];
        let mut resolver = BidiResolver::new();
        resolver.resolve(&classes, None);
        let first = resolver.levels().to_vec();
        resolver.resolve(&[L, L], Some(Level::RTL));
        resolver.resolve(&classes, None);
        assert_eq!(resolver.levels(), first.as_slice());
    }
}
