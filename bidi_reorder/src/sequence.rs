// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level runs and isolating run sequences (UAX #9 rules BD7, BD13 and X10).

use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;
use unicode_bidi::BidiClass::{self, *};

use crate::explicit::removed_by_x9;
use crate::level::Level;

/// A sequence of level runs joined across matched isolates, the unit of the weak and neutral
/// rules.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct IsolatingRunSequence {
    /// Paragraph offsets of the characters in the sequence, skipping characters removed by X9.
    pub(crate) indices: Vec<usize>,
    /// The embedding level shared by every character in the sequence.
    pub(crate) level: Level,
    /// Start of sequence type, `L` or `R`.
    pub(crate) sos: BidiClass,
    /// End of sequence type, `L` or `R`.
    pub(crate) eos: BidiClass,
}

/// Computes the level runs of a paragraph (BD7).
///
/// Each run starts and ends on a character that survives X9; removed characters in between are
/// part of the range but carry no level of their own.
fn level_runs(classes: &[BidiClass], levels: &[Level]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, usize, Level)> = None;
    for (i, &class) in classes.iter().enumerate() {
        if removed_by_x9(class) {
            continue;
        }
        match current {
            Some((start, _, level)) if level == levels[i] => current = Some((start, i, level)),
            Some((start, last, _)) => {
                runs.push(start..last + 1);
                current = Some((i, i, levels[i]));
            }
            None => current = Some((i, i, levels[i])),
        }
    }
    if let Some((start, last, _)) = current {
        runs.push(start..last + 1);
    }
    runs
}

fn is_isolate_initiator(class: BidiClass) -> bool {
    matches!(class, LRI | RLI | FSI)
}

fn direction_class(level: Level) -> BidiClass {
    if level.is_rtl() {
        R
    } else {
        L
    }
}

/// Computes the isolating run sequences of a paragraph with their sos and eos types (BD13, X10).
///
/// `classes` are the original classes of the paragraph, and `levels` the explicit levels from
/// X1–X8.
pub(crate) fn isolating_run_sequences(
    classes: &[BidiClass],
    matches: &[Option<usize>],
    levels: &[Level],
    para_level: Level,
) -> Vec<IsolatingRunSequence> {
    let runs = level_runs(classes, levels);
    let mut consumed = alloc::vec![false; runs.len()];
    let mut sequences = Vec::new();

    for first_run in 0..runs.len() {
        if consumed[first_run] {
            continue;
        }
        let mut chain: SmallVec<[usize; 4]> = SmallVec::new();
        let mut run_index = first_run;
        loop {
            consumed[run_index] = true;
            chain.push(run_index);
            let last = runs[run_index].end - 1;
            if !is_isolate_initiator(classes[last]) {
                break;
            }
            let Some(pdi) = matches[last] else {
                break;
            };
            match runs.binary_search_by_key(&pdi, |run| run.start) {
                Ok(next) if !consumed[next] => run_index = next,
                _ => break,
            }
        }

        let indices: Vec<usize> = chain
            .iter()
            .flat_map(|&run| runs[run].clone())
            .filter(|&i| !removed_by_x9(classes[i]))
            .collect();
        let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
            continue;
        };
        let level = levels[first];

        let before = (0..first)
            .rev()
            .find(|&i| !removed_by_x9(classes[i]))
            .map_or(para_level, |i| levels[i]);
        let after = if is_isolate_initiator(classes[last]) {
            para_level
        } else {
            (last + 1..classes.len())
                .find(|&i| !removed_by_x9(classes[i]))
                .map_or(para_level, |i| levels[i])
        };

        sequences.push(IsolatingRunSequence {
            indices,
            level,
            sos: direction_class(before.max(level)),
            eos: direction_class(after.max(level)),
        });
    }
    sequences
}
