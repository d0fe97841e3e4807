// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit levels and directions (UAX #9 rules BD9, P2–P3 and X1–X9).

use alloc::vec::Vec;
use core::ops::Range;

use unicode_bidi::BidiClass::{self, *};

use crate::level::{Level, MAX_DEPTH};

const STACK_CAPACITY: usize = MAX_DEPTH as usize + 2;

/// Returns the partner of every isolate initiator and PDI that is matched (BD9).
///
/// `matches[i]` holds the index of the matching PDI for an initiator at `i`, and the index of
/// the initiator for a PDI at `i`.
pub(crate) fn match_isolates(classes: &[BidiClass], matches: &mut Vec<Option<usize>>) {
    matches.clear();
    matches.resize(classes.len(), None);
    let mut open: Vec<usize> = Vec::new();
    for (i, &class) in classes.iter().enumerate() {
        match class {
            LRI | RLI | FSI => open.push(i),
            PDI => {
                if let Some(initiator) = open.pop() {
                    matches[initiator] = Some(i);
                    matches[i] = Some(initiator);
                }
            }
            B => open.clear(),
            _ => {}
        }
    }
}

/// Finds the direction of the first strong character in `range`, skipping isolated content
/// (P2–P3).
pub(crate) fn first_strong_level(
    classes: &[BidiClass],
    matches: &[Option<usize>],
    range: Range<usize>,
) -> Option<Level> {
    let mut i = range.start;
    while i < range.end {
        match classes[i] {
            L => return Some(Level::LTR),
            R | AL => return Some(Level::RTL),
            LRI | RLI | FSI => match matches[i] {
                Some(pdi) => i = pdi,
                None => return None,
            },
            B => return None,
            _ => {}
        }
        i += 1;
    }
    None
}

/// Returns true for the classes that rule X9 removes from implicit resolution.
#[inline]
pub(crate) fn removed_by_x9(class: BidiClass) -> bool {
    matches!(class, RLE | LRE | RLO | LRO | PDF | BN)
}

#[derive(Copy, Clone, Debug, Default)]
struct Status {
    level: Level,
    /// `L` or `R` while a directional override is active.
    override_class: Option<BidiClass>,
    isolate: bool,
}

/// The directional status stack of X1, bounded to `MAX_DEPTH + 2` entries.
#[derive(Debug)]
struct StatusStack {
    entries: [Status; STACK_CAPACITY],
    len: usize,
}

impl StatusStack {
    fn new(base: Level) -> Self {
        let mut entries = [Status::default(); STACK_CAPACITY];
        entries[0] = Status {
            level: base,
            override_class: None,
            isolate: false,
        };
        Self { entries, len: 1 }
    }

    fn last(&self) -> Status {
        self.entries[self.len - 1]
    }

    fn push(&mut self, status: Status) {
        debug_assert!(self.len < STACK_CAPACITY, "status stack overflow");
        self.entries[self.len] = status;
        self.len += 1;
    }

    /// Pops the last entry. The paragraph entry at the bottom is never popped.
    fn pop(&mut self) -> Option<Status> {
        if self.len > 1 {
            self.len -= 1;
            Some(self.entries[self.len])
        } else {
            None
        }
    }
}

/// Applies rules X1–X8, filling `levels` with explicit embedding levels and rewriting `resolved`
/// classes under directional overrides.
///
/// Embedding and isolate controls that would exceed [`MAX_DEPTH`] are counted and absorbed; they
/// never push onto the stack.
pub(crate) fn resolve_explicit(
    classes: &[BidiClass],
    matches: &[Option<usize>],
    para_level: Level,
    levels: &mut [Level],
    resolved: &mut [BidiClass],
) {
    let mut stack = StatusStack::new(para_level);
    let mut overflow_isolates = 0_usize;
    let mut overflow_embeddings = 0_usize;
    let mut valid_isolates = 0_usize;

    for (i, &class) in classes.iter().enumerate() {
        match class {
            // X2–X5
            RLE | LRE | RLO | LRO => {
                let last = stack.last();
                levels[i] = last.level;
                let next = if matches!(class, RLE | RLO) {
                    last.level.next_rtl()
                } else {
                    last.level.next_ltr()
                };
                match next {
                    Some(level) if overflow_isolates == 0 && overflow_embeddings == 0 => {
                        stack.push(Status {
                            level,
                            override_class: match class {
                                RLO => Some(R),
                                LRO => Some(L),
                                _ => None,
                            },
                            isolate: false,
                        });
                    }
                    _ => {
                        if overflow_isolates == 0 {
                            overflow_embeddings += 1;
                        }
                        log::trace!("absorbed overflowing embedding at offset {i}");
                    }
                }
            }
            // X5a–X5c
            RLI | LRI | FSI => {
                let last = stack.last();
                levels[i] = last.level;
                if let Some(override_class) = last.override_class {
                    resolved[i] = override_class;
                }
                let is_rtl = match class {
                    RLI => true,
                    LRI => false,
                    _ => {
                        let end = matches[i].unwrap_or(classes.len());
                        first_strong_level(classes, matches, i + 1..end) == Some(Level::RTL)
                    }
                };
                let next = if is_rtl {
                    last.level.next_rtl()
                } else {
                    last.level.next_ltr()
                };
                match next {
                    Some(level) if overflow_isolates == 0 && overflow_embeddings == 0 => {
                        valid_isolates += 1;
                        stack.push(Status {
                            level,
                            override_class: None,
                            isolate: true,
                        });
                    }
                    _ => {
                        overflow_isolates += 1;
                        log::trace!("absorbed overflowing isolate at offset {i}");
                    }
                }
            }
            // X6a
            PDI => {
                if overflow_isolates > 0 {
                    overflow_isolates -= 1;
                } else if valid_isolates > 0 {
                    overflow_embeddings = 0;
                    while let Some(popped) = stack.pop() {
                        if popped.isolate {
                            break;
                        }
                    }
                    valid_isolates -= 1;
                }
                let last = stack.last();
                levels[i] = last.level;
                if let Some(override_class) = last.override_class {
                    resolved[i] = override_class;
                }
            }
            // X7
            PDF => {
                if overflow_isolates > 0 {
                    // Ignored.
                } else if overflow_embeddings > 0 {
                    overflow_embeddings -= 1;
                } else if !stack.last().isolate {
                    stack.pop();
                }
                levels[i] = stack.last().level;
            }
            // X8
            B => levels[i] = para_level,
            BN => levels[i] = stack.last().level,
            // X6
            _ => {
                let last = stack.last();
                levels[i] = last.level;
                if let Some(override_class) = last.override_class {
                    resolved[i] = override_class;
                }
            }
        }
    }
}

/// Gives every character removed by X9 the level of the character before it, or the paragraph
/// level at the start of the paragraph.
pub(crate) fn assign_removed_levels(classes: &[BidiClass], para_level: Level, levels: &mut [Level]) {
    for i in 0..classes.len() {
        if removed_by_x9(classes[i]) {
            levels[i] = if i == 0 { para_level } else { levels[i - 1] };
        }
    }
}
