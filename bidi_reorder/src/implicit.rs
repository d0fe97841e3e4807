// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weak types, neutral types and implicit levels (UAX #9 rules W1–W7, N1–N2 and I1–I2).

use unicode_bidi::BidiClass::{self, *};

use crate::level::Level;
use crate::sequence::IsolatingRunSequence;

/// Resolves the weak types of one isolating run sequence in place.
pub(crate) fn resolve_weak(seq: &IsolatingRunSequence, resolved: &mut [BidiClass]) {
    let indices = &seq.indices;

    // W1
    let mut prev = seq.sos;
    for &i in indices {
        if resolved[i] == NSM {
            resolved[i] = match prev {
                LRI | RLI | FSI | PDI => ON,
                class => class,
            };
        }
        prev = resolved[i];
    }

    // W2 and W3
    let mut last_strong = seq.sos;
    for &i in indices {
        match resolved[i] {
            class @ (L | R) => last_strong = class,
            AL => {
                last_strong = AL;
                resolved[i] = R;
            }
            EN if last_strong == AL => resolved[i] = AN,
            _ => {}
        }
    }

    // W4
    for k in 1..indices.len().saturating_sub(1) {
        let prev = resolved[indices[k - 1]];
        let next = resolved[indices[k + 1]];
        let i = indices[k];
        match resolved[i] {
            ES if prev == EN && next == EN => resolved[i] = EN,
            CS if prev == next && matches!(prev, EN | AN) => resolved[i] = prev,
            _ => {}
        }
    }

    // W5
    let mut k = 0;
    while k < indices.len() {
        if resolved[indices[k]] != ET {
            k += 1;
            continue;
        }
        let start = k;
        while k < indices.len() && resolved[indices[k]] == ET {
            k += 1;
        }
        let before_is_en = start > 0 && resolved[indices[start - 1]] == EN;
        let after_is_en = k < indices.len() && resolved[indices[k]] == EN;
        if before_is_en || after_is_en {
            for &i in &indices[start..k] {
                resolved[i] = EN;
            }
        }
    }

    // W6
    for &i in indices {
        if matches!(resolved[i], ES | ET | CS) {
            resolved[i] = ON;
        }
    }

    // W7
    let mut last_strong = seq.sos;
    for &i in indices {
        match resolved[i] {
            class @ (L | R) => last_strong = class,
            EN if last_strong == L => resolved[i] = L,
            _ => {}
        }
    }
}

fn is_neutral_or_isolate(class: BidiClass) -> bool {
    matches!(class, B | S | WS | ON | LRI | RLI | FSI | PDI)
}

/// The strong direction a resolved class contributes to N1: numbers count as `R`.
fn strong_direction(class: BidiClass) -> BidiClass {
    match class {
        L => L,
        _ => R,
    }
}

/// Resolves the neutral and isolate formatting types of one isolating run sequence in place.
pub(crate) fn resolve_neutral(seq: &IsolatingRunSequence, resolved: &mut [BidiClass]) {
    let indices = &seq.indices;
    let embedding_direction = if seq.level.is_rtl() { R } else { L };
    let mut k = 0;
    while k < indices.len() {
        if !is_neutral_or_isolate(resolved[indices[k]]) {
            k += 1;
            continue;
        }
        let start = k;
        while k < indices.len() && is_neutral_or_isolate(resolved[indices[k]]) {
            k += 1;
        }
        let before = if start == 0 {
            seq.sos
        } else {
            strong_direction(resolved[indices[start - 1]])
        };
        let after = if k == indices.len() {
            seq.eos
        } else {
            strong_direction(resolved[indices[k]])
        };
        // N1, falling back to N2.
        let class = if before == after {
            before
        } else {
            embedding_direction
        };
        for &i in &indices[start..k] {
            resolved[i] = class;
        }
    }
}

/// Raises the levels of one isolating run sequence according to the resolved types (I1–I2).
pub(crate) fn resolve_implicit(
    seq: &IsolatingRunSequence,
    resolved: &[BidiClass],
    levels: &mut [Level],
) {
    for &i in &seq.indices {
        let level = levels[i];
        levels[i] = match (level.is_rtl(), resolved[i]) {
            (false, R) => level.raise(1),
            (false, AN | EN) => level.raise(2),
            (true, L | EN | AN) => level.raise(1),
            _ => level,
        };
    }
}
