// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line reordering (UAX #9 rules L1–L2).

use alloc::vec::Vec;

use unicode_bidi::BidiClass::{self, *};

use crate::level::Level;

/// Applies rule L1 to the levels of one line.
///
/// Segment and paragraph separators are reset to the paragraph level, together with any run of
/// whitespace, isolate formatting or removed characters that precedes them or ends the line.
/// `classes` are the original classes of the line.
pub(crate) fn line_levels(classes: &[BidiClass], levels: &[Level], para_level: Level) -> Vec<Level> {
    let mut line = levels.to_vec();
    let mut trailing: Option<usize> = None;
    for (i, &class) in classes.iter().enumerate() {
        match class {
            B | S => {
                let start = trailing.take().unwrap_or(i);
                line[start..=i].fill(para_level);
            }
            WS | FSI | LRI | RLI | PDI | BN | RLE | LRE | RLO | LRO | PDF => {
                trailing.get_or_insert(i);
            }
            _ => trailing = None,
        }
    }
    if let Some(start) = trailing {
        line[start..].fill(para_level);
    }
    line
}

/// Returns the logical indices of `levels` in visual order (rule L2).
///
/// From the highest level down to the lowest odd level, every maximal run of characters at that
/// level or higher is reversed.
pub fn reorder_visual(levels: &[Level]) -> Vec<usize> {
    let mut items: Vec<(usize, Level)> = levels.iter().copied().enumerate().collect();
    let item_count = items.len();

    // Find the max level and the min *odd* level
    let mut max_level = 0;
    let mut lowest_odd_level = u8::MAX;
    for &(_, level) in &items {
        let level = level.number();
        if level > max_level {
            max_level = level;
        }
        if level & 1 != 0 && level < lowest_odd_level {
            lowest_odd_level = level;
        }
    }

    for level in (lowest_odd_level..=max_level).rev() {
        let mut i = 0;
        while i < item_count {
            if items[i].1.number() >= level {
                let mut end = i + 1;
                while end < item_count && items[end].1.number() >= level {
                    end += 1;
                }
                items[i..end].reverse();
                i = end;
            }
            i += 1;
        }
    }

    items.into_iter().map(|(index, _)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn levels(numbers: &[u8]) -> Vec<Level> {
        numbers.iter().map(|&n| Level::new(n).unwrap()).collect()
    }

    fn numbers(levels: &[Level]) -> Vec<u8> {
        levels.iter().map(|level| level.number()).collect()
    }

    #[test]
    fn all_even_is_identity() {
        assert_eq!(reorder_visual(&levels(&[0, 0, 0])), [0, 1, 2]);
        assert_eq!(reorder_visual(&levels(&[0, 2, 2, 0])), [0, 1, 2, 3]);
        assert!(reorder_visual(&[]).is_empty());
    }

    #[test]
    fn single_rtl_run() {
        assert_eq!(reorder_visual(&levels(&[0, 1, 1, 1, 0])), [0, 3, 2, 1, 4]);
        assert_eq!(reorder_visual(&levels(&[1])), [0]);
    }

    #[test]
    fn nested_levels() {
        // "א,ב,ג,a,b,c" in an RTL paragraph.
        let order = reorder_visual(&levels(&[1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2]));
        assert_eq!(order, [6, 7, 8, 9, 10, 5, 4, 3, 2, 1, 0]);
        // Numbers inside RTL text keep their order.
        let order = reorder_visual(&levels(&[1, 1, 2, 2, 1]));
        assert_eq!(order, [4, 2, 3, 1, 0]);
    }

    #[test]
    fn order_is_permutation() {
        let order = reorder_visual(&levels(&[0, 3, 2, 1, 4, 4, 1, 0, 2]));
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn trailing_whitespace_resets() {
        let classes = [R, WS, R, WS, WS];
        let line = line_levels(&classes, &levels(&[1, 1, 1, 1, 1]), Level::LTR);
        assert_eq!(numbers(&line), [1, 1, 1, 0, 0]);
    }

    #[test]
    fn separators_reset_with_preceding_whitespace() {
        let classes = [L, WS, S, R, WS, B];
        let line = line_levels(&classes, &levels(&[2, 2, 2, 1, 1, 1]), Level::RTL);
        assert_eq!(numbers(&line), [2, 1, 1, 1, 1, 1]);
        let line = line_levels(&classes, &levels(&[2, 2, 2, 3, 3, 3]), Level::RTL);
        assert_eq!(numbers(&line), [2, 1, 1, 3, 1, 1]);
    }

    #[test]
    fn inner_whitespace_untouched() {
        let classes = [R, WS, R];
        let line = line_levels(&classes, &levels(&[1, 1, 1]), Level::LTR);
        assert_eq!(numbers(&line), vec![1, 1, 1]);
    }
}
