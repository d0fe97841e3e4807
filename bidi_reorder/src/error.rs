// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use bidi_reorder_data::UnknownClass;
use icu_provider::DataError;

/// Error type for analysis and reordering operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the values that were rejected, so callers can
/// report what went wrong without re-deriving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    detail: Detail,
}

#[derive(Debug, Clone, PartialEq)]
enum Detail {
    Data(DataError),
    UnknownClass { offset: usize, ch: char, code: u32 },
    Level { number: u8 },
    Paragraph { index: usize, count: usize },
    Offset { offset: usize, bounds: Range<usize> },
    Range { start: usize, end: usize, bounds: Range<usize> },
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The data loading failure behind this error, if any.
    pub fn data_error(&self) -> Option<DataError> {
        match self.detail {
            Detail::Data(err) => Some(err),
            _ => None,
        }
    }

    /// The code-point offset of the character whose class could not be read, if any.
    pub fn offset(&self) -> Option<usize> {
        match self.detail {
            Detail::UnknownClass { offset, .. } | Detail::Offset { offset, .. } => Some(offset),
            _ => None,
        }
    }

    /// The valid bounds the rejected index or range was checked against, if any.
    pub fn bounds(&self) -> Option<Range<usize>> {
        match &self.detail {
            Detail::Paragraph { count, .. } => Some(0..*count),
            Detail::Offset { bounds, .. } | Detail::Range { bounds, .. } => Some(bounds.clone()),
            _ => None,
        }
    }

    pub(crate) fn invalid_data(err: DataError) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            detail: Detail::Data(err),
        }
    }

    pub(crate) fn unknown_class(offset: usize, err: UnknownClass) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            detail: Detail::UnknownClass {
                offset,
                ch: err.ch,
                code: err.code,
            },
        }
    }

    pub(crate) fn invalid_level(number: u8) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            detail: Detail::Level { number },
        }
    }

    pub(crate) fn paragraph_out_of_range(index: usize, count: usize) -> Self {
        Self {
            kind: ErrorKind::OutOfRange,
            detail: Detail::Paragraph { index, count },
        }
    }

    pub(crate) fn offset_out_of_range(offset: usize, bounds: Range<usize>) -> Self {
        Self {
            kind: ErrorKind::OutOfRange,
            detail: Detail::Offset { offset, bounds },
        }
    }

    pub(crate) fn range_out_of_range(start: usize, end: usize, bounds: Range<usize>) -> Self {
        Self {
            kind: ErrorKind::OutOfRange,
            detail: Detail::Range { start, end, bounds },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.detail {
            Detail::Data(err) => write!(f, "failed to load directional properties: {err}"),
            Detail::UnknownClass { offset, ch, code } => write!(
                f,
                "unknown bidi class value {code} for U+{:04X} at offset {offset}",
                *ch as u32
            ),
            Detail::Level { number } => {
                write!(f, "embedding level {number} exceeds the maximum depth")
            }
            Detail::Paragraph { index, count } => {
                write!(f, "paragraph index {index} out of range for {count} paragraphs")
            }
            Detail::Offset { offset, bounds } => write!(
                f,
                "offset {offset} out of range {}..{}",
                bounds.start, bounds.end
            ),
            Detail::Range { start, end, bounds } if start > end => write!(
                f,
                "invalid range {start}..{end}: start > end (bounds {}..{})",
                bounds.start, bounds.end
            ),
            Detail::Range { start, end, bounds } => write!(
                f,
                "range {start}..{end} out of bounds {}..{}",
                bounds.start, bounds.end
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
///
/// Nesting explicit embeddings deeper than [`MAX_DEPTH`](crate::MAX_DEPTH) is not an error: the
/// excess controls are absorbed exactly as UAX #9 prescribes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The directional data or a caller-supplied value was malformed.
    InvalidInput,

    /// A paragraph index, offset or range fell outside the valid bounds.
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn range_messages() {
        let err = Error::range_out_of_range(4, 2, 0..10);
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "invalid range 4..2: start > end (bounds 0..10)");

        let err = Error::range_out_of_range(3, 12, 0..10);
        assert_eq!(err.to_string(), "range 3..12 out of bounds 0..10");
        assert_eq!(err.bounds(), Some(0..10));
    }

    #[test]
    fn unknown_class_carries_offset() {
        let err = Error::unknown_class(7, UnknownClass { ch: 'x', code: 99 });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.offset(), Some(7));
        assert_eq!(
            err.to_string(),
            "unknown bidi class value 99 for U+0078 at offset 7"
        );
    }

    #[test]
    fn paragraph_bounds() {
        let err = Error::paragraph_out_of_range(0, 0);
        assert_eq!(err.bounds(), Some(0..0));
        assert_eq!(
            err.to_string(),
            "paragraph index 0 out of range for 0 paragraphs"
        );
    }
}
