// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_properties::props::BidiClass as IcuBidiClass;
use unicode_bidi::BidiClass;

/// Maps an ICU4X `Bidi_Class` value onto the `unicode-bidi` enumeration.
///
/// ICU4X models the property as an open set of values, so data produced by a newer (or corrupt)
/// exporter can hold values this crate does not know about. Those map to `None`.
pub fn class_from_icu(bidi: IcuBidiClass) -> Option<BidiClass> {
    let class = match bidi {
        IcuBidiClass::LeftToRight => BidiClass::L,
        IcuBidiClass::RightToLeft => BidiClass::R,
        IcuBidiClass::ArabicLetter => BidiClass::AL,
        IcuBidiClass::EuropeanNumber => BidiClass::EN,
        IcuBidiClass::EuropeanSeparator => BidiClass::ES,
        IcuBidiClass::EuropeanTerminator => BidiClass::ET,
        IcuBidiClass::ArabicNumber => BidiClass::AN,
        IcuBidiClass::CommonSeparator => BidiClass::CS,
        IcuBidiClass::ParagraphSeparator => BidiClass::B,
        IcuBidiClass::SegmentSeparator => BidiClass::S,
        IcuBidiClass::WhiteSpace => BidiClass::WS,
        IcuBidiClass::OtherNeutral => BidiClass::ON,
        IcuBidiClass::LeftToRightEmbedding => BidiClass::LRE,
        IcuBidiClass::LeftToRightOverride => BidiClass::LRO,
        IcuBidiClass::RightToLeftEmbedding => BidiClass::RLE,
        IcuBidiClass::RightToLeftOverride => BidiClass::RLO,
        IcuBidiClass::PopDirectionalFormat => BidiClass::PDF,
        IcuBidiClass::NonspacingMark => BidiClass::NSM,
        IcuBidiClass::BoundaryNeutral => BidiClass::BN,
        IcuBidiClass::FirstStrongIsolate => BidiClass::FSI,
        IcuBidiClass::LeftToRightIsolate => BidiClass::LRI,
        IcuBidiClass::RightToLeftIsolate => BidiClass::RLI,
        IcuBidiClass::PopDirectionalIsolate => BidiClass::PDI,
        _ => return None,
    };
    Some(class)
}

/// Returns whether a character of this class can make a paragraph need bidi resolution.
///
/// Text made only of classes for which this is `false` resolves to the paragraph level
/// everywhere when the paragraph is left-to-right.
#[inline(always)]
pub fn needs_bidi_resolution(class: BidiClass) -> bool {
    use BidiClass::*;
    let bidi_mask = 1_u32 << (class as u32);

    const OVERRIDE_MASK: u32 =
        (1 << RLE as u32) | (1 << LRE as u32) | (1 << RLO as u32) | (1 << LRO as u32);
    const ISOLATE_MASK: u32 = (1 << RLI as u32) | (1 << LRI as u32) | (1 << FSI as u32);
    const EXPLICIT_MASK: u32 = OVERRIDE_MASK | ISOLATE_MASK;
    const BIDI_MASK: u32 = EXPLICIT_MASK | (1 << R as u32) | (1 << AL as u32) | (1 << AN as u32);

    (bidi_mask & BIDI_MASK) != 0
}
