// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `bidi_reorder_data` supplies the directional character types that the `bidi_reorder` engine
//! resolves.
//!
//! The engine never classifies characters itself. It asks a [`BidiClassSource`] for the
//! `Bidi_Class` of every code point, which keeps the (large) Unicode tables out of the engine and
//! lets callers load them from an ICU4X data blob at run time, or link them in at build time with
//! the `compiled_data` feature.

#![no_std]

extern crate alloc;

mod convert;
mod table;

use alloc::sync::Arc;

pub use convert::{class_from_icu, needs_bidi_resolution};
pub use table::PropertyTable;
pub use unicode_bidi::BidiClass;

/// A source of bidirectional character types.
pub trait BidiClassSource {
    /// Returns the bidirectional class of `ch`.
    ///
    /// Returns an [`UnknownClass`] error when the underlying data holds a value that is not one of
    /// the 23 classes defined by UAX #9.
    fn bidi_class(&self, ch: char) -> Result<BidiClass, UnknownClass>;
}

impl<T: BidiClassSource + ?Sized> BidiClassSource for &T {
    #[inline]
    fn bidi_class(&self, ch: char) -> Result<BidiClass, UnknownClass> {
        (**self).bidi_class(ch)
    }
}

impl<T: BidiClassSource + ?Sized> BidiClassSource for Arc<T> {
    #[inline]
    fn bidi_class(&self, ch: char) -> Result<BidiClass, UnknownClass> {
        (**self).bidi_class(ch)
    }
}

/// The tables built into `unicode-bidi`.
impl BidiClassSource for unicode_bidi::HardcodedBidiData {
    #[inline]
    fn bidi_class(&self, ch: char) -> Result<BidiClass, UnknownClass> {
        Ok(unicode_bidi::BidiDataSource::bidi_class(self, ch))
    }
}

/// A raw `Bidi_Class` value that does not name a known class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownClass {
    /// The character that was looked up.
    pub ch: char,
    /// The raw value stored in the code point map.
    pub code: u32,
}

impl core::fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown bidi class value {} for U+{:04X}",
            self.code, self.ch as u32
        )
    }
}

impl core::error::Error for UnknownClass {}
