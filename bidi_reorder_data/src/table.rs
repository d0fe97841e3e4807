// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use icu_collections::codepointtrie::TrieValue;
use icu_properties::props::BidiClass as IcuBidiClass;
use icu_properties::CodePointMapData;
use icu_provider::buf::AsDeserializingBufferProvider;
use icu_provider::DataError;
use icu_provider_blob::BlobDataProvider;
use unicode_bidi::BidiClass;

use crate::{class_from_icu, BidiClassSource, UnknownClass};

/// The ICU4X `Bidi_Class` code point map, loaded once and queried per character.
///
/// The table is read-only; share one instance between sessions with a reference or an `Arc`.
#[derive(Debug)]
pub struct PropertyTable {
    map: CodePointMapData<IcuBidiClass>,
}

impl PropertyTable {
    /// Loads the table from an ICU4X postcard data blob.
    ///
    /// The blob must contain the `PropertyEnumBidiClassV1` marker, as exported by
    /// `icu4x-datagen --format blob`.
    pub fn try_from_blob(blob: &[u8]) -> Result<Self, DataError> {
        let provider = BlobDataProvider::try_new_from_blob(blob.into())?;
        Self::try_from_blob_provider(&provider)
    }

    /// Loads the table from a blob that lives for the rest of the program, without copying it.
    pub fn try_from_static_blob(blob: &'static [u8]) -> Result<Self, DataError> {
        let provider = BlobDataProvider::try_new_from_static_blob(blob)?;
        Self::try_from_blob_provider(&provider)
    }

    fn try_from_blob_provider(provider: &BlobDataProvider) -> Result<Self, DataError> {
        // Convert blob (BufferProvider) to a typed DataProvider via deserialization.
        let map = CodePointMapData::<IcuBidiClass>::try_new_unstable(&provider.as_deserializing())?;
        Ok(Self { map })
    }

    /// Returns the table compiled into the binary.
    #[cfg(feature = "compiled_data")]
    pub fn compiled() -> Self {
        Self {
            map: CodePointMapData::<IcuBidiClass>::new().static_to_owned(),
        }
    }
}

impl BidiClassSource for PropertyTable {
    #[inline]
    fn bidi_class(&self, ch: char) -> Result<BidiClass, UnknownClass> {
        let raw = self.map.as_borrowed().get(ch);
        class_from_icu(raw).ok_or(UnknownClass {
            ch,
            code: raw.to_u32(),
        })
    }
}
