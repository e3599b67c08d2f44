use std::collections::BTreeSet;

use read_fonts::{FontRef, ReadError};
use skrifa::string::StringId;
use skrifa::MetadataProvider;

use crate::charset;

/// Everything we need to know about a font to list its character coverage
pub struct CharsetFont {
    /// The font binary data
    pub backing: Vec<u8>,
    /// The codepoints encoded by the font's Unicode cmap subtables
    pub codepoints: BTreeSet<u32>,
}

impl CharsetFont {
    /// Load a font from a byte slice and collect its encoded codepoints
    pub fn new(data: &[u8]) -> Result<Self, ReadError> {
        let backing = data.to_vec();
        let codepoints = charset::unicode_codepoints(&FontRef::new(&backing)?)?;
        let font = CharsetFont {
            backing,
            codepoints,
        };
        log::debug!(
            "{} {}: {} encoded codepoints",
            font.family_name(),
            font.style_name(),
            font.codepoints.len()
        );
        Ok(font)
    }

    pub fn fontref(&self) -> FontRef {
        FontRef::new(&self.backing).expect("Couldn't parse font")
    }

    pub fn family_name(&self) -> String {
        self.fontref()
            .localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map_or_else(|| "Unknown".to_string(), |s| s.chars().collect())
    }

    pub fn style_name(&self) -> String {
        self.fontref()
            .localized_strings(StringId::SUBFAMILY_NAME)
            .english_or_first()
            .map_or_else(|| "Regular".to_string(), |s| s.chars().collect())
    }
}
