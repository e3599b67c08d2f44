//! Collect the codepoints encoded by a font's Unicode cmap subtables.

use std::collections::BTreeSet;

use read_fonts::{
    tables::cmap::{Cmap, CmapSubtable, EncodingRecord, PlatformId},
    FontRef, ReadError, TableProvider,
};

// <https://github.com/fonttools/fonttools/blob/6fa1a76e061c2e84243d8cac/Lib/fontTools/ttLib/tables/_c_m_a_p.py#L334>
fn is_unicode(record: &EncodingRecord) -> bool {
    record.platform_id() == PlatformId::Unicode
        || (record.platform_id() == PlatformId::Windows
            && [0, 1, 10].contains(&record.encoding_id()))
}

/// The set of codepoints encoded by a font's Unicode cmap subtables.
///
/// Fails if the font has no cmap table, or a Unicode subtable is malformed.
pub fn unicode_codepoints(font: &FontRef) -> Result<BTreeSet<u32>, ReadError> {
    codepoints_in_cmap(&font.cmap()?)
}

/// Union the codepoints of every Unicode-encoded subtable in a cmap table.
///
/// Legacy and symbol subtables (Macintosh, Windows non-Unicode encodings)
/// are ignored. The returned set is deduplicated and ascending.
pub fn codepoints_in_cmap(cmap: &Cmap) -> Result<BTreeSet<u32>, ReadError> {
    let offset_data = cmap.offset_data();
    let mut codepoints = BTreeSet::new();
    for record in cmap.encoding_records().iter().filter(|r| is_unicode(r)) {
        collect_subtable(&record.subtable(offset_data)?, &mut codepoints);
    }
    Ok(codepoints)
}

fn collect_subtable(subtable: &CmapSubtable, codepoints: &mut BTreeSet<u32>) {
    match subtable {
        CmapSubtable::Format0(subtable) => {
            codepoints.extend(0..subtable.glyph_id_array().len() as u32)
        }
        CmapSubtable::Format4(subtable) => codepoints.extend(subtable.iter().map(|(cp, _)| cp)),
        CmapSubtable::Format6(subtable) => {
            let first = u32::from(subtable.first_code());
            let count = subtable.glyph_id_array().len() as u32;
            codepoints.extend(first..first + count);
        }
        CmapSubtable::Format10(subtable) => {
            let first = subtable.start_char_code();
            let count = subtable.glyph_id_array().len() as u32;
            codepoints.extend(first..first.saturating_add(count).min(char::MAX as u32 + 1));
        }
        CmapSubtable::Format12(subtable) => codepoints.extend(subtable.iter().map(|(cp, _)| cp)),
        CmapSubtable::Format13(subtable) => {
            for group in subtable.groups() {
                let start = group.start_char_code();
                // Clamp; a malformed group can claim the whole u32 range
                let end = group.end_char_code().min(char::MAX as u32);
                if start <= end {
                    codepoints.extend(start..=end);
                }
            }
        }
        CmapSubtable::Format2(_) => {
            log::warn!("Ignoring Unicode cmap subtable in unsupported format 2")
        }
        CmapSubtable::Format8(_) => {
            log::warn!("Ignoring Unicode cmap subtable in unsupported format 8")
        }
        CmapSubtable::Format14(_) => {
            log::warn!("Ignoring variation-sequence cmap subtable (format 14)")
        }
        _ => log::warn!("Ignoring Unicode cmap subtable in unknown format"),
    }
}
