//! Defensive text handling for driver-supplied values.
//!
//! Database drivers occasionally hand over text salvaged from ill-formed
//! UTF-16 storage. Sanitization happens at two points: [`from_utf16_units`]
//! at the loading boundary, where unpaired surrogate units are dropped, and
//! [`clean_text`] at the accessor surface, where Unicode noncharacters and
//! surrounding whitespace are removed.

/// Decode driver-native UTF-16 units, dropping unpaired surrogates.
///
/// Well-formed input decodes unchanged; a lone surrogate unit is removed
/// and the remaining units are preserved.
pub fn from_utf16_units(units: &[u16]) -> String {
    std::char::decode_utf16(units.iter().copied())
        .filter_map(std::result::Result::ok)
        .collect()
}

/// Strip Unicode noncharacters and trim surrounding whitespace.
///
/// Text made only of valid scalar values passes through unchanged apart
/// from trimming.
pub fn clean_text(input: &str) -> String {
    input.trim().chars().filter(|c| !is_noncharacter(*c)).collect()
}

// U+FDD0..=U+FDEF plus the two final code points of every plane.
fn is_noncharacter(c: char) -> bool {
    let cp = u32::from(c);
    matches!(cp, 0xFDD0..=0xFDEF) || (cp & 0xFFFE) == 0xFFFE
}
