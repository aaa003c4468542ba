//! String helpers
//!
//! Small conveniences used by process scripts: trimming, capitalisation,
//! UTF-8 byte handling, diacritic folding and fixed-width padding.

/// Trim a possibly absent string, `None` becomes `""`
#[must_use]
pub fn safe_trim(value: Option<&str>) -> &str {
    value.map_or("", str::trim)
}

/// Uppercase the first character, leave the rest unchanged
#[must_use]
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// UTF-8 bytes of a string
#[must_use]
pub fn encode_utf8(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decode UTF-8 bytes, replacing invalid sequences with U+FFFD
#[must_use]
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Length of a string in UTF-8 bytes
///
/// This is what a database column sized in bytes sees, as opposed to the
/// character count.
#[must_use]
pub const fn utf8_length(value: &str) -> usize {
    value.len()
}

/// Replace Latin-1 accented letters with their unaccented base letter
///
/// Accented characters take more than one byte in UTF-8, which can overflow
/// byte-sized database columns. Covers the ranges À-Æ, È-Ë, Ì-Ï, Ñ, Ò-Ø, Ù-Ü,
/// Ç and their lowercase forms; everything else is kept.
#[must_use]
pub fn remove_diacritics(value: &str) -> String {
    value.chars().map(fold_diacritic).collect()
}

const fn fold_diacritic(c: char) -> char {
    match c {
        'À'..='Æ' => 'A',
        'à'..='æ' => 'a',
        'È'..='Ë' => 'E',
        'è'..='ë' => 'e',
        'Ì'..='Ï' => 'I',
        'ì'..='ï' => 'i',
        'Ò'..='Ø' => 'O',
        'ò'..='ø' => 'o',
        'Ù'..='Ü' => 'U',
        'ù'..='ü' => 'u',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ç' => 'C',
        'ç' => 'c',
        other => other,
    }
}

/// Left-pad `value` with `fill` up to `width` characters
///
/// Longer values are returned unchanged.
#[must_use]
pub fn pad_left(value: &str, width: usize, fill: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    std::iter::repeat_n(fill, width - len).chain(value.chars()).collect()
}
