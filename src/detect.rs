//! Heuristics for deciding whether text is in the legacy encoding.
//!
//! Content fields mix pasted legacy text with already-converted Devanagari
//! and plain English. Converted Devanagari survives another conversion
//! unchanged, but English does not (most ASCII letters are legacy glyphs),
//! so callers need a cheap routing predicate before converting a field.

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

use crate::mappings;

lazy_static! {
    static ref LEGACY_SIGNATURE: FxHashSet<char> = {
        let mut signature = FxHashSet::default();
        for (pattern, _) in mappings::table().entries() {
            signature.extend(pattern.chars().filter(|ch| !ch.is_ascii()));
        }
        for &(glyph, _) in mappings::SPECIAL_EXPANSIONS {
            signature.insert(glyph);
        }
        signature
    };
}

/// Returns `true` if `text` contains at least one character peculiar to the
/// legacy encoding.
///
/// Only the non-ASCII pattern characters count as evidence, since the ASCII
/// letters are shared with English. Short legacy fragments spelled entirely
/// in ASCII glyphs are not detected; realistic legacy passages contain
/// matra, conjunct, or punctuation glyphs outside ASCII.
pub fn looks_like_legacy(text: &str) -> bool {
    text.chars().any(|ch| LEGACY_SIGNATURE.contains(&ch))
}
