//! The glyph reorderer: Kruti Dev 010 text to Unicode Devanagari.
//!
//! Kruti Dev stores glyphs in visual order. Rendering the text as Unicode
//! means substituting every legacy glyph and then moving the pre-posed
//! short-I signs and the trailing reph markers to their logical positions.
//! The passes below run in a fixed order; each operates on the whole buffer
//! and rescans from the position following its last edit, never over a
//! frozen copy.

use crate::devanagari::{
    consonant, matra, LETTER_RA, SIGN_AA, SIGN_AI, SIGN_ANUSVARA, SIGN_AU, SIGN_E, SIGN_I, SIGN_O,
    SIGN_VIRAMA,
};
use crate::mappings::{self, REPH_MARKER, SHORT_I_MARKER};

/// Converts Kruti Dev 010 encoded `text` to Unicode Devanagari.
///
/// Best effort: characters outside the mapping table pass through unchanged,
/// so mixed input (legacy Hindi with stray ASCII or already-converted
/// Devanagari) degrades gracefully. Never fails.
pub fn convert(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let expanded = expand_special_glyphs(text);
    let substituted = mappings::table().apply(&expanded);

    let mut cs: Vec<char> = substituted.chars().collect();
    reorder_short_i_anusvara(&mut cs);
    reorder_short_i(&mut cs);
    fix_short_i_before_half_consonant(&mut cs);
    reorder_reph(&mut cs);
    collapse_split_matras(&mut cs);
    cs.into_iter().collect()
}

/// Expand the combined glyphs into marker-bearing sequences so that the
/// relocation passes see the same shape as the two-keystroke spellings.
fn expand_special_glyphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match mappings::special_expansion(ch) {
            Some(expansion) => out.push_str(expansion),
            None => out.push(ch),
        }
    }
    out
}

/// Reorder "Marker, Anusvara, C" to "C, Sign I, Anusvara".
///
/// Must run before `reorder_short_i` so the plain relocation cannot split
/// the compound token.
fn reorder_short_i_anusvara(cs: &mut Vec<char>) {
    let mut i = 0;
    while i + 2 < cs.len() {
        if cs[i] == SHORT_I_MARKER && cs[i + 1] == SIGN_ANUSVARA {
            cs[i] = cs[i + 2];
            cs[i + 1] = SIGN_I;
            cs[i + 2] = SIGN_ANUSVARA;
            i += 3;
        } else {
            i += 1;
        }
    }
}

/// Reorder "Marker, C" to "C, Sign I". A trailing marker with no following
/// character is left alone.
fn reorder_short_i(cs: &mut Vec<char>) {
    let mut i = 0;
    while i + 1 < cs.len() {
        if cs[i] == SHORT_I_MARKER {
            cs[i] = cs[i + 1];
            cs[i + 1] = SIGN_I;
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Reorder "Sign I, Virama, C" to "Virama, C, Sign I".
///
/// The short-I relocation lands the sign directly after the next character,
/// which for a half consonant is one position too early. Advancing to the
/// relocated sign lets a chain of half forms resolve in a single pass.
fn fix_short_i_before_half_consonant(cs: &mut Vec<char>) {
    let mut i = 0;
    while i + 2 < cs.len() {
        if cs[i] == SIGN_I && cs[i + 1] == SIGN_VIRAMA && consonant(cs[i + 2]) {
            cs[i] = SIGN_VIRAMA;
            cs[i + 1] = cs[i + 2];
            cs[i + 2] = SIGN_I;
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Relocate each trailing reph marker to the front of its cluster as
/// "Ra, Virama".
///
/// The scan walks backward from the marker over dependent signs to the base
/// consonant. If it reaches the start of the buffer while still on a sign,
/// the reph is prefixed at position 0. A marker at position 0 has no cluster
/// at all and is dropped.
fn reorder_reph(cs: &mut Vec<char>) {
    let mut i = 0;
    while i < cs.len() {
        if cs[i] != REPH_MARKER {
            i += 1;
            continue;
        }
        if i == 0 {
            log::debug!("dropping reph marker with no preceding cluster");
            cs.remove(0);
            continue;
        }
        let mut base = i - 1;
        while base > 0 && matra(cs[base]) {
            base -= 1;
        }
        cs.remove(i);
        cs.insert(base, SIGN_VIRAMA);
        cs.insert(base, LETTER_RA);
        i += 2;
    }
}

/// Recompose "Sign Aa, Sign E" to "Sign O" and "Sign Aa, Sign Ai" to
/// "Sign Au". The split forms arise when the aa glyph and the e or ai glyph
/// were substituted independently.
fn collapse_split_matras(cs: &mut Vec<char>) {
    let mut i = 0;
    while i + 1 < cs.len() {
        if cs[i] == SIGN_AA && cs[i + 1] == SIGN_E {
            cs[i] = SIGN_O;
            cs.remove(i + 1);
        } else if cs[i] == SIGN_AA && cs[i + 1] == SIGN_AI {
            cs[i] = SIGN_AU;
            cs.remove(i + 1);
        }
        i += 1;
    }
}
