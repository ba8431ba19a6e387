//! The Kruti Dev 010 glyph mapping table and the legacy marker characters.

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

use crate::error::TableError;

/// Legacy glyph for the pre-posed short-I vowel sign. It precedes the
/// consonant it attaches to and is relocated by the reordering passes
/// rather than substituted by the table.
pub const SHORT_I_MARKER: char = 'f';

/// Legacy glyph for a reph. It follows the consonant cluster it attaches to
/// and is relocated backward by the reordering passes.
pub const REPH_MARKER: char = 'Z';

/// Single glyphs that expand to marker-bearing sequences before the table
/// pass, so the relocation passes see the same shape as the two-keystroke
/// spellings.
pub const SPECIAL_EXPANSIONS: &[(char, &str)] = &[
    ('±', "Z\u{0902}"), // reph with anusvara
    ('Ç', "f\u{0902}"), // pre-posed short-I with anusvara
];

/// Returns the marker-bearing expansion of a special legacy glyph, or `None`
/// if the glyph has no special expansion.
pub fn special_expansion(ch: char) -> Option<&'static str> {
    SPECIAL_EXPANSIONS
        .iter()
        .find(|&&(glyph, _)| glyph == ch)
        .map(|&(_, expansion)| expansion)
}

/// The ordered substitution table for Kruti Dev 010.
///
/// Order is load-bearing. Entries are applied first to last, each as a
/// global replacement, so a pattern must precede every later entry it occurs
/// in as a substring, and an entry whose replacement is another entry's
/// pattern (the punctuation producers at the end) must follow its consumer.
/// `MappingTable::new` enforces the substring half of this at construction.
#[rustfmt::skip]
const GLYPH_MAPPINGS: &[(&str, &str)] = &[
    // Reph-bearing cluster glyphs. The backward scan cannot rebuild these,
    // so they are substituted whole before the reph marker is interpreted.
    (")Z", "र्द्ध"),  // rddha
    ("nzZ", "र्द्र"), // rdra

    // Digits
    ("å", "०"),
    ("ƒ", "१"),
    ("„", "२"),
    ("…", "३"),
    ("†", "४"),
    ("‡", "५"),
    ("ˆ", "६"),
    ("‰", "७"),
    ("Š", "८"),
    ("‹", "९"),

    // Nukta consonants, ahead of their plain bases
    ("d+", "क़"),   // qa
    ("[+k", "ख़"), // khha
    ("[+", "ख़्"), // half khha
    ("x+", "ग़"),   // ghha
    ("T+", "ज़्"), // half za
    ("t+", "ज़"),   // za
    ("M+", "ड़"),   // dddha
    ("<+", "ढ़"),   // rha
    ("Q+", "फ़"),   // fa
    ("j+", "ऱ"),   // rra
    ("u+", "ऩ"),   // nnna
    (";+", "य़"),   // yya

    // Conjunct ligature glyphs
    ("Ùk", "त्त"),  // tta
    ("Ù", "त्त्"),  // half tta
    ("ä", "क्त"),   // kta
    ("–", "दृ"),    // da vocalic r
    ("—", "कृ"),    // ka vocalic r
    ("é", "न्न"),   // nna
    ("à", "ह्न"),   // hna
    ("á", "ह्य"),   // hya
    ("â", "हृ"),    // ha vocalic r
    ("ã", "ह्म"),   // hma
    ("ºz", "ह्र"),  // hra
    ("º", "ह्"),    // half ha
    ("í", "द्द"),   // dda
    ("{k", "क्ष"),  // kssa
    ("{", "क्ष्"),  // half kssa
    ("=", "त्र"),   // tra
    ("«", "त्र्"),  // half tra
    ("Nî", "छ्य"), // chya
    ("Vî", "ट्य"), // ttya
    ("Bî", "ठ्य"), // tthya
    ("Mî", "ड्य"), // ddya
    ("<î", "ढ्य"), // ddhya
    ("|", "द्य"),   // dya
    ("K", "ज्ञ"),   // jnya
    ("}", "द्व"),   // dva
    ("J", "श्र"),   // shra
    ("Vª", "ट्र"), // ttra
    ("Mª", "ड्र"), // ddra
    ("<ª", "ढ्र"), // ddhra
    ("Ø", "क्र"),   // kra
    ("Ý", "फ्र"),   // phra
    ("æ", "द्र"),   // dra
    ("ç", "प्र"),   // pra
    ("Á", "प्र"),   // pra, variant glyph
    ("xz", "ग्र"),  // gra
    ("#", "रु"),    // ru
    (":", "रू"),    // ruu

    // Independent vowels. Longer a-forms precede their prefixes.
    ("v‚", "ऑ"),  // candra o
    ("vks", "ओ"), // o
    ("vkS", "औ"), // au
    ("vk", "आ"),  // aa
    ("v", "अ"),    // a
    ("Ã", "ई"),    // ii
    ("bZ", "ई"),  // ii, spelled with the reph glyph
    ("b", "इ"),    // i
    ("m", "उ"),    // u
    ("Å", "ऊ"),    // uu
    (",s", "ऐ"),  // ai
    (",", "ए"),    // e
    ("_", "ऋ"),    // vocalic r

    // Consonants. Full forms precede half forms.
    ("ô", "क्क"), // kka
    ("d", "क"),
    ("Dk", "क"),
    ("D", "क्"),
    ("[k", "ख"),
    ("[", "ख्"),
    ("x", "ग"),
    ("Xk", "ग"),
    ("X", "ग्"),
    ("?k", "घ"),
    ("?", "घ्"),
    ("³", "ङ"),
    ("p", "च"),
    ("Pk", "च"),
    ("P", "च्"),
    ("N", "छ"),
    ("t", "ज"),
    ("Tk", "ज"),
    ("T", "ज्"),
    (">", "झ"),
    ("÷", "झ्"),
    ("¥", "ञ"),
    ("V", "ट"),
    ("B", "ठ"),
    ("M", "ड"),
    ("<", "ढ"),
    (".k", "ण"),
    (".", "ण्"),
    ("r", "त"),
    ("Rk", "त"),
    ("R", "त्"),
    ("Fk", "थ"),
    ("F", "थ्"),
    (")", "द्ध"), // ddha
    ("n", "द"),
    ("/k", "ध"),
    ("èk", "ध"), // dha, variant glyph
    ("/", "ध्"),
    ("è", "ध्"), // half dha, variant glyph
    ("Ë", "ध्"), // half dha, variant glyph
    ("u", "न"),
    ("Uk", "न"),
    ("U", "न्"),
    ("i", "प"),
    ("Ik", "प"),
    ("I", "प्"),
    ("Q", "फ"),
    ("¶", "फ्"),
    ("c", "ब"),
    ("Ck", "ब"),
    ("C", "ब्"),
    ("Hk", "भ"),
    ("H", "भ्"),
    ("e", "म"),
    ("Ek", "म"),
    ("E", "म्"),
    (";", "य"),
    ("¸", "य्"),
    ("j", "र"),
    ("y", "ल"),
    ("Yk", "ल"),
    ("Y", "ल्"),
    ("G", "ळ"),
    ("o", "व"),
    ("Ok", "व"),
    ("O", "व्"),
    ("'k", "श"),
    ("'", "श्"),
    ("Ük", "श"), // sha, variant glyph
    ("Ü", "श्"), // half sha, variant glyph
    ("\"k", "ष"),
    ("\"", "ष्"),
    ("l", "स"),
    ("Lk", "स"),
    ("L", "स्"),
    ("g", "ह"),

    // Dependent vowel signs. The split o and au glyphs precede the bare aa.
    ("È", "ीं"), // ii with anusvara
    ("z", "्र"),  // ra below
    ("‚", "ॉ"),   // candra o
    ("ks", "ो"),  // o
    ("kS", "ौ"),  // au
    ("k", "ा"),    // aa
    ("h", "ी"),    // ii
    ("q", "ु"),    // u
    ("w", "ू"),    // uu
    ("`", "ृ"),    // vocalic r
    ("s", "े"),    // e
    ("S", "ै"),    // ai

    // Signs
    ("a", "ं"),  // anusvara
    ("¡", "ँ"),  // candrabindu
    ("%", "ः"),  // visarga
    ("W", "ॅ"),  // candra e
    ("~", "्"),  // virama
    ("+", "़"),  // nukta

    // Punctuation. Consumers precede the producers of the same character:
    // the "(" entry must run before the entry that emits "(".
    ("(", ";"),
    ("^", "‘"),
    ("*", "’"),
    ("Þ", "“"),
    ("ß", "”"),
    ("¼", "("),
    ("½", ")"),
    ("¿", "{"),
    ("À", "}"),
    ("]", ","),
    ("A", "।"), // danda
    ("\\", "?"),
];

/// An ordered sequence of legacy pattern to Unicode replacement entries,
/// validated so that no earlier pattern can destroy a later one.
#[derive(Clone, Debug)]
pub struct MappingTable {
    entries: Vec<(&'static str, &'static str)>,
}

impl MappingTable {
    /// Builds a table from `entries`, rejecting empty patterns, duplicate
    /// patterns, and any earlier pattern that occurs as a substring of a
    /// later pattern.
    pub fn new(
        entries: &[(&'static str, &'static str)],
    ) -> Result<MappingTable, TableError> {
        let mut seen = FxHashSet::default();
        for &(pattern, _) in entries {
            if pattern.is_empty() {
                return Err(TableError::EmptyPattern);
            }
            if !seen.insert(pattern) {
                return Err(TableError::DuplicatePattern(pattern));
            }
        }
        for (i, &(earlier, _)) in entries.iter().enumerate() {
            for &(later, _) in &entries[i + 1..] {
                if later.contains(earlier) {
                    return Err(TableError::ShadowedPattern { earlier, later });
                }
            }
        }
        Ok(MappingTable {
            entries: entries.to_vec(),
        })
    }

    /// Applies every entry in order, each as a global replacement over the
    /// accumulated string.
    pub fn apply(&self, text: &str) -> String {
        apply_entries(&self.entries, text)
    }

    /// The entries in application order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

fn apply_entries(entries: &[(&'static str, &'static str)], text: &str) -> String {
    let mut acc = text.to_string();
    for &(pattern, replacement) in entries {
        if acc.contains(pattern) {
            acc = acc.replace(pattern, replacement);
        }
    }
    acc
}

lazy_static! {
    static ref TABLE: MappingTable =
        MappingTable::new(GLYPH_MAPPINGS).expect("glyph mapping table ordering");
}

/// The built-in Kruti Dev 010 table.
pub fn table() -> &'static MappingTable {
    &TABLE
}
