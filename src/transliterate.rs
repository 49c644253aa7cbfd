//! Character-level Bengali to Devanagari substitution.
//!
//! This is the last tier of the resolution pipeline. It never fails: characters
//! without an entry in the table are copied through unchanged, so the result is
//! always displayable even when it is only a script conversion of the input.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Bengali code points and their Devanagari counterparts.
///
/// Most of the two Unicode blocks line up one-to-one; the entries that do not
/// (khanda ta, the Assamese letters) are listed at the end.
const SCRIPT_TABLE: &[(char, &str)] = &[
    // Independent vowels.
    ('অ', "अ"),
    ('আ', "आ"),
    ('ই', "इ"),
    ('ঈ', "ई"),
    ('উ', "उ"),
    ('ঊ', "ऊ"),
    ('ঋ', "ऋ"),
    ('ঌ', "ऌ"),
    ('এ', "ए"),
    ('ঐ', "ऐ"),
    ('ও', "ओ"),
    ('ঔ', "औ"),
    ('ৠ', "ॠ"),
    ('ৡ', "ॡ"),
    // Consonants, including the nukta forms.
    ('ক', "क"),
    ('খ', "ख"),
    ('গ', "ग"),
    ('ঘ', "घ"),
    ('ঙ', "ङ"),
    ('চ', "च"),
    ('ছ', "छ"),
    ('জ', "ज"),
    ('ঝ', "झ"),
    ('ঞ', "ञ"),
    ('ট', "ट"),
    ('ঠ', "ठ"),
    ('ড', "ड"),
    ('ঢ', "ढ"),
    ('ণ', "ण"),
    ('ত', "त"),
    ('থ', "थ"),
    ('দ', "द"),
    ('ধ', "ध"),
    ('ন', "न"),
    ('প', "प"),
    ('ফ', "फ"),
    ('ব', "ब"),
    ('ভ', "भ"),
    ('ম', "म"),
    ('য', "य"),
    ('র', "र"),
    ('ল', "ल"),
    ('শ', "श"),
    ('ষ', "ष"),
    ('স', "स"),
    ('হ', "ह"),
    ('ড়', "ड़"),
    ('ঢ়', "ढ़"),
    ('য়', "य़"),
    // Dependent vowel signs and virama.
    ('\u{09BE}', "\u{093E}"),
    ('\u{09BF}', "\u{093F}"),
    ('\u{09C0}', "\u{0940}"),
    ('\u{09C1}', "\u{0941}"),
    ('\u{09C2}', "\u{0942}"),
    ('\u{09C3}', "\u{0943}"),
    ('\u{09C4}', "\u{0944}"),
    ('\u{09C7}', "\u{0947}"),
    ('\u{09C8}', "\u{0948}"),
    ('\u{09CB}', "\u{094B}"),
    ('\u{09CC}', "\u{094C}"),
    ('\u{09CD}', "\u{094D}"),
    ('\u{09E2}', "\u{0962}"),
    ('\u{09E3}', "\u{0963}"),
    // Candrabindu, anusvara, visarga, nukta, avagraha.
    ('\u{0981}', "\u{0901}"),
    ('\u{0982}', "\u{0902}"),
    ('\u{0983}', "\u{0903}"),
    ('\u{09BC}', "\u{093C}"),
    ('\u{09BD}', "\u{093D}"),
    // Digits.
    ('০', "०"),
    ('১', "१"),
    ('২', "२"),
    ('৩', "३"),
    ('৪', "४"),
    ('৫', "५"),
    ('৬', "६"),
    ('৭', "७"),
    ('৮', "८"),
    ('৯', "९"),
    // Letters without a one-to-one counterpart.
    ('ৎ', "त्"),
    ('ৰ', "र"),
    ('ৱ', "व"),
];

static SCRIPT_MAP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| SCRIPT_TABLE.iter().copied().collect());

/// Transliterates Bengali script into Devanagari, one character at a time.
pub fn transliterate(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match SCRIPT_MAP.get(&ch) {
            Some(mapped) => output.push_str(mapped),
            None => output.push(ch),
        }
    }
    output
}
