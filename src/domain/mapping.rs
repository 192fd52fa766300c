//! Bidirectional Latin↔Arabic key-position mapping.
//!
//! Both lookup tables are generated from one canonical pair list at first
//! use, so the two directions cannot drift apart. The first Latin spelling
//! in each group is the canonical one and is what the Arabic→Latin
//! direction yields; the extra spellings (upper case, shifted punctuation)
//! collapse onto the same Arabic symbol, which makes Latin→Arabic→Latin
//! lossy with respect to case.

use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    ToArabic,
    ToLatin,
}

const LAM: char = 'ل';
const ALIF: char = 'ا';

/// QWERTY key positions and the Arabic symbols on the same physical keys.
///
/// `b`/`B` is intentionally absent: on the Arabic layout that key produces
/// the lam-alif ligature pair and is handled as a digraph in [`transcode`].
const KEY_PAIRS: &[(&[char], char)] = &[
    // top row
    (&['q', 'Q'], 'ض'),
    (&['w', 'W'], 'ص'),
    (&['e', 'E'], 'ث'),
    (&['r', 'R'], 'ق'),
    (&['t', 'T'], 'ف'),
    (&['y', 'Y'], 'غ'),
    (&['u', 'U'], 'ع'),
    (&['i', 'I'], 'ه'),
    (&['o', 'O'], 'خ'),
    (&['p', 'P'], 'ح'),
    (&['[', '{'], 'ج'),
    (&[']', '}'], 'د'),
    // home row
    (&['a', 'A'], 'ش'),
    (&['s', 'S'], 'س'),
    (&['d', 'D'], 'ي'),
    (&['f', 'F'], 'ب'),
    (&['g', 'G'], LAM),
    (&['h', 'H'], ALIF),
    (&['j', 'J'], 'ت'),
    (&['k', 'K'], 'ن'),
    (&['l', 'L'], 'م'),
    (&[';', ':'], 'ك'),
    (&['\'', '"'], 'ط'),
    // bottom row
    (&['z', 'Z'], 'ئ'),
    (&['x', 'X'], 'ء'),
    (&['c', 'C'], 'ؤ'),
    (&['v', 'V'], 'ر'),
    (&['n', 'N'], 'ى'),
    (&['m', 'M'], 'ة'),
    (&[',', '<'], 'و'),
    (&['.', '>'], 'ز'),
    (&['/', '?'], 'ظ'),
    (&['\\', '|'], 'ذ'),
];

/// Immutable two-way lookup built from [`KEY_PAIRS`].
pub struct LayoutMap {
    to_arabic: HashMap<char, char>,
    to_latin: HashMap<char, char>,
}

impl LayoutMap {
    fn build() -> Self {
        let mut to_arabic = HashMap::new();
        let mut to_latin = HashMap::new();

        for &(latin_spellings, arabic) in KEY_PAIRS {
            for &latin in latin_spellings {
                let prev = to_arabic.insert(latin, arabic);
                debug_assert!(prev.is_none(), "duplicate Latin spelling {latin:?}");
            }

            // First spelling is canonical; the reverse direction always
            // yields lowercase/unshifted.
            let prev = to_latin.insert(arabic, latin_spellings[0]);
            debug_assert!(prev.is_none(), "duplicate Arabic symbol {arabic:?}");
        }

        Self {
            to_arabic,
            to_latin,
        }
    }

    pub fn to_arabic(&self, ch: char) -> Option<char> {
        self.to_arabic.get(&ch).copied()
    }

    pub fn to_latin(&self, ch: char) -> Option<char> {
        self.to_latin.get(&ch).copied()
    }

    /// Latin characters present in the forward table, for invariant tests.
    #[cfg(test)]
    pub fn latin_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.to_arabic.keys().copied()
    }
}

pub static QWERTY_ARABIC: LazyLock<LayoutMap> = LazyLock::new(LayoutMap::build);

/// Re-types `text` as if it had been typed on the other layout.
///
/// Unmapped characters (digits, whitespace, symbols shared by both layouts)
/// pass through unchanged, so the function is total over all strings and
/// behaves as best-effort on mixed-layout input. Only the lam-alif digraph
/// changes the output length.
pub fn transcode(text: &str, direction: Direction) -> String {
    match direction {
        Direction::ToArabic => to_arabic(text),
        Direction::ToLatin => to_latin(text),
    }
}

fn to_arabic(text: &str) -> String {
    let map = &*QWERTY_ARABIC;
    // May grow: b/B expands to two symbols.
    let mut out = String::with_capacity(text.len() * 2);

    for ch in text.chars() {
        if ch == 'b' || ch == 'B' {
            out.push(LAM);
            out.push(ALIF);
        } else if let Some(arabic) = map.to_arabic(ch) {
            out.push(arabic);
        } else {
            out.push(ch);
        }
    }

    out
}

fn to_latin(text: &str) -> String {
    let map = &*QWERTY_ARABIC;
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // The digraph wins over the single-character table: lam directly
        // followed by alif collapses back to the b key.
        if ch == LAM && chars.peek() == Some(&ALIF) {
            chars.next();
            out.push('b');
        } else if let Some(latin) = map.to_latin(ch) {
            out.push(latin);
        } else {
            out.push(ch);
        }
    }

    out
}
