//! Hand-written romaji <-> hiragana transliteration.
//!
//! This is not a phonetic model: it is a fixed lookup table applied as
//! longest-key-first global replacement, enough to let latin-script queries
//! like "haruto" reach はると and to render readings back as romaji for
//! prefix search. Katakana and kanji are passed through untouched.

use std::sync::LazyLock;

/// Romaji -> hiragana table. Youon digraphs (kya, shu, cho, ...) must be
/// listed so the longest-first pass consumes them before their single-vowel
/// prefixes.
static ROMAJI_TO_HIRAGANA: &[(&str, &str)] = &[
    ("a", "あ"), ("ka", "か"), ("ga", "が"), ("sa", "さ"), ("za", "ざ"),
    ("ta", "た"), ("da", "だ"), ("na", "な"), ("ha", "は"), ("ba", "ば"),
    ("pa", "ぱ"), ("ma", "ま"), ("ya", "や"), ("ra", "ら"), ("wa", "わ"),
    ("i", "い"), ("ki", "き"), ("gi", "ぎ"), ("si", "し"), ("shi", "し"),
    ("zi", "じ"), ("ji", "じ"), ("ti", "ち"), ("chi", "ち"), ("di", "ぢ"),
    ("ni", "に"), ("hi", "ひ"), ("bi", "び"), ("pi", "ぴ"), ("mi", "み"),
    ("ri", "り"),
    ("u", "う"), ("ku", "く"), ("gu", "ぐ"), ("su", "す"), ("zu", "ず"),
    ("tu", "つ"), ("tsu", "つ"), ("du", "づ"), ("nu", "ぬ"), ("hu", "ふ"),
    ("fu", "ふ"), ("bu", "ぶ"), ("pu", "ぷ"), ("mu", "む"), ("yu", "ゆ"),
    ("ru", "る"),
    ("e", "え"), ("ke", "け"), ("ge", "げ"), ("se", "せ"), ("ze", "ぜ"),
    ("te", "て"), ("de", "で"), ("ne", "ね"), ("he", "へ"), ("be", "べ"),
    ("pe", "ぺ"), ("me", "め"), ("re", "れ"),
    ("o", "お"), ("ko", "こ"), ("go", "ご"), ("so", "そ"), ("zo", "ぞ"),
    ("to", "と"), ("do", "ど"), ("no", "の"), ("ho", "ほ"), ("bo", "ぼ"),
    ("po", "ぽ"), ("mo", "も"), ("yo", "よ"), ("ro", "ろ"), ("wo", "を"),
    ("n", "ん"),
    // Youon combinations common in given names
    ("kya", "きゃ"), ("gya", "ぎゃ"), ("sha", "しゃ"), ("ja", "じゃ"),
    ("cha", "ちゃ"), ("nya", "にゃ"), ("hya", "ひゃ"), ("bya", "びゃ"),
    ("pya", "ぴゃ"), ("mya", "みゃ"), ("rya", "りゃ"),
    ("kyu", "きゅ"), ("gyu", "ぎゅ"), ("shu", "しゅ"), ("ju", "じゅ"),
    ("chu", "ちゅ"), ("nyu", "にゅ"), ("hyu", "ひゅ"), ("byu", "びゅ"),
    ("pyu", "ぴゅ"), ("myu", "みゅ"), ("ryu", "りゅ"),
    ("kyo", "きょ"), ("gyo", "ぎょ"), ("sho", "しょ"), ("jo", "じょ"),
    ("cho", "ちょ"), ("nyo", "にょ"), ("hyo", "ひょ"), ("byo", "びょ"),
    ("pyo", "ぴょ"), ("myo", "みょ"), ("ryo", "りょ"),
];

/// Hiragana -> romaji table. Digraphs first for the same reason.
static HIRAGANA_TO_ROMAJI: &[(&str, &str)] = &[
    ("きゃ", "kya"), ("ぎゃ", "gya"), ("しゃ", "sha"), ("じゃ", "ja"),
    ("ちゃ", "cha"), ("にゃ", "nya"), ("ひゃ", "hya"), ("びゃ", "bya"),
    ("ぴゃ", "pya"), ("みゃ", "mya"), ("りゃ", "rya"),
    ("きゅ", "kyu"), ("ぎゅ", "gyu"), ("しゅ", "shu"), ("じゅ", "ju"),
    ("ちゅ", "chu"), ("にゅ", "nyu"), ("ひゅ", "hyu"), ("びゅ", "byu"),
    ("ぴゅ", "pyu"), ("みゅ", "myu"), ("りゅ", "ryu"),
    ("きょ", "kyo"), ("ぎょ", "gyo"), ("しょ", "sho"), ("じょ", "jo"),
    ("ちょ", "cho"), ("にょ", "nyo"), ("ひょ", "hyo"), ("びょ", "byo"),
    ("ぴょ", "pyo"), ("みょ", "myo"), ("りょ", "ryo"),
    ("あ", "a"), ("か", "ka"), ("が", "ga"), ("さ", "sa"), ("ざ", "za"),
    ("た", "ta"), ("だ", "da"), ("な", "na"), ("は", "ha"), ("ば", "ba"),
    ("ぱ", "pa"), ("ま", "ma"), ("や", "ya"), ("ら", "ra"), ("わ", "wa"),
    ("い", "i"), ("き", "ki"), ("ぎ", "gi"), ("し", "shi"), ("じ", "ji"),
    ("ち", "chi"), ("ぢ", "di"), ("に", "ni"), ("ひ", "hi"), ("び", "bi"),
    ("ぴ", "pi"), ("み", "mi"), ("り", "ri"),
    ("う", "u"), ("く", "ku"), ("ぐ", "gu"), ("す", "su"), ("ず", "zu"),
    ("つ", "tsu"), ("づ", "du"), ("ぬ", "nu"), ("ふ", "fu"), ("ぶ", "bu"),
    ("ぷ", "pu"), ("む", "mu"), ("ゆ", "yu"), ("る", "ru"),
    ("え", "e"), ("け", "ke"), ("げ", "ge"), ("せ", "se"), ("ぜ", "ze"),
    ("て", "te"), ("で", "de"), ("ね", "ne"), ("へ", "he"), ("べ", "be"),
    ("ぺ", "pe"), ("め", "me"), ("れ", "re"),
    ("お", "o"), ("こ", "ko"), ("ご", "go"), ("そ", "so"), ("ぞ", "zo"),
    ("と", "to"), ("ど", "do"), ("の", "no"), ("ほ", "ho"), ("ぼ", "bo"),
    ("ぽ", "po"), ("も", "mo"), ("よ", "yo"), ("ろ", "ro"), ("を", "wo"),
    ("ん", "n"),
];

/// Table entries sorted longest key first, built once.
fn sorted_longest_first(table: &'static [(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    let mut pairs = table.to_vec();
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    pairs
}

static ROMAJI_PASS: LazyLock<Vec<(&str, &str)>> =
    LazyLock::new(|| sorted_longest_first(ROMAJI_TO_HIRAGANA));

static HIRAGANA_PASS: LazyLock<Vec<(&str, &str)>> =
    LazyLock::new(|| sorted_longest_first(HIRAGANA_TO_ROMAJI));

fn apply_pass(input: &str, pass: &[(&str, &str)]) -> String {
    let mut result = input.to_string();
    for &(from, to) in pass {
        if result.contains(from) {
            result = result.replace(from, to);
        }
    }
    result
}

/// Convert a latin-script query to hiragana.
///
/// The input is lowercased first; characters with no table entry (kanji,
/// punctuation) pass through unchanged.
///
/// # Example
/// ```
/// use koyomi::romaji::romaji_to_hiragana;
///
/// assert_eq!(romaji_to_hiragana("haruto"), "はると");
/// ```
pub fn romaji_to_hiragana(romaji: &str) -> String {
    apply_pass(&romaji.to_lowercase(), &ROMAJI_PASS)
}

/// Convert a hiragana reading to romaji for reverse search.
///
/// # Example
/// ```
/// use koyomi::romaji::hiragana_to_romaji;
///
/// assert_eq!(hiragana_to_romaji("はると"), "haruto");
/// ```
pub fn hiragana_to_romaji(hiragana: &str) -> String {
    apply_pass(hiragana, &HIRAGANA_PASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_romaji_to_hiragana_basic() {
        assert_eq!(romaji_to_hiragana("haruto"), "はると");
        assert_eq!(romaji_to_hiragana("minato"), "みなと");
        assert_eq!(romaji_to_hiragana("HARUTO"), "はると");
    }

    #[test]
    fn test_romaji_youon_consumed_before_singles() {
        assert_eq!(romaji_to_hiragana("shouta"), "しょうた");
        assert_eq!(romaji_to_hiragana("ryo"), "りょ");
    }

    #[test]
    fn test_hiragana_to_romaji_roundtrip_names() {
        assert_eq!(hiragana_to_romaji("はると"), "haruto");
        assert_eq!(hiragana_to_romaji("しょうた"), "shouta");
        assert_eq!(hiragana_to_romaji("つむぎ"), "tsumugi");
        assert_eq!(hiragana_to_romaji("めぐみ"), "megumi");
    }

    #[test]
    fn test_non_table_characters_pass_through() {
        assert_eq!(romaji_to_hiragana("陽翔"), "陽翔");
        assert_eq!(hiragana_to_romaji("陽翔"), "陽翔");
    }
}
