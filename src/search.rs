//! Query matching over the Japanese name table.
//!
//! A query can arrive as kanji, hiragana, romaji, or a characteristic tag;
//! all forms are checked. The romaji path converts the query to hiragana and
//! the stored reading to romaji, so "haruto" reaches 陽翔 (はると) both ways.

use crate::romaji::{hiragana_to_romaji, romaji_to_hiragana};
use crate::store::NameRecord;

/// Filter the pool against a free-form query.
///
/// Exact display-form matches sort first, then exact reading matches; all
/// other hits keep pool order. An empty query returns no results, which is a
/// normal outcome rather than an error.
pub fn search_japanese(pool: &[NameRecord], query: &str) -> Vec<NameRecord> {
    let raw = query.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let lowered = raw.to_lowercase();
    let hiragana = romaji_to_hiragana(&lowered);

    let mut results: Vec<NameRecord> = pool
        .iter()
        .filter(|name| matches_query(name, raw, &lowered, &hiragana))
        .cloned()
        .collect();

    results.sort_by_key(|name| {
        let exact_display = name.display == raw;
        let exact_reading = name.phonetic() == raw || name.phonetic() == hiragana;
        match (exact_display, exact_reading) {
            (true, _) => 0,
            (false, true) => 1,
            (false, false) => 2,
        }
    });

    results
}

fn matches_query(name: &NameRecord, raw: &str, lowered: &str, hiragana: &str) -> bool {
    let reading = name.phonetic();

    // Exact forms
    if name.display == raw || name.display == lowered {
        return true;
    }
    if reading == raw || reading == lowered || reading == hiragana {
        return true;
    }

    // Substring forms
    if name.display.to_lowercase().contains(lowered) {
        return true;
    }
    if reading.contains(lowered) || reading.contains(hiragana) {
        return true;
    }

    // Romaji forms of the stored reading
    let name_romaji = hiragana_to_romaji(reading);
    if name_romaji == lowered || name_romaji.contains(lowered) || name_romaji.starts_with(lowered) {
        return true;
    }

    // Hiragana prefix ("はる" finding はると)
    if reading.starts_with(hiragana) {
        return true;
    }

    // Characteristic tags
    name.characteristics.iter().any(|tag| tag.contains(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Gender;

    fn record(display: &str, reading: &str, tags: &[&str]) -> NameRecord {
        NameRecord {
            display: display.to_string(),
            reading: Some(reading.to_string()),
            gender: Gender::M,
            yearly_ranks: [(2007, 1)].into_iter().collect(),
            characteristics: tags.iter().map(|t| t.to_string()).collect(),
            source: String::new(),
        }
    }

    fn pool() -> Vec<NameRecord> {
        vec![
            record("陽翔", "はると", &["밝음", "비상"]),
            record("湊", "みなと", &["만남"]),
            record("大翔", "ひろと", &["웅대함"]),
            record("遥", "はるか", &["멀리"]),
        ]
    }

    #[test]
    fn test_romaji_query_reaches_kanji_record() {
        let results = search_japanese(&pool(), "haruto");
        assert_eq!(results[0].display, "陽翔");
    }

    #[test]
    fn test_exact_kanji_and_reading_queries() {
        assert_eq!(search_japanese(&pool(), "湊")[0].display, "湊");
        assert_eq!(search_japanese(&pool(), "はると")[0].display, "陽翔");
    }

    #[test]
    fn test_romaji_prefix_matches_multiple() {
        // "haru" converts to はる, a prefix of both はると and はるか.
        let results = search_japanese(&pool(), "haru");
        let displays: Vec<&str> = results.iter().map(|r| r.display.as_str()).collect();
        assert!(displays.contains(&"陽翔"));
        assert!(displays.contains(&"遥"));
    }

    #[test]
    fn test_characteristic_tag_search() {
        let results = search_japanese(&pool(), "만남");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display, "湊");
    }

    #[test]
    fn test_empty_and_whitespace_queries() {
        assert!(search_japanese(&pool(), "").is_empty());
        assert!(search_japanese(&pool(), "   ").is_empty());
    }

    #[test]
    fn test_no_match_is_a_normal_empty_result() {
        assert!(search_japanese(&pool(), "xyz").is_empty());
    }

    #[test]
    fn test_exact_match_sorts_before_substring_match() {
        let mut names = pool();
        // A record whose reading contains はると without being exactly it.
        names.insert(0, record("陽翔史", "はるとし", &[]));
        let results = search_japanese(&names, "はると");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].display, "陽翔");
        assert_eq!(results[1].display, "陽翔史");
    }
}
