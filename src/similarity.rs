//! Weighted similarity scoring between names of the same language.
//!
//! The score is a plain integer sum over five signals: shared display-form
//! characters, phonetic prefix overlap, gender, peak-year proximity and
//! shared characteristic tags. It ranks candidates; it is not a calibrated
//! probability.
//!
//! # Asymmetry
//!
//! Shared-character counting is directional: candidate characters are
//! counted when they appear in the target's display form, so swapping target
//! and candidate can change the score (e.g. 翔 vs 翔翔). This matches the
//! original behavior and is covered by tests.

use serde::Serialize;

use crate::store::NameRecord;
use crate::trend::peak_year;

/// Points per candidate character found in the target display form.
const SHARED_CHAR_WEIGHT: i32 = 15;
/// Points for a phonetic two-character prefix overlap.
const PHONETIC_WEIGHT: i32 = 10;
/// Points for matching gender.
const GENDER_WEIGHT: i32 = 5;
/// Points when both peak years exist and differ by at most ten years.
const ERA_PROXIMITY_WEIGHT: i32 = 8;
/// Points per shared characteristic tag.
const SHARED_TAG_WEIGHT: i32 = 3;

/// Candidates scoring at or below this are dropped.
const MIN_SCORE: i32 = 5;

/// Maximum number of results returned.
const MAX_RESULTS: usize = 8;

/// Peak years at most this far apart count as the same era.
const ERA_WINDOW: i32 = 10;

/// A candidate paired with its score and human-readable reason.
///
/// Stored records are never annotated in place; results own a clone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarName {
    #[serde(flatten)]
    pub record: NameRecord,
    pub score: i32,
    pub similarity_reason: String,
}

/// Score every candidate against the target and return the top matches.
///
/// The pool is expected to be same-language; the target itself is skipped by
/// display-form equality. Ties keep pool order (stable sort).
pub fn similar_names(target: &NameRecord, pool: &[NameRecord]) -> Vec<SimilarName> {
    let target_peak = peak_year(&target.yearly_ranks);

    let mut scored: Vec<SimilarName> = pool
        .iter()
        .filter(|candidate| candidate.display != target.display)
        .filter_map(|candidate| {
            let (score, reason) = score_pair(target, target_peak, candidate);
            if score > MIN_SCORE {
                Some(SimilarName {
                    record: candidate.clone(),
                    score,
                    similarity_reason: reason,
                })
            } else {
                None
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RESULTS);
    scored
}

/// Accumulate the weighted score and reason fragments for one pair.
fn score_pair(target: &NameRecord, target_peak: Option<i32>, candidate: &NameRecord) -> (i32, String) {
    let mut score = 0;
    let mut reasons: Vec<String> = Vec::new();

    // 1. Shared display-form characters (candidate-driven, see module docs).
    let shared: String = candidate
        .display
        .chars()
        .filter(|&c| target.display.contains(c))
        .collect();
    if !shared.is_empty() {
        score += SHARED_CHAR_WEIGHT * shared.chars().count() as i32;
        reasons.push(format!("공통한자({})", shared));
    }

    // 2. Phonetic prefix overlap, checked in both directions.
    if phonetic_overlap(target.phonetic(), candidate.phonetic()) {
        score += PHONETIC_WEIGHT;
        reasons.push("발음유사".to_string());
    }

    // 3. Same gender.
    if target.gender == candidate.gender {
        score += GENDER_WEIGHT;
        reasons.push("같은성별".to_string());
    }

    // 4. Peak years within the same era window.
    if let (Some(t), Some(c)) = (target_peak, peak_year(&candidate.yearly_ranks)) {
        if (t - c).abs() <= ERA_WINDOW {
            score += ERA_PROXIMITY_WEIGHT;
            reasons.push("같은시대".to_string());
        }
    }

    // 5. Shared characteristic tags; the reason names the first one.
    let shared_tags: Vec<&String> = target
        .characteristics
        .iter()
        .filter(|tag| candidate.characteristics.contains(tag))
        .collect();
    if !shared_tags.is_empty() {
        score += SHARED_TAG_WEIGHT * shared_tags.len() as i32;
        reasons.push(format!("공통특성({})", shared_tags[0]));
    }

    (score, reasons.join(", "))
}

/// True when either reading contains the other's first two characters.
///
/// Readings shorter than two characters contribute their whole text.
fn phonetic_overlap(a: &str, b: &str) -> bool {
    let prefix = |s: &str| -> String { s.chars().take(2).collect() };
    let (pa, pb) = (prefix(a), prefix(b));
    if pa.is_empty() || pb.is_empty() {
        return false;
    }
    a.contains(&pb) || b.contains(&pa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Gender;

    fn record(
        display: &str,
        reading: &str,
        gender: Gender,
        ranks: &[(i32, u8)],
        tags: &[&str],
    ) -> NameRecord {
        NameRecord {
            display: display.to_string(),
            reading: Some(reading.to_string()),
            gender,
            yearly_ranks: ranks.iter().copied().collect(),
            characteristics: tags.iter().map(|t| t.to_string()).collect(),
            source: String::new(),
        }
    }

    #[test]
    fn test_shared_character_scoring() {
        let target = record("大翔", "ひろと", Gender::M, &[(1996, 1)], &[]);
        let candidate = record("陽翔", "はると", Gender::M, &[(2007, 1)], &[]);

        let (score, reason) = score_pair(&target, peak_year(&target.yearly_ranks), &candidate);
        // One shared char (翔) + same gender; peaks are 11 years apart.
        assert_eq!(score, 15 + 5);
        assert!(reason.contains("공통한자(翔)"));
        assert!(reason.contains("같은성별"));
    }

    #[test]
    fn test_shared_character_counting_is_asymmetric() {
        let single = record("翔", "しょう", Gender::M, &[], &[]);
        let double = record("翔翔", "しょうしょう", Gender::M, &[], &[]);

        // Candidate-driven: both 翔翔 chars match against 翔 ...
        let (forward, _) = score_pair(&single, None, &double);
        // ... but only one 翔 char matches the other way.
        let (backward, _) = score_pair(&double, None, &single);

        assert!(forward > backward);
    }

    #[test]
    fn test_phonetic_prefix_both_directions() {
        assert!(phonetic_overlap("はると", "はるか"));
        assert!(phonetic_overlap("ひろと", "ひろし"));
        assert!(!phonetic_overlap("はると", "みなと"));
        // Short reading uses its whole text.
        assert!(phonetic_overlap("あおい", "あお"));
    }

    #[test]
    fn test_low_scores_are_discarded() {
        let target = record("凪", "なぎ", Gender::M, &[(2024, 3)], &["고요함"]);
        // Same gender only: 5 points, at the threshold, dropped.
        let pool = vec![record("恵", "めぐみ", Gender::M, &[], &[])];
        assert!(similar_names(&target, &pool).is_empty());
    }

    #[test]
    fn test_target_excluded_and_top_k_sorted() {
        let target = record("陽翔", "はると", Gender::M, &[(2007, 1)], &["밝음", "비상"]);
        let mut pool = vec![target.clone()];
        for i in 0..12 {
            pool.push(record(
                &format!("翔{}", i),
                "しょう",
                Gender::M,
                &[(2005, 2)],
                &["비상"],
            ));
        }

        let results = similar_names(&target, &pool);
        assert_eq!(results.len(), 8);
        assert!(results.iter().all(|r| r.record.display != "陽翔"));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        // Equal scores keep pool order (stable sort).
        assert_eq!(results[0].record.display, "翔0");
    }

    #[test]
    fn test_reason_fragments_in_evaluation_order() {
        let target = record("陽翔", "はると", Gender::M, &[(2007, 1)], &["비상"]);
        let candidate = record("결翔", "はるか", Gender::M, &[(2005, 1)], &["비상"]);

        let (_, reason) = score_pair(&target, peak_year(&target.yearly_ranks), &candidate);
        assert_eq!(
            reason,
            "공통한자(翔), 발음유사, 같은성별, 같은시대, 공통특성(비상)"
        );
    }
}
