//! Cross-language recommendations by popularity-era distance.
//!
//! A Japanese name's peak year is compared against every same-gender Korean
//! candidate's peak year. Lower scores are better: the base score is the
//! absolute year gap, with stacking bonuses subtracted for landing in the
//! same generational band and for a gap of at most ten years, so a close
//! same-era pair can score negative.

use serde::Serialize;

use crate::era::{classify, EraPeriod, KOREAN_GENERATIONS};
use crate::store::NameRecord;
use crate::trend::peak_year;

/// Bonus (subtracted) when both peak years fall in the same generational band.
const SAME_ERA_BONUS: i32 = 10;
/// Bonus (subtracted) when the peak years differ by at most ten years.
const CLOSE_YEAR_BONUS: i32 = 5;
/// Year gap qualifying for [`CLOSE_YEAR_BONUS`].
const CLOSE_YEAR_WINDOW: i32 = 10;
/// Maximum number of recommendations returned.
const MAX_RESULTS: usize = 8;

/// One ranked cross-language recommendation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub candidate: NameRecord,
    /// Lower (more negative) is a better match.
    pub match_score: i32,
    pub match_reason: String,
    pub peak_year_difference: i32,
}

/// Rank the candidate pool against the source name.
///
/// Candidates of a different gender or without any rank data are skipped;
/// a source without rank data yields an empty list. Ordering is ascending by
/// score and stable, so results are deterministic for a fixed pool.
pub fn recommendations(source: &NameRecord, pool: &[NameRecord]) -> Vec<Recommendation> {
    let Some(source_peak) = peak_year(&source.yearly_ranks) else {
        return Vec::new();
    };
    let source_era = classify(KOREAN_GENERATIONS, source_peak);

    let mut ranked: Vec<Recommendation> = pool
        .iter()
        .filter(|candidate| candidate.gender == source.gender)
        .filter_map(|candidate| {
            let candidate_peak = peak_year(&candidate.yearly_ranks)?;
            let year_difference = (source_peak - candidate_peak).abs();
            let candidate_era = classify(KOREAN_GENERATIONS, candidate_peak);

            let mut score = year_difference;
            if source_era.name == candidate_era.name {
                score -= SAME_ERA_BONUS;
            }
            if year_difference <= CLOSE_YEAR_WINDOW {
                score -= CLOSE_YEAR_BONUS;
            }

            Some(Recommendation {
                candidate: candidate.clone(),
                match_score: score,
                match_reason: match_reason(
                    source_peak,
                    candidate_peak,
                    source_era,
                    candidate_era,
                ),
                peak_year_difference: year_difference,
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.match_score.cmp(&b.match_score));
    ranked.truncate(MAX_RESULTS);
    ranked
}

/// Human-readable reason, branching on gap then era names.
fn match_reason(
    source_peak: i32,
    candidate_peak: i32,
    source_era: &EraPeriod,
    candidate_era: &EraPeriod,
) -> String {
    let gap = (source_peak - candidate_peak).abs();

    if gap <= 3 {
        format!(
            "{}년경 일본에서 인기였을 때 한국에서도 {}년경 인기를 얻었습니다.",
            source_peak, candidate_peak
        )
    } else if gap <= 10 {
        format!(
            "일본에서 {} 시기에 인기였고, 한국에서도 {} 시기에 비슷하게 인기를 얻었습니다.",
            source_era.name, candidate_era.name
        )
    } else if source_era.name == candidate_era.name {
        format!(
            "같은 {} 시기에 양국에서 모두 인기를 얻은 이름 스타일입니다.",
            source_era.name
        )
    } else {
        format!(
            "일본의 {} 시기 인기 이름과 한국의 {} 시기 인기 이름으로 시대적 특성이 비슷합니다.",
            source_era.name, candidate_era.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Gender;

    fn record(display: &str, gender: Gender, ranks: &[(i32, u8)]) -> NameRecord {
        NameRecord {
            display: display.to_string(),
            reading: None,
            gender,
            yearly_ranks: ranks.iter().copied().collect(),
            characteristics: Vec::new(),
            source: String::new(),
        }
    }

    #[test]
    fn test_close_same_era_pair_scores_negative() {
        // Japanese target peaking 2007, Korean candidate peaking 2006:
        // gap 1, same band (밀레니얼 세대) and within ten years.
        let source = record("陽翔", Gender::M, &[(2006, 1), (2007, 1), (2008, 1)]);
        let pool = vec![record("서준", Gender::M, &[(2006, 1), (2010, 3)])];

        let results = recommendations(&source, &pool);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].peak_year_difference, 1);
        assert_eq!(results[0].match_score, 1 - 10 - 5);
        assert!(results[0].match_reason.contains("2007년경"));
    }

    #[test]
    fn test_gender_filter() {
        let source = record("葵", Gender::F, &[(2007, 1)]);
        let pool = vec![
            record("서준", Gender::M, &[(2007, 1)]),
            record("서연", Gender::F, &[(2007, 1)]),
        ];

        let results = recommendations(&source, &pool);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate.display, "서연");
    }

    #[test]
    fn test_bonuses_stack() {
        let source = record("恵", Gender::F, &[(1961, 1)]);
        // Same band, one year apart: -10 and -5 both apply.
        let close = record("미숙", Gender::F, &[(1962, 1)]);
        // Different band, far apart: base score only.
        let far = record("서연", Gender::F, &[(2007, 1)]);

        let results = recommendations(&source, &pool_of(&[close, far]));
        assert_eq!(results[0].candidate.display, "미숙");
        assert_eq!(results[0].match_score, 1 - 10 - 5);
        assert_eq!(results[1].match_score, 46);
    }

    fn pool_of(records: &[NameRecord]) -> Vec<NameRecord> {
        records.to_vec()
    }

    #[test]
    fn test_ordering_is_deterministic_and_stable() {
        let source = record("陽翔", Gender::M, &[(2007, 1)]);
        let pool = vec![
            record("가", Gender::M, &[(2005, 1)]),
            record("나", Gender::M, &[(2011, 1)]),
            record("다", Gender::M, &[(2005, 1)]),
        ];

        let first = recommendations(&source, &pool);
        let second = recommendations(&source, &pool);
        let order: Vec<&str> = first.iter().map(|r| r.candidate.display.as_str()).collect();
        assert_eq!(
            order,
            second
                .iter()
                .map(|r| r.candidate.display.as_str())
                .collect::<Vec<_>>()
        );
        // 가 and 다 tie at -13; 가 comes first by pool order.
        assert_eq!(order, vec!["가", "다", "나"]);
    }

    #[test]
    fn test_source_without_rank_data_yields_empty() {
        let source = record("新", Gender::M, &[]);
        let pool = vec![record("지우", Gender::M, &[(2022, 3)])];
        assert!(recommendations(&source, &pool).is_empty());
    }

    #[test]
    fn test_reason_branches() {
        // Adjacent eras, gap within ten years.
        assert!(match_reason(
            1968,
            1975,
            classify(KOREAN_GENERATIONS, 1968),
            classify(KOREAN_GENERATIONS, 1975),
        )
        .contains("비슷하게"));

        // Same era name, wide gap cannot happen inside one ten-year band,
        // so the generic fallback covers distant different-era pairs.
        assert!(match_reason(
            1960,
            2007,
            classify(KOREAN_GENERATIONS, 1960),
            classify(KOREAN_GENERATIONS, 2007),
        )
        .contains("시대적 특성"));
    }
}
