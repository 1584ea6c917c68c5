//! Era classification over fixed year-boundary tables.
//!
//! Two tables are baked in: the three Japanese imperial eras used for the
//! generation breakdown, and the eight Korean generational bands used by the
//! cross-language recommender. Both are declared ascending and
//! non-overlapping; classification assumes that and does not validate it.

use serde::Serialize;

/// A named historical period with fixed year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EraPeriod {
    /// Display name (Korean locale, matching the rest of the payloads)
    pub name: &'static str,
    /// First year of the period (inclusive)
    pub start: i32,
    /// Last year of the period (inclusive)
    pub end: i32,
}

/// Japanese imperial eras covering the dataset range 1926-2024.
pub static JAPANESE_ERAS: &[EraPeriod] = &[
    EraPeriod { name: "쇼와", start: 1926, end: 1988 },
    EraPeriod { name: "헤이세이", start: 1989, end: 2018 },
    EraPeriod { name: "레이와", start: 2019, end: 2024 },
];

/// Korean generational bands covering 1945-2029.
pub static KOREAN_GENERATIONS: &[EraPeriod] = &[
    EraPeriod { name: "전전 세대", start: 1945, end: 1959 },
    EraPeriod { name: "베이비붐 세대", start: 1960, end: 1969 },
    EraPeriod { name: "산업화 세대", start: 1970, end: 1979 },
    EraPeriod { name: "X세대", start: 1980, end: 1989 },
    EraPeriod { name: "밀레니얼 초기", start: 1990, end: 1999 },
    EraPeriod { name: "밀레니얼 세대", start: 2000, end: 2009 },
    EraPeriod { name: "Z세대 초기", start: 2010, end: 2019 },
    EraPeriod { name: "Z세대", start: 2020, end: 2029 },
];

/// Classify a year against a period table.
///
/// Returns the period whose `[start, end]` contains the year. Years before
/// the first period clamp to the first period and years after the last clamp
/// to the last, so every year resolves to a label.
///
/// # Preconditions
///
/// The table must be non-empty, ascending and non-overlapping. Behavior for
/// overlapping or gapped tables is unspecified (the first containing period
/// wins for overlaps; gap years resolve to the nearest following period).
pub fn classify(table: &'static [EraPeriod], year: i32) -> &'static EraPeriod {
    for period in table {
        if year <= period.end {
            return period;
        }
    }
    // Past the last boundary
    table.last().expect("era table must be non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_japanese_eras_partition() {
        assert_eq!(classify(JAPANESE_ERAS, 1926).name, "쇼와");
        assert_eq!(classify(JAPANESE_ERAS, 1988).name, "쇼와");
        assert_eq!(classify(JAPANESE_ERAS, 1989).name, "헤이세이");
        assert_eq!(classify(JAPANESE_ERAS, 2018).name, "헤이세이");
        assert_eq!(classify(JAPANESE_ERAS, 2019).name, "레이와");
        assert_eq!(classify(JAPANESE_ERAS, 2024).name, "레이와");
    }

    #[test]
    fn test_korean_generation_bands() {
        assert_eq!(classify(KOREAN_GENERATIONS, 1955).name, "전전 세대");
        assert_eq!(classify(KOREAN_GENERATIONS, 1969).name, "베이비붐 세대");
        assert_eq!(classify(KOREAN_GENERATIONS, 2007).name, "밀레니얼 세대");
        assert_eq!(classify(KOREAN_GENERATIONS, 2024).name, "Z세대");
    }

    #[test]
    fn test_out_of_range_years_clamp() {
        // Before the earliest boundary: fall back to the first label.
        assert_eq!(classify(KOREAN_GENERATIONS, 1910).name, "전전 세대");
        assert_eq!(classify(JAPANESE_ERAS, 1900).name, "쇼와");
        // After the last boundary: stick with the last label.
        assert_eq!(classify(KOREAN_GENERATIONS, 2050).name, "Z세대");
        assert_eq!(classify(JAPANESE_ERAS, 2030).name, "레이와");
    }

    #[test]
    fn test_tables_are_ascending_and_disjoint() {
        for table in [JAPANESE_ERAS, KOREAN_GENERATIONS] {
            for pair in table.windows(2) {
                assert!(pair[0].end < pair[1].start);
            }
        }
    }
}
