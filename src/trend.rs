//! Peak and trend statistics derived from yearly rank data.
//!
//! A rank of 1 is best, so a year's contribution is scored as `11 - rank`
//! (rank 1 -> 10 points, rank 10 -> 1 point). All statistics are computed on
//! demand from an immutable rank map and never persisted.
//!
//! # Edge cases
//!
//! - Empty rank map: a zero-like [`TrendStats`] (no peak, stable trend).
//! - `total_score == 0`: the retro ratio is undefined; we define the result
//!   as non-retro with a stable trend instead of propagating NaN.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::era::{EraPeriod, JAPANESE_ERAS};

/// First year counted as "recent" for retro/trend classification.
const RECENT_CUTOFF: i32 = 2015;

/// Ratio of recent to overall average score below which a name reads as
/// old-fashioned.
const RETRO_RATIO: f64 = 0.3;

/// Coarse popularity trend over the recent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Stable,
    Declining,
    Retro,
}

/// Derived statistics for one name's rank history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    /// Best (lowest) rank ever achieved; None for an empty history.
    pub peak_rank: Option<u8>,
    /// Years achieving the peak rank, ascending.
    pub peak_years: Vec<i32>,
    /// Number of years with rank data.
    pub total_appearances: usize,
    /// Mean of (11 - rank) over years >= 2015; 0.0 if none.
    pub recent_score: f64,
    /// Share of the total score falling in each Japanese era, declaration
    /// order. All zero when the total score is zero.
    pub era_shares: Vec<EraShare>,
    /// Era with the highest share; ties break toward first declaration.
    pub dominant_era: Option<&'static EraPeriod>,
    pub is_retro: bool,
    pub trend: Trend,
}

/// One era's share of a name's total score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraShare {
    pub era: &'static EraPeriod,
    pub share: f64,
}

impl TrendStats {
    fn empty() -> Self {
        Self {
            peak_rank: None,
            peak_years: Vec::new(),
            total_appearances: 0,
            recent_score: 0.0,
            era_shares: JAPANESE_ERAS
                .iter()
                .map(|era| EraShare { era, share: 0.0 })
                .collect(),
            dominant_era: None,
            is_retro: false,
            trend: Trend::Stable,
        }
    }
}

/// The representative peak year: the average of all years achieving the best
/// rank, rounded to the nearest integer. None for an empty history.
pub fn peak_year(ranks: &BTreeMap<i32, u8>) -> Option<i32> {
    let best = *ranks.values().min()?;
    let peak_years: Vec<i32> = ranks
        .iter()
        .filter(|(_, &rank)| rank == best)
        .map(|(&year, _)| year)
        .collect();

    let sum: i64 = peak_years.iter().map(|&y| i64::from(y)).sum();
    Some((sum as f64 / peak_years.len() as f64).round() as i32)
}

/// Compute the full statistics for one rank history.
pub fn calculate(ranks: &BTreeMap<i32, u8>) -> TrendStats {
    let Some(&peak_rank) = ranks.values().min() else {
        return TrendStats::empty();
    };
    let peak_years: Vec<i32> = ranks
        .iter()
        .filter(|(_, &rank)| rank == peak_rank)
        .map(|(&year, _)| year)
        .collect();

    // Rank 1 -> 10 points, rank 10 -> 1 point. Ranks outside 1..=10 violate
    // the data invariant; clamp them to zero contribution instead of going
    // negative.
    let score = |rank: u8| f64::from(11i16 - i16::from(rank)).max(0.0);
    let total_score: f64 = ranks.values().map(|&r| score(r)).sum();

    // Recent window: BTreeMap iteration is year-ascending, which matches the
    // index order the trend split relies on.
    let recent: Vec<(i32, u8)> = ranks
        .range(RECENT_CUTOFF..)
        .map(|(&year, &rank)| (year, rank))
        .collect();
    let recent_score = if recent.is_empty() {
        0.0
    } else {
        recent.iter().map(|&(_, r)| score(r)).sum::<f64>() / recent.len() as f64
    };

    // Retro ratio, defined as non-retro when the total score is zero.
    let is_retro = if total_score > 0.0 {
        recent_score / (total_score / ranks.len() as f64) < RETRO_RATIO
    } else {
        false
    };

    // Era shares over the fixed Japanese era table.
    let mut era_shares = Vec::with_capacity(JAPANESE_ERAS.len());
    let mut dominant_era: Option<&'static EraPeriod> = None;
    let mut max_share = 0.0f64;
    for era in JAPANESE_ERAS {
        let era_score: f64 = ranks
            .range(era.start..=era.end)
            .map(|(_, &r)| score(r))
            .sum();
        let share = if total_score > 0.0 { era_score / total_score } else { 0.0 };
        if share > max_share {
            max_share = share;
            dominant_era = Some(era);
        }
        era_shares.push(EraShare { era, share });
    }

    let trend = if is_retro {
        Trend::Retro
    } else if recent.len() >= 3 {
        let split = recent.len() / 2;
        let early_avg = recent[..split]
            .iter()
            .map(|&(_, r)| f64::from(r))
            .sum::<f64>() / split as f64;
        let late_avg = recent[split..]
            .iter()
            .map(|&(_, r)| f64::from(r))
            .sum::<f64>() / (recent.len() - split) as f64;

        if late_avg < early_avg - 1.0 {
            Trend::Rising
        } else if late_avg > early_avg + 1.0 {
            Trend::Declining
        } else {
            Trend::Stable
        }
    } else {
        Trend::Stable
    };

    TrendStats {
        peak_rank: Some(peak_rank),
        peak_years,
        total_appearances: ranks.len(),
        recent_score,
        era_shares,
        dominant_era,
        is_retro,
        trend,
    }
}
