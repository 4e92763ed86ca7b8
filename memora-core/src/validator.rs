//! Validator performance profiles.
//!
//! Every figure is synthesised from the digits of the validator identifier;
//! see [`crate::generator`] for how repeatable that is in each mode.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::config::AnalyticsConfig;
use crate::generator::{SeededRandom, floor_to, round_to};
use crate::seed::extract_seed;
use crate::series::{days_before, format_date, trailing_days};
use crate::{Error, InternalResult};

/// Days covered by the earnings and validation series
pub const HISTORY_DAYS: u64 = 30;
pub const STAKING_ENTRIES: u64 = 10;
pub const STAKING_INTERVAL_DAYS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorStats {
    pub validator_id: String,

    pub validated_memories: u64,

    /// Percentage of validations later confirmed correct
    pub accuracy_rate: f64,

    pub average_response_time: f64,

    pub reputation_score: f64,

    pub total_earnings: f64,

    pub earnings_history: Vec<EarningsPoint>,

    pub validation_trend: Vec<ValidationPoint>,

    pub validation_distribution: Vec<CategoryCount>,

    pub staking_history: Vec<StakePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct EarningsPoint {
    pub date: String,
    pub earnings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ValidationPoint {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct StakePoint {
    pub date: String,
    pub amount: f64,
}

pub fn validator_stats(
    validator_id: &str,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> InternalResult<ValidatorStats> {
    if validator_id.trim().is_empty() {
        return Err(Error::invalid_parameter("validator id is empty"));
    }

    let seed = extract_seed(validator_id);
    let mut rng = SeededRandom::new(seed, config.generation_mode);

    let validated_memories = rng.range_int(50, 500);
    let accuracy_rate = floor_to(rng.range(85.0, 99.5), 1);
    let average_response_time = floor_to(rng.range(1.5, 8.0), 2);
    let reputation_score = floor_to(rng.range(60.0, 98.0), 1);
    let earnings_per_validation = rng.range(0.01, 0.05);
    let total_earnings = round_to(validated_memories as f64 * earnings_per_validation, 3);

    let (earnings_history, validation_trend) =
        daily_history(&mut rng, today, validated_memories, total_earnings)?;
    let validation_distribution =
        distribution(&mut rng, &config.distribution_categories, validated_memories);
    let staking_history = staking_history(&mut rng, today)?;

    debug!(
        "Derived validator profile for {} (seed {}, {} validations)",
        validator_id, seed, validated_memories
    );

    Ok(ValidatorStats {
        validator_id: validator_id.to_string(),
        validated_memories,
        accuracy_rate,
        average_response_time,
        reputation_score,
        total_earnings,
        earnings_history,
        validation_trend,
        validation_distribution,
        staking_history,
    })
}

/// Daily earnings and validation counts for the trailing window, growing from
/// roughly half the daily average on the first day to one and a half times it
/// on the last.
fn daily_history(
    rng: &mut SeededRandom,
    today: NaiveDate,
    validated_memories: u64,
    total_earnings: f64,
) -> InternalResult<(Vec<EarningsPoint>, Vec<ValidationPoint>)> {
    let daily_validations = validated_memories as f64 / HISTORY_DAYS as f64;
    let daily_earnings = total_earnings / HISTORY_DAYS as f64;

    let mut earnings = Vec::with_capacity(HISTORY_DAYS as usize);
    let mut validations = Vec::with_capacity(HISTORY_DAYS as usize);

    for (i, day) in trailing_days(today, HISTORY_DAYS)?.into_iter().enumerate() {
        let growth = 0.5 + i as f64 / HISTORY_DAYS as f64;
        let date = format_date(day);

        earnings.push(EarningsPoint {
            date: date.clone(),
            earnings: round_to(daily_earnings * growth * rng.range(0.8, 1.2), 3),
        });
        validations.push(ValidationPoint {
            date,
            count: (daily_validations * growth * rng.range(0.7, 1.3)).round() as u64,
        });
    }

    Ok((earnings, validations))
}

/// Split `total` across `categories` in proportion to random weights.
///
/// Counts are truncated, so their sum may fall a little short of `total`.
fn distribution(rng: &mut SeededRandom, categories: &[String], total: u64) -> Vec<CategoryCount> {
    let weights: Vec<u64> = categories.iter().map(|_| rng.range_int(10, 100)).collect();
    let weight_sum: u64 = weights.iter().sum();

    categories
        .iter()
        .zip(weights)
        .map(|(category, weight)| CategoryCount {
            category: category.clone(),
            count: if weight_sum == 0 {
                0
            } else {
                weight * total / weight_sum
            },
        })
        .collect()
}

/// One stake every ten days, oldest ninety days back
fn staking_history(rng: &mut SeededRandom, today: NaiveDate) -> InternalResult<Vec<StakePoint>> {
    (0..STAKING_ENTRIES)
        .map(|k| {
            let offset = (STAKING_ENTRIES - 1 - k) * STAKING_INTERVAL_DAYS;
            Ok(StakePoint {
                date: format_date(days_before(today, offset)?),
                amount: floor_to(rng.range(10.0, 30.0), 1),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationMode;
    use crate::series::DATE_FORMAT;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn parse(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_scalar_ranges() {
        let config = AnalyticsConfig::default();
        for id in ["validator_1", "val_987654", "anonymous", "v42"] {
            let stats = validator_stats(id, today(), &config).unwrap();
            assert!((50..500).contains(&stats.validated_memories));
            assert!(stats.accuracy_rate >= 85.0 && stats.accuracy_rate < 99.5);
            assert!(stats.average_response_time >= 1.5 && stats.average_response_time < 8.0);
            assert!(stats.reputation_score >= 60.0 && stats.reputation_score < 98.0);
            let max_earnings = stats.validated_memories as f64 * 0.05;
            let min_earnings = stats.validated_memories as f64 * 0.01;
            assert!(stats.total_earnings >= min_earnings - 0.001);
            assert!(stats.total_earnings <= max_earnings + 0.001);
        }
    }

    #[test]
    fn test_daily_series_cover_thirty_days() {
        let stats = validator_stats("validator_7", today(), &AnalyticsConfig::default()).unwrap();
        assert_eq!(stats.earnings_history.len(), 30);
        assert_eq!(stats.validation_trend.len(), 30);

        let dates: Vec<NaiveDate> = stats.earnings_history.iter().map(|p| parse(&p.date)).collect();
        assert!(dates.windows(2).all(|w| w[1] - w[0] == chrono::Duration::days(1)));
        assert_eq!(*dates.last().unwrap(), today());

        let trend_dates: Vec<&str> = stats.validation_trend.iter().map(|p| p.date.as_str()).collect();
        let earnings_dates: Vec<&str> =
            stats.earnings_history.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(trend_dates, earnings_dates);
    }

    #[test]
    fn test_staking_history() {
        let stats = validator_stats("validator_7", today(), &AnalyticsConfig::default()).unwrap();
        assert_eq!(stats.staking_history.len(), 10);

        let dates: Vec<NaiveDate> = stats.staking_history.iter().map(|p| parse(&p.date)).collect();
        assert_eq!(dates[0], today() - chrono::Duration::days(90));
        assert!(dates.windows(2).all(|w| w[1] - w[0] == chrono::Duration::days(10)));
        assert!(
            stats
                .staking_history
                .iter()
                .all(|p| p.amount >= 10.0 && p.amount < 30.0)
        );
    }

    #[test]
    fn test_distribution_approximates_total() {
        let config = AnalyticsConfig::default();
        let stats = validator_stats("validator_31337", today(), &config).unwrap();
        let categories: Vec<&str> = stats
            .validation_distribution
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Visual", "Emotional", "Procedural", "Semantic"]);

        let sum: u64 = stats.validation_distribution.iter().map(|c| c.count).sum();
        assert!(sum <= stats.validated_memories);
        // at most one lost per category to truncation
        assert!(stats.validated_memories - sum < 4);
    }

    #[test]
    fn test_seeded_mode_is_deterministic() {
        let config = AnalyticsConfig {
            generation_mode: GenerationMode::Seeded,
            ..Default::default()
        };
        let a = validator_stats("validator_123", today(), &config).unwrap();
        let b = validator_stats("validator_123", today(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = validator_stats("  ", today(), &AnalyticsConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
