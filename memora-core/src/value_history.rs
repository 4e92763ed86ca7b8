use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::config::AnalyticsConfig;
use crate::generator::{SeededRandom, round_to};
use crate::seed::extract_seed;
use crate::series::{format_date, trailing_days};
use crate::{Error, InternalResult};

pub const HISTORY_DAYS: u64 = 60;

/// Prices never drop below this
pub const MIN_PRICE: f64 = 0.01;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ValueHistory {
    pub memory_id: String,

    /// Dates, oldest first
    pub labels: Vec<String>,

    /// Price on each date in `labels`
    pub values: Vec<f64>,

    pub currency: String,

    #[serde(rename = "baseValue")]
    pub base_value: String,

    #[serde(rename = "currentValue")]
    pub current_value: String,

    #[serde(rename = "changePercentage")]
    pub change_percentage: String,
}

/// Parameters of the random walk, all derived from the seed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceModel {
    pub base_price: f64,
    pub volatility: f64,
    /// Drift added to every daily change
    pub trend: f64,
}

impl PriceModel {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            base_price: (0.05 + (seed % 10) as f64 / 100.0) * (seed % 100) as f64,
            volatility: 0.02 + (seed % 20) as f64 / 100.0,
            trend: (seed % 200) as f64 / 1000.0,
        }
    }

    /// Price after one day starting from `price`, with `draw` in `[0, 1)`
    pub fn step(&self, price: f64, draw: f64) -> f64 {
        let change = (draw - 0.5) * self.volatility + self.trend;
        (price * (1.0 + change)).max(MIN_PRICE)
    }
}

pub fn value_history(
    memory_id: &str,
    today: NaiveDate,
    config: &AnalyticsConfig,
) -> InternalResult<ValueHistory> {
    if memory_id.trim().is_empty() {
        return Err(Error::invalid_parameter("memory id is empty"));
    }

    let seed = extract_seed(memory_id);
    let model = PriceModel::from_seed(seed);
    let mut rng = SeededRandom::new(seed, config.generation_mode);

    let days = trailing_days(today, HISTORY_DAYS)?;
    let mut labels = Vec::with_capacity(days.len());
    let mut values = Vec::with_capacity(days.len());

    let mut price = model.base_price;
    for day in days {
        price = model.step(price, rng.uniform());
        labels.push(format_date(day));
        values.push(round_to(price, 3).max(MIN_PRICE));
    }

    debug!(
        "Generated {} day value history for {} (seed {}, {:?})",
        values.len(),
        memory_id,
        seed,
        model
    );

    Ok(ValueHistory {
        memory_id: memory_id.to_string(),
        labels,
        values,
        currency: config.currency.clone(),
        base_value: format!("{:.3}", model.base_price),
        current_value: format!("{:.3}", price),
        change_percentage: format!("{:.2}", change_percentage(model.base_price, price)),
    })
}

/// Percentage change from `base` to `current`; 0 when there is no base price
fn change_percentage(base: f64, current: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        (current - base) / base * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationMode;
    use crate::series::DATE_FORMAT;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_price_model() {
        let model = PriceModel::from_seed(1234);
        // (0.05 + 4/100) * 34
        assert!((model.base_price - 3.06).abs() < 1e-9);
        assert!((model.volatility - 0.16).abs() < 1e-9);
        assert!((model.trend - 0.034).abs() < 1e-9);
    }

    #[test]
    fn test_step_floors_price() {
        let model = PriceModel {
            base_price: 0.02,
            volatility: 4.0,
            trend: 0.0,
        };
        assert_eq!(model.step(0.02, 0.0), MIN_PRICE);
    }

    #[test]
    fn test_sixty_consecutive_days() {
        let history = value_history("mem_001", today(), &AnalyticsConfig::default()).unwrap();
        assert_eq!(history.labels.len(), 60);
        assert_eq!(history.values.len(), history.labels.len());
        assert_eq!(history.labels.last().unwrap(), "2025-03-01");

        let dates: Vec<NaiveDate> = history
            .labels
            .iter()
            .map(|l| NaiveDate::parse_from_str(l, DATE_FORMAT).unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[1] - w[0] == chrono::Duration::days(1)));
        assert!(history.values.iter().all(|v| *v >= MIN_PRICE));
    }

    #[test]
    fn test_summary_fields() {
        let history = value_history("mem_1234", today(), &AnalyticsConfig::default()).unwrap();
        assert_eq!(history.currency, "ETH");
        assert_eq!(history.base_value, "3.060");

        let decimals = |s: &str| s.split('.').nth(1).map(str::len);
        assert_eq!(decimals(&history.current_value), Some(3));
        assert_eq!(decimals(&history.change_percentage), Some(2));

        let json = serde_json::to_value(&history).unwrap();
        assert!(json.get("baseValue").is_some());
        assert!(json.get("currentValue").is_some());
        assert!(json.get("changePercentage").is_some());
        assert!(json.get("memory_id").is_some());
    }

    #[test]
    fn test_zero_base_price() {
        // seed 100: 100 % 100 == 0
        let history = value_history("mem_100", today(), &AnalyticsConfig::default()).unwrap();
        assert_eq!(history.base_value, "0.000");
        assert_eq!(history.change_percentage, "0.00");
        assert!(history.values.iter().all(|v| *v >= MIN_PRICE));
    }

    #[test]
    fn test_seeded_mode_is_deterministic() {
        let config = AnalyticsConfig {
            generation_mode: GenerationMode::Seeded,
            ..Default::default()
        };
        let a = value_history("mem_042", today(), &config).unwrap();
        let b = value_history("mem_042", today(), &config).unwrap();
        assert_eq!(a, b);
    }
}
