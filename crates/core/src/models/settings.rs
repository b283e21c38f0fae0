use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// User-configurable analysis settings.
///
/// Missing fields fall back to their defaults when loading from JSON,
/// so a partial settings document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Currency all amounts are expressed in (e.g., "EUR").
    pub display_currency: String,

    /// Annual cost rate a non-"Hold" holding is assumed to reach after optimization.
    pub optimized_cost_rate: f64,

    /// Horizon of the fee-impact projection, in years.
    pub forecast_years: u32,

    /// Assumed annual growth rate of the portfolio before fees.
    pub forecast_growth_rate: f64,

    /// Prefix of exported CSV file names.
    pub export_file_prefix: String,

    /// Whether `analyze` enriches holdings with live market prices.
    pub fetch_market_prices: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: "EUR".to_string(),
            optimized_cost_rate: 0.003,
            forecast_years: 30,
            forecast_growth_rate: 0.07,
            export_file_prefix: "clearvest-portfolio-analysis".to_string(),
            fetch_market_prices: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// Reject rates that would make the derived numbers meaningless.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.optimized_cost_rate.is_finite() || self.optimized_cost_rate < 0.0 {
            return Err(CoreError::Deserialization(format!(
                "optimized_cost_rate must be a non-negative number, got {}",
                self.optimized_cost_rate
            )));
        }
        if !self.forecast_growth_rate.is_finite() {
            return Err(CoreError::Deserialization(format!(
                "forecast_growth_rate must be finite, got {}",
                self.forecast_growth_rate
            )));
        }
        if self.display_currency.trim().is_empty() {
            return Err(CoreError::Deserialization(
                "display_currency must not be empty".into(),
            ));
        }
        Ok(())
    }
}
