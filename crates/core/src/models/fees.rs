use serde::Serialize;

use super::asset::AssetClass;

/// Fee structure charged by a broker/platform.
///
/// Rates are decimal fractions (0.0025 = 0.25%), fees are in EUR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrokerFeeProfile {
    /// Display name of the broker
    pub name: &'static str,

    /// Currency-conversion markup applied to the holding's amount
    pub fx_markup_rate: f64,

    /// Flat fee per executed transaction
    pub trading_fee_amount: f64,

    /// Recurring custody/platform fee, per month
    pub monthly_platform_fee: f64,

    /// Lowest TER typically offered on this platform (descriptive only)
    pub min_ter: f64,

    /// Highest TER typically offered on this platform (descriptive only)
    pub max_ter: f64,
}

impl BrokerFeeProfile {
    /// Platform fee over a full year (monthly fee × 12).
    pub fn annual_platform_fee(&self) -> f64 {
        self.monthly_platform_fee * 12.0
    }

    /// Whether an expense ratio falls inside this broker's declared TER range.
    pub fn ter_in_range(&self, expense_ratio: f64) -> bool {
        expense_ratio >= self.min_ter && expense_ratio <= self.max_ter
    }
}

/// Expense ratio and classification of a single asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetFeeProfile {
    /// Annual management fee as a decimal fraction (0.0022 = 0.22%)
    pub expense_ratio: f64,
    pub asset_class: AssetClass,
}

impl AssetFeeProfile {
    pub const fn new(expense_ratio: f64, asset_class: AssetClass) -> Self {
        Self {
            expense_ratio,
            asset_class,
        }
    }

    pub const fn etf(expense_ratio: f64) -> Self {
        Self::new(expense_ratio, AssetClass::Etf)
    }

    pub const fn stock() -> Self {
        Self::new(0.0, AssetClass::Stock)
    }

    pub const fn fund(expense_ratio: f64) -> Self {
        Self::new(expense_ratio, AssetClass::Fund)
    }
}
