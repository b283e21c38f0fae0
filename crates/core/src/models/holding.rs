use serde::{Deserialize, Serialize};

use super::asset::AssetClass;

/// A portfolio position as supplied by the user (CSV) or the sample generator.
///
/// Producers guarantee `amount > 0` and non-empty `symbol`/`broker_name`.
/// The pricing engine relies on that and does not re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHolding {
    /// Ticker or fund name (e.g., "VWCE", "AAPL"). Case-sensitive for lookup.
    pub symbol: String,

    /// Invested amount in EUR
    pub amount: f64,

    /// Broker/platform holding the position. Matched case-insensitively.
    pub broker_name: String,
}

impl RawHolding {
    pub fn new(symbol: impl Into<String>, amount: f64, broker_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            broker_name: broker_name.into(),
        }
    }
}

/// A holding with every annual fee component resolved.
///
/// Invariant: `total_annual_cost = ter_cost() + fx_cost() + trading_fee_amount + platform_fee_annual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedHolding {
    pub symbol: String,
    pub amount: f64,
    pub broker_name: String,

    /// Annual fund management fee rate (decimal fraction)
    pub expense_ratio: f64,

    pub asset_class: AssetClass,

    /// Broker FX markup rate (decimal fraction)
    pub fx_markup_rate: f64,

    /// Flat per-transaction fee in EUR
    pub trading_fee_amount: f64,

    /// Broker platform fee over a year in EUR
    pub platform_fee_annual: f64,

    /// Sum of all fee components in EUR
    pub total_annual_cost: f64,

    /// `total_annual_cost / amount * 100`
    pub cost_percent: f64,

    /// Optimization recommendation ("Hold" when already cost-efficient)
    pub suggestion: String,

    /// Latest market price per unit, when enrichment succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_price: Option<f64>,
}

impl PricedHolding {
    /// Annual fund management cost in EUR.
    pub fn ter_cost(&self) -> f64 {
        self.amount * self.expense_ratio
    }

    /// Annual currency-conversion cost in EUR.
    pub fn fx_cost(&self) -> f64 {
        self.amount * self.fx_markup_rate
    }

    pub fn is_hold(&self) -> bool {
        self.suggestion == crate::reference::suggestions::HOLD
    }

    /// Market value when a price is known, otherwise the book value.
    pub fn total_value(&self) -> f64 {
        match self.market_price {
            Some(price) => self.amount * price,
            None => self.amount,
        }
    }

    /// The identity fields this holding was priced from.
    pub fn raw(&self) -> RawHolding {
        RawHolding::new(self.symbol.clone(), self.amount, self.broker_name.clone())
    }
}
