use serde::{Deserialize, Serialize};

use super::holding::PricedHolding;

/// Portfolio-level fee statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of all holding amounts in EUR
    pub total_value: f64,

    /// Sum of all annual costs in EUR
    pub total_cost: f64,

    /// Weighted average: (total_cost / total_value) * 100
    pub average_cost_percent: f64,

    /// Annual EUR saved if every non-"Hold" holding dropped to the optimized cost rate
    pub potential_savings: f64,

    /// Unweighted mean expense ratio across holdings (decimal fraction)
    pub average_ter: f64,

    /// Sum of annualized platform fees in EUR
    pub total_platform_fees: f64,

    /// Number of holdings
    pub asset_count: usize,

    /// Number of distinct broker names
    pub broker_count: usize,
}

/// Total annual cost split by fee component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub ter_fees: f64,
    pub fx_fees: f64,
    pub trading_fees: f64,
    pub platform_fees: f64,
}

impl FeeBreakdown {
    pub fn total(&self) -> f64 {
        self.ter_fees + self.fx_fees + self.trading_fees + self.platform_fees
    }
}

/// Annual cost aggregated per broker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerCost {
    pub broker_name: String,
    pub total_cost: f64,
}

/// One year of the fee-impact projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: u32,
    /// Projected value with the current fee rate, rounded to whole EUR
    pub current: f64,
    /// Projected value with the optimized fee rate, rounded to whole EUR
    pub optimized: f64,
    /// `optimized - current`, rounded to whole EUR
    pub difference: f64,
}

/// Everything the presentation layer renders for one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    pub holdings: Vec<PricedHolding>,
    pub summary: PortfolioSummary,
    pub breakdown: FeeBreakdown,
    pub broker_costs: Vec<BrokerCost>,
    pub forecast: Vec<ForecastPoint>,
}

/// Column to order the holdings table by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    Asset,
    Amount,
    Broker,
    #[default]
    Cost,
    CostPercent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}
