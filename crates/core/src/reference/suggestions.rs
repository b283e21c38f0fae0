/// The holding is already cost-efficient.
pub const HOLD: &str = "Hold";

/// ETF whose total cost exceeds the high-cost threshold.
pub const HIGH_COST_ETF: &str = "Switch to VWCE (TER 0.22%)";

/// Mutual fund whose total cost exceeds the high-cost threshold.
pub const HIGH_COST_FUND: &str = "Consider switching to a low-cost ETF like VWCE (TER 0.22%)";

/// ETF with an expense ratio above the high-TER threshold.
pub const HIGH_TER_ETF: &str = "Consider VWCE (TER 0.22%)";

/// Mutual fund with an expense ratio above the high-TER threshold.
pub const HIGH_TER_FUND: &str = "Consider low-cost ETF alternative";

/// Total annual cost, as a percentage of the amount, above which a holding is high-cost.
pub const HIGH_COST_PERCENT: f64 = 1.0;

/// Expense ratio (decimal fraction) above which a fund/ETF is high-TER.
pub const HIGH_TER_RATIO: f64 = 0.008;

/// Known expensive assets mapped to a named cheaper replacement.
/// Always wins over the threshold rules.
pub static OVERRIDES: &[(&str, &str)] = &[
    ("FCNTX", "Switch to VFIAX (TER 0.40%)"),
    ("PRGFX", "Switch to VWCE (TER 0.22%)"),
    ("VTSMX", "Switch to VUSA (TER 0.07%)"),
    ("AGTHX", "Switch to VWCE (TER 0.22%)"),
    ("AIVSX", "Switch to IWDA (TER 0.20%)"),
    ("ANCFX", "Switch to VWCE (TER 0.22%)"),
    ("CWGIX", "Switch to VWCE (TER 0.22%)"),
];

pub fn override_for(symbol: &str) -> Option<&'static str> {
    OVERRIDES
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|(_, suggestion)| *suggestion)
}
