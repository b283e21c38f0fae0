use serde::{Deserialize, Serialize};

/// Classification of a held asset.
/// Determines which default expense ratio applies and which suggestion
/// rules can fire for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetClass {
    /// Exchange-traded funds (VWCE, IWDA, etc.)
    Etf,
    /// Individual equities. No management fee.
    Stock,
    /// Mutual funds, typically actively managed with higher TERs.
    Fund,
}

impl AssetClass {
    pub const ALL: [AssetClass; 3] = [AssetClass::Etf, AssetClass::Stock, AssetClass::Fund];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Etf => "ETF",
            AssetClass::Stock => "STOCK",
            AssetClass::Fund => "FUND",
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
