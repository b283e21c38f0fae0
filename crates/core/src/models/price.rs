use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest market quote for a symbol, as returned by a quote provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Last traded price in `currency`
    pub price: f64,

    /// Quote currency (e.g., "EUR", "USD")
    pub currency: String,

    /// Exchange timestamp of the quote
    pub last_updated: DateTime<Utc>,
}
