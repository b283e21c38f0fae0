use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::price::MarketQuote;

/// Trait abstraction for market quote sources.
///
/// Enrichment is best effort: callers treat any `Err` as "no quote" and keep
/// the holding's book value, so implementations should fail fast rather than retry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Latest quote for a ticker symbol.
    async fn get_market_quote(&self, symbol: &str) -> Result<MarketQuote, CoreError>;
}
