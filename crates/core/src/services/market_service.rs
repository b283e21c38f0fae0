use crate::errors::CoreError;
use crate::models::holding::PricedHolding;
use crate::models::price::MarketQuote;
use crate::providers::traits::QuoteProvider;

/// Best-effort enrichment of priced holdings with live market prices.
///
/// One fetch per holding, in order. A failed fetch leaves that holding
/// untouched (book value) and never aborts the batch.
pub struct MarketDataService {
    provider: Box<dyn QuoteProvider>,
}

impl MarketDataService {
    pub fn new(provider: Box<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch a quote and reject prices that are not finite and non-negative.
    pub async fn fetch_quote(&self, symbol: &str) -> Result<MarketQuote, CoreError> {
        let quote = self.provider.get_market_quote(symbol).await?;
        if !quote.price.is_finite() || quote.price < 0.0 {
            return Err(CoreError::InvalidPrice {
                symbol: symbol.to_string(),
                price: quote.price,
            });
        }
        Ok(quote)
    }

    /// Attach `market_price` to every holding whose quote could be fetched.
    /// Fee components and identity fields are never modified.
    pub async fn enrich(&self, holdings: Vec<PricedHolding>) -> Vec<PricedHolding> {
        let mut enriched = Vec::with_capacity(holdings.len());
        let mut failures = 0usize;

        for mut holding in holdings {
            match self.fetch_quote(&holding.symbol).await {
                Ok(quote) => holding.market_price = Some(quote.price),
                Err(e) => {
                    failures += 1;
                    log::warn!(
                        "{}: no market price for {}, keeping book value: {e}",
                        self.provider.name(),
                        holding.symbol
                    );
                }
            }
            enriched.push(holding);
        }

        log::debug!(
            "Market enrichment finished: {} of {} holdings priced",
            enriched.len() - failures,
            enriched.len()
        );
        enriched
    }
}
