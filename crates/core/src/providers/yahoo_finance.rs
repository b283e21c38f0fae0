use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::price::MarketQuote;
use super::traits::QuoteProvider;

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const PROVIDER: &str = "Yahoo Finance";

/// Yahoo Finance chart API provider for ETF, stock and fund quotes.
///
/// - **Free**: No API key required.
/// - **Endpoint**: `/v8/finance/chart/{symbol}?interval=1d`
/// - **Data**: `meta.regularMarketPrice` in `meta.currency`.
///
/// Unofficial public API. Symbols the exchange doesn't know (e.g. fund
/// names typed into a CSV) simply fail and the holding stays unenriched.
pub struct YahooFinanceProvider {
    client: Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the provider at a different host (proxies, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Chart URL for `symbol`. The symbol becomes a single percent-encoded
    /// path segment, so spaces, `#`, `?` and `/` in user-typed names stay
    /// inside it.
    pub fn quote_url(&self, symbol: &str) -> Result<Url, CoreError> {
        let invalid_base = |detail: String| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Invalid base URL {}: {detail}", self.base_url),
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid_base(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid_base("cannot have path segments".to_string()))?
            .pop_if_empty()
            .push(symbol);
        url.query_pairs_mut().append_pair("interval", "1d");
        Ok(url)
    }

    /// Extract the quote from a chart response body.
    pub fn parse_chart(symbol: &str, body: &str) -> Result<MarketQuote, CoreError> {
        let resp: ChartResponse = serde_json::from_str(body).map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse response for {symbol}: {e}"),
        })?;

        let meta = resp
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(|r| r.meta)
            .ok_or_else(|| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Invalid market data response for {symbol}"),
            })?;

        let price = meta.regular_market_price.ok_or_else(|| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("No market price for {symbol}"),
        })?;

        let last_updated = meta
            .regular_market_time
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(chrono::Utc::now);

        Ok(MarketQuote {
            price,
            currency: meta.currency.unwrap_or_else(|| "USD".to_string()),
            last_updated,
        })
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── Yahoo chart API response types ──────────────────────────────────

#[derive(Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Deserialize)]
struct ChartResult {
    meta: ChartMeta,
}

#[derive(Deserialize)]
struct ChartMeta {
    currency: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
    #[serde(rename = "regularMarketTime")]
    regular_market_time: Option<i64>, // unix timestamp in seconds
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteProvider for YahooFinanceProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn get_market_quote(&self, symbol: &str) -> Result<MarketQuote, CoreError> {
        let resp = self.client.get(self.quote_url(symbol)?).send().await?;

        if !resp.status().is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("HTTP {} for {symbol}", resp.status()),
            });
        }

        let body = resp.text().await?;
        Self::parse_chart(symbol, &body)
    }
}
