// ═══════════════════════════════════════════════════════════════════
// Market Data Tests — mock provider enrichment, failure isolation,
// Yahoo chart parsing, facade wiring
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use fee_analyzer_core::errors::CoreError;
use fee_analyzer_core::models::holding::{PricedHolding, RawHolding};
use fee_analyzer_core::models::price::MarketQuote;
use fee_analyzer_core::models::settings::Settings;
use fee_analyzer_core::providers::traits::QuoteProvider;
use fee_analyzer_core::providers::yahoo_finance::YahooFinanceProvider;
use fee_analyzer_core::services::fee_service::FeeService;
use fee_analyzer_core::services::market_service::MarketDataService;
use fee_analyzer_core::FeeAnalyzer;

/// Serves fixed prices; any other symbol fails. Counts every request.
struct MockProvider {
    prices: HashMap<String, f64>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    fn new(prices: &[(&str, f64)]) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Self {
            prices: prices.iter().map(|(s, p)| (s.to_string(), *p)).collect(),
            calls: Arc::clone(&calls),
        };
        (provider, calls)
    }
}

#[async_trait]
impl QuoteProvider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn get_market_quote(&self, symbol: &str) -> Result<MarketQuote, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.prices.get(symbol) {
            Some(price) => Ok(MarketQuote {
                price: *price,
                currency: "EUR".into(),
                last_updated: Utc::now(),
            }),
            None => Err(CoreError::Api {
                provider: "Mock".into(),
                message: format!("unknown symbol {symbol}"),
            }),
        }
    }
}

fn priced(raw: &[RawHolding]) -> Vec<PricedHolding> {
    FeeService::new().price_holdings(raw)
}

fn portfolio() -> Vec<RawHolding> {
    vec![
        RawHolding::new("VWCE", 10.0, "Interactive Brokers"),
        RawHolding::new("UNKNOWN", 500.0, "DEGIRO"),
        RawHolding::new("AAPL", 4.0, "eToro"),
    ]
}

// ═══════════════════════════════════════════════════════════════════
//  Enrichment
// ═══════════════════════════════════════════════════════════════════

mod enrichment {
    use super::*;

    #[tokio::test]
    async fn attaches_prices_and_keeps_failures_unchanged() {
        let (provider, calls) = MockProvider::new(&[("VWCE", 112.5), ("AAPL", 190.0)]);
        let service = MarketDataService::new(Box::new(provider));

        let before = priced(&portfolio());
        let after = service.enrich(before.clone()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].market_price, Some(112.5));
        assert_eq!(after[1].market_price, None);
        assert_eq!(after[2].market_price, Some(190.0));

        // Only market_price may change
        for (b, a) in before.iter().zip(&after) {
            let mut stripped = a.clone();
            stripped.market_price = None;
            assert_eq!(&stripped, b);
        }
    }

    #[tokio::test]
    async fn total_value_uses_market_price() {
        let (provider, _) = MockProvider::new(&[("VWCE", 112.5)]);
        let service = MarketDataService::new(Box::new(provider));
        let after = service.enrich(priced(&portfolio())).await;

        assert_eq!(after[0].total_value(), 10.0 * 112.5);
        assert_eq!(after[1].total_value(), 500.0);
    }

    #[tokio::test]
    async fn rejects_invalid_prices() {
        let (provider, _) = MockProvider::new(&[("VWCE", -1.0), ("AAPL", f64::NAN)]);
        let service = MarketDataService::new(Box::new(provider));

        let err = service.fetch_quote("VWCE").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { ref symbol, .. } if symbol == "VWCE"));

        let after = service.enrich(priced(&portfolio())).await;
        assert!(after.iter().all(|h| h.market_price.is_none()));
    }

    #[tokio::test]
    async fn zero_price_is_accepted() {
        let (provider, _) = MockProvider::new(&[("VWCE", 0.0)]);
        let service = MarketDataService::new(Box::new(provider));
        assert_eq!(service.fetch_quote("VWCE").await.unwrap().price, 0.0);
    }

    #[tokio::test]
    async fn empty_batch_makes_no_requests() {
        let (provider, calls) = MockProvider::new(&[]);
        let service = MarketDataService::new(Box::new(provider));
        assert!(service.enrich(Vec::new()).await.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(service.provider_name(), "Mock");
    }

    #[tokio::test]
    async fn unreachable_host_leaves_holding_unenriched() {
        let provider = YahooFinanceProvider::with_base_url("http://127.0.0.1:9");
        let service = MarketDataService::new(Box::new(provider));
        let after = service
            .enrich(priced(&[RawHolding::new("VWCE", 10.0, "DEGIRO")]))
            .await;
        assert_eq!(after[0].market_price, None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Yahoo chart responses
// ═══════════════════════════════════════════════════════════════════

mod yahoo {
    use super::*;

    #[test]
    fn parses_meta_block() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "EUR",
                        "symbol": "VWCE.DE",
                        "regularMarketPrice": 112.34,
                        "regularMarketTime": 1700000000
                    },
                    "timestamp": [1700000000]
                }],
                "error": null
            }
        }"#;

        let quote = YahooFinanceProvider::parse_chart("VWCE.DE", body).unwrap();
        assert_eq!(quote.price, 112.34);
        assert_eq!(quote.currency, "EUR");
        assert_eq!(quote.last_updated.timestamp(), 1_700_000_000);
    }

    #[test]
    fn currency_defaults_to_usd() {
        let body = r#"{"chart":{"result":[{"meta":{"regularMarketPrice":10.0}}]}}"#;
        let quote = YahooFinanceProvider::parse_chart("X", body).unwrap();
        assert_eq!(quote.currency, "USD");
    }

    #[test]
    fn null_result_is_api_error() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found"}}}"#;
        let err = YahooFinanceProvider::parse_chart("NOPE", body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "API error (Yahoo Finance): Invalid market data response for NOPE"
        );
    }

    #[test]
    fn empty_result_is_api_error() {
        let body = r#"{"chart":{"result":[]}}"#;
        let err = YahooFinanceProvider::parse_chart("NOPE", body).unwrap_err();
        assert!(matches!(err, CoreError::Api { .. }));
    }

    #[test]
    fn missing_price_is_api_error() {
        let body = r#"{"chart":{"result":[{"meta":{"currency":"USD"}}]}}"#;
        let err = YahooFinanceProvider::parse_chart("AAPL", body).unwrap_err();
        assert!(err.to_string().contains("No market price for AAPL"));
    }

    #[test]
    fn malformed_body_is_api_error() {
        let err = YahooFinanceProvider::parse_chart("AAPL", "<html>").unwrap_err();
        assert!(matches!(err, CoreError::Api { .. }));
    }

    #[test]
    fn quote_url_shape() {
        let provider = YahooFinanceProvider::with_base_url("http://localhost:8080/chart/");
        assert_eq!(
            provider.quote_url("VWCE.DE").unwrap().as_str(),
            "http://localhost:8080/chart/VWCE.DE?interval=1d"
        );
        assert_eq!(provider.name(), "Yahoo Finance");
    }

    #[test]
    fn default_endpoint() {
        assert_eq!(
            YahooFinanceProvider::new().quote_url("AAPL").unwrap().as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/AAPL?interval=1d"
        );
    }

    #[test]
    fn symbol_is_encoded_as_one_path_segment() {
        let provider = YahooFinanceProvider::with_base_url("http://localhost:8080/chart");

        let url = provider.quote_url("Vanguard FTSE All-World").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/chart/Vanguard%20FTSE%20All-World?interval=1d"
        );

        let url = provider.quote_url("A#B").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/chart/A%23B?interval=1d");
        assert_eq!(url.fragment(), None);

        let url = provider.quote_url("X?y/z").unwrap();
        assert_eq!(url.path(), "/chart/X%3Fy%2Fz");
        assert_eq!(url.query(), Some("interval=1d"));
    }

    #[test]
    fn invalid_base_url_is_api_error() {
        let err = YahooFinanceProvider::with_base_url("not a url")
            .quote_url("AAPL")
            .unwrap_err();
        assert!(matches!(err, CoreError::Api { ref provider, .. } if provider == "Yahoo Finance"));
        assert!(err.to_string().contains("Invalid base URL"));

        let err = YahooFinanceProvider::with_base_url("mailto:quotes@example.com")
            .quote_url("AAPL")
            .unwrap_err();
        assert!(matches!(err, CoreError::Api { .. }));
    }

    #[tokio::test]
    async fn invalid_base_url_fails_the_quote() {
        let err = YahooFinanceProvider::with_base_url("not a url")
            .get_market_quote("AAPL")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Facade wiring
// ═══════════════════════════════════════════════════════════════════

mod facade {
    use super::*;

    #[tokio::test]
    async fn analyze_enriches_when_enabled() {
        let settings = Settings {
            fetch_market_prices: true,
            ..Settings::default()
        };
        let (provider, calls) = MockProvider::new(&[("VWCE", 100.0)]);
        let analyzer = FeeAnalyzer::with_settings(settings)
            .unwrap()
            .with_quote_provider(Box::new(provider));

        let analysis = analyzer.analyze(&portfolio()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(analysis.holdings[0].market_price, Some(100.0));
        assert_eq!(analysis.holdings[1].market_price, None);
    }

    #[tokio::test]
    async fn analyze_skips_provider_when_disabled() {
        let (provider, calls) = MockProvider::new(&[("VWCE", 100.0)]);
        let analyzer = FeeAnalyzer::new().with_quote_provider(Box::new(provider));

        let analysis = analyzer.analyze(&portfolio()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(analysis.holdings.iter().all(|h| h.market_price.is_none()));
    }

    #[tokio::test]
    async fn enabled_without_provider_still_analyzes() {
        let settings = Settings {
            fetch_market_prices: true,
            ..Settings::default()
        };
        let analyzer = FeeAnalyzer::with_settings(settings).unwrap();
        let analysis = analyzer.analyze(&portfolio()).await;
        assert_eq!(analysis.holdings.len(), 3);
    }

    #[test]
    fn debug_shows_provider_name() {
        let (provider, _) = MockProvider::new(&[]);
        let analyzer = FeeAnalyzer::new().with_quote_provider(Box::new(provider));
        assert!(format!("{analyzer:?}").contains("Mock"));
    }
}
