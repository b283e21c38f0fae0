pub mod errors;
pub mod models;
pub mod providers;
pub mod reference;
pub mod services;

use chrono::NaiveDate;
use models::{
    analytics::{PortfolioAnalysis, PortfolioSummary},
    holding::{PricedHolding, RawHolding},
    settings::Settings,
};
use providers::traits::QuoteProvider;
use rand::Rng;
use services::{
    analytics_service::AnalyticsService, csv_service::CsvService,
    export_service::ExportService, fee_service::FeeService,
    generator_service::GeneratorService, market_service::MarketDataService,
};
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use errors::CoreError;

/// Number of holdings shown in the "top costs" chart.
pub const TOP_COSTS_LIMIT: usize = 10;

/// Main entry point for the fee analyzer core library.
///
/// Data flow: CSV or sample generator → `RawHolding`s → fee engine →
/// `PricedHolding`s → analytics/export. No state is shared between calls,
/// so one analyzer can serve any number of independent requests.
#[must_use]
pub struct FeeAnalyzer {
    settings: Settings,
    fee_service: FeeService,
    csv_service: CsvService,
    generator_service: GeneratorService,
    analytics_service: AnalyticsService,
    export_service: ExportService,
    market_service: Option<MarketDataService>,
}

impl std::fmt::Debug for FeeAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeeAnalyzer")
            .field("settings", &self.settings)
            .field(
                "quote_provider",
                &self.market_service.as_ref().map(|m| m.provider_name()),
            )
            .finish()
    }
}

impl FeeAnalyzer {
    /// Create an analyzer with default settings and no quote provider.
    pub fn new() -> Self {
        Self::build(Settings::default())
    }

    /// Create an analyzer with custom settings (validated first).
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    /// Attach a market quote provider used by `analyze` when
    /// `Settings::fetch_market_prices` is on.
    pub fn with_quote_provider(mut self, provider: Box<dyn QuoteProvider>) -> Self {
        self.market_service = Some(MarketDataService::new(provider));
        self
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Parse an uploaded portfolio CSV (`Asset,Amount,Broker` header).
    pub fn parse_csv(&self, contents: &str) -> Result<Vec<RawHolding>, CoreError> {
        self.csv_service.parse_portfolio_csv(contents)
    }

    /// Read and parse a portfolio CSV file from disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn load_csv_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<RawHolding>, CoreError> {
        self.csv_service.load_portfolio_csv(path).await
    }

    /// Generate a random demo portfolio of 10–15 holdings.
    pub fn generate_sample_portfolio(&self) -> Result<Vec<RawHolding>, CoreError> {
        self.generator_service.generate_random_portfolio()
    }

    /// Generate a demo portfolio from a caller-supplied RNG (seedable).
    pub fn generate_sample_portfolio_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<RawHolding>, CoreError> {
        self.generator_service.generate_sample_portfolio(rng)
    }

    // ── Pricing & Analytics ─────────────────────────────────────────

    /// Price every holding. Same length and order as the input.
    #[must_use]
    pub fn price_holdings(&self, raw: &[RawHolding]) -> Vec<PricedHolding> {
        self.fee_service.price_holdings(raw)
    }

    /// Portfolio totals, averages and potential savings.
    #[must_use]
    pub fn summarize(&self, holdings: &[PricedHolding]) -> PortfolioSummary {
        self.analytics_service.summarize(holdings)
    }

    /// Full analysis: price, optionally enrich with market prices, then aggregate.
    /// Holdings keep their input order.
    ///
    /// Enrichment failures are swallowed per holding; this never fails.
    pub async fn analyze(&self, raw: &[RawHolding]) -> PortfolioAnalysis {
        let mut holdings = self.fee_service.price_holdings(raw);

        if self.settings.fetch_market_prices {
            if let Some(market) = &self.market_service {
                holdings = market.enrich(holdings).await;
            }
        }

        let summary = self.analytics_service.summarize(&holdings);
        let breakdown = self.analytics_service.fee_breakdown(&holdings);
        let broker_costs = self.analytics_service.cost_by_broker(&holdings);
        let forecast = self.analytics_service.fee_forecast(
            summary.total_value,
            summary.average_cost_percent / 100.0,
            self.settings.optimized_cost_rate,
            self.settings.forecast_years,
            self.settings.forecast_growth_rate,
        );

        PortfolioAnalysis {
            holdings,
            summary,
            breakdown,
            broker_costs,
            forecast,
        }
    }

    /// Holdings with the highest annual cost, for the cost bar chart.
    #[must_use]
    pub fn top_costs(&self, holdings: &[PricedHolding]) -> Vec<PricedHolding> {
        self.analytics_service.top_costs(holdings, TOP_COSTS_LIMIT)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Render priced holdings as an analysis CSV.
    pub fn export_csv(&self, holdings: &[PricedHolding]) -> Result<String, CoreError> {
        self.export_service.to_csv(holdings)
    }

    /// Export file name for `date`, e.g. `clearvest-portfolio-analysis-2024-03-01.csv`.
    #[must_use]
    pub fn export_file_name(&self, date: NaiveDate) -> String {
        self.export_service
            .file_name(&self.settings.export_file_prefix, date)
    }

    /// Write the analysis CSV into `dir`, named with today's date (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn export_csv_file(
        &self,
        holdings: &[PricedHolding],
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf, CoreError> {
        let today = chrono::Local::now().date_naive();
        self.export_service
            .write_csv_file(holdings, dir, &self.settings.export_file_prefix, today)
            .await
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the settings. Services that depend on them are rebuilt.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), CoreError> {
        settings.validate()?;
        self.analytics_service = AnalyticsService::new(settings.optimized_cost_rate);
        self.settings = settings;
        Ok(())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings) -> Self {
        Self {
            analytics_service: AnalyticsService::new(settings.optimized_cost_rate),
            settings,
            fee_service: FeeService::new(),
            csv_service: CsvService::new(),
            generator_service: GeneratorService::new(),
            export_service: ExportService::new(),
            market_service: None,
        }
    }
}

impl Default for FeeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
