use rand::Rng;

use crate::errors::CoreError;
use crate::models::holding::RawHolding;

/// ETF symbols the sample generator draws from.
pub const ETF_POOL: &[&str] = &[
    "VWCE", "IWDA", "EUNL", "VUSA", "CSPX", "MEUD", "VEUR", "IEMA", "VFEM", "AGGH", "IUSQ",
    "HMWO", "SAWD", "DBXW", "XDWD",
];

/// Stock symbols the sample generator draws from.
pub const STOCK_POOL: &[&str] = &[
    "AAPL", "MSFT", "AMZN", "GOOGL", "FB", "TSLA", "NVDA", "BRK.B", "JPM", "JNJ", "V", "PG",
    "UNH", "HD", "BAC", "MA", "DIS", "PYPL", "CMCSA", "XOM",
];

/// Mutual fund symbols the sample generator draws from.
pub const FUND_POOL: &[&str] = &[
    "FCNTX", "VFIAX", "PRGFX", "VTSAX", "VTIAX", "AGTHX", "AIVSX", "VTSMX", "ANCFX", "CWGIX",
];

/// Brokers assigned to generated holdings.
pub const BROKER_POOL: &[&str] = &[
    "Interactive Brokers",
    "Degiro",
    "Robinhood",
    "Trade Republic",
    "Vanguard",
    "Fidelity",
    "Charles Schwab",
    "eToro",
    "Saxo Bank",
    "Scalable Capital",
];

pub const MIN_HOLDINGS: usize = 10;
pub const MAX_HOLDINGS: usize = 15;

const ETF_SHARE: f64 = 0.6;
const STOCK_SHARE: f64 = 0.3;

/// Amount ranges in EUR, inclusive.
const ETF_AMOUNT: (f64, f64) = (5_000.0, 30_000.0);
const STOCK_AMOUNT: (f64, f64) = (2_000.0, 15_000.0);
const FUND_AMOUNT: (f64, f64) = (3_000.0, 20_000.0);

/// Cumulative cut-offs: 40% first primary broker, 30% second primary,
/// the remaining 30% a uniformly random broker.
const PRIMARY_BROKER_CUTOFF: f64 = 0.4;
const SECONDARY_BROKER_CUTOFF: f64 = 0.7;

/// Builds synthetic demo portfolios: mostly ETFs, some stocks, a few funds,
/// clustered on one or two primary brokers like a real investor's would be.
///
/// Randomness is injected so tests can seed it.
pub struct GeneratorService;

impl GeneratorService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a sample portfolio using the thread-local RNG.
    pub fn generate_random_portfolio(&self) -> Result<Vec<RawHolding>, CoreError> {
        self.generate_sample_portfolio(&mut rand::thread_rng())
    }

    /// Generate 10–15 holdings: ~60% ETFs, ~30% stocks, the rest funds.
    /// Output order is ETFs, then stocks, then funds. Symbols never repeat.
    pub fn generate_sample_portfolio<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<RawHolding>, CoreError> {
        let size = rng.gen_range(MIN_HOLDINGS..=MAX_HOLDINGS);
        let (num_etfs, num_stocks, num_funds) = Self::split_counts(size);

        let etfs = Self::draw_distinct(rng, "ETF", ETF_POOL, num_etfs)?;
        let stocks = Self::draw_distinct(rng, "stock", STOCK_POOL, num_stocks)?;
        let funds = Self::draw_distinct(rng, "fund", FUND_POOL, num_funds)?;

        let brokers = Self::broker_distribution(rng, size);

        let groups = [
            (etfs, ETF_AMOUNT),
            (stocks, STOCK_AMOUNT),
            (funds, FUND_AMOUNT),
        ];

        let mut portfolio = Vec::with_capacity(size);
        for (symbols, (min, max)) in groups {
            for symbol in symbols {
                let amount = Self::random_amount(rng, min, max);
                let broker = brokers[portfolio.len()];
                portfolio.push(RawHolding::new(symbol, amount, broker));
            }
        }

        log::debug!(
            "Generated sample portfolio: {num_etfs} ETFs, {num_stocks} stocks, {num_funds} funds"
        );
        Ok(portfolio)
    }

    /// Split a portfolio size into (ETF, stock, fund) counts.
    /// Fund count is the remainder, clamped at zero.
    pub fn split_counts(size: usize) -> (usize, usize, usize) {
        let num_etfs = (size as f64 * ETF_SHARE).round() as usize;
        let num_stocks = (size as f64 * STOCK_SHARE).round() as usize;
        let num_funds = size.saturating_sub(num_etfs + num_stocks);
        (num_etfs, num_stocks, num_funds)
    }

    /// Draw `count` distinct symbols without replacement.
    pub fn draw_distinct<R: Rng + ?Sized>(
        rng: &mut R,
        pool_name: &str,
        pool: &[&'static str],
        count: usize,
    ) -> Result<Vec<&'static str>, CoreError> {
        if count > pool.len() {
            return Err(CoreError::PoolTooSmall {
                pool: pool_name.to_string(),
                requested: count,
                available: pool.len(),
            });
        }

        let mut remaining = pool.to_vec();
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = rng.gen_range(0..remaining.len());
            picked.push(remaining.swap_remove(idx));
        }
        Ok(picked)
    }

    /// Uniform amount in `[min, max]`, rounded to whole EUR.
    fn random_amount<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
        (min + rng.gen::<f64>() * (max - min)).round()
    }

    /// Assign a broker to each of `count` holdings, clustered on two primaries
    /// (which may coincide).
    ///
    /// Draw order: first primary, second primary, then per holding one roll
    /// plus one extra broker draw when the roll lands in the uniform tail.
    pub fn broker_distribution<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
        let primary = Self::random_broker(rng);
        let secondary = Self::random_broker(rng);

        (0..count)
            .map(|_| {
                let roll: f64 = rng.gen();
                if roll < PRIMARY_BROKER_CUTOFF {
                    primary
                } else if roll < SECONDARY_BROKER_CUTOFF {
                    secondary
                } else {
                    Self::random_broker(rng)
                }
            })
            .collect()
    }

    fn random_broker<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
        BROKER_POOL[rng.gen_range(0..BROKER_POOL.len())]
    }
}

impl Default for GeneratorService {
    fn default() -> Self {
        Self::new()
    }
}
