use crate::models::asset::AssetClass;
use crate::models::holding::{PricedHolding, RawHolding};
use crate::reference::{assets, brokers, suggestions};

/// Prices raw holdings against the broker and asset fee tables.
///
/// Pure business logic: no I/O, no randomness, no hidden state.
/// Pricing the same input twice yields identical output.
pub struct FeeService;

impl FeeService {
    pub fn new() -> Self {
        Self
    }

    /// Price every holding. Output has the same length and order as the input.
    pub fn price_holdings(&self, raw: &[RawHolding]) -> Vec<PricedHolding> {
        log::debug!("Pricing {} holdings", raw.len());
        raw.iter().map(|holding| self.price_holding(holding)).collect()
    }

    /// Resolve all fee components of a single holding.
    ///
    /// `holding.amount` must be strictly positive; the producers (CSV ingestion,
    /// sample generator) guarantee it.
    pub fn price_holding(&self, holding: &RawHolding) -> PricedHolding {
        let broker = brokers::broker_profile(&holding.broker_name);
        let asset = assets::asset_profile(&holding.symbol);

        let ter_cost = holding.amount * asset.expense_ratio;
        let fx_cost = holding.amount * broker.fx_markup_rate;
        let platform_fee_annual = broker.annual_platform_fee();

        let total_annual_cost =
            ter_cost + fx_cost + broker.trading_fee_amount + platform_fee_annual;
        let cost_percent = total_annual_cost / holding.amount * 100.0;

        let suggestion = Self::suggest(
            &holding.symbol,
            asset.expense_ratio,
            asset.asset_class,
            cost_percent,
        );

        PricedHolding {
            symbol: holding.symbol.clone(),
            amount: holding.amount,
            broker_name: holding.broker_name.clone(),
            expense_ratio: asset.expense_ratio,
            asset_class: asset.asset_class,
            fx_markup_rate: broker.fx_markup_rate,
            trading_fee_amount: broker.trading_fee_amount,
            platform_fee_annual,
            total_annual_cost,
            cost_percent,
            suggestion: suggestion.to_string(),
            market_price: None,
        }
    }

    /// Pick the optimization suggestion. First matching rule wins:
    ///
    /// 1. Symbol-specific replacement from the override table.
    /// 2. Total cost above 1% of the amount: generic switch message (ETF/fund only).
    /// 3. Otherwise, expense ratio above 0.8%: softer "consider" message (ETF/fund only).
    /// 4. "Hold".
    ///
    /// Stocks never get a threshold suggestion since they carry no TER.
    pub fn suggest(
        symbol: &str,
        expense_ratio: f64,
        asset_class: AssetClass,
        cost_percent: f64,
    ) -> &'static str {
        if let Some(replacement) = suggestions::override_for(symbol) {
            return replacement;
        }

        if cost_percent > suggestions::HIGH_COST_PERCENT {
            match asset_class {
                AssetClass::Etf => return suggestions::HIGH_COST_ETF,
                AssetClass::Fund => return suggestions::HIGH_COST_FUND,
                AssetClass::Stock => {}
            }
        } else if expense_ratio > suggestions::HIGH_TER_RATIO {
            match asset_class {
                AssetClass::Etf => return suggestions::HIGH_TER_ETF,
                AssetClass::Fund => return suggestions::HIGH_TER_FUND,
                AssetClass::Stock => {}
            }
        }

        suggestions::HOLD
    }
}

impl Default for FeeService {
    fn default() -> Self {
        Self::new()
    }
}
