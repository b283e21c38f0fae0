use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::models::analytics::{
    BrokerCost, FeeBreakdown, ForecastPoint, PortfolioSummary, SortDirection, SortField,
};
use crate::models::holding::PricedHolding;

/// Aggregates priced holdings into portfolio statistics and chart feeds.
///
/// Only reads engine output; never changes a holding's fee components.
pub struct AnalyticsService {
    /// Cost rate a non-"Hold" holding is assumed to reach after switching.
    optimized_cost_rate: f64,
}

impl AnalyticsService {
    pub fn new(optimized_cost_rate: f64) -> Self {
        Self {
            optimized_cost_rate,
        }
    }

    pub fn optimized_cost_rate(&self) -> f64 {
        self.optimized_cost_rate
    }

    /// Compute portfolio-level totals and averages.
    /// An empty portfolio yields an all-zero summary.
    pub fn summarize(&self, holdings: &[PricedHolding]) -> PortfolioSummary {
        if holdings.is_empty() {
            return PortfolioSummary::default();
        }

        let total_value: f64 = holdings.iter().map(|h| h.amount).sum();
        let total_cost: f64 = holdings.iter().map(|h| h.total_annual_cost).sum();
        let average_cost_percent = if total_value > 0.0 {
            total_cost / total_value * 100.0
        } else {
            0.0
        };
        let average_ter =
            holdings.iter().map(|h| h.expense_ratio).sum::<f64>() / holdings.len() as f64;
        let total_platform_fees = holdings.iter().map(|h| h.platform_fee_annual).sum();
        let broker_count = holdings
            .iter()
            .map(|h| h.broker_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        PortfolioSummary {
            total_value,
            total_cost,
            average_cost_percent,
            potential_savings: self.potential_savings(holdings),
            average_ter,
            total_platform_fees,
            asset_count: holdings.len(),
            broker_count,
        }
    }

    /// Annual savings if every holding with a suggestion other than "Hold"
    /// were brought down to the optimized cost rate.
    ///
    /// A holding already cheaper than the optimized rate contributes a negative amount.
    pub fn potential_savings(&self, holdings: &[PricedHolding]) -> f64 {
        holdings
            .iter()
            .filter(|h| !h.is_hold())
            .map(|h| h.total_annual_cost - h.amount * self.optimized_cost_rate)
            .sum()
    }

    /// Total annual cost split by fee component.
    pub fn fee_breakdown(&self, holdings: &[PricedHolding]) -> FeeBreakdown {
        holdings
            .iter()
            .fold(FeeBreakdown::default(), |mut acc, h| {
                acc.ter_fees += h.ter_cost();
                acc.fx_fees += h.fx_cost();
                acc.trading_fees += h.trading_fee_amount;
                acc.platform_fees += h.platform_fee_annual;
                acc
            })
    }

    /// Annual cost per broker name, highest first.
    pub fn cost_by_broker(&self, holdings: &[PricedHolding]) -> Vec<BrokerCost> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for h in holdings {
            *totals.entry(h.broker_name.as_str()).or_insert(0.0) += h.total_annual_cost;
        }

        let mut costs: Vec<BrokerCost> = totals
            .into_iter()
            .map(|(broker_name, total_cost)| BrokerCost {
                broker_name: broker_name.to_string(),
                total_cost,
            })
            .collect();

        // Ties broken by name so the order is stable across runs.
        costs.sort_by(|a, b| {
            b.total_cost
                .partial_cmp(&a.total_cost)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.broker_name.cmp(&b.broker_name))
        });
        costs
    }

    /// The `limit` holdings with the highest annual cost.
    pub fn top_costs(&self, holdings: &[PricedHolding], limit: usize) -> Vec<PricedHolding> {
        let mut ranked = holdings.to_vec();
        Self::sort_holdings(&mut ranked, SortField::Cost, SortDirection::Desc);
        ranked.truncate(limit);
        ranked
    }

    /// Project the portfolio value with the current and the optimized fee rate.
    ///
    /// Each year the value grows by `growth_rate - fee_rate`. Returns
    /// `years + 1` points (year 0 is the starting amount).
    pub fn fee_forecast(
        &self,
        initial_amount: f64,
        current_fee_rate: f64,
        optimized_fee_rate: f64,
        years: u32,
        growth_rate: f64,
    ) -> Vec<ForecastPoint> {
        let mut current = initial_amount;
        let mut optimized = initial_amount;
        let mut points = Vec::with_capacity(years as usize + 1);

        for year in 0..=years {
            points.push(ForecastPoint {
                year,
                current: current.round(),
                optimized: optimized.round(),
                difference: (optimized - current).round(),
            });
            current *= 1.0 + growth_rate - current_fee_rate;
            optimized *= 1.0 + growth_rate - optimized_fee_rate;
        }

        points
    }

    /// Order holdings in place for table display.
    /// Text columns compare lexically, numeric columns numerically.
    pub fn sort_holdings(holdings: &mut [PricedHolding], field: SortField, direction: SortDirection) {
        holdings.sort_by(|a, b| {
            let ordering = match field {
                SortField::Asset => a.symbol.cmp(&b.symbol),
                SortField::Broker => a.broker_name.cmp(&b.broker_name),
                SortField::Amount => a.amount.total_cmp(&b.amount),
                SortField::Cost => a.total_annual_cost.total_cmp(&b.total_annual_cost),
                SortField::CostPercent => a.cost_percent.total_cmp(&b.cost_percent),
            };
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new(crate::models::settings::Settings::default().optimized_cost_rate)
    }
}
