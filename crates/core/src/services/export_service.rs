use chrono::NaiveDate;
use csv::WriterBuilder;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::models::holding::PricedHolding;

/// Column headers of the exported analysis CSV.
pub const EXPORT_HEADERS: [&str; 10] = [
    "Asset",
    "Amount (€)",
    "Broker",
    "TER (%)",
    "FX Markup (%)",
    "Trading Fee (€)",
    "Platform Fee (€)",
    "Est. Annual Cost (€)",
    "Cost (%)",
    "Suggestion",
];

/// Renders priced holdings as a downloadable CSV report.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Serialize holdings to CSV text.
    ///
    /// Rates are shown as percentages with 3 decimals, money with 2 decimals.
    /// Cells containing commas or quotes are quoted.
    pub fn to_csv(&self, holdings: &[PricedHolding]) -> Result<String, CoreError> {
        let mut writer = WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer
            .write_record(EXPORT_HEADERS)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;

        for h in holdings {
            writer
                .write_record(Self::row(h))
                .map_err(|e| CoreError::Serialization(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// `{prefix}-YYYY-MM-DD.csv`
    pub fn file_name(&self, prefix: &str, date: NaiveDate) -> String {
        format!("{prefix}-{}.csv", date.format("%Y-%m-%d"))
    }

    /// Write the report into `dir` under a dated file name. Returns the full path.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn write_csv_file(
        &self,
        holdings: &[PricedHolding],
        dir: impl AsRef<Path>,
        prefix: &str,
        date: NaiveDate,
    ) -> Result<PathBuf, CoreError> {
        let csv = self.to_csv(holdings)?;
        let path = dir.as_ref().join(self.file_name(prefix, date));
        tokio::fs::write(&path, csv).await?;
        log::info!("Exported {} holdings to {}", holdings.len(), path.display());
        Ok(path)
    }

    fn row(h: &PricedHolding) -> [String; 10] {
        [
            h.symbol.clone(),
            h.amount.to_string(),
            h.broker_name.clone(),
            format!("{:.3}", h.expense_ratio * 100.0),
            format!("{:.3}", h.fx_markup_rate * 100.0),
            format!("{:.2}", h.trading_fee_amount),
            format!("{:.2}", h.platform_fee_annual),
            format!("{:.2}", h.total_annual_cost),
            format!("{:.3}", h.cost_percent),
            h.suggestion.clone(),
        ]
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
