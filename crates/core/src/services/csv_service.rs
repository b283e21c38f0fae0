use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use crate::errors::CoreError;
use crate::models::holding::RawHolding;

pub const ASSET_COLUMN: &str = "Asset";
pub const AMOUNT_COLUMN: &str = "Amount";
pub const BROKER_COLUMN: &str = "Broker";

/// Header names a portfolio CSV must contain. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = [ASSET_COLUMN, AMOUNT_COLUMN, BROKER_COLUMN];

/// Turns uploaded portfolio CSV files into raw holdings.
///
/// Either every data row is valid and the whole list is returned, or the
/// first problem is reported as a single error. There are no partial results.
pub struct CsvService;

impl CsvService {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV text with an `Asset,Amount,Broker` header.
    pub fn parse_portfolio_csv(&self, contents: &str) -> Result<Vec<RawHolding>, CoreError> {
        self.parse_portfolio_reader(contents.as_bytes())
    }

    /// Parse CSV from any reader (e.g., raw bytes of an uploaded file).
    ///
    /// Fails when:
    /// - the CSV syntax is broken (including rows with a different field count),
    /// - a required column is missing from the header,
    /// - a row has an empty Asset/Amount/Broker value,
    /// - an Amount is not a positive finite number,
    /// - there are no data rows at all.
    pub fn parse_portfolio_reader<R: Read>(&self, reader: R) -> Result<Vec<RawHolding>, CoreError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        // Syntax errors take precedence over validation errors, so read everything first.
        let records = reader
            .records()
            .collect::<Result<Vec<StringRecord>, csv::Error>>()?;

        let holdings = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                // Row 1 is the header. Blank lines are skipped and not counted.
                let row = index as u64 + 2;
                Self::parse_row(record, &columns, row)
            })
            .collect::<Result<Vec<RawHolding>, CoreError>>()?;

        if holdings.is_empty() {
            return Err(CoreError::EmptyPortfolio);
        }

        log::info!("Parsed {} holdings from CSV", holdings.len());
        Ok(holdings)
    }

    /// Read a CSV file from disk and parse it (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn load_portfolio_csv(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<RawHolding>, CoreError> {
        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        self.parse_portfolio_csv(&contents)
    }

    fn parse_row(
        record: &StringRecord,
        columns: &ColumnIndex,
        row: u64,
    ) -> Result<RawHolding, CoreError> {
        let symbol = Self::required_field(record, columns.asset, ASSET_COLUMN, row)?;
        let amount_raw = Self::required_field(record, columns.amount, AMOUNT_COLUMN, row)?;
        let broker = Self::required_field(record, columns.broker, BROKER_COLUMN, row)?;

        let amount = Self::parse_amount(amount_raw, row)?;

        Ok(RawHolding::new(symbol, amount, broker))
    }

    /// Trimmed, non-empty value of a required column.
    fn required_field<'r>(
        record: &'r StringRecord,
        idx: usize,
        column: &str,
        row: u64,
    ) -> Result<&'r str, CoreError> {
        let value = record.get(idx).map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(CoreError::EmptyField {
                row,
                column: column.to_string(),
            });
        }
        Ok(value)
    }

    /// Amount must parse completely as a finite number greater than zero.
    fn parse_amount(raw: &str, row: u64) -> Result<f64, CoreError> {
        match raw.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
            _ => Err(CoreError::InvalidAmount {
                row,
                value: raw.to_string(),
            }),
        }
    }
}

impl Default for CsvService {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions of the required columns within the header row.
struct ColumnIndex {
    asset: usize,
    amount: usize,
    broker: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, CoreError> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        match (find(ASSET_COLUMN), find(AMOUNT_COLUMN), find(BROKER_COLUMN)) {
            (Some(asset), Some(amount), Some(broker)) => Ok(Self {
                asset,
                amount,
                broker,
            }),
            _ => {
                let missing = REQUIRED_COLUMNS
                    .iter()
                    .filter(|name| find(name).is_none())
                    .map(|name| name.to_string())
                    .collect();
                Err(CoreError::MissingColumns(missing))
            }
        }
    }
}
