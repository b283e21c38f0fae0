use thiserror::Error;

/// Unified error type for the entire fee-analyzer-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The pricing engine itself has no error path: it is total over
/// well-formed holdings. Errors come from ingestion, sample generation,
/// configuration and the optional market-data enrichment.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── CSV ingestion: tabular syntax ───────────────────────────────
    #[error("Error parsing CSV: {0}")]
    CsvParse(String),

    // ── CSV ingestion: validation ───────────────────────────────────
    #[error(
        "Missing required columns: {}. Please ensure your CSV has columns: Asset, Amount, Broker",
        .0.join(", ")
    )]
    MissingColumns(Vec<String>),

    #[error("Row {row} has an empty {column} value. All rows must have Asset, Amount, and Broker values.")]
    EmptyField { row: u64, column: String },

    #[error("Row {row}: Amount \"{value}\" is not a valid positive number.")]
    InvalidAmount { row: u64, value: String },

    #[error("No valid portfolio data found in CSV file.")]
    EmptyPortfolio,

    // ── Sample generation ───────────────────────────────────────────
    #[error("Cannot draw {requested} distinct symbols from the {pool} pool ({available} available)")]
    PoolTooSmall {
        pool: String,
        requested: usize,
        available: usize,
    },

    // ── File I/O ────────────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid market price for {symbol}: {price}")]
    InvalidPrice { symbol: String, price: f64 },
}

impl CoreError {
    /// True for malformed or missing CSV columns/values.
    /// These are recoverable and should be shown to the user as-is.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::MissingColumns(_)
                | CoreError::EmptyField { .. }
                | CoreError::InvalidAmount { .. }
                | CoreError::EmptyPortfolio
        )
    }

    /// True when the underlying CSV reader rejected the input syntax.
    pub fn is_parse(&self) -> bool {
        matches!(self, CoreError::CsvParse(_))
    }

    /// Any failure of CSV ingestion (parse or validation).
    pub fn is_format(&self) -> bool {
        self.is_parse() || self.is_validation()
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        // A failing reader is an I/O problem, not malformed CSV.
        match e.kind() {
            csv::ErrorKind::Io(io) => CoreError::FileIO(io.to_string()),
            _ => CoreError::CsvParse(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs, reqwest errors embed the full request URL.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
