use crate::models::asset::AssetClass;
use crate::models::fees::AssetFeeProfile;

/// Expense ratios for popular ETFs, stocks and mutual funds, keyed by exact symbol.
pub static ASSETS: &[(&str, AssetFeeProfile)] = &[
    // European and global ETFs
    ("VWCE", AssetFeeProfile::etf(0.0022)),   // Vanguard FTSE All-World
    ("IWDA", AssetFeeProfile::etf(0.0020)),   // iShares Core MSCI World
    ("EUNL", AssetFeeProfile::etf(0.0020)),   // iShares Core MSCI World
    ("VUSA", AssetFeeProfile::etf(0.0007)),   // Vanguard S&P 500
    ("CSPX", AssetFeeProfile::etf(0.0007)),   // iShares Core S&P 500
    ("MEUD", AssetFeeProfile::etf(0.0012)),   // Amundi MSCI Europe
    ("VEUR", AssetFeeProfile::etf(0.0012)),   // Vanguard FTSE Europe
    ("IEMA", AssetFeeProfile::etf(0.0018)),   // iShares Core MSCI EM
    ("VFEM", AssetFeeProfile::etf(0.0022)),   // Vanguard FTSE Emerging Markets
    ("AGGH", AssetFeeProfile::etf(0.0010)),   // iShares Core Global Aggregate Bond
    ("IUSQ", AssetFeeProfile::etf(0.0007)),   // iShares MSCI ACWI
    ("HMWO", AssetFeeProfile::etf(0.0015)),   // HSBC MSCI World
    ("SAWD", AssetFeeProfile::etf(0.0019)),   // SPDR ACWI
    ("DBXW", AssetFeeProfile::etf(0.0019)),   // Xtrackers MSCI World
    ("XDWD", AssetFeeProfile::etf(0.0019)),   // Xtrackers MSCI World
    ("TRET.L", AssetFeeProfile::etf(0.0015)), // Xtrackers Global Real Estate
    // Individual stocks
    ("AAPL", AssetFeeProfile::stock()),
    ("MSFT", AssetFeeProfile::stock()),
    ("GOOGL", AssetFeeProfile::stock()),
    ("AMZN", AssetFeeProfile::stock()),
    ("TSLA", AssetFeeProfile::stock()),
    ("FB", AssetFeeProfile::stock()),
    ("NVDA", AssetFeeProfile::stock()),
    ("BRK.B", AssetFeeProfile::stock()),
    ("JPM", AssetFeeProfile::stock()),
    ("JNJ", AssetFeeProfile::stock()),
    ("V", AssetFeeProfile::stock()),
    ("PG", AssetFeeProfile::stock()),
    ("UNH", AssetFeeProfile::stock()),
    ("HD", AssetFeeProfile::stock()),
    ("BAC", AssetFeeProfile::stock()),
    ("MA", AssetFeeProfile::stock()),
    ("DIS", AssetFeeProfile::stock()),
    ("PYPL", AssetFeeProfile::stock()),
    ("CMCSA", AssetFeeProfile::stock()),
    ("XOM", AssetFeeProfile::stock()),
    // Mutual funds
    ("FCNTX", AssetFeeProfile::fund(0.0082)), // Fidelity Contrafund
    ("PRGFX", AssetFeeProfile::fund(0.0065)), // T. Rowe Price Growth Stock
    ("VFIAX", AssetFeeProfile::fund(0.0040)), // Vanguard 500 Index Admiral
    ("VTSMX", AssetFeeProfile::fund(0.0140)), // Vanguard Total Stock Market
    ("VTSAX", AssetFeeProfile::fund(0.0030)), // Vanguard Total Stock Market Admiral
    ("VTIAX", AssetFeeProfile::fund(0.0011)), // Vanguard Total International Stock
    ("AGTHX", AssetFeeProfile::fund(0.0068)), // American Funds Growth Fund
    ("AIVSX", AssetFeeProfile::fund(0.0075)), // American Funds Investment Co.
    ("ANCFX", AssetFeeProfile::fund(0.0095)), // American Funds Fundamental Investors
    ("CWGIX", AssetFeeProfile::fund(0.0110)), // American Funds Capital World Growth
];

/// Fallback for unlisted symbols that look like an ETF.
pub static DEFAULT_ETF: AssetFeeProfile = AssetFeeProfile::etf(0.0030);

/// Fallback for unlisted symbols with no ETF/fund markers. Stocks carry no TER.
pub static DEFAULT_STOCK: AssetFeeProfile = AssetFeeProfile::stock();

/// Fallback for unlisted symbols that look like a mutual fund.
pub static DEFAULT_FUND: AssetFeeProfile = AssetFeeProfile::fund(0.0120);

/// Substrings that mark an unlisted symbol as an ETF (checked first).
pub static ETF_PATTERNS: &[&str] = &["ETF", "UCITS", "Index", "SPDR", "iShares", "Vanguard"];

/// Substrings that mark an unlisted symbol as a mutual fund.
pub static FUND_PATTERNS: &[&str] = &["Fund", "Mutual", "FCP", "SICAV", "OEF", "Class"];

/// Exact, case-sensitive match in the asset table.
pub fn find_asset(symbol: &str) -> Option<&'static AssetFeeProfile> {
    ASSETS
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|(_, profile)| profile)
}

/// Guess the class of a symbol that is not in the asset table.
///
/// Patterns are matched case-insensitively against the uppercased symbol:
/// ETF markers win over fund markers, anything else is a stock.
pub fn classify(symbol: &str) -> AssetClass {
    let upper = symbol.to_uppercase();
    let matches = |patterns: &[&str]| {
        patterns
            .iter()
            .any(|p| upper.contains(p.to_uppercase().as_str()))
    };

    if matches(ETF_PATTERNS) {
        AssetClass::Etf
    } else if matches(FUND_PATTERNS) {
        AssetClass::Fund
    } else {
        AssetClass::Stock
    }
}

/// Class default profile used when a symbol has no exact entry.
pub fn default_profile(asset_class: AssetClass) -> &'static AssetFeeProfile {
    match asset_class {
        AssetClass::Etf => &DEFAULT_ETF,
        AssetClass::Stock => &DEFAULT_STOCK,
        AssetClass::Fund => &DEFAULT_FUND,
    }
}

/// Fee profile for `symbol`: exact entry first, then the default for its guessed class.
pub fn asset_profile(symbol: &str) -> &'static AssetFeeProfile {
    find_asset(symbol).unwrap_or_else(|| {
        let class = classify(symbol);
        log::debug!("Unknown asset {symbol:?}, classified as {class}");
        default_profile(class)
    })
}
