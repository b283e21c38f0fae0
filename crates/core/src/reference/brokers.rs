use crate::models::fees::BrokerFeeProfile;

/// Broker fee table (2024 European rates).
///
/// Lookup is case-insensitive on `name`, so "Degiro" and "DEGIRO" share one entry.
pub static BROKERS: &[BrokerFeeProfile] = &[
    BrokerFeeProfile {
        name: "DEGIRO",
        fx_markup_rate: 0.0025,
        trading_fee_amount: 2.00,
        monthly_platform_fee: 0.0,
        min_ter: 0.0007,
        max_ter: 0.0150,
    },
    BrokerFeeProfile {
        name: "BUX",
        fx_markup_rate: 0.0050,
        trading_fee_amount: 0.0,
        monthly_platform_fee: 2.99,
        min_ter: 0.0025,
        max_ter: 0.0075,
    },
    BrokerFeeProfile {
        name: "Trade Republic",
        fx_markup_rate: 0.0015,
        trading_fee_amount: 1.00,
        monthly_platform_fee: 0.0,
        min_ter: 0.0007,
        max_ter: 0.0070,
    },
    BrokerFeeProfile {
        name: "Interactive Brokers",
        fx_markup_rate: 0.0002,
        trading_fee_amount: 2.00,
        monthly_platform_fee: 0.0,
        min_ter: 0.0007,
        max_ter: 0.0150,
    },
    BrokerFeeProfile {
        name: "Robinhood",
        fx_markup_rate: 0.0030,
        trading_fee_amount: 0.0,
        monthly_platform_fee: 0.0,
        min_ter: 0.0,
        max_ter: 0.0100,
    },
    BrokerFeeProfile {
        name: "Vanguard",
        fx_markup_rate: 0.0015,
        trading_fee_amount: 0.0,
        monthly_platform_fee: 0.0,
        min_ter: 0.0003,
        max_ter: 0.0080,
    },
    BrokerFeeProfile {
        name: "Fidelity",
        fx_markup_rate: 0.0020,
        trading_fee_amount: 0.0,
        monthly_platform_fee: 0.0,
        min_ter: 0.0,
        max_ter: 0.0090,
    },
    BrokerFeeProfile {
        name: "Charles Schwab",
        fx_markup_rate: 0.0018,
        trading_fee_amount: 0.0,
        monthly_platform_fee: 0.0,
        min_ter: 0.0003,
        max_ter: 0.0085,
    },
    // Monthly fee is eToro's inactivity charge
    BrokerFeeProfile {
        name: "eToro",
        fx_markup_rate: 0.0050,
        trading_fee_amount: 0.0,
        monthly_platform_fee: 5.00,
        min_ter: 0.0,
        max_ter: 0.0120,
    },
    BrokerFeeProfile {
        name: "Saxo Bank",
        fx_markup_rate: 0.0025,
        trading_fee_amount: 3.00,
        monthly_platform_fee: 0.0,
        min_ter: 0.0005,
        max_ter: 0.0150,
    },
    BrokerFeeProfile {
        name: "Scalable Capital",
        fx_markup_rate: 0.0020,
        trading_fee_amount: 0.99,
        monthly_platform_fee: 2.99,
        min_ter: 0.0007,
        max_ter: 0.0080,
    },
];

/// Conservative profile used for any broker not in [`BROKERS`].
pub static DEFAULT_BROKER: BrokerFeeProfile = BrokerFeeProfile {
    name: "Other",
    fx_markup_rate: 0.0020,
    trading_fee_amount: 5.00,
    monthly_platform_fee: 0.0,
    min_ter: 0.0020,
    max_ter: 0.0150,
};

/// Exact (case-insensitive) match in the broker table.
pub fn find_broker(name: &str) -> Option<&'static BrokerFeeProfile> {
    BROKERS.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Broker profile for `name`, falling back to [`DEFAULT_BROKER`].
pub fn broker_profile(name: &str) -> &'static BrokerFeeProfile {
    find_broker(name).unwrap_or_else(|| {
        log::debug!("Unknown broker {name:?}, using default fee profile");
        &DEFAULT_BROKER
    })
}
