pub mod analytics_service;
pub mod csv_service;
pub mod export_service;
pub mod fee_service;
pub mod generator_service;
pub mod market_service;
