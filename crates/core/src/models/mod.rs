pub mod analytics;
pub mod asset;
pub mod fees;
pub mod holding;
pub mod price;
pub mod settings;
