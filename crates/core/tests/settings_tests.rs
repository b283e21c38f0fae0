// ═══════════════════════════════════════════════════════════════════
// Settings Tests — defaults, partial JSON, validation
// ═══════════════════════════════════════════════════════════════════

use fee_analyzer_core::errors::CoreError;
use fee_analyzer_core::models::settings::Settings;
use fee_analyzer_core::FeeAnalyzer;

mod defaults {
    use super::*;

    #[test]
    fn default_values() {
        let s = Settings::default();
        assert_eq!(s.display_currency, "EUR");
        assert_eq!(s.optimized_cost_rate, 0.003);
        assert_eq!(s.forecast_years, 30);
        assert_eq!(s.forecast_growth_rate, 0.07);
        assert_eq!(s.export_file_prefix, "clearvest-portfolio-analysis");
        assert!(!s.fetch_market_prices);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn empty_object_is_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let s = Settings::from_json(r#"{"forecast_years": 10, "fetch_market_prices": true}"#)
            .unwrap();
        assert_eq!(s.forecast_years, 10);
        assert!(s.fetch_market_prices);
        assert_eq!(s.optimized_cost_rate, 0.003);
    }

    #[test]
    fn json_round_trip() {
        let s = Settings {
            display_currency: "USD".into(),
            optimized_cost_rate: 0.002,
            ..Settings::default()
        };
        let json = s.to_json().unwrap();
        assert!(json.contains('\n'));
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }
}

mod validation {
    use super::*;

    #[test]
    fn malformed_json() {
        let err = Settings::from_json("{forecast_years: 10").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn wrong_type() {
        let err = Settings::from_json(r#"{"forecast_years": "ten"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn negative_optimized_rate() {
        let err = Settings::from_json(r#"{"optimized_cost_rate": -0.01}"#).unwrap_err();
        assert!(err.to_string().contains("optimized_cost_rate"));
    }

    #[test]
    fn non_finite_rates() {
        let s = Settings {
            forecast_growth_rate: f64::INFINITY,
            ..Settings::default()
        };
        assert!(s.validate().is_err());

        let s = Settings {
            optimized_cost_rate: f64::NAN,
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn blank_currency() {
        let s = Settings {
            display_currency: "  ".into(),
            ..Settings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn analyzer_rejects_invalid_settings() {
        let bad = Settings {
            optimized_cost_rate: -1.0,
            ..Settings::default()
        };
        assert!(FeeAnalyzer::with_settings(bad.clone()).is_err());

        let mut analyzer = FeeAnalyzer::new();
        assert!(analyzer.set_settings(bad).is_err());
        assert_eq!(analyzer.settings(), &Settings::default());
    }

    #[test]
    fn analyzer_applies_new_settings() {
        let mut analyzer = FeeAnalyzer::new();
        let updated = Settings {
            export_file_prefix: "report".into(),
            ..Settings::default()
        };
        analyzer.set_settings(updated).unwrap();
        assert_eq!(analyzer.settings().export_file_prefix, "report");
    }
}
