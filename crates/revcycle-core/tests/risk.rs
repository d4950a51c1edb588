use revcycle_core::models::risk::RiskLevel;
use revcycle_core::settings::{AnalysisSettings, RiskThresholds};

#[test]
fn overpayment_and_exact_payment_are_low() {
    let cutoffs = RiskThresholds::default();
    assert_eq!(cutoffs.classify(0.0), RiskLevel::Low);
    assert_eq!(cutoffs.classify(12.5), RiskLevel::Low);
}

#[test]
fn default_cutoffs_bucket_shortfalls() {
    let cutoffs = RiskThresholds::default();
    assert_eq!(cutoffs.classify(-4.99), RiskLevel::Low);
    assert_eq!(cutoffs.classify(-5.0), RiskLevel::Medium);
    assert_eq!(cutoffs.classify(-14.9), RiskLevel::Medium);
    assert_eq!(cutoffs.classify(-15.0), RiskLevel::High);
    assert_eq!(cutoffs.classify(-29.9), RiskLevel::High);
    assert_eq!(cutoffs.classify(-30.0), RiskLevel::Critical);
    assert_eq!(cutoffs.classify(-100.0), RiskLevel::Critical);
}

#[test]
fn risk_levels_order_by_severity() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::High < RiskLevel::Critical);
    assert_eq!(RiskLevel::ALL.iter().max(), Some(&RiskLevel::Critical));
}

#[test]
fn risk_level_serializes_upper_case() {
    let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
    assert_eq!(json, "\"CRITICAL\"");
    assert_eq!("medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
    assert!("severe".parse::<RiskLevel>().is_err());
}

#[test]
fn cutoffs_must_increase() {
    let bad = RiskThresholds {
        medium_pct: 10.0,
        high_pct: 10.0,
        critical_pct: 30.0,
    };
    assert!(bad.validate().is_err());
    assert!(RiskThresholds::default().validate().is_ok());
}

#[test]
fn negative_threshold_is_rejected() {
    let settings = AnalysisSettings {
        underpayment_threshold_pct: -1.0,
        ..AnalysisSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn settings_without_risk_block_use_default_cutoffs() {
    let settings: AnalysisSettings =
        serde_json::from_str(r#"{ "underpayment_threshold_pct": 3.5 }"#).unwrap();
    assert_eq!(settings.underpayment_threshold_pct, 3.5);
    assert_eq!(settings.risk, RiskThresholds::default());
}
