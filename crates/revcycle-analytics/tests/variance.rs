mod common;

use common::{approx, engine};
use jiff::civil::date;
use revcycle_analytics::AnalyticsEngine;
use revcycle_core::models::risk::RiskLevel;
use revcycle_core::settings::{AnalysisSettings, RiskThresholds};

#[test]
fn every_payment_is_matched_or_reported() {
    let analysis = engine().analyze_variances();
    assert_eq!(analysis.records.len(), 4);
    assert_eq!(analysis.unmatched_payments.len(), 1);
    assert_eq!(analysis.unmatched_payments[0].claim_id, "CLM-4");
    assert_eq!(analysis.unpaid_claims.len(), 1);
    assert_eq!(analysis.unpaid_claims[0].claim_id, "CLM-5");
}

#[test]
fn variance_is_paid_minus_contracted() {
    let analysis = engine().analyze_variances();
    for record in &analysis.records {
        assert!(approx(record.variance, record.amount_paid - record.contracted_rate));
    }
}

#[test]
fn records_follow_payment_order() {
    let claims: Vec<String> = engine()
        .analyze_variances()
        .records
        .into_iter()
        .map(|r| format!("{}/{}", r.claim_id, r.cpt_code))
        .collect();
    assert_eq!(claims, ["CLM-1/99213", "CLM-2/99213", "CLM-2/93000", "CLM-3/99214"]);
}

#[test]
fn contract_is_chosen_by_date_of_service() {
    let analysis = engine().analyze_variances();
    let early = &analysis.records[0];
    assert_eq!(early.contracted_rate, 100.0);
    assert_eq!(early.date_of_service, Some(date(2024, 2, 15)));
    assert!(!early.underpaid);

    let late = &analysis.records[1];
    assert_eq!(late.contracted_rate, 110.0);
    assert!(approx(late.variance, -11.0));
    assert!(approx(late.variance_percent, -10.0));
    assert!(late.underpaid);
    assert_eq!(late.risk_level, RiskLevel::Medium);
}

#[test]
fn shortfall_inside_threshold_is_not_underpaid() {
    let analysis = engine().analyze_variances();
    let uhc = &analysis.records[3];
    assert!(approx(uhc.variance_percent, -1.5));
    assert!(!uhc.underpaid);
    assert_eq!(uhc.risk_level, RiskLevel::Low);
    assert_eq!(uhc.recoverable(), 0.0);
}

#[test]
fn underpayments_sorted_by_severity() {
    let underpaid = engine().underpayments();
    assert_eq!(underpaid.len(), 2);
    assert_eq!(underpaid[0].cpt_code, "93000");
    assert_eq!(underpaid[0].risk_level, RiskLevel::Critical);
    assert_eq!(underpaid[1].cpt_code, "99213");
}

#[test]
fn find_contract_prefers_effective_window() {
    let engine = engine();
    let rate = |on| engine.find_contract("aetna", " 99213", on).map(|c| c.contracted_rate);
    assert_eq!(rate(Some(date(2024, 3, 1))), Some(100.0));
    assert_eq!(rate(Some(date(2024, 8, 1))), Some(110.0));
    assert_eq!(rate(Some(date(2023, 1, 1))), Some(110.0));
    assert_eq!(rate(None), Some(110.0));
    assert!(engine.find_contract("CIGNA", "99213", None).is_none());
}

#[test]
fn zero_rate_contract_has_zero_percent() {
    let engine = AnalyticsEngine::with_data(
        AnalysisSettings::default(),
        vec![common::contract("AETNA", "G0008", 0.0, date(2024, 1, 1), None)],
        vec![common::payment("CLM-9", "AETNA", "G0008", 10.0, 0.0, None)],
        vec![],
    )
    .unwrap();
    let record = &engine.analyze_variances().records[0];
    assert_eq!(record.variance_percent, 0.0);
    assert!(!record.underpaid);
}

#[test]
fn tighter_threshold_flags_more_payments() {
    let mut engine = engine();
    engine
        .set_settings(AnalysisSettings {
            underpayment_threshold_pct: 1.0,
            risk: RiskThresholds::default(),
        })
        .unwrap();
    assert_eq!(engine.underpayments().len(), 3);
}

#[test]
fn invalid_settings_are_rejected() {
    let settings = AnalysisSettings {
        underpayment_threshold_pct: 2.0,
        risk: RiskThresholds {
            medium_pct: 20.0,
            high_pct: 10.0,
            critical_pct: 30.0,
        },
    };
    assert!(AnalyticsEngine::new(settings).is_err());
    assert!(engine().set_settings(settings).is_err());
}

#[test]
fn reloading_replaces_the_list() {
    let mut engine = engine();
    engine.load_payments(Vec::new());
    let analysis = engine.analyze_variances();
    assert!(analysis.records.is_empty());
    assert_eq!(analysis.unpaid_claims.len(), 5);

    engine.clear();
    assert!(engine.contracts().is_empty());
    assert!(engine.find_contract("AETNA", "99213", None).is_none());
}

#[test]
fn contract_validation_uses_payer_profiles() {
    let engine = AnalyticsEngine::with_data(
        AnalysisSettings::default(),
        vec![
            common::contract("AETNA", "99213", 100.0, date(2024, 1, 1), None),
            common::contract("ACME", "99213", -5.0, date(2024, 1, 1), None),
        ],
        vec![],
        vec![],
    )
    .unwrap();
    let issues = engine.validate_contracts();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].payer_id, "ACME");
}

#[test]
fn underpaid_threshold_is_strict() {
    let contracts = vec![common::contract("AETNA", "99213", 100.0, date(2024, 1, 1), None)];
    let payments = vec![
        common::payment("CLM-AT", "AETNA", "99213", 150.0, 98.0, None),
        common::payment("CLM-BELOW", "AETNA", "99213", 150.0, 97.99, None),
    ];
    let engine =
        AnalyticsEngine::with_data(AnalysisSettings::default(), contracts, payments, Vec::new()).unwrap();

    let records = engine.analyze_variances().records;
    assert!(approx(records[0].variance_percent, -2.0));
    assert!(!records[0].underpaid);
    assert!(records[1].variance_percent < -2.0);
    assert!(records[1].underpaid);

    assert!(!engine.is_underpaid(-2.0));
    assert!(engine.is_underpaid(-2.01));
}
