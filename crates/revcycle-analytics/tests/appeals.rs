mod common;

use common::{approx, engine};
use jiff::civil::date;
use revcycle_core::models::provider::ProviderInfo;
use revcycle_core::models::risk::RiskLevel;

fn provider() -> ProviderInfo {
    ProviderInfo {
        name: "Riverside Clinic".to_string(),
        npi: "1234567893".to_string(),
        ..ProviderInfo::default()
    }
}

#[test]
fn one_letter_per_claim_and_payer() {
    let letters = engine().generate_appeals(&provider(), date(2024, 9, 1)).unwrap();
    assert_eq!(letters.len(), 1);

    let letter = &letters[0];
    assert_eq!(letter.claim_id, "CLM-2");
    assert_eq!(letter.payer_id, "AETNA");
    assert_eq!(letter.payer_name, "aetna Health");
    assert_eq!(letter.lines.len(), 2);
    assert!(approx(letter.total_underpayment, 31.0));
    assert!(approx(letter.total_contracted, 150.0));
    assert_eq!(letter.risk_level, RiskLevel::Critical);
    assert_eq!(letter.appeal_deadline, Some(date(2025, 2, 16)));
}

#[test]
fn letter_body_is_rendered_from_template() {
    let letters = engine().generate_appeals(&provider(), date(2024, 9, 1)).unwrap();
    let body = &letters[0].body;
    assert!(body.contains("2024-09-01"));
    assert!(body.contains("**Re:** Claim CLM-2, payer ID AETNA"));
    assert!(body.contains("Aetna Provider Disputes"));
    assert!(body.contains("**Total underpayment:** $31.00"));
    assert!(body.contains("filing window ending 2025-02-16"));
}

#[test]
fn custom_template_is_used() {
    let engine = engine().with_appeal_template("{{ claim_id }}: {{ total_underpayment }}");
    let letters = engine.generate_appeals(&provider(), date(2024, 9, 1)).unwrap();
    assert_eq!(letters[0].body, "CLM-2: $31.00");
}

#[test]
fn broken_template_surfaces_an_error() {
    let engine = engine().with_appeal_template("{{ claim_id");
    assert!(engine.generate_appeals(&provider(), date(2024, 9, 1)).is_err());
}

#[test]
fn appeal_for_claim_finds_or_skips() {
    let engine = engine();
    let found = engine
        .appeal_for_claim("clm-2", &provider(), date(2024, 9, 1))
        .unwrap();
    assert!(found.is_some());
    let none = engine
        .appeal_for_claim("CLM-1", &provider(), date(2024, 9, 1))
        .unwrap();
    assert!(none.is_none());
}
