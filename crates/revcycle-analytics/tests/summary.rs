mod common;

use common::{approx, engine};
use revcycle_core::models::claim::ClaimStatus;
use revcycle_core::models::risk::RiskLevel;

#[test]
fn totals_cover_matched_payments() {
    let summary = engine().summary();
    assert_eq!(summary.total_contracts, 4);
    assert_eq!(summary.total_payments, 5);
    assert_eq!(summary.total_claims, 5);
    assert_eq!(summary.matched_payments, 4);
    assert_eq!(summary.unmatched_payments, 1);
    assert_eq!(summary.unpaid_claims, 1);
    assert!(approx(summary.total_billed, 610.0));
    assert!(approx(summary.total_paid, 416.0));
    assert!(approx(summary.total_expected, 450.0));
    assert!(approx(summary.total_variance, -34.0));
    assert!(approx(summary.total_paid - summary.total_expected, summary.total_variance));
    assert!(approx(summary.unmatched_billed, 120.0));
    assert!(approx(summary.unmatched_paid, 80.0));
    assert_eq!(summary.underpaid_count, 2);
    assert!(approx(summary.recoverable_amount, 31.0));
}

#[test]
fn risk_distribution_lists_every_level() {
    let summary = engine().summary();
    let levels: Vec<(RiskLevel, usize)> = summary
        .risk_distribution
        .iter()
        .map(|r| (r.risk_level, r.count))
        .collect();
    assert_eq!(
        levels,
        vec![
            (RiskLevel::Low, 2),
            (RiskLevel::Medium, 1),
            (RiskLevel::High, 0),
            (RiskLevel::Critical, 1),
        ]
    );
    assert!(approx(summary.risk_distribution[3].amount, 20.0));
}

#[test]
fn status_distribution_skips_absent_statuses() {
    let summary = engine().summary();
    let statuses: Vec<(ClaimStatus, usize)> = summary
        .status_distribution
        .iter()
        .map(|s| (s.status, s.count))
        .collect();
    assert_eq!(
        statuses,
        vec![
            (ClaimStatus::Pending, 1),
            (ClaimStatus::Paid, 2),
            (ClaimStatus::PartiallyPaid, 2),
        ]
    );
}

#[test]
fn payers_sorted_by_recoverable_amount() {
    let summary = engine().summary();
    let ids: Vec<&str> = summary.payers.iter().map(|p| p.payer_id.as_str()).collect();
    assert_eq!(ids, ["AETNA", "UHC"]);

    let aetna = &summary.payers[0];
    assert_eq!(aetna.payment_count, 3);
    assert_eq!(aetna.underpaid_count, 2);
    assert!(approx(aetna.recoverable_amount, 31.0));
    assert!((aetna.underpayment_rate - 66.666).abs() < 0.01);
}

#[test]
fn payer_summary_lookup_is_case_insensitive() {
    let uhc = engine().payer_summary("uhc").unwrap();
    assert_eq!(uhc.payment_count, 1);
    assert_eq!(uhc.underpaid_count, 0);
    assert!(engine().payer_summary("CIGNA").is_none());
}

#[test]
fn price_transparency_spans_payers() {
    let prices = engine().price_transparency("99213").unwrap();
    assert_eq!(prices.min_rate, 100.0);
    assert_eq!(prices.max_rate, 110.0);
    assert!(approx(prices.mean_rate, 105.0));
    assert!(approx(prices.median_rate, 105.0));
    assert_eq!(prices.payer_rates.len(), 2);

    let single = engine().price_transparency("93000").unwrap();
    assert_eq!(single.median_rate, 40.0);
    assert!(engine().price_transparency("00000").is_none());
}
