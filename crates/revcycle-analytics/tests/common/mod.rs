#![allow(dead_code)]

use jiff::civil::{Date, date};
use revcycle_analytics::AnalyticsEngine;
use revcycle_core::models::claim::{Claim, ClaimStatus};
use revcycle_core::models::contract::Contract;
use revcycle_core::models::payment::Payment;
use revcycle_core::settings::AnalysisSettings;

pub fn contract(payer_id: &str, cpt_code: &str, rate: f64, from: Date, to: Option<Date>) -> Contract {
    Contract {
        payer_id: payer_id.to_string(),
        payer_name: payer_id.to_string(),
        cpt_code: cpt_code.to_string(),
        contracted_rate: rate,
        effective_date: from,
        expiration_date: to,
        modifier: None,
        place_of_service: None,
    }
}

pub fn payment(claim_id: &str, payer_id: &str, cpt_code: &str, billed: f64, paid: f64, on: Option<Date>) -> Payment {
    Payment {
        claim_id: claim_id.to_string(),
        cpt_code: cpt_code.to_string(),
        amount_billed: billed,
        amount_paid: paid,
        modifier: None,
        payer_id: payer_id.to_string(),
        payer_name: format!("{payer_id} Health"),
        payment_date: on,
        adjustment_code: None,
        adjustment_amount: 0.0,
    }
}

pub fn claim(claim_id: &str, payer_id: &str, cpt_code: &str, dos: Date, status: ClaimStatus) -> Claim {
    Claim {
        claim_id: claim_id.to_string(),
        date_of_service: dos,
        cpt_code: cpt_code.to_string(),
        amount_billed: 150.0,
        payer_id: payer_id.to_string(),
        payer_name: format!("{payer_id} Health"),
        status,
    }
}

/// Four matched payments (two underpaid), one payment without a contract
/// and one claim without a payment.
pub fn engine() -> AnalyticsEngine {
    let contracts = vec![
        contract("AETNA", "99213", 100.0, date(2024, 1, 1), Some(date(2024, 6, 30))),
        contract("AETNA", "99213", 110.0, date(2024, 7, 1), None),
        contract("AETNA", "93000", 40.0, date(2024, 1, 1), None),
        contract("UHC", "99214", 200.0, date(2024, 1, 1), None),
    ];
    let payments = vec![
        payment("CLM-1", "AETNA", "99213", 150.0, 100.0, Some(date(2024, 3, 1))),
        payment("CLM-2", "aetna", "99213", 150.0, 99.0, Some(date(2024, 8, 20))),
        payment("CLM-2", "AETNA", "93000", 60.0, 20.0, Some(date(2024, 8, 20))),
        payment("CLM-3", "UHC", "99214", 250.0, 197.0, None),
        payment("CLM-4", "CIGNA", "99213", 120.0, 80.0, None),
    ];
    let claims = vec![
        claim("CLM-1", "AETNA", "99213", date(2024, 2, 15), ClaimStatus::Paid),
        claim("CLM-2", "AETNA", "99213", date(2024, 8, 1), ClaimStatus::PartiallyPaid),
        claim("CLM-2", "AETNA", "93000", date(2024, 8, 1), ClaimStatus::PartiallyPaid),
        claim("CLM-3", "UHC", "99214", date(2024, 3, 10), ClaimStatus::Paid),
        claim("CLM-5", "UHC", "99214", date(2024, 9, 2), ClaimStatus::Pending),
    ];
    AnalyticsEngine::with_data(AnalysisSettings::default(), contracts, payments, claims).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
