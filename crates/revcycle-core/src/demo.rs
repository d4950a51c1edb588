//! Built-in sample datasets.
//!
//! Hardcoded and fictional. Loaded by the server's `/demo` route so the
//! dashboard panels have something to show before the first upload.

use jiff::civil::{Date, date};

use crate::models::claim::{Claim, ClaimStatus};
use crate::models::contract::Contract;
use crate::models::payment::Payment;
use crate::models::quality::FacilityQuality;

const PAYERS: &[(&str, &str)] = &[
    ("AETNA", "Aetna"),
    ("UHC", "UnitedHealthcare"),
    ("MEDICARE", "Medicare"),
    ("BCBS", "Blue Cross Blue Shield"),
    ("CIGNA", "Cigna"),
    ("HUMANA", "Humana"),
];

fn payer_name(payer_id: &str) -> String {
    PAYERS
        .iter()
        .find(|(id, _)| *id == payer_id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| payer_id.to_string())
}

fn contract(payer_id: &str, cpt_code: &str, rate: f64) -> Contract {
    Contract {
        payer_id: payer_id.to_string(),
        payer_name: payer_name(payer_id),
        cpt_code: cpt_code.to_string(),
        contracted_rate: rate,
        effective_date: date(2024, 1, 1),
        expiration_date: Some(date(2024, 12, 31)),
        modifier: None,
        place_of_service: Some("11".to_string()),
    }
}

fn payment(claim_id: &str, payer_id: &str, cpt_code: &str, billed: f64, paid: f64, paid_on: Date) -> Payment {
    let shortfall = billed - paid;
    Payment {
        claim_id: claim_id.to_string(),
        cpt_code: cpt_code.to_string(),
        amount_billed: billed,
        amount_paid: paid,
        modifier: None,
        payer_id: payer_id.to_string(),
        payer_name: payer_name(payer_id),
        payment_date: Some(paid_on),
        adjustment_code: (shortfall > 0.0).then(|| "CO-45".to_string()),
        adjustment_amount: shortfall.max(0.0),
    }
}

fn claim(claim_id: &str, payer_id: &str, cpt_code: &str, billed: f64, dos: Date, status: ClaimStatus) -> Claim {
    Claim {
        claim_id: claim_id.to_string(),
        date_of_service: dos,
        cpt_code: cpt_code.to_string(),
        amount_billed: billed,
        payer_id: payer_id.to_string(),
        payer_name: payer_name(payer_id),
        status,
    }
}

pub fn contracts() -> Vec<Contract> {
    vec![
        contract("AETNA", "99213", 125.00),
        contract("AETNA", "99214", 185.00),
        contract("AETNA", "93000", 30.00),
        contract("UHC", "99213", 130.00),
        contract("UHC", "99214", 190.00),
        contract("UHC", "36415", 12.00),
        contract("MEDICARE", "99213", 92.47),
        contract("MEDICARE", "99214", 130.79),
        contract("MEDICARE", "93000", 17.12),
        contract("BCBS", "99213", 118.00),
        contract("BCBS", "99215", 245.00),
        contract("BCBS", "80053", 14.50),
        contract("CIGNA", "99213", 120.00),
        contract("CIGNA", "71046", 38.00),
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        payment("CLM-1001", "AETNA", "99213", 175.00, 125.00, date(2024, 3, 18)),
        payment("CLM-1001", "AETNA", "93000", 60.00, 24.00, date(2024, 3, 18)),
        payment("CLM-1002", "UHC", "99214", 250.00, 190.00, date(2024, 3, 22)),
        payment("CLM-1003", "MEDICARE", "99213", 150.00, 92.47, date(2024, 4, 2)),
        payment("CLM-1003", "MEDICARE", "93000", 45.00, 17.12, date(2024, 4, 2)),
        payment("CLM-1004", "BCBS", "99215", 320.00, 160.00, date(2024, 4, 9)),
        payment("CLM-1005", "CIGNA", "99213", 175.00, 112.00, date(2024, 4, 15)),
        payment("CLM-1006", "UHC", "36415", 20.00, 12.00, date(2024, 4, 19)),
        payment("CLM-1006", "UHC", "99213", 175.00, 127.40, date(2024, 4, 19)),
        payment("CLM-1007", "HUMANA", "99213", 175.00, 100.00, date(2024, 4, 26)),
        payment("CLM-1008", "AETNA", "99214", 250.00, 170.00, date(2024, 5, 3)),
    ]
}

pub fn claims() -> Vec<Claim> {
    use ClaimStatus::*;
    vec![
        claim("CLM-1001", "AETNA", "99213", 175.00, date(2024, 2, 26), Paid),
        claim("CLM-1001", "AETNA", "93000", 60.00, date(2024, 2, 26), PartiallyPaid),
        claim("CLM-1002", "UHC", "99214", 250.00, date(2024, 3, 1), Paid),
        claim("CLM-1003", "MEDICARE", "99213", 150.00, date(2024, 3, 8), Paid),
        claim("CLM-1003", "MEDICARE", "93000", 45.00, date(2024, 3, 8), Paid),
        claim("CLM-1004", "BCBS", "99215", 320.00, date(2024, 3, 14), PartiallyPaid),
        claim("CLM-1005", "CIGNA", "99213", 175.00, date(2024, 3, 21), PartiallyPaid),
        claim("CLM-1006", "UHC", "36415", 20.00, date(2024, 3, 28), Paid),
        claim("CLM-1006", "UHC", "99213", 175.00, date(2024, 3, 28), Paid),
        claim("CLM-1007", "HUMANA", "99213", 175.00, date(2024, 4, 4), Paid),
        claim("CLM-1008", "AETNA", "99214", 250.00, date(2024, 4, 11), PartiallyPaid),
        claim("CLM-1009", "BCBS", "80053", 42.00, date(2024, 4, 18), Pending),
        claim("CLM-1010", "CIGNA", "71046", 95.00, date(2024, 4, 25), Denied),
    ]
}

pub fn facility_quality() -> Vec<FacilityQuality> {
    vec![
        FacilityQuality {
            facility_id: "FAC-001".to_string(),
            name: "Riverside General Hospital".to_string(),
            readmission_rate: 14.2,
            patient_satisfaction: 78.0,
            average_length_of_stay: 4.6,
            infection_rate: 1.1,
            star_rating: 4,
        },
        FacilityQuality {
            facility_id: "FAC-002".to_string(),
            name: "Lakeview Medical Center".to_string(),
            readmission_rate: 16.8,
            patient_satisfaction: 71.0,
            average_length_of_stay: 5.2,
            infection_rate: 1.9,
            star_rating: 3,
        },
        FacilityQuality {
            facility_id: "FAC-003".to_string(),
            name: "Northside Surgical Center".to_string(),
            readmission_rate: 9.4,
            patient_satisfaction: 86.0,
            average_length_of_stay: 2.1,
            infection_rate: 0.6,
            star_rating: 5,
        },
        FacilityQuality {
            facility_id: "FAC-004".to_string(),
            name: "Valley Community Clinic".to_string(),
            readmission_rate: 12.5,
            patient_satisfaction: 82.0,
            average_length_of_stay: 3.4,
            infection_rate: 0.9,
            star_rating: 4,
        },
    ]
}
