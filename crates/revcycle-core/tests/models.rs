use jiff::civil::date;
use revcycle_core::demo;
use revcycle_core::models::claim::ClaimStatus;
use revcycle_core::models::contract::Contract;
use revcycle_core::models::key::RecordKey;

fn contract() -> Contract {
    Contract {
        payer_id: "aetna ".to_string(),
        payer_name: "Aetna".to_string(),
        cpt_code: " 99213".to_string(),
        contracted_rate: 125.0,
        effective_date: date(2024, 1, 1),
        expiration_date: Some(date(2024, 6, 30)),
        modifier: None,
        place_of_service: None,
    }
}

#[test]
fn record_key_normalizes_both_parts() {
    assert_eq!(contract().key(), RecordKey::new("AETNA", "99213"));
    assert_eq!(contract().key().to_string(), "AETNA/99213");
}

#[test]
fn effective_window_is_inclusive() {
    let c = contract();
    assert!(c.is_effective_on(date(2024, 1, 1)));
    assert!(c.is_effective_on(date(2024, 6, 30)));
    assert!(!c.is_effective_on(date(2023, 12, 31)));
    assert!(!c.is_effective_on(date(2024, 7, 1)));
}

#[test]
fn open_ended_contract_never_expires() {
    let c = Contract {
        expiration_date: None,
        ..contract()
    };
    assert!(c.is_effective_on(date(2031, 1, 1)));
}

#[test]
fn claim_status_accepts_free_text_labels() {
    assert_eq!("Partially Paid".parse::<ClaimStatus>().unwrap(), ClaimStatus::PartiallyPaid);
    assert_eq!("DENIED".parse::<ClaimStatus>().unwrap(), ClaimStatus::Denied);
    assert_eq!("in process".parse::<ClaimStatus>().unwrap(), ClaimStatus::Pending);
    assert!("lost".parse::<ClaimStatus>().is_err());
}

#[test]
fn contract_round_trips_dates_as_iso_strings() {
    let json = serde_json::to_value(contract()).unwrap();
    assert_eq!(json["effective_date"], "2024-01-01");
    assert_eq!(json["expiration_date"], "2024-06-30");
}

#[test]
fn demo_claims_reference_demo_payers() {
    let contracts = demo::contracts();
    let claims = demo::claims();
    assert!(!contracts.is_empty());
    assert!(claims.len() > demo::payments().len());
    assert!(claims.iter().all(|c| !c.payer_name.is_empty()));
    assert_eq!(demo::facility_quality().len(), 4);
}
