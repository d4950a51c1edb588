use jiff::civil::date;
use revcycle_core::models::risk::RiskLevel;
use revcycle_core::models::variance::VarianceRecord;
use revcycle_export::report::write_variance_csv;

fn record() -> VarianceRecord {
    VarianceRecord {
        claim_id: "CLM-1".to_string(),
        payer_id: "AETNA".to_string(),
        payer_name: "Aetna".to_string(),
        cpt_code: "93000".to_string(),
        date_of_service: Some(date(2024, 2, 26)),
        payment_date: None,
        amount_billed: 60.0,
        contracted_rate: 30.0,
        amount_paid: 24.0,
        variance: -6.0,
        variance_percent: -20.0,
        underpaid: true,
        risk_level: RiskLevel::High,
        adjustment_code: Some("CO-45".to_string()),
    }
}

#[test]
fn header_then_one_row_per_record() {
    let csv = write_variance_csv(&[record(), record()]).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("claim_id,payer_id,payer_name,cpt_code,date_of_service"));
    assert_eq!(
        lines[1],
        "CLM-1,AETNA,Aetna,93000,2024-02-26,,60.0,30.0,24.0,-6.0,-20.0,true,HIGH,CO-45"
    );
}

#[test]
fn no_records_is_empty() {
    assert_eq!(write_variance_csv(&[]).unwrap(), "");
}
