use jiff::civil::date;
use revcycle_ingest::{IngestError, parse_era};

const SAMPLE: &str = "\
ISA*00*          *00*          *ZZ*PAYERSENDER    *ZZ*PROVIDERRCVR   *240318*1200*^*00501*000000001*0*P*:~
GS*HP*PAYERSENDER*PROVIDERRCVR*20240318*1200*1*X*005010X221A1~
ST*835*0001~
BPR*I*149.00*C*ACH*CCP*01*999999999*DA*123456*1512345678**01*999988880*DA*98765*20240318~
TRN*1*EFT-55001*1512345678~
DTM*405*20240317~
N1*PR*AETNA HEALTH~
REF*2U*aetna~
N1*PE*RIVERSIDE CLINIC*XX*1234567893~
CLP*CLM-1001*1*235*149*0*12*PAYERCLM01~
CAS*PR*1*10~
SVC*HC:99213*175*125**1~
DTM*472*20240226~
CAS*CO*45*50~
SVC*HC:93000:26*60*24**1~
CAS*CO*45*30*1*253*6~
CLP*CLM-1002*4*90*0*0*12~
SE*18*0001~
GE*1*1~
IEA*1*000000001~";

#[test]
fn service_lines_become_payments() {
    let era = parse_era(SAMPLE).unwrap();
    assert_eq!(era.payer_id, "AETNA");
    assert_eq!(era.payer_name, "AETNA HEALTH");
    assert_eq!(era.payment_date, Some(date(2024, 3, 18)));
    assert_eq!(era.trace_number.as_deref(), Some("EFT-55001"));
    assert_eq!(era.claim_count, 2);
    assert_eq!(era.payments.len(), 2);

    let first = &era.payments[0];
    assert_eq!(first.claim_id, "CLM-1001");
    assert_eq!(first.cpt_code, "99213");
    assert_eq!(first.amount_billed, 175.0);
    assert_eq!(first.amount_paid, 125.0);
    assert_eq!(first.adjustment_code.as_deref(), Some("CO-45"));
    assert_eq!(first.adjustment_amount, 50.0);

    let second = &era.payments[1];
    assert_eq!(second.cpt_code, "93000");
    assert_eq!(second.adjustment_code.as_deref(), Some("CO-45"));
    assert_eq!(second.adjustment_amount, 36.0);
}

#[test]
fn modifiers_and_claim_totals_are_kept() {
    let era = parse_era(SAMPLE).unwrap();
    assert_eq!(era.payments[0].modifier, None);
    assert_eq!(era.payments[1].modifier.as_deref(), Some("26"));

    assert_eq!(era.claims.len(), 2);
    let paid = &era.claims[0];
    assert_eq!(paid.claim_id, "CLM-1001");
    assert_eq!(paid.amount_billed, 235.0);
    assert_eq!(paid.amount_paid, 149.0);
    assert_eq!(paid.line_count, 2);
    assert!(paid.lines_balance());

    let denied = &era.claims[1];
    assert_eq!(denied.claim_id, "CLM-1002");
    assert_eq!(denied.line_count, 0);
}

#[test]
fn unbalanced_claim_is_still_parsed() {
    let doc = "N1*PR*CIGNA~CLP*C-9*1*100*90~SVC*HC:99213*100*80~";
    let era = parse_era(doc).unwrap();
    assert_eq!(era.payments.len(), 1);
    assert!(!era.claims[0].lines_balance());
    assert_eq!(era.claims[0].lines_paid, 80.0);
}

#[test]
fn production_date_is_fallback_payment_date() {
    let doc = "N1*PR*CIGNA~DTM*405*20240401~CLP*C-9*1*100*80~SVC*HC:99213*100*80~";
    let era = parse_era(doc).unwrap();
    assert_eq!(era.payment_date, Some(date(2024, 4, 1)));
    assert_eq!(era.payer_id, "CIGNA");
}

#[test]
fn payer_id_from_n1_identifier() {
    let doc = "N1*PR*Blue Cross*XV*bcbs~CLP*C-9*1*100*80~SVC*HC:99213*100*80~";
    let era = parse_era(doc).unwrap();
    assert_eq!(era.payer_id, "BCBS");
    assert_eq!(era.payer_name, "Blue Cross");
}

#[test]
fn newline_separated_segments_are_accepted() {
    let doc = "N1*PR*CIGNA\nCLP*C-9*1*100*80\nSVC*HC:99213*100*80\n";
    let era = parse_era(doc).unwrap();
    assert_eq!(era.payments.len(), 1);
}

#[test]
fn empty_and_claimless_documents_fail() {
    assert!(matches!(parse_era("   "), Err(IngestError::EmptyDocument)));
    assert!(matches!(
        parse_era("ST*835*0001~N1*PR*CIGNA~SE*2*0001~"),
        Err(IngestError::NoClaimPayments)
    ));
}

#[test]
fn service_line_without_claim_is_rejected() {
    assert!(matches!(
        parse_era("N1*PR*CIGNA~SVC*HC:99213*100*80~"),
        Err(IngestError::InvalidSegment { index: 1, .. })
    ));
}
