use csv::{ReaderBuilder, StringRecord, Trim};
use revcycle_core::models::claim::{Claim, ClaimStatus};
use revcycle_core::models::contract::Contract;
use revcycle_core::models::payment::Payment;

use crate::columns::{Columns, Row};
use crate::error::IngestError;

const PAYER_ID: &[&str] = &["payerid", "payer", "payercode", "insuranceid"];
const PAYER_NAME: &[&str] = &["payername", "insurancename", "insurance", "carrier"];
const CPT_CODE: &[&str] = &["cptcode", "cpt", "procedurecode", "hcpcs", "hcpcscode", "billingcode", "code"];
const CLAIM_ID: &[&str] = &["claimid", "claim", "claimnumber", "claimno", "icn"];
const AMOUNT_BILLED: &[&str] = &["amountbilled", "billedamount", "billed", "charge", "chargeamount", "charges"];

/// Parse a contract rate sheet.
///
/// Required columns: payer id, CPT code, contracted rate, effective date.
pub fn parse_contracts(input: &str) -> Result<Vec<Contract>, IngestError> {
    let (headers, records) = read_records(input)?;
    let cols = Columns::new("contracts", &headers);

    let payer_id = cols.require("payer_id", PAYER_ID)?;
    let cpt_code = cols.require("cpt_code", CPT_CODE)?;
    let rate = cols.require(
        "contracted_rate",
        &["contractedrate", "contractrate", "rate", "allowedamount", "expectedamount", "fee"],
    )?;
    let effective = cols.require("effective_date", &["effectivedate", "effective", "startdate"])?;
    let payer_name = cols.find(PAYER_NAME);
    let expiration = cols.find(&["expirationdate", "expiration", "enddate", "termdate"]);
    let modifier = cols.find(&["modifier", "mod"]);
    let pos = cols.find(&["placeofservice", "pos"]);

    let mut contracts = Vec::with_capacity(records.len());
    for record in &records {
        let row = Row::new(record);
        if row.is_blank() {
            continue;
        }
        let payer = row.text(payer_id, "payer_id")?;
        contracts.push(Contract {
            payer_name: row.optional_text(payer_name).unwrap_or_else(|| payer.clone()),
            payer_id: payer,
            cpt_code: row.text(cpt_code, "cpt_code")?,
            contracted_rate: row.money(rate, "contracted_rate")?,
            effective_date: row.date(effective, "effective_date")?,
            expiration_date: row.optional_date(expiration, "expiration_date")?,
            modifier: row.optional_text(modifier),
            place_of_service: row.optional_text(pos),
        });
    }

    tracing::debug!(count = contracts.len(), "parsed contract upload");
    Ok(contracts)
}

/// Parse a payment export.
///
/// Required columns: claim id, CPT code, billed, paid, payer id.
pub fn parse_payments(input: &str) -> Result<Vec<Payment>, IngestError> {
    let (headers, records) = read_records(input)?;
    let cols = Columns::new("payments", &headers);

    let claim_id = cols.require("claim_id", CLAIM_ID)?;
    let cpt_code = cols.require("cpt_code", CPT_CODE)?;
    let billed = cols.require("amount_billed", AMOUNT_BILLED)?;
    let paid = cols.require(
        "amount_paid",
        &["amountpaid", "paidamount", "paid", "payment", "paymentamount", "insurancepaid"],
    )?;
    let payer_id = cols.require("payer_id", PAYER_ID)?;
    let payer_name = cols.find(PAYER_NAME);
    let modifier = cols.find(&["modifier", "mod"]);
    let payment_date = cols.find(&["paymentdate", "paiddate", "checkdate", "remitdate"]);
    let adjustment_code = cols.find(&["adjustmentcode", "adjcode", "carc", "reasoncode"]);
    let adjustment_amount = cols.find(&["adjustmentamount", "adjamount", "adjustment"]);

    let mut payments = Vec::with_capacity(records.len());
    for record in &records {
        let row = Row::new(record);
        if row.is_blank() {
            continue;
        }
        let payer = row.text(payer_id, "payer_id")?;
        payments.push(Payment {
            claim_id: row.text(claim_id, "claim_id")?,
            cpt_code: row.text(cpt_code, "cpt_code")?,
            amount_billed: row.money(billed, "amount_billed")?,
            amount_paid: row.money(paid, "amount_paid")?,
            modifier: row.optional_text(modifier),
            payer_name: row.optional_text(payer_name).unwrap_or_else(|| payer.clone()),
            payer_id: payer,
            payment_date: row.optional_date(payment_date, "payment_date")?,
            adjustment_code: row.optional_text(adjustment_code),
            adjustment_amount: row.optional_money(adjustment_amount, "adjustment_amount")?,
        });
    }

    tracing::debug!(count = payments.len(), "parsed payment upload");
    Ok(payments)
}

/// Parse a claim export.
///
/// Required columns: claim id, date of service, CPT code, billed, payer id.
/// A missing status column means every claim is `submitted`.
pub fn parse_claims(input: &str) -> Result<Vec<Claim>, IngestError> {
    let (headers, records) = read_records(input)?;
    let cols = Columns::new("claims", &headers);

    let claim_id = cols.require("claim_id", CLAIM_ID)?;
    let dos = cols.require(
        "date_of_service",
        &["dateofservice", "dos", "servicedate", "dateofservicefrom"],
    )?;
    let cpt_code = cols.require("cpt_code", CPT_CODE)?;
    let billed = cols.require("amount_billed", AMOUNT_BILLED)?;
    let payer_id = cols.require("payer_id", PAYER_ID)?;
    let payer_name = cols.find(PAYER_NAME);
    let status_col = cols.find(&["status", "claimstatus"]);

    let mut claims = Vec::with_capacity(records.len());
    for record in &records {
        let row = Row::new(record);
        if row.is_blank() {
            continue;
        }
        let payer = row.text(payer_id, "payer_id")?;
        let status = match row.optional_text(status_col) {
            Some(raw) => raw.parse::<ClaimStatus>().map_err(|_| IngestError::InvalidValue {
                line: row.line(),
                column: "status",
                value: raw,
            })?,
            None => ClaimStatus::Submitted,
        };
        claims.push(Claim {
            claim_id: row.text(claim_id, "claim_id")?,
            date_of_service: row.date(dos, "date_of_service")?,
            cpt_code: row.text(cpt_code, "cpt_code")?,
            amount_billed: row.money(billed, "amount_billed")?,
            payer_name: row.optional_text(payer_name).unwrap_or_else(|| payer.clone()),
            payer_id: payer,
            status,
        });
    }

    tracing::debug!(count = claims.len(), "parsed claim upload");
    Ok(claims)
}

fn read_records(input: &str) -> Result<(StringRecord, Vec<StringRecord>), IngestError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.trim_start_matches('\u{feff}').as_bytes());
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, records))
}
