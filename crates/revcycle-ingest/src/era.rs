//! ANSI X12 835 remittance advice, read by string splitting.
//!
//! Only the segments needed to rebuild payment lines are looked at:
//!
//! - `BPR` payment date (element 16)
//! - `TRN` trace / check number
//! - `DTM*405` production date, used when `BPR` carries no date
//! - `N1*PR` payer name, with the payer id in element 4 when present
//! - `REF*2U` payer id
//! - `CLP` claim id, billed and paid totals
//! - `SVC` procedure code, modifier, billed and paid amounts
//! - `CAS` adjustment group, reason code and amounts for the current line
//!
//! Everything else is skipped.

use jiff::civil::Date;
use revcycle_core::models::key::normalize;
use revcycle_core::models::payment::Payment;
use serde::Serialize;

use crate::error::IngestError;
use crate::values::{parse_date, parse_money};

/// Payments recovered from one 835 document.
#[derive(Debug, Clone, Serialize)]
pub struct EraRemittance {
    pub payer_id: String,
    pub payer_name: String,
    pub payment_date: Option<Date>,
    pub trace_number: Option<String>,
    pub claim_count: usize,
    /// Claim-level totals from `CLP`, in document order.
    pub claims: Vec<EraClaim>,
    pub payments: Vec<Payment>,
}

/// One `CLP` segment with the sum of its service lines.
#[derive(Debug, Clone, Serialize)]
pub struct EraClaim {
    pub claim_id: String,
    pub amount_billed: f64,
    pub amount_paid: f64,
    pub line_count: usize,
    /// Sum of `SVC03` over the claim's service lines.
    pub lines_paid: f64,
}

impl EraClaim {
    /// Whether the service lines add up to the claim payment.
    pub fn lines_balance(&self) -> bool {
        (self.lines_paid - self.amount_paid).abs() < 0.005
    }
}

struct Delimiters {
    segment: char,
    element: char,
    component: char,
}

impl Delimiters {
    /// Read delimiters from the `ISA` header when present. The element
    /// separator is the fourth character of the document and the component
    /// separator is `ISA16`.
    fn detect(text: &str) -> Self {
        let segment = if text.contains('~') { '~' } else { '\n' };
        let mut delims = Self {
            segment,
            element: '*',
            component: ':',
        };

        if let Some(rest) = text.strip_prefix("ISA")
            && let Some(element) = rest.chars().next()
        {
            delims.element = element;
            let isa = text.split(segment).next().unwrap_or_default();
            if let Some(component) = isa.split(element).nth(16).and_then(|e| e.trim().chars().next()) {
                delims.component = component;
            }
        }
        delims
    }
}

/// A `SVC` line waiting for trailing `CAS` segments.
struct OpenLine {
    claim_id: String,
    cpt_code: String,
    modifier: Option<String>,
    billed: f64,
    paid: f64,
    adjustment_code: Option<String>,
    adjustment_amount: f64,
}

#[derive(Default)]
struct Header {
    payer_id: Option<String>,
    payer_name: Option<String>,
    payment_date: Option<Date>,
    production_date: Option<Date>,
    trace_number: Option<String>,
}

pub fn parse_era(text: &str) -> Result<EraRemittance, IngestError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(IngestError::EmptyDocument);
    }
    let delims = Delimiters::detect(text);

    let mut header = Header::default();
    let mut lines: Vec<OpenLine> = Vec::new();
    let mut current_claim: Option<String> = None;
    let mut claims: Vec<EraClaim> = Vec::new();
    let mut lines_in_claim = 0usize;

    let segments = text
        .split(delims.segment)
        .map(str::trim)
        .filter(|s| !s.is_empty());

    for (index, segment) in segments.enumerate() {
        let elements: Vec<&str> = segment.split(delims.element).map(str::trim).collect();
        let at = |i: usize| elements.get(i).copied().unwrap_or("");

        match at(0) {
            "BPR" => {
                header.payment_date = parse_date(at(16));
            }
            "TRN" => {
                header.trace_number = Some(at(2).to_string()).filter(|s| !s.is_empty());
            }
            "DTM" if at(1) == "405" => {
                header.production_date = parse_date(at(2));
            }
            "N1" if at(1) == "PR" => {
                header.payer_name = Some(at(2).to_string()).filter(|s| !s.is_empty());
                if header.payer_id.is_none() && !at(4).is_empty() {
                    header.payer_id = Some(at(4).to_string());
                }
            }
            "REF" if at(1) == "2U" => {
                header.payer_id = Some(at(2).to_string()).filter(|s| !s.is_empty());
            }
            "CLP" => {
                if let Some(previous) = current_claim.take()
                    && lines_in_claim == 0
                {
                    tracing::warn!(claim_id = %previous, "835 claim has no service lines, skipped");
                }
                let claim_id = at(1);
                if claim_id.is_empty() {
                    return Err(invalid(index, segment, "CLP01 claim id is empty"));
                }
                current_claim = Some(claim_id.to_string());
                claims.push(EraClaim {
                    claim_id: claim_id.to_string(),
                    amount_billed: amount(at(3), index, segment, "CLP03")?,
                    amount_paid: amount(at(4), index, segment, "CLP04")?,
                    line_count: 0,
                    lines_paid: 0.0,
                });
                lines_in_claim = 0;
            }
            "SVC" => {
                let Some(claim_id) = current_claim.clone() else {
                    return Err(invalid(index, segment, "SVC before any CLP"));
                };
                let mut composite = at(1).split(delims.component);
                let _qualifier = composite.next();
                let cpt_code = composite.next().unwrap_or("").trim();
                if cpt_code.is_empty() {
                    return Err(invalid(index, segment, "SVC01 has no procedure code"));
                }
                let modifier = composite
                    .next()
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string);
                let billed = amount(at(2), index, segment, "SVC02")?;
                let paid = amount(at(3), index, segment, "SVC03")?;
                if let Some(claim) = claims.last_mut() {
                    claim.line_count += 1;
                    claim.lines_paid += paid;
                }
                lines.push(OpenLine {
                    claim_id,
                    cpt_code: cpt_code.to_string(),
                    modifier,
                    billed,
                    paid,
                    adjustment_code: None,
                    adjustment_amount: 0.0,
                });
                lines_in_claim += 1;
            }
            "CAS" => {
                // Claim-level adjustments (before the first SVC) don't belong
                // to a payment line.
                if lines_in_claim == 0 {
                    tracing::debug!(segment, "claim-level CAS ignored");
                    continue;
                }
                let Some(line) = lines.last_mut() else {
                    continue;
                };
                let group = at(1);
                // Reason/amount/quantity triples start at CAS02.
                let mut i = 2;
                while !at(i).is_empty() {
                    let value = amount(at(i + 1), index, segment, "CAS amount")?;
                    if line.adjustment_code.is_none() {
                        line.adjustment_code = Some(format!("{group}-{}", at(i)));
                    }
                    line.adjustment_amount += value;
                    i += 3;
                }
            }
            _ => {}
        }
    }

    if let Some(previous) = current_claim
        && lines_in_claim == 0
    {
        tracing::warn!(claim_id = %previous, "835 claim has no service lines, skipped");
    }

    if claims.is_empty() {
        return Err(IngestError::NoClaimPayments);
    }
    for claim in claims.iter().filter(|c| c.line_count > 0 && !c.lines_balance()) {
        tracing::warn!(
            claim_id = %claim.claim_id,
            claim_paid = claim.amount_paid,
            lines_paid = claim.lines_paid,
            "835 service lines do not add up to the claim payment"
        );
    }
    let claim_count = claims.len();

    let payer_name = header.payer_name.clone().unwrap_or_default();
    let payer_id = header
        .payer_id
        .clone()
        .map(|id| normalize(&id))
        .unwrap_or_else(|| normalize(&payer_name));
    let payment_date = header.payment_date.or(header.production_date);

    let payments = lines
        .into_iter()
        .map(|line| Payment {
            claim_id: line.claim_id,
            cpt_code: line.cpt_code,
            amount_billed: line.billed,
            amount_paid: line.paid,
            modifier: line.modifier,
            payer_id: payer_id.clone(),
            payer_name: payer_name.clone(),
            payment_date,
            adjustment_code: line.adjustment_code,
            adjustment_amount: line.adjustment_amount,
        })
        .collect::<Vec<_>>();

    tracing::info!(
        payer_id = %payer_id,
        claims = claim_count,
        lines = payments.len(),
        "parsed 835 remittance"
    );

    Ok(EraRemittance {
        payer_id,
        payer_name,
        payment_date,
        trace_number: header.trace_number,
        claim_count,
        claims,
        payments,
    })
}

fn amount(raw: &str, index: usize, segment: &str, element: &str) -> Result<f64, IngestError> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    parse_money(raw).ok_or_else(|| invalid(index, segment, &format!("{element} '{raw}' is not an amount")))
}

fn invalid(index: usize, segment: &str, message: &str) -> IngestError {
    IngestError::InvalidSegment {
        index,
        segment: segment.to_string(),
        message: message.to_string(),
    }
}
