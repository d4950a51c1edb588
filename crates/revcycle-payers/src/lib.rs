//! revcycle-payers
//!
//! Payer profiles. Pure data: appeal windows, timely-filing limits and the
//! address appeals are mailed to, plus the contract sanity checks every
//! payer shares.

pub mod error;
pub mod payers;
pub mod validation;

use jiff::ToSpan;
use jiff::civil::Date;
use revcycle_core::models::contract::Contract;
use revcycle_core::models::key::normalize;

use validation::{ContractIssue, IssueKind};

/// Trait implemented by each payer profile.
pub trait Payer: Send + Sync {
    /// Canonical identifier, upper-case (e.g. "MEDICARE", "UHC").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "UnitedHealthcare").
    fn name(&self) -> &str;

    /// Days after the payment date within which an appeal must be filed.
    fn appeal_window_days(&self) -> u32;

    /// Days after the date of service within which a claim must be filed.
    fn timely_filing_days(&self) -> u32;

    /// Where written appeals are sent.
    fn appeal_address(&self) -> &str;

    /// Last day to file an appeal for a payment made on `payment_date`.
    fn appeal_deadline(&self, payment_date: Date) -> Option<Date> {
        payment_date
            .checked_add(i64::from(self.appeal_window_days()).days())
            .ok()
    }

    /// Sanity-check a contract row against this payer.
    fn validate_contract(&self, contract: &Contract) -> Vec<ContractIssue> {
        let mut issues = Vec::new();
        let mut push = |kind: IssueKind, message: String| {
            issues.push(ContractIssue {
                payer_id: contract.payer_id.clone(),
                cpt_code: contract.cpt_code.clone(),
                kind,
                message,
            });
        };

        if !(contract.contracted_rate.is_finite() && contract.contracted_rate > 0.0) {
            push(
                IssueKind::NonPositiveRate,
                format!(
                    "{}: contracted rate {} for {} must be positive",
                    self.name(),
                    contract.contracted_rate,
                    contract.cpt_code,
                ),
            );
        }

        if let Some(expires) = contract.expiration_date
            && expires < contract.effective_date
        {
            push(
                IssueKind::ExpiresBeforeEffective,
                format!(
                    "{}: contract for {} expires {} before it takes effect {}",
                    self.name(),
                    contract.cpt_code,
                    expires,
                    contract.effective_date,
                ),
            );
        }

        if let Some(pos) = contract.place_of_service.as_deref()
            && !validation::is_place_of_service(pos)
        {
            push(
                IssueKind::InvalidPlaceOfService,
                format!(
                    "{}: place of service '{pos}' for {} is not a code between 01 and 99",
                    self.name(),
                    contract.cpt_code,
                ),
            );
        }

        if normalize(&contract.payer_id) != self.id() {
            push(
                IssueKind::PayerMismatch,
                format!(
                    "contract payer '{}' does not belong to {}",
                    contract.payer_id,
                    self.name(),
                ),
            );
        }

        issues
    }
}

/// Return all registered payers.
pub fn all_payers() -> Vec<Box<dyn Payer>> {
    vec![
        Box::new(payers::medicare::Medicare),
        Box::new(payers::medicaid::Medicaid),
        Box::new(payers::commercial::Aetna),
        Box::new(payers::commercial::UnitedHealthcare),
        Box::new(payers::commercial::BlueCrossBlueShield),
        Box::new(payers::commercial::Cigna),
        Box::new(payers::commercial::Humana),
    ]
}

/// Look up a payer by ID, ignoring case and surrounding whitespace.
pub fn get_payer(id: &str) -> Option<Box<dyn Payer>> {
    let wanted = normalize(id);
    all_payers().into_iter().find(|p| p.id() == wanted)
}

/// Look up a payer, falling back to a generic commercial profile.
pub fn payer_or_generic(id: &str) -> Box<dyn Payer> {
    get_payer(id).unwrap_or_else(|| Box::new(payers::generic::GenericPayer::new(id)))
}
