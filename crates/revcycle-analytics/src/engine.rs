use std::collections::{HashMap, HashSet};

use jiff::civil::Date;
use revcycle_core::models::claim::{Claim, line_key};
use revcycle_core::models::contract::Contract;
use revcycle_core::models::key::RecordKey;
use revcycle_core::models::payment::Payment;
use revcycle_core::models::risk::RiskLevel;
use revcycle_core::models::variance::{VarianceAnalysis, VarianceRecord};
use revcycle_core::settings::AnalysisSettings;
use revcycle_export::render::DEFAULT_APPEAL_TEMPLATE;
use revcycle_payers::payer_or_generic;
use revcycle_payers::validation::ContractIssue;

use crate::error::AnalyticsError;

/// In-memory reconciliation over the three uploaded record lists.
///
/// Each `load_*` call replaces its list wholesale. Analysis methods only
/// read the lists, so results are always derived from the latest upload.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    settings: AnalysisSettings,
    contracts: Vec<Contract>,
    payments: Vec<Payment>,
    claims: Vec<Claim>,
    /// Contract positions per join key, in load order.
    contract_index: HashMap<RecordKey, Vec<usize>>,
    appeal_template: String,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            settings: AnalysisSettings::default(),
            contracts: Vec::new(),
            payments: Vec::new(),
            claims: Vec::new(),
            contract_index: HashMap::new(),
            appeal_template: DEFAULT_APPEAL_TEMPLATE.to_string(),
        }
    }
}

impl AnalyticsEngine {
    pub fn new(settings: AnalysisSettings) -> Result<Self, AnalyticsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::default()
        })
    }

    /// Convenience constructor for tests and the demo dataset.
    pub fn with_data(
        settings: AnalysisSettings,
        contracts: Vec<Contract>,
        payments: Vec<Payment>,
        claims: Vec<Claim>,
    ) -> Result<Self, AnalyticsError> {
        let mut engine = Self::new(settings)?;
        engine.load_contracts(contracts);
        engine.load_payments(payments);
        engine.load_claims(claims);
        Ok(engine)
    }

    /// Replace the Tera template used by [`Self::generate_appeals`].
    pub fn with_appeal_template(mut self, template: impl Into<String>) -> Self {
        self.appeal_template = template.into();
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: AnalysisSettings) -> Result<(), AnalyticsError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn appeal_template(&self) -> &str {
        &self.appeal_template
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn load_contracts(&mut self, contracts: Vec<Contract>) {
        let mut index: HashMap<RecordKey, Vec<usize>> = HashMap::new();
        for (i, contract) in contracts.iter().enumerate() {
            index.entry(contract.key()).or_default().push(i);
        }
        tracing::info!(
            contracts = contracts.len(),
            keys = index.len(),
            "contracts loaded"
        );
        self.contracts = contracts;
        self.contract_index = index;
    }

    pub fn load_payments(&mut self, payments: Vec<Payment>) {
        tracing::info!(payments = payments.len(), "payments loaded");
        self.payments = payments;
    }

    pub fn load_claims(&mut self, claims: Vec<Claim>) {
        tracing::info!(claims = claims.len(), "claims loaded");
        self.claims = claims;
    }

    /// Drop all three lists. Settings and template are kept.
    pub fn clear(&mut self) {
        self.contracts.clear();
        self.payments.clear();
        self.claims.clear();
        self.contract_index.clear();
    }

    /// Contract for `(payer_id, cpt_code)`.
    ///
    /// With several contracts on one key, the one effective on `on_date`
    /// wins; otherwise (or without a date) the latest effective date wins,
    /// and load order breaks ties.
    pub fn find_contract(&self, payer_id: &str, cpt_code: &str, on_date: Option<Date>) -> Option<&Contract> {
        let positions = self.contract_index.get(&RecordKey::new(payer_id, cpt_code))?;
        let candidates = positions.iter().map(|&i| &self.contracts[i]);

        if let Some(date) = on_date
            && let Some(effective) = candidates
                .clone()
                .rev()
                .filter(|c| c.is_effective_on(date))
                .max_by_key(|c| c.effective_date)
        {
            return Some(effective);
        }

        // `max_by_key` keeps the last maximum, hence the `rev` in both
        // lookups: the earliest loaded contract wins a tie.
        candidates.rev().max_by_key(|c| c.effective_date)
    }

    pub fn risk_level(&self, variance_percent: f64) -> RiskLevel {
        self.settings.risk.classify(variance_percent)
    }

    pub fn is_underpaid(&self, variance_percent: f64) -> bool {
        variance_percent < -self.settings.underpayment_threshold_pct
    }

    /// Join every payment to its contract and claim.
    pub fn analyze_variances(&self) -> VarianceAnalysis {
        let claims_by_line: HashMap<(String, String), &Claim> = self
            .claims
            .iter()
            .map(|c| (c.line_key(), c))
            .collect();

        let mut analysis = VarianceAnalysis::default();
        let mut paid_lines: HashSet<(String, String)> = HashSet::new();

        for payment in &self.payments {
            let key = line_key(&payment.claim_id, &payment.cpt_code);
            let claim = claims_by_line.get(&key).copied();
            paid_lines.insert(key);

            let on_date = claim.map(|c| c.date_of_service).or(payment.payment_date);
            match self.find_contract(&payment.payer_id, &payment.cpt_code, on_date) {
                Some(contract) => analysis.records.push(self.variance(payment, contract, claim)),
                None => analysis.unmatched_payments.push(payment.clone()),
            }
        }

        analysis.unpaid_claims = self
            .claims
            .iter()
            .filter(|c| !paid_lines.contains(&c.line_key()))
            .cloned()
            .collect();

        tracing::debug!(
            matched = analysis.records.len(),
            unmatched = analysis.unmatched_payments.len(),
            unpaid = analysis.unpaid_claims.len(),
            "variance analysis complete"
        );
        analysis
    }

    /// Underpaid records, most severe first, then by size of the shortfall.
    pub fn underpayments(&self) -> Vec<VarianceRecord> {
        let mut records: Vec<VarianceRecord> = self
            .analyze_variances()
            .records
            .into_iter()
            .filter(|r| r.underpaid)
            .collect();
        records.sort_by(|a, b| {
            b.risk_level
                .cmp(&a.risk_level)
                .then(a.variance.total_cmp(&b.variance))
        });
        records
    }

    /// Check every contract against its payer profile.
    pub fn validate_contracts(&self) -> Vec<ContractIssue> {
        self.contracts
            .iter()
            .flat_map(|c| payer_or_generic(&c.payer_id).validate_contract(c))
            .collect()
    }

    fn variance(&self, payment: &Payment, contract: &Contract, claim: Option<&Claim>) -> VarianceRecord {
        let variance = payment.amount_paid - contract.contracted_rate;
        let variance_percent = if contract.contracted_rate == 0.0 {
            0.0
        } else {
            variance / contract.contracted_rate * 100.0
        };

        VarianceRecord {
            claim_id: payment.claim_id.clone(),
            payer_id: payment.payer_id.clone(),
            payer_name: if payment.payer_name.is_empty() {
                contract.payer_name.clone()
            } else {
                payment.payer_name.clone()
            },
            cpt_code: payment.cpt_code.clone(),
            date_of_service: claim.map(|c| c.date_of_service),
            payment_date: payment.payment_date,
            amount_billed: payment.amount_billed,
            contracted_rate: contract.contracted_rate,
            amount_paid: payment.amount_paid,
            variance,
            variance_percent,
            underpaid: self.is_underpaid(variance_percent),
            risk_level: self.risk_level(variance_percent),
            adjustment_code: payment.adjustment_code.clone(),
        }
    }
}
