use std::collections::HashMap;

use revcycle_core::models::claim::ClaimStatus;
use revcycle_core::models::key::normalize;
use revcycle_core::models::risk::RiskLevel;
use revcycle_core::models::summary::{AnalyticsSummary, PayerSummary, RiskCount, StatusCount};
use revcycle_core::models::variance::VarianceRecord;

use crate::engine::AnalyticsEngine;

impl AnalyticsEngine {
    /// Dashboard overview: totals, distributions and the payer breakdown.
    pub fn summary(&self) -> AnalyticsSummary {
        let analysis = self.analyze_variances();
        let records = &analysis.records;

        let risk_distribution = RiskLevel::ALL
            .iter()
            .map(|&level| {
                let at_level = records.iter().filter(|r| r.risk_level == level);
                RiskCount {
                    risk_level: level,
                    count: at_level.clone().count(),
                    amount: at_level.map(VarianceRecord::recoverable).sum(),
                }
            })
            .collect();

        let status_distribution = ClaimStatus::ALL
            .iter()
            .filter_map(|&status| {
                let with_status: Vec<_> = self.claims().iter().filter(|c| c.status == status).collect();
                (!with_status.is_empty()).then(|| StatusCount {
                    status,
                    count: with_status.len(),
                    amount_billed: with_status.iter().map(|c| c.amount_billed).sum(),
                })
            })
            .collect();

        AnalyticsSummary {
            total_contracts: self.contracts().len(),
            total_payments: self.payments().len(),
            total_claims: self.claims().len(),
            matched_payments: records.len(),
            unmatched_payments: analysis.unmatched_payments.len(),
            unpaid_claims: analysis.unpaid_claims.len(),
            total_billed: records.iter().map(|r| r.amount_billed).sum(),
            total_paid: records.iter().map(|r| r.amount_paid).sum(),
            total_expected: records.iter().map(|r| r.contracted_rate).sum(),
            total_variance: records.iter().map(|r| r.variance).sum(),
            unmatched_billed: analysis.unmatched_payments.iter().map(|p| p.amount_billed).sum(),
            unmatched_paid: analysis.unmatched_payments.iter().map(|p| p.amount_paid).sum(),
            underpaid_count: records.iter().filter(|r| r.underpaid).count(),
            recoverable_amount: records.iter().map(VarianceRecord::recoverable).sum(),
            risk_distribution,
            status_distribution,
            payers: payer_breakdown(records),
        }
    }

    /// One payer's slice of [`Self::summary`]. `None` when the payer has no
    /// matched payments.
    pub fn payer_summary(&self, payer_id: &str) -> Option<PayerSummary> {
        let wanted = normalize(payer_id);
        payer_breakdown(&self.analyze_variances().records)
            .into_iter()
            .find(|p| p.payer_id == wanted)
    }
}

/// Group records per payer, largest recoverable amount first.
fn payer_breakdown(records: &[VarianceRecord]) -> Vec<PayerSummary> {
    let mut by_payer: HashMap<String, PayerSummary> = HashMap::new();

    for record in records {
        let id = normalize(&record.payer_id);
        let entry = by_payer.entry(id.clone()).or_insert_with(|| PayerSummary {
            payer_id: id,
            payer_name: record.payer_name.clone(),
            ..PayerSummary::default()
        });
        entry.payment_count += 1;
        entry.total_paid += record.amount_paid;
        entry.total_expected += record.contracted_rate;
        entry.total_variance += record.variance;
        if record.underpaid {
            entry.underpaid_count += 1;
            entry.recoverable_amount += record.recoverable();
        }
    }

    let mut payers: Vec<PayerSummary> = by_payer
        .into_values()
        .map(|mut p| {
            p.underpayment_rate = p.underpaid_count as f64 / p.payment_count as f64 * 100.0;
            p
        })
        .collect();
    payers.sort_by(|a, b| {
        b.recoverable_amount
            .total_cmp(&a.recoverable_amount)
            .then_with(|| a.payer_id.cmp(&b.payer_id))
    });
    payers
}
