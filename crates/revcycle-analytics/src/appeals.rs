use std::collections::HashMap;

use jiff::civil::Date;
use revcycle_core::models::appeal::{AppealLetter, AppealLine};
use revcycle_core::models::key::normalize;
use revcycle_core::models::provider::ProviderInfo;
use revcycle_core::models::risk::RiskLevel;
use revcycle_core::models::variance::VarianceRecord;
use revcycle_export::render::{
    AppealContext, AppealLineView, format_money, format_percent, render_appeal,
};
use revcycle_payers::payer_or_generic;
use uuid::Uuid;

use crate::engine::AnalyticsEngine;
use crate::error::AnalyticsError;

impl AnalyticsEngine {
    /// One appeal letter per `(claim_id, payer_id)` that has underpaid
    /// lines, most severe first.
    pub fn generate_appeals(
        &self,
        provider: &ProviderInfo,
        letter_date: Date,
    ) -> Result<Vec<AppealLetter>, AnalyticsError> {
        let records = self.analyze_variances().records;

        // Group in first-seen order so letters are stable across calls.
        let mut order: Vec<(String, String)> = Vec::new();
        let mut groups: HashMap<(String, String), Vec<&VarianceRecord>> = HashMap::new();
        for record in records.iter().filter(|r| r.underpaid) {
            let key = (normalize(&record.claim_id), normalize(&record.payer_id));
            let group = groups.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                Vec::new()
            });
            group.push(record);
        }

        let mut letters = order
            .iter()
            .filter_map(|key| groups.get(key))
            .map(|lines| self.build_letter(lines, provider, letter_date))
            .collect::<Result<Vec<_>, _>>()?;

        letters.sort_by(|a, b| {
            b.risk_level
                .cmp(&a.risk_level)
                .then(b.total_underpayment.total_cmp(&a.total_underpayment))
        });

        tracing::info!(letters = letters.len(), "appeal letters generated");
        Ok(letters)
    }

    /// The appeal letter for one claim, if any of its lines are underpaid.
    pub fn appeal_for_claim(
        &self,
        claim_id: &str,
        provider: &ProviderInfo,
        letter_date: Date,
    ) -> Result<Option<AppealLetter>, AnalyticsError> {
        let wanted = normalize(claim_id);
        let letter = self
            .generate_appeals(provider, letter_date)?
            .into_iter()
            .find(|l| normalize(&l.claim_id) == wanted);
        Ok(letter)
    }

    fn build_letter(
        &self,
        records: &[&VarianceRecord],
        provider: &ProviderInfo,
        letter_date: Date,
    ) -> Result<AppealLetter, AnalyticsError> {
        // Groups are never empty: a key is only created alongside its first record.
        let first = records[0];
        let payer = payer_or_generic(&first.payer_id);
        let payer_name = if first.payer_name.is_empty() {
            payer.name().to_string()
        } else {
            first.payer_name.clone()
        };

        let appeal_deadline = records
            .iter()
            .filter_map(|r| r.payment_date)
            .max()
            .and_then(|paid| payer.appeal_deadline(paid));

        let lines: Vec<AppealLine> = records
            .iter()
            .map(|r| AppealLine {
                cpt_code: r.cpt_code.clone(),
                date_of_service: r.date_of_service,
                contracted_rate: r.contracted_rate,
                amount_paid: r.amount_paid,
                underpayment: r.recoverable(),
                variance_percent: r.variance_percent,
                adjustment_code: r.adjustment_code.clone(),
            })
            .collect();

        let total_contracted: f64 = lines.iter().map(|l| l.contracted_rate).sum();
        let total_paid: f64 = lines.iter().map(|l| l.amount_paid).sum();
        let total_underpayment: f64 = lines.iter().map(|l| l.underpayment).sum();
        let risk_level = records
            .iter()
            .map(|r| r.risk_level)
            .max()
            .unwrap_or(RiskLevel::Low);

        let context = AppealContext {
            letter_date: letter_date.to_string(),
            claim_id: first.claim_id.clone(),
            payer_id: normalize(&first.payer_id),
            payer_name: payer_name.clone(),
            payer_address: payer.appeal_address().to_string(),
            provider: provider.clone(),
            lines: lines
                .iter()
                .map(|l| AppealLineView {
                    cpt_code: l.cpt_code.clone(),
                    date_of_service: l.date_of_service.map(|d| d.to_string()),
                    contracted_rate: format_money(l.contracted_rate),
                    amount_paid: format_money(l.amount_paid),
                    underpayment: format_money(l.underpayment),
                    variance_percent: format_percent(l.variance_percent),
                    adjustment_code: l.adjustment_code.clone(),
                })
                .collect(),
            total_contracted: format_money(total_contracted),
            total_paid: format_money(total_paid),
            total_underpayment: format_money(total_underpayment),
            risk_level: risk_level.to_string(),
            appeal_deadline: appeal_deadline.map(|d| d.to_string()),
        };
        let body = render_appeal(self.appeal_template(), &context)?;

        Ok(AppealLetter {
            id: Uuid::new_v4(),
            claim_id: first.claim_id.clone(),
            payer_id: context.payer_id,
            payer_name,
            lines,
            total_contracted,
            total_paid,
            total_underpayment,
            risk_level,
            appeal_deadline,
            body,
            created_at: jiff::Timestamp::now(),
        })
    }
}
