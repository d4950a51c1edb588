use revcycle_core::models::key::normalize;
use revcycle_core::models::pricing::{PayerRate, PriceTransparency};

use crate::engine::AnalyticsEngine;

impl AnalyticsEngine {
    /// Contracted rates for `cpt_code` across all payers. `None` when no
    /// contract covers the code.
    ///
    /// Every loaded contract counts, including expired ones, so the panel
    /// shows the full rate history.
    pub fn price_transparency(&self, cpt_code: &str) -> Option<PriceTransparency> {
        let wanted = normalize(cpt_code);
        let mut payer_rates: Vec<PayerRate> = self
            .contracts()
            .iter()
            .filter(|c| normalize(&c.cpt_code) == wanted)
            .map(|c| PayerRate {
                payer_id: normalize(&c.payer_id),
                payer_name: c.payer_name.clone(),
                contracted_rate: c.contracted_rate,
            })
            .collect();
        if payer_rates.is_empty() {
            return None;
        }
        payer_rates.sort_by(|a, b| {
            a.contracted_rate
                .total_cmp(&b.contracted_rate)
                .then_with(|| a.payer_id.cmp(&b.payer_id))
        });

        let rates: Vec<f64> = payer_rates.iter().map(|r| r.contracted_rate).collect();
        let n = rates.len();
        let median_rate = if n % 2 == 1 {
            rates[n / 2]
        } else {
            (rates[n / 2 - 1] + rates[n / 2]) / 2.0
        };

        Some(PriceTransparency {
            cpt_code: wanted,
            min_rate: rates[0],
            max_rate: rates[n - 1],
            mean_rate: rates.iter().sum::<f64>() / n as f64,
            median_rate,
            payer_rates,
        })
    }
}
