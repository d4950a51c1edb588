use revcycle_core::models::provider::ProviderInfo;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Built-in appeal letter. Uses the Markdown subset understood by
/// [`crate::docx::generate_docx`].
pub const DEFAULT_APPEAL_TEMPLATE: &str = r#"# Request for Payment Reconsideration

{{ letter_date }}

{{ payer_name }}
{{ payer_address }}

**Re:** Claim {{ claim_id }}, payer ID {{ payer_id }}
**Provider:** {{ provider.name }}{% if provider.npi %} (NPI {{ provider.npi }}){% endif %}{% if provider.tin %}, TIN {{ provider.tin }}{% endif %}

To whom it may concern:

We are writing to request reconsideration of the reimbursement for claim {{ claim_id }}. The following service lines were paid below the rates in our agreement with {{ payer_name }}:

{% for line in lines -%}
- CPT {{ line.cpt_code }}{% if line.date_of_service %} (DOS {{ line.date_of_service }}){% endif %}: contracted {{ line.contracted_rate }}, paid {{ line.amount_paid }}, underpaid {{ line.underpayment }} ({{ line.variance_percent }}){% if line.adjustment_code %}, adjustment {{ line.adjustment_code }}{% endif %}
{% endfor %}
**Total underpayment:** {{ total_underpayment }}

Please reprocess the claim at the contracted rates and remit the balance of {{ total_underpayment }}.{% if appeal_deadline %} This appeal is submitted within the filing window ending {{ appeal_deadline }}.{% endif %}

Sincerely,

{{ provider.contact_name }}
{{ provider.name }}{% if provider.address %}
{{ provider.address }}{% endif %}{% if provider.contact_phone %}
{{ provider.contact_phone }}{% endif %}
"#;

/// Everything an appeal template can reference. Amounts are pre-formatted
/// so templates never deal with float rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AppealContext {
    pub letter_date: String,
    pub claim_id: String,
    pub payer_id: String,
    pub payer_name: String,
    pub payer_address: String,
    pub provider: ProviderInfo,
    pub lines: Vec<AppealLineView>,
    pub total_contracted: String,
    pub total_paid: String,
    pub total_underpayment: String,
    pub risk_level: String,
    pub appeal_deadline: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppealLineView {
    pub cpt_code: String,
    pub date_of_service: Option<String>,
    pub contracted_rate: String,
    pub amount_paid: String,
    pub underpayment: String,
    pub variance_percent: String,
    pub adjustment_code: Option<String>,
}

/// Render an appeal letter.
///
/// `template_content` is Tera (Jinja2) syntax; pass
/// [`DEFAULT_APPEAL_TEMPLATE`] unless a custom one is configured.
pub fn render_appeal(template_content: &str, context: &AppealContext) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("appeal", template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("appeal", &context)?;
    Ok(rendered)
}

/// `$1,234.50`. Negative amounts keep their sign in front of the symbol.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// `-12.3%`, one decimal place.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}
