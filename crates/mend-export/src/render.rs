use serde::Serialize;
use tera::{Context, Tera};

use mend_core::models::assessment::RiskEvaluation;
use mend_core::models::record::ReviewEntry;

use crate::error::ExportError;
use crate::styles::DashboardStyles;

/// Template names ending in `.html` get Tera's HTML autoescaping.
pub const DASHBOARD_TEMPLATE_NAME: &str = "dashboard.html";

pub const DASHBOARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
</head>
<body>
<h1>{{ title }}</h1>
<h2>Patient Status Overview</h2>
{% if cards | length == 0 %}<p>No patient data found.</p>
{% endif %}{% for card in cards %}<div class="card" id="{{ card.id }}" style="background-color: {{ card.color }}; padding: {{ styles.padding_px }}px; border-radius: {{ styles.radius_px }}px; margin-bottom: 10px;">
  <h4>{{ card.name }} &mdash; <b>{{ card.level }} Risk ({{ card.score }})</b></h4>
  <p><b>Pain:</b> {{ card.pain }} | <b>Steps:</b> {{ card.steps }} | <b>Medicine:</b> {{ card.medicine }}</p>
  <p><b>Recommendation:</b> {{ card.recommendation }}</p>
  <p><b>Patient Notes:</b> {{ card.notes }}</p>
  <p><b>Doctor Notes / Prescription:</b> {{ card.doctor_notes }}</p>
  <p><small>Submitted {{ card.submitted_at }}</small></p>
</div>
{% endfor %}</body>
</html>
"#;

/// Flattened, display-ready view of one review entry.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub level: String,
    pub score: String,
    pub color: String,
    pub pain: String,
    pub steps: i64,
    pub medicine: &'static str,
    pub recommendation: String,
    pub notes: String,
    pub doctor_notes: String,
    pub submitted_at: String,
}

impl Card {
    pub fn from_entry(entry: &ReviewEntry, styles: &DashboardStyles) -> Self {
        let record = &entry.record;
        let eval = &entry.evaluation;
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            level: eval.risk_level.to_string(),
            score: score_label(eval),
            color: styles.color_for(eval.risk_level).to_string(),
            pain: record.report.pain_level.to_string(),
            steps: record.report.steps,
            medicine: yes_no(record.report.medicine_taken),
            recommendation: eval.recommendation.clone(),
            notes: record.notes.clone().unwrap_or_default(),
            doctor_notes: record.doctor_notes.clone(),
            submitted_at: record.submitted_at.strftime("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Two decimals, or `undefined` when the score is not a number.
pub(crate) fn score_label(eval: &RiskEvaluation) -> String {
    if eval.has_finite_score() {
        format!("{:.2}", eval.risk_score)
    } else {
        "undefined".to_string()
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[derive(Serialize)]
struct DashboardView<'a> {
    title: &'a str,
    styles: &'a DashboardStyles,
    cards: Vec<Card>,
}

/// Render the built-in HTML dashboard.
pub fn render_dashboard(
    title: &str,
    entries: &[ReviewEntry],
    styles: &DashboardStyles,
) -> Result<String, ExportError> {
    render_template(
        DASHBOARD_TEMPLATE_NAME,
        DASHBOARD_TEMPLATE,
        title,
        entries,
        styles,
    )
}

/// Render entries through a caller-supplied Tera template.
///
/// The context exposes `title`, `styles` and `cards` (see [`Card`]).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    title: &str,
    entries: &[ReviewEntry],
    styles: &DashboardStyles,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let view = DashboardView {
        title,
        styles,
        cards: entries.iter().map(|e| Card::from_entry(e, styles)).collect(),
    };
    let value = serde_json::to_value(&view)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
