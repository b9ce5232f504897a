use tabled::settings::Style;
use tabled::{Table, Tabled};

use mend_core::models::record::ReviewEntry;

use crate::render::{score_label, yes_no};

#[derive(Tabled)]
struct ReviewRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Risk")]
    risk: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Pain")]
    pain: String,
    #[tabled(rename = "Steps")]
    steps: i64,
    #[tabled(rename = "Medicine")]
    medicine: &'static str,
    #[tabled(rename = "Recommendation")]
    recommendation: String,
}

impl ReviewRow {
    fn from_entry(entry: &ReviewEntry) -> Self {
        let eval = &entry.evaluation;
        Self {
            name: entry.record.name.clone(),
            risk: eval.risk_level.to_string(),
            score: score_label(eval),
            pain: entry.record.report.pain_level.to_string(),
            steps: entry.record.report.steps,
            medicine: yes_no(entry.record.report.medicine_taken),
            recommendation: eval.recommendation.clone(),
        }
    }
}

/// Plain-text table for terminals, one row per entry in the given order.
pub fn render_table(entries: &[ReviewEntry]) -> String {
    if entries.is_empty() {
        return "No patient data found.\n".to_string();
    }

    let mut table = Table::new(entries.iter().map(ReviewRow::from_entry));
    table.with(Style::psql());
    format!("{table}\n")
}
