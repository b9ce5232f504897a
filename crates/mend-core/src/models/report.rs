use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// A patient's self-reported metrics for one day.
///
/// Required fields are plain values; optional ones are `Option` so that
/// "not reported" never collapses into a numeric default. Values are not
/// range-checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyReport {
    #[serde(rename = "steps_walked", alias = "steps")]
    pub steps: i64,
    pub pain_level: f64,
    #[serde(deserialize_with = "deserialize_yes_no")]
    pub medicine_taken: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl DailyReport {
    pub fn new(steps: i64, pain_level: f64, medicine_taken: bool) -> Self {
        Self {
            steps,
            pain_level,
            medicine_taken,
            sleep_hours: None,
            mood: None,
        }
    }

    pub fn with_sleep_hours(mut self, hours: f64) -> Self {
        self.sleep_hours = Some(hours);
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// The recognized mood, if any. Unrecognized or empty strings yield `None`.
    pub fn mood_signal(&self) -> Option<Mood> {
        self.mood.as_deref().and_then(Mood::parse)
    }
}

/// Recognized mood vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Mood {
    Sad,
    Tired,
    Angry,
    Neutral,
    Happy,
    Energetic,
}

impl Mood {
    /// Case-insensitive lookup. Surrounding whitespace is significant.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "sad" => Some(Mood::Sad),
            "tired" => Some(Mood::Tired),
            "angry" => Some(Mood::Angry),
            "neutral" => Some(Mood::Neutral),
            "happy" => Some(Mood::Happy),
            "energetic" => Some(Mood::Energetic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Sad => "sad",
            Mood::Tired => "tired",
            Mood::Angry => "angry",
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::Energetic => "energetic",
        }
    }
}

/// Accepts a JSON boolean or the form strings `Yes` / `No` (any case).
pub fn deserialize_yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YesNo {
        Bool(bool),
        Text(String),
    }

    match YesNo::deserialize(deserializer)? {
        YesNo::Bool(b) => Ok(b),
        YesNo::Text(s) => parse_yes_no(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("expected Yes/No or true/false, got '{s}'"))
        }),
    }
}

/// Parse the textual forms used by patient forms and spreadsheets.
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}
