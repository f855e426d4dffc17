//! Shared domain types for the PhishGuard client core.
//!
//! These are the "pure" models the business logic operates on. They are
//! independent of any specific storage format or transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of content submitted for analysis.
///
/// The serialized tags (`"url"` / `"email"`) match the scoring service's
/// wire format and are also what gets written to the history file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputType {
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "email")]
    EmailContent,
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // f.pad so callers' width specifiers apply.
        f.pad(match self {
            InputType::Url => "url",
            InputType::EmailContent => "email",
        })
    }
}

/// Risk classification derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Scores at or above this value are classified as medium risk.
pub const MEDIUM_RISK_THRESHOLD: u8 = 40;
/// Scores at or above this value are classified as high risk.
pub const HIGH_RISK_THRESHOLD: u8 = 70;

impl RiskLevel {
    /// Derives the risk level from a score using the fixed thresholds
    /// (low: 0-39, medium: 40-69, high: 70-100).
    ///
    /// This is the single authority for the score/level mapping. Producers
    /// of [`AnalysisRecord`] must use it rather than trusting a level
    /// reported by the scoring service.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        })
    }
}

/// The immutable result of one completed scoring request.
///
/// Records are never mutated in place, only replaced or removed. The
/// `risk_level` of a well-formed record always equals
/// `RiskLevel::from_score(score)`; [`AnalysisRecord::new`] enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// The kind of content that was analyzed.
    pub input_type: InputType,
    /// The raw text that was submitted. Truncation for display is a view
    /// concern, never applied to the stored data.
    pub input_text: String,
    /// Risk score between 0 and 100.
    pub score: u8,
    /// Risk level derived from the score.
    pub risk_level: RiskLevel,
    /// Free-text explanation from the scoring service.
    pub summary: String,
    /// Indicator descriptions in the order the scoring service emitted them.
    pub triggered_indicators: Vec<String>,
    /// Set once when the result was received, immutable thereafter.
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Builds a record from a scoring outcome, stamping `created_at` with
    /// the current time and deriving `risk_level` from the score.
    ///
    /// Scores above 100 are clamped to 100.
    pub fn new(
        input_type: InputType,
        input_text: impl Into<String>,
        score: u8,
        summary: impl Into<String>,
        triggered_indicators: Vec<String>,
    ) -> Self {
        let score = score.min(100);
        Self {
            input_type,
            input_text: input_text.into(),
            score,
            risk_level: RiskLevel::from_score(score),
            summary: summary.into(),
            triggered_indicators,
            created_at: Utc::now(),
        }
    }
}

/// Success payload returned by the scoring service.
///
/// The reported `risk_level` string is informational only; the session
/// recomputes the level from the score when building a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub risk_level: String,
    pub analysis_summary: String,
    #[serde(default)]
    pub triggered_rules: Vec<String>,
}

/// The ephemeral state of an analysis session. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No analysis in progress and no result held.
    #[default]
    Idle,
    /// A request to the scoring service is in flight.
    Submitting,
    /// The last submission completed; the record is held for display.
    Succeeded(AnalysisRecord),
    /// The last submission was rejected or failed.
    Failed(String),
}

impl SessionState {
    /// Returns true while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SessionState::Submitting)
    }

    /// Returns the held record, if the session is in the succeeded state.
    pub fn record(&self) -> Option<&AnalysisRecord> {
        match self {
            SessionState::Succeeded(record) => Some(record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(85), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    }

    #[test]
    fn test_input_type_wire_tags() {
        assert_eq!(serde_json::to_string(&InputType::Url).unwrap(), "\"url\"");
        assert_eq!(
            serde_json::to_string(&InputType::EmailContent).unwrap(),
            "\"email\""
        );

        let parsed: InputType = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(parsed, InputType::EmailContent);
    }

    #[test]
    fn test_display_honors_width_specifiers() {
        // The history listing right-aligns these into fixed-width columns.
        assert_eq!(format!("{:>6}", RiskLevel::Low), "   low");
        assert_eq!(format!("{:>6}", RiskLevel::Medium), "medium");
        assert_eq!(format!("{:5}", InputType::Url), "url  ");
        assert_eq!(format!("{:5}", InputType::EmailContent), "email");
    }

    #[test]
    fn test_record_derives_level_from_score() {
        let record = AnalysisRecord::new(
            InputType::Url,
            "https://example.com",
            85,
            "Suspicious",
            vec![],
        );
        assert_eq!(record.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_record_clamps_score() {
        let record =
            AnalysisRecord::new(InputType::EmailContent, "hello", 130, "Odd", vec![]);
        assert_eq!(record.score, 100);
        assert_eq!(record.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_record_round_trip() {
        let record = AnalysisRecord::new(
            InputType::EmailContent,
            "Verify your account now",
            62,
            "Urgency language detected",
            vec!["urgency keyword".to_string(), "generic greeting".to_string()],
        );

        let json = serde_json::to_string(&record).unwrap();
        let parsed: AnalysisRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }

    #[test]
    fn test_score_response_defaults_missing_rules() {
        let json = r#"{"score": 10, "risk_level": "low", "analysis_summary": "ok"}"#;
        let parsed: ScoreResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.triggered_rules.is_empty());
    }

    #[test]
    fn test_session_state_record_accessor() {
        let record =
            AnalysisRecord::new(InputType::Url, "https://a.b/c", 5, "Clean", vec![]);
        let state = SessionState::Succeeded(record.clone());

        assert_eq!(state.record(), Some(&record));
        assert_eq!(SessionState::Idle.record(), None);
        assert!(!state.is_submitting());
        assert!(SessionState::Submitting.is_submitting());
    }
}
