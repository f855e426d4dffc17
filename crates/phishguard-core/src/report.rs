//! Export of a completed analysis as a downloadable document.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use phishguard_types::{AnalysisRecord, InputType, RiskLevel};
use serde::Serialize;

/// The self-describing snapshot written to an exported report.
///
/// Field order is the report's on-disk layout and is kept stable.
#[derive(Debug, Serialize)]
struct Report<'a> {
    timestamp: DateTime<Utc>,
    input_type: InputType,
    input: &'a str,
    risk_level: RiskLevel,
    risk_score: u8,
    triggered_rules: &'a [String],
    analysis_summary: &'a str,
}

impl<'a> From<&'a AnalysisRecord> for Report<'a> {
    fn from(record: &'a AnalysisRecord) -> Self {
        Self {
            timestamp: record.created_at,
            input_type: record.input_type,
            input: &record.input_text,
            risk_level: record.risk_level,
            risk_score: record.score,
            triggered_rules: &record.triggered_indicators,
            analysis_summary: &record.summary,
        }
    }
}

/// Renders one record as a pretty-printed JSON report.
///
/// Pure function of the record: identical records yield identical output.
/// No history or session state is consulted.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export(record: &AnalysisRecord) -> Result<String> {
    serde_json::to_string_pretty(&Report::from(record))
        .context("Failed to serialize analysis report")
}

/// Suggested file name for an exported report, derived from the record's
/// own timestamp so the name is as reproducible as the content.
pub fn file_name(record: &AnalysisRecord) -> String {
    format!(
        "phishguard_report_{}.json",
        record.created_at.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AnalysisRecord {
        AnalysisRecord::new(
            InputType::Url,
            "https://secure-login.example.com",
            72,
            "Domain mimics a known brand",
            vec!["brand lookalike".to_string(), "urgency keyword".to_string()],
        )
    }

    #[test]
    fn test_export_is_deterministic() {
        let record = sample_record();
        assert_eq!(export(&record).unwrap(), export(&record).unwrap());
    }

    #[test]
    fn test_export_contains_every_field() {
        let record = sample_record();
        let document = export(&record).unwrap();

        let value: serde_json::Value = serde_json::from_str(&document).unwrap();
        assert_eq!(value["input_type"], "url");
        assert_eq!(value["input"], "https://secure-login.example.com");
        assert_eq!(value["risk_score"], 72);
        assert_eq!(value["risk_level"], "high");
        assert_eq!(value["analysis_summary"], "Domain mimics a known brand");
        assert_eq!(
            value["triggered_rules"],
            serde_json::json!(["brand lookalike", "urgency keyword"])
        );
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_file_name_uses_record_date() {
        let record = sample_record();
        let expected = format!(
            "phishguard_report_{}.json",
            record.created_at.format("%Y-%m-%d")
        );
        assert_eq!(file_name(&record), expected);
    }
}
