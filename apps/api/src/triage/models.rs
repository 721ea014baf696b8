// Core triage types shared across the classifier, playbook, pipeline and
// HTTP handlers.

use serde::{Deserialize, Serialize};

/// A raw incident report as submitted by a caller.
///
/// Free text on purpose: people reporting an emergency cannot be asked to
/// fill in structured fields. Everything else the service knows about an
/// incident is derived from this one string.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentReport {
    pub message: String,
}

/// Triage urgency assigned to a report.
///
/// Serialized by variant name ("High" / "Medium" / "Low") in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Incident category used to select an SOP playbook.
///
/// Internal only: it shapes the guidance prompt and playbook lookup but is
/// never serialized into API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    MedicalEmergency,
    Hazmat,
    ActiveShooter,
    GeneralIncident,
}

impl Category {
    /// Human-readable label used in prompts and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Category::MedicalEmergency => "Medical Emergency",
            Category::Hazmat => "Hazmat",
            Category::ActiveShooter => "Active Shooter",
            Category::GeneralIncident => "General Incident",
        }
    }
}

/// The processed result of one incident report.
///
/// Immutable once built: the log appends records and snapshots them, it
/// never edits or removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub severity: Severity,
    pub responder_summary: String,
    pub citizen_guidance: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_as_variant_name() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"High\"", "severity should serialize as its variant name");
    }

    #[test]
    fn test_incident_report_deserializes_from_message_field() {
        let report: IncidentReport =
            serde_json::from_str(r#"{"message": "smoke on the third floor"}"#).unwrap();
        assert_eq!(report.message, "smoke on the third floor");
    }

    #[test]
    fn test_incident_report_rejects_missing_message() {
        let result = serde_json::from_str::<IncidentReport>(r#"{"text": "wrong field"}"#);
        assert!(result.is_err(), "a body without `message` must not deserialize");
    }

    #[test]
    fn test_incident_record_round_trips_through_json() {
        let record = IncidentRecord {
            severity: Severity::Medium,
            responder_summary: "Minor fender bender, no injuries.".to_string(),
            citizen_guidance: "1. Move to the shoulder.".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: IncidentRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.severity, Severity::Medium);
        assert_eq!(back.responder_summary, record.responder_summary);
        assert_eq!(back.citizen_guidance, record.citizen_guidance);
    }

    #[test]
    fn test_category_labels_match_published_names() {
        assert_eq!(Category::MedicalEmergency.label(), "Medical Emergency");
        assert_eq!(Category::Hazmat.label(), "Hazmat");
        assert_eq!(Category::ActiveShooter.label(), "Active Shooter");
        assert_eq!(Category::GeneralIncident.label(), "General Incident");
    }
}
