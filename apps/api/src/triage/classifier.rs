// Rule-based severity and category classification.
//
// Pure keyword heuristics: lowercase the message, check substring presence
// tier by tier, first hit wins. No scoring, no negation handling. Matching
// is substring-based, so "fainted" triggers "faint" (wanted) and "begun"
// triggers "gun" (accepted noise for this rule set).

use crate::triage::models::{Category, Severity};

// ────────────────────────────────────────────────────────────────────────────
// Keyword tiers
// ────────────────────────────────────────────────────────────────────────────

/// Terms that mark a report high-urgency regardless of anything else in it.
const HIGH_URGENCY_TERMS: &[&str] = &["fire", "flood", "accident", "critical", "injury"];

/// Terms that mark a report medium-urgency when no high-urgency term hit.
const MEDIUM_URGENCY_TERMS: &[&str] = &["minor", "moderate", "small"];

/// Category keyword groups, checked in priority order: medical distress
/// beats hazmat beats weapons when a message matches more than one group.
const MEDICAL_TERMS: &[&str] = &["faint", "collapsed", "not breathing"];
const HAZMAT_TERMS: &[&str] = &["chemical", "spill"];
const WEAPON_TERMS: &[&str] = &["shoot", "gun"];

fn contains_any(message: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| message.contains(term))
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Assigns a triage urgency to raw report text.
///
/// Total over all inputs: empty or unrecognized messages come out `Low`.
/// The Low default is established triage behavior; do not change it
/// without product sign-off.
pub fn classify_severity(message: &str) -> Severity {
    let message = message.to_lowercase();

    if contains_any(&message, HIGH_URGENCY_TERMS) {
        Severity::High
    } else if contains_any(&message, MEDIUM_URGENCY_TERMS) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Assigns an incident category to raw report text.
///
/// Anything that matches no keyword group is a General Incident and takes
/// the playbook fallback path.
pub fn classify_category(message: &str) -> Category {
    let message = message.to_lowercase();

    if contains_any(&message, MEDICAL_TERMS) {
        Category::MedicalEmergency
    } else if contains_any(&message, HAZMAT_TERMS) {
        Category::Hazmat
    } else if contains_any(&message, WEAPON_TERMS) {
        Category::ActiveShooter
    } else {
        Category::GeneralIncident
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
