// Prompt templates for the triage pipeline.
//
// The guidance prompt grounds the model in the curated SOP: the model may
// rephrase and format the supplied steps, never add to them. That
// constraint living in the prompt text is what keeps backend output
// auditable against the playbook.

use crate::triage::models::Category;

/// Citizen-guidance prompt. Placeholders: `{narrative}`, `{category}`,
/// `{steps}` (pre-numbered, one per line).
pub const CITIZEN_GUIDANCE_PROMPT: &str = r#"You are a public-safety assistant helping a caller during an emergency.

Rewrite the standard operating procedure below as a short, plain-language checklist the caller can follow right now. Use ONLY the steps provided. Do NOT invent new steps, do NOT drop steps, and do NOT change their order.

INCIDENT REPORT:
{narrative}

INCIDENT CATEGORY: {category}

STANDARD OPERATING PROCEDURE:
{steps}

Respond with the checklist only."#;

/// Responder-summary prompt. Placeholder: `{narrative}`.
pub const RESPONDER_SUMMARY_PROMPT: &str =
    "Summarize this incident in ONE short sentence, concise for responders: {narrative}";

/// Builds the citizen-guidance prompt for one report.
///
/// Steps are numbered from 1 in the order given; the playbook owns that
/// order.
pub fn build_guidance_prompt(narrative: &str, category: Category, steps: &[&str]) -> String {
    let numbered: Vec<String> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();

    CITIZEN_GUIDANCE_PROMPT
        .replace("{narrative}", narrative)
        .replace("{category}", category.label())
        .replace("{steps}", &numbered.join("\n"))
}

/// Builds the one-sentence responder-summary prompt.
pub fn build_summary_prompt(narrative: &str) -> String {
    RESPONDER_SUMMARY_PROMPT.replace("{narrative}", narrative)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidance_prompt_carries_narrative_and_category() {
        let prompt = build_guidance_prompt(
            "strong chemical smell in the stairwell",
            Category::Hazmat,
            &["Leave the building.", "Call 911."],
        );

        assert!(prompt.contains("strong chemical smell in the stairwell"));
        assert!(prompt.contains("INCIDENT CATEGORY: Hazmat"));
        assert!(!prompt.contains("{narrative}"), "all placeholders must be substituted");
        assert!(!prompt.contains("{category}"));
        assert!(!prompt.contains("{steps}"));
    }

    #[test]
    fn test_guidance_prompt_numbers_steps_from_one_in_order() {
        let prompt = build_guidance_prompt(
            "report",
            Category::MedicalEmergency,
            &["First step.", "Second step.", "Third step."],
        );

        assert!(prompt.contains("1. First step."));
        assert!(prompt.contains("2. Second step."));
        assert!(prompt.contains("3. Third step."));

        let first = prompt.find("1. First step.").unwrap();
        let second = prompt.find("2. Second step.").unwrap();
        assert!(first < second, "steps must appear in playbook order");
    }

    #[test]
    fn test_guidance_prompt_keeps_no_invention_constraint() {
        let prompt = build_guidance_prompt("report", Category::GeneralIncident, &["Call 911."]);
        assert!(
            prompt.contains("Do NOT invent new steps"),
            "the no-invention instruction must survive template substitution"
        );
        assert!(prompt.contains("public-safety assistant"));
    }

    #[test]
    fn test_summary_prompt_embeds_narrative() {
        let prompt = build_summary_prompt("two cars collided at the roundabout");
        assert!(prompt.contains("two cars collided at the roundabout"));
        assert!(prompt.contains("ONE short sentence"));
    }
}
