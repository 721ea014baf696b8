// Category → standard-operating-procedure lookup.
//
// The step lists are the vetted safety content of the service. The model
// rephrases and formats them; it never writes them. Curated by the response
// team. Keep one step per line so edits stay reviewable.

use crate::triage::models::Category;

const MEDICAL_EMERGENCY_SOP: &[&str] = &[
    "Call 911 (or your local emergency number) and ask for medical assistance.",
    "Check whether the person is responsive and breathing.",
    "If the person is not breathing and you are trained, start CPR.",
    "Send someone to fetch the nearest defibrillator (AED) if one is available.",
    "Do not move the person unless they are in immediate danger, and stay with them until responders arrive.",
];

const HAZMAT_SOP: &[&str] = &[
    "Move away from the spill or fumes immediately, uphill and upwind if possible.",
    "Do not touch, smell, or attempt to clean up the material.",
    "Call 911 and describe the substance, its container, and any placards you can see from a safe distance.",
    "Keep other people and animals away from the area.",
    "If the material contacted skin or eyes, rinse with running water and seek medical help.",
];

const ACTIVE_SHOOTER_SOP: &[&str] = &[
    "Run: leave the area by the safest route if you can do so without crossing the threat.",
    "Hide: if you cannot leave, lock and barricade doors, silence your phone, and stay out of sight.",
    "Fight: only as a last resort, act with others to disrupt the shooter.",
    "Call 911 when it is safe to do so and give your location and a description.",
    "When officers arrive, keep your hands visible and follow their instructions.",
];

/// Served when a report matches no curated playbook. A lookup must never
/// fail or come back empty: an uncertain caller still gets one clear
/// instruction.
const GENERAL_INCIDENT_FALLBACK: &[&str] = &[
    "This report does not match a standard procedure. If anyone is in danger, call 911 (or your local emergency number) now and describe the situation.",
];

/// Returns the SOP steps for a category, in execution order.
///
/// Non-empty for every category: anything without a curated playbook
/// resolves to the explicit fallback instruction.
pub fn sop_steps(category: Category) -> &'static [&'static str] {
    match category {
        Category::MedicalEmergency => MEDICAL_EMERGENCY_SOP,
        Category::Hazmat => HAZMAT_SOP,
        Category::ActiveShooter => ACTIVE_SHOOTER_SOP,
        Category::GeneralIncident => GENERAL_INCIDENT_FALLBACK,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [Category; 4] = [
        Category::MedicalEmergency,
        Category::Hazmat,
        Category::ActiveShooter,
        Category::GeneralIncident,
    ];

    #[test]
    fn test_every_category_has_nonempty_steps() {
        for category in ALL_CATEGORIES {
            assert!(
                !sop_steps(category).is_empty(),
                "category {} resolved to an empty playbook",
                category.label()
            );
        }
    }

    #[test]
    fn test_every_step_is_nonempty_text() {
        for category in ALL_CATEGORIES {
            for step in sop_steps(category) {
                assert!(!step.trim().is_empty(), "blank step in {}", category.label());
            }
        }
    }

    #[test]
    fn test_fallback_directs_to_emergency_number() {
        let steps = sop_steps(Category::GeneralIncident);
        assert_eq!(steps.len(), 1, "fallback is a single instruction");
        assert!(steps[0].contains("911"), "fallback must point at an emergency number");
    }

    #[test]
    fn test_medical_playbook_leads_with_calling_for_help() {
        let steps = sop_steps(Category::MedicalEmergency);
        assert!(
            steps[0].contains("911"),
            "first medical step must be calling for help, got: {}",
            steps[0]
        );
    }

    #[test]
    fn test_lookup_is_stable_across_calls() {
        let first = sop_steps(Category::Hazmat);
        let second = sop_steps(Category::Hazmat);
        assert_eq!(first, second);
    }
}
