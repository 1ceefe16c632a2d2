//! Role alignment between the profile's target role and the posting.
//!
//! Tiers, first hit wins:
//! 1. no role set → 0
//! 2. role label appears verbatim in the posting → 100
//! 3. any alias from the role keyword table appears → 75
//! 4. otherwise → 25

use crate::matching::capitalize_first;
use crate::matching::reference::ReferenceData;

/// Maximum number of role keywords reported as posting signals.
pub const MAX_ROLE_SIGNALS: usize = 10;

/// Confidence tier of a role match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoleTier {
    Unset,
    Baseline,
    Alias,
    Verbatim,
}

impl RoleTier {
    pub fn score(self) -> u32 {
        match self {
            RoleTier::Unset => 0,
            RoleTier::Baseline => 25,
            RoleTier::Alias => 75,
            RoleTier::Verbatim => 100,
        }
    }
}

/// Classifies how strongly `posting` confirms `role`.
pub fn classify_role(role: Option<&str>, posting: &str, reference: &ReferenceData) -> RoleTier {
    let role = match role {
        Some(r) if !r.is_empty() => r,
        _ => return RoleTier::Unset,
    };

    let posting = posting.to_lowercase();
    if posting.contains(&role.to_lowercase()) {
        return RoleTier::Verbatim;
    }

    let alias_hit = reference
        .aliases_for(role)
        .iter()
        .any(|alias| posting.contains(alias.as_str()));

    if alias_hit {
        RoleTier::Alias
    } else {
        RoleTier::Baseline
    }
}

/// Role sub-score, 0..=100.
pub fn score_role(role: Option<&str>, posting: &str, reference: &ReferenceData) -> u32 {
    classify_role(role, posting, reference).score()
}

/// Role keywords present in the posting, in keyword-list order.
///
/// A keyword also counts when written without its first space
/// (`"full stack"` → `"fullstack"`). Returns at most `MAX_ROLE_SIGNALS`
/// display-cased keywords and whether the list was cut short.
pub fn detect_role_keywords(posting: &str, keywords: &[String]) -> (Vec<String>, bool) {
    let posting = posting.to_lowercase();
    let found: Vec<&String> = keywords
        .iter()
        .filter(|kw| posting.contains(kw.as_str()) || posting.contains(&kw.replacen(' ', "", 1)))
        .collect();

    let truncated = found.len() > MAX_ROLE_SIGNALS;
    let shown = found
        .into_iter()
        .take(MAX_ROLE_SIGNALS)
        .map(|kw| capitalize_first(kw))
        .collect();

    (shown, truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND_JD: &str = "Backend Developer with 5 years experience required";

    #[test]
    fn test_unset_role_scores_zero() {
        let reference = ReferenceData::builtin();
        assert_eq!(score_role(None, BACKEND_JD, &reference), 0);
        assert_eq!(score_role(Some(""), BACKEND_JD, &reference), 0);
    }

    #[test]
    fn test_verbatim_match_scores_hundred() {
        let reference = ReferenceData::builtin();
        let jd = "We are hiring a FRONT-END DEVELOPER to join us.";
        assert_eq!(
            classify_role(Some("Front-End Developer"), jd, &reference),
            RoleTier::Verbatim
        );
        assert_eq!(score_role(Some("Front-End Developer"), jd, &reference), 100);
    }

    #[test]
    fn test_alias_match_scores_seventy_five() {
        let reference = ReferenceData::builtin();
        assert_eq!(
            score_role(Some("Back-End Developer"), BACKEND_JD, &reference),
            75
        );
    }

    #[test]
    fn test_verbatim_takes_priority_over_alias() {
        let reference = ReferenceData::builtin();
        let jd = "Back-End Developer (backend, server side, APIs)";
        assert_eq!(
            classify_role(Some("Back-End Developer"), jd, &reference),
            RoleTier::Verbatim
        );
    }

    #[test]
    fn test_uppercase_alias_in_posting_still_matches() {
        let reference = ReferenceData::builtin();
        let jd = "Looking for an iOS Developer with Swift";
        assert_eq!(score_role(Some("Mobile Developer"), jd, &reference), 75);
    }

    #[test]
    fn test_no_match_scores_baseline() {
        let reference = ReferenceData::builtin();
        let jd = "Looking for a barista.";
        assert_eq!(score_role(Some("Cloud Engineer/Architect"), jd, &reference), 25);
    }

    #[test]
    fn test_unknown_role_falls_through_to_baseline() {
        let reference = ReferenceData::builtin();
        assert_eq!(score_role(Some("Astronaut"), BACKEND_JD, &reference), 25);
        assert_eq!(score_role(Some("Astronaut"), "Astronaut wanted", &reference), 100);
    }

    #[test]
    fn test_alias_is_plain_substring() {
        let reference = ReferenceData::builtin();
        // "pm" is an alias of Product Manager and occurs inside "development".
        let jd = "Join our development team";
        assert_eq!(score_role(Some("Product Manager"), jd, &reference), 75);
    }

    #[test]
    fn test_tiers_are_monotonic() {
        assert!(RoleTier::Verbatim.score() >= RoleTier::Alias.score());
        assert!(RoleTier::Alias.score() >= RoleTier::Baseline.score());
        assert!(RoleTier::Baseline.score() >= RoleTier::Unset.score());
        assert!(RoleTier::Verbatim > RoleTier::Unset);
    }

    #[test]
    fn test_detect_role_keywords_accepts_unspaced_form() {
        let keywords = vec!["full stack".to_string(), "devops".to_string()];
        let (found, truncated) = detect_role_keywords("Fullstack engineer, some DevOps", &keywords);
        assert_eq!(found, vec!["Full stack".to_string(), "Devops".to_string()]);
        assert!(!truncated);
    }

    #[test]
    fn test_detect_role_keywords_caps_at_ten() {
        let keywords: Vec<String> = (0..12).map(|i| format!("kw{i}")).collect();
        let posting = keywords.join(" ");
        let (found, truncated) = detect_role_keywords(&posting, &keywords);
        assert_eq!(found.len(), MAX_ROLE_SIGNALS);
        assert_eq!(found[0], "Kw0");
        assert!(truncated);
    }

    #[test]
    fn test_detect_role_keywords_none_found() {
        let reference = ReferenceData::builtin();
        let (found, truncated) =
            detect_role_keywords("Barista needed", reference.role_signal_keywords());
        assert!(found.is_empty());
        assert!(!truncated);
    }
}
