//! Skill extraction and profile overlap.
//!
//! Matching is plain case-insensitive substring containment with no word
//! boundaries, so `"Go"` is mentioned by any posting containing `"Google"`.

use std::collections::BTreeSet;

/// Overlap between the profile's skills and the skills a posting mentions.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    /// Mentioned skills the profile has, in vocabulary order.
    pub matching: Vec<String>,
    /// Mentioned skills the profile lacks, in vocabulary order.
    pub missing: Vec<String>,
    /// matching / mentioned × 100, or 0 when nothing is mentioned.
    pub score: f64,
}

/// Returns the vocabulary skills whose name occurs in `posting`, in
/// vocabulary order.
pub fn extract_mentioned_skills(posting: &str, vocabulary: &[String]) -> Vec<String> {
    let posting = posting.to_lowercase();
    vocabulary
        .iter()
        .filter(|skill| posting.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Splits `mentioned` into skills the profile has and skills it lacks.
/// Membership is exact and case-sensitive.
pub fn match_skills(profile_skills: &BTreeSet<String>, mentioned: &[String]) -> SkillMatch {
    let (matching, missing): (Vec<String>, Vec<String>) = mentioned
        .iter()
        .cloned()
        .partition(|skill| profile_skills.contains(skill));

    let score = if mentioned.is_empty() {
        0.0
    } else {
        matching.len() as f64 / mentioned.len() as f64 * 100.0
    };

    SkillMatch {
        matching,
        missing,
        score,
    }
}
