//! Analysis entry point.
//!
//! `AppState` carries an `Arc<dyn JobMatcher>`; `KeywordJobMatcher` is the
//! lexical, rule-based implementation. Analysis is pure and synchronous:
//! no I/O, no shared mutable state, safe to call from any number of tasks.

use tracing::debug;

use crate::matching::aggregate::{aggregate_score, build_recommendation, MatchWeights};
use crate::matching::experience::{experience_signal, score_experience};
use crate::matching::models::{AnalysisResult, MatchBand, PostingSignals, Profile};
use crate::matching::reference::ReferenceData;
use crate::matching::requirements::extract_requirements;
use crate::matching::role::{detect_role_keywords, score_role};
use crate::matching::skills::{extract_mentioned_skills, match_skills};

/// Scores a profile against a job posting.
///
/// Callers skip empty or all-whitespace postings; implementations still
/// return defaults for them rather than failing.
pub trait JobMatcher: Send + Sync {
    fn analyze(&self, profile: &Profile, posting: &str) -> AnalysisResult;

    /// Tables the matcher was built with.
    fn reference(&self) -> &ReferenceData;
}

/// Case-insensitive substring matcher over injected reference tables.
#[derive(Debug, Clone, Default)]
pub struct KeywordJobMatcher {
    reference: ReferenceData,
    weights: MatchWeights,
}

impl KeywordJobMatcher {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
            weights: MatchWeights::default(),
        }
    }
}

impl JobMatcher for KeywordJobMatcher {
    fn analyze(&self, profile: &Profile, posting: &str) -> AnalysisResult {
        let mentioned_skills = extract_mentioned_skills(posting, self.reference.skills());
        let skills = match_skills(&profile.skills, &mentioned_skills);
        let role_score = score_role(profile.role(), posting, &self.reference);
        let experience_score = score_experience(profile.experience, posting);
        let requirements = extract_requirements(posting);

        let overall_match =
            aggregate_score(skills.score, role_score, experience_score, &self.weights);

        debug!(
            skill_score = skills.score,
            role_score,
            experience_score,
            overall_match,
            mentioned = mentioned_skills.len(),
            "Analyzed posting"
        );

        let (role_keywords, role_keywords_truncated) =
            detect_role_keywords(posting, self.reference.role_signal_keywords());
        let signals = PostingSignals {
            role_keywords,
            role_keywords_truncated,
            experience: experience_signal(posting, self.reference.seniority_keywords()),
        };

        AnalysisResult {
            overall_match,
            match_band: MatchBand::from_score(overall_match),
            recommendation: build_recommendation(overall_match, &skills.missing),
            mentioned_skills,
            matching_skills: skills.matching,
            missing_skills: skills.missing,
            skill_match_percent: skills.score.round() as u32,
            role_match_percent: role_score,
            experience_match_percent: experience_score,
            requirements,
            signals,
        }
    }

    fn reference(&self) -> &ReferenceData {
        &self.reference
    }
}
