//! Data models shared by every matcher: the candidate profile, the ordinal
//! experience scale and the analysis result returned to callers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Experience scale
// ────────────────────────────────────────────────────────────────────────────

/// Five-step experience bracket. Ordering follows the ordinal index, so
/// `ZeroToTwo < TwoToFour < … < EightPlus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "0-2 years")]
    ZeroToTwo,
    #[serde(rename = "2-4 years")]
    TwoToFour,
    #[serde(rename = "4-6 years")]
    FourToSix,
    #[serde(rename = "6-8 years")]
    SixToEight,
    #[serde(rename = "8+ years")]
    EightPlus,
}

impl ExperienceLevel {
    /// All levels in ascending ordinal order.
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::ZeroToTwo,
        ExperienceLevel::TwoToFour,
        ExperienceLevel::FourToSix,
        ExperienceLevel::SixToEight,
        ExperienceLevel::EightPlus,
    ];

    /// Position on the scale, 0..=4.
    pub fn index(self) -> usize {
        match self {
            ExperienceLevel::ZeroToTwo => 0,
            ExperienceLevel::TwoToFour => 1,
            ExperienceLevel::FourToSix => 2,
            ExperienceLevel::SixToEight => 3,
            ExperienceLevel::EightPlus => 4,
        }
    }

    /// Canonical label, e.g. `"4-6 years"`.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::ZeroToTwo => "0-2 years",
            ExperienceLevel::TwoToFour => "2-4 years",
            ExperienceLevel::FourToSix => "4-6 years",
            ExperienceLevel::SixToEight => "6-8 years",
            ExperienceLevel::EightPlus => "8+ years",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a label is not one of the five canonical brackets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown experience level '{0}' (expected one of: 0-2 years, 2-4 years, 4-6 years, 6-8 years, 8+ years)")]
pub struct UnknownExperienceLevel(pub String);

impl FromStr for ExperienceLevel {
    type Err = UnknownExperienceLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| UnknownExperienceLevel(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input
// ────────────────────────────────────────────────────────────────────────────

/// The candidate's self-declared target role, experience bracket and skills.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub role: Option<String>,
    pub experience: Option<ExperienceLevel>,
    /// Expected in the vocabulary's canonical casing.
    pub skills: BTreeSet<String>,
}

impl Profile {
    /// The target role, or `None` when unset or blank.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.trim().is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Coarse label for the overall score, used by renderers to pick a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,   // ≥ 80
    Moderate, // 60 – 79
    Fair,     // 40 – 59
    Weak,     // < 40
}

/// What the posting itself says about experience, independent of the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExperienceSignal {
    /// Highest "N years of experience" figure in the posting.
    RequiredYears { years: u64 },
    /// First seniority keyword found when no figure is stated.
    Seniority { keyword: String },
    Unspecified,
}

/// Evidence extracted from the posting for display next to the scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingSignals {
    /// Role keywords found in the posting, first letter capitalised, at most 10.
    pub role_keywords: Vec<String>,
    /// True when more than 10 role keywords were found.
    pub role_keywords_truncated: bool,
    pub experience: ExperienceSignal,
}

/// Result of one analysis. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub overall_match: u32, // 0 – 100
    pub match_band: MatchBand,
    /// Vocabulary order, deduplicated.
    pub mentioned_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_match_percent: u32,
    pub role_match_percent: u32,
    pub experience_match_percent: u32,
    /// At most 6 lines, or the single fallback sentence.
    pub requirements: Vec<String>,
    pub signals: PostingSignals,
    pub recommendation: String,
}
