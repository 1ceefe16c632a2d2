//! Experience requirement parsing and bracket scoring.
//!
//! Every "N years of experience" phrase in the posting is parsed; the
//! largest N is mapped onto the five-step scale and compared by ordinal
//! index against the profile's bracket. Each step short costs 25 points.

use std::sync::LazyLock;

use regex::Regex;

use crate::matching::capitalize_first;
use crate::matching::models::{ExperienceLevel, ExperienceSignal};

/// Score when the posting states no explicit requirement.
pub const NO_REQUIREMENT_SCORE: u32 = 50;

/// Points lost per ordinal step below the requirement.
pub const POINTS_PER_LEVEL: u32 = 25;

// digits, optional '+', "year"/"years", optional "of", "experience".
// ASCII digits only so every capture parses as an integer.
static EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\+?\s*years?\s*(?:of)?\s*experience")
        .expect("experience pattern is a valid regex")
});

/// Largest year count across all experience phrases, if any.
///
/// Figures too large for `u64` saturate, which still lands in `8+ years`.
pub fn required_years(posting: &str) -> Option<u64> {
    EXPERIENCE_RE
        .captures_iter(posting)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .max()
}

/// Maps a year count onto the scale: ≤2, ≤4, ≤6, ≤8, otherwise 8+.
pub fn level_for_years(years: u64) -> ExperienceLevel {
    match years {
        0..=2 => ExperienceLevel::ZeroToTwo,
        3..=4 => ExperienceLevel::TwoToFour,
        5..=6 => ExperienceLevel::FourToSix,
        7..=8 => ExperienceLevel::SixToEight,
        _ => ExperienceLevel::EightPlus,
    }
}

/// 100 when `user` meets `required`, otherwise 25 points off per step short,
/// floored at 0.
pub fn score_against(user: ExperienceLevel, required: ExperienceLevel) -> u32 {
    if user.index() >= required.index() {
        return 100;
    }
    let shortfall = (required.index() - user.index()) as u32;
    100u32.saturating_sub(POINTS_PER_LEVEL * shortfall)
}

/// Experience sub-score, 0..=100.
pub fn score_experience(experience: Option<ExperienceLevel>, posting: &str) -> u32 {
    let Some(user) = experience else {
        return 0;
    };
    match required_years(posting) {
        Some(years) => score_against(user, level_for_years(years)),
        None => NO_REQUIREMENT_SCORE,
    }
}

/// What the posting says about experience: an explicit year count, else the
/// first seniority keyword found, else nothing.
pub fn experience_signal(posting: &str, seniority_keywords: &[String]) -> ExperienceSignal {
    if let Some(years) = required_years(posting) {
        return ExperienceSignal::RequiredYears { years };
    }

    let posting = posting.to_lowercase();
    seniority_keywords
        .iter()
        .find(|kw| posting.contains(kw.as_str()))
        .map(|kw| ExperienceSignal::Seniority {
            keyword: capitalize_first(kw),
        })
        .unwrap_or(ExperienceSignal::Unspecified)
}
