//! Weighted combination of the three sub-scores.

use crate::matching::models::MatchBand;

/// Sub-score weights. Skills count double.
#[derive(Debug, Clone)]
pub struct MatchWeights {
    pub skills: f64,
    pub role: f64,
    pub experience: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.50,
            role: 0.25,
            experience: 0.25,
        }
    }
}

/// Overall match: round(role×0.25 + experience×0.25 + skills×0.50).
///
/// `skill_score` is the unrounded skill ratio (0.0 – 100.0). Halves round up.
pub fn aggregate_score(
    skill_score: f64,
    role_score: u32,
    experience_score: u32,
    weights: &MatchWeights,
) -> u32 {
    let raw = f64::from(role_score) * weights.role
        + f64::from(experience_score) * weights.experience
        + skill_score * weights.skills;
    // All terms are non-negative, so round() (half away from zero) is half-up.
    raw.round().clamp(0.0, 100.0) as u32
}

impl MatchBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchBand::Strong,
            s if s >= 60 => MatchBand::Moderate,
            s if s >= 40 => MatchBand::Fair,
            _ => MatchBand::Weak,
        }
    }
}

/// One-line summary of the score, naming up to three missing skills.
pub fn build_recommendation(score: u32, missing_skills: &[String]) -> String {
    let top_missing: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();

    match MatchBand::from_score(score) {
        MatchBand::Strong => {
            "Strong match. Your profile covers the key requirements of this posting.".to_string()
        }
        _ if top_missing.is_empty() => format!(
            "Partial match ({score}/100). Skills look fine; role or experience is the gap."
        ),
        MatchBand::Moderate | MatchBand::Fair => format!(
            "Partial match ({score}/100). Consider strengthening: {}.",
            top_missing.join(", ")
        ),
        MatchBand::Weak => format!(
            "Weak match ({score}/100). Missing skills include: {}.",
            top_missing.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(skill: f64, role: u32, experience: u32) -> u32 {
        aggregate_score(skill, role, experience, &MatchWeights::default())
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = MatchWeights::default();
        assert!((w.skills + w.role + w.experience - 1.0).abs() < f64::EPSILON);
        assert!((w.skills - 2.0 * w.role).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_perfect_is_hundred() {
        assert_eq!(aggregate(100.0, 100, 100), 100);
    }

    #[test]
    fn test_all_zero_is_zero() {
        assert_eq!(aggregate(0.0, 0, 0), 0);
    }

    #[test]
    fn test_backend_scenario_rounds_up_to_94() {
        // 75×0.25 + 100×0.25 + 100×0.5 = 93.75
        assert_eq!(aggregate(100.0, 75, 100), 94);
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 75×0.25 + 75×0.25 + 0 = 37.5
        assert_eq!(aggregate(0.0, 75, 75), 38);
        // 25×0.25 + 0 + 0 = 6.25
        assert_eq!(aggregate(0.0, 25, 0), 6);
    }

    #[test]
    fn test_uses_unrounded_skill_ratio() {
        // 2/3 of skills: 66.67×0.5 = 33.33, + 25 + 12.5 = 70.83
        let skill = 2.0 / 3.0 * 100.0;
        assert_eq!(aggregate(skill, 100, 50), 71);
    }

    #[test]
    fn test_bounded_for_every_sub_score_combination() {
        for skill in [0.0, 12.5, 50.0, 100.0] {
            for role in [0, 25, 75, 100] {
                for experience in [0, 25, 50, 75, 100] {
                    assert!(aggregate(skill, role, experience) <= 100);
                }
            }
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(MatchBand::from_score(100), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(80), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(79), MatchBand::Moderate);
        assert_eq!(MatchBand::from_score(60), MatchBand::Moderate);
        assert_eq!(MatchBand::from_score(59), MatchBand::Fair);
        assert_eq!(MatchBand::from_score(40), MatchBand::Fair);
        assert_eq!(MatchBand::from_score(39), MatchBand::Weak);
        assert_eq!(MatchBand::from_score(0), MatchBand::Weak);
    }

    #[test]
    fn test_recommendation_strong() {
        let rec = build_recommendation(94, &[]);
        assert!(rec.contains("Strong match"));
    }

    #[test]
    fn test_recommendation_lists_at_most_three_missing() {
        let missing: Vec<String> = ["Docker", "AWS", "Redis", "Kafka"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rec = build_recommendation(65, &missing);
        assert!(rec.contains("65"));
        assert!(rec.contains("Docker, AWS, Redis"));
        assert!(!rec.contains("Kafka"));
    }

    #[test]
    fn test_recommendation_weak() {
        let rec = build_recommendation(20, &["Swift".to_string()]);
        assert!(rec.starts_with("Weak match (20/100)"));
        assert!(rec.contains("Swift"));
    }

    #[test]
    fn test_recommendation_without_missing_skills() {
        let rec = build_recommendation(45, &[]);
        assert!(rec.contains("45"));
        assert!(rec.contains("role or experience"));
    }
}
