//! Key requirement lines.
//!
//! Markers are matched against the line as written: "Experience with X"
//! does not match `experience`, but "Prior experience with X" does.

/// Substrings that mark a line as a requirement.
pub const REQUIREMENT_MARKERS: &[&str] = &[
    "experience",
    "knowledge",
    "skill",
    "require",
    "ability",
    "qualification",
    "responsibilit",
    "duties",
    "must have",
    "should have",
];

pub const MAX_REQUIREMENTS: usize = 6;

/// Trimmed lines of this many characters or fewer are dropped.
pub const MIN_REQUIREMENT_CHARS: usize = 10;

/// Returned alone when no line qualifies.
pub const REQUIREMENT_FALLBACK: &str =
    "Key requirements could not be extracted. Review the job description manually.";

/// Up to `MAX_REQUIREMENTS` requirement lines in posting order. Never empty.
pub fn extract_requirements(posting: &str) -> Vec<String> {
    let requirements: Vec<String> = posting
        .lines()
        .filter(|line| REQUIREMENT_MARKERS.iter().any(|marker| line.contains(marker)))
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_REQUIREMENT_CHARS)
        .take(MAX_REQUIREMENTS)
        .map(str::to_string)
        .collect();

    if requirements.is_empty() {
        vec![REQUIREMENT_FALLBACK.to_string()]
    } else {
        requirements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_marked_lines_in_order() {
        let jd = "About us\n\
                  We need strong knowledge of SQL\n\
                  Free snacks\n\
                  - 3 years experience with Go\n";
        assert_eq!(
            extract_requirements(jd),
            vec![
                "We need strong knowledge of SQL".to_string(),
                "- 3 years experience with Go".to_string(),
            ]
        );
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        let jd = "Experience with Kubernetes clusters\nRequirements: none listed here";
        // Neither line contains a lower-case marker.
        assert_eq!(extract_requirements(jd), vec![REQUIREMENT_FALLBACK.to_string()]);
    }

    #[test]
    fn test_short_lines_are_dropped() {
        let jd = "  skills:  \n• skills\nexcellent skills in writing";
        assert_eq!(
            extract_requirements(jd),
            vec!["excellent skills in writing".to_string()]
        );
    }

    #[test]
    fn test_length_threshold_is_exclusive() {
        // exactly 10 chars is dropped, 11 is kept
        assert_eq!(extract_requirements("skill abcd"), vec![REQUIREMENT_FALLBACK.to_string()]);
        assert_eq!(extract_requirements("skill abcde"), vec!["skill abcde".to_string()]);
    }

    #[test]
    fn test_at_most_six_lines() {
        let jd = (1..=9)
            .map(|i| format!("requirement number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let reqs = extract_requirements(&jd);
        assert_eq!(reqs.len(), MAX_REQUIREMENTS);
        assert_eq!(reqs[0], "requirement number 1");
        assert_eq!(reqs[5], "requirement number 6");
    }

    #[test]
    fn test_trims_whitespace_and_carriage_returns() {
        let jd = "   must have a driving licence   \r\nother";
        assert_eq!(
            extract_requirements(jd),
            vec!["must have a driving licence".to_string()]
        );
    }

    #[test]
    fn test_empty_posting_returns_only_fallback() {
        let reqs = extract_requirements("");
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0], REQUIREMENT_FALLBACK);
    }
}
