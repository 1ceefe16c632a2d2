// Job match engine: skill, role and experience matching against a free-text posting.
// Everything under here except `handlers` is pure and synchronous.

pub mod aggregate;
pub mod engine;
pub mod experience;
pub mod handlers;
pub mod models;
pub mod reference;
pub mod requirements;
pub mod role;
pub mod skills;

/// Upper-cases the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("mid-level"), "Mid-level");
        assert_eq!(capitalize_first("ios"), "Ios");
        assert_eq!(capitalize_first(""), "");
    }
}
