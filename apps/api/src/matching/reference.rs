//! Reference tables the matchers read: the enumerated role list, the
//! role → alias table, the skill vocabulary and the signal keyword lists.
//!
//! Tables are immutable once built. `ReferenceData::new` and
//! `ReferenceData::from_json_file` validate them; `builtin()` ships the
//! default tables and checks them in debug builds.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("skill vocabulary is empty")]
    EmptyVocabulary,

    #[error("skill vocabulary contains an empty entry")]
    EmptySkill,

    #[error("skill '{0}' appears more than once in the vocabulary")]
    DuplicateSkill(String),

    #[error("role '{0}' appears more than once in the role list")]
    DuplicateRole(String),

    #[error("role '{0}' has no entry in the role keyword table")]
    MissingRoleKeywords(String),

    #[error("role keyword table lists '{0}' more than once, ignoring case")]
    DuplicateRoleKeywords(String),

    #[error("role '{0}' has an empty alias")]
    EmptyAlias(String),

    #[error("{0} keyword list contains an empty entry")]
    EmptySignalKeyword(&'static str),

    #[error("failed to read reference data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference data from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialized form of the tables, as accepted from an override file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceTables {
    pub roles: Vec<String>,
    pub role_keywords: BTreeMap<String, Vec<String>>,
    pub skills: Vec<String>,
    #[serde(default = "default_role_signal_keywords")]
    pub role_signal_keywords: Vec<String>,
    #[serde(default = "default_seniority_keywords")]
    pub seniority_keywords: Vec<String>,
}

/// Validated, normalized reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    roles: Vec<String>,
    /// Lower-cased role label → lower-cased aliases, in declaration order.
    role_keywords: BTreeMap<String, Vec<String>>,
    skills: Vec<String>,
    role_signal_keywords: Vec<String>,
    seniority_keywords: Vec<String>,
}

impl ReferenceData {
    /// Builds and validates reference data from raw tables.
    pub fn new(tables: ReferenceTables) -> Result<Self, ReferenceError> {
        check_keyword_keys(&tables.role_keywords)?;
        let data = Self::normalize(tables);
        data.validate()?;
        Ok(data)
    }

    /// Loads an override file (JSON shaped like `ReferenceTables`).
    pub fn from_json_file(path: &Path) -> Result<Self, ReferenceError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables: ReferenceTables =
            serde_json::from_str(&raw).map_err(|source| ReferenceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(tables)
    }

    /// The default tables.
    pub fn builtin() -> Self {
        let data = Self::normalize(builtin_tables());
        debug_assert!(data.validate().is_ok(), "built-in reference tables are invalid");
        data
    }

    fn normalize(tables: ReferenceTables) -> Self {
        let role_keywords = tables
            .role_keywords
            .into_iter()
            .map(|(role, aliases)| {
                let aliases = aliases.iter().map(|a| a.to_lowercase()).collect();
                (role.to_lowercase(), aliases)
            })
            .collect();

        Self {
            roles: tables.roles,
            role_keywords,
            skills: tables.skills,
            role_signal_keywords: lowercase_all(&tables.role_signal_keywords),
            seniority_keywords: lowercase_all(&tables.seniority_keywords),
        }
    }

    /// Checks the invariants the matchers rely on.
    pub fn validate(&self) -> Result<(), ReferenceError> {
        if self.skills.is_empty() {
            return Err(ReferenceError::EmptyVocabulary);
        }

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if skill.trim().is_empty() {
                return Err(ReferenceError::EmptySkill);
            }
            if !seen.insert(skill.as_str()) {
                return Err(ReferenceError::DuplicateSkill(skill.clone()));
            }
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            let key = role.to_lowercase();
            if !seen.insert(key.clone()) {
                return Err(ReferenceError::DuplicateRole(role.clone()));
            }
            let covered = self
                .role_keywords
                .get(&key)
                .is_some_and(|aliases| !aliases.is_empty());
            if !covered {
                return Err(ReferenceError::MissingRoleKeywords(role.clone()));
            }
        }

        // A blank entry is a substring of every posting.
        for (role, aliases) in &self.role_keywords {
            if aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(ReferenceError::EmptyAlias(role.clone()));
            }
        }
        if self.role_signal_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ReferenceError::EmptySignalKeyword("role signal"));
        }
        if self.seniority_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ReferenceError::EmptySignalKeyword("seniority"));
        }

        Ok(())
    }

    /// Enumerated role labels, in display order.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Canonical skill names, in vocabulary order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Lower-cased aliases for `role`. Unknown roles yield an empty slice.
    pub fn aliases_for(&self, role: &str) -> &[String] {
        self.role_keywords
            .get(&role.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn role_signal_keywords(&self) -> &[String] {
        &self.role_signal_keywords
    }

    pub fn seniority_keywords(&self) -> &[String] {
        &self.seniority_keywords
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Keys are lower-cased on load, so two that differ only in case would
/// silently merge.
fn check_keyword_keys(
    role_keywords: &BTreeMap<String, Vec<String>>,
) -> Result<(), ReferenceError> {
    let mut seen = HashSet::new();
    for role in role_keywords.keys() {
        if !seen.insert(role.to_lowercase()) {
            return Err(ReferenceError::DuplicateRoleKeywords(role.clone()));
        }
    }
    Ok(())
}

fn lowercase_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in tables
// ────────────────────────────────────────────────────────────────────────────

const ROLES: &[&str] = &[
    "Software development",
    "Back-End Developer",
    "Front-End Developer",
    "Full-Stack Developer",
    "Machine Learning Engineer",
    "Mobile Developer",
    "AI Specialist",
    "Cybersecurity Specialist",
    "Cloud Engineer/Architect",
    "UX/UI Designer",
    "Product Manager",
    "Engineering Manager",
];

const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "software development",
        &["software developer", "software engineer", "software engineering"],
    ),
    (
        "front-end developer",
        &["frontend", "front end", "ui developer", "react developer"],
    ),
    (
        "back-end developer",
        &["backend", "back end", "server side", "api developer"],
    ),
    (
        "full-stack developer",
        &["fullstack", "full stack", "mern stack", "mean stack"],
    ),
    (
        "machine learning engineer",
        &["ml engineer", "ai engineer", "data scientist"],
    ),
    (
        "mobile developer",
        &["ios developer", "android developer", "react native"],
    ),
    (
        "ai specialist",
        &["ai engineer", "artificial intelligence", "machine learning"],
    ),
    (
        "cybersecurity specialist",
        &["security analyst", "security engineer", "infosec"],
    ),
    (
        "cloud engineer/architect",
        &["cloud developer", "aws engineer", "azure engineer"],
    ),
    (
        "ux/ui designer",
        &["ui/ux", "user experience", "user interface"],
    ),
    ("product manager", &["product owner", "pm", "product lead"]),
    (
        "engineering manager",
        &["tech lead", "team lead", "development manager"],
    ),
];

const SKILLS: &[&str] = &[
    "React", "TypeScript", "JavaScript", "Python", "Java", "C#", "Go", "Node.js", "Express",
    "Next.js", "Vue", "Angular", "Tailwind CSS", "CSS", "SCSS", "Bootstrap", "HTML", "MongoDB",
    "PostgreSQL", "MySQL", "AWS", "Docker", "Git", "REST", "GraphQL", "Redux", "Jest",
    "React Native", "Flutter", "Dart", "Swift", "Figma", "Vite", "REST API", "React.js",
    "ReactJS", "Spring Boot", "Azure", "Google Cloud", "Kubernetes", "CI/CD", "Jenkins",
    "GitHub Actions", "Agile", "Scrum", "JIRA", "Confluence", "Postman", "Swagger",
    "Microservices", "SQL", "NoSQL", "Firebase", "Redis", "Elasticsearch",
];

const ROLE_SIGNAL_KEYWORDS: &[&str] = &[
    "frontend",
    "backend",
    "fullstack",
    "full stack",
    "software developer",
    "software engineer",
    "web developer",
    "ui developer",
    "ux designer",
    "product manager",
    "engineering manager",
    "machine learning",
    "ai engineer",
    "data scientist",
    "mobile developer",
    "ios",
    "react native",
    "react",
    "android",
    "flutter",
    "devops",
    "cloud engineer",
    "cybersecurity",
    "security engineer",
];

// Checked in order; the first hit is reported.
const SENIORITY_KEYWORDS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "staff",
    "mid-level",
    "mid level",
    "junior",
    "entry level",
    "entry-level",
    "experienced",
    "expert",
];

fn default_role_signal_keywords() -> Vec<String> {
    owned(ROLE_SIGNAL_KEYWORDS)
}

fn default_seniority_keywords() -> Vec<String> {
    owned(SENIORITY_KEYWORDS)
}

/// The built-in tables in their serialized form.
pub fn builtin_tables() -> ReferenceTables {
    ReferenceTables {
        roles: owned(ROLES),
        role_keywords: ROLE_KEYWORDS
            .iter()
            .map(|(role, aliases)| (role.to_string(), owned(aliases)))
            .collect(),
        skills: owned(SKILLS),
        role_signal_keywords: default_role_signal_keywords(),
        seniority_keywords: default_seniority_keywords(),
    }
}
