//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::models::{AnalysisResult, ExperienceLevel, Profile, UnknownExperienceLevel};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Profile as submitted by a client. Empty strings mean "not set".
#[derive(Debug, Default, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl TryFrom<ProfileRequest> for Profile {
    type Error = UnknownExperienceLevel;

    fn try_from(request: ProfileRequest) -> Result<Self, Self::Error> {
        let experience = match request.experience.as_deref() {
            None | Some("") => None,
            Some(label) => Some(label.parse::<ExperienceLevel>()?),
        };

        Ok(Profile {
            role: request.role.filter(|r| !r.trim().is_empty()),
            experience,
            skills: request.skills.into_iter().collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub profile: ProfileRequest,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub roles: Vec<String>,
    pub experience_levels: Vec<String>,
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Scores the submitted profile against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;

    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let length = request.job_description.chars().count();
    if length > state.config.max_posting_chars {
        return Err(AppError::Validation(format!(
            "job_description is {length} characters; the limit is {}",
            state.config.max_posting_chars
        )));
    }

    let profile = Profile::try_from(request.profile)?;
    let result = state.matcher.analyze(&profile, &request.job_description);

    info!(
        overall_match = result.overall_match,
        band = ?result.match_band,
        posting_chars = length,
        "Analysis complete"
    );

    Ok(Json(result))
}

/// GET /api/v1/reference
///
/// Lists the roles, experience levels and skills a client can offer in its pickers.
pub async fn handle_reference(State(state): State<AppState>) -> Json<ReferenceResponse> {
    let reference = state.matcher.reference();
    Json(ReferenceResponse {
        roles: reference.roles().to_vec(),
        experience_levels: ExperienceLevel::ALL
            .iter()
            .map(|level| level.label().to_string())
            .collect(),
        skills: reference.skills().to_vec(),
    })
}
