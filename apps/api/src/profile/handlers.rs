use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::profile::AccountType;
use crate::profile::{completion_report, CompletionReport};

#[derive(Debug, Deserialize)]
pub struct CompletionRequest {
    pub profile: Value,
    /// Free-form role tag; unknown tags score against the job seeker checklist.
    #[serde(default)]
    pub account_type: Option<String>,
}

/// POST /api/v1/profiles/completion
pub async fn handle_profile_completion(
    Json(request): Json<CompletionRequest>,
) -> Result<Json<CompletionReport>, AppError> {
    let Value::Object(profile) = request.profile else {
        return Err(AppError::Validation(
            "profile must be a JSON object".to_string(),
        ));
    };
    let account_type = request
        .account_type
        .as_deref()
        .map(AccountType::from_tag)
        .unwrap_or_default();

    Ok(Json(completion_report(&profile, account_type)))
}
