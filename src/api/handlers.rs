use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{RecommendationSet, SearchCriteria, DEFAULT_MAX_DISTANCE};
use crate::services::{extraction, prompt};

use super::AppState;

// Request types

/// Body of POST /search-activities, as sent by the front-end form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchActivitiesRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub kids_ages: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub max_distance: Option<u32>,
    #[serde(default)]
    pub preferences: String,
}

impl SearchActivitiesRequest {
    /// Validates required fields and converts into domain criteria.
    ///
    /// Fields deserialize to empty strings when absent, so missing and blank
    /// inputs are rejected the same way.
    fn into_criteria(self) -> AppResult<SearchCriteria> {
        if self.city.trim().is_empty()
            || self.kids_ages.trim().is_empty()
            || self.availability.trim().is_empty()
        {
            return Err(AppError::InvalidInput(
                "Missing required fields: city, kidsAges, and availability are required"
                    .to_string(),
            ));
        }

        Ok(SearchCriteria {
            city: self.city,
            kids_ages: self.kids_ages,
            availability: self.availability,
            max_distance: self.max_distance.unwrap_or(DEFAULT_MAX_DISTANCE),
            preferences: self.preferences,
        })
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "message": "Family Activity Finder API is running"
        })),
    )
}

/// Searches for family activities matching the submitted criteria.
///
/// Validates the request, relays the criteria to the completion provider as
/// a single prompt, and parses the reply into the fixed five-entry shape.
/// Every failure is converted into a structured `{"error": ...}` body by the
/// AppError response mapping.
pub async fn search_activities(
    State(state): State<AppState>,
    Json(request): Json<SearchActivitiesRequest>,
) -> AppResult<Json<RecommendationSet>> {
    let criteria = request.into_criteria()?;

    tracing::info!(
        city = %criteria.city,
        kids_ages = %criteria.kids_ages,
        availability = %criteria.availability,
        max_distance = criteria.max_distance,
        "Searching activities"
    );

    let prompt = prompt::build_search_prompt(&criteria);
    let reply = state.provider.complete(&prompt).await?;

    let recommendations = extraction::parse_recommendations(&reply).map_err(|e| {
        tracing::warn!(error = %e, "Could not parse provider reply");
        e
    })?;

    tracing::info!(
        count = recommendations.recommendations.len(),
        "Parsed recommendations"
    );

    Ok(Json(recommendations))
}
