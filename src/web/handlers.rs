use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analysis::validate_query;
use crate::web::errors::AppError;
use crate::web::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SkillsQuery {
    pub job_name: Option<String>,
    pub location: Option<String>,
}

impl SkillsQuery {
    // First value wins when a key is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "job_name" => &mut query.job_name,
                "location" => &mut query.location,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub job: String,
    pub location: String,
    pub skills: Vec<String>,
}

pub async fn get_skills_handler(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SkillsResponse>, AppError> {
    let Query(pairs) = params.map_err(|e| AppError::BadQuery(e.body_text()))?;
    let query = SkillsQuery::from_pairs(pairs);
    let job = query.job_name.unwrap_or_default();
    let location = query.location.unwrap_or_default();

    validate_query(&job, &location)?;

    tracing::info!("Skill request for '{}' in '{}'", job, location);
    let report = state.pipeline.analyze(&job, &location).await?;

    Ok(Json(SkillsResponse {
        skills: report.ranked_skills(),
        job,
        location,
    }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobskills"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_keys_keep_first_value() {
        let query = SkillsQuery::from_pairs(pairs(&[
            ("job_name", "a"),
            ("job_name", "b"),
            ("location", "x"),
            ("page", "2"),
        ]));

        assert_eq!(query.job_name.as_deref(), Some("a"));
        assert_eq!(query.location.as_deref(), Some("x"));
    }

    #[test]
    fn test_absent_keys_stay_none() {
        let query = SkillsQuery::from_pairs(pairs(&[("job_name", "dev")]));
        assert_eq!(query.job_name.as_deref(), Some("dev"));
        assert!(query.location.is_none());
    }
}
