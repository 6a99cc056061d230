use async_trait::async_trait;
use serde::Serialize;
use std::{collections::HashMap, time::Duration};

use crate::{
    errors::AppError,
    models::recommendation::{Candidate, ScoredCandidate},
};

/// Narrow interface over the external scoring model so the ranking logic
/// can run against a stub in tests. The model scores each candidate along
/// several dimensions (fee, distance, review, congestion) given the query
/// coordinate and the weekday/hour context carried on each candidate.
#[async_trait]
pub trait ScoringGateway: Send + Sync {
    async fn score(
        &self,
        candidates: &[Candidate],
        base_lat: f64,
        base_lon: f64,
    ) -> Result<Vec<ScoredCandidate>, AppError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreRequest<'a> {
    candidates: &'a [Candidate],
    base_lat: f64,
    base_lon: f64,
}

/// Scoring gateway backed by the AI module's HTTP endpoint. The call is
/// bounded by a client-level timeout; a timeout, transport failure, non-2xx
/// status or malformed body all surface as `ScoringUnavailable` so the
/// recommendation query aborts instead of ranking garbage.
#[derive(Clone)]
pub struct HttpScoringGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpScoringGateway {
    pub fn new(url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::ScoringUnavailable(format!("Failed to build scoring client: {}", e))
            })?;

        Ok(Self { client, url })
    }

    pub fn from_env() -> Result<Self, AppError> {
        let url = std::env::var("SCORING_URL").map_err(|e| AppError::EnvError(e.to_string()))?;
        let timeout_secs = std::env::var("SCORING_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(10);

        Self::new(url, Duration::from_secs(timeout_secs))
    }
}

/// One response entry: an object with the lot name under "name" and every
/// scoring dimension as a numeric field. Response order is preserved; the
/// ranker relies on it for tie-breaking.
fn parse_entry(entry: &serde_json::Value) -> Result<ScoredCandidate, AppError> {
    let obj = entry
        .as_object()
        .ok_or_else(|| AppError::ScoringUnavailable("Scoring entry is not an object".into()))?;

    let name = obj
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::ScoringUnavailable("Scoring entry missing lot name".into()))?
        .to_string();

    let mut scores = HashMap::new();
    for (key, value) in obj {
        if key == "name" {
            continue;
        }
        let score = value.as_f64().ok_or_else(|| {
            AppError::ScoringUnavailable(format!(
                "Dimension '{}' for '{}' is not numeric",
                key, name
            ))
        })?;
        scores.insert(key.clone(), score);
    }

    Ok(ScoredCandidate { name, scores })
}

#[async_trait]
impl ScoringGateway for HttpScoringGateway {
    async fn score(
        &self,
        candidates: &[Candidate],
        base_lat: f64,
        base_lon: f64,
    ) -> Result<Vec<ScoredCandidate>, AppError> {
        let res = self
            .client
            .post(&self.url)
            .json(&ScoreRequest {
                candidates,
                base_lat,
                base_lon,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::ScoringUnavailable("Scoring request timed out".into())
                } else {
                    AppError::ScoringUnavailable(format!("Failed to reach scoring service: {}", e))
                }
            })?;

        if !res.status().is_success() {
            return Err(AppError::ScoringUnavailable(format!(
                "Scoring service returned {}",
                res.status()
            )));
        }

        let body: serde_json::Value = res.json().await.map_err(|e| {
            AppError::ScoringUnavailable(format!("Invalid scoring response: {}", e))
        })?;

        let entries = body.as_array().ok_or_else(|| {
            AppError::ScoringUnavailable("Scoring response is not an array".into())
        })?;

        if entries.len() != candidates.len() {
            return Err(AppError::ScoringUnavailable(format!(
                "Scoring service returned {} results for {} candidates",
                entries.len(),
                candidates.len()
            )));
        }

        entries.iter().map(parse_entry).collect()
    }
}
