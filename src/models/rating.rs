use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 5.0;

pub fn validate_score(score: f64) -> Result<(), AppError> {
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::InvalidScore(format!(
            "Score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub rating_id: Uuid,
    pub user_id: Uuid,
    pub p_id: Uuid,
    pub score: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rating row joined with author nickname and lot name, for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub rating_id: Uuid,
    pub user_name: String,
    pub p_name: String,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

/// Materialized per-lot rating summary. Derived state only: every write is
/// a full snapshot produced by `recompute`, never a delta against the
/// previous row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RatingAggregate {
    pub p_id: Uuid,
    pub total_score: f64,
    pub rating_count: i64,
    pub avg_score: f64,
}

impl RatingAggregate {
    /// Aggregate for a lot that has no ratings. The average reads as
    /// exactly 0, not as a division error.
    pub fn zero(p_id: Uuid) -> Self {
        Self {
            p_id,
            total_score: 0.0,
            rating_count: 0,
            avg_score: 0.0,
        }
    }

    /// Rebuild the aggregate from the full set of scores currently stored
    /// for a lot.
    pub fn recompute(p_id: Uuid, scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self::zero(p_id);
        }

        let rating_count = scores.len() as i64;
        let total_score: f64 = scores.iter().sum();
        let avg_score = total_score / rating_count as f64;

        Self {
            p_id,
            total_score,
            rating_count,
            avg_score,
        }
    }
}
