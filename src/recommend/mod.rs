pub mod gateway;
pub mod geo;
pub mod ranker;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db,
    errors::AppError,
    models::{
        parking_lot::LotWithAvg,
        recommendation::{Candidate, RankedLot},
        user::PreferredFactor,
    },
};
use gateway::ScoringGateway;

/// All lots within `radius_m` meters of the query point, with their
/// current average score. An empty result is a valid "nothing nearby"
/// outcome, not an error.
pub async fn find_nearby(
    latitude: f64,
    longitude: f64,
    radius_m: f64,
    postgres: PgPool,
) -> Result<Vec<LotWithAvg>, AppError> {
    let lots = db::parking_lot::get::get_lots_with_avg(postgres).await?;

    Ok(geo::filter_within_radius(lots, latitude, longitude, radius_m))
}

/// Nearby lots ranked by the requesting user's preferred factor.
///
/// Read-only with respect to ratings: a scoring failure aborts the query
/// and leaves no stored data behind.
pub async fn recommend_nearby(
    user_id: Uuid,
    latitude: f64,
    longitude: f64,
    weekday: u8,
    hour: u8,
    postgres: PgPool,
    scoring: &dyn ScoringGateway,
) -> Result<Vec<RankedLot>, AppError> {
    if !(1..=7).contains(&weekday) || hour > 23 {
        return Err(AppError::BadRequest(
            "Weekday must be 1-7 and hour 0-23".into(),
        ));
    }

    let user = db::user::get::get_user_by_id(user_id, postgres.clone()).await?;

    let nearby = find_nearby(latitude, longitude, geo::DEFAULT_RADIUS_M, postgres).await?;

    rank_candidates(
        nearby,
        latitude,
        longitude,
        weekday,
        hour,
        user.preferred_factor,
        scoring,
    )
    .await
}

/// Scoring and ranking over an already-filtered candidate set. Split out of
/// `recommend_nearby` so the gateway/ranker interplay is testable without a
/// database. An empty candidate set short-circuits to an empty ranked list
/// without calling the gateway.
pub async fn rank_candidates(
    nearby: Vec<LotWithAvg>,
    latitude: f64,
    longitude: f64,
    weekday: u8,
    hour: u8,
    factor: PreferredFactor,
    scoring: &dyn ScoringGateway,
) -> Result<Vec<RankedLot>, AppError> {
    if nearby.is_empty() {
        return Ok(Vec::new());
    }

    let candidates: Vec<Candidate> = nearby
        .into_iter()
        .map(|lot| Candidate {
            name: lot.name,
            review: lot.avg_score,
            weekday,
            hour,
        })
        .collect();

    let scored = scoring.score(&candidates, latitude, longitude).await?;

    ranker::rank(scored, factor)
}
