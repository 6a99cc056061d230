use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use parking_mate_be::errors::AppError;
use parking_mate_be::models::parking_lot::LotWithAvg;
use parking_mate_be::models::recommendation::{Candidate, ScoredCandidate};
use parking_mate_be::models::user::PreferredFactor;
use parking_mate_be::recommend::{gateway::ScoringGateway, geo, rank_candidates, ranker};

fn lot(name: &str, latitude: f64, longitude: f64, avg_score: f64) -> LotWithAvg {
    LotWithAvg {
        p_id: Uuid::new_v4(),
        name: name.into(),
        address: "Seoul".into(),
        fee: 1000,
        latitude,
        longitude,
        avg_score,
    }
}

fn scored(name: &str, dims: &[(&str, f64)]) -> ScoredCandidate {
    ScoredCandidate {
        name: name.into(),
        scores: dims.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

struct StubGateway {
    results: Vec<ScoredCandidate>,
    calls: AtomicUsize,
}

impl StubGateway {
    fn new(results: Vec<ScoredCandidate>) -> Self {
        Self {
            results,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ScoringGateway for StubGateway {
    async fn score(
        &self,
        _candidates: &[Candidate],
        _base_lat: f64,
        _base_lon: f64,
    ) -> Result<Vec<ScoredCandidate>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }
}

struct UnavailableGateway;

#[async_trait]
impl ScoringGateway for UnavailableGateway {
    async fn score(
        &self,
        _candidates: &[Candidate],
        _base_lat: f64,
        _base_lon: f64,
    ) -> Result<Vec<ScoredCandidate>, AppError> {
        Err(AppError::ScoringUnavailable(
            "Scoring request timed out".into(),
        ))
    }
}

#[test]
fn test_haversine_zero_distance() {
    let d = geo::haversine_meters(37.5665, 126.9780, 37.5665, 126.9780);
    assert!(d.abs() < 1e-6);
}

#[test]
fn test_haversine_one_degree_latitude() {
    // One degree of latitude is roughly 111.2 km everywhere
    let d = geo::haversine_meters(0.0, 0.0, 1.0, 0.0);
    assert!((d - 111_195.0).abs() < 500.0);
}

#[test]
fn test_filter_within_radius() {
    // ~300 m and ~1 km north of the query point
    let lots = vec![
        lot("near", 37.5692, 126.9780, 4.0),
        lot("far", 37.5755, 126.9780, 3.0),
    ];

    let nearby = geo::filter_within_radius(lots, 37.5665, 126.9780, geo::DEFAULT_RADIUS_M);

    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].name, "near");
}

#[test]
fn test_filter_within_radius_empty() {
    let lots = vec![lot("far", 37.5755, 126.9780, 3.0)];

    let nearby = geo::filter_within_radius(lots, 37.5665, 126.9780, geo::DEFAULT_RADIUS_M);

    assert!(nearby.is_empty());
}

#[test]
fn test_dimension_key_mapping() {
    assert_eq!(ranker::dimension_key(PreferredFactor::Fee), "feeScore");
    assert_eq!(
        ranker::dimension_key(PreferredFactor::Distance),
        "distanceScore"
    );
    assert_eq!(ranker::dimension_key(PreferredFactor::Rating), "reviewScore");
    assert_eq!(
        ranker::dimension_key(PreferredFactor::Congestion),
        "congestionScore"
    );
}

#[test]
fn test_rank_sorts_descending() {
    let scored = vec![
        scored("low", &[("feeScore", 20.0)]),
        scored("high", &[("feeScore", 90.0)]),
        scored("mid", &[("feeScore", 55.0)]),
    ];

    let ranked = ranker::rank(scored, PreferredFactor::Fee).unwrap();

    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["high", "mid", "low"]);
    assert_eq!(ranked[0].recommendation_score, 90.0);
}

#[test]
fn test_rank_stable_tie_break() {
    // A and B tie; A must stay ahead because the gateway listed it first
    let scored = vec![
        scored("A", &[("reviewScore", 4.0)]),
        scored("B", &[("reviewScore", 4.0)]),
        scored("C", &[("reviewScore", 3.0)]),
    ];

    let ranked = ranker::rank(scored, PreferredFactor::Rating).unwrap();

    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn test_rank_missing_dimension_is_preference_unmapped() {
    let scored = vec![
        scored("complete", &[("feeScore", 80.0), ("reviewScore", 70.0)]),
        scored("partial", &[("feeScore", 60.0)]),
    ];

    let result = ranker::rank(scored, PreferredFactor::Rating);

    assert!(matches!(result, Err(AppError::PreferenceUnmapped(_))));
}

#[tokio::test]
async fn test_empty_candidates_skip_gateway() {
    let gateway = StubGateway::new(vec![scored("unused", &[("feeScore", 1.0)])]);

    let ranked = rank_candidates(
        Vec::new(),
        37.5665,
        126.9780,
        3,
        14,
        PreferredFactor::Fee,
        &gateway,
    )
    .await
    .unwrap();

    assert!(ranked.is_empty());
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_pipeline_ranks_by_preference() {
    let lots = vec![
        lot("cheap", 37.5665, 126.9780, 4.2),
        lot("close", 37.5668, 126.9781, 3.5),
    ];
    let gateway = StubGateway::new(vec![
        scored("cheap", &[("feeScore", 95.0), ("distanceScore", 40.0)]),
        scored("close", &[("feeScore", 50.0), ("distanceScore", 90.0)]),
    ]);

    let by_fee = rank_candidates(
        lots.clone(),
        37.5665,
        126.9780,
        3,
        14,
        PreferredFactor::Fee,
        &gateway,
    )
    .await
    .unwrap();
    assert_eq!(by_fee[0].name, "cheap");

    let by_distance = rank_candidates(
        lots,
        37.5665,
        126.9780,
        3,
        14,
        PreferredFactor::Distance,
        &gateway,
    )
    .await
    .unwrap();
    assert_eq!(by_distance[0].name, "close");
}

#[tokio::test]
async fn test_gateway_failure_aborts_query() {
    let lots = vec![lot("anywhere", 37.5665, 126.9780, 4.0)];

    let result = rank_candidates(
        lots,
        37.5665,
        126.9780,
        3,
        14,
        PreferredFactor::Congestion,
        &UnavailableGateway,
    )
    .await;

    assert!(matches!(result, Err(AppError::ScoringUnavailable(_))));
}
