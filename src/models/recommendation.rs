use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A lot inside the search radius, as handed to the scoring gateway.
/// `review` is the lot's current average rating.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub review: f64,
    pub weekday: u8,
    pub hour: u8,
}

/// One gateway result row: the lot name plus every scoring dimension the
/// model produced, keyed exactly as the gateway returned them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub name: String,
    #[serde(flatten)]
    pub scores: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLot {
    pub name: String,
    pub recommendation_score: f64,
}
