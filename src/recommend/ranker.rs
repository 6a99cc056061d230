use crate::{
    errors::AppError,
    models::{
        recommendation::{RankedLot, ScoredCandidate},
        user::PreferredFactor,
    },
};

/// Scoring dimension the gateway must emit for each preference factor.
pub fn dimension_key(factor: PreferredFactor) -> &'static str {
    match factor {
        PreferredFactor::Fee => "feeScore",
        PreferredFactor::Distance => "distanceScore",
        PreferredFactor::Rating => "reviewScore",
        PreferredFactor::Congestion => "congestionScore",
    }
}

/// Project every candidate onto the dimension matching the user's
/// preference and sort descending. Every candidate must carry the selected
/// dimension; a gateway response missing it fails the query instead of
/// silently defaulting to another dimension.
pub fn rank(
    scored: Vec<ScoredCandidate>,
    factor: PreferredFactor,
) -> Result<Vec<RankedLot>, AppError> {
    let key = dimension_key(factor);

    let mut ranked = Vec::with_capacity(scored.len());
    for candidate in scored {
        let Some(&score) = candidate.scores.get(key) else {
            return Err(AppError::PreferenceUnmapped(format!(
                "Scoring response for '{}' is missing the '{}' dimension",
                candidate.name, key
            )));
        };

        ranked.push(RankedLot {
            name: candidate.name,
            recommendation_score: score,
        });
    }

    // sort_by is stable: candidates with equal scores keep the gateway's order
    ranked.sort_by(|a, b| {
        b.recommendation_score
            .partial_cmp(&a.recommendation_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranked)
}
