use parking_mate_be::errors::AppError;
use parking_mate_be::models::rating::{MAX_SCORE, MIN_SCORE, RatingAggregate, validate_score};
use uuid::Uuid;

fn aggregate_for(scores: &[f64]) -> RatingAggregate {
    RatingAggregate::recompute(Uuid::nil(), scores)
}

#[test]
fn test_zero_state_for_unrated_lot() {
    let agg = aggregate_for(&[]);

    assert_eq!(agg.total_score, 0.0);
    assert_eq!(agg.rating_count, 0);
    assert_eq!(agg.avg_score, 0.0);
    assert_eq!(agg, RatingAggregate::zero(Uuid::nil()));
}

#[test]
fn test_add_then_delete_restores_zero_state() {
    // Lot starts unrated, two ratings arrive, both get deleted again
    let mut scores: Vec<f64> = Vec::new();

    scores.push(4.0);
    let agg = aggregate_for(&scores);
    assert_eq!(agg.total_score, 4.0);
    assert_eq!(agg.rating_count, 1);
    assert_eq!(agg.avg_score, 4.0);

    scores.push(2.0);
    let agg = aggregate_for(&scores);
    assert_eq!(agg.total_score, 6.0);
    assert_eq!(agg.rating_count, 2);
    assert_eq!(agg.avg_score, 3.0);

    // Delete the 4.0 rating
    scores.remove(0);
    let agg = aggregate_for(&scores);
    assert_eq!(agg.total_score, 2.0);
    assert_eq!(agg.rating_count, 1);
    assert_eq!(agg.avg_score, 2.0);

    // Delete the last rating: average reads as exactly 0, not an error
    scores.remove(0);
    let agg = aggregate_for(&scores);
    assert_eq!(agg.total_score, 0.0);
    assert_eq!(agg.rating_count, 0);
    assert_eq!(agg.avg_score, 0.0);
}

#[test]
fn test_update_recomputes_correctly() {
    let agg = aggregate_for(&[5.0, 3.0]);
    assert_eq!(agg.total_score, 8.0);
    assert_eq!(agg.rating_count, 2);
    assert_eq!(agg.avg_score, 4.0);

    // The 5.0 rating is updated to 1.0
    let agg = aggregate_for(&[1.0, 3.0]);
    assert_eq!(agg.total_score, 4.0);
    assert_eq!(agg.rating_count, 2);
    assert_eq!(agg.avg_score, 2.0);
}

#[test]
fn test_recompute_is_idempotent() {
    let scores = [4.5, 3.0, 0.5, 2.0, 5.0];
    let p_id = Uuid::new_v4();

    let first = RatingAggregate::recompute(p_id, &scores);
    let second = RatingAggregate::recompute(p_id, &scores);

    // Bit-identical, not merely approximately equal
    assert_eq!(first.total_score.to_bits(), second.total_score.to_bits());
    assert_eq!(first.avg_score.to_bits(), second.avg_score.to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_average_stays_within_score_bounds() {
    let agg = aggregate_for(&[0.0, 5.0, 2.5, 4.0]);

    assert!(agg.avg_score >= MIN_SCORE);
    assert!(agg.avg_score <= MAX_SCORE);
    assert_eq!(agg.rating_count, 4);
}

#[test]
fn test_validate_score_accepts_range() {
    assert!(validate_score(0.0).is_ok());
    assert!(validate_score(2.5).is_ok());
    assert!(validate_score(5.0).is_ok());
}

#[test]
fn test_validate_score_rejects_out_of_range() {
    assert!(matches!(
        validate_score(-0.1),
        Err(AppError::InvalidScore(_))
    ));
    assert!(matches!(validate_score(5.1), Err(AppError::InvalidScore(_))));
    assert!(matches!(
        validate_score(f64::NAN),
        Err(AppError::InvalidScore(_))
    ));
    assert!(matches!(
        validate_score(f64::INFINITY),
        Err(AppError::InvalidScore(_))
    ));
}
