use crate::models::parking_lot::LotWithAvg;

/// Search radius for nearby-lot recommendations, in meters.
pub const DEFAULT_RADIUS_M: f64 = 500.0;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two coordinates, in meters.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    EARTH_RADIUS_M * 2.0 * a.sqrt().asin()
}

/// Lots whose stored coordinate lies within `radius_m` meters of the query
/// point. An empty result is a valid "nothing nearby" outcome.
pub fn filter_within_radius(
    lots: Vec<LotWithAvg>,
    latitude: f64,
    longitude: f64,
    radius_m: f64,
) -> Vec<LotWithAvg> {
    lots.into_iter()
        .filter(|lot| {
            haversine_meters(latitude, longitude, lot.latitude, lot.longitude) <= radius_m
        })
        .collect()
}
