/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in kilometers.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_with_radius(lat1, lon1, lat2, lon2, EARTH_RADIUS_KM)
}

/// Great-circle distance on a sphere of the given `radius`.
/// The result is in whatever unit `radius` is expressed in.
///
/// Inputs are not range-checked. Near-antipodal points can round `a` just above 1,
/// in which case the result is NaN.
pub fn haversine_with_radius(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius * c
}
