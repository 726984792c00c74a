// C ABI for callers that load the cdylib directly:
//   double haversine(double lat1, double lon1, double lat2, double lon2);

use crate::geo;

/// Great-circle distance in kilometers, see [`geo::haversine`].
#[no_mangle]
pub extern "C" fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    geo::haversine(lat1, lon1, lat2, lon2)
}
