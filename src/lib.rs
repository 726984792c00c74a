//! Great-circle distance between two latitude/longitude points on a spherical Earth.
//!
//! ```
//! let d = haversine::haversine(51.5074, -0.1278, 40.7128, -74.0060);
//! assert!((d - 5570.0).abs() < 10.0);
//! ```

pub mod ffi;
pub mod geo;

pub use geo::{haversine, haversine_with_radius, EARTH_RADIUS_KM};
