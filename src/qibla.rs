//! Qibla direction: great-circle bearing and distance from an observer to
//! the Kaaba. Closed-form spherical trigonometry, no state.

use std::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Coordinates of the Kaaba in Makkah.
pub const KAABA_LAT: f64 = 21.4225;
pub const KAABA_LON: f64 = 39.8262;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy)]
pub struct QiblaDirection {
    /// Initial great-circle bearing, degrees clockwise from true north.
    pub bearing: f64,
    /// Great-circle distance to the Kaaba in kilometres.
    pub distance_km: f64,
}

/// Compute the qibla from an observer at (lat, lon) in degrees.
pub fn qibla_direction(lat: f64, lon: f64) -> QiblaDirection {
    QiblaDirection {
        bearing: initial_bearing(lat, lon, KAABA_LAT, KAABA_LON),
        distance_km: haversine_km(lat, lon, KAABA_LAT, KAABA_LON),
    }
}

/// Initial bearing of the great circle from (lat1, lon1) to (lat2, lon2),
/// normalized to 0-360 degrees.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1 * DEG_TO_RAD;
    let phi2 = lat2 * DEG_TO_RAD;
    let delta_lambda = (lon2 - lon1) * DEG_TO_RAD;

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    let theta = x.atan2(y) * RAD_TO_DEG;
    (theta % 360.0 + 360.0) % 360.0
}

/// Haversine great-circle distance in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1 * DEG_TO_RAD;
    let phi2 = lat2 * DEG_TO_RAD;
    let delta_phi = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lambda = (lon2 - lon1) * DEG_TO_RAD;

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

const COMPASS_POINTS: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Nearest 16-wind compass point for a bearing in degrees.
pub fn compass_point(bearing: f64) -> &'static str {
    let normalized = (bearing % 360.0 + 360.0) % 360.0;
    let idx = ((normalized / 22.5).round() as usize) % 16;
    COMPASS_POINTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qibla_from_islamabad() {
        // Known qibla for Islamabad is ~255.9 degrees (roughly WSW).
        let q = qibla_direction(33.6938, 73.0651);
        assert!((255.0..257.0).contains(&q.bearing), "bearing {}", q.bearing);
        assert!((3400.0..3650.0).contains(&q.distance_km), "distance {}", q.distance_km);
        assert_eq!(compass_point(q.bearing), "WSW");
    }

    #[test]
    fn qibla_from_london() {
        // Known qibla for London is ~119 degrees (ESE).
        let q = qibla_direction(51.5074, -0.1278);
        assert!((118.0..120.5).contains(&q.bearing), "bearing {}", q.bearing);
        assert_eq!(compass_point(q.bearing), "ESE");
    }

    #[test]
    fn qibla_from_jakarta_points_northwest() {
        let q = qibla_direction(-6.2088, 106.8456);
        assert!((290.0..300.0).contains(&q.bearing), "bearing {}", q.bearing);
    }

    #[test]
    fn standing_at_the_kaaba() {
        let q = qibla_direction(KAABA_LAT, KAABA_LON);
        assert!(q.distance_km < 1.0);
    }

    #[test]
    fn due_directions() {
        // Due east along the equator
        assert!((initial_bearing(0.0, 0.0, 0.0, 10.0) - 90.0).abs() < 1e-9);
        // Due north along a meridian
        assert!(initial_bearing(0.0, 0.0, 10.0, 0.0).abs() < 1e-9);
    }

    #[test]
    fn compass_wraps_at_north() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(359.0), "N");
        assert_eq!(compass_point(11.5), "NNE");
        assert_eq!(compass_point(180.0), "S");
        assert_eq!(compass_point(-90.0), "W");
    }
}
