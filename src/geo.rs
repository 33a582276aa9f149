use std::f64::consts::PI;

use chrono::{NaiveDate, NaiveDateTime};
use hifitime::Epoch;
use nalgebra::Vector3;

/// WGS84 flattening.
const FLATTENING: f64 = 1.0 / 298.257223563;

/// Latitude iteration tolerance (rad) and ceiling.
const LATITUDE_EPSILON: f64 = 1e-10;
const LATITUDE_MAX_ITER: usize = 10;

/// Geodetic (WGS84 ellipsoid) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Height above the ellipsoid (km).
    pub height_km: f64,
}

/// Converts a TEME position to geodetic coordinates at time `t`.
/// The frame is first rotated through Greenwich mean sidereal time:
/// feeding inertial coordinates straight into the cartographic
/// conversion yields drifting longitudes.
pub fn geodetic_from_teme(position_km: &Vector3<f64>, t: Epoch) -> Geodetic {
    let sidereal = sidereal_angle(t);
    let ae = sgp4::WGS84.ae;
    let e2 = FLATTENING * (2.0 - FLATTENING);

    let theta = position_km.y.atan2(position_km.x);
    let r = (position_km.x * position_km.x + position_km.y * position_km.y).sqrt();

    let longitude = wrap_pi(theta - sidereal);
    let mut latitude = position_km.z.atan2(r);
    let mut c = 1.0;

    for _ in 0..LATITUDE_MAX_ITER {
        let phi = latitude;
        c = 1.0 / (1.0 - e2 * phi.sin() * phi.sin()).sqrt();
        latitude = (position_km.z + ae * c * e2 * phi.sin()).atan2(r);
        if (latitude - phi).abs() < LATITUDE_EPSILON {
            break;
        }
    }

    // r / cos(lat) loses all precision near the poles, where z / sin(lat)
    // is exact instead
    let height_km = if latitude.abs() > PI / 4.0 {
        position_km.z / latitude.sin() - ae * c * (1.0 - e2)
    } else {
        r / latitude.cos() - ae * c
    };

    Geodetic {
        latitude_deg: latitude.to_degrees(),
        longitude_deg: longitude.to_degrees(),
        height_km,
    }
}

/// Greenwich mean sidereal angle (rad) at `t`.
fn sidereal_angle(t: Epoch) -> f64 {
    match naive_datetime(t) {
        Some(dt) => sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(&dt)),
        None => 0.0,
    }
}

fn naive_datetime(t: Epoch) -> Option<NaiveDateTime> {
    let (y, month, day, hh, mm, ss, ns) = t.to_gregorian_utc();
    NaiveDate::from_ymd_opt(y, month as u32, day as u32)
        .and_then(|date| date.and_hms_nano_opt(hh as u32, mm as u32, ss as u32, ns))
}

fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

#[cfg(test)]
mod test {
    use super::{geodetic_from_teme, wrap_pi};
    use hifitime::Epoch;
    use nalgebra::Vector3;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(PI / 2.0, PI / 2.0)]
    #[case(PI + 0.1, -PI + 0.1)]
    #[case(-PI - 0.1, PI - 0.1)]
    #[case(5.0 * PI, -PI)]
    fn wrapping(#[case] angle: f64, #[case] expected: f64) {
        assert!((wrap_pi(angle) - expected).abs() < 1e-12);
    }

    #[test]
    fn equatorial_point() {
        let t = Epoch::from_gregorian_utc_at_midnight(2008, 9, 20);
        let geo = geodetic_from_teme(&Vector3::new(7000.0, 0.0, 0.0), t);
        assert!(geo.latitude_deg.abs() < 1e-9);
        assert!((-180.0..=180.0).contains(&geo.longitude_deg));
        // 7000 km radius over the 6378 km equatorial radius
        assert!((geo.height_km - 621.863).abs() < 0.1);
    }

    #[test]
    fn polar_point() {
        let t = Epoch::from_gregorian_utc_at_midnight(2008, 9, 20);
        let geo = geodetic_from_teme(&Vector3::new(0.0, 0.0, 7000.0), t);
        assert!(geo.latitude_deg > 89.9);
        // 7000 km over the 6356.75 km polar radius
        assert!((geo.height_km - 643.248).abs() < 0.01);
    }

    #[test]
    fn high_latitude_point() {
        let t = Epoch::from_gregorian_utc_at_midnight(2008, 9, 20);
        let geo = geodetic_from_teme(&Vector3::new(1000.0, 0.0, 6900.0), t);
        assert!((geo.latitude_deg - 81.803).abs() < 0.01);
        assert!((geo.height_km - 614.897).abs() < 0.01);
    }

    #[test]
    fn earth_rotation_shifts_longitude() {
        let position = Vector3::new(7000.0, 0.0, 0.0);
        let t0 = Epoch::from_gregorian_utc_at_midnight(2008, 9, 20);
        // six sidereal hours later the same inertial point sits a
        // quarter turn further west
        let t1 = t0 + hifitime::Unit::Hour * 6;
        let lon0 = geodetic_from_teme(&position, t0).longitude_deg;
        let lon1 = geodetic_from_teme(&position, t1).longitude_deg;
        let delta = (lon0 - lon1 + 360.0).rem_euclid(360.0);
        assert!((delta - 90.0).abs() < 0.5, "drift was {delta} deg");
    }
}
