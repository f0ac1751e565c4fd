//! Coarse geocentric Moon position.
//!
//! Mean anomaly is propagated linearly from J2000 and placed on a fixed
//! ellipse tilted by the mean lunar inclination. Good enough to put the Moon
//! on the right side of the Earth for a given date, nothing more.

use chrono::{DateTime, Utc};
use glam::DVec3;

/// Semi-major axis of the lunar orbit (km).
pub const MOON_ORBIT_A: f64 = 384_400.0;
pub const MOON_ORBIT_E: f64 = 0.0549;
/// Inclination to the ecliptic (degrees).
pub const MOON_ORBIT_I_DEG: f64 = 5.145;

const J2000_JD: f64 = 2_451_545.0;
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const MS_PER_DAY: f64 = 86_400_000.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

// Mean anomaly at J2000 and its rate (degrees, degrees per Julian century)
const MEAN_ANOMALY_J2000: f64 = 134.963;
const MEAN_ANOMALY_RATE: f64 = 477_198.867;

pub fn julian_date(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / MS_PER_DAY + UNIX_EPOCH_JD
}

/// Mean anomaly in degrees, reduced with `%` so it keeps the sign of the epoch offset.
pub fn mean_anomaly_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    (MEAN_ANOMALY_J2000 + MEAN_ANOMALY_RATE * t) % 360.0
}

/// Moon position in km for a Julian date.
pub fn moon_position_jd(jd: f64) -> DVec3 {
    let m = mean_anomaly_deg(jd).to_radians();
    let e = MOON_ORBIT_E;
    let x = MOON_ORBIT_A * (m.cos() - e);
    let y = MOON_ORBIT_A * (1.0 - e * e).sqrt() * m.sin();

    let (sin_i, cos_i) = MOON_ORBIT_I_DEG.to_radians().sin_cos();
    DVec3::new(x, y * cos_i, y * sin_i)
}

pub fn moon_position(time: DateTime<Utc>) -> DVec3 {
    moon_position_jd(julian_date(time))
}
