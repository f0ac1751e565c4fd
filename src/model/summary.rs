use std::fmt;

use chrono::{DateTime, Utc};
use glam::DVec3;

use super::ephemeris::{julian_date, moon_position_jd};

/// Orbit parameters entered alongside the launch time. They are echoed into
/// the summary as given; nothing is derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionParams {
    pub perigee_km: f64,
    pub apogee_km: f64,
    pub lunar_orbit_radius_km: f64,
}

impl Default for MissionParams {
    fn default() -> Self {
        Self {
            perigee_km: 200.0,
            apogee_km: 200.0,
            lunar_orbit_radius_km: 100.0,
        }
    }
}

/// Result of a compute action: the launch epoch, where the Moon is at that
/// time, and the mission parameters it was requested with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSummary {
    pub julian_date: f64,
    pub moon_position: DVec3,
    pub params: MissionParams,
}

impl LaunchSummary {
    pub fn at(time: DateTime<Utc>, params: MissionParams) -> Self {
        let jd = julian_date(time);
        Self {
            julian_date: jd,
            moon_position: moon_position_jd(jd),
            params,
        }
    }
}

impl fmt::Display for LaunchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.moon_position;
        writeln!(f, "Launch JD (UTC): {:.10}", self.julian_date)?;
        writeln!(f, "Moon Position (km): X={:.10}, Y={:.10}, Z={:.10}", p.x, p.y, p.z)?;
        writeln!(
            f,
            "Parking Orbit: perigee={:.10} km, apogee={:.10} km",
            self.params.perigee_km, self.params.apogee_km
        )?;
        write!(f, "Target lunar orbit radius: {:.10} km", self.params.lunar_orbit_radius_km)
    }
}
