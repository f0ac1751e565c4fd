//! Headless renderer: draws the Earth-Moon view for one launch time into a PNG.
//!
//! Usage: `moonview-render [OUTPUT.png] [RFC3339-TIME] [PERIGEE-KM] [APOGEE-KM] [LUNAR-ORBIT-KM]`
//! Frame size comes from `MOONVIEW_WIDTH` / `MOONVIEW_HEIGHT` (default 800x600).

use std::env;
use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::info;

use moonview::config::{LogConfig, ViewConfig};
use moonview::controller::Viewer;
use moonview::logging;
use moonview::model::MissionParams;
use moonview::view::RasterSurface;

const DEFAULT_OUTPUT: &str = "moonview.png";

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(&LogConfig::from_env());

    let mut args = env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));
    let time = match args.next() {
        Some(s) => DateTime::parse_from_rfc3339(&s)?.with_timezone(&Utc),
        None => Utc::now(),
    };
    let defaults = MissionParams::default();
    let params = MissionParams {
        perigee_km: km_arg(args.next(), "perigee", defaults.perigee_km)?,
        apogee_km: km_arg(args.next(), "apogee", defaults.apogee_km)?,
        lunar_orbit_radius_km: km_arg(args.next(), "lunar orbit radius", defaults.lunar_orbit_radius_km)?,
    };

    let width = dimension("MOONVIEW_WIDTH", 800)?;
    let height = dimension("MOONVIEW_HEIGHT", 600)?;

    let mut surface = RasterSurface::new(width, height);
    let mut viewer = Viewer::new(&ViewConfig::default());
    let summary = viewer.compute(&mut surface, time, params);

    surface.save_png(&output)?;
    info!(path = %output.display(), width, height, "frame written");
    println!("{summary}");
    Ok(())
}

fn dimension(var: &str, default: u32) -> Result<u32, Box<dyn Error>> {
    match env::var(var) {
        Ok(v) => {
            let n: u32 = v.trim().parse()?;
            if n == 0 {
                return Err(format!("{var} must be positive").into());
            }
            Ok(n)
        }
        Err(_) => Ok(default),
    }
}

fn km_arg(arg: Option<String>, what: &str, default: f64) -> Result<f64, Box<dyn Error>> {
    match arg {
        Some(s) => {
            let v: f64 = s.trim().parse()?;
            if !v.is_finite() {
                return Err(format!("{what} must be a finite number of km").into());
            }
            Ok(v)
        }
        None => Ok(default),
    }
}
