use anyhow::{ensure, Result};
use clap::Parser;
use haversine::{haversine_with_radius, EARTH_RADIUS_KM};

#[derive(Parser, Debug)]
#[command(name = "haversine")]
#[command(about = "Great-circle distance between two lat/lon points (degrees) on a spherical Earth.", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Latitude of the first point, in degrees
    lat1: f64,

    /// Longitude of the first point, in degrees
    lon1: f64,

    /// Latitude of the second point, in degrees
    lat2: f64,

    /// Longitude of the second point, in degrees
    lon2: f64,

    /// Sphere radius in kilometers. Defaults to Earth's mean radius.
    #[arg(short, long, default_value_t = EARTH_RADIUS_KM)]
    radius: f64,

    /// Print how long the computation took
    #[arg(short, long, default_value_t = false)]
    time: bool,
}

impl Cli {
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("lat1", self.lat1),
            ("lon1", self.lon1),
            ("lat2", self.lat2),
            ("lon2", self.lon2),
        ] {
            ensure!(value.is_finite(), "{} must be a finite number, got {}", name, value);
        }
        ensure!(
            self.radius.is_finite() && self.radius > 0.0,
            "radius must be a positive finite number, got {}",
            self.radius
        );
        Ok(())
    }

    // Inputs are validated first, so a NaN here can only come from `a` rounding above 1.
    fn distance(&self) -> Result<f64> {
        let d = haversine_with_radius(self.lat1, self.lon1, self.lat2, self.lon2, self.radius);
        ensure!(
            !d.is_nan(),
            "({}, {}) and ({}, {}) are antipodal within floating-point rounding; \
             the haversine formula is undefined there (expected about {:.6} km)",
            self.lat1,
            self.lon1,
            self.lat2,
            self.lon2,
            self.radius * std::f64::consts::PI
        );
        Ok(d)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;

    use std::time::SystemTime;
    let now = SystemTime::now();
    let d = cli.distance()?;
    let elapsed = now.elapsed();

    println!("{:.6} km", d);
    if cli.time {
        if let Ok(elapsed) = elapsed {
            println!("{} s", elapsed.as_secs_f64());
        }
    }

    Ok(())
}
