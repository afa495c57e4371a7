mod config;
mod model;
mod pipeline;
mod render;
mod source;

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::pipeline::Plan;
use crate::source::{DataSource, FixtureSource, Observer, RemoteSource};

#[derive(Parser)]
#[command(name = "n2yo-query")]
#[command(about = "Look up satellite TLEs and visual passes on N2YO")]
struct Cli {
    /// NORAD catalog number of the satellite
    satellite_id: Option<String>,

    /// Dotfile with `key: value` query parameters (apiKey, ...)
    #[arg(long, default_value = ".env")]
    config: PathBuf,

    /// Read canned responses from the fixtures directory instead of the API
    #[arg(long)]
    offline: bool,

    /// Directory holding tle-<id>.json and visualpasses-<id>.json
    #[arg(long, default_value = "fixtures")]
    fixtures: PathBuf,

    /// Also fetch predicted visual passes
    #[arg(long)]
    passes: bool,

    /// Observer latitude in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = parse_latitude)]
    lat: f64,

    /// Observer longitude in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = parse_longitude)]
    lng: f64,

    /// Observer altitude in metres
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = parse_finite)]
    alt: f64,

    /// Days of prediction (1-10)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    days: u8,

    /// Minimum visible seconds for a pass to be listed
    #[arg(long, default_value_t = 1)]
    min_visibility: u32,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() {
        return Err(format!("{} is not a finite number", s));
    }
    Ok(value)
}

fn parse_in_range(s: &str, limit: f64) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value.abs() > limit {
        return Err(format!("{} is outside -{}..={}", s, limit, limit));
    }
    Ok(value)
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    parse_in_range(s, 90.0)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    parse_in_range(s, 180.0)
}

impl Cli {
    fn observer(&self) -> Observer {
        Observer {
            latitude_deg: self.lat,
            longitude_deg: self.lng,
            altitude_m: self.alt,
            days: self.days,
            min_visibility_s: self.min_visibility,
        }
    }

    fn source(&self) -> Box<dyn DataSource> {
        if self.offline {
            let fixtures = FixtureSource::new(self.fixtures.clone());
            log::info!("Offline, reading fixtures from {}", fixtures.dir().display());
            Box::new(fixtures)
        } else {
            Box::new(RemoteSource::new(self.config.clone()))
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let plan = Plan {
        passes: cli.passes.then(|| cli.observer()),
    };
    let source = cli.source();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match pipeline::run(cli.satellite_id.as_deref(), source.as_ref(), &plan, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Run aborted: {:?}", e);
            let _ = writeln!(out, "{}", e);
            ExitCode::FAILURE
        }
    }
}
