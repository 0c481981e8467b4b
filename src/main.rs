mod geo;
mod upstream;
mod web;

use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;

use crate::geo::{
    find_nearest, CandidateSet, DistanceMode, GeoPoint3D, SpatialDistance, SurfaceDistance,
    EARTH_MEAN_RADIUS_KM,
};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "sky-proximity")]
#[command(about = "Find the airborne sensor closest to a ground reference point")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
    /// Validate a config file
    Validate {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
    /// Search a local feed file for the candidate nearest to a point
    Nearest {
        #[arg(long, value_enum, default_value_t = DistanceMode::Spatial)]
        mode: DistanceMode,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Reference altitude in km; ignored in surface mode
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        alt: f64,
        /// JSON array of [lon, lat, alt] triplets, or an object with a `data` array
        #[arg(long)]
        candidates: String,
        #[arg(long, default_value_t = EARTH_MEAN_RADIUS_KM)]
        radius_km: f64,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config),
        Commands::Validate { config } => validate(&config),
        Commands::Nearest {
            mode,
            lat,
            lon,
            alt,
            candidates,
            radius_km,
        } => nearest(mode, GeoPoint3D::new(lon, lat, alt), &candidates, radius_km),
    }
}

fn serve(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> ExitCode {
    match Config::from_file(path) {
        Ok(config) => {
            println!("Config is valid");
            println!("  bind: {}", config.web.bind);
            println!("  earth radius: {} km", config.geo.earth_radius_km);
            let reference = config.reference.point();
            println!(
                "  reference: lat {} lon {} alt {} km",
                reference.latitude_deg, reference.longitude_deg, reference.altitude_km
            );
            println!("  default station: {}", config.upstream.default_station);
            println!("  feed: {}", config.upstream.feed_url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn nearest(mode: DistanceMode, reference: GeoPoint3D, path: &str, radius_km: f64) -> ExitCode {
    let body = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let raw = match upstream::parse_feed(&body) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let candidates = CandidateSet::<GeoPoint3D>::from_json(&raw);
    log::info!(
        "Loaded {} candidates ({} skipped)",
        candidates.len(),
        candidates.skipped()
    );

    let (found, rendered) = match mode {
        DistanceMode::Spatial => {
            let result = find_nearest(
                &reference,
                &candidates,
                &SpatialDistance::with_radius(radius_km),
            );
            (result.is_found(), serde_json::to_string_pretty(&result))
        }
        DistanceMode::Surface => {
            let result = find_nearest(
                &reference.surface(),
                &candidates.map(GeoPoint3D::surface),
                &SurfaceDistance::with_radius(radius_km),
            );
            (result.is_found(), serde_json::to_string_pretty(&result))
        }
    };

    match rendered {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if found {
        ExitCode::SUCCESS
    } else {
        eprintln!("No valid candidate found");
        ExitCode::FAILURE
    }
}
