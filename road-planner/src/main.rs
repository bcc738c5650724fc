use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

use road_planner::database::{LoadOutcome, load_database};
use road_planner::error::AppError;
use road_planner::planner::{PlannerConfig, RoutePlanner};
use road_planner::render::{render_geojson, render_kml, render_text, write_file};

/// Plan a road trip between two cities, one day's drive at a time.
///
/// Uses a database of geographical locations to plan a trip between two
/// cities, perhaps not very efficiently, but surely more interestingly than
/// a map service would.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the CSV database of cities
    database: PathBuf,

    /// Starting point of the route (e.g. "San Francisco, CA")
    start: String,

    /// End point of the route (e.g. "Boston, MA")
    finish: String,

    /// Additional stop along the route, visited in order given. Repeatable.
    #[arg(long = "stop", value_name = "CITY")]
    stops: Vec<String>,

    /// Maximum km travelled per day
    #[arg(
        short = 'r',
        long,
        value_name = "KM",
        default_value_t = 200.0,
        env = "ROAD_PLANNER_KM_PER_DAY",
        allow_negative_numbers = true
    )]
    km_per_day: f64,

    /// Also write the route as KML to this file
    #[arg(long, value_name = "PATH")]
    kml: Option<PathBuf>,

    /// Also write the route as GeoJSON to this file
    #[arg(long, value_name = "PATH")]
    geojson: Option<PathBuf>,

    /// Enable debugging messages
    #[arg(short, long)]
    verbose: bool,
}

/// Log to stderr so stdout carries only the route.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, defaulting
/// to info.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = PlannerConfig::new(cli.km_per_day);
    config.validate()?;

    let LoadOutcome { database, skipped } = load_database(&cli.database)?;
    if !skipped.is_empty() {
        warn!(skipped = skipped.len(), "Some database rows could not be read");
    }

    let mut waypoints = Vec::with_capacity(cli.stops.len() + 2);
    waypoints.push(database.resolve(&cli.start)?);
    for stop in &cli.stops {
        waypoints.push(database.resolve(stop)?);
    }
    waypoints.push(database.resolve(&cli.finish)?);

    let planner = RoutePlanner::new(&database, &config);
    let itinerary = planner.plan_itinerary(&waypoints)?;
    let stops = itinerary.stops();

    info!(
        days = itinerary.days(),
        distance_km = itinerary.total_distance_km().round(),
        "Found route"
    );
    print!("{}", render_text(stops.iter().copied()));

    if let Some(path) = &cli.kml {
        let title = format!("{} to {}", waypoints[0], waypoints[waypoints.len() - 1]);
        write_file(path, &render_kml(&title, stops.iter().copied())?)?;
        info!(path = %path.display(), "Wrote KML");
    }

    if let Some(path) = &cli.geojson {
        write_file(path, &render_geojson(stops.iter().copied())?)?;
        info!(path = %path.display(), "Wrote GeoJSON");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
