use clap::Parser;
use georegions::regions::Regions;
use georegions::resolution::{coerce_resolution, parse_resolution, LevelKind, Resolution};
use georegions::{GeoError, GeocodingService, RegionQuery, RegionTable};
use std::sync::Arc;

/// Georegions — resolve place names into geographic regions.
///
/// Sends the given names to a geocoding service and prints the reconciled
/// table: one row per (query, candidate) pair, in query order, duplicates
/// preserved.
///
/// Examples:
///   georegions --url http://localhost:3012/regions "united states" rus
///   georegions --url $GEO_URL --level state Texas Bavaria --centroids
///   georegions --url $GEO_URL --level country usa --boundaries country_high
///   georegions --url $GEO_URL --level city Springfield --limits --json
#[derive(Parser)]
#[command(name = "georegions", version, about, long_about = None)]
struct Cli {
    /// Place names to resolve. Duplicates are kept as separate rows.
    #[arg(required = true)]
    names: Vec<String>,

    /// Geocoding service endpoint URL.
    #[arg(long)]
    url: String,

    /// Administrative level: city, county, state, country or world.
    #[arg(long, default_value = "country", value_parser = parse_level)]
    level: LevelKind,

    /// Narrowing context applied to every query (e.g. a parent region).
    #[arg(long)]
    scope: Option<String>,

    /// Fetch centroid coordinates.
    #[arg(long)]
    centroids: bool,

    /// Fetch bounding rectangles.
    #[arg(long)]
    limits: bool,

    /// Fetch boundary geometries at the given resolution
    /// (named form like "country_high", or a numeric code 1-15).
    #[arg(long, value_parser = parse_resolution_arg)]
    boundaries: Option<Resolution>,

    /// Print rows as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn parse_level(s: &str) -> Result<LevelKind, String> {
    s.parse().map_err(|e: GeoError| e.to_string())
}

fn parse_resolution_arg(s: &str) -> Result<Resolution, String> {
    let parsed = match s.parse::<i64>() {
        Ok(code) => coerce_resolution(code),
        Err(_) => parse_resolution(s),
    };
    parsed.map_err(|e| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let queries: Vec<RegionQuery> = cli
        .names
        .iter()
        .map(|name| {
            let query = RegionQuery::new(name);
            match &cli.scope {
                Some(scope) => query.with_scope(scope),
                None => query,
            }
        })
        .collect();

    let service = Arc::new(GeocodingService::new(&cli.url));
    let regions = Regions::geocode(service, cli.level, queries).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let table = fetch_table(&cli, &regions).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if cli.json {
        match serde_json::to_string_pretty(&table) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", table);
    }
}

fn fetch_table(cli: &Cli, regions: &Regions) -> Result<RegionTable, GeoError> {
    if let Some(resolution) = cli.boundaries {
        return regions.boundaries(resolution);
    }
    if cli.limits {
        return regions.limits();
    }
    if cli.centroids {
        return regions.centroids();
    }
    Ok(regions.to_table())
}
