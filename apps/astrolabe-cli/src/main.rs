mod input;

use anyhow::Context;
use astrolabe::ephemeris::GeoLocation;
use astrolabe::{analyze_compatibility, forecast_week, SwissEphemerisAdapter};
use astrolabe_config::{load_config_from, load_config_or_default, AstrolabeConfig};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use input::{parse_time, BirthSpec};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Config file (default: configs/astrolabe.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Swiss Ephemeris data directory; overrides the config.
    #[arg(long, global = true)]
    ephemeris_path: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct PersonArgs {
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    date: NaiveDate,

    /// Local birth time, HH:MM or HH:MM:SS.
    #[arg(long, value_parser = parse_time)]
    time: chrono::NaiveTime,

    /// Birth place, looked up in the configured places.
    #[arg(long)]
    place: String,

    /// IANA timezone, e.g. Europe/Paris. Skips the zone lookup.
    #[arg(long)]
    timezone: Option<String>,

    /// Latitude; with --lon and --timezone the place is not looked up at all.
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
}

impl PersonArgs {
    fn spec(&self) -> BirthSpec {
        BirthSpec {
            date: self.date,
            time: self.time,
            place: self.place.clone(),
            timezone: self.timezone.clone(),
            location: self.lat.zip(self.lon).map(|(lat, lon)| GeoLocation { lat, lon }),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Natal chart: positions, houses, aspects.
    Chart(PersonArgs),

    /// Seven-day transit forecast against a natal chart.
    Forecast {
        #[command(flatten)]
        person: PersonArgs,

        /// First day of the forecast, YYYY-MM-DD.
        #[arg(long)]
        start: NaiveDate,
    },

    /// Compatibility of two people.
    Compat {
        /// DATE,TIME,PLACE[,TIMEZONE]
        #[arg(long)]
        first: BirthSpec,

        /// DATE,TIME,PLACE[,TIMEZONE]
        #[arg(long)]
        second: BirthSpec,
    },
}

fn load(args: &Args) -> anyhow::Result<AstrolabeConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config_or_default()?,
    };
    if let Some(path) = &args.ephemeris_path {
        config.ephemeris_path = Some(path.clone());
    }
    Ok(config)
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load(&args)?;
    let provider =
        SwissEphemerisAdapter::new(config.ephemeris_path.clone(), &config.ephemeris_settings())
            .context("Swiss Ephemeris is not available")?;
    let gazetteer = config.gazetteer();
    let chart_settings = config.chart_settings();

    match &args.command {
        Command::Chart(person) => {
            let chart = person.spec().chart(&gazetteer, &provider, &chart_settings)?;
            emit(&chart, args.pretty)
        }
        Command::Forecast { person, start } => {
            let chart = person.spec().chart(&gazetteer, &provider, &chart_settings)?;
            let forecast = forecast_week(
                &provider,
                &chart.positions,
                *start,
                &config.transit_settings(),
            )?;
            log::info!(
                "{} transits between {} and {}",
                forecast.events().count(),
                forecast.start,
                forecast.end
            );
            emit(&forecast, args.pretty)
        }
        Command::Compat { first, second } => {
            let a = first
                .chart(&gazetteer, &provider, &chart_settings)
                .context("first person")?;
            let b = second
                .chart(&gazetteer, &provider, &chart_settings)
                .context("second person")?;
            let result = analyze_compatibility(&a, &b)?;
            emit(&result, args.pretty)
        }
    }
}
