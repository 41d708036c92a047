use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use panchanga_rs::{
    AyanamsaModel, Config, GeoLocation, MasaConvention, Options, Panchanga, PanchangaError,
    UtcTime, match_kundli, personal_balam,
};

#[derive(Parser)]
#[command(name = "panchanga", about = "Hindu panchangam calculator", version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Civil offset in minutes east of UTC (default: from longitude)
    #[arg(long = "tz", global = true, allow_hyphen_values = true)]
    timezone_offset_minutes: Option<i32>,
    #[arg(long, global = true, value_enum)]
    ayanamsa: Option<AyanamsaArg>,
    #[arg(long, global = true, value_enum)]
    masa: Option<MasaArg>,
    /// Log to stderr: -v debug, -vv trace
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Elevation in meters
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    alt: f64,
}

impl Place {
    fn location(self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lon, self.alt)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchangam for an instant
    Panchang {
        /// UTC instant (RFC 3339, YYYY-MM-DDThh:mm:ss or YYYY-MM-DD)
        #[arg(long, value_parser = parse_utc)]
        at: UtcTime,
        #[command(flatten)]
        place: Place,
    },
    /// Birth chart
    Kundli {
        /// Birth instant, UTC
        #[arg(long, value_parser = parse_utc)]
        at: UtcTime,
        #[command(flatten)]
        place: Place,
    },
    /// Tarabalam, Chandrabalam and Chandrashtama of an instant for a birth
    Balam {
        #[arg(long, value_parser = parse_utc)]
        at: UtcTime,
        #[command(flatten)]
        place: Place,
        /// Birth instant, UTC
        #[arg(long, value_parser = parse_utc)]
        birth: UtcTime,
        #[arg(long, allow_hyphen_values = true)]
        birth_lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        birth_lon: f64,
    },
    /// Ashtakoot compatibility of two births
    Match {
        #[arg(long, value_parser = parse_utc)]
        boy: UtcTime,
        #[arg(long, allow_hyphen_values = true)]
        boy_lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        boy_lon: f64,
        #[arg(long, value_parser = parse_utc)]
        girl: UtcTime,
        #[arg(long, allow_hyphen_values = true)]
        girl_lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        girl_lon: f64,
    },
    /// Day and night choghadiya for a civil date
    Choghadiya {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
        #[command(flatten)]
        place: Place,
    },
    /// Upcoming sankrantis
    Sankranti {
        #[arg(long, value_parser = parse_utc)]
        from: UtcTime,
        /// Number of ingresses to list
        #[arg(long, default_value = "1")]
        count: usize,
    },
    /// Festivals on every date of a range
    Festivals {
        #[arg(long, value_parser = parse_date)]
        from: NaiveDate,
        #[arg(long, value_parser = parse_date)]
        to: NaiveDate,
        #[command(flatten)]
        place: Place,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AyanamsaArg {
    Lahiri,
    Krishnamurti,
    Raman,
    FaganBradley,
    Yukteshwar,
    SuryaSiddhanta,
}

impl From<AyanamsaArg> for AyanamsaModel {
    fn from(a: AyanamsaArg) -> Self {
        match a {
            AyanamsaArg::Lahiri => Self::Lahiri,
            AyanamsaArg::Krishnamurti => Self::Krishnamurti,
            AyanamsaArg::Raman => Self::Raman,
            AyanamsaArg::FaganBradley => Self::FaganBradley,
            AyanamsaArg::Yukteshwar => Self::Yukteshwar,
            AyanamsaArg::SuryaSiddhanta => Self::SuryaSiddhanta,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MasaArg {
    Amanta,
    Purnimanta,
}

impl From<MasaArg> for MasaConvention {
    fn from(m: MasaArg) -> Self {
        match m {
            MasaArg::Amanta => Self::Amanta,
            MasaArg::Purnimanta => Self::Purnimanta,
        }
    }
}

fn parse_utc(s: &str) -> Result<UtcTime, String> {
    s.parse::<UtcTime>().map_err(|e| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn options(cli: &Cli) -> Options {
    Options {
        ayanamsa_model: cli.ayanamsa.map(Into::into),
        timezone_offset_minutes: cli.timezone_offset_minutes,
        masa_convention: cli.masa.map(Into::into),
    }
}

fn engine(cli: &Cli) -> Result<Panchanga, PanchangaError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    // compute_kundli takes no per-call options.
    Panchanga::new(config.with_options(&options(cli)))
}

fn emit<T: Serialize>(value: &T) -> Result<(), PanchangaError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| PanchangaError::InvalidInput(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn run(cli: &Cli) -> Result<(), PanchangaError> {
    let engine = engine(cli)?;
    let options = options(cli);
    match &cli.command {
        Commands::Panchang { at, place } => {
            emit(&engine.compute(at, &place.location(), &options)?)
        }
        Commands::Kundli { at, place } => emit(&engine.compute_kundli(at, &place.location())?),
        Commands::Balam {
            at,
            place,
            birth,
            birth_lat,
            birth_lon,
        } => {
            let chart =
                engine.compute_kundli(birth, &GeoLocation::new(*birth_lat, *birth_lon, 0.0))?;
            let report = engine.compute(at, &place.location(), &options)?;
            emit(&personal_balam(&report, &chart))
        }
        Commands::Match {
            boy,
            boy_lat,
            boy_lon,
            girl,
            girl_lat,
            girl_lon,
        } => {
            let b = engine.compute_kundli(boy, &GeoLocation::new(*boy_lat, *boy_lon, 0.0))?;
            let g = engine.compute_kundli(girl, &GeoLocation::new(*girl_lat, *girl_lon, 0.0))?;
            emit(&match_kundli(&b, &g))
        }
        Commands::Choghadiya { date, place } => {
            emit(&engine.choghadiya(*date, &place.location(), &options)?)
        }
        Commands::Sankranti { from, count } => {
            let mut events = Vec::with_capacity(*count);
            let mut cursor = *from;
            for _ in 0..*count {
                let event = engine.next_sankranti(&cursor, &options)?;
                cursor = UtcTime::from_jd_utc(event.jd + 1.0)
                    .map_err(|e| PanchangaError::InvalidInput(e.to_string()))?;
                events.push(event);
            }
            emit(&events)
        }
        Commands::Festivals { from, to, place } => {
            emit(&engine.festivals_between(*from, *to, &place.location(), &options)?)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!("panchanga {}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_panchang_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "panchanga", "panchang", "--at", "2026-02-15T06:30:00Z", "--lat", "40.7", "--lon",
            "-74.0", "--tz", "-300",
        ])
        .unwrap();
        assert_eq!(cli.timezone_offset_minutes, Some(-300));
        match cli.command {
            Commands::Panchang { at, place } => {
                assert_eq!((at.day, at.hour, at.minute), (15, 6, 30));
                assert_eq!(place.lon, -74.0);
                assert_eq!(place.alt, 0.0);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn global_options_map_through() {
        let cli = Cli::try_parse_from([
            "panchanga", "-v", "--ayanamsa", "fagan-bradley", "--masa", "purnimanta",
            "sankranti", "--from", "2026-01-01", "--count", "3",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let o = options(&cli);
        assert_eq!(o.ayanamsa_model, Some(AyanamsaModel::FaganBradley));
        assert_eq!(o.masa_convention, Some(MasaConvention::Purnimanta));
        assert_eq!(o.timezone_offset_minutes, None);
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(
            Cli::try_parse_from([
                "panchanga", "festivals", "--from", "2026-02-30", "--to", "2026-03-01", "--lat",
                "0", "--lon", "0",
            ])
            .is_err()
        );
        assert!(parse_utc("yesterday").is_err());
    }

    #[test]
    fn parses_balam() {
        let cli = Cli::try_parse_from([
            "panchanga", "balam", "--at", "2026-02-15", "--lat", "28.6", "--lon", "77.2",
            "--birth", "1990-07-15T04:30:00Z", "--birth-lat", "19.07", "--birth-lon", "72.87",
        ])
        .unwrap();
        match cli.command {
            Commands::Balam {
                birth, birth_lat, ..
            } => {
                assert_eq!((birth.year, birth.hour), (1990, 4));
                assert_eq!(birth_lat, 19.07);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
