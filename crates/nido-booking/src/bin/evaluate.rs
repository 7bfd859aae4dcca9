//! # Booking Evaluation CLI
//!
//! Evaluates one booking request and prints the outcome as JSON on stdout.
//!
//! ## Usage
//! ```bash
//! # Demo catalog, Feb 1-3 2024, two guests
//! cargo run -p nido-booking --bin nido-evaluate -- 1 --from 2024-02-01 --to 2024-02-03 --guests 2
//!
//! # Against a seeded SQLite store
//! cargo run -p nido-booking --bin nido-evaluate -- 1 --db ./nido_dev.db --from 2024-02-14 --to 2024-02-16
//! ```

use chrono::NaiveDate;
use nido_booking::logging::{bootstrap_subscriber, init_tracing};
use nido_booking::{BookingError, BookingEvaluator, BookingResult, NidoConfig, RepositoryBackend};
use nido_core::validation::parse_date;
use nido_core::{DateRange, MIN_GUESTS};
use std::env;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    property_id: String,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    guests: i64,
    config_path: Option<PathBuf>,
    db_path: Option<PathBuf>,
}

fn print_help() {
    println!("Nido Booking Evaluator");
    println!();
    println!("Usage: nido-evaluate <PROPERTY_ID> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --from <DATE>        Check-in date, YYYY-MM-DD");
    println!("  --to <DATE>          Check-out date, YYYY-MM-DD");
    println!("  -g, --guests <N>     Requested guests (default: 1, clamped to the listing)");
    println!("  -c, --config <PATH>  Config file (default: platform config dir nido.toml)");
    println!("  -d, --db <PATH>      Use a SQLite property store at PATH");
    println!("  -h, --help           Show this help message");
}

/// Parses arguments. `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> BookingResult<Option<CliArgs>> {
    let mut parsed = CliArgs {
        guests: i64::from(MIN_GUESTS),
        ..CliArgs::default()
    };
    let mut property_id = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || {
            args.get(i + 1)
                .ok_or_else(|| BookingError::InvalidArgument(format!("{} requires a value", flag)))
        };

        match flag {
            "--from" => {
                parsed.from = Some(parse_date(value()?)?);
                i += 1;
            }
            "--to" => {
                parsed.to = Some(parse_date(value()?)?);
                i += 1;
            }
            "--guests" | "-g" => {
                let raw = value()?;
                parsed.guests = raw.parse().map_err(|_| {
                    BookingError::InvalidArgument(format!("guests must be an integer, got '{}'", raw))
                })?;
                i += 1;
            }
            "--config" | "-c" => {
                parsed.config_path = Some(PathBuf::from(value()?));
                i += 1;
            }
            "--db" | "-d" => {
                parsed.db_path = Some(PathBuf::from(value()?));
                i += 1;
            }
            "--help" | "-h" => return Ok(None),
            other if other.starts_with('-') => {
                return Err(BookingError::InvalidArgument(format!("Unknown option '{}'", other)));
            }
            other => {
                if property_id.replace(other.to_string()).is_some() {
                    return Err(BookingError::InvalidArgument(
                        "Only one property id may be given".into(),
                    ));
                }
            }
        }
        i += 1;
    }

    parsed.property_id = property_id
        .ok_or_else(|| BookingError::InvalidArgument("Missing <PROPERTY_ID>".into()))?;
    Ok(Some(parsed))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let Some(cli) = parse_args(&args)? else {
        print_help();
        return Ok(());
    };

    // Config loading logs before the configured subscriber exists
    let mut config = tracing::subscriber::with_default(bootstrap_subscriber()?, || {
        NidoConfig::load(cli.config_path.clone())
    })?;
    if let Some(path) = cli.db_path.clone() {
        config.repository.backend = RepositoryBackend::Sqlite;
        config.repository.database_path = Some(path);
    }

    init_tracing(&config.logging)?;
    info!(
        backend = %config.backend(),
        property_id = %cli.property_id,
        "Evaluating booking request"
    );

    let evaluator = BookingEvaluator::from_config(&config).await?;
    let range = DateRange::new(cli.from, cli.to);
    let outcome = evaluator
        .evaluate(&cli.property_id, &range, cli.guests)
        .await
        .map_err(BookingError::from)?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("nido-evaluate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_full_request() {
        let cli = parse_args(&args(&["1", "--from", "2024-02-01", "--to", "2024-02-03", "-g", "3"]))
            .unwrap()
            .unwrap();

        assert_eq!(cli.property_id, "1");
        assert_eq!(cli.from, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(cli.to, NaiveDate::from_ymd_opt(2024, 2, 3));
        assert_eq!(cli.guests, 3);
    }

    #[test]
    fn test_defaults_to_one_guest() {
        let cli = parse_args(&args(&["1"])).unwrap().unwrap();
        assert_eq!(cli.guests, 1);
        assert_eq!(cli.from, None);
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), None);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["1", "--from", "02/01/2024"])).is_err());
        assert!(parse_args(&args(&["1", "--guests"])).is_err());
        assert!(parse_args(&args(&["1", "2"])).is_err());
        assert!(parse_args(&args(&["1", "--verbose"])).is_err());
    }
}
