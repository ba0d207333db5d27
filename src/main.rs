use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use config::Config;
use day_range::collect_rates;
use log::info;
use rate_source::PrivatBankClient;

mod api_response;
mod config;
mod day_range;
mod error;
mod exchange_rate;
mod logging;
mod rate_source;
mod storage;

/// Fetch PrivatBank EUR and USD exchange rates for the last few days.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of days to fetch exchange rates including today
    #[arg(allow_negative_numbers = true)]
    num_days: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    logging::init(&config.error_log)
        .with_context(|| format!("Can't open log file {}", config.error_log.display()))?;

    let today = Local::now().date_naive();
    let source = PrivatBankClient::new(config.api_url.as_str());
    let report = collect_rates(&source, today, args.num_days).await;

    info!(
        "Collected {} of {} days, {} skipped",
        report.records.len(),
        args.num_days.max(0),
        report.failures.len()
    );

    for record in &report.records {
        println!("{}", record);
    }

    storage::save_to_file(&config.output_file, &report.records)
        .with_context(|| format!("Can't write {}", config.output_file.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_day_count() {
        let args = Args::try_parse_from(["privat_rates", "5"]).unwrap();
        assert_eq!(args.num_days, 5);
    }

    #[test]
    fn accepts_negative_day_count() {
        let args = Args::try_parse_from(["privat_rates", "-2"]).unwrap();
        assert_eq!(args.num_days, -2);
    }

    #[test]
    fn day_count_is_required() {
        assert!(Args::try_parse_from(["privat_rates"]).is_err());
        assert!(Args::try_parse_from(["privat_rates", "three"]).is_err());
    }
}
