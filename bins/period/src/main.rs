//! Genfleet period lookup.
//!
//! Prints the Bikram Sambat date, fiscal year and fiscal-year month ranges
//! for a day. With no argument the day is today; `YYYY-MM-DD` is read as
//! Gregorian and `YYYY/MM/DD` as BS.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use genfleet_core::calendar::{
    BsDate, CalendarError, FiscalYear, bs_to_gregorian, format_both_dates, gregorian_to_bs,
    gregorian_to_bs_strict, is_tabulated,
};
use genfleet_shared::{AppConfig, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Resolves the command-line argument to a Gregorian day.
fn resolve_day(arg: Option<&str>, today: NaiveDate, strict: bool) -> anyhow::Result<NaiveDate> {
    let Some(raw) = arg else {
        return Ok(today);
    };

    if raw.contains('/') {
        let bs: BsDate = raw.parse().with_context(|| format!("invalid BS date '{raw}'"))?;
        if strict && !is_tabulated(bs.year()) {
            return Err(CalendarError::UntabulatedYear(bs.year()).into());
        }
        return Ok(bs_to_gregorian(bs));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD or YYYY/MM/DD"))
}

/// Lines printed for `day`.
fn describe(day: NaiveDate, strict: bool) -> anyhow::Result<Vec<String>> {
    let bs = if strict {
        gregorian_to_bs_strict(day)?
    } else {
        gregorian_to_bs(day)
    };
    let fiscal_year = FiscalYear::of_bs(bs);
    let range = fiscal_year.range();

    let mut lines = vec![
        format!("Date:        {}", format_both_dates(day)),
        format!("BS:          {bs}"),
        format!("Fiscal year: {fiscal_year} ({range})"),
        String::new(),
    ];
    for period in fiscal_year.months() {
        let marker = if period.range().contains(day) { '*' } else { ' ' };
        lines.push(format!("{marker} {:<16} {}", period.to_string(), period.range()));
    }
    Ok(lines)
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let arg = std::env::args().nth(1);
    let strict = config.calendar.strict;
    let day = resolve_day(arg.as_deref(), Local::now().date_naive(), strict)?;
    info!(%day, strict, "resolving period");

    for line in describe(day, strict)? {
        println!("{line}");
    }

    Ok(())
}
