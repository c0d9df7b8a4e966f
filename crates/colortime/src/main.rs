use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colortime_core::{parse_date, today, Age, ColorTime, ColorTimeConfig};

/// Print the color of a calendar day, interpolated from a day-to-color palette.
#[derive(Parser, Debug)]
#[command(name = "colortime")]
#[command(about = "Color of the day from a day-of-year palette")]
struct Args {
    /// JSON palette, e.g. {"0": "#00f", "128": "#f00", "agingFn": "greyscale", "maxAgeYears": 10}
    #[arg(short, long)]
    config: PathBuf,

    /// chrono format for the dates, e.g. "%b %d, %Y" (common formats are tried when omitted)
    #[arg(short, long)]
    format: Option<String>,

    /// Age every date by this many years
    #[arg(long, conflicts_with = "since_today")]
    aged_years: Option<f64>,

    /// Age every date by the years elapsed between it and today
    #[arg(long)]
    since_today: bool,

    /// Dates to color (defaults to today)
    dates: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let config = ColorTimeConfig::load(&args.config)
        .with_context(|| format!("Failed to load palette {}", args.config.display()))?;
    log::info!("Loaded {} anchor days", config.anchors().len());
    let color_time = ColorTime::new(config);

    let age = if args.since_today {
        Age::Since(today())
    } else {
        Age::Years(args.aged_years.unwrap_or(0.0))
    };

    let dates = if args.dates.is_empty() {
        vec!["today".to_string()]
    } else {
        args.dates
    };

    for input in &dates {
        let date = parse_date(input, args.format.as_deref())
            .with_context(|| format!("Failed to read date {:?}", input))?;
        let color = color_time.color_on(date, age)?;
        if dates.len() > 1 {
            println!("{}\t{}", date, color);
        } else {
            println!("{}", color);
        }
    }

    Ok(())
}
