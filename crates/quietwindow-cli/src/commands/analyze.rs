//! Least-busy time commands over a provider payload or the built-in sample.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Args;
use tracing::debug;

use quietwindow_core::{
    best_hour_of_week, best_hours_by_day, best_hours_for_day, day_index, day_name, format_hour,
    render_week_ascii, sample_provider_place, BestTimeResult, Config, HourScore, Place,
    ProviderPlace,
};

/// Where the place data comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PlaceSource {
    /// Provider JSON payload for the place
    #[arg(long)]
    file: Option<PathBuf>,
    /// Use the built-in sample place instead of a file
    #[arg(long)]
    sample: bool,
}

#[derive(Args, Debug)]
pub struct BestArgs {
    #[command(flatten)]
    source: PlaceSource,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub struct DayArgs {
    #[command(flatten)]
    source: PlaceSource,
    /// Day of week (0-6 or sun/mon/tue/wed/thu/fri/sat); defaults to today
    #[arg(long)]
    day: Option<String>,
    /// Number of hours to list
    #[arg(long)]
    count: Option<usize>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub struct WeekArgs {
    #[command(flatten)]
    source: PlaceSource,
    /// Number of hours to list per day
    #[arg(long)]
    count: Option<usize>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    source: PlaceSource,
}

fn parse_day(day_str: &str) -> Option<u8> {
    let lower = day_str.to_lowercase();
    match lower.as_str() {
        "0" | "sun" | "sunday" => Some(0),
        "1" | "mon" | "monday" => Some(1),
        "2" | "tue" | "tuesday" => Some(2),
        "3" | "wed" | "wednesday" => Some(3),
        "4" | "thu" | "thursday" => Some(4),
        "5" | "fri" | "friday" => Some(5),
        "6" | "sat" | "saturday" => Some(6),
        _ => None,
    }
}

fn load_place(source: &PlaceSource, config: &Config) -> Result<Place, Box<dyn std::error::Error>> {
    let offset = config.analysis.raw_first_day_offset;
    let provider: ProviderPlace = match &source.file {
        _ if source.sample => sample_provider_place(),
        Some(path) => {
            debug!(path = %path.display(), "reading provider payload");
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            serde_json::from_str(&content)?
        }
        None => return Err("no place given: pass --file or --sample".into()),
    };
    Ok(Place::from_provider_with_offset(provider, offset)?)
}

fn format_entries(entries: &[HourScore]) -> String {
    entries
        .iter()
        .map(|e| format!("{} ({})", format_hour(e.hour), e.score))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_grid_if_enabled(config: &Config, place: &Place) {
    if config.output.show_grid {
        println!("{}", render_week_ascii(&place.popularity));
    }
}

pub fn best(args: BestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let place = load_place(&args.source, &config)?;
    let result = best_hour_of_week(&place.popularity)?;

    if args.json || config.output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("The least popular time to visit {} is {}", place.name, result);
    print_grid_if_enabled(&config, &place);
    Ok(())
}

pub fn day(args: DayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let place = load_place(&args.source, &config)?;

    let day = match args.day {
        Some(day_str) => parse_day(&day_str).ok_or_else(|| {
            format!(
                "Invalid day: '{}'. Use 0-6 or sun/mon/tue/wed/thu/fri/sat",
                day_str
            )
        })?,
        None => day_index(Local::now().weekday()),
    };
    let count = args.count.unwrap_or(config.analysis.default_count);

    let entries = best_hours_for_day(&place.popularity, day, count)?;

    if args.json || config.output.json {
        let result = BestTimeResult { day, entries };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let name = day_name(day).unwrap_or("?");
    if entries.is_empty() {
        println!("{} is closed on {}", place.name, name);
    } else {
        println!(
            "Least busy hours at {} on {}: {}",
            place.name,
            name,
            format_entries(&entries)
        );
    }
    print_grid_if_enabled(&config, &place);
    Ok(())
}

pub fn week(args: WeekArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let place = load_place(&args.source, &config)?;
    let count = args.count.unwrap_or(config.analysis.default_count);

    let per_day = best_hours_by_day(&place.popularity, count)?;

    if args.json || config.output.json {
        let results: Vec<BestTimeResult> = per_day
            .into_iter()
            .enumerate()
            .map(|(day, entries)| BestTimeResult {
                day: day as u8,
                entries,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Least busy hours at {}:", place.name);
    for (day, entries) in per_day.iter().enumerate() {
        let name = day_name(day as u8).unwrap_or("?");
        if entries.is_empty() {
            println!("  {:<10} closed", name);
        } else {
            println!("  {:<10} {}", name, format_entries(entries));
        }
    }
    print_grid_if_enabled(&config, &place);
    Ok(())
}

pub fn show(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let place = load_place(&args.source, &config)?;

    println!("{place}");
    println!("{}", render_week_ascii(&place.popularity));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_names_and_numbers() {
        assert_eq!(parse_day("0"), Some(0));
        assert_eq!(parse_day("Wed"), Some(3));
        assert_eq!(parse_day("SATURDAY"), Some(6));
        assert_eq!(parse_day("7"), None);
        assert_eq!(parse_day("someday"), None);
    }

    #[test]
    fn test_format_entries() {
        let entries = vec![HourScore::new(9, 23.0), HourScore::new(17, 30.0)];
        assert_eq!(format_entries(&entries), "9AM (23), 5PM (30)");
    }

    #[test]
    fn test_load_sample_place() {
        let source = PlaceSource {
            file: None,
            sample: true,
        };
        let place = load_place(&source, &Config::default()).unwrap();
        assert_eq!(place.name, "Trader Joe's");
    }
}
