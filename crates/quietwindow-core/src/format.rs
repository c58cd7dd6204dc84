//! Human-readable rendering of days, hours and weekly occupancy.

use std::fmt;

use chrono::NaiveTime;

use crate::occupancy::{BestTimeResult, Score, WeekSeries};

/// Day names by canonical index.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Full day name for a canonical index.
pub fn day_name(day: u8) -> Option<&'static str> {
    DAY_NAMES.get(day as usize).copied()
}

/// Hour on a 12-hour clock without padding, e.g. `9AM`, `12PM`.
pub fn format_hour(hour: u8) -> String {
    match NaiveTime::from_hms_opt(u32::from(hour), 0, 0) {
        Some(time) => time.format("%-I%p").to_string(),
        None => format!("{hour}:00"),
    }
}

/// `"Wednesday, 9AM"` when a day is given, `"9AM"` otherwise.
pub fn format_time(hour: u8, day: Option<u8>) -> String {
    match day.and_then(day_name) {
        Some(name) => format!("{name}, {}", format_hour(hour)),
        None => format_hour(hour),
    }
}

impl fmt::Display for BestTimeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best() {
            Some(entry) => write!(f, "{}", format_time(entry.hour, Some(self.day))),
            None => write!(f, "{}", day_name(self.day).unwrap_or("?")),
        }
    }
}

/// Shade character for a busyness score. Closed hours are blank.
fn score_char(score: Score) -> char {
    if score <= 0.0 {
        ' '
    } else if score < 25.0 {
        '░'
    } else if score < 50.0 {
        '▒'
    } else if score < 75.0 {
        '▓'
    } else {
        '█'
    }
}

/// Render the week as an ASCII grid, one row per day.
pub fn render_week_ascii(week: &WeekSeries) -> String {
    let mut output = String::new();

    output.push_str("\nWeekly Occupancy\n");
    output.push_str(&"=".repeat(80));
    output.push('\n');

    if week.is_fully_closed() {
        output.push_str("No open hours in this week.\n");
        return output;
    }

    output.push_str("     ");
    for hour in 0..24 {
        output.push_str(&format!("{:>2} ", hour));
    }
    output.push('\n');

    for (day, series) in week.days().iter().enumerate() {
        let name = DAY_NAMES[day];
        output.push_str(&format!("{:<4} ", &name[..3]));

        for hour in 0..24u8 {
            let c = series.score(hour).map_or(' ', score_char);
            output.push(' ');
            output.push(c);
            output.push(' ');
        }
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&"=".repeat(80));
    output.push('\n');
    output.push_str("Legend: closed ( ) ░ (<25) ▒ (25-49) ▓ (50-74) █ (75+)\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::{normalize, HourScore, RawDay};

    #[test]
    fn test_format_hour_twelve_hour_clock() {
        assert_eq!(format_hour(0), "12AM");
        assert_eq!(format_hour(9), "9AM");
        assert_eq!(format_hour(12), "12PM");
        assert_eq!(format_hour(13), "1PM");
        assert_eq!(format_hour(23), "11PM");
    }

    #[test]
    fn test_format_hour_out_of_range() {
        assert_eq!(format_hour(30), "30:00");
    }

    #[test]
    fn test_format_time_with_and_without_day() {
        assert_eq!(format_time(9, Some(3)), "Wednesday, 9AM");
        assert_eq!(format_time(17, None), "5PM");
        assert_eq!(format_time(17, Some(9)), "5PM");
    }

    #[test]
    fn test_day_name_bounds() {
        assert_eq!(day_name(0), Some("Sunday"));
        assert_eq!(day_name(6), Some("Saturday"));
        assert_eq!(day_name(7), None);
    }

    #[test]
    fn test_best_time_result_display() {
        let result = BestTimeResult {
            day: 2,
            entries: vec![HourScore::new(9, 23.0)],
        };
        assert_eq!(result.to_string(), "Tuesday, 9AM");
    }

    #[test]
    fn test_score_char_bands() {
        assert_eq!(score_char(0.0), ' ');
        assert_eq!(score_char(10.0), '░');
        assert_eq!(score_char(30.0), '▒');
        assert_eq!(score_char(60.0), '▓');
        assert_eq!(score_char(88.0), '█');
    }

    #[test]
    fn test_render_week_ascii() {
        let mut rows: Vec<RawDay> = DAY_NAMES
            .iter()
            .map(|name| RawDay::new(*name, vec![0.0; 24]))
            .collect();
        rows[1].data[9] = 80.0;
        let week = normalize(&rows, 0).unwrap();

        let output = render_week_ascii(&week);
        assert!(output.contains("Weekly Occupancy"));
        assert!(output.contains("Mon"));
        assert!(output.contains('█'));
        assert!(output.contains("Legend"));
    }

    #[test]
    fn test_fractional_scores_use_lowest_band() {
        assert_eq!(score_char(0.0), ' ');
        assert_eq!(score_char(0.5), '░');
        assert_eq!(score_char(24.5), '░');
        assert_eq!(score_char(25.0), '▒');

        let mut rows: Vec<RawDay> = DAY_NAMES
            .iter()
            .map(|name| RawDay::new(*name, vec![0.0; 24]))
            .collect();
        rows[2].data[10] = 0.5;
        let output = render_week_ascii(&normalize(&rows, 0).unwrap());

        assert!(output.contains('░'));
        assert!(output.contains("░ (<25) ▒ (25-49)"));
    }

    #[test]
    fn test_render_closed_week() {
        let rows: Vec<RawDay> = DAY_NAMES
            .iter()
            .map(|name| RawDay::new(*name, vec![0.0; 24]))
            .collect();
        let week = normalize(&rows, 0).unwrap();

        assert!(render_week_ascii(&week).contains("No open hours"));
    }
}
