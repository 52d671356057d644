//! Folding 3-hour forecast readings into daily summaries.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

use crate::model::{DailySummary, ForecastEntry, round_half_up};

/// Number of day cards shown in the forecast tab.
pub const MAX_FORECAST_DAYS: usize = 5;

/// Groups `entries` by calendar day in `tz` and summarizes each day.
///
/// Days keep the order in which they first appear in `entries`, and only the
/// first [`MAX_FORECAST_DAYS`] are returned. Within a day the condition code
/// and the description are picked independently as the most frequent value;
/// on a tie the value seen first wins. Entries with a timestamp chrono cannot
/// represent are skipped.
pub fn aggregate_daily<Tz: TimeZone>(entries: &[ForecastEntry], tz: &Tz) -> Vec<DailySummary> {
    let mut days: Vec<DayBucket<'_>> = Vec::new();

    for entry in entries {
        let Some(utc) = DateTime::from_timestamp(entry.timestamp_unix, 0) else {
            tracing::debug!(ts = entry.timestamp_unix, "skipping forecast entry with invalid timestamp");
            continue;
        };
        let date = utc.with_timezone(tz).date_naive();

        let idx = match days.iter().position(|d| d.date == date) {
            Some(idx) => idx,
            None => {
                days.push(DayBucket::new(date));
                days.len() - 1
            }
        };
        days[idx].push(entry);
    }

    days.into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(DayBucket::summarize)
        .collect()
}

/// Short German date label in the `de-DE` style, e.g. `Mo., 14. Okt.`
pub fn german_date_label(date: NaiveDate) -> String {
    format!(
        "{}, {}. {}",
        german_weekday(date.weekday()),
        date.day(),
        german_month(date.month())
    )
}

fn german_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo.",
        Weekday::Tue => "Di.",
        Weekday::Wed => "Mi.",
        Weekday::Thu => "Do.",
        Weekday::Fri => "Fr.",
        Weekday::Sat => "Sa.",
        Weekday::Sun => "So.",
    }
}

fn german_month(month: u32) -> &'static str {
    match month {
        1 => "Jan.",
        2 => "Feb.",
        3 => "März",
        4 => "Apr.",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "Aug.",
        9 => "Sept.",
        10 => "Okt.",
        11 => "Nov.",
        _ => "Dez.",
    }
}

struct DayBucket<'a> {
    date: NaiveDate,
    temps: Vec<f64>,
    codes: Vec<i64>,
    descriptions: Vec<&'a str>,
}

impl<'a> DayBucket<'a> {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            temps: Vec::new(),
            codes: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    fn push(&mut self, entry: &'a ForecastEntry) {
        self.temps.push(entry.temperature_c);
        self.codes.push(entry.condition_code);
        self.descriptions.push(entry.condition_description.as_str());
    }

    fn summarize(self) -> DailySummary {
        // A bucket is only created together with its first entry.
        let mean = self.temps.iter().sum::<f64>() / self.temps.len() as f64;

        DailySummary {
            date_label: german_date_label(self.date),
            average_temperature_c: round_half_up(mean),
            modal_condition_code: mode(&self.codes).unwrap_or_default(),
            modal_condition_description: mode(&self.descriptions)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Most frequent value; the first one encountered wins a tie.
fn mode<T: PartialEq + Copy>(values: &[T]) -> Option<T> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((*value, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((value, n));
        }
    }
    best.map(|(value, _)| value)
}
