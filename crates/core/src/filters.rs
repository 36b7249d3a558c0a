//! Tryout list filters and their wire serialization
//!
//! Dates are picked at day granularity. A range is widened to whole local
//! days (start at 00:00:00.000, end at 23:59:59.999) and sent as UTC
//! instants in `toISOString` form, e.g. `2024-01-05T00:00:00.000Z`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::api::{FilterParams, TryoutQuery};
use crate::error::FilterError;

/// Format of the date picker values.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Filter inputs, as typed. A field counts as set when it has non-blank content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TryoutFilters {
    pub title: String,
    pub category: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
}

impl TryoutFilters {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.category, &self.start_date, &self.end_date]
            .iter()
            .all(|v| v.trim().is_empty())
    }

    /// Check the filters before searching.
    ///
    /// # Errors
    ///
    /// `InvalidDate` for an unparseable date, `StartDateInFuture` when the
    /// start date is after `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), FilterError> {
        if let Some(start) = non_blank(&self.start_date).map(parse_day).transpose()? {
            if start > today {
                return Err(FilterError::StartDateInFuture);
            }
        }
        non_blank(&self.end_date).map(parse_day).transpose()?;
        Ok(())
    }

    /// Request shape for these filters, with day bounds resolved in `tz`.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` when a date cannot be parsed or does not exist
    /// in `tz`.
    pub fn to_query<Tz: TimeZone>(&self, tz: &Tz) -> Result<TryoutQuery, FilterError> {
        if self.is_empty() {
            return Ok(TryoutQuery::All);
        }

        let mut params: FilterParams = Vec::with_capacity(4);
        if let Some(title) = non_blank(&self.title) {
            params.push(("title", title.to_string()));
        }
        if let Some(category) = non_blank(&self.category) {
            params.push(("category", category.to_string()));
        }
        if let Some(start) = non_blank(&self.start_date) {
            let instant = start_of_day(parse_day(start)?, tz)?;
            params.push(("startDate", to_iso_instant(&instant)));
        }
        if let Some(end) = non_blank(&self.end_date) {
            let instant = end_of_day(parse_day(end)?, tz)?;
            params.push(("endDate", to_iso_instant(&instant)));
        }
        Ok(TryoutQuery::Filtered(params))
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse a date picker value.
///
/// # Errors
///
/// Returns `FilterError::InvalidDate` if the value is not `YYYY-MM-DD`.
pub fn parse_day(value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT)
        .map_err(|_| FilterError::InvalidDate(value.to_string()))
}

/// 00:00:00.000 local time on `day`.
///
/// # Errors
///
/// Returns `FilterError::NonexistentLocalTime` if `tz` skips that instant.
pub fn start_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, FilterError> {
    local(day, day.and_hms_milli_opt(0, 0, 0, 0), tz, true)
}

/// 23:59:59.999 local time on `day`.
///
/// # Errors
///
/// Returns `FilterError::NonexistentLocalTime` if `tz` skips that instant.
pub fn end_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, FilterError> {
    local(day, day.and_hms_milli_opt(23, 59, 59, 999), tz, false)
}

fn local<Tz: TimeZone>(
    day: NaiveDate,
    naive: Option<NaiveDateTime>,
    tz: &Tz,
    earliest: bool,
) -> Result<DateTime<Tz>, FilterError> {
    let nonexistent = || FilterError::NonexistentLocalTime(day.format(DAY_FORMAT).to_string());
    let naive = naive.ok_or_else(nonexistent)?;
    let resolved = tz.from_local_datetime(&naive);
    let instant = if earliest {
        resolved.earliest()
    } else {
        resolved.latest()
    };
    instant.ok_or_else(nonexistent)
}

/// UTC instant with millisecond precision and a `Z` suffix.
pub fn to_iso_instant<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
