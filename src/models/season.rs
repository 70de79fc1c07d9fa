use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Month (1-based) at which a new season starts.
pub const SEASON_CUTOVER_MONTH: u32 = 6;

/// A competitive cycle covering `[start, stop)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: i32,
    pub start: i32,
    pub stop: i32,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.stop)
    }
}

/// Start and stop years of the season running at `now`.
///
/// Before June we are in the last part of the season that began the
/// previous year; from June on a new season has started.
pub fn season_years_at(now: DateTime<Utc>) -> (i32, i32) {
    let year = now.year();
    if now.month() < SEASON_CUTOVER_MONTH {
        (year - 1, year)
    } else {
        (year, year + 1)
    }
}
