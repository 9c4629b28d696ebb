use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// India Standard Time is UTC+05:30
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Numbering scope for invoice sequences: two-digit year + two-digit month
/// (`2403` for March 2024).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodKey(String);

impl PeriodKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:02}{:02}", date.year().rem_euclid(100), date.month()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PeriodKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let valid = s.len() == 4
            && s.bytes().all(|b| b.is_ascii_digit())
            && matches!(s[2..].parse::<u32>(), Ok(1..=12));

        if !valid {
            return Err(AppError::validation(
                "period",
                format!("expected YYMM with month 01-12, got '{}'", s),
            ));
        }

        Ok(Self(s.to_string()))
    }
}

/// Calendar date of a UTC instant as seen in India
pub fn utc_to_india_date(utc_time: DateTime<Utc>) -> NaiveDate {
    FixedOffset::east_opt(IST_OFFSET_SECS)
        .map(|ist| utc_time.with_timezone(&ist).date_naive())
        .unwrap_or_else(|| utc_time.date_naive())
}

/// Today's date in India Standard Time
pub fn today_in_india() -> NaiveDate {
    utc_to_india_date(Utc::now())
}

/// Indian financial year label for a date: April 2024 – March 2025 is `2024-25`
pub fn financial_year(date: NaiveDate) -> String {
    let start_year = if date.month() > 3 {
        date.year()
    } else {
        date.year() - 1
    };

    format!("{}-{:02}", start_year, (start_year + 1).rem_euclid(100))
}

/// First and last day of a financial year label such as `2024-25`
pub fn financial_year_bounds(label: &str) -> Result<(NaiveDate, NaiveDate)> {
    let invalid = || {
        AppError::validation(
            "financial_year",
            format!("expected YYYY-YY, got '{}'", label),
        )
    };

    let (start, end) = label.split_once('-').ok_or_else(invalid)?;
    if start.len() != 4 || end.len() != 2 {
        return Err(invalid());
    }

    let start_year: i32 = start.parse().map_err(|_| invalid())?;
    let end_suffix: i32 = end.parse().map_err(|_| invalid())?;
    if (start_year + 1).rem_euclid(100) != end_suffix {
        return Err(invalid());
    }

    let first = NaiveDate::from_ymd_opt(start_year, 4, 1).ok_or_else(invalid)?;
    let last = NaiveDate::from_ymd_opt(start_year + 1, 3, 31).ok_or_else(invalid)?;

    Ok((first, last))
}
