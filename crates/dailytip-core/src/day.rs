//! Calendar-day keys used to gate re-selection of the daily tip.
//!
//! Keys are ISO dates (`%Y-%m-%d`) computed under an explicit
//! [`DayBoundary`], never through locale-dependent formatting.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Where one day ends and the next begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// Midnight in the machine's local time zone.
    #[default]
    Local,
    /// Midnight UTC.
    Utc,
}

impl DayBoundary {
    pub fn as_str(self) -> &'static str {
        match self {
            DayBoundary::Local => "local",
            DayBoundary::Utc => "utc",
        }
    }

    /// Calendar date of `instant` under this boundary.
    pub fn date_of(self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            DayBoundary::Local => instant.with_timezone(&Local).date_naive(),
            DayBoundary::Utc => instant.date_naive(),
        }
    }

    /// Day key for `instant`.
    pub fn key_at(self, instant: DateTime<Utc>) -> DayKey {
        DayKey::from_date(self.date_of(instant))
    }

    /// Day key for right now.
    pub fn today(self) -> DayKey {
        self.key_at(Utc::now())
    }
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayBoundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(DayBoundary::Local),
            "utc" => Ok(DayBoundary::Utc),
            other => Err(format!("unknown day boundary '{other}' (expected local or utc)")),
        }
    }
}

/// String identifying one calendar day, e.g. `2024-01-01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DAY_KEY_FORMAT).to_string())
    }

    /// Parse a `%Y-%m-%d` key.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .ok()
            .map(Self::from_date)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DayKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
