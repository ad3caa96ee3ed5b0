use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static SO_NUMBER: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^(\d{2})-(\d+)$"));

/// Business identifier `YY-NNNNNN`: two-digit year and a per-year sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoNumber {
    pub year: u8,
    pub count: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("`{value}` is not an SO number of the form YY-NNNNNN.")]
pub struct ParseSoNumberError {
    pub value: String,
}

impl SoNumber {
    /// Two-digit form of a calendar year.
    pub fn short_year(year: i32) -> u8 {
        year.rem_euclid(100) as u8
    }

    /// The number following `previous` within `year`. The sequence restarts
    /// when `previous` is missing, unreadable or from another year.
    pub fn next_after(previous: Option<&str>, year: i32) -> Self {
        let year = Self::short_year(year);
        let count = previous
            .and_then(|el| el.parse::<SoNumber>().ok())
            .filter(|el| el.year == year)
            .map(|el| el.count)
            .unwrap_or(0);
        Self {
            year,
            count: count.saturating_add(1),
        }
    }
}

impl FromStr for SoNumber {
    type Err = ParseSoNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSoNumberError {
            value: s.to_owned(),
        };
        let regex = SO_NUMBER.as_ref().map_err(|_| err())?;
        let captures = regex.captures(s.trim()).ok_or_else(err)?;
        let year = captures[1].parse::<u8>().map_err(|_| err())?;
        let count = captures[2].parse::<u32>().map_err(|_| err())?;
        Ok(Self { year, count })
    }
}

impl std::fmt::Display for SoNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:06}", self.year, self.count)
    }
}
