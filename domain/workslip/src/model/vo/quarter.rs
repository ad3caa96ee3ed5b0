use chrono::{Datelike, NaiveDate};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// Calendar quarter of a service date.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive, ToPrimitive,
)]
pub enum Quarter {
    #[default]
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::First, Quarter::Second, Quarter::Third, Quarter::Fourth];

    pub fn from_month(month: u32) -> Self {
        match month {
            1..=3 => Self::First,
            4..=6 => Self::Second,
            7..=9 => Self::Third,
            _ => Self::Fourth,
        }
    }

    /// Quarter of a `YYYY-MM-DD` date; an empty or unreadable date falls in
    /// the first quarter.
    pub fn from_date(date: &str) -> Self {
        NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map(|el| Self::from_month(el.month()))
            .unwrap_or_default()
    }

    pub fn from_number(number: i64) -> Option<Self> {
        Self::from_i64(number)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::First => "First Quarter (Jan, Feb, Mar)",
            Self::Second => "Second Quarter (Apr, May, Jun)",
            Self::Third => "Third Quarter (Jul, Aug, Sep)",
            Self::Fourth => "Fourth Quarter (Oct, Nov, Dec)",
        }
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.number())
    }
}
