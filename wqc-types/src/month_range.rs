use crate::error::{Result, WqcError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const FIRST_MONTH: u32 = 1;
pub const LAST_MONTH: u32 = 12;

/// An inclusive month range `[start, end]` with `1 <= start <= end <= 12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRange {
    start: u32,
    end: u32,
}

impl MonthRange {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start < FIRST_MONTH || end > LAST_MONTH || start > end {
            return Err(WqcError::InvalidMonthRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// January through December.
    pub fn full_year() -> Self {
        Self {
            start: FIRST_MONTH,
            end: LAST_MONTH,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, month: u32) -> bool {
        self.start <= month && month <= self.end
    }

    pub fn months(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl Default for MonthRange {
    fn default() -> Self {
        Self::full_year()
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for MonthRange {
    type Err = WqcError;

    /// Parses `"3-7"` or a single month such as `"5"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WqcError::InvalidMonthRange { start: 0, end: 0 };
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());
        match s.split_once('-') {
            Some((a, b)) => MonthRange::new(parse(a)?, parse(b)?),
            None => {
                let month = parse(s)?;
                MonthRange::new(month, month)
            }
        }
    }
}
