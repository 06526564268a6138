use std::fmt;
use std::str::FromStr;

use crate::error::WatchError;

/// Cumulative case and death totals observed at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub cases: u64,
    pub deaths: u64,
}

/// Signed change between two snapshots. Negative when the source revises downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delta {
    pub cases: i64,
    pub deaths: i64,
}

impl Snapshot {
    pub fn new(cases: u64, deaths: u64) -> Self {
        Self { cases, deaths }
    }

    pub fn delta_from(&self, baseline: &Snapshot) -> Delta {
        Delta {
            cases: diff(self.cases, baseline.cases),
            deaths: diff(self.deaths, baseline.deaths),
        }
    }
}

fn diff(current: u64, previous: u64) -> i64 {
    (current as i128 - previous as i128).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

impl Delta {
    /// At least one total went up.
    pub fn is_increase(&self) -> bool {
        self.cases > 0 || self.deaths > 0
    }
}

/// On-disk form: `<cases>,<deaths>`.
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.cases, self.deaths)
    }
}

impl FromStr for Snapshot {
    type Err = WatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(',');
        let (Some(cases), Some(deaths), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(WatchError::Parse(format!(
                "expected '<cases>,<deaths>', got {s:?}"
            )));
        };

        let parse = |field: &str, name: &str| {
            field
                .trim()
                .parse::<u64>()
                .map_err(|e| WatchError::Parse(format!("invalid {name} {field:?}: {e}")))
        };

        Ok(Snapshot {
            cases: parse(cases, "cases")?,
            deaths: parse(deaths, "deaths")?,
        })
    }
}
