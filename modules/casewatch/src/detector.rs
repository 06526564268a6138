use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::message::{escape_markdown, format_message, OutboundMessage};
use crate::snapshot::{Delta, Snapshot};

/// A jump of this many cases or deaths is announced audibly.
pub const SILENT_THRESHOLD: i64 = 200;

/// An increase worth announcing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub snapshot: Snapshot,
    pub delta: Delta,
    pub message: OutboundMessage,
}

pub fn is_silent(delta: &Delta) -> bool {
    !(delta.cases >= SILENT_THRESHOLD || delta.deaths >= SILENT_THRESHOLD)
}

/// Compare `observed` to `baseline`. Returns `None` unless at least one total
/// strictly increased.
pub fn detect<Tz>(baseline: &Snapshot, observed: Snapshot, at: &DateTime<Tz>) -> Option<Update>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let delta = observed.delta_from(baseline);
    if !delta.is_increase() {
        return None;
    }

    let text = escape_markdown(&format_message(&observed, &delta, at));
    Some(Update {
        snapshot: observed,
        delta,
        message: OutboundMessage {
            text,
            silent: is_silent(&delta),
        },
    })
}
