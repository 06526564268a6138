use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::snapshot::{Delta, Snapshot};

/// Characters MarkdownV2 treats as markup. `*` is deliberately absent so the
/// bold markers in the template survive.
pub const RESERVED: &str = "_[]()~`>#+-=|{}.!";

const HEADER: &str = "❗*Coronavirus Updates*❗";
const TAG_LINE: &str = "@CoronavirusStatNews";

/// Message ready for the channel: already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    /// Deliver without an audible alert.
    pub silent: bool,
}

/// Prefix every reserved character with a backslash.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        if RESERVED.contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// en-US style grouping: 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Delta with an explicit sign; zero renders as "+0".
pub fn signed(n: i64) -> String {
    if n >= 0 {
        format!("+{n}")
    } else {
        n.to_string()
    }
}

/// Render the update text (unescaped).
pub fn format_message<Tz>(snapshot: &Snapshot, delta: &Delta, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "{HEADER}\n\n\
         *Total Cases: {} ({})*\n\
         *Total Deaths: {} ({})*\n\
         *Last Updated: {}*\n\n\
         {TAG_LINE}",
        group_thousands(snapshot.cases),
        signed(delta.cases),
        group_thousands(snapshot.deaths),
        signed(delta.deaths),
        at.format("%-m/%-d/%Y %H:%M:%S GMT%z"),
    )
}
