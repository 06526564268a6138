use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, WatchError};
use crate::snapshot::Snapshot;

/// Paragraphs inside the article body.
const PARAGRAPH_SELECTOR: &str = "div #mvp-content-main p";

/// Integers with optional comma thousands separators ("79,000", "2,870", "12").
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+(?:,[0-9]+)*").unwrap());

static PARAGRAPHS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(PARAGRAPH_SELECTOR).unwrap());

/// Pull the running totals out of the source page.
///
/// Walks the article paragraphs in document order and looks at their direct
/// `<strong>` children. The first bold run holding at least two numbers wins:
/// the first number is cases, the second deaths, the rest are ignored. A run
/// whose first two numbers do not fit a `u64` is unusable and skipped.
pub fn extract_snapshot(html: &str) -> Result<Snapshot> {
    let document = Html::parse_document(html);
    let mut last_error = None;

    for paragraph in document.select(&PARAGRAPHS) {
        for bold in bold_children(paragraph) {
            let text: String = bold.text().collect();
            match leading_totals(&text) {
                Ok(Some(snapshot)) => return Ok(snapshot),
                Ok(None) => {}
                Err(e) => {
                    debug!(error = %e, "Skipping bold run");
                    last_error = Some(e);
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        WatchError::Parse("no bold run with case and death totals found".to_string())
    }))
}

/// First two numbers of `text` as (cases, deaths). `None` when there are fewer than two.
fn leading_totals(text: &str) -> Result<Option<Snapshot>> {
    let mut numbers = NUMBER_RE.find_iter(text).map(|m| parse_number(m.as_str()));
    match (numbers.next(), numbers.next()) {
        (Some(cases), Some(deaths)) => Ok(Some(Snapshot {
            cases: cases?,
            deaths: deaths?,
        })),
        _ => Ok(None),
    }
}

fn parse_number(raw: &str) -> Result<u64> {
    raw.replace(',', "")
        .parse()
        .map_err(|e| WatchError::Parse(format!("number {raw:?}: {e}")))
}

fn bold_children<'a>(paragraph: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    paragraph
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "strong")
}

/// Every number in `text`, left to right, with separators stripped.
/// Fails on the first number too large for a `u64`.
pub fn extract_numbers(text: &str) -> Result<Vec<u64>> {
    NUMBER_RE
        .find_iter(text)
        .map(|m| parse_number(m.as_str()))
        .collect()
}
