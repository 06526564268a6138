//! Extraction against a saved copy of the source page layout.

use std::path::Path;

use casewatch::extract::extract_snapshot;
use casewatch::Snapshot;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
}

#[test]
fn reads_headline_totals_from_saved_page() {
    let html = fixture("latest_cases.html");
    assert_eq!(
        extract_snapshot(&html).unwrap(),
        Snapshot::new(80_824, 3_189)
    );
}

#[test]
fn layout_change_is_reported_not_panicked() {
    let html = fixture("latest_cases.html").replace("mvp-content-main", "content");
    assert!(extract_snapshot(&html).is_err());
}
