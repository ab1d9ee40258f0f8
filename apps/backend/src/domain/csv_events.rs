//! Uploaded event files: one event per row, optional `description` header.

use csv::{ReaderBuilder, StringRecord, Trim};

const HEADER: &str = "description";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub description: String,
}

fn field(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse event descriptions in file order.
///
/// If the first row has a `description` column, later rows contribute that
/// column; otherwise every row contributes its first column. Blank lines,
/// blank fields and unreadable rows are skipped, so this never fails.
pub fn parse_events(text: &str) -> Vec<ParsedEvent> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records().filter_map(Result::ok);

    let Some(first) = records.next() else {
        return Vec::new();
    };

    let (column, mut events) = match first.iter().position(|h| h.trim() == HEADER) {
        Some(idx) => (idx, Vec::new()),
        None => (0, field(&first, 0).into_iter().collect::<Vec<_>>()),
    };

    events.extend(records.filter_map(|record| field(&record, column)));

    events
        .into_iter()
        .map(|description| ParsedEvent { description })
        .collect()
}
