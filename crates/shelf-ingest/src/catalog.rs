use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use shelf_model::ProductRecord;

use crate::error::{IngestError, Result};

/// Read a catalog file holding either a top-level JSON array of records or
/// newline-delimited JSON objects.
pub fn read_catalog(path: &Path) -> Result<Vec<ProductRecord>> {
    let raw = fs::read_to_string(path)?;
    let records = parse_catalog(&raw)?;
    debug!(path = %path.display(), records = records.len(), "catalog parsed");
    Ok(records)
}

/// Parse catalog text. A leading `[` selects array form; anything else is
/// treated as NDJSON, one object per non-blank line.
pub fn parse_catalog(raw: &str) -> Result<Vec<ProductRecord>> {
    if raw.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(raw)?);
    }
    let mut records = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| IngestError::JsonLine {
            line: index + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Drop exact duplicate rows, keeping the first occurrence. Returns the
/// deduplicated batch and the number of rows dropped.
pub fn dedupe_catalog(records: Vec<ProductRecord>) -> (Vec<ProductRecord>, usize) {
    let before = records.len();
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(before);
    for record in records {
        if seen.insert(record.dedup_key()) {
            kept.push(record);
        }
    }
    let dropped = before - kept.len();
    if dropped > 0 {
        debug!(dropped, "duplicate catalog rows removed");
    }
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_array_form() {
        let records = parse_catalog(
            r#"[
                {"product_name":"Demi Bra","total_sizes":["32B"]},
                {"product_name":"Thong","total_sizes":"S, M"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].total_sizes, vec!["S", "M"]);
    }

    #[test]
    fn parses_ndjson_form_skipping_blank_lines() {
        let raw = concat!(
            "{\"product_name\":\"Demi Bra\"}\n",
            "\n",
            "{\"product_name\":\"Thong\",\"rating\":4.1}\n",
        );
        let records = parse_catalog(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].rating, Some(4.1));
    }

    #[test]
    fn ndjson_errors_carry_the_line_number() {
        let raw = "{\"product_name\":\"Demi Bra\"}\nnot json\n";
        let err = parse_catalog(raw).unwrap_err();
        match err {
            IngestError::JsonLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", r#"[{"product_name":"Teddy"}]"#).unwrap();
        let records = read_catalog(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name.as_deref(), Some("Teddy"));
    }

    #[test]
    fn dedupe_keeps_first_of_equal_rows() {
        let records = parse_catalog(
            r#"[
                {"product_name":"Demi Bra","rating":4.0},
                {"product_name":"Demi Bra","rating":4.0},
                {"product_name":"Demi Bra","rating":4.5}
            ]"#,
        )
        .unwrap();
        let (kept, dropped) = dedupe_catalog(records);
        assert_eq!(kept.len(), 2);
        assert_eq!(dropped, 1);
    }
}
