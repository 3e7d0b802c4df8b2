//! Parsing of `;`-delimited camera data into [`CameraRecord`]s.
//!
//! The `camera` column mixes an identifier and a location description with
//! inconsistent separators (`UTR-CM-552 Neude rijbaan`,
//! `UTR-CM-540-Catharijnesingel`). [`split_code_and_name`] handles the
//! structured shape and falls back to a first-space split for anything else.

use std::io::Read;
use std::sync::LazyLock;

use camdb_core::{CameraRecord, RawRow};
use csv::StringRecord;
use regex::Regex;

use crate::error::StoreError;

static CODE_AND_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<code>[A-Za-z]+(?:-[A-Za-z]+)*-[0-9]+)(?:\s+|-\s*)(?P<name>.*)$")
        .expect("valid code/name regex")
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid number regex"));

const ERROR_MARKER: &str = "ERROR";

/// Returns `false` for rows that must never become records: a blank
/// `camera` field, or one starting with the `ERROR` marker in any case.
#[must_use]
pub fn is_valid_row(row: &RawRow) -> bool {
    let camera = row.camera.trim_start();
    if camera.is_empty() {
        return false;
    }
    !camera
        .get(..ERROR_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ERROR_MARKER))
}

/// Parses one raw row into a record, or `None` when the row is filtered out.
#[must_use]
pub fn parse_row(row: &RawRow) -> Option<CameraRecord> {
    if !is_valid_row(row) {
        return None;
    }

    let raw = row.camera.trim();
    let (code, name) = split_code_and_name(raw);
    let number = extract_number(&code);

    if number == 0 {
        tracing::warn!(code = %code, "no numeric camera number extracted from code");
    }

    Some(CameraRecord {
        number,
        code,
        name,
        latitude: row.latitude.clone(),
        longitude: row.longitude.clone(),
    })
}

/// Splits trimmed camera text into `(code, name)`.
#[must_use]
pub fn split_code_and_name(raw: &str) -> (String, String) {
    if let Some(caps) = CODE_AND_NAME.captures(raw) {
        return (
            caps["code"].trim().to_string(),
            caps["name"].trim().to_string(),
        );
    }

    tracing::debug!(raw, "fallback split used for camera text");
    match raw.split_once(' ') {
        Some((code, name)) => (code.to_string(), name.trim().to_string()),
        None => (raw.to_string(), String::new()),
    }
}

/// First run of decimal digits in `code`, or `0` when there is none or it
/// does not fit in a `u32`.
#[must_use]
pub fn extract_number(code: &str) -> u32 {
    NUMBER
        .find(code)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Header positions of the columns we care about. Any of them may be absent.
#[derive(Debug, Default)]
struct ColumnIndex {
    camera: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |wanted: &str| {
            headers.iter().position(|header| {
                header
                    .trim_start_matches('\u{feff}')
                    .trim()
                    .eq_ignore_ascii_case(wanted)
            })
        };

        Self {
            camera: find("camera"),
            latitude: find("latitude"),
            longitude: find("longitude"),
        }
    }

    fn raw_row(&self, record: &StringRecord) -> RawRow {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };

        RawRow {
            camera: field(self.camera),
            latitude: field(self.latitude),
            longitude: field(self.longitude),
        }
    }
}

/// Reads a whole `;`-delimited document and returns its records in source
/// order.
///
/// Rows the reader cannot decode are logged and skipped. Filtered rows
/// (blank or `ERROR`) are dropped before parsing.
///
/// # Errors
///
/// Returns [`StoreError::Csv`] if the header row cannot be read.
pub fn parse_document<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<CameraRecord>, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|source| StoreError::Csv {
        source_name: source_name.to_string(),
        source,
    })?;
    let columns = ColumnIndex::from_headers(headers);

    if columns.camera.is_none() {
        tracing::warn!(
            source = source_name,
            "no camera column in header; every row will be discarded"
        );
    }

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        match result {
            Ok(record) => rows.push(columns.raw_row(&record)),
            Err(e) => {
                tracing::warn!(
                    source = source_name,
                    line = e.position().map(csv::Position::line),
                    error = %e,
                    "skipping malformed camera row"
                );
            }
        }
    }

    let valid: Vec<RawRow> = rows.into_iter().filter(is_valid_row).collect();
    tracing::info!(
        source = source_name,
        rows = valid.len(),
        "parsing valid camera rows"
    );

    Ok(valid.iter().filter_map(parse_row).collect())
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
