//! Line-oriented segmentation of serial-numbered legacy documents.
//!
//! The source documents are flat text blobs extracted from PDFs: a column
//! header, then numbered lines of the form `N.  <year>  <details>`, with
//! long details wrapping onto unnumbered continuation lines. Segmentation is
//! the converter's only structured caller; everything it extracts is routed
//! through [`convert`] field by field.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::convert::convert;

/// A numbered record, fields already converted to Unicode Devanagari.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub serial: u32,
    pub year: String,
    pub description: String,
}

// Column headers of the source documents, in the legacy encoding:
// "Øekad" (serial no.) and "fooj.k" (details).
const FILLER_MARKERS: &[&str] = &["Øekad", "fooj.k"];

lazy_static! {
    static ref RECORD_START: Regex = Regex::new(r"^(\d+)\.\s+(.*)$").unwrap();
    static ref FIELD_SEPARATOR: Regex = Regex::new(r"\t|\s{2,}").unwrap();
}

struct RawRecord {
    serial: u32,
    year: String,
    description: String,
}

impl RawRecord {
    fn finish(self) -> Record {
        Record {
            serial: self.serial,
            year: convert(&self.year),
            description: convert(&self.description),
        }
    }
}

/// Splits `raw` into numbered records.
///
/// A line beginning with `N.` starts a record. The remainder of that line is
/// split on a tab or a run of two or more whitespace characters; the first
/// field is the year, the rest join into the description. Lines without a
/// serial prefix continue the current description, except filler lines
/// containing a column-header token, which are skipped. Text before the
/// first record start is discarded. Each field passes through [`convert`]
/// once, when its record is finalized.
pub fn segment(raw: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = RECORD_START.captures(line) {
            // A serial too large for u32 is not a record start; the line
            // continues the previous description instead.
            if let Ok(serial) = caps[1].parse::<u32>() {
                if let Some(done) = current.take() {
                    records.push(done.finish());
                }
                let mut fields = FIELD_SEPARATOR
                    .split(&caps[2])
                    .filter(|field| !field.is_empty());
                let year = fields.next().unwrap_or("").to_string();
                let description = fields.join(" ");
                current = Some(RawRecord {
                    serial,
                    year,
                    description,
                });
                continue;
            }
        }

        if FILLER_MARKERS.iter().any(|marker| line.contains(marker)) {
            continue;
        }

        if let Some(record) = current.as_mut() {
            if !record.description.is_empty() {
                record.description.push(' ');
            }
            record.description.push_str(line);
        }
    }
    if let Some(done) = current.take() {
        records.push(done.finish());
    }

    log::debug!("segmented {} records", records.len());
    records
}
