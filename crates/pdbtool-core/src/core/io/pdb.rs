use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{AtomRecord, normalize_element};
use crate::core::models::record_set::RecordSet;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{info, trace};

/// Record tag selecting candidate lines. The trailing blanks are significant.
const ATOM_TAG: &str = "ATOM  ";
/// Zero-based offset of the alternate location indicator.
const ALT_LOC_OFFSET: usize = 16;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty or missing")]
    MissingRequiredField { columns: String },
    #[error("Columns {columns} split a non-ASCII character")]
    NonAscii { columns: String },
}

/// Result of inspecting a single line.
#[derive(Debug, PartialEq)]
enum LineOutcome {
    NotAnAtom,
    AlternateLocation,
    Atom(AtomRecord),
}

/// Returns the text in `[start, end)`, clamped to the line and trimmed.
///
/// Offsets are bytes; a range that cuts through a multi-byte character is an error.
fn slice_and_trim(line: &str, start: usize, end: usize) -> Result<&str, PdbParseErrorKind> {
    let len = line.len();
    line.get(start.min(len)..end.min(len))
        .map(str::trim)
        .ok_or_else(|| PdbParseErrorKind::NonAscii {
            columns: columns(start, end),
        })
}

fn columns(start: usize, end: usize) -> String {
    format!("{}-{}", start + 1, end)
}

fn required_field(line: &str, start: usize, end: usize) -> Result<&str, PdbParseErrorKind> {
    let value = slice_and_trim(line, start, end)?;
    if value.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField {
            columns: columns(start, end),
        });
    }
    Ok(value)
}

fn parse_int(line: &str, start: usize, end: usize) -> Result<isize, PdbParseErrorKind> {
    let value = required_field(line, start, end)?;
    value.parse().map_err(|_| PdbParseErrorKind::InvalidInt {
        columns: columns(start, end),
        value: value.into(),
    })
}

fn parse_float(line: &str, start: usize, end: usize) -> Result<f64, PdbParseErrorKind> {
    let value = required_field(line, start, end)?;
    value.parse().map_err(|_| PdbParseErrorKind::InvalidFloat {
        columns: columns(start, end),
        value: value.into(),
    })
}

fn optional_char(line: &str, offset: usize) -> Result<Option<char>, PdbParseErrorKind> {
    Ok(slice_and_trim(line, offset, offset + 1)?
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase()))
}

fn inspect_line(line: &str) -> Result<LineOutcome, PdbParseErrorKind> {
    if !line.starts_with(ATOM_TAG) {
        return Ok(LineOutcome::NotAnAtom);
    }
    // Lines truncated before the indicator column are still accepted.
    if line
        .as_bytes()
        .get(ALT_LOC_OFFSET)
        .is_some_and(|&b| b != b' ')
    {
        return Ok(LineOutcome::AlternateLocation);
    }

    let serial = parse_int(line, 6, 11)?;
    let res_seq = parse_int(line, 22, 26)?;
    let x = parse_float(line, 30, 38)?;
    let y = parse_float(line, 38, 46)?;
    let z = parse_float(line, 46, 54)?;
    let occupancy = parse_float(line, 54, 60)?;
    let temp_factor = parse_float(line, 60, 66)?;

    Ok(LineOutcome::Atom(AtomRecord {
        serial,
        atom_name: slice_and_trim(line, 12, 16)?.to_string(),
        alt_loc: optional_char(line, ALT_LOC_OFFSET)?,
        res_name: slice_and_trim(line, 17, 20)?.to_ascii_uppercase(),
        chain_id: optional_char(line, 21)?,
        res_seq,
        position: Point3::new(x, y, z),
        occupancy,
        temp_factor,
        element: normalize_element(slice_and_trim(line, 76, 78)?),
    }))
}

/// Decodes a single line into an atom record.
///
/// Returns `Ok(None)` for lines that are not `ATOM` records and for records
/// carrying an alternate location indicator.
pub fn parse_atom_line(line: &str) -> Result<Option<AtomRecord>, PdbParseErrorKind> {
    match inspect_line(line)? {
        LineOutcome::Atom(record) => Ok(Some(record)),
        LineOutcome::NotAnAtom | LineOutcome::AlternateLocation => Ok(None),
    }
}

#[derive(Default)]
struct RecordCollector {
    records: Vec<AtomRecord>,
    alternate_locations: usize,
}

impl RecordCollector {
    fn push(&mut self, line_num: usize, line: &str) -> Result<(), PdbError> {
        match inspect_line(line).map_err(|kind| PdbError::Parse {
            line: line_num,
            kind,
        })? {
            LineOutcome::Atom(record) => self.records.push(record),
            LineOutcome::AlternateLocation => {
                trace!(line = line_num, "Dropping alternate location record.");
                self.alternate_locations += 1;
            }
            LineOutcome::NotAnAtom => {}
        }
        Ok(())
    }

    fn finish(self) -> RecordSet {
        info!(
            records = self.records.len(),
            alternate_locations = self.alternate_locations,
            "Parsed ATOM records."
        );
        RecordSet::new(self.records)
    }
}

/// Parses an in-memory sequence of lines.
///
/// Line numbers in errors are one-based positions within `lines`.
pub fn parse_lines<I, S>(lines: I) -> Result<RecordSet, PdbError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut collector = RecordCollector::default();
    for (idx, line) in lines.into_iter().enumerate() {
        collector.push(idx + 1, line.as_ref())?;
    }
    Ok(collector.finish())
}

/// Reader for the fixed-column PDB format, restricted to `ATOM` records.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<RecordSet, Self::Error> {
        let mut collector = RecordCollector::default();
        for (idx, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            collector.push(idx + 1, &line)?;
        }
        Ok(collector.finish())
    }
}
