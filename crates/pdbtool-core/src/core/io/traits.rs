use crate::core::models::record_set::RecordSet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading structure file formats into a record set.
///
/// Implementors handle format-specific parsing; opening files and buffering
/// are provided here.
pub trait StructureFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a record set from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be read or a record cannot be decoded.
    /// No partial record set is ever returned.
    fn read_from(reader: &mut impl BufRead) -> Result<RecordSet, Self::Error>;

    /// Reads a record set from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<RecordSet, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
