//! In-memory representation of parsed structure data.

pub mod atom;
pub mod record_set;
