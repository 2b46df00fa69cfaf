//! Provides input functionality for molecular structure files.
//!
//! Readers decode a text source into a [`RecordSet`](crate::core::models::record_set::RecordSet)
//! through the [`traits::StructureFile`] interface. Only fixed-column PDB `ATOM`
//! records are understood; every other record type is skipped.

pub mod pdb;
pub mod traits;
