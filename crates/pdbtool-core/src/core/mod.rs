//! # Core Module
//!
//! Stateless building blocks shared by the query engine.
//!
//! - **Records** ([`models`]) - `AtomRecord`, `ResidueKey` and the immutable `RecordSet`
//! - **File I/O** ([`io`]) - the fixed-column PDB reader
//! - **Utilities** ([`utils`]) - coordinate geometry and floating-point comparison

pub mod io;
pub mod models;
pub mod utils;
