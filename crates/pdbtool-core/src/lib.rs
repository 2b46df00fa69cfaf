//! # pdbtool Core Library
//!
//! Parses the `ATOM` records of a fixed-column PDB file and answers
//! analytical queries about them.
//!
//! - **[`core`]: The Foundation.** Atom records, the immutable record set, the
//!   fixed-column reader and small geometry/numeric helpers.
//! - **[`engine`]: The Query Engine.** Command grammar and validation, the query
//!   computations, and text rendering of their results.
//! - **[`workflows`]: The Public API.** A [`workflows::session::Session`] binds a
//!   record set to a configuration and handles one command line at a time.

pub mod core;
pub mod engine;
pub mod workflows;
