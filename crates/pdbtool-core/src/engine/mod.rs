//! # Query Engine
//!
//! Turns a command token and its positional arguments into a rendered
//! [`report::Report`]. Parsing and validation ([`command`]) always complete
//! before any computation ([`tasks`]) starts, so a rejected command never
//! produces partial output.

pub mod command;
pub mod config;
pub mod error;
pub mod help;
pub mod query;
pub mod report;
pub mod tasks;
