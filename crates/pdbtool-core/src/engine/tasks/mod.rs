//! Query computations over a record set.
//!
//! Each task returns a typed result; rendering to text lives in
//! [`crate::engine::report`].

pub mod frequency;
pub mod residue_length;
pub mod threshold;
