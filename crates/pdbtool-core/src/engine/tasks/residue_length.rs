use crate::core::models::atom::ResidueKey;
use crate::core::models::record_set::RecordSet;
use crate::core::utils::geometry::max_pairwise_distance;
use nalgebra::Point3;
use tracing::{instrument, trace};

/// Spatial extent of one residue instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueExtent {
    pub key: ResidueKey,
    /// Largest distance between any two of the residue's atoms, in Angstroms.
    pub max_distance: f64,
}

/// Measures the residue identified by `key`, or `None` when no atom matches.
#[instrument(skip(records), fields(residue = %key.res_name, seq = key.res_seq))]
pub fn residue_extent(records: &RecordSet, key: &ResidueKey) -> Option<ResidueExtent> {
    let positions: Vec<Point3<f64>> = records.residue_atoms(key).map(|r| r.position).collect();
    if positions.is_empty() {
        return None;
    }
    trace!(atoms = positions.len(), "Scanning atom pairs.");
    Some(ResidueExtent {
        key: key.clone(),
        max_distance: max_pairwise_distance(&positions),
    })
}
