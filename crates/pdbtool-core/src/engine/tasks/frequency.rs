use crate::core::models::atom::AtomRecord;
use crate::core::models::record_set::RecordSet;
use std::collections::BTreeMap;
use tracing::instrument;

/// Occurrence counts keyed by a record field, iterated in ascending key order.
pub type Frequencies = BTreeMap<String, usize>;

fn count_by<F>(records: &RecordSet, key: F) -> Frequencies
where
    F: Fn(&AtomRecord) -> &str,
{
    let mut counts = Frequencies::new();
    for record in records {
        *counts.entry(key(record).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Number of atom records per element symbol.
#[instrument(skip_all, name = "atomfreq_task")]
pub fn element_frequencies(records: &RecordSet) -> Frequencies {
    count_by(records, |r| r.element.as_str())
}

/// Number of atom records per residue name.
///
/// Every atom of a residue counts, so a three-atom `ALA` contributes 3.
#[instrument(skip_all, name = "resfreq_task")]
pub fn residue_frequencies(records: &RecordSet) -> Frequencies {
    count_by(records, |r| r.res_name.as_str())
}
