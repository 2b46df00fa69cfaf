use nalgebra::Point3;

/// Identifies one residue instance within a structure.
///
/// Two atom records belong to the same residue instance exactly when their
/// residue name, chain identifier and residue sequence number all agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    /// Three-letter residue name (e.g., "GLU"), upper-cased.
    pub res_name: String,
    /// Chain identifier, upper-cased. `None` when the column is blank.
    pub chain_id: Option<char>,
    /// Residue sequence number as written in the file.
    pub res_seq: isize,
}

/// A single `ATOM` line of a PDB file, decoded column by column.
///
/// Records are produced by [`crate::core::io::pdb::PdbFile`] and never change
/// afterwards; every query reads them through a shared
/// [`RecordSet`](super::record_set::RecordSet).
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Atom serial number (columns 7-11).
    pub serial: isize,
    /// Atom name with surrounding blanks removed (e.g., "CA").
    pub atom_name: String,
    /// Alternate location indicator. Records kept in a record set never carry one.
    pub alt_loc: Option<char>,
    /// Upper-cased residue name.
    pub res_name: String,
    /// Upper-cased chain identifier, `None` when blank.
    pub chain_id: Option<char>,
    /// Residue sequence number.
    pub res_seq: isize,
    /// Orthogonal coordinates in Angstroms.
    pub position: Point3<f64>,
    /// Fractional occupancy, conventionally within `[0, 1]`.
    pub occupancy: f64,
    /// Isotropic temperature factor, conventionally within `[0, 100]`.
    pub temp_factor: f64,
    /// Element symbol normalized to title case (e.g., "Fe"), empty when absent.
    pub element: String,
}

impl AtomRecord {
    #[cfg(test)]
    fn residue_key(&self) -> ResidueKey {
        ResidueKey {
            res_name: self.res_name.clone(),
            chain_id: self.chain_id,
            res_seq: self.res_seq,
        }
    }

    /// Checks membership in a residue instance without allocating a key.
    pub fn belongs_to(&self, key: &ResidueKey) -> bool {
        self.res_seq == key.res_seq
            && self.chain_id == key.chain_id
            && self.res_name == key.res_name
    }
}

/// Normalizes an element symbol to title case: first letter upper, rest lower.
pub fn normalize_element(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) fn sample_record(
    res_name: &str,
    chain_id: char,
    res_seq: isize,
    position: Point3<f64>,
) -> AtomRecord {
    AtomRecord {
        serial: 1,
        atom_name: "CA".to_string(),
        alt_loc: None,
        res_name: res_name.to_string(),
        chain_id: Some(chain_id),
        res_seq,
        position,
        occupancy: 1.0,
        temp_factor: 20.0,
        element: "C".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_element_title_cases_symbols() {
        assert_eq!(normalize_element("FE"), "Fe");
        assert_eq!(normalize_element("c"), "C");
        assert_eq!(normalize_element("nA"), "Na");
        assert_eq!(normalize_element(""), "");
    }

    #[test]
    fn residue_key_collects_identity_fields() {
        let record = sample_record("GLU", 'A', 764, Point3::origin());
        let key = record.residue_key();
        assert_eq!(key.res_name, "GLU");
        assert_eq!(key.chain_id, Some('A'));
        assert_eq!(key.res_seq, 764);
        assert!(record.belongs_to(&key));
    }

    #[test]
    fn belongs_to_rejects_any_mismatched_field() {
        let record = sample_record("GLU", 'A', 764, Point3::origin());
        let mut key = record.residue_key();
        key.chain_id = Some('B');
        assert!(!record.belongs_to(&key));

        let mut key = record.residue_key();
        key.res_seq = 765;
        assert!(!record.belongs_to(&key));

        let mut key = record.residue_key();
        key.res_name = "GLN".to_string();
        assert!(!record.belongs_to(&key));
    }
}
