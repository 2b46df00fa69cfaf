use super::atom::{AtomRecord, ResidueKey};

/// The immutable collection of atom records read from one structure file.
///
/// A `RecordSet` is built once by the reader and then only borrowed. It keeps
/// file order, which is also the order queries observe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<AtomRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<AtomRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AtomRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AtomRecord> {
        self.records.iter()
    }

    /// Yields every atom of the given residue instance, in file order.
    pub fn residue_atoms<'a>(
        &'a self,
        key: &'a ResidueKey,
    ) -> impl Iterator<Item = &'a AtomRecord> + 'a {
        self.records.iter().filter(move |r| r.belongs_to(key))
    }
}

impl FromIterator<AtomRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = AtomRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a AtomRecord;
    type IntoIter = std::slice::Iter<'a, AtomRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
