use crate::core::models::atom::AtomRecord;
use crate::core::models::record_set::RecordSet;
use crate::core::utils::numeric::{Tolerance, percentage};
use std::ops::RangeInclusive;
use tracing::instrument;

/// A per-atom measurement that can be compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdField {
    TempFactor,
    Occupancy,
}

impl ThresholdField {
    /// Accepted threshold values, bounds included.
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            ThresholdField::TempFactor => 0.0..=100.0,
            ThresholdField::Occupancy => 0.0..=1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThresholdField::TempFactor => "Temperature factor",
            ThresholdField::Occupancy => "Occupancy",
        }
    }

    pub fn value(&self, record: &AtomRecord) -> f64 {
        match self {
            ThresholdField::TempFactor => record.temp_factor,
            ThresholdField::Occupancy => record.occupancy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Below,
    At,
    Above,
}

impl Bucket {
    /// Values within tolerance of the threshold are `At`, whichever side they fall on.
    pub fn classify(value: f64, threshold: f64, tolerance: &Tolerance) -> Self {
        if tolerance.is_close(value, threshold) {
            Bucket::At
        } else if value < threshold {
            Bucket::Below
        } else {
            Bucket::Above
        }
    }
}

/// Counts of records below, at and above a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSummary {
    pub field: ThresholdField,
    pub threshold: f64,
    pub below: usize,
    pub at: usize,
    pub above: usize,
}

impl ThresholdSummary {
    pub fn total(&self) -> usize {
        self.below + self.at + self.above
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Below => self.below,
            Bucket::At => self.at,
            Bucket::Above => self.above,
        }
    }

    /// Percentage of all records in `bucket`; zero when there are no records.
    pub fn percentage(&self, bucket: Bucket) -> f64 {
        percentage(self.count(bucket), self.total())
    }
}

/// Partitions every record into exactly one bucket relative to `threshold`.
#[instrument(skip(records, tolerance))]
pub fn classify(
    records: &RecordSet,
    field: ThresholdField,
    threshold: f64,
    tolerance: &Tolerance,
) -> ThresholdSummary {
    let mut summary = ThresholdSummary {
        field,
        threshold,
        below: 0,
        at: 0,
        above: 0,
    };
    for record in records {
        match Bucket::classify(field.value(record), threshold, tolerance) {
            Bucket::Below => summary.below += 1,
            Bucket::At => summary.at += 1,
            Bucket::Above => summary.above += 1,
        }
    }
    summary
}
