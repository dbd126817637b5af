use crate::core::types::{Phase, Word};
use serde::{Deserialize, Serialize};

/// What the block looked like across one tick
///
/// `phase`, `position`, `running` and `addresses` describe the tick as it was
/// evaluated; `values_out` is what the lanes drive after the tick committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub cycle: u64,
    pub phase: Phase,
    pub position: usize,
    pub running: bool,
    pub addresses: Vec<Option<usize>>,
    pub values_out: Vec<Word>,
}

/// Cycle-by-cycle record of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    records: Vec<TickRecord>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TickRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TickRecord> {
        self.records.last()
    }

    /// Values driven on one lane, tick by tick
    pub fn lane(&self, bank: usize) -> Vec<Word> {
        self.records
            .iter()
            .filter_map(|r| r.values_out.get(bank).copied())
            .collect()
    }

    /// Lane values streamed since `start`, first word first
    ///
    /// The priming record is included: its `values_out` is sampled after the
    /// tick commits and already carries the word for position 0.
    pub fn streamed_lane(&self, bank: usize) -> Vec<Word> {
        self.records
            .iter()
            .filter(|r| r.phase != Phase::Idle)
            .filter_map(|r| r.values_out.get(bank).copied())
            .collect()
    }

    /// First tick whose record differs from `reference`, if any
    pub fn first_divergence(&self, reference: &Trace) -> Option<u64> {
        self.records
            .iter()
            .zip(reference.records.iter())
            .find(|(ours, theirs)| ours != theirs)
            .map(|(ours, _)| ours.cycle)
            .or_else(|| {
                let common = self.records.len().min(reference.records.len());
                self.records
                    .get(common)
                    .or_else(|| reference.records.get(common))
                    .map(|r| r.cycle)
            })
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
