use crate::core::components::filter_store::FilterStore;
use crate::core::components::loader::FilterLoader;
use crate::core::errors::FilterStoreError;
use crate::core::execution::config::FilterStoreConfig;
use crate::core::execution::trace::{TickRecord, Trace};
use crate::core::types::{Phase, TickInputs, Word};
use log::debug;
use std::collections::VecDeque;

/// Clocks a filter store one tick at a time
///
/// Stimulus is queued ahead of time and consumed one entry per cycle; once the
/// queue runs dry the engine drives idle ticks. Every cycle yields a
/// [`TickRecord`], which is also kept in the trace when tracing is enabled.
pub struct CycleEngine {
    store: FilterStore,
    current_cycle: u64,
    stimulus: VecDeque<TickInputs>,
    trace: Option<Trace>,
}

impl CycleEngine {
    pub fn new(config: FilterStoreConfig) -> Result<Self, FilterStoreError> {
        Ok(Self::from_store(FilterStore::new(config)?))
    }

    pub fn from_store(store: FilterStore) -> Self {
        let trace = store.config().trace_enabled.then(Trace::new);
        Self {
            store,
            current_cycle: 0,
            stimulus: VecDeque::new(),
            trace,
        }
    }

    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FilterStore {
        &mut self.store
    }

    /// Number of cycles executed so far
    pub fn current_cycle(&self) -> u64 {
        self.current_cycle
    }

    /// Queue inputs for a future cycle
    pub fn schedule(&mut self, inputs: TickInputs) {
        self.stimulus.push_back(inputs);
    }

    pub fn schedule_all<I: IntoIterator<Item = TickInputs>>(&mut self, inputs: I) {
        self.stimulus.extend(inputs);
    }

    /// Cycles of queued stimulus not yet consumed
    pub fn pending(&self) -> usize {
        self.stimulus.len()
    }

    /// Queue the write sequence for a flat filter and configure its size
    ///
    /// Returns the logical size that was set.
    pub fn load_filter(&mut self, words: &[Word]) -> Result<usize, FilterStoreError> {
        let loader = FilterLoader::new(self.store.num_banks(), self.store.depth());
        let load = loader.plan(words)?;
        self.store.set_size(load.size)?;
        debug!(
            "cycle engine: queued {} filter writes, size {}",
            load.commands.len(),
            load.size
        );
        self.schedule_all(load.commands.into_iter().map(TickInputs::write));
        Ok(load.size)
    }

    /// Execute one cycle using the next queued stimulus
    pub fn cycle(&mut self) -> Result<TickRecord, FilterStoreError> {
        let inputs = self.stimulus.pop_front().unwrap_or_default();
        self.cycle_with(&inputs)
    }

    /// Execute one cycle with explicit inputs, bypassing the queue
    pub fn cycle_with(&mut self, inputs: &TickInputs) -> Result<TickRecord, FilterStoreError> {
        let cycle = self.current_cycle + 1;
        debug!("=== Filter Cycle {} ===", cycle);

        let before = self.store.sequencer_state();
        let addresses = self.store.read_addresses();

        self.store.tick(inputs)?;
        self.current_cycle = cycle;

        let record = TickRecord {
            cycle,
            phase: Phase::classify(before.running, inputs),
            position: before.position,
            running: before.running,
            addresses,
            values_out: self.store.values_out(),
        };
        if let Some(trace) = self.trace.as_mut() {
            trace.push(record.clone());
        }
        Ok(record)
    }

    /// Execute `cycles` cycles from the queue
    pub fn run_cycles(&mut self, cycles: u64) -> Result<(), FilterStoreError> {
        for _ in 0..cycles {
            self.cycle()?;
        }
        Ok(())
    }

    /// Drain all queued stimulus
    pub fn run_pending(&mut self) -> Result<(), FilterStoreError> {
        while !self.stimulus.is_empty() {
            self.cycle()?;
        }
        Ok(())
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Hand over the recorded trace, leaving an empty one in its place
    pub fn take_trace(&mut self) -> Option<Trace> {
        self.trace.as_mut().map(std::mem::take)
    }
}
