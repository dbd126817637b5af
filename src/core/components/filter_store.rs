use super::demux::WriteDemux;
use super::memory_bank::{BankPorts, MemoryBank};
use super::memory_stats::MemoryStats;
use super::sequencer::{AddressSequencer, SequencerInput, SequencerState};
use super::skew::{ReadCursor, SkewedAddressMapper};
use super::traits::{Cycle, React};
use crate::core::errors::FilterStoreError;
use crate::core::execution::config::{ConcurrencyMode, FilterStoreConfig};
use crate::core::types::{Phase, TickInputs, Word, WriteCommand};
use log::{debug, info, warn};
use rayon::prelude::*;

/// Multi-bank filter weight store feeding a systolic array
///
/// Holds one [`MemoryBank`] per output lane. Every tick each bank is read at
/// its own skewed address derived from the shared sequencer position, and the
/// registered read data is presented on `values_out`. Writes arrive through an
/// always-ready demux and land at the end of the tick.
///
/// All combinational values of a tick are computed from the state as it stood
/// at the start of the tick; banks and sequencer then commit together.
#[derive(Debug, Clone)]
pub struct FilterStore {
    config: FilterStoreConfig,
    banks: Vec<MemoryBank>,
    mappers: Vec<SkewedAddressMapper>,
    sequencer: AddressSequencer,
    demux: WriteDemux,
    size: usize,
}

impl FilterStore {
    /// Build a store with `num_banks` zero-filled banks of `depth` words
    pub fn new(config: FilterStoreConfig) -> Result<Self, FilterStoreError> {
        config.validate()?;

        let banks = (0..config.num_banks)
            .map(|i| MemoryBank::new(i, config.depth))
            .collect();
        let mappers = (0..config.num_banks).map(SkewedAddressMapper::new).collect();

        Ok(Self {
            config,
            banks,
            mappers,
            sequencer: AddressSequencer::new(),
            demux: WriteDemux::new(),
            size: 0,
        })
    }

    pub fn config(&self) -> &FilterStoreConfig {
        &self.config
    }

    pub fn num_banks(&self) -> usize {
        self.banks.len()
    }

    pub fn depth(&self) -> usize {
        self.config.depth
    }

    /// Logical wraparound length currently configured
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn position(&self) -> usize {
        self.sequencer.position()
    }

    pub fn running(&self) -> bool {
        self.sequencer.running()
    }

    pub fn sequencer_state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Register-level phase: `Streaming` once started, `Idle` otherwise
    ///
    /// Never reports [`Phase::Priming`]. Priming is the tick that samples
    /// `start` while idle, so it exists only between registers; use
    /// [`Phase::classify`] on the inputs of a tick, or the phase carried by
    /// trace records, to see it.
    pub fn phase(&self) -> Phase {
        if self.running() {
            Phase::Streaming
        } else {
            Phase::Idle
        }
    }

    /// The write channel never applies backpressure
    pub fn write_ready(&self) -> bool {
        self.demux.ready()
    }

    /// Write commands accepted so far
    pub fn writes_accepted(&self) -> u64 {
        self.demux.accepted()
    }

    /// Set the logical size; only allowed while the sequencer is stopped
    pub fn set_size(&mut self, size: usize) -> Result<(), FilterStoreError> {
        if size > self.depth() {
            return Err(FilterStoreError::SizeExceedsDepth {
                size,
                depth: self.depth(),
            });
        }
        if self.running() {
            return Err(FilterStoreError::SizeChangeWhileRunning);
        }
        debug!("filter store: size {} -> {}", self.size, size);
        self.size = size;
        Ok(())
    }

    /// Registered output of every lane
    pub fn values_out(&self) -> Vec<Word> {
        self.banks.iter().map(MemoryBank::read_data).collect()
    }

    /// Read address each bank is driven with during the coming tick
    pub fn read_addresses(&self) -> Vec<Option<usize>> {
        let cursor = self.cursor();
        self.mappers.iter().map(|m| m.address(cursor)).collect()
    }

    /// Word stored in a bank, bypassing the read port
    pub fn peek(&self, bank: usize, addr: usize) -> Result<Word, FilterStoreError> {
        self.bank(bank)?.peek(addr)
    }

    pub fn bank_stats(&self, bank: usize) -> Result<&MemoryStats, FilterStoreError> {
        Ok(self.bank(bank)?.stats())
    }

    /// Advance the block by one clock tick
    ///
    /// A malformed write command rejects the whole tick and leaves every
    /// register and memory untouched.
    pub fn tick(&mut self, inputs: &TickInputs) -> Result<(), FilterStoreError> {
        if let Some(command) = &inputs.write {
            self.check_command(command)?;
        }

        let snapshot = self.sequencer.state();
        self.log_control(snapshot, inputs);

        // Combinational phase: everything below reads only the snapshot
        let cursor = self.cursor();
        let routed = self.demux.react(inputs.write.as_ref());
        let enables = WriteDemux::enables(routed.as_ref(), self.num_banks());
        let ports: Vec<BankPorts> = self
            .mappers
            .iter_mut()
            .zip(enables)
            .map(|(mapper, write)| BankPorts {
                read_addr: mapper.react(cursor),
                write,
            })
            .collect();

        // Commit phase
        match self.config.concurrency_mode {
            ConcurrencyMode::Sequential => {
                for (bank, ports) in self.banks.iter_mut().zip(&ports) {
                    bank.cycle(ports)?;
                }
            }
            ConcurrencyMode::Rayon => {
                self.banks
                    .par_iter_mut()
                    .zip(ports.par_iter())
                    .try_for_each(|(bank, ports)| bank.cycle(ports).map(|_| ()))?;
            }
        }

        let next = self.sequencer.cycle(&SequencerInput {
            start: inputs.start,
            reset: inputs.reset,
            size: self.size,
        })?;

        debug!(
            "filter store: position {} -> {}, running {} -> {}",
            snapshot.position, next.position, snapshot.running, next.running
        );
        Ok(())
    }

    /// Present one write command for a single tick
    pub fn write(&mut self, command: WriteCommand) -> Result<(), FilterStoreError> {
        self.tick(&TickInputs::write(command))
    }

    fn cursor(&self) -> ReadCursor {
        ReadCursor {
            position: self.sequencer.position(),
            size: self.size,
        }
    }

    fn bank(&self, bank: usize) -> Result<&MemoryBank, FilterStoreError> {
        self.banks.get(bank).ok_or(FilterStoreError::BankOutOfRange {
            store: bank,
            num_banks: self.num_banks(),
        })
    }

    fn check_command(&self, command: &WriteCommand) -> Result<(), FilterStoreError> {
        if command.store >= self.num_banks() {
            return Err(FilterStoreError::BankOutOfRange {
                store: command.store,
                num_banks: self.num_banks(),
            });
        }
        if command.addr >= self.depth() {
            return Err(FilterStoreError::AddressOutOfRange {
                addr: command.addr,
                depth: self.depth(),
            });
        }
        Ok(())
    }

    fn log_control(&self, snapshot: SequencerState, inputs: &TickInputs) {
        if inputs.reset {
            info!(
                "filter store: reset at position {} (running: {})",
                snapshot.position, snapshot.running
            );
        } else if inputs.start && !snapshot.running {
            if self.size == 0 {
                warn!("filter store: start with size 0, read ports stay idle and lanes hold");
            } else {
                info!(
                    "filter store: start, streaming {} words across {} banks",
                    self.size,
                    self.num_banks()
                );
            }
        }
    }
}
