use super::memory_stats::MemoryStats;
use super::traits::Cycle;
use crate::core::errors::FilterStoreError;
use crate::core::types::{BankWrite, Word};

/// Port drive for one bank on one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankPorts {
    /// Read address, `None` leaves the read port idle and the output held
    pub read_addr: Option<usize>,
    /// Write enable plus address/data
    pub write: Option<BankWrite>,
}

/// Single filter memory with one write port and one registered read port
///
/// Reads sample the storage as it stood at the start of the tick, so a read
/// and a write to the same address in the same tick return the old word. The
/// write lands when the tick commits and is visible to the next tick's read.
#[derive(Debug, Clone)]
pub struct MemoryBank {
    index: usize,
    storage: Vec<Word>,
    written: Vec<bool>,
    read_data: Word,
    stats: MemoryStats,
}

impl MemoryBank {
    /// Create a zero-filled bank
    pub fn new(index: usize, depth: usize) -> Self {
        Self {
            index,
            storage: vec![0; depth],
            written: vec![false; depth],
            read_data: 0,
            stats: MemoryStats::new(depth),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn depth(&self) -> usize {
        self.storage.len()
    }

    /// Registered read output, what the bank drives onto its lane
    pub fn read_data(&self) -> Word {
        self.read_data
    }

    /// Inspect a word without going through the read port
    pub fn peek(&self, addr: usize) -> Result<Word, FilterStoreError> {
        self.storage
            .get(addr)
            .copied()
            .ok_or(FilterStoreError::AddressOutOfRange {
                addr,
                depth: self.depth(),
            })
    }

    pub fn stats(&self) -> &MemoryStats {
        &self.stats
    }

    fn check_addr(&self, addr: usize) -> Result<(), FilterStoreError> {
        if addr < self.depth() {
            Ok(())
        } else {
            Err(FilterStoreError::AddressOutOfRange {
                addr,
                depth: self.depth(),
            })
        }
    }
}

impl Cycle for MemoryBank {
    type Input = BankPorts;
    type Output = Word;

    fn cycle(&mut self, ports: &BankPorts) -> Result<Word, FilterStoreError> {
        if let Some(addr) = ports.read_addr {
            self.check_addr(addr)?;
        }
        if let Some(write) = ports.write {
            self.check_addr(write.addr)?;
        }

        // Read first: the read port sees storage from before this tick's write
        if let Some(addr) = ports.read_addr {
            self.read_data = self.storage[addr];
            self.stats.increment_reads();
        }

        if let Some(write) = ports.write {
            self.storage[write.addr] = write.data;
            if !self.written[write.addr] {
                self.written[write.addr] = true;
                self.stats.update_usage(self.stats.active_addresses + 1);
            }
            self.stats.increment_writes();
        }

        Ok(self.read_data)
    }
}
