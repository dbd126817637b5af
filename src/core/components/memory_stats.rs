use serde::Serialize;

/// Access statistics for one memory bank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    /// Physical depth of the bank
    pub total_addresses: usize,
    /// Number of addresses written at least once
    pub active_addresses: usize,
    /// Storage footprint in bytes
    pub memory_usage_bytes: usize,
    /// Registered reads performed since construction
    pub read_count: u64,
    /// Writes committed since construction
    pub write_count: u64,
}

impl MemoryStats {
    pub fn new(total_addresses: usize) -> Self {
        Self {
            total_addresses,
            memory_usage_bytes: total_addresses * std::mem::size_of::<crate::core::types::Word>(),
            ..Self::default()
        }
    }

    /// Update occupancy after a write lands on a fresh address
    pub fn update_usage(&mut self, active: usize) {
        self.active_addresses = active;
    }

    pub fn increment_reads(&mut self) {
        self.read_count += 1;
    }

    pub fn increment_writes(&mut self) {
        self.write_count += 1;
    }
}
