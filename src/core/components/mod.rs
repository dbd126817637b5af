pub mod demux;
pub mod filter_store;
pub mod loader;
pub mod memory_bank;
pub mod memory_stats;
pub mod sequencer;
pub mod skew;
pub mod traits;

// Re-export commonly used types
pub use demux::{RoutedWrite, WriteDemux};
pub use filter_store::FilterStore;
pub use loader::{FilterLoad, FilterLoader};
pub use memory_bank::{BankPorts, MemoryBank};
pub use memory_stats::MemoryStats;
pub use sequencer::{AddressSequencer, SequencerInput, SequencerState};
pub use skew::{skewed_address, ReadCursor, SkewedAddressMapper};
pub use traits::{Cycle, React};
