pub mod core;

// Re-export commonly used types
pub use crate::core::components::filter_store::FilterStore;
pub use crate::core::errors::FilterStoreError;
pub use crate::core::execution::config::{ConcurrencyMode, FilterStoreConfig};
pub use crate::core::types::{Phase, TickInputs, Word, WriteCommand};
