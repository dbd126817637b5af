//! Configuration for the filter store model
//!
//! Covers the construction-time geometry of the store and how the simulator
//! evaluates it.

use crate::core::errors::FilterStoreError;
use serde::{Deserialize, Serialize};

/// Number of filter stores in the reference accelerator
pub const DEFAULT_NUM_BANKS: usize = 4;
/// Words held by each filter store in the reference accelerator
pub const DEFAULT_DEPTH: usize = 512;

/// How bank lanes are evaluated within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// Lanes are evaluated in order on the calling thread
    #[default]
    Sequential,
    /// Lanes are evaluated concurrently using Rayon
    Rayon,
}

/// Geometry and execution settings for a filter store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStoreConfig {
    /// Number of independent memory banks (output lanes)
    pub num_banks: usize,
    /// Physical words per bank
    pub depth: usize,
    /// Lane evaluation strategy
    pub concurrency_mode: ConcurrencyMode,
    /// Record a per-tick trace in the cycle engine
    pub trace_enabled: bool,
}

impl FilterStoreConfig {
    /// Create a configuration with the reference accelerator's geometry
    pub fn new() -> Self {
        Self {
            num_banks: DEFAULT_NUM_BANKS,
            depth: DEFAULT_DEPTH,
            concurrency_mode: ConcurrencyMode::default(),
            trace_enabled: false,
        }
    }

    pub fn with_num_banks(mut self, num_banks: usize) -> Self {
        self.num_banks = num_banks;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace_enabled = enabled;
        self
    }

    /// Total words across all banks
    pub fn capacity(&self) -> usize {
        self.num_banks * self.depth
    }

    pub fn validate(&self) -> Result<(), FilterStoreError> {
        if self.num_banks == 0 {
            return Err(FilterStoreError::InvalidConfig(
                "filter store needs at least one bank".to_string(),
            ));
        }
        if self.depth == 0 {
            return Err(FilterStoreError::InvalidConfig(
                "bank depth must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for FilterStoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterStoreConfig::default();
        assert_eq!(config.num_banks, DEFAULT_NUM_BANKS);
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Sequential);
        assert!(!config.trace_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = FilterStoreConfig::new()
            .with_num_banks(3)
            .with_depth(4)
            .with_concurrency(ConcurrencyMode::Rayon)
            .with_trace(true);

        assert_eq!(config.num_banks, 3);
        assert_eq!(config.depth, 4);
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Rayon);
        assert!(config.trace_enabled);
        assert_eq!(config.capacity(), 12);
    }

    #[test]
    fn test_rejects_empty_geometry() {
        assert!(matches!(
            FilterStoreConfig::new().with_num_banks(0).validate(),
            Err(FilterStoreError::InvalidConfig(_))
        ));
        assert!(matches!(
            FilterStoreConfig::new().with_depth(0).validate(),
            Err(FilterStoreError::InvalidConfig(_))
        ));
    }
}
