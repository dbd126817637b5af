/// Errors raised when the filter store model is driven outside its contract
///
/// The modelled circuit has no error channel of its own; these are rejected at
/// the API boundary before any register or memory is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterStoreError {
    /// Configuration cannot describe a buildable store
    InvalidConfig(String),
    /// Write command selected a bank that does not exist
    BankOutOfRange { store: usize, num_banks: usize },
    /// Address beyond the physical depth of a bank
    AddressOutOfRange { addr: usize, depth: usize },
    /// Logical size larger than the physical depth
    SizeExceedsDepth { size: usize, depth: usize },
    /// `size` may only be reconfigured while the sequencer is stopped
    SizeChangeWhileRunning,
    /// Filter does not fit in `num_banks * depth` words
    FilterTooLarge { words: usize, capacity: usize },
}

impl std::fmt::Display for FilterStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterStoreError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            FilterStoreError::BankOutOfRange { store, num_banks } => {
                write!(f, "Bank {} out of range (store has {} banks)", store, num_banks)
            }
            FilterStoreError::AddressOutOfRange { addr, depth } => {
                write!(f, "Address {} out of range (bank depth {})", addr, depth)
            }
            FilterStoreError::SizeExceedsDepth { size, depth } => {
                write!(f, "Size {} exceeds bank depth {}", size, depth)
            }
            FilterStoreError::SizeChangeWhileRunning => {
                write!(f, "Size cannot change while the sequencer is running")
            }
            FilterStoreError::FilterTooLarge { words, capacity } => {
                write!(f, "Filter of {} words exceeds store capacity of {} words", words, capacity)
            }
        }
    }
}

impl std::error::Error for FilterStoreError {}
