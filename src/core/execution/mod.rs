pub mod config;
pub mod cycle_engine;
pub mod simulation_engine;
pub mod trace;

// Re-export commonly used types
pub use config::{ConcurrencyMode, FilterStoreConfig};
pub use cycle_engine::CycleEngine;
pub use simulation_engine::{SimulationEngine, StreamObserver};
pub use trace::{TickRecord, Trace};
