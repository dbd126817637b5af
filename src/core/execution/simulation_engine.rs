use crate::core::errors::FilterStoreError;
use crate::core::execution::cycle_engine::CycleEngine;
use crate::core::execution::trace::TickRecord;

/// Observer trait for streaming runs
pub trait StreamObserver {
    /// Called after every committed tick
    fn on_tick(&mut self, record: &TickRecord);
}

/// Runs a cycle engine for a bounded number of cycles
pub struct SimulationEngine {
    cycle_engine: CycleEngine,
    max_cycles: Option<u64>,
    observers: Vec<Box<dyn StreamObserver>>,
}

impl SimulationEngine {
    /// Without `max_cycles` the run ends once queued stimulus is exhausted
    pub fn new(cycle_engine: CycleEngine, max_cycles: Option<u64>) -> Self {
        Self {
            cycle_engine,
            max_cycles,
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn StreamObserver>) {
        self.observers.push(observer);
    }

    pub fn run(&mut self) -> Result<u64, FilterStoreError> {
        loop {
            let done = match self.max_cycles {
                Some(max) => self.current_cycle() >= max,
                None => self.cycle_engine.pending() == 0,
            };
            if done {
                break;
            }
            self.step()?;
        }
        Ok(self.current_cycle())
    }

    pub fn step(&mut self) -> Result<(), FilterStoreError> {
        let record = self.cycle_engine.cycle()?;
        for observer in &mut self.observers {
            observer.on_tick(&record);
        }
        Ok(())
    }

    pub fn current_cycle(&self) -> u64 {
        self.cycle_engine.current_cycle()
    }

    pub fn cycle_engine(&self) -> &CycleEngine {
        &self.cycle_engine
    }

    pub fn cycle_engine_mut(&mut self) -> &mut CycleEngine {
        &mut self.cycle_engine
    }

    pub fn into_cycle_engine(self) -> CycleEngine {
        self.cycle_engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::execution::config::FilterStoreConfig;
    use crate::core::types::{TickInputs, Word};
    use std::sync::{Arc, Mutex};

    struct LaneRecorder {
        seen: Arc<Mutex<Vec<Word>>>,
    }

    impl StreamObserver for LaneRecorder {
        fn on_tick(&mut self, record: &TickRecord) {
            self.seen.lock().unwrap().push(record.values_out[0]);
        }
    }

    fn cycle_engine() -> CycleEngine {
        CycleEngine::new(FilterStoreConfig::new().with_num_banks(1).with_depth(4)).unwrap()
    }

    #[test]
    fn test_run_with_max_cycles() {
        let mut sim = SimulationEngine::new(cycle_engine(), Some(5));
        assert_eq!(sim.run().unwrap(), 5);
        assert_eq!(sim.current_cycle(), 5);
    }

    #[test]
    fn test_run_until_stimulus_exhausted() {
        let mut engine = cycle_engine();
        engine.schedule_all(vec![TickInputs::idle(); 3]);
        let mut sim = SimulationEngine::new(engine, None);
        assert_eq!(sim.run().unwrap(), 3);
    }

    #[test]
    fn test_observers_see_every_tick() {
        let mut engine = cycle_engine();
        engine.load_filter(&[7, 8]).unwrap();
        engine.schedule(TickInputs::start());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut sim = SimulationEngine::new(engine, Some(6));
        sim.add_observer(Box::new(LaneRecorder { seen: seen.clone() }));
        sim.run().unwrap();

        // the idle read port already sees the first write on the second tick
        assert_eq!(*seen.lock().unwrap(), vec![0, 7, 7, 8, 7, 8]);
    }
}
