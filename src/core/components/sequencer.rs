use super::traits::Cycle;
use crate::core::errors::FilterStoreError;
use serde::{Deserialize, Serialize};

/// Registers held by the address sequencer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerState {
    /// Logical read index for bank 0
    pub position: usize,
    pub running: bool,
}

/// Values the sequencer samples on one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerInput {
    pub start: bool,
    pub reset: bool,
    pub size: usize,
}

/// Free-running cyclic position counter with a start/reset latch
#[derive(Debug, Clone, Default)]
pub struct AddressSequencer {
    state: SequencerState,
}

impl AddressSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn running(&self) -> bool {
        self.state.running
    }

    /// Next register values from the current ones
    ///
    /// Priority, lowest to highest: hold, increment (running or start), reset.
    /// With `size == 0` there is nothing to cycle through and the position
    /// stays at 0.
    pub fn next(state: SequencerState, input: SequencerInput) -> SequencerState {
        if input.reset {
            return SequencerState::default();
        }

        let position = if input.start || state.running {
            Self::advance(state.position, input.size)
        } else {
            state.position
        };

        SequencerState {
            position,
            running: state.running || input.start,
        }
    }

    fn advance(position: usize, size: usize) -> usize {
        if position + 1 >= size {
            0
        } else {
            position + 1
        }
    }
}

impl Cycle for AddressSequencer {
    type Input = SequencerInput;
    type Output = SequencerState;

    fn cycle(&mut self, input: &SequencerInput) -> Result<SequencerState, FilterStoreError> {
        self.state = Self::next(self.state, *input);
        Ok(self.state)
    }
}
