use serde::{Deserialize, Serialize};

/// One filter word as held by a bank and driven on an output lane
pub type Word = u32;

/// Global write command presented on the write channel
///
/// `store` selects the bank, `addr` the physical word within it. A command
/// lives for exactly the tick it is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteCommand {
    pub store: usize,
    pub addr: usize,
    pub data: Word,
}

impl WriteCommand {
    pub fn new(store: usize, addr: usize, data: Word) -> Self {
        Self { store, addr, data }
    }
}

/// Write port drive for a single bank, produced by the demux
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankWrite {
    pub addr: usize,
    pub data: Word,
}

/// Everything sampled from outside the block on one tick
///
/// `write` being `Some` is the producer asserting validity. `start` and
/// `reset` are single-tick pulses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInputs {
    pub write: Option<WriteCommand>,
    pub start: bool,
    pub reset: bool,
}

impl TickInputs {
    /// A tick with nothing asserted
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn write(command: WriteCommand) -> Self {
        Self {
            write: Some(command),
            ..Self::default()
        }
    }

    pub fn start() -> Self {
        Self {
            start: true,
            ..Self::default()
        }
    }

    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Self::default()
        }
    }

    pub fn with_write(mut self, command: WriteCommand) -> Self {
        self.write = Some(command);
        self
    }

    pub fn with_start(mut self) -> Self {
        self.start = true;
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.reset = true;
        self
    }
}

/// Run phase of the block
///
/// `Priming` only ever describes the tick in which `start` is sampled while
/// idle: the read for position 0 is in flight and no lane carries streamed
/// data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Priming,
    Streaming,
}

impl Phase {
    /// Classify a tick from the state it starts in and the pulses it samples
    pub fn classify(running: bool, inputs: &TickInputs) -> Self {
        if running {
            Phase::Streaming
        } else if inputs.start && !inputs.reset {
            Phase::Priming
        } else {
            Phase::Idle
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "IDLE"),
            Phase::Priming => write!(f, "PRIMING"),
            Phase::Streaming => write!(f, "STREAMING"),
        }
    }
}
