use super::traits::React;
use crate::core::types::{BankWrite, WriteCommand};

/// Write port drive selected by the demux for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutedWrite {
    pub bank: usize,
    pub write: BankWrite,
}

/// Routes the global write channel to a single bank
///
/// Always ready. A valid command enables exactly the bank it names for the
/// tick it arrives in; an absent command enables nothing.
#[derive(Debug, Clone, Default)]
pub struct WriteDemux {
    accepted: u64,
}

impl WriteDemux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Readiness toward the producer
    pub fn ready(&self) -> bool {
        true
    }

    /// Commands accepted since construction
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Per-bank write enables for a routed write
    pub fn enables(routed: Option<&RoutedWrite>, num_banks: usize) -> Vec<Option<BankWrite>> {
        (0..num_banks)
            .map(|bank| routed.filter(|r| r.bank == bank).map(|r| r.write))
            .collect()
    }
}

impl<'a> React<Option<&'a WriteCommand>> for WriteDemux {
    type Output = RoutedWrite;

    fn react(&mut self, command: Option<&'a WriteCommand>) -> Option<RoutedWrite> {
        let command = command?;
        self.accepted += 1;
        log::trace!(
            "write demux: bank {} addr {} <- {:#010x}",
            command.store,
            command.addr,
            command.data
        );
        Some(RoutedWrite {
            bank: command.store,
            write: BankWrite {
                addr: command.addr,
                data: command.data,
            },
        })
    }
}
