use crate::core::errors::FilterStoreError;
use crate::core::types::{Word, WriteCommand};

/// Host-side load plan for one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLoad {
    /// Write commands in issue order, one per tick
    pub commands: Vec<WriteCommand>,
    /// Logical size to configure before starting
    pub size: usize,
}

/// Lays a flat filter out across the banks in systolic order
///
/// Word `w` goes to bank `w % num_banks` at address `w / num_banks`, so that
/// consecutive words sit side by side across lanes and each bank holds one
/// column of the wavefront.
#[derive(Debug, Clone, Copy)]
pub struct FilterLoader {
    num_banks: usize,
    depth: usize,
}

impl FilterLoader {
    pub fn new(num_banks: usize, depth: usize) -> Self {
        Self { num_banks, depth }
    }

    pub fn capacity(&self) -> usize {
        self.num_banks * self.depth
    }

    pub fn plan(&self, words: &[Word]) -> Result<FilterLoad, FilterStoreError> {
        if self.num_banks == 0 {
            return Err(FilterStoreError::InvalidConfig(
                "cannot load a filter into zero banks".to_string(),
            ));
        }
        if words.len() > self.capacity() {
            return Err(FilterStoreError::FilterTooLarge {
                words: words.len(),
                capacity: self.capacity(),
            });
        }

        let commands = words
            .iter()
            .enumerate()
            .map(|(w, &data)| WriteCommand::new(w % self.num_banks, w / self.num_banks, data))
            .collect();

        Ok(FilterLoad {
            commands,
            size: words.len().div_ceil(self.num_banks),
        })
    }

    /// Output channels that fit one load, rounded down to a multiple of 4
    pub fn channels_per_load(&self, words_per_channel: usize) -> Result<usize, FilterStoreError> {
        if words_per_channel == 0 {
            return Err(FilterStoreError::InvalidConfig(
                "output channel must hold at least one filter word".to_string(),
            ));
        }
        let channels = (self.capacity() / words_per_channel) / CHANNEL_GROUP * CHANNEL_GROUP;
        if channels == 0 {
            return Err(FilterStoreError::FilterTooLarge {
                words: CHANNEL_GROUP * words_per_channel,
                capacity: self.capacity(),
            });
        }
        Ok(channels)
    }

    /// Split a filter of whole output channels into loads that each fit
    ///
    /// Every load but the last carries `channels_per_load` channels.
    pub fn plan_channels(
        &self,
        words: &[Word],
        words_per_channel: usize,
    ) -> Result<Vec<FilterLoad>, FilterStoreError> {
        let channels = self.channels_per_load(words_per_channel)?;
        if words.len() % words_per_channel != 0 {
            return Err(FilterStoreError::InvalidConfig(format!(
                "{} filter words is not a whole number of {}-word channels",
                words.len(),
                words_per_channel
            )));
        }

        words
            .chunks(channels * words_per_channel)
            .map(|chunk| self.plan(chunk))
            .collect()
    }
}

/// Output channels are loaded in groups of this many
const CHANNEL_GROUP: usize = 4;
