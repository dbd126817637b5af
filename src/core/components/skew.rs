use super::traits::React;

/// Snapshot of the sequencer as seen by the address mappers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadCursor {
    pub position: usize,
    pub size: usize,
}

/// Maps the shared read position onto one bank's physical read address
///
/// Bank `i` reads `(position - i) mod size`, so each lane trails lane 0 by `i`
/// ticks and the lanes together form a diagonal wavefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkewedAddressMapper {
    bank: usize,
}

impl SkewedAddressMapper {
    pub fn new(bank: usize) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> usize {
        self.bank
    }

    /// Read address for this bank, `None` when `size` is zero
    pub fn address(&self, cursor: ReadCursor) -> Option<usize> {
        skewed_address(cursor.position, self.bank, cursor.size)
    }
}

impl React<ReadCursor> for SkewedAddressMapper {
    type Output = usize;

    fn react(&mut self, cursor: ReadCursor) -> Option<usize> {
        self.address(cursor)
    }
}

/// `(position - bank) mod size` with a non-negative result
///
/// Holds for any bank index, including banks at or beyond `size`.
pub fn skewed_address(position: usize, bank: usize, size: usize) -> Option<usize> {
    if size == 0 {
        return None;
    }
    let offset = position as i64 - bank as i64;
    Some(offset.rem_euclid(size as i64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_zero_follows_position() {
        for position in 0..5 {
            assert_eq!(skewed_address(position, 0, 5), Some(position));
        }
    }

    #[test]
    fn test_negative_wrap() {
        assert_eq!(skewed_address(0, 1, 3), Some(2));
        assert_eq!(skewed_address(0, 2, 3), Some(1));
        assert_eq!(skewed_address(1, 2, 3), Some(2));
    }

    #[test]
    fn test_bank_beyond_size_wraps_more_than_once() {
        // 0 - 7 = -7 ≡ 2 (mod 3)
        assert_eq!(skewed_address(0, 7, 3), Some(2));
        assert_eq!(skewed_address(4, 9, 4), Some(3));
    }

    #[test]
    fn test_size_zero_yields_no_address() {
        assert_eq!(skewed_address(0, 0, 0), None);
        let mut mapper = SkewedAddressMapper::new(3);
        assert_eq!(mapper.react(ReadCursor { position: 0, size: 0 }), None);
    }

    #[test]
    fn test_mapper_react_matches_address() {
        let mut mapper = SkewedAddressMapper::new(2);
        let cursor = ReadCursor { position: 1, size: 4 };
        assert_eq!(mapper.react(cursor), mapper.address(cursor));
        assert_eq!(mapper.react(cursor), Some(3));
    }
}
