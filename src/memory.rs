//! Address space layout of the FX2LP and size limits of its boot EEPROMs.

/// Size of the address space a firmware image may cover.
pub const MAX_FIRMWARE_SIZE: usize = 0x10000;

/// Size of the on-chip program/data RAM, loadable through the boot ROM without any helper.
pub const INTERNAL_RAM_SIZE: usize = 0x4000;

/// Address of the CPU control and status register. Bit 0 holds the 8051 core in reset.
pub const CPUCS_ADDRESS: u16 = 0xe600;

/// Largest payload sent in a single control transfer.
pub const MAX_CHUNK_SIZE: usize = 1024;

/// Serial EEPROM size classes the FX2LP can boot from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EepromKind {
    /// Single-byte addressed EEPROM (24LC00 to 24LC02 style, at most 256 bytes).
    Small,

    /// Two-byte addressed EEPROM (24LC64 and up).
    Large,
}

impl EepromKind {
    /// Write granularity of the EEPROM. Every block sent to the device is padded up to a
    /// multiple of this.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fx2_download::EepromKind;
    ///
    /// assert_eq!(EepromKind::Small.quantum(), 8);
    /// assert_eq!(EepromKind::Large.quantum(), 64);
    /// ```
    pub fn quantum(self) -> usize {
        match self {
            EepromKind::Small => 8,
            EepromKind::Large => 64,
        }
    }

    /// Largest source file accepted for this EEPROM class, if there is a limit at all.
    pub fn max_source_size(self) -> Option<usize> {
        match self {
            EepromKind::Small => Some(256),
            EepromKind::Large => None,
        }
    }

    /// Rounds a block length up to the write granularity.
    pub fn round_up(self, length: usize) -> usize {
        let quantum = self.quantum();
        (length + quantum - 1) / quantum * quantum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up() {
        assert_eq!(EepromKind::Small.round_up(0), 0);
        assert_eq!(EepromKind::Small.round_up(1), 8);
        assert_eq!(EepromKind::Small.round_up(8), 8);
        assert_eq!(EepromKind::Small.round_up(13), 16);
        assert_eq!(EepromKind::Large.round_up(13), 64);
        assert_eq!(EepromKind::Large.round_up(1024), 1024);
        assert_eq!(EepromKind::Large.round_up(1000), 1024);
    }

    #[test]
    fn test_chunk_size_is_aligned() {
        assert_eq!(EepromKind::Small.round_up(MAX_CHUNK_SIZE), MAX_CHUNK_SIZE);
        assert_eq!(EepromKind::Large.round_up(MAX_CHUNK_SIZE), MAX_CHUNK_SIZE);
    }
}
