use crate::memory::EepromKind;

/// Vendor requests understood by the FX2LP. `FirmwareLoad` is implemented by the boot ROM and is
/// always available; the others are only answered while the bootstrap loader (see
/// [`bootstrap`]) is running.
///
/// All of them are host-to-device control requests whose `wValue` carries the 16 bit target
/// address and whose data stage carries the bytes to write.
///
/// [`bootstrap`]: bootstrap/index.html
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum VendorCommand {
    /// Writes internal RAM and the CPUCS register.
    FirmwareLoad = 0xa0,

    /// Writes a single-byte addressed (small) serial EEPROM.
    SmallEeprom = 0xa2,

    /// Writes any RAM address, including external RAM above the internal 16 KiB.
    ExternalRam = 0xa3,

    /// Writes a two-byte addressed (large) serial EEPROM.
    LargeEeprom = 0xa9,
}

impl VendorCommand {
    /// Whether the command is provided by the bootstrap loader rather than the boot ROM.
    pub fn requires_bootstrap(self) -> bool {
        self != VendorCommand::FirmwareLoad
    }
}

impl From<VendorCommand> for u8 {
    fn from(command: VendorCommand) -> Self {
        command as u8
    }
}

impl From<EepromKind> for VendorCommand {
    fn from(kind: EepromKind) -> Self {
        match kind {
            EepromKind::Small => VendorCommand::SmallEeprom,
            EepromKind::Large => VendorCommand::LargeEeprom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_codes() {
        assert_eq!(u8::from(VendorCommand::FirmwareLoad), 0xa0);
        assert_eq!(u8::from(VendorCommand::SmallEeprom), 0xa2);
        assert_eq!(u8::from(VendorCommand::ExternalRam), 0xa3);
        assert_eq!(u8::from(VendorCommand::LargeEeprom), 0xa9);
    }

    #[test]
    fn test_only_boot_rom_command_works_without_bootstrap() {
        assert!(!VendorCommand::FirmwareLoad.requires_bootstrap());
        assert!(VendorCommand::SmallEeprom.requires_bootstrap());
        assert!(VendorCommand::ExternalRam.requires_bootstrap());
        assert!(VendorCommand::LargeEeprom.requires_bootstrap());
    }

    #[test]
    fn test_eeprom_commands() {
        assert_eq!(
            VendorCommand::from(EepromKind::Small),
            VendorCommand::SmallEeprom
        );
        assert_eq!(
            VendorCommand::from(EepromKind::Large),
            VendorCommand::LargeEeprom
        );
    }
}
