//! Holding and releasing the 8051 core via the CPUCS register.

use crate::command::VendorCommand;
use crate::download::Stage;
use crate::error::Result;
use crate::memory::CPUCS_ADDRESS;
use crate::transport::{write_all, ControlTransport};

/// Puts the CPU into reset. RAM can only be written safely while the CPU is held.
pub fn hold<C: ControlTransport + ?Sized>(transport: &mut C, stage: Stage) -> Result<()> {
    log::debug!("Forcing FX2 CPU into reset");
    write_all(
        transport,
        stage,
        VendorCommand::FirmwareLoad,
        CPUCS_ADDRESS,
        &[1],
    )
}

/// Lets the CPU run from whatever is in RAM.
pub fn release<C: ControlTransport + ?Sized>(transport: &mut C, stage: Stage) -> Result<()> {
    log::debug!("Releasing FX2 CPU from reset");
    write_all(
        transport,
        stage,
        VendorCommand::FirmwareLoad,
        CPUCS_ADDRESS,
        &[0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::mock::RecordingTransport;

    #[test]
    fn test_hold_and_release() {
        let mut transport = RecordingTransport::default();
        hold(&mut transport, Stage::Resetting).unwrap();
        release(&mut transport, Stage::Releasing).unwrap();
        assert_eq!(transport.cpucs_writes(), vec![1, 0]);
        assert!(transport
            .transfers
            .iter()
            .all(|t| t.command == VendorCommand::FirmwareLoad && t.data.len() == 1));
    }

    #[test]
    fn test_unacknowledged_reset() {
        let mut transport = RecordingTransport {
            short_at: Some((0, 0)),
            ..Default::default()
        };
        let err = hold(&mut transport, Stage::Resetting).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortTransfer {
                stage: Stage::Resetting,
                address: CPUCS_ADDRESS,
                expected: 1,
                actual: 0,
            }
        ));
    }
}
