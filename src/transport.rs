use crate::command::VendorCommand;
use crate::download::Stage;
use crate::error::{Error, Result};
use crate::TIMEOUT;
use rusb::{DeviceHandle, UsbContext};

/// The only primitive the download logic needs from a device: a host-to-device vendor control
/// transfer which writes `data` at `address` and reports how many bytes the device accepted.
///
/// Implemented for rusb device handles, so an already open session can be used directly.
pub trait ControlTransport {
    fn vendor_write(
        &mut self,
        command: VendorCommand,
        address: u16,
        data: &[u8],
    ) -> rusb::Result<usize>;
}

impl<T: UsbContext> ControlTransport for DeviceHandle<T> {
    fn vendor_write(
        &mut self,
        command: VendorCommand,
        address: u16,
        data: &[u8],
    ) -> rusb::Result<usize> {
        self.write_control(
            rusb::request_type(
                rusb::Direction::Out,
                rusb::RequestType::Vendor,
                rusb::Recipient::Device,
            ),
            command.into(),
            address,
            0,
            data,
            TIMEOUT,
        )
    }
}

/// Issues a single write and insists that the device takes all of it.
pub(crate) fn write_all<C: ControlTransport + ?Sized>(
    transport: &mut C,
    stage: Stage,
    command: VendorCommand,
    address: u16,
    data: &[u8],
) -> Result<()> {
    log::trace!(
        "{:?} 0x{:02x} @ 0x{:04x}, {} bytes",
        stage,
        u8::from(command),
        address,
        data.len()
    );
    let actual = transport
        .vendor_write(command, address, data)
        .map_err(|source| Error::Usb {
            stage,
            address,
            source,
        })?;
    if actual != data.len() {
        return Err(Error::ShortTransfer {
            stage,
            address,
            expected: data.len(),
            actual,
        });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::mock::RecordingTransport;
    use super::*;

    #[test]
    fn test_write_all_accepts_full_ack() {
        let mut transport = RecordingTransport::default();
        write_all(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            0x0100,
            &[1, 2, 3],
        )
        .unwrap();
        assert_eq!(transport.transfers.len(), 1);
        assert_eq!(transport.transfers[0].address, 0x0100);
    }

    #[test]
    fn test_write_all_short_ack() {
        let mut transport = RecordingTransport {
            short_at: Some((0, 511)),
            ..Default::default()
        };
        let data = vec![0u8; 512];
        let err = write_all(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            0x0000,
            &data,
        )
        .unwrap_err();
        match err {
            Error::ShortTransfer {
                expected, actual, ..
            } => {
                assert_eq!(expected, 512);
                assert_eq!(actual, 511);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_write_all_usb_error() {
        let mut transport = RecordingTransport {
            fail_at: Some((0, rusb::Error::Timeout)),
            ..Default::default()
        };
        let err = write_all(
            &mut transport,
            Stage::Resetting,
            VendorCommand::FirmwareLoad,
            0xe600,
            &[1],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Usb {
                source: rusb::Error::Timeout,
                address: 0xe600,
                ..
            }
        ));
    }
}
