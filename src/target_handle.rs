use crate::command::VendorCommand;
use crate::error::Result;
use crate::transport::ControlTransport;
use rusb::{Device, DeviceHandle, UsbContext};

/// An open session to an FX2LP. Closed when dropped.
pub struct TargetHandle<T: UsbContext> {
    // USB device handle for the raw communication.
    pub(crate) usb_device_handle: DeviceHandle<T>,
}

impl<T: UsbContext> TargetHandle<T> {
    pub(crate) fn from_usb_device(device: Device<T>) -> Result<Self> {
        let usb_device_handle = device.open()?;
        Ok(Self { usb_device_handle })
    }

    /// The underlying rusb handle.
    pub fn usb_device_handle(&mut self) -> &mut DeviceHandle<T> {
        &mut self.usb_device_handle
    }
}

impl<T: UsbContext> ControlTransport for TargetHandle<T> {
    fn vendor_write(
        &mut self,
        command: VendorCommand,
        address: u16,
        data: &[u8],
    ) -> rusb::Result<usize> {
        self.usb_device_handle.vendor_write(command, address, data)
    }
}
