use crate::context::Context;
use crate::error::{Error, Result};
use crate::target_handle::TargetHandle;
use rusb::UsbContext;
use std::fmt;

/// Contains necessary information to connect to a target via USB.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetInfo {
    /// USB bus ID the target is connected to.
    pub usb_bus_number: u8,

    /// USB device address of the target.
    pub usb_bus_address: u8,

    /// Vendor ID the target reported via its device descriptor.
    pub vendor_id: u16,

    /// Product ID the target reported via its device descriptor.
    pub product_id: u16,
}

impl TargetInfo {
    /// Opens a session to the target. Fails if the device at the recorded bus position no longer
    /// reports the recorded IDs.
    pub fn open(&self, context: &Context) -> Result<TargetHandle<rusb::Context>> {
        for device in context.usb_context.devices()?.iter() {
            if device.bus_number() == self.usb_bus_number
                && device.address() == self.usb_bus_address
            {
                // The device may have re-enumerated (e.g. running freshly loaded firmware)
                // between Context::find_targets() and open().
                let descriptor = device.device_descriptor()?;
                if descriptor.vendor_id() != self.vendor_id
                    || descriptor.product_id() != self.product_id
                {
                    return Err(Error::TargetNotFound);
                }
                log::info!("Opening {}", self);
                return TargetHandle::from_usb_device(device);
            }
        }
        Err(Error::TargetNotFound)
    }
}

impl fmt::Display for TargetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bus {:03} Device {:03}: ID {:04x}:{:04x}",
            self.usb_bus_number, self.usb_bus_address, self.vendor_id, self.product_id
        )
    }
}
