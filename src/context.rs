use super::error::{Error, Result};
use super::target::TargetInfo;
use rusb::UsbContext;

/// Vendor/product IDs an FX2LP without firmware enumerates with.
pub const DEFAULT_IDS: &[(u16, u16)] = &[(0x04b4, 0x8613)];

pub struct Context {
    pub usb_context: rusb::Context,
}

impl Context {
    pub fn new() -> Result<Self> {
        let usb_context = rusb::Context::new()?;
        Ok(Context { usb_context })
    }

    /// Lists all attached devices whose vendor/product ID pair is one of `ids`.
    pub fn find_targets(&self, ids: &[(u16, u16)]) -> Result<Vec<TargetInfo>> {
        let mut targets = Vec::new();

        for device in self.usb_context.devices()?.iter() {
            // Devices whose descriptor cannot be read are not ours to program
            let descriptor = match device.device_descriptor() {
                Ok(descriptor) => descriptor,
                Err(_) => continue,
            };
            let id = (descriptor.vendor_id(), descriptor.product_id());
            if ids.contains(&id) {
                targets.push(TargetInfo {
                    usb_bus_number: device.bus_number(),
                    usb_bus_address: device.address(),
                    vendor_id: id.0,
                    product_id: id.1,
                });
            }
        }

        Ok(targets)
    }

    /// Picks the single device matching `id`, or one of [`DEFAULT_IDS`] if no ID is given.
    ///
    /// [`DEFAULT_IDS`]: constant.DEFAULT_IDS.html
    pub fn pick_target(&self, id: Option<(u16, u16)>) -> Result<TargetInfo> {
        let targets = match id {
            Some(id) => self.find_targets(&[id])?,
            None => self.find_targets(DEFAULT_IDS)?,
        };
        select_single(targets)
    }
}

/// Refuses to guess when several devices match.
fn select_single(targets: Vec<TargetInfo>) -> Result<TargetInfo> {
    let mut targets = targets.into_iter();
    match (targets.next(), targets.next()) {
        (None, _) => Err(Error::TargetNotFound),
        (Some(target), None) => Ok(target),
        (Some(_), Some(_)) => Err(Error::TooManyMatches),
    }
}
