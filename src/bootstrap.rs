//! The Vend_Ax bootstrap loader.
//!
//! The FX2LP boot ROM can only write internal RAM. This small 8051 program, once uploaded and
//! started, additionally answers the external RAM and EEPROM write requests (see
//! [`VendorCommand`]).
//!
//! [`VendorCommand`]: ../enum.VendorCommand.html

use crate::command::VendorCommand;
use crate::cpu;
use crate::download::Stage;
use crate::error::Result;
use crate::transport::{write_all, ControlTransport};

/// A block of the bootstrap program.
#[derive(Debug)]
pub struct Record {
    /// Internal RAM address of the first byte.
    pub address: u16,

    /// Code or data bytes.
    pub data: &'static [u8],
}

/// Evidence that the bootstrap loader was uploaded and started. Only [`inject`] hands one out,
/// and halting the CPU through [`Loader::halt`] uses it up.
///
/// Writers for the requests only the loader answers ask for it.
///
/// [`inject`]: fn.inject.html
/// [`Loader::halt`]: struct.Loader.html#method.halt
#[derive(Debug)]
#[must_use]
pub struct Loader {
    _running: (),
}

impl Loader {
    /// Puts the CPU back into reset, which stops the loader.
    pub fn halt<C: ControlTransport + ?Sized>(self, transport: &mut C, stage: Stage) -> Result<()> {
        cpu::hold(transport, stage)
    }

    #[cfg(test)]
    pub(crate) fn assume_running() -> Self {
        Self { _running: () }
    }
}

/// Uploads the bootstrap program into internal RAM and starts it. The CPU must be held in reset.
///
/// Records are written in order. The first one not fully acknowledged aborts the upload, leaving
/// the device with a partial program.
pub fn inject<C: ControlTransport + ?Sized>(transport: &mut C) -> Result<Loader> {
    log::info!("Downloading Vend_Ax bootstrap into FX2 RAM");
    for record in BOOTSTRAP {
        write_all(
            transport,
            Stage::BootstrapInjecting,
            VendorCommand::FirmwareLoad,
            record.address,
            record.data,
        )?;
    }

    // The loader has to run to answer the extended requests
    cpu::release(transport, Stage::BootstrapInjecting)?;
    Ok(Loader { _running: () })
}

/// The bootstrap program, in upload order.
#[rustfmt::skip]
pub const BOOTSTRAP: &[Record] = &[
    Record { address: 0x0d3e, data: &[0x00, 0x01, 0x02, 0x02, 0x03, 0x03, 0x04, 0x04, 0x05, 0x05] },
    Record { address: 0x064d, data: &[0xe4, 0xf5, 0x2c, 0xf5, 0x2b, 0xf5, 0x2a, 0xf5, 0x29, 0xc2, 0x03, 0xc2, 0x00, 0xc2, 0x02, 0xc2] },
    Record { address: 0x065d, data: &[0x01, 0x12, 0x0c, 0x6c, 0x7e, 0x0a, 0x7f, 0x00, 0x8e, 0x0a, 0x8f, 0x0b, 0x75, 0x12, 0x0a, 0x75] },
    Record { address: 0x066d, data: &[0x13, 0x12, 0x75, 0x08, 0x0a, 0x75, 0x09, 0x1c, 0x75, 0x10, 0x0a, 0x75, 0x11, 0x4a, 0x75, 0x14] },
    Record { address: 0x067d, data: &[0x0a, 0x75, 0x15, 0x78, 0xee, 0x54, 0xc0, 0x70, 0x03, 0x02, 0x07, 0x52, 0x75, 0x2d, 0x00, 0x75] },
    Record { address: 0x068d, data: &[0x2e, 0x80, 0x8e, 0x2f, 0x8f, 0x30, 0xc3, 0x74, 0x9a, 0x9f, 0xff, 0x74, 0x0a, 0x9e, 0xcf, 0x24] },
    Record { address: 0x069d, data: &[0x02, 0xcf, 0x34, 0x00, 0xfe, 0xe4, 0x8f, 0x28, 0x8e, 0x27, 0xf5, 0x26, 0xf5, 0x25, 0xf5, 0x24] },
    Record { address: 0x06ad, data: &[0xf5, 0x23, 0xf5, 0x22, 0xf5, 0x21, 0xaf, 0x28, 0xae, 0x27, 0xad, 0x26, 0xac, 0x25, 0xab, 0x24] },
    Record { address: 0x06bd, data: &[0xaa, 0x23, 0xa9, 0x22, 0xa8, 0x21, 0xc3, 0x12, 0x0d, 0x03, 0x50, 0x37, 0xe5, 0x30, 0x25, 0x24] },
    Record { address: 0x06cd, data: &[0xf5, 0x82, 0xe5, 0x2f, 0x35, 0x23, 0xf5, 0x83, 0xe0, 0xff, 0xe5, 0x2e, 0x25, 0x24, 0xf5, 0x82] },
    Record { address: 0x06dd, data: &[0xe5, 0x2d, 0x35, 0x23, 0xf5, 0x83, 0xef, 0xf0, 0xe4, 0xfa, 0xf9, 0xf8, 0xe5, 0x24, 0x24, 0x01] },
    Record { address: 0x06ed, data: &[0xf5, 0x24, 0xea, 0x35, 0x23, 0xf5, 0x23, 0xe9, 0x35, 0x22, 0xf5, 0x22, 0xe8, 0x35, 0x21, 0xf5] },
    Record { address: 0x06fd, data: &[0x21, 0x80, 0xb3, 0x85, 0x2d, 0x0a, 0x85, 0x2e, 0x0b, 0x74, 0x00, 0x24, 0x80, 0xff, 0x74, 0x0a] },
    Record { address: 0x070d, data: &[0x34, 0xff, 0xfe, 0xc3, 0xe5, 0x13, 0x9f, 0xf5, 0x13, 0xe5, 0x12, 0x9e, 0xf5, 0x12, 0xc3, 0xe5] },
    Record { address: 0x071d, data: &[0x0d, 0x9f, 0xf5, 0x0d, 0xe5, 0x0c, 0x9e, 0xf5, 0x0c, 0xc3, 0xe5, 0x0f, 0x9f, 0xf5, 0x0f, 0xe5] },
    Record { address: 0x072d, data: &[0x0e, 0x9e, 0xf5, 0x0e, 0xc3, 0xe5, 0x09, 0x9f, 0xf5, 0x09, 0xe5, 0x08, 0x9e, 0xf5, 0x08, 0xc3] },
    Record { address: 0x073d, data: &[0xe5, 0x11, 0x9f, 0xf5, 0x11, 0xe5, 0x10, 0x9e, 0xf5, 0x10, 0xc3, 0xe5, 0x15, 0x9f, 0xf5, 0x15] },
    Record { address: 0x074d, data: &[0xe5, 0x14, 0x9e, 0xf5, 0x14, 0xd2, 0xe8, 0x43, 0xd8, 0x20, 0x90, 0xe6, 0x68, 0xe0, 0x44, 0x09] },
    Record { address: 0x075d, data: &[0xf0, 0x90, 0xe6, 0x5c, 0xe0, 0x44, 0x3d, 0xf0, 0xd2, 0xaf, 0x90, 0xe6, 0x80, 0xe0, 0x54, 0xf7] },
    Record { address: 0x076d, data: &[0xf0, 0x53, 0x8e, 0xf8, 0xc2, 0x03, 0x12, 0x07, 0xff, 0x30, 0x01, 0x05, 0x12, 0x03, 0x9a, 0xc2] },
    Record { address: 0x077d, data: &[0x01, 0x30, 0x03, 0xf2, 0x12, 0x0d, 0x64, 0x50, 0xed, 0xc2, 0x03, 0x12, 0x0c, 0x0d, 0x20, 0x00] },
    Record { address: 0x078d, data: &[0x16, 0x90, 0xe6, 0x82, 0xe0, 0x30, 0xe7, 0x04, 0xe0, 0x20, 0xe1, 0xef, 0x90, 0xe6, 0x82, 0xe0] },
    Record { address: 0x079d, data: &[0x30, 0xe6, 0x04, 0xe0, 0x20, 0xe0, 0xe4, 0x12, 0x0b, 0xb6, 0x12, 0x0d, 0x66, 0x80, 0xc7, 0x22] },
    Record { address: 0x0d33, data: &[0x90, 0xe5, 0x0d, 0xe0, 0x30, 0xe4, 0x02, 0xc3, 0x22, 0xd3, 0x22] },
    Record { address: 0x039a, data: &[0x90, 0xe6, 0xb9, 0xe0, 0x70, 0x03, 0x02, 0x04, 0x85, 0x14, 0x70, 0x03, 0x02, 0x05, 0x2e, 0x24] },
    Record { address: 0x03aa, data: &[0xfe, 0x70, 0x03, 0x02, 0x05, 0xc4, 0x24, 0xfb, 0x70, 0x03, 0x02, 0x04, 0x7f, 0x14, 0x70, 0x03] },
    Record { address: 0x03ba, data: &[0x02, 0x04, 0x79, 0x14, 0x70, 0x03, 0x02, 0x04, 0x6d, 0x14, 0x70, 0x03, 0x02, 0x04, 0x73, 0x24] },
    Record { address: 0x03ca, data: &[0x05, 0x60, 0x03, 0x02, 0x06, 0x39, 0x12, 0x0d, 0x68, 0x40, 0x03, 0x02, 0x06, 0x45, 0x90, 0xe6] },
    Record { address: 0x03da, data: &[0xbb, 0xe0, 0x24, 0xfe, 0x60, 0x3b, 0x14, 0x60, 0x56, 0x24, 0xfd, 0x60, 0x16, 0x14, 0x60, 0x40] },
    Record { address: 0x03ea, data: &[0x24, 0x06, 0x70, 0x75, 0xe5, 0x0a, 0x90, 0xe6, 0xb3, 0xf0, 0xe5, 0x0b, 0x90, 0xe6, 0xb4, 0xf0] },
    Record { address: 0x03fa, data: &[0x02, 0x06, 0x45, 0x12, 0x0d, 0x33, 0x50, 0x0f, 0xe5, 0x12, 0x90, 0xe6, 0xb3, 0xf0, 0xe5, 0x13] },
    Record { address: 0x040a, data: &[0x90, 0xe6, 0xb4, 0xf0, 0x02, 0x06, 0x45, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x01, 0xf0, 0x02, 0x06] },
    Record { address: 0x041a, data: &[0x45, 0xe5, 0x0c, 0x90, 0xe6, 0xb3, 0xf0, 0xe5, 0x0d, 0x90, 0xe6, 0xb4, 0xf0, 0x02, 0x06, 0x45] },
    Record { address: 0x042a, data: &[0xe5, 0x0e, 0x90, 0xe6, 0xb3, 0xf0, 0xe5, 0x0f, 0x90, 0xe6, 0xb4, 0xf0, 0x02, 0x06, 0x45, 0x90] },
    Record { address: 0x043a, data: &[0xe6, 0xba, 0xe0, 0xff, 0x12, 0x0b, 0xe2, 0xaa, 0x06, 0xa9, 0x07, 0x7b, 0x01, 0xea, 0x49, 0x4b] },
    Record { address: 0x044a, data: &[0x60, 0x0d, 0xee, 0x90, 0xe6, 0xb3, 0xf0, 0xef, 0x90, 0xe6, 0xb4, 0xf0, 0x02, 0x06, 0x45, 0x90] },
    Record { address: 0x045a, data: &[0xe6, 0xa0, 0xe0, 0x44, 0x01, 0xf0, 0x02, 0x06, 0x45, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x01, 0xf0] },
    Record { address: 0x046a, data: &[0x02, 0x06, 0x45, 0x12, 0x0c, 0xf1, 0x02, 0x06, 0x45, 0x12, 0x0d, 0x50, 0x02, 0x06, 0x45, 0x12] },
    Record { address: 0x047a, data: &[0x0d, 0x48, 0x02, 0x06, 0x45, 0x12, 0x0c, 0xdf, 0x02, 0x06, 0x45, 0x12, 0x0d, 0x6a, 0x40, 0x03] },
    Record { address: 0x048a, data: &[0x02, 0x06, 0x45, 0x90, 0xe6, 0xb8, 0xe0, 0x24, 0x7f, 0x60, 0x2b, 0x14, 0x60, 0x3c, 0x24, 0x02] },
    Record { address: 0x049a, data: &[0x60, 0x03, 0x02, 0x05, 0x24, 0xa2, 0x00, 0xe4, 0x33, 0xff, 0x25, 0xe0, 0xff, 0xa2, 0x02, 0xe4] },
    Record { address: 0x04aa, data: &[0x33, 0x4f, 0x90, 0xe7, 0x40, 0xf0, 0xe4, 0xa3, 0xf0, 0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b] },
    Record { address: 0x04ba, data: &[0x74, 0x02, 0xf0, 0x02, 0x06, 0x45, 0xe4, 0x90, 0xe7, 0x40, 0xf0, 0xa3, 0xf0, 0x90, 0xe6, 0x8a] },
    Record { address: 0x04ca, data: &[0xf0, 0x90, 0xe6, 0x8b, 0x74, 0x02, 0xf0, 0x02, 0x06, 0x45, 0x90, 0xe6, 0xbc, 0xe0, 0x54, 0x7e] },
    Record { address: 0x04da, data: &[0xff, 0x7e, 0x00, 0xe0, 0xd3, 0x94, 0x80, 0x40, 0x06, 0x7c, 0x00, 0x7d, 0x01, 0x80, 0x04, 0x7c] },
    Record { address: 0x04ea, data: &[0x00, 0x7d, 0x00, 0xec, 0x4e, 0xfe, 0xed, 0x4f, 0x24, 0x3e, 0xf5, 0x82, 0x74, 0x0d, 0x3e, 0xf5] },
    Record { address: 0x04fa, data: &[0x83, 0xe4, 0x93, 0xff, 0x33, 0x95, 0xe0, 0xfe, 0xef, 0x24, 0xa1, 0xff, 0xee, 0x34, 0xe6, 0x8f] },
    Record { address: 0x050a, data: &[0x82, 0xf5, 0x83, 0xe0, 0x54, 0x01, 0x90, 0xe7, 0x40, 0xf0, 0xe4, 0xa3, 0xf0, 0x90, 0xe6, 0x8a] },
    Record { address: 0x051a, data: &[0xf0, 0x90, 0xe6, 0x8b, 0x74, 0x02, 0xf0, 0x02, 0x06, 0x45, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x01] },
    Record { address: 0x052a, data: &[0xf0, 0x02, 0x06, 0x45, 0x12, 0x0d, 0x6c, 0x40, 0x03, 0x02, 0x06, 0x45, 0x90, 0xe6, 0xb8, 0xe0] },
    Record { address: 0x053a, data: &[0x24, 0xfe, 0x60, 0x1d, 0x24, 0x02, 0x60, 0x03, 0x02, 0x06, 0x45, 0x90, 0xe6, 0xba, 0xe0, 0xb4] },
    Record { address: 0x054a, data: &[0x01, 0x05, 0xc2, 0x00, 0x02, 0x06, 0x45, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x01, 0xf0, 0x02, 0x06] },
    Record { address: 0x055a, data: &[0x45, 0x90, 0xe6, 0xba, 0xe0, 0x70, 0x59, 0x90, 0xe6, 0xbc, 0xe0, 0x54, 0x7e, 0xff, 0x7e, 0x00] },
    Record { address: 0x056a, data: &[0xe0, 0xd3, 0x94, 0x80, 0x40, 0x06, 0x7c, 0x00, 0x7d, 0x01, 0x80, 0x04, 0x7c, 0x00, 0x7d, 0x00] },
    Record { address: 0x057a, data: &[0xec, 0x4e, 0xfe, 0xed, 0x4f, 0x24, 0x3e, 0xf5, 0x82, 0x74, 0x0d, 0x3e, 0xf5, 0x83, 0xe4, 0x93] },
    Record { address: 0x058a, data: &[0xff, 0x33, 0x95, 0xe0, 0xfe, 0xef, 0x24, 0xa1, 0xff, 0xee, 0x34, 0xe6, 0x8f, 0x82, 0xf5, 0x83] },
    Record { address: 0x059a, data: &[0xe0, 0x54, 0xfe, 0xf0, 0x90, 0xe6, 0xbc, 0xe0, 0x54, 0x80, 0xff, 0x13, 0x13, 0x13, 0x54, 0x1f] },
    Record { address: 0x05aa, data: &[0xff, 0xe0, 0x54, 0x0f, 0x2f, 0x90, 0xe6, 0x83, 0xf0, 0xe0, 0x44, 0x20, 0xf0, 0x02, 0x06, 0x45] },
    Record { address: 0x05ba, data: &[0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x01, 0xf0, 0x02, 0x06, 0x45, 0x12, 0x0d, 0x6e, 0x50, 0x7c, 0x90] },
    Record { address: 0x05ca, data: &[0xe6, 0xb8, 0xe0, 0x24, 0xfe, 0x60, 0x20, 0x24, 0x02, 0x70, 0x5b, 0x90, 0xe6, 0xba, 0xe0, 0xb4] },
    Record { address: 0x05da, data: &[0x01, 0x04, 0xd2, 0x00, 0x80, 0x65, 0x90, 0xe6, 0xba, 0xe0, 0x64, 0x02, 0x60, 0x5d, 0x90, 0xe6] },
    Record { address: 0x05ea, data: &[0xa0, 0xe0, 0x44, 0x01, 0xf0, 0x80, 0x54, 0x90, 0xe6, 0xbc, 0xe0, 0x54, 0x7e, 0xff, 0x7e, 0x00] },
    Record { address: 0x05fa, data: &[0xe0, 0xd3, 0x94, 0x80, 0x40, 0x06, 0x7c, 0x00, 0x7d, 0x01, 0x80, 0x04, 0x7c, 0x00, 0x7d, 0x00] },
    Record { address: 0x060a, data: &[0xec, 0x4e, 0xfe, 0xed, 0x4f, 0x24, 0x3e, 0xf5, 0x82, 0x74, 0x0d, 0x3e, 0xf5, 0x83, 0xe4, 0x93] },
    Record { address: 0x061a, data: &[0xff, 0x33, 0x95, 0xe0, 0xfe, 0xef, 0x24, 0xa1, 0xff, 0xee, 0x34, 0xe6, 0x8f, 0x82, 0xf5, 0x83] },
    Record { address: 0x062a, data: &[0xe0, 0x44, 0x01, 0xf0, 0x80, 0x15, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x01, 0xf0, 0x80, 0x0c, 0x12] },
    Record { address: 0x063a, data: &[0x00, 0x80, 0x50, 0x07, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x01, 0xf0, 0x90, 0xe6, 0xa0, 0xe0, 0x44] },
    Record { address: 0x064a, data: &[0x80, 0xf0, 0x22] },
    Record { address: 0x0033, data: &[0x02, 0x0d, 0x60] },
    Record { address: 0x0d60, data: &[0x53, 0xd8, 0xef, 0x32] },
    Record { address: 0x0c6c, data: &[0xd2, 0x00, 0xe4, 0xf5, 0x1a, 0x90, 0xe6, 0x78, 0xe0, 0x54, 0x10, 0xff, 0xc4, 0x54, 0x0f, 0x44] },
    Record { address: 0x0c7c, data: &[0x50, 0xf5, 0x17, 0x13, 0xe4, 0x33, 0xf5, 0x19, 0x22] },
    Record { address: 0x07ff, data: &[0x22] },
    Record { address: 0x0d64, data: &[0xd3, 0x22, 0xd3, 0x22, 0xd3, 0x22] },
    Record { address: 0x0d48, data: &[0x90, 0xe6, 0xba, 0xe0, 0xf5, 0x18, 0xd3, 0x22] },
    Record { address: 0x0cdf, data: &[0x90, 0xe7, 0x40, 0xe5, 0x18, 0xf0, 0xe4, 0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0x04, 0xf0] },
    Record { address: 0x0cef, data: &[0xd3, 0x22] },
    Record { address: 0x0d50, data: &[0x90, 0xe6, 0xba, 0xe0, 0xf5, 0x16, 0xd3, 0x22] },
    Record { address: 0x0cf1, data: &[0x90, 0xe7, 0x40, 0xe5, 0x16, 0xf0, 0xe4, 0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0x04, 0xf0] },
    Record { address: 0x0d01, data: &[0xd3, 0x22] },
    Record { address: 0x0d6a, data: &[0xd3, 0x22, 0xd3, 0x22, 0xd3, 0x22] },
    Record { address: 0x0080, data: &[0x90, 0xe6, 0xb9, 0xe0, 0x24, 0x5e, 0xb4, 0x0b, 0x00, 0x40, 0x03, 0x02, 0x03, 0x98, 0x90, 0x00] },
    Record { address: 0x0090, data: &[0x9c, 0x75, 0xf0, 0x03, 0xa4, 0xc5, 0x83, 0x25, 0xf0, 0xc5, 0x83, 0x73, 0x02, 0x01, 0x92, 0x02] },
    Record { address: 0x00a0, data: &[0x01, 0x92, 0x02, 0x01, 0x0d, 0x02, 0x00, 0xbd, 0x02, 0x00, 0xd7, 0x02, 0x00, 0xf3, 0x02, 0x01] },
    Record { address: 0x00b0, data: &[0x3c, 0x02, 0x01, 0x8c, 0x02, 0x01, 0x16, 0x02, 0x01, 0x29, 0x02, 0x01, 0x62, 0x90, 0xe7, 0x40] },
    Record { address: 0x00c0, data: &[0xe5, 0x19, 0xf0, 0xe4, 0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0x04, 0xf0, 0x90, 0xe6, 0xa0] },
    Record { address: 0x00d0, data: &[0xe0, 0x44, 0x80, 0xf0, 0x02, 0x03, 0x98, 0x90, 0xe6, 0x0a, 0xe0, 0x90, 0xe7, 0x40, 0xf0, 0xe4] },
    Record { address: 0x00e0, data: &[0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0x04, 0xf0, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x80, 0xf0] },
    Record { address: 0x00f0, data: &[0x02, 0x03, 0x98, 0x90, 0xe7, 0x40, 0x74, 0x0f, 0xf0, 0xe4, 0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6] },
    Record { address: 0x0100, data: &[0x8b, 0x04, 0xf0, 0x90, 0xe6, 0xa0, 0xe0, 0x44, 0x80, 0xf0, 0x02, 0x03, 0x98, 0x90, 0xe6, 0xba] },
    Record { address: 0x0110, data: &[0xe0, 0xf5, 0x17, 0x02, 0x03, 0x98, 0x90, 0xe6, 0x7a, 0xe0, 0x54, 0xfe, 0xf0, 0xe4, 0x90, 0xe6] },
    Record { address: 0x0120, data: &[0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0xf0, 0x02, 0x03, 0x98, 0x90, 0xe6, 0x7a, 0xe0, 0x44, 0x01, 0xf0] },
    Record { address: 0x0130, data: &[0xe4, 0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0xf0, 0x02, 0x03, 0x98, 0x90, 0xe7, 0x40, 0x74] },
    Record { address: 0x0140, data: &[0x07, 0xf0, 0xe4, 0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0x04, 0xf0, 0x90, 0xe6, 0xa0, 0xe0] },
    Record { address: 0x0150, data: &[0x44, 0x80, 0xf0, 0x7f, 0xe8, 0x7e, 0x03, 0x12, 0x07, 0xad, 0xd2, 0x04, 0x12, 0x0b, 0x87, 0x02] },
    Record { address: 0x0160, data: &[0x03, 0x98, 0x90, 0xe6, 0xb5, 0xe0, 0x54, 0xfe, 0xf0, 0x90, 0xe6, 0xbf, 0xe0, 0x90, 0xe6, 0x8a] },
    Record { address: 0x0170, data: &[0xf0, 0x90, 0xe6, 0xbe, 0xe0, 0x90, 0xe6, 0x8b, 0xf0, 0x90, 0xe6, 0xbb, 0xe0, 0x90, 0xe6, 0xb3] },
    Record { address: 0x0180, data: &[0xf0, 0x90, 0xe6, 0xba, 0xe0, 0x90, 0xe6, 0xb4, 0xf0, 0x02, 0x03, 0x98, 0x75, 0x19, 0x01, 0x43] },
    Record { address: 0x0190, data: &[0x17, 0x01, 0x90, 0xe6, 0xba, 0xe0, 0x75, 0x31, 0x00, 0xf5, 0x32, 0xa3, 0xe0, 0xfe, 0xe4, 0xee] },
    Record { address: 0x01a0, data: &[0x42, 0x31, 0x90, 0xe6, 0xbe, 0xe0, 0x75, 0x33, 0x00, 0xf5, 0x34, 0xa3, 0xe0, 0xfe, 0xe4, 0xee] },
    Record { address: 0x01b0, data: &[0x42, 0x33, 0x90, 0xe6, 0xb8, 0xe0, 0x64, 0xc0, 0x60, 0x03, 0x02, 0x02, 0x82, 0xe5, 0x34, 0x45] },
    Record { address: 0x01c0, data: &[0x33, 0x70, 0x03, 0x02, 0x03, 0x98, 0x90, 0xe6, 0xa0, 0xe0, 0x20, 0xe1, 0xf9, 0xc3, 0xe5, 0x34] },
    Record { address: 0x01d0, data: &[0x94, 0x40, 0xe5, 0x33, 0x94, 0x00, 0x50, 0x08, 0x85, 0x33, 0x35, 0x85, 0x34, 0x36, 0x80, 0x06] },
    Record { address: 0x01e0, data: &[0x75, 0x35, 0x00, 0x75, 0x36, 0x40, 0x90, 0xe6, 0xb9, 0xe0, 0xb4, 0xa3, 0x35, 0xe4, 0xf5, 0x37] },
    Record { address: 0x01f0, data: &[0xf5, 0x38, 0xc3, 0xe5, 0x38, 0x95, 0x36, 0xe5, 0x37, 0x95, 0x35, 0x50, 0x60, 0xe5, 0x32, 0x25] },
    Record { address: 0x0200, data: &[0x38, 0xf5, 0x82, 0xe5, 0x31, 0x35, 0x37, 0xf5, 0x83, 0xe0, 0xff, 0x74, 0x40, 0x25, 0x38, 0xf5] },
    Record { address: 0x0210, data: &[0x82, 0xe4, 0x34, 0xe7, 0xf5, 0x83, 0xef, 0xf0, 0x05, 0x38, 0xe5, 0x38, 0x70, 0x02, 0x05, 0x37] },
    Record { address: 0x0220, data: &[0x80, 0xd0, 0xe4, 0xf5, 0x37, 0xf5, 0x38, 0xc3, 0xe5, 0x38, 0x95, 0x36, 0xe5, 0x37, 0x95, 0x35] },
    Record { address: 0x0230, data: &[0x50, 0x18, 0x74, 0x40, 0x25, 0x38, 0xf5, 0x82, 0xe4, 0x34, 0xe7, 0xf5, 0x83, 0x74, 0xcd, 0xf0] },
    Record { address: 0x0240, data: &[0x05, 0x38, 0xe5, 0x38, 0x70, 0x02, 0x05, 0x37, 0x80, 0xdd, 0xad, 0x36, 0x7a, 0xe7, 0x79, 0x40] },
    Record { address: 0x0250, data: &[0x7e, 0xe7, 0x7f, 0x40, 0xab, 0x07, 0xaf, 0x32, 0xae, 0x31, 0x12, 0x08, 0xb8, 0xe4, 0x90, 0xe6] },
    Record { address: 0x0260, data: &[0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0xe5, 0x36, 0xf0, 0x25, 0x32, 0xf5, 0x32, 0xe5, 0x35, 0x35, 0x31] },
    Record { address: 0x0270, data: &[0xf5, 0x31, 0xc3, 0xe5, 0x34, 0x95, 0x36, 0xf5, 0x34, 0xe5, 0x33, 0x95, 0x35, 0xf5, 0x33, 0x02] },
    Record { address: 0x0280, data: &[0x01, 0xbd, 0x90, 0xe6, 0xb8, 0xe0, 0x64, 0x40, 0x60, 0x03, 0x02, 0x03, 0x98, 0xe5, 0x1a, 0x70] },
    Record { address: 0x0290, data: &[0x05, 0x12, 0x09, 0x67, 0x8f, 0x1a, 0xe5, 0x34, 0x45, 0x33, 0x70, 0x03, 0x02, 0x03, 0x98, 0xe4] },
    Record { address: 0x02a0, data: &[0x90, 0xe6, 0x8a, 0xf0, 0x90, 0xe6, 0x8b, 0xf0, 0x90, 0xe6, 0xa0, 0xe0, 0x20, 0xe1, 0xf9, 0x90] },
    Record { address: 0x02b0, data: &[0xe6, 0x8b, 0xe0, 0x75, 0x35, 0x00, 0xf5, 0x36, 0x90, 0xe6, 0xb9, 0xe0, 0xb4, 0xa3, 0x38, 0xe4] },
    Record { address: 0x02c0, data: &[0xf5, 0x37, 0xf5, 0x38, 0xc3, 0xe5, 0x38, 0x95, 0x36, 0xe5, 0x37, 0x95, 0x35, 0x40, 0x03, 0x02] },
    Record { address: 0x02d0, data: &[0x03, 0x7c, 0x74, 0x40, 0x25, 0x38, 0xf5, 0x82, 0xe4, 0x34, 0xe7, 0xf5, 0x83, 0xe0, 0xff, 0xe5] },
    Record { address: 0x02e0, data: &[0x32, 0x25, 0x38, 0xf5, 0x82, 0xe5, 0x31, 0x35, 0x37, 0xf5, 0x83, 0xef, 0xf0, 0x05, 0x38, 0xe5] },
    Record { address: 0x02f0, data: &[0x38, 0x70, 0x02, 0x05, 0x37, 0x80, 0xcd, 0xe4, 0xf5, 0x37, 0xf5, 0x38, 0xc3, 0xe5, 0x38, 0x95] },
    Record { address: 0x0300, data: &[0x36, 0xe5, 0x37, 0x95, 0x35, 0x50, 0x75, 0x85, 0x1a, 0x39, 0xe5, 0x1a, 0x64, 0x01, 0x60, 0x44] },
    Record { address: 0x0310, data: &[0xe5, 0x32, 0x25, 0x38, 0xff, 0xe5, 0x31, 0x35, 0x37, 0xfe, 0xe5, 0x1a, 0x24, 0xff, 0xfd, 0xe4] },
    Record { address: 0x0320, data: &[0x34, 0xff, 0x5e, 0xfe, 0xef, 0x5d, 0x4e, 0x60, 0x10, 0xe5, 0x32, 0x25, 0x38, 0xff, 0xe5, 0x1a] },
    Record { address: 0x0330, data: &[0x14, 0x5f, 0xff, 0xc3, 0xe5, 0x1a, 0x9f, 0xf5, 0x39, 0xc3, 0xe5, 0x36, 0x95, 0x38, 0xff, 0xe5] },
    Record { address: 0x0340, data: &[0x35, 0x95, 0x37, 0xfe, 0xc3, 0xef, 0x95, 0x39, 0xee, 0x94, 0x00, 0x50, 0x07, 0xc3, 0xe5, 0x36] },
    Record { address: 0x0350, data: &[0x95, 0x38, 0xf5, 0x39, 0xe5, 0x32, 0x25, 0x38, 0xff, 0xe5, 0x31, 0x35, 0x37, 0xfe, 0x74, 0x40] },
    Record { address: 0x0360, data: &[0x25, 0x38, 0xf5, 0x82, 0xe4, 0x34, 0xe7, 0xad, 0x82, 0xfc, 0xab, 0x39, 0x12, 0x0a, 0x9c, 0xe5] },
    Record { address: 0x0370, data: &[0x39, 0x25, 0x38, 0xf5, 0x38, 0xe4, 0x35, 0x37, 0xf5, 0x37, 0x80, 0x80, 0xe5, 0x36, 0x25, 0x32] },
    Record { address: 0x0380, data: &[0xf5, 0x32, 0xe5, 0x35, 0x35, 0x31, 0xf5, 0x31, 0xc3, 0xe5, 0x34, 0x95, 0x36, 0xf5, 0x34, 0xe5] },
    Record { address: 0x0390, data: &[0x33, 0x95, 0x35, 0xf5, 0x33, 0x02, 0x02, 0x96, 0xc3, 0x22] },
    Record { address: 0x0c32, data: &[0xc0, 0xe0, 0xc0, 0x83, 0xc0, 0x82, 0x90, 0xe6, 0xb5, 0xe0, 0x44, 0x01, 0xf0, 0xd2, 0x01, 0x53] },
    Record { address: 0x0c42, data: &[0x91, 0xef, 0x90, 0xe6, 0x5d, 0x74, 0x01, 0xf0, 0xd0, 0x82, 0xd0, 0x83, 0xd0, 0xe0, 0x32] },
    Record { address: 0x0c9d, data: &[0xc0, 0xe0, 0xc0, 0x83, 0xc0, 0x82, 0x53, 0x91, 0xef, 0x90, 0xe6, 0x5d, 0x74, 0x04, 0xf0, 0xd0] },
    Record { address: 0x0cad, data: &[0x82, 0xd0, 0x83, 0xd0, 0xe0, 0x32, 0xc0, 0xe0, 0xc0, 0x83, 0xc0, 0x82, 0x53, 0x91, 0xef, 0x90] },
    Record { address: 0x0cbd, data: &[0xe6, 0x5d, 0x74, 0x02, 0xf0, 0xd0, 0x82, 0xd0, 0x83, 0xd0, 0xe0, 0x32] },
    Record { address: 0x0b19, data: &[0xc0, 0xe0, 0xc0, 0x83, 0xc0, 0x82, 0x90, 0xe6, 0x80, 0xe0, 0x30, 0xe7, 0x0e, 0x85, 0x08, 0x0c] },
    Record { address: 0x0b29, data: &[0x85, 0x09, 0x0d, 0x85, 0x10, 0x0e, 0x85, 0x11, 0x0f, 0x80, 0x0c, 0x85, 0x10, 0x0c, 0x85, 0x11] },
    Record { address: 0x0b39, data: &[0x0d, 0x85, 0x08, 0x0e, 0x85, 0x09, 0x0f, 0x53, 0x91, 0xef, 0x90, 0xe6, 0x5d, 0x74, 0x10, 0xf0] },
    Record { address: 0x0b49, data: &[0xd0, 0x82, 0xd0, 0x83, 0xd0, 0xe0, 0x32] },
    Record { address: 0x0c85, data: &[0xc0, 0xe0, 0xc0, 0x83, 0xc0, 0x82, 0xd2, 0x03, 0x53, 0x91, 0xef, 0x90, 0xe6, 0x5d, 0x74, 0x08] },
    Record { address: 0x0c95, data: &[0xf0, 0xd0, 0x82, 0xd0, 0x83, 0xd0, 0xe0, 0x32] },
    Record { address: 0x0b50, data: &[0xc0, 0xe0, 0xc0, 0x83, 0xc0, 0x82, 0x90, 0xe6, 0x80, 0xe0, 0x30, 0xe7, 0x0e, 0x85, 0x08, 0x0c] },
    Record { address: 0x0b60, data: &[0x85, 0x09, 0x0d, 0x85, 0x10, 0x0e, 0x85, 0x11, 0x0f, 0x80, 0x0c, 0x85, 0x10, 0x0c, 0x85, 0x11] },
    Record { address: 0x0b70, data: &[0x0d, 0x85, 0x08, 0x0e, 0x85, 0x09, 0x0f, 0x53, 0x91, 0xef, 0x90, 0xe6, 0x5d, 0x74, 0x20, 0xf0] },
    Record { address: 0x0b80, data: &[0xd0, 0x82, 0xd0, 0x83, 0xd0, 0xe0, 0x32] },
    Record { address: 0x09ff, data: &[0x32] },
    Record { address: 0x0d70, data: &[0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32] },
    Record { address: 0x0d80, data: &[0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32, 0x32] },
    Record { address: 0x0d90, data: &[0x32, 0x32, 0x32] },
    Record { address: 0x0a00, data: &[0x12, 0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x40, 0xb4, 0x04, 0x04, 0x10, 0x00, 0x00, 0x01, 0x02] },
    Record { address: 0x0a10, data: &[0x00, 0x01, 0x0a, 0x06, 0x00, 0x02, 0x00, 0x00, 0x00, 0x40, 0x01, 0x00, 0x09, 0x02, 0x2e, 0x00] },
    Record { address: 0x0a20, data: &[0x01, 0x01, 0x00, 0x80, 0x32, 0x09, 0x04, 0x00, 0x00, 0x04, 0xff, 0x00, 0x00, 0x00, 0x07, 0x05] },
    Record { address: 0x0a30, data: &[0x02, 0x02, 0x00, 0x02, 0x00, 0x07, 0x05, 0x04, 0x02, 0x00, 0x02, 0x00, 0x07, 0x05, 0x86, 0x02] },
    Record { address: 0x0a40, data: &[0x00, 0x02, 0x00, 0x07, 0x05, 0x88, 0x02, 0x00, 0x02, 0x00, 0x09, 0x02, 0x2e, 0x00, 0x01, 0x01] },
    Record { address: 0x0a50, data: &[0x00, 0x80, 0x32, 0x09, 0x04, 0x00, 0x00, 0x04, 0xff, 0x00, 0x00, 0x00, 0x07, 0x05, 0x02, 0x02] },
    Record { address: 0x0a60, data: &[0x40, 0x00, 0x00, 0x07, 0x05, 0x04, 0x02, 0x40, 0x00, 0x00, 0x07, 0x05, 0x86, 0x02, 0x40, 0x00] },
    Record { address: 0x0a70, data: &[0x00, 0x07, 0x05, 0x88, 0x02, 0x40, 0x00, 0x00, 0x04, 0x03, 0x09, 0x04, 0x10, 0x03, 0x43, 0x00] },
    Record { address: 0x0a80, data: &[0x79, 0x00, 0x70, 0x00, 0x72, 0x00, 0x65, 0x00, 0x73, 0x00, 0x73, 0x00, 0x0e, 0x03, 0x45, 0x00] },
    Record { address: 0x0a90, data: &[0x5a, 0x00, 0x2d, 0x00, 0x55, 0x00, 0x53, 0x00, 0x42, 0x00, 0x00, 0x00] },
    Record { address: 0x0bb6, data: &[0x90, 0xe6, 0x82, 0xe0, 0x30, 0xe0, 0x04, 0xe0, 0x20, 0xe6, 0x0b, 0x90, 0xe6, 0x82, 0xe0, 0x30] },
    Record { address: 0x0bc6, data: &[0xe1, 0x19, 0xe0, 0x30, 0xe7, 0x15, 0x90, 0xe6, 0x80, 0xe0, 0x44, 0x01, 0xf0, 0x7f, 0x14, 0x7e] },
    Record { address: 0x0bd6, data: &[0x00, 0x12, 0x07, 0xad, 0x90, 0xe6, 0x80, 0xe0, 0x54, 0xfe, 0xf0, 0x22] },
    Record { address: 0x0b87, data: &[0x30, 0x04, 0x09, 0x90, 0xe6, 0x80, 0xe0, 0x44, 0x0a, 0xf0, 0x80, 0x07, 0x90, 0xe6, 0x80, 0xe0] },
    Record { address: 0x0b97, data: &[0x44, 0x08, 0xf0, 0x7f, 0xdc, 0x7e, 0x05, 0x12, 0x07, 0xad, 0x90, 0xe6, 0x5d, 0x74, 0xff, 0xf0] },
    Record { address: 0x0ba7, data: &[0x90, 0xe6, 0x5f, 0xf0, 0x53, 0x91, 0xef, 0x90, 0xe6, 0x80, 0xe0, 0x54, 0xf7, 0xf0, 0x22] },
    Record { address: 0x07ad, data: &[0x8e, 0x3a, 0x8f, 0x3b, 0x90, 0xe6, 0x00, 0xe0, 0x54, 0x18, 0x70, 0x12, 0xe5, 0x3b, 0x24, 0x01] },
    Record { address: 0x07bd, data: &[0xff, 0xe4, 0x35, 0x3a, 0xc3, 0x13, 0xf5, 0x3a, 0xef, 0x13, 0xf5, 0x3b, 0x80, 0x15, 0x90, 0xe6] },
    Record { address: 0x07cd, data: &[0x00, 0xe0, 0x54, 0x18, 0xff, 0xbf, 0x10, 0x0b, 0xe5, 0x3b, 0x25, 0xe0, 0xf5, 0x3b, 0xe5, 0x3a] },
    Record { address: 0x07dd, data: &[0x33, 0xf5, 0x3a, 0xe5, 0x3b, 0x15, 0x3b, 0xae, 0x3a, 0x70, 0x02, 0x15, 0x3a, 0x4e, 0x60, 0x05] },
    Record { address: 0x07ed, data: &[0x12, 0x0c, 0x21, 0x80, 0xee, 0x22] },
    Record { address: 0x0be2, data: &[0xa9, 0x07, 0xae, 0x14, 0xaf, 0x15, 0x8f, 0x82, 0x8e, 0x83, 0xa3, 0xe0, 0x64, 0x03, 0x70, 0x17] },
    Record { address: 0x0bf2, data: &[0xad, 0x01, 0x19, 0xed, 0x70, 0x01, 0x22, 0x8f, 0x82, 0x8e, 0x83, 0xe0, 0x7c, 0x00, 0x2f, 0xfd] },
    Record { address: 0x0c02, data: &[0xec, 0x3e, 0xfe, 0xaf, 0x05, 0x80, 0xdf, 0xe4, 0xfe, 0xff, 0x22, 0x90, 0xe6, 0x82, 0xe0, 0x44] },
    Record { address: 0x0c12, data: &[0xc0, 0xf0, 0x90, 0xe6, 0x81, 0xf0, 0x43, 0x87, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x22, 0x74] },
    Record { address: 0x0c22, data: &[0x00, 0xf5, 0x86, 0x90, 0xfd, 0xa5, 0x7c, 0x05, 0xa3, 0xe5, 0x82, 0x45, 0x83, 0x70, 0xf9, 0x22] },
    Record { address: 0x0043, data: &[0x02, 0x08, 0x00] },
    Record { address: 0x0053, data: &[0x02, 0x08, 0x00] },
    Record { address: 0x0800, data: &[0x02, 0x0c, 0x32, 0x00, 0x02, 0x0c, 0xb3, 0x00, 0x02, 0x0c, 0x9d, 0x00, 0x02, 0x0c, 0x85, 0x00] },
    Record { address: 0x0810, data: &[0x02, 0x0b, 0x19, 0x00, 0x02, 0x0b, 0x50, 0x00, 0x02, 0x09, 0xff, 0x00, 0x02, 0x0d, 0x70, 0x00] },
    Record { address: 0x0820, data: &[0x02, 0x0d, 0x71, 0x00, 0x02, 0x0d, 0x72, 0x00, 0x02, 0x0d, 0x73, 0x00, 0x02, 0x0d, 0x74, 0x00] },
    Record { address: 0x0830, data: &[0x02, 0x0d, 0x75, 0x00, 0x02, 0x0d, 0x76, 0x00, 0x02, 0x0d, 0x77, 0x00, 0x02, 0x0d, 0x78, 0x00] },
    Record { address: 0x0840, data: &[0x02, 0x0d, 0x79, 0x00, 0x02, 0x0d, 0x70, 0x00, 0x02, 0x0d, 0x7a, 0x00, 0x02, 0x0d, 0x7b, 0x00] },
    Record { address: 0x0850, data: &[0x02, 0x0d, 0x7c, 0x00, 0x02, 0x0d, 0x7d, 0x00, 0x02, 0x0d, 0x7e, 0x00, 0x02, 0x0d, 0x7f, 0x00] },
    Record { address: 0x0860, data: &[0x02, 0x0d, 0x80, 0x00, 0x02, 0x0d, 0x70, 0x00, 0x02, 0x0d, 0x70, 0x00, 0x02, 0x0d, 0x70, 0x00] },
    Record { address: 0x0870, data: &[0x02, 0x0d, 0x81, 0x00, 0x02, 0x0d, 0x82, 0x00, 0x02, 0x0d, 0x83, 0x00, 0x02, 0x0d, 0x84, 0x00] },
    Record { address: 0x0880, data: &[0x02, 0x0d, 0x85, 0x00, 0x02, 0x0d, 0x86, 0x00, 0x02, 0x0d, 0x87, 0x00, 0x02, 0x0d, 0x88, 0x00] },
    Record { address: 0x0890, data: &[0x02, 0x0d, 0x89, 0x00, 0x02, 0x0d, 0x8a, 0x00, 0x02, 0x0d, 0x8b, 0x00, 0x02, 0x0d, 0x8c, 0x00] },
    Record { address: 0x08a0, data: &[0x02, 0x0d, 0x8d, 0x00, 0x02, 0x0d, 0x8e, 0x00, 0x02, 0x0d, 0x8f, 0x00, 0x02, 0x0d, 0x90, 0x00] },
    Record { address: 0x08b0, data: &[0x02, 0x0d, 0x91, 0x00, 0x02, 0x0d, 0x92, 0x00] },
    Record { address: 0x0a9c, data: &[0x8e, 0x3c, 0x8f, 0x3d, 0x8c, 0x3e, 0x8d, 0x3f, 0x8b, 0x40, 0xc2, 0x87, 0x43, 0xb2, 0x80, 0x12] },
    Record { address: 0x0aac, data: &[0x0d, 0x58, 0x12, 0x0d, 0x24, 0x12, 0x0c, 0xc9, 0x50, 0x04, 0xd2, 0x04, 0x80, 0x59, 0xe5, 0x19] },
    Record { address: 0x0abc, data: &[0x60, 0x0f, 0xe5, 0x3c, 0x90, 0xe6, 0x79, 0xf0, 0x12, 0x0c, 0xc9, 0x50, 0x04, 0xd2, 0x04, 0x80] },
    Record { address: 0x0acc, data: &[0x46, 0xe5, 0x3d, 0x90, 0xe6, 0x79, 0xf0, 0x12, 0x0c, 0xc9, 0x50, 0x04, 0xd2, 0x04, 0x80, 0x37] },
    Record { address: 0x0adc, data: &[0xe4, 0xf5, 0x41, 0xe5, 0x41, 0xc3, 0x95, 0x40, 0x50, 0x21, 0x05, 0x3f, 0xe5, 0x3f, 0xae, 0x3e] },
    Record { address: 0x0aec, data: &[0x70, 0x02, 0x05, 0x3e, 0x14, 0xf5, 0x82, 0x8e, 0x83, 0xe0, 0x90, 0xe6, 0x79, 0xf0, 0x12, 0x0d] },
    Record { address: 0x0afc, data: &[0x14, 0x50, 0x04, 0xd2, 0x04, 0x80, 0x10, 0x05, 0x41, 0x80, 0xd8, 0x90, 0xe6, 0x78, 0xe0, 0x44] },
    Record { address: 0x0b0c, data: &[0x40, 0xf0, 0x12, 0x0c, 0x51, 0xc2, 0x04, 0x53, 0xb2, 0x7f, 0xa2, 0x04, 0x22] },
    Record { address: 0x0d24, data: &[0x90, 0xe6, 0x78, 0x74, 0x80, 0xf0, 0xe5, 0x17, 0x25, 0xe0, 0x90, 0xe6, 0x79, 0xf0, 0x22] },
    Record { address: 0x0c51, data: &[0x12, 0x0d, 0x58, 0x12, 0x0d, 0x24, 0x12, 0x0d, 0x14, 0x90, 0xe6, 0x78, 0xe0, 0x44, 0x40, 0xf0] },
    Record { address: 0x0c61, data: &[0x12, 0x0d, 0x58, 0x90, 0xe6, 0x78, 0xe0, 0x30, 0xe1, 0xe9, 0x22] },
    Record { address: 0x0d58, data: &[0x90, 0xe6, 0x78, 0xe0, 0x20, 0xe6, 0xf9, 0x22] },
    Record { address: 0x08b8, data: &[0x8e, 0x3c, 0x8f, 0x3d, 0x8d, 0x3e, 0x8a, 0x3f, 0x8b, 0x40, 0x12, 0x0d, 0x58, 0x12, 0x0d, 0x24] },
    Record { address: 0x08c8, data: &[0x12, 0x0c, 0xc9, 0x50, 0x01, 0x22, 0xe5, 0x19, 0x60, 0x0c, 0xe5, 0x3c, 0x90, 0xe6, 0x79, 0xf0] },
    Record { address: 0x08d8, data: &[0x12, 0x0c, 0xc9, 0x50, 0x01, 0x22, 0xe5, 0x3d, 0x90, 0xe6, 0x79, 0xf0, 0x12, 0x0c, 0xc9, 0x50] },
    Record { address: 0x08e8, data: &[0x01, 0x22, 0x90, 0xe6, 0x78, 0x74, 0x80, 0xf0, 0xe5, 0x17, 0x25, 0xe0, 0x44, 0x01, 0x90, 0xe6] },
    Record { address: 0x08f8, data: &[0x79, 0xf0, 0x12, 0x0d, 0x14, 0x50, 0x01, 0x22, 0x90, 0xe6, 0x79, 0xe0, 0xf5, 0x41, 0x12, 0x0d] },
    Record { address: 0x0908, data: &[0x14, 0x50, 0x01, 0x22, 0xe4, 0xf5, 0x41, 0xe5, 0x3e, 0x14, 0xff, 0xe5, 0x41, 0xc3, 0x9f, 0x50] },
    Record { address: 0x0918, data: &[0x1c, 0x90, 0xe6, 0x79, 0xe0, 0xff, 0xe5, 0x40, 0x25, 0x41, 0xf5, 0x82, 0xe4, 0x35, 0x3f, 0xf5] },
    Record { address: 0x0928, data: &[0x83, 0xef, 0xf0, 0x12, 0x0d, 0x14, 0x50, 0x01, 0x22, 0x05, 0x41, 0x80, 0xda, 0x90, 0xe6, 0x78] },
    Record { address: 0x0938, data: &[0x74, 0x20, 0xf0, 0x12, 0x0d, 0x14, 0x50, 0x01, 0x22, 0x90, 0xe6, 0x79, 0xe0, 0xff, 0xe5, 0x40] },
    Record { address: 0x0948, data: &[0x25, 0x41, 0xf5, 0x82, 0xe4, 0x35, 0x3f, 0xf5, 0x83, 0xef, 0xf0, 0x12, 0x0d, 0x14, 0x50, 0x01] },
    Record { address: 0x0958, data: &[0x22, 0x90, 0xe6, 0x78, 0x74, 0x40, 0xf0, 0x90, 0xe6, 0x79, 0xe0, 0xf5, 0x41, 0xc3, 0x22] },
    Record { address: 0x0d14, data: &[0x90, 0xe6, 0x78, 0xe0, 0xff, 0x30, 0xe0, 0xf8, 0xef, 0x30, 0xe2, 0x02, 0xd3, 0x22, 0xc3, 0x22] },
    Record { address: 0x0cc9, data: &[0x90, 0xe6, 0x78, 0xe0, 0xff, 0x30, 0xe0, 0xf8, 0xef, 0x30, 0xe2, 0x02, 0xd3, 0x22, 0xef, 0x20] },
    Record { address: 0x0cd9, data: &[0xe1, 0x02, 0xd3, 0x22, 0xc3, 0x22] },
    Record { address: 0x0967, data: &[0xe5, 0x19, 0x70, 0x03, 0x7f, 0x01, 0x22, 0x7a, 0x10, 0x7b, 0x40, 0x7d, 0x40, 0xe4, 0xff, 0xfe] },
    Record { address: 0x0977, data: &[0x12, 0x08, 0xb8, 0xe4, 0xf5, 0x3a, 0x74, 0x00, 0x25, 0x3a, 0xf5, 0x82, 0xe4, 0x34, 0x10, 0xf5] },
    Record { address: 0x0987, data: &[0x83, 0xe5, 0x3a, 0xf0, 0x05, 0x3a, 0xe5, 0x3a, 0xb4, 0x40, 0xeb, 0x7c, 0x10, 0x7d, 0x00, 0x7b] },
    Record { address: 0x0997, data: &[0x40, 0xe4, 0xff, 0xfe, 0x12, 0x0a, 0x9c, 0xe4, 0xf5, 0x3a, 0xe5, 0x3a, 0xf4, 0xff, 0x74, 0x00] },
    Record { address: 0x09a7, data: &[0x25, 0x3a, 0xf5, 0x82, 0xe4, 0x34, 0x10, 0xf5, 0x83, 0xef, 0xf0, 0x05, 0x3a, 0xe5, 0x3a, 0xb4] },
    Record { address: 0x09b7, data: &[0x40, 0xe8, 0x7a, 0x10, 0x7b, 0x00, 0x7d, 0x40, 0xe4, 0xff, 0xfe, 0x12, 0x08, 0xb8, 0x90, 0x10] },
    Record { address: 0x09c7, data: &[0x00, 0xe0, 0xf5, 0x3a, 0xe5, 0x3a, 0x30, 0xe0, 0x05, 0x75, 0x3b, 0x01, 0x80, 0x08, 0x63, 0x3a] },
    Record { address: 0x09d7, data: &[0x3f, 0x05, 0x3a, 0x85, 0x3a, 0x3b, 0xe4, 0xf5, 0x3a, 0xe5, 0x3a, 0xc3, 0x94, 0x40, 0x50, 0x15] },
    Record { address: 0x09e7, data: &[0xaf, 0x3a, 0x7e, 0x00, 0x7c, 0x10, 0x7d, 0x40, 0xab, 0x3b, 0x12, 0x0a, 0x9c, 0xe5, 0x3b, 0x25] },
    Record { address: 0x09f7, data: &[0x3a, 0xf5, 0x3a, 0x80, 0xe4, 0xaf, 0x3b, 0x22] },
    Record { address: 0x0000, data: &[0x02, 0x07, 0xf3] },
    Record { address: 0x07f3, data: &[0x78, 0x7f, 0xe4, 0xf6, 0xd8, 0xfd, 0x75, 0x81, 0x41, 0x02, 0x06, 0x4d] },
    Record { address: 0x0d03, data: &[0xeb, 0x9f, 0xf5, 0xf0, 0xea, 0x9e, 0x42, 0xf0, 0xe9, 0x9d, 0x42, 0xf0, 0xe8, 0x9c, 0x45, 0xf0] },
    Record { address: 0x0d13, data: &[0x22] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::memory::{CPUCS_ADDRESS, INTERNAL_RAM_SIZE};
    use crate::transport::mock::RecordingTransport;

    #[test]
    fn test_table() {
        assert_eq!(BOOTSTRAP.len(), 230);
        assert_eq!(BOOTSTRAP.iter().map(|r| r.data.len()).sum::<usize>(), 3359);
        assert_eq!(BOOTSTRAP[0].address, 0x0d3e);
        assert_eq!(BOOTSTRAP[229].address, 0x0d13);
        assert!(BOOTSTRAP
            .iter()
            .all(|r| usize::from(r.address) + r.data.len() <= INTERNAL_RAM_SIZE));
        assert!(BOOTSTRAP.iter().all(|r| !r.data.is_empty() && r.data.len() <= 16));
    }

    #[test]
    fn test_inject_uploads_then_starts() {
        let mut transport = RecordingTransport::default();
        let _loader = inject(&mut transport).unwrap();

        assert_eq!(transport.transfers.len(), BOOTSTRAP.len() + 1);
        for (transfer, record) in transport.transfers.iter().zip(BOOTSTRAP) {
            assert_eq!(transfer.command, VendorCommand::FirmwareLoad);
            assert_eq!(transfer.address, record.address);
            assert_eq!(transfer.data, record.data);
        }
        let last = transport.transfers.last().unwrap();
        assert_eq!(last.address, CPUCS_ADDRESS);
        assert_eq!(last.data, vec![0]);
    }

    #[test]
    fn test_short_record_aborts_without_release() {
        let mut transport = RecordingTransport {
            short_at: Some((3, 15)),
            ..Default::default()
        };
        let err = inject(&mut transport).unwrap_err();
        assert!(matches!(
            err,
            Error::ShortTransfer {
                stage: Stage::BootstrapInjecting,
                address: 0x066d,
                expected: 16,
                actual: 15,
            }
        ));
        assert_eq!(transport.transfers.len(), 4);
        assert!(transport.cpucs_writes().is_empty());
    }
}
