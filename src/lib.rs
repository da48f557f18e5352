//! This crate downloads firmware into Cypress FX2LP USB microcontrollers connected via USB: into
//! RAM, where it runs right away, or into the serial EEPROM the chip boots from.
//!
//! # Example: Loading a HEX file into RAM
//! ```rust, no_run
//! use fx2_download::{Context, Downloader, FirmwareImage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Decode the firmware file
//! let image = FirmwareImage::load("firmware.hex")?;
//!
//! // Find an FX2LP with the default IDs
//! let context = Context::new()?;
//! let mut target_handle = context.pick_target(None)?.open(&context)?;
//!
//! // Hold the CPU, write RAM (external RAM through the bootstrap loader if needed), run
//! Downloader::new(&mut target_handle).download_ram(&image, true)?;
//!
//! println!("Done!");
//! # Ok(())
//! # }
//! ```
//!
//! Transfers are split into chunks of at most [`MAX_CHUNK_SIZE`] bytes; see the [`Operation`]
//! trait and [`Downloader::on_progress`] for progress feedback.
//!
//! [`MAX_CHUNK_SIZE`]: constant.MAX_CHUNK_SIZE.html
//! [`Operation`]: trait.Operation.html
//! [`Downloader::on_progress`]: struct.Downloader.html#method.on_progress

pub mod bootstrap;
mod command;
mod context;
pub mod cpu;
mod download;
mod error;
mod format;
mod hex;
mod iic;
mod image;
mod memory;
mod operation;
mod target;
mod target_handle;
mod transport;

pub use command::VendorCommand;
pub use context::{Context, DEFAULT_IDS};
pub use download::{
    DownloadRequest, Downloader, FirmwareSource, Progress, Stage, Target, SETTLE_DELAY,
};
pub use error::{Error, ErrorKind, Result};
pub use format::{detect as detect_format, detect_file, FirmwareFormat};
pub use image::FirmwareImage;
pub use memory::{
    EepromKind, CPUCS_ADDRESS, INTERNAL_RAM_SIZE, MAX_CHUNK_SIZE, MAX_FIRMWARE_SIZE,
};
pub use operation::{ChunkedWrite, EepromWrite, Operation};
pub use rusb::UsbContext;
pub use target::TargetInfo;
pub use target_handle::TargetHandle;
pub use transport::ControlTransport;

/// Timeout for all usb transactions.
pub const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
