use crate::command::VendorCommand;
use crate::download::Stage;
use crate::format::FirmwareFormat;
use std::result::Result as StdResult;
use thiserror::Error;

/// Errors which can occur while decoding firmware and talking to the target.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The firmware file could not be parsed.
    #[error("Invalid firmware file: {0}")]
    Format(String),

    /// The firmware file was recognised, but there is no way to load it.
    #[error("Unsupported firmware format: {0}")]
    UnsupportedFormat(FirmwareFormat),

    /// The firmware, or a part of it, does not fit into the memory it is destined for.
    #[error("{what} needs {required} bytes, but only {limit} are available")]
    Capacity {
        what: &'static str,
        limit: usize,
        required: usize,
    },

    /// The device acknowledged fewer bytes than were sent.
    #[error(
        "{stage}: short control transfer at 0x{address:04x} ({actual} of {expected} bytes accepted)"
    )]
    ShortTransfer {
        stage: Stage,
        address: u16,
        expected: usize,
        actual: usize,
    },

    /// The control transfer itself failed (timeout, stall, device gone).
    #[error("{stage}: control transfer at 0x{address:04x} failed: {source}")]
    Usb {
        stage: Stage,
        address: u16,
        #[source]
        source: rusb::Error,
    },

    /// A request only the bootstrap loader answers was issued without the loader running.
    #[error("{stage}: {command:?} request needs the bootstrap loader running")]
    LoaderNotRunning {
        stage: Stage,
        command: VendorCommand,
    },

    /// Reading the firmware file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No FX2LP device with the requested IDs is attached.
    #[error("Target not found")]
    TargetNotFound,

    /// The request was not specific enough and returned in multiple matches where only a single
    /// one is supported.
    #[error("More than one matching device found")]
    TooManyMatches,

    /// Listing or opening USB devices failed.
    #[error("USB error: {0}")]
    Enumeration(#[from] rusb::Error),
}

/// Coarse classification of [`Error`], suitable for reporting a distinct outcome.
///
/// [`Error`]: enum.Error.html
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Format,
    Capacity,
    Transport,
    Io,
    Device,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) | Error::UnsupportedFormat(_) => ErrorKind::Format,
            Error::Capacity { .. } => ErrorKind::Capacity,
            Error::ShortTransfer { .. } | Error::Usb { .. } | Error::LoaderNotRunning { .. } => {
                ErrorKind::Transport
            }
            Error::Io(_) => ErrorKind::Io,
            Error::TargetNotFound | Error::TooManyMatches | Error::Enumeration(_) => {
                ErrorKind::Device
            }
        }
    }
}

/// Shorthand for a Result with the crate's own Error type.
pub type Result<T> = StdResult<T, Error>;
