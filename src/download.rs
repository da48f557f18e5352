//! The download sequence: reset, optional bootstrap, data transfer and release, per target.

use crate::bootstrap;
use crate::command::VendorCommand;
use crate::cpu;
use crate::error::{Error, Result};
use crate::image::FirmwareImage;
use crate::memory::{EepromKind, INTERNAL_RAM_SIZE};
use crate::operation::{ChunkedWrite, EepromWrite, Operation};
use crate::transport::ControlTransport;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Time the device is given after the CPU has been put into reset.
pub const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Where the firmware should end up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    /// Internal (and, with the bootstrap loader, external) RAM. Runs immediately.
    Ram,

    /// Small boot EEPROM; the file is written as is.
    SmallEeprom,

    /// Large boot EEPROM; the file is written as is.
    LargeEeprom,
}

impl Target {
    pub fn eeprom_kind(self) -> Option<EepromKind> {
        match self {
            Target::Ram => None,
            Target::SmallEeprom => Some(EepromKind::Small),
            Target::LargeEeprom => Some(EepromKind::Large),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Ram => "RAM",
            Target::SmallEeprom => "small EEPROM",
            Target::LargeEeprom => "large EEPROM",
        })
    }
}

/// Firmware to download.
#[derive(Debug)]
pub enum FirmwareSource {
    /// A file, decoded for RAM targets and written verbatim to EEPROMs.
    File(PathBuf),

    /// An image decoded beforehand. Only usable for RAM.
    Image(FirmwareImage),
}

/// Everything needed to carry out one download.
#[derive(Debug)]
pub struct DownloadRequest {
    pub target: Target,
    pub source: FirmwareSource,

    /// Allows RAM images beyond the internal 16 KiB, loaded through the bootstrap loader.
    pub extended: bool,
}

impl DownloadRequest {
    /// Creates a request with extended RAM support enabled.
    pub fn new(target: Target, source: FirmwareSource) -> Self {
        Self {
            target,
            source,
            extended: true,
        }
    }

    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Checks everything that can be checked without a device. Meant to be called before a
    /// device is opened; [`Downloader::download`] repeats the checks.
    ///
    /// [`Downloader::download`]: struct.Downloader.html#method.download
    pub fn validate(&self) -> Result<()> {
        match (&self.source, self.target.eeprom_kind()) {
            (FirmwareSource::Image(_), Some(_)) => Err(Error::Format(
                "EEPROM targets need the raw firmware file".into(),
            )),
            (FirmwareSource::Image(image), None) => check_ram_size(image, self.extended),
            (FirmwareSource::File(path), Some(kind)) => {
                let size = fs::metadata(path)?.len() as usize;
                check_eeprom_size(kind, size)
            }
            (FirmwareSource::File(path), None) => {
                fs::metadata(path)?;
                Ok(())
            }
        }
    }
}

fn check_ram_size(image: &FirmwareImage, extended: bool) -> Result<()> {
    if image.high_water_mark() > INTERNAL_RAM_SIZE && !extended {
        return Err(Error::Capacity {
            what: "firmware for internal RAM",
            limit: INTERNAL_RAM_SIZE,
            required: image.high_water_mark(),
        });
    }
    Ok(())
}

fn check_eeprom_size(kind: EepromKind, size: usize) -> Result<()> {
    match kind.max_source_size() {
        Some(limit) if size > limit => Err(Error::Capacity {
            what: "EEPROM file",
            limit,
            required: size,
        }),
        _ => Ok(()),
    }
}

/// States of a download. A download moves forward through these and ends in `Done` or `Failed`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Idle,
    Resetting,
    BootstrapInjecting,
    ExternalTransfer,
    PrimaryTransfer,
    Releasing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Idle => "idle",
            Stage::Resetting => "reset",
            Stage::BootstrapInjecting => "bootstrap injection",
            Stage::ExternalTransfer => "external RAM transfer",
            Stage::PrimaryTransfer => "primary transfer",
            Stage::Releasing => "release",
            Stage::Done => "done",
            Stage::Failed => "failed",
        })
    }
}

/// Progress notifications emitted during a download.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Progress {
    /// A new stage was entered.
    Stage(Stage),

    /// A chunk was written; `done` of `total` bytes of the current transfer are on the device.
    Transferred {
        stage: Stage,
        done: usize,
        total: usize,
    },
}

type ProgressCallback<'a> = Box<dyn FnMut(Progress) + 'a>;

fn emit(progress: &mut Option<ProgressCallback<'_>>, event: Progress) {
    if let Some(callback) = progress {
        callback(event);
    }
}

/// Runs an operation to completion, reporting each chunk.
fn transfer<O: Operation>(
    mut operation: O,
    stage: Stage,
    progress: &mut Option<ProgressCallback<'_>>,
) -> Result<()> {
    let total = operation.total();
    for done in &mut operation {
        let done = done?;
        emit(progress, Progress::Transferred { stage, done, total });
    }
    Ok(())
}

/// Carries out downloads on a borrowed device session.
///
/// # Example
/// ```rust, no_run
/// use fx2_download::{Context, Downloader, DownloadRequest, FirmwareSource, Target};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let context = Context::new()?;
/// let mut handle = context.pick_target(None)?.open(&context)?;
///
/// let request = DownloadRequest::new(Target::Ram, FirmwareSource::File("fw.hex".into()));
/// request.validate()?;
/// Downloader::new(&mut handle)
///     .on_progress(|event| println!("{:?}", event))
///     .download(&request)?;
/// # Ok(())
/// # }
/// ```
pub struct Downloader<'t, C: ControlTransport + ?Sized> {
    transport: &'t mut C,
    settle_delay: Duration,
    stage: Stage,
    progress: Option<ProgressCallback<'t>>,
}

impl<'t, C: ControlTransport + ?Sized> Downloader<'t, C> {
    pub fn new(transport: &'t mut C) -> Self {
        Self {
            transport,
            settle_delay: SETTLE_DELAY,
            stage: Stage::Idle,
            progress: None,
        }
    }

    /// Overrides the pause after putting the CPU into reset for a RAM download.
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Registers a callback for stage changes and transfer progress.
    pub fn on_progress<F: FnMut(Progress) + 't>(mut self, callback: F) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Current stage. After a failed download this is [`Stage::Failed`].
    ///
    /// [`Stage::Failed`]: enum.Stage.html#variant.Failed
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Carries out a download request.
    pub fn download(&mut self, request: &DownloadRequest) -> Result<()> {
        match (&request.source, request.target.eeprom_kind()) {
            (FirmwareSource::Image(image), None) => self.download_ram(image, request.extended),
            (FirmwareSource::File(path), None) => match FirmwareImage::load(path) {
                Ok(image) => self.download_ram(&image, request.extended),
                Err(error) => self.finish(Err(error)),
            },
            (FirmwareSource::File(path), Some(kind)) => {
                let opened = fs::metadata(path)
                    .and_then(|metadata| Ok((File::open(path)?, metadata.len() as usize)));
                match opened {
                    Ok((file, size)) => self.download_eeprom(kind, BufReader::new(file), size),
                    Err(error) => self.finish(Err(error.into())),
                }
            }
            (FirmwareSource::Image(_), Some(_)) => self.finish(Err(Error::Format(
                "EEPROM targets need the raw firmware file".into(),
            ))),
        }
    }

    /// Loads a decoded image into RAM and starts it.
    ///
    /// Images beyond the internal RAM need `extended`: the part above 16 KiB is written first
    /// through the bootstrap loader, then the CPU is halted again and the internal part written
    /// through the boot ROM.
    pub fn download_ram(&mut self, image: &FirmwareImage, extended: bool) -> Result<()> {
        self.stage = Stage::Idle;
        let result = self.run_ram(image, extended);
        self.finish(result)
    }

    /// Writes a raw EEPROM image of `size` bytes from `reader`.
    ///
    /// The CPU is left running the bootstrap loader afterwards; it is not reset again.
    pub fn download_eeprom<R: Read>(
        &mut self,
        kind: EepromKind,
        reader: R,
        size: usize,
    ) -> Result<()> {
        self.stage = Stage::Idle;
        let result = self.run_eeprom(kind, reader, size);
        self.finish(result)
    }

    fn enter(&mut self, stage: Stage) {
        log::info!("Stage: {} -> {}", self.stage, stage);
        self.stage = stage;
        emit(&mut self.progress, Progress::Stage(stage));
    }

    fn finish(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => self.enter(Stage::Done),
            Err(ref error) => {
                log::warn!("Download failed during {}: {}", self.stage, error);
                self.enter(Stage::Failed);
            }
        }
        result
    }

    fn run_ram(&mut self, image: &FirmwareImage, extended: bool) -> Result<()> {
        check_ram_size(image, extended)?;

        let mut end = image.high_water_mark();

        self.enter(Stage::Resetting);
        cpu::hold(&mut *self.transport, Stage::Resetting)?;
        thread::sleep(self.settle_delay);

        if end > INTERNAL_RAM_SIZE {
            self.enter(Stage::BootstrapInjecting);
            let loader = bootstrap::inject(&mut *self.transport)?;

            log::info!(
                "Writing 0x{:04x}..0x{:04x} to external RAM",
                INTERNAL_RAM_SIZE,
                end
            );
            self.enter(Stage::ExternalTransfer);
            let operation = ChunkedWrite::external_range(
                &mut *self.transport,
                &loader,
                Stage::ExternalTransfer,
                image.data(),
                INTERNAL_RAM_SIZE..end,
            )?;
            transfer(operation, Stage::ExternalTransfer, &mut self.progress)?;

            // Stop the bootstrap loader before overwriting it through the boot ROM
            self.enter(Stage::Resetting);
            loader.halt(&mut *self.transport, Stage::Resetting)?;
            end = INTERNAL_RAM_SIZE;
        }

        log::info!("Writing 0x0000..0x{:04x} to internal RAM", end);
        self.enter(Stage::PrimaryTransfer);
        let operation = ChunkedWrite::range(
            &mut *self.transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            image.data(),
            0..end,
        )?;
        transfer(operation, Stage::PrimaryTransfer, &mut self.progress)?;

        self.enter(Stage::Releasing);
        cpu::release(&mut *self.transport, Stage::Releasing)
    }

    fn run_eeprom<R: Read>(&mut self, kind: EepromKind, reader: R, size: usize) -> Result<()> {
        check_eeprom_size(kind, size)?;

        self.enter(Stage::Resetting);
        cpu::hold(&mut *self.transport, Stage::Resetting)?;

        // The EEPROM write requests are only implemented by the bootstrap loader
        self.enter(Stage::BootstrapInjecting);
        let loader = bootstrap::inject(&mut *self.transport)?;

        log::info!("Writing {} bytes to {:?} EEPROM", size, kind);
        self.enter(Stage::PrimaryTransfer);
        let operation = EepromWrite::new(&mut *self.transport, &loader, kind, reader, size);
        transfer(operation, Stage::PrimaryTransfer, &mut self.progress)
    }
}
