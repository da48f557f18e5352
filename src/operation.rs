use std::io::{self, Read};
use std::iter::Enumerate;
use std::ops::Range;
use std::slice::Chunks;

use crate::bootstrap::Loader;
use crate::command::VendorCommand;
use crate::download::Stage;
use crate::error::{Error, Result};
use crate::memory::{EepromKind, MAX_CHUNK_SIZE, MAX_FIRMWARE_SIZE};
use crate::transport::{write_all, ControlTransport};

/// A transfer split into chunks. Iterating sends one chunk per step and yields the number of
/// bytes transferred so far. The iterator is fused after the first error.
pub trait Operation: Iterator<Item = Result<usize>> {
    /// Number of bytes the operation will have transferred once finished.
    fn total(&self) -> usize;

    /// Runs the operation to completion without progress feedback.
    fn execute(&mut self) -> Result<()> {
        if let Some(Err(error)) = self.last() {
            Err(error)
        } else {
            Ok(())
        }
    }
}

/// Writes a slice of memory to the device, one control transfer per chunk, with the device
/// address following the source offset.
pub struct ChunkedWrite<'t, 'd, C: ControlTransport + ?Sized> {
    transport: &'t mut C,
    stage: Stage,
    command: VendorCommand,
    address: usize,
    chunks: Enumerate<Chunks<'d, u8>>,
    chunk_size: usize,
    length: usize,
    done: bool,
}

impl<C: ControlTransport + ?Sized> Operation for ChunkedWrite<'_, '_, C> {
    fn total(&self) -> usize {
        self.length
    }
}

impl<C: ControlTransport + ?Sized> Iterator for ChunkedWrite<'_, '_, C> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some((i, chunk)) = self.chunks.next() {
            let address = (self.address + i * self.chunk_size) as u16;
            Some(
                match write_all(&mut *self.transport, self.stage, self.command, address, chunk) {
                    Ok(()) => Ok(i * self.chunk_size + chunk.len()),
                    Err(error) => {
                        self.done = true;
                        Err(error)
                    }
                },
            )
        } else {
            self.done = true;
            None
        }
    }
}

impl<'t, 'd, C: ControlTransport + ?Sized> ChunkedWrite<'t, 'd, C> {
    /// Writes `source[range]` to device addresses `base_address + range.start` onwards in chunks
    /// of at most `chunk_size` bytes.
    ///
    /// Only boot ROM requests are accepted here; see [`ChunkedWrite::external_range`] for writes
    /// through the bootstrap loader.
    ///
    /// [`ChunkedWrite::external_range`]: struct.ChunkedWrite.html#method.external_range
    pub fn new(
        transport: &'t mut C,
        stage: Stage,
        command: VendorCommand,
        base_address: u16,
        source: &'d [u8],
        range: Range<usize>,
        chunk_size: usize,
    ) -> Result<Self> {
        if command.requires_bootstrap() {
            return Err(Error::LoaderNotRunning { stage, command });
        }
        Self::build(transport, stage, command, base_address, source, range, chunk_size)
    }

    /// Writes `source[range]` to the same device addresses through the bootstrap loader's
    /// external RAM request, in chunks of [`MAX_CHUNK_SIZE`].
    ///
    /// [`MAX_CHUNK_SIZE`]: constant.MAX_CHUNK_SIZE.html
    pub fn external_range(
        transport: &'t mut C,
        _loader: &Loader,
        stage: Stage,
        source: &'d [u8],
        range: Range<usize>,
    ) -> Result<Self> {
        Self::build(
            transport,
            stage,
            VendorCommand::ExternalRam,
            0,
            source,
            range,
            MAX_CHUNK_SIZE,
        )
    }

    fn build(
        transport: &'t mut C,
        stage: Stage,
        command: VendorCommand,
        base_address: u16,
        source: &'d [u8],
        range: Range<usize>,
        chunk_size: usize,
    ) -> Result<Self> {
        if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
            return Err(Error::Capacity {
                what: "control transfer chunk",
                limit: MAX_CHUNK_SIZE,
                required: chunk_size,
            });
        }
        if range.start > range.end || range.end > source.len() {
            return Err(Error::Capacity {
                what: "transfer range",
                limit: source.len(),
                required: range.end,
            });
        }
        let address = usize::from(base_address) + range.start;
        let end = usize::from(base_address) + range.end;
        if end > MAX_FIRMWARE_SIZE {
            return Err(Error::Capacity {
                what: "device address space",
                limit: MAX_FIRMWARE_SIZE,
                required: end,
            });
        }

        let data = &source[range];
        Ok(Self {
            transport,
            stage,
            command,
            address,
            chunks: data.chunks(chunk_size).enumerate(),
            chunk_size,
            length: data.len(),
            done: data.is_empty(),
        })
    }

    /// Writes `source[range]` to the same device addresses, in chunks of [`MAX_CHUNK_SIZE`].
    /// Boot ROM requests only, like [`ChunkedWrite::new`].
    ///
    /// [`ChunkedWrite::new`]: struct.ChunkedWrite.html#method.new
    ///
    /// [`MAX_CHUNK_SIZE`]: constant.MAX_CHUNK_SIZE.html
    pub fn range(
        transport: &'t mut C,
        stage: Stage,
        command: VendorCommand,
        source: &'d [u8],
        range: Range<usize>,
    ) -> Result<Self> {
        Self::new(transport, stage, command, 0, source, range, MAX_CHUNK_SIZE)
    }
}

/// Streams a raw EEPROM image from a reader to the device in blocks of [`MAX_CHUNK_SIZE`] bytes.
///
/// Each block is padded up to the EEPROM's write granularity. The padding is taken from the
/// block buffer as it is: zeros for the first block, the tail of the previous block afterwards.
/// The device address advances by the padded length.
///
/// [`MAX_CHUNK_SIZE`]: constant.MAX_CHUNK_SIZE.html
pub struct EepromWrite<'t, C: ControlTransport + ?Sized, R: Read> {
    transport: &'t mut C,
    kind: EepromKind,
    reader: R,
    buffer: [u8; MAX_CHUNK_SIZE],
    address: usize,
    total: usize,
    transferred: usize,
    done: bool,
}

impl<C: ControlTransport + ?Sized, R: Read> Operation for EepromWrite<'_, C, R> {
    fn total(&self) -> usize {
        self.total
    }
}

impl<C: ControlTransport + ?Sized, R: Read> Iterator for EepromWrite<'_, C, R> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.write_block();
        match result {
            Ok(Some(transferred)) => Some(Ok(transferred)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl<'t, C: ControlTransport + ?Sized, R: Read> EepromWrite<'t, C, R> {
    /// `total` is the size of the source, used for progress reporting only. The EEPROM requests
    /// are answered by the bootstrap loader, hence the `Loader`.
    pub fn new(
        transport: &'t mut C,
        _loader: &Loader,
        kind: EepromKind,
        reader: R,
        total: usize,
    ) -> Self {
        Self {
            transport,
            kind,
            reader,
            buffer: [0u8; MAX_CHUNK_SIZE],
            address: 0,
            total,
            transferred: 0,
            done: false,
        }
    }

    /// Device address the next block will be written to.
    pub fn address(&self) -> usize {
        self.address
    }

    /// Reads until the buffer is full or the source is exhausted.
    fn fill_buffer(&mut self) -> Result<usize> {
        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    fn write_block(&mut self) -> Result<Option<usize>> {
        let read = self.fill_buffer()?;
        if read == 0 {
            return Ok(None);
        }

        let length = self.kind.round_up(read);
        let end = self.address + length;
        if end > MAX_FIRMWARE_SIZE {
            return Err(Error::Capacity {
                what: "EEPROM address space",
                limit: MAX_FIRMWARE_SIZE,
                required: end,
            });
        }

        write_all(
            &mut *self.transport,
            Stage::PrimaryTransfer,
            self.kind.into(),
            self.address as u16,
            &self.buffer[..length],
        )?;
        log::debug!(
            "Wrote {} bytes ({} padded) to EEPROM at 0x{:04x}",
            read,
            length,
            self.address
        );

        self.address = end;
        self.transferred += read;
        Ok(Some(self.transferred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::RecordingTransport;
    use std::io::Cursor;

    fn pattern(length: usize) -> Vec<u8> {
        (0..length).map(|i| (i * 7 + 3) as u8).collect()
    }

    #[test]
    fn test_chunked_write_splits_range() {
        let source = pattern(0x1000);
        let mut transport = RecordingTransport::default();
        let progress: Vec<usize> = ChunkedWrite::range(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            &source,
            0..2500,
        )
        .unwrap()
        .map(|r| r.unwrap())
        .collect();

        assert_eq!(progress, vec![1024, 2048, 2500]);
        let addresses: Vec<u16> = transport.transfers.iter().map(|t| t.address).collect();
        assert_eq!(addresses, vec![0, 1024, 2048]);
        assert_eq!(transport.transfers[2].data.len(), 452);
        assert_eq!(transport.transfers[1].data, &source[1024..2048]);
    }

    #[test]
    fn test_chunked_write_external_range() {
        let source = pattern(0x5000);
        let loader = Loader::assume_running();
        let mut transport = RecordingTransport::default();
        let mut write = ChunkedWrite::external_range(
            &mut transport,
            &loader,
            Stage::ExternalTransfer,
            &source,
            0x4000..0x4801,
        )
        .unwrap();
        assert_eq!(write.total(), 0x801);
        write.execute().unwrap();

        let writes: Vec<(u16, usize)> = transport
            .transfers
            .iter()
            .map(|t| (t.address, t.data.len()))
            .collect();
        assert_eq!(writes, vec![(0x4000, 1024), (0x4400, 1024), (0x4800, 1)]);
        assert!(transport
            .transfers
            .iter()
            .all(|t| t.command == VendorCommand::ExternalRam));
    }

    #[test]
    fn test_loader_requests_need_the_loader() {
        let source = pattern(0x5000);
        let mut transport = RecordingTransport::default();
        for command in [
            VendorCommand::ExternalRam,
            VendorCommand::SmallEeprom,
            VendorCommand::LargeEeprom,
        ] {
            let result = ChunkedWrite::range(
                &mut transport,
                Stage::ExternalTransfer,
                command,
                &source,
                0x4000..0x5000,
            );
            assert!(matches!(
                result,
                Err(Error::LoaderNotRunning {
                    stage: Stage::ExternalTransfer,
                    command: c,
                }) if c == command
            ));
        }
        assert!(transport.transfers.is_empty());
    }

    #[test]
    fn test_chunked_write_base_address_and_small_chunks() {
        let source = pattern(10);
        let mut transport = RecordingTransport::default();
        ChunkedWrite::new(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            0x1000,
            &source,
            2..10,
            4,
        )
        .unwrap()
        .execute()
        .unwrap();
        let addresses: Vec<u16> = transport.transfers.iter().map(|t| t.address).collect();
        assert_eq!(addresses, vec![0x1002, 0x1006]);
    }

    #[test]
    fn test_chunked_write_empty_range() {
        let source = pattern(16);
        let mut transport = RecordingTransport::default();
        let mut write = ChunkedWrite::range(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            &source,
            0..0,
        )
        .unwrap();
        assert!(write.next().is_none());
        assert!(transport.transfers.is_empty());
    }

    #[test]
    fn test_chunked_write_stops_at_short_chunk() {
        let source = pattern(2048);
        let mut transport = RecordingTransport {
            short_at: Some((0, 511)),
            ..Default::default()
        };
        let mut write = ChunkedWrite::new(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            0,
            &source,
            0..2048,
            512,
        )
        .unwrap();
        assert!(matches!(
            write.next(),
            Some(Err(Error::ShortTransfer {
                expected: 512,
                actual: 511,
                ..
            }))
        ));
        assert!(write.next().is_none());
        drop(write);
        assert_eq!(transport.transfers.len(), 1);
    }

    #[test]
    fn test_chunked_write_rejects_bad_parameters() {
        let source = pattern(16);
        let mut transport = RecordingTransport::default();
        assert!(ChunkedWrite::new(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            0,
            &source,
            0..16,
            2048,
        )
        .is_err());
        assert!(ChunkedWrite::new(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            0xfff8,
            &source,
            0..16,
            16,
        )
        .is_err());
        assert!(ChunkedWrite::range(
            &mut transport,
            Stage::PrimaryTransfer,
            VendorCommand::FirmwareLoad,
            &source,
            0..17,
        )
        .is_err());
        assert!(transport.transfers.is_empty());
    }

    #[test]
    fn test_eeprom_write_rounds_up_small() {
        let source = pattern(13);
        let mut transport = RecordingTransport::default();
        let mut write = EepromWrite::new(
            &mut transport,
            &Loader::assume_running(),
            EepromKind::Small,
            Cursor::new(&source),
            source.len(),
        );
        assert_eq!(write.next().unwrap().unwrap(), 13);
        assert!(write.next().is_none());
        assert_eq!(write.address(), 16);
        drop(write);

        assert_eq!(transport.transfers.len(), 1);
        let transfer = &transport.transfers[0];
        assert_eq!(transfer.command, VendorCommand::SmallEeprom);
        assert_eq!(transfer.address, 0);
        assert_eq!(transfer.data.len(), 16);
        assert_eq!(&transfer.data[..13], &source[..]);
        // First block pads from a zeroed buffer
        assert_eq!(&transfer.data[13..], &[0, 0, 0]);
    }

    #[test]
    fn test_eeprom_write_large_blocks_and_stale_padding() {
        let source = pattern(1024 + 100);
        let mut transport = RecordingTransport::default();
        EepromWrite::new(
            &mut transport,
            &Loader::assume_running(),
            EepromKind::Large,
            Cursor::new(&source),
            source.len(),
        )
        .execute()
        .unwrap();

        let writes: Vec<(u16, usize)> = transport
            .transfers
            .iter()
            .map(|t| (t.address, t.data.len()))
            .collect();
        assert_eq!(writes, vec![(0, 1024), (1024, 128)]);
        assert!(transport
            .transfers
            .iter()
            .all(|t| t.command == VendorCommand::LargeEeprom));

        let last = &transport.transfers[1].data;
        assert_eq!(&last[..100], &source[1024..]);
        // Padding repeats what the previous block left in the buffer
        assert_eq!(&last[100..], &source[100..128]);
    }

    #[test]
    fn test_eeprom_write_short_ack() {
        let source = pattern(3000);
        let mut transport = RecordingTransport {
            short_at: Some((1, 1000)),
            ..Default::default()
        };
        let result = EepromWrite::new(
            &mut transport,
            &Loader::assume_running(),
            EepromKind::Large,
            Cursor::new(&source),
            source.len(),
        )
        .execute();
        assert!(matches!(
            result,
            Err(Error::ShortTransfer {
                address: 1024,
                expected: 1024,
                actual: 1000,
                ..
            })
        ));
        assert_eq!(transport.transfers.len(), 2);
    }

    #[test]
    fn test_eeprom_write_address_space_exhausted() {
        let source = vec![0xffu8; MAX_FIRMWARE_SIZE + 1];
        let mut transport = RecordingTransport::default();
        let result = EepromWrite::new(
            &mut transport,
            &Loader::assume_running(),
            EepromKind::Large,
            Cursor::new(&source),
            source.len(),
        )
        .execute();
        assert!(matches!(result, Err(Error::Capacity { .. })));
        assert_eq!(transport.transfers.len(), MAX_FIRMWARE_SIZE / MAX_CHUNK_SIZE);
    }

    #[test]
    fn test_eeprom_write_empty_source() {
        let mut transport = RecordingTransport::default();
        EepromWrite::new(
            &mut transport,
            &Loader::assume_running(),
            EepromKind::Small,
            Cursor::new(Vec::new()),
            0,
        )
        .execute()
        .unwrap();
        assert!(transport.transfers.is_empty());
    }
}
