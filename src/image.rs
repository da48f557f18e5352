use crate::error::{Error, Result};
use crate::format::{self, FirmwareFormat};
use crate::memory::MAX_FIRMWARE_SIZE;
use crate::{hex, iic};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// A decoded firmware image: the FX2LP's 64 KiB address space, zero wherever the firmware file
/// did not place any data.
pub struct FirmwareImage {
    data: Box<[u8]>,
    high_water_mark: usize,
    format: FirmwareFormat,
}

impl FirmwareImage {
    pub(crate) fn empty(format: FirmwareFormat) -> Self {
        Self {
            data: vec![0u8; MAX_FIRMWARE_SIZE].into_boxed_slice(),
            high_water_mark: 0,
            format,
        }
    }

    /// Places `bytes` at `address`. Nothing is written if the block would leave the address space.
    pub(crate) fn write(&mut self, address: usize, bytes: &[u8]) -> Result<()> {
        let end = address + bytes.len();
        if end > self.data.len() {
            return Err(Error::Capacity {
                what: "firmware image",
                limit: self.data.len(),
                required: end,
            });
        }
        self.data[address..end].copy_from_slice(bytes);
        self.high_water_mark = self.high_water_mark.max(end);
        Ok(())
    }

    /// Reads a raw binary image, which is placed at address 0.
    pub fn from_binary<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let size = reader.seek(SeekFrom::End(0))? as usize;
        reader.seek(SeekFrom::Start(0))?;
        if size > MAX_FIRMWARE_SIZE {
            return Err(Error::Capacity {
                what: "binary firmware file",
                limit: MAX_FIRMWARE_SIZE,
                required: size,
            });
        }

        let mut image = Self::empty(FirmwareFormat::Binary);
        reader.read_exact(&mut image.data[..size])?;
        image.high_water_mark = size;
        Ok(image)
    }

    /// Detects the format of `reader` and decodes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fx2_download::FirmwareImage;
    /// use std::io::Cursor;
    ///
    /// let mut file = Cursor::new(&b":0400000001020304F6\n:00000001FF\n"[..]);
    /// let image = FirmwareImage::decode(&mut file).unwrap();
    /// assert_eq!(image.high_water_mark(), 4);
    /// assert_eq!(image.data(), &[1, 2, 3, 4]);
    /// ```
    pub fn decode<R: BufRead + Seek>(reader: &mut R) -> Result<Self> {
        let image = match format::detect(reader)? {
            FirmwareFormat::Hex => hex::decode(reader)?,
            FirmwareFormat::C2Load => iic::decode(reader)?,
            FirmwareFormat::Binary => Self::from_binary(reader)?,
            unsupported => return Err(Error::UnsupportedFormat(unsupported)),
        };
        log::debug!(
            "Decoded {} image, {} bytes",
            image.format,
            image.high_water_mark
        );
        Ok(image)
    }

    /// Opens and decodes a firmware file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::decode(&mut reader)
    }

    /// One past the highest address holding firmware data, i.e. the effective image size.
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    /// Format the image was decoded from.
    pub fn format(&self) -> FirmwareFormat {
        self.format
    }

    /// Size of the address space an image can cover.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Image contents from address 0 up to the high-water mark.
    pub fn data(&self) -> &[u8] {
        &self.data[..self.high_water_mark]
    }
}

impl fmt::Debug for FirmwareImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirmwareImage")
            .field("format", &self.format)
            .field("high_water_mark", &self.high_water_mark)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_tracks_high_water_mark() {
        let mut image = FirmwareImage::empty(FirmwareFormat::Hex);
        image.write(0x100, &[1, 2, 3]).unwrap();
        assert_eq!(image.high_water_mark(), 0x103);
        image.write(0x10, &[4]).unwrap();
        assert_eq!(image.high_water_mark(), 0x103);
        assert_eq!(image.data()[0x10], 4);
        assert_eq!(image.data()[0x0f], 0);
    }

    #[test]
    fn test_write_out_of_range_leaves_image_untouched() {
        let mut image = FirmwareImage::empty(FirmwareFormat::Hex);
        image.write(0xfffe, &[0xaa, 0xbb]).unwrap();
        let err = image.write(0xffff, &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            Error::Capacity {
                required: 0x10001,
                ..
            }
        ));
        assert_eq!(image.data()[0xffff], 0xbb);
        assert_eq!(image.high_water_mark(), 0x10000);
    }

    #[test]
    fn test_binary_passthrough() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(5000).collect();
        let image = FirmwareImage::from_binary(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(image.format(), FirmwareFormat::Binary);
        assert_eq!(image.high_water_mark(), 5000);
        assert_eq!(image.data(), &bytes[..]);
    }

    #[test]
    fn test_binary_too_large() {
        let bytes = vec![0x02u8; MAX_FIRMWARE_SIZE + 1];
        let err = FirmwareImage::from_binary(&mut Cursor::new(&bytes)).unwrap_err();
        assert!(matches!(
            err,
            Error::Capacity {
                required: 0x10001,
                ..
            }
        ));
    }

    #[test]
    fn test_binary_of_full_size_fits() {
        let bytes = vec![0x5au8; MAX_FIRMWARE_SIZE];
        let image = FirmwareImage::from_binary(&mut Cursor::new(&bytes)).unwrap();
        assert_eq!(image.high_water_mark(), MAX_FIRMWARE_SIZE);
    }

    #[test]
    fn test_decode_rejects_c0_load() {
        let bytes = [0xc0u8, 0xb4, 0x04, 0x13, 0x86, 0x00, 0x00, 0x00];
        let err = FirmwareImage::decode(&mut Cursor::new(&bytes[..])).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedFormat(FirmwareFormat::C0Load)
        ));
    }

    #[test]
    fn test_decode_dispatches_binary() {
        let bytes = [0x02u8, 0x00, 0x06, 0xff];
        let image = FirmwareImage::decode(&mut Cursor::new(&bytes[..])).unwrap();
        assert_eq!(image.format(), FirmwareFormat::Binary);
        assert_eq!(image.data(), &bytes);
    }
}
