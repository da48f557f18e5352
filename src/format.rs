//! Classification of firmware files.

use crate::error::{Error, Result};
use crate::hex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

/// Leading byte of an IIC file in "C0 load" format (USB IDs only, no code).
pub const C0_LOAD_MAGIC: u8 = 0xc0;

/// Leading byte of an IIC file in "C2 load" format (code loaded by the boot ROM).
pub const C2_LOAD_MAGIC: u8 = 0xc2;

/// Encodings a firmware file can come in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FirmwareFormat {
    /// Intel HEX records.
    Hex,

    /// Raw memory image starting at address 0.
    Binary,

    /// Length/address records behind an 8 byte header, as stored in a boot EEPROM.
    C2Load,

    /// EEPROM image carrying only USB vendor/product/device IDs.
    C0Load,
}

impl fmt::Display for FirmwareFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FirmwareFormat::Hex => "Intel HEX",
            FirmwareFormat::Binary => "binary",
            FirmwareFormat::C2Load => "C2 load IIC",
            FirmwareFormat::C0Load => "C0 load IIC",
        })
    }
}

/// Classifies the contents of `reader`. The reader is rewound before and after.
///
/// The input is HEX if every non-empty line looks like a record whose length covers its declared
/// byte count. Otherwise the first byte decides between the two IIC formats and a raw binary.
///
/// # Examples
///
/// ```rust
/// use fx2_download::{detect_format, FirmwareFormat};
/// use std::io::Cursor;
///
/// let mut hex = Cursor::new(&b":0400000001020304F6\n:00000001FF\n"[..]);
/// assert_eq!(detect_format(&mut hex).unwrap(), FirmwareFormat::Hex);
///
/// let mut iic = Cursor::new(&[0xc2, 0x47, 0x05, 0x31, 0x21, 0x00, 0x00, 0x04][..]);
/// assert_eq!(detect_format(&mut iic).unwrap(), FirmwareFormat::C2Load);
/// ```
pub fn detect<R: BufRead + Seek>(reader: &mut R) -> Result<FirmwareFormat> {
    reader.seek(SeekFrom::Start(0))?;

    let mut line = Vec::new();
    let mut seen_any = false;
    let mut all_records = true;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        seen_any = true;
        let trimmed = hex::trim_line(&line);
        if !trimmed.is_empty() && !hex::is_record_line(trimmed) {
            all_records = false;
            break;
        }
    }

    if !seen_any {
        return Err(Error::Format("file is empty".into()));
    }

    let format = if all_records {
        FirmwareFormat::Hex
    } else {
        reader.seek(SeekFrom::Start(0))?;
        let mut first = [0u8; 1];
        reader.read_exact(&mut first)?;
        match first[0] {
            C0_LOAD_MAGIC => FirmwareFormat::C0Load,
            C2_LOAD_MAGIC => FirmwareFormat::C2Load,
            _ => FirmwareFormat::Binary,
        }
    };

    reader.seek(SeekFrom::Start(0))?;
    log::info!("Found {} format file", format);
    Ok(format)
}

/// Classifies a firmware file on disk.
pub fn detect_file<P: AsRef<Path>>(path: P) -> Result<FirmwareFormat> {
    let mut reader = BufReader::new(File::open(path)?);
    detect(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn classify(data: &[u8]) -> Result<FirmwareFormat> {
        detect(&mut Cursor::new(data))
    }

    #[test]
    fn test_hex() {
        let data = b":0400000001020304F6\r\n:00000001FF\r\n";
        assert_eq!(classify(data).unwrap(), FirmwareFormat::Hex);
    }

    #[test]
    fn test_hex_without_checksum_or_newline() {
        assert_eq!(
            classify(b":0a0d3e0000010202030304040505").unwrap(),
            FirmwareFormat::Hex
        );
    }

    #[test]
    fn test_hex_with_blank_lines() {
        let data = b":0400000001020304F6\n\n   \r\n:00000001FF\n\n";
        assert_eq!(classify(data).unwrap(), FirmwareFormat::Hex);
        let image = crate::image::FirmwareImage::decode(&mut Cursor::new(&data[..])).unwrap();
        assert_eq!(image.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_hex_line_too_short_is_binary() {
        let data = b":0400000001020304F6\n:10000000AABB\n";
        assert_eq!(classify(data).unwrap(), FirmwareFormat::Binary);
    }

    #[test]
    fn test_magic_bytes() {
        assert_eq!(
            classify(&[0xc2, 0xb4, 0x04, 0x13, 0x86]).unwrap(),
            FirmwareFormat::C2Load
        );
        assert_eq!(
            classify(&[0xc0, 0xb4, 0x04, 0x13, 0x86]).unwrap(),
            FirmwareFormat::C0Load
        );
        assert_eq!(
            classify(&[0x02, 0x00, 0x06, 0x00]).unwrap(),
            FirmwareFormat::Binary
        );
    }

    #[test]
    fn test_magic_byte_after_colon_line() {
        // The first line is a HEX-looking record, but the second is not
        let data = b":00000001FF\n\xc2\x00\x00";
        assert_eq!(classify(data).unwrap(), FirmwareFormat::Binary);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(classify(b""), Err(Error::Format(_))));
    }

    #[test]
    fn test_deterministic_and_rewound() {
        let data = [0xc2u8, 1, 2, 3, b'\n', b':', 0xff];
        let mut cursor = Cursor::new(&data[..]);
        let first = detect(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 0);
        let second = detect(&mut cursor).unwrap();
        assert_eq!(first, second);
    }
}
