//! Decoding of "C2 load" IIC files, the format the FX2LP boot ROM reads from a serial EEPROM.
//!
//! Layout: an 8 byte header (magic, USB IDs, configuration byte), then records of a big-endian
//! 16 bit length, a big-endian 16 bit address and `length` data bytes. The image ends with a
//! footer record which writes the CPUCS register instead of carrying data.

use crate::error::{Error, Result};
use crate::format::FirmwareFormat;
use crate::image::FirmwareImage;
use crate::memory::CPUCS_ADDRESS;
use std::io::{self, Read};

const HEADER_LENGTH: usize = 8;

/// Length field of the footer record ("last record" flag plus one byte for CPUCS).
const FOOTER_LENGTH: u16 = 0x8001;

/// Reads a 4 byte record header. `None` means the stream ended cleanly before it.
fn read_record_header<R: Read>(reader: &mut R) -> Result<Option<[u8; 4]>> {
    let mut header = [0u8; 4];
    let mut filled = 0;
    while filled < header.len() {
        match reader.read(&mut header[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    match filled {
        0 => Ok(None),
        4 => Ok(Some(header)),
        _ => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated IIC record header").into()),
    }
}

pub(crate) fn decode<R: Read>(reader: &mut R) -> Result<FirmwareImage> {
    let mut image = FirmwareImage::empty(FirmwareFormat::C2Load);

    let mut header = [0u8; HEADER_LENGTH];
    reader.read_exact(&mut header).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::Format("IIC header truncated".into()),
        _ => e.into(),
    })?;

    while let Some(record) = read_record_header(reader)? {
        let length = u16::from_be_bytes([record[0], record[1]]);
        let address = u16::from_be_bytes([record[2], record[3]]);

        if address == CPUCS_ADDRESS && length == FOOTER_LENGTH {
            return Ok(image);
        }

        let address = usize::from(address);
        let length = usize::from(length);
        if address + length > image.capacity() {
            return Err(Error::Capacity {
                what: "firmware image",
                limit: image.capacity(),
                required: address + length,
            });
        }

        let mut data = vec![0u8; length];
        reader.read_exact(&mut data)?;
        log::trace!("IIC record: {} bytes at 0x{:04x}", length, address);
        image.write(address, &data)?;
    }

    Err(Error::Format("IIC file has no footer record".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: [u8; 8] = [0xc2, 0xb4, 0x04, 0x13, 0x86, 0x00, 0x00, 0x40];
    const FOOTER: [u8; 5] = [0x80, 0x01, 0xe6, 0x00, 0x00];

    fn file(records: &[&[u8]]) -> Vec<u8> {
        let mut bytes = HEADER.to_vec();
        for record in records {
            bytes.extend_from_slice(record);
        }
        bytes
    }

    #[test]
    fn test_records_and_footer() {
        let bytes = file(&[
            &[0x00, 0x03, 0x00, 0x00, 0x02, 0x00, 0x80],
            &[0x00, 0x02, 0x01, 0x00, 0xaa, 0x55],
            &FOOTER,
        ]);
        let image = decode(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(image.format(), FirmwareFormat::C2Load);
        assert_eq!(image.high_water_mark(), 0x102);
        assert_eq!(&image.data()[..3], &[0x02, 0x00, 0x80]);
        assert_eq!(&image.data()[0x100..], &[0xaa, 0x55]);
        assert!(image.data()[3..0x100].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_footer_ends_decoding() {
        let bytes = file(&[
            &[0x00, 0x01, 0x00, 0x00, 0x11],
            &FOOTER,
            &[0x00, 0x01, 0x10, 0x00, 0x22],
        ]);
        let image = decode(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(image.high_water_mark(), 1);
    }

    #[test]
    fn test_cpucs_write_that_is_not_the_footer_is_data() {
        let bytes = file(&[&[0x00, 0x01, 0xe6, 0x00, 0x01], &FOOTER]);
        let image = decode(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(image.high_water_mark(), 0xe601);
        assert_eq!(image.data()[0xe600], 0x01);
    }

    #[test]
    fn test_truncated_payload() {
        let bytes = file(&[&[0x00, 0x04, 0x00, 0x00, 0x01, 0x02]]);
        let err = decode(&mut Cursor::new(bytes)).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_truncated_record_header() {
        let bytes = file(&[&[0x00, 0x04]]);
        assert!(matches!(
            decode(&mut Cursor::new(bytes)),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_missing_footer() {
        let bytes = file(&[&[0x00, 0x01, 0x00, 0x00, 0x11]]);
        assert!(matches!(
            decode(&mut Cursor::new(bytes)),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_short_header() {
        assert!(matches!(
            decode(&mut Cursor::new(vec![0xc2, 0xb4, 0x04])),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_out_of_range_record() {
        let bytes = file(&[&[0x00, 0x10, 0xff, 0xf8], &[0u8; 16], &FOOTER]);
        let err = decode(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(
            err,
            Error::Capacity {
                required: 0x10008,
                ..
            }
        ));
    }
}
