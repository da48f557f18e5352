//! Intel HEX decoding. Only data records are applied; checksums are not verified.

use crate::error::{Error, Result};
use crate::format::FirmwareFormat;
use crate::image::FirmwareImage;
use std::io::BufRead;

const DATA_RECORD: u8 = 0x00;
const END_OF_FILE_RECORD: u8 = 0x01;

/// Length of `:`, byte count, address and record type.
const RECORD_PREFIX_LENGTH: usize = 9;

/// Strips the line terminator (and any other trailing whitespace) off a line.
pub(crate) fn trim_line(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &line[..end]
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

fn hex_byte(digits: &[u8]) -> Option<u8> {
    match digits {
        [high, low] => Some(hex_digit(*high)? << 4 | hex_digit(*low)?),
        _ => None,
    }
}

fn hex_word(digits: &[u8]) -> Option<u16> {
    let high = hex_byte(digits.get(0..2)?)?;
    let low = hex_byte(digits.get(2..4)?)?;
    Some(u16::from(high) << 8 | u16::from(low))
}

/// Whether a (trimmed) line starts like a HEX record and is long enough to hold the data bytes
/// its count field announces. The trailing checksum is not required.
pub(crate) fn is_record_line(line: &[u8]) -> bool {
    if line.first() != Some(&b':') {
        return false;
    }
    match line.get(1..3).and_then(hex_byte) {
        Some(count) => line.len() >= RECORD_PREFIX_LENGTH + 2 * usize::from(count),
        None => false,
    }
}

/// A single parsed data record.
struct DataRecord {
    address: u16,
    data: Vec<u8>,
}

enum Record {
    Data(DataRecord),
    EndOfFile,
    Other,
}

fn parse_record(line: &[u8], line_number: usize) -> Result<Record> {
    let malformed = || Error::Format(format!("malformed HEX record on line {}", line_number));

    if line.first() != Some(&b':') || line.len() < RECORD_PREFIX_LENGTH {
        return Err(malformed());
    }

    match hex_byte(&line[7..9]) {
        Some(DATA_RECORD) => {}
        Some(END_OF_FILE_RECORD) => return Ok(Record::EndOfFile),
        _ => return Ok(Record::Other),
    }

    let count = usize::from(hex_byte(&line[1..3]).ok_or_else(malformed)?);
    let address = hex_word(&line[3..7]).ok_or_else(malformed)?;
    let digits = line
        .get(RECORD_PREFIX_LENGTH..RECORD_PREFIX_LENGTH + 2 * count)
        .ok_or_else(malformed)?;
    let data = digits
        .chunks(2)
        .map(hex_byte)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(malformed)?;

    Ok(Record::Data(DataRecord { address, data }))
}

/// Decodes HEX records from `reader` up to the end-of-file record.
///
/// Records other than data and end-of-file are skipped. Anything after the end-of-file record is
/// ignored; a file without one is rejected.
pub(crate) fn decode<R: BufRead>(reader: &mut R) -> Result<FirmwareImage> {
    let mut image = FirmwareImage::empty(FirmwareFormat::Hex);
    let mut line = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::Format("HEX file has no end-of-file record".into()));
        }
        line_number += 1;

        let trimmed = trim_line(&line);
        if trimmed.is_empty() {
            continue;
        }

        match parse_record(trimmed, line_number)? {
            Record::Data(record) => {
                log::trace!(
                    "HEX data record: {} bytes at 0x{:04x}",
                    record.data.len(),
                    record.address
                );
                image.write(usize::from(record.address), &record.data)?;
            }
            Record::EndOfFile => return Ok(image),
            Record::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode_str(text: &str) -> Result<FirmwareImage> {
        decode(&mut Cursor::new(text.as_bytes()))
    }

    #[test]
    fn test_data_then_end_of_file() {
        let image = decode_str(":0400000001020304F6\n:00000001FF\n").unwrap();
        assert_eq!(image.data(), &[1, 2, 3, 4]);
        assert_eq!(image.high_water_mark(), 4);
    }

    #[test]
    fn test_end_of_file_stops_decoding() {
        let image =
            decode_str(":0400000001020304F6\n:00000001FF\n:0100100055FF\nnot hex at all\n")
                .unwrap();
        assert_eq!(image.high_water_mark(), 4);
    }

    #[test]
    fn test_missing_end_of_file() {
        assert!(matches!(
            decode_str(":0400000001020304F6\n"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_sparse_records_and_untouched_bytes() {
        let image = decode_str(
            ":02010000AABB98\r\n:0120000042FF\r\n:020000040000FA\r\n:00000001FF\r\n",
        )
        .unwrap();
        let data = image.data();
        assert_eq!(image.high_water_mark(), 0x2001);
        assert_eq!(&data[0x100..0x102], &[0xaa, 0xbb]);
        assert_eq!(data[0x2000], 0x42);
        assert!(data[..0x100].iter().all(|&b| b == 0));
        assert!(data[0x102..0x2000].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_lowercase_digits() {
        let image = decode_str(":02000000abcd00\n:00000001ff\n").unwrap();
        assert_eq!(image.data(), &[0xab, 0xcd]);
    }

    #[test]
    fn test_other_record_types_are_skipped_unchecked() {
        // Extended linear address record with garbage in its data field
        let image = decode_str(":02000004zzzz00\n:0100050011FF\n:00000001FF\n").unwrap();
        assert_eq!(image.high_water_mark(), 6);
        assert_eq!(image.data()[5], 0x11);
    }

    #[test]
    fn test_out_of_range_record() {
        let err = decode_str(":04FFFE0001020304F6\n:00000001FF\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Capacity {
                required: 0x10002,
                ..
            }
        ));
    }

    #[test]
    fn test_record_ending_at_top_of_address_space() {
        let image = decode_str(":02FFFE00010200\n:00000001FF\n").unwrap();
        assert_eq!(image.high_water_mark(), 0x10000);
    }

    #[test]
    fn test_bad_digit_in_data() {
        let err = decode_str(":0200000001G200\n:00000001FF\n").unwrap_err();
        match err {
            Error::Format(message) => assert!(message.contains("line 1")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_is_record_line() {
        assert!(is_record_line(b":0400000001020304F6"));
        assert!(is_record_line(b":0400000001020304"));
        assert!(!is_record_line(b":04000000010203"));
        assert!(!is_record_line(b"0400000001020304F6"));
        assert!(!is_record_line(b":"));
        assert!(!is_record_line(b":XX000000"));
    }

    #[test]
    fn test_trim_line() {
        assert_eq!(trim_line(b":00000001FF\r\n"), b":00000001FF");
        assert_eq!(trim_line(b"\r\n"), b"");
        assert_eq!(trim_line(b""), b"");
    }
}
