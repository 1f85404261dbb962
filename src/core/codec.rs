//! Serialized value file encoding.
//!
//! A `.p` file is a fixed 14-byte record written with bincode's
//! fixed-width little-endian layout:
//!
//! | offset | size | field   |
//! |--------|------|---------|
//! | 0      | 4    | magic (`MULP`) |
//! | 4      | 2    | version (u16)  |
//! | 6      | 8    | value (i64)    |

use crate::domain::model::SavedValue;
use crate::utils::error::{MulError, Result};

pub const MAGIC: [u8; 4] = *b"MULP";
pub const VERSION: u16 = 1;
pub const ENCODED_LEN: usize = 14;

/// File extension appended to `save_name`.
pub const EXTENSION: &str = "p";

pub fn encode(value: i64) -> Result<Vec<u8>> {
    let saved = SavedValue {
        magic: MAGIC,
        version: VERSION,
        value,
    };
    Ok(bincode::serialize(&saved)?)
}

/// `source` only labels errors.
pub fn decode(source: &str, bytes: &[u8]) -> Result<SavedValue> {
    if bytes.len() != ENCODED_LEN {
        return Err(MulError::FormatError {
            path: source.to_string(),
            reason: format!("expected {} bytes, found {}", ENCODED_LEN, bytes.len()),
        });
    }

    let saved: SavedValue = bincode::deserialize(bytes)?;

    if saved.magic != MAGIC {
        return Err(MulError::FormatError {
            path: source.to_string(),
            reason: "bad magic header".to_string(),
        });
    }
    if saved.version != VERSION {
        return Err(MulError::FormatError {
            path: source.to_string(),
            reason: format!("unsupported version {}", saved.version),
        });
    }

    Ok(saved)
}

pub fn file_name(save_name: &str) -> String {
    format!("{}.{}", save_name, EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_fixed_width_little_endian() {
        let bytes = encode(2).unwrap();
        assert_eq!(bytes.len(), ENCODED_LEN);
        assert_eq!(&bytes[0..4], b"MULP");
        assert_eq!(&bytes[4..6], &[1, 0]);
        assert_eq!(&bytes[6..14], &2i64.to_le_bytes());
    }

    #[test]
    fn test_round_trip_extremes() {
        for value in [0, -1, 42, i64::MIN, i64::MAX] {
            let bytes = encode(value).unwrap();
            assert_eq!(decode("mem", &bytes).unwrap().value, value);
        }
    }

    #[test]
    fn test_rejects_truncated_input() {
        let bytes = encode(7).unwrap();
        let err = decode("short.p", &bytes[..10]).unwrap_err();
        assert!(matches!(err, MulError::FormatError { .. }));
        assert!(err.to_string().contains("short.p"));
    }

    #[test]
    fn test_rejects_foreign_header() {
        let mut bytes = encode(7).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            decode("x.p", &bytes),
            Err(MulError::FormatError { .. })
        ));

        let mut bytes = encode(7).unwrap();
        bytes[4] = 9;
        let err = decode("x.p", &bytes).unwrap_err();
        assert!(err.to_string().contains("unsupported version 9"));
    }

    #[test]
    fn test_file_name_appends_extension() {
        assert_eq!(file_name("out"), "out.p");
        assert_eq!(file_name("run.1"), "run.1.p");
    }
}
