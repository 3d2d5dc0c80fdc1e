//! Byte decoding for source CSV files.
//!
//! KOSIS exports CSV extracts as windows code page 949. The WHATWG EUC-KR
//! definition covers the full CP949 repertoire, so `encoding_rs::EUC_KR`
//! decodes both labels.

use std::borrow::Cow;
use std::path::Path;

use encoding_rs::EUC_KR;

use crate::error::{IngestError, Result};

pub(crate) const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Expected text encoding of a source CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
    /// Plain UTF-8, with or without a byte-order mark.
    #[default]
    Utf8,
    /// Windows code page 949, the KOSIS export default.
    Cp949,
}

/// Decode raw file bytes into text under the expected encoding.
///
/// A UTF-8 byte-order mark wins over the configured encoding, and UTF-16
/// byte-order marks are rejected outright. Malformed byte sequences are an
/// error rather than replacement characters.
pub fn decode_bytes<'a>(
    path: &Path,
    bytes: &'a [u8],
    encoding: SourceEncoding,
) -> Result<Cow<'a, str>> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    if let Some(stripped) = bytes.strip_prefix(UTF8_BOM) {
        return match std::str::from_utf8(stripped) {
            Ok(text) => Ok(Cow::Borrowed(text)),
            Err(_) => Err(IngestError::Decode {
                path: path.to_path_buf(),
                encoding: "utf-8",
            }),
        };
    }
    match encoding {
        SourceEncoding::Utf8 => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Cow::Borrowed(text)),
            Err(_) => Err(IngestError::Decode {
                path: path.to_path_buf(),
                encoding: "utf-8",
            }),
        },
        SourceEncoding::Cp949 => {
            let (text, _, had_errors) = EUC_KR.decode(bytes);
            if had_errors {
                return Err(IngestError::Decode {
                    path: path.to_path_buf(),
                    encoding: "cp949",
                });
            }
            Ok(text)
        }
    }
}
