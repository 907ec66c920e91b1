use crate::internal::error::{Error, Result};

/// Default encoding applied when a text operation does not name one.
pub const DEFAULT_ENCODING: Encoding = Encoding::Utf8;

/// Named text encoding used by the text read/write operations.
///
/// Encodings are resolved from case-insensitive labels so callers can pass
/// the names they already use in wire formats and configuration. Decoding is
/// lossy: malformed input becomes the replacement character. Encoding a
/// character the target encoding cannot represent stores `b'?'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, the process-wide default.
    #[default]
    Utf8,
    /// US-ASCII, 7-bit. Bytes above 0x7F decode to the replacement character.
    Ascii,
    /// ISO-8859-1, one byte per character over the full 0x00..=0xFF range.
    Latin1,
}

impl Encoding {
    /// Resolves an encoding from its label, case-insensitively.
    ///
    /// Recognized labels are `"UTF-8"`, `"US-ASCII"`, `"ISO-8859-1"` and the
    /// common aliases for each. Anything else is `NotSupportedEncoding`.
    pub fn for_label(label: &str) -> Result<Encoding> {
        match label.to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Ok(Encoding::Utf8),
            "US-ASCII" | "ASCII" => Ok(Encoding::Ascii),
            "ISO-8859-1" | "ISO8859-1" | "LATIN-1" | "LATIN1" => Ok(Encoding::Latin1),
            _ => Err(Error::NotSupportedEncoding {
                label: label.to_string(),
            }),
        }
    }

    /// Canonical label for this encoding.
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Ascii => "US-ASCII",
            Encoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Decodes `bytes` into a `String`, replacing undecodable input.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '\u{FFFD}' })
                .collect(),
            Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }

    /// Encodes `text` into bytes, substituting `b'?'` for characters the
    /// encoding cannot represent.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            Encoding::Latin1 => text
                .chars()
                .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
                .collect(),
        }
    }
}
