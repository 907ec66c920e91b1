use bytes::Bytes;

use crate::codec::endian::Endian;
use crate::codec::field::TextField;
use crate::codec::view::RangeView;
use crate::internal::error::Result;

/// Reads and decodes text at `field.position`.
///
/// An unspecified length means "from the position to the end of the buffer".
/// The range is reordered per the field's byte order before decoding, which
/// keeps text reads symmetric with the numeric reads; decoding is lossy per
/// the field's encoding.
pub fn read_text(buf: &[u8], field: &TextField) -> Result<String> {
    let length = match field.length {
        Some(length) => length,
        None => buf.len().saturating_sub(field.position),
    };
    let view = RangeView::new(buf.len(), field.position, length, field.order)?;
    let mut raw = view.slice(buf).to_vec();
    view.order().reorder(&mut raw);
    Ok(field.encoding.decode(&raw))
}

/// `read_text` from `position` to the end of the buffer, with the default
/// encoding and byte order.
pub fn read_text_at(buf: &[u8], position: usize) -> Result<String> {
    read_text(buf, &TextField::at(position))
}

/// Reads `length` raw bytes at `position` as an owned payload.
///
/// Raw bytes are never reordered; byte order applies to typed
/// interpretations only.
pub fn read_bytes(buf: &[u8], position: usize, length: usize) -> Result<Bytes> {
    let view = RangeView::new(buf.len(), position, length, Endian::default())?;
    Ok(Bytes::copy_from_slice(view.slice(buf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encoding::Encoding;
    use crate::internal::error::Error;

    #[test]
    fn test_read_text_explicit_length() {
        let buf = *b"..ABC.";
        let field = TextField::at(2).with_length(3);
        assert_eq!(read_text(&buf, &field).unwrap(), "ABC");
    }

    #[test]
    fn test_read_text_defaults_to_end_of_buffer() {
        let buf = *b"..ABC";
        assert_eq!(read_text_at(&buf, 2).unwrap(), "ABC");
        assert_eq!(read_text_at(&buf, 5).unwrap(), "");
    }

    #[test]
    fn test_read_text_little_reverses_range() {
        let buf = *b"CBA";
        let field = TextField::at(0).with_length(3).with_order(Endian::Little);
        assert_eq!(read_text(&buf, &field).unwrap(), "ABC");
    }

    #[test]
    fn test_read_text_latin1() {
        let buf = [0x41, 0xE9];
        let field = TextField::at(0)
            .with_length(2)
            .with_encoding(Encoding::Latin1);
        assert_eq!(read_text(&buf, &field).unwrap(), "Aé");
    }

    #[test]
    fn test_read_text_beyond_capacity() {
        let buf = [0u8; 4];
        let err = read_text_at(&buf, 6).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfIndex {
                capacity: 4,
                position: 6,
                length: 0
            }
        );

        let field = TextField::at(2).with_length(3);
        let err = read_text(&buf, &field).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfIndex {
                capacity: 4,
                position: 2,
                length: 3
            }
        );
    }

    #[test]
    fn test_read_bytes_owned_payload() {
        let buf = [1u8, 2, 3, 4];
        assert_eq!(read_bytes(&buf, 1, 2).unwrap(), Bytes::from_static(&[2, 3]));
        assert_eq!(read_bytes(&buf, 4, 0).unwrap(), Bytes::new());
        assert!(read_bytes(&buf, 3, 2).is_err());
    }
}
