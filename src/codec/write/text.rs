use crate::codec::field::TextField;
use crate::codec::view::RangeView;
use crate::internal::error::Result;

/// Encodes `value` into the buffer at `field.position`.
///
/// An empty value is a no-op with no bounds check. Otherwise the value is
/// encoded per the field's encoding, reordered per its byte order, and copied
/// in only after the encoded length passes the bounds check; a failing write
/// leaves the buffer untouched and the error carries the encoded length.
pub fn write_text(buf: &mut [u8], field: &TextField, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    let mut encoded = field.encoding.encode(value);
    field.order.reorder(&mut encoded);
    let view = RangeView::new(buf.len(), field.position, encoded.len(), field.order)?;
    view.slice_mut(buf).copy_from_slice(&encoded);
    Ok(())
}

/// `write_text` at `position` with the default encoding and byte order.
pub fn write_text_at(buf: &mut [u8], position: usize, value: &str) -> Result<()> {
    write_text(buf, &TextField::at(position), value)
}
