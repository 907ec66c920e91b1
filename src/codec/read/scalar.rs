use crate::codec::field::Field;
use crate::codec::view::RangeView;
use crate::codec::TRUE_BYTE;
use crate::internal::error::Result;

/// Reads one byte at `field.position` as a boolean.
///
/// The stored value `TRUE_BYTE` reads as `true`; any other byte reads as
/// `false`.
pub fn read_bool(buf: &[u8], field: Field) -> Result<bool> {
    let view = RangeView::new(buf.len(), field.position, 1, field.order)?;
    Ok(view.slice(buf)[0] == TRUE_BYTE)
}

/// `read_bool` at `position` in the default byte order.
pub fn read_bool_at(buf: &[u8], position: usize) -> Result<bool> {
    read_bool(buf, Field::at(position))
}

/// Reads two bytes at `field.position` as a two's-complement i16.
pub fn read_i16(buf: &[u8], field: Field) -> Result<i16> {
    let view = RangeView::new(buf.len(), field.position, 2, field.order)?;
    Ok(view.order().read_i16(view.slice(buf)))
}

/// `read_i16` at `position` in the default byte order.
pub fn read_i16_at(buf: &[u8], position: usize) -> Result<i16> {
    read_i16(buf, Field::at(position))
}

/// Reads four bytes at `field.position` as a two's-complement i32.
pub fn read_i32(buf: &[u8], field: Field) -> Result<i32> {
    let view = RangeView::new(buf.len(), field.position, 4, field.order)?;
    Ok(view.order().read_i32(view.slice(buf)))
}

/// `read_i32` at `position` in the default byte order.
pub fn read_i32_at(buf: &[u8], position: usize) -> Result<i32> {
    read_i32(buf, Field::at(position))
}

/// Reads eight bytes at `field.position` as a two's-complement i64.
pub fn read_i64(buf: &[u8], field: Field) -> Result<i64> {
    let view = RangeView::new(buf.len(), field.position, 8, field.order)?;
    Ok(view.order().read_i64(view.slice(buf)))
}

/// `read_i64` at `position` in the default byte order.
pub fn read_i64_at(buf: &[u8], position: usize) -> Result<i64> {
    read_i64(buf, Field::at(position))
}
