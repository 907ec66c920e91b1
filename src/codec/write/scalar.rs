use crate::codec::field::Field;
use crate::codec::view::RangeView;
use crate::codec::{FALSE_BYTE, TRUE_BYTE};
use crate::internal::error::{Error, Result};

/// Encodes the low `width_bits` of `value` at `field.position`.
///
/// The canonical scalar engine. A width that is not a whole number of bytes
/// is `DataSizeInvalid`; bounds are then validated through the range view;
/// final dispatch encodes exactly 8, 16, 32 or 64 bits per the field's byte
/// order, and any other byte-multiple width reaching it is `DataSizeUnknown`.
/// No buffer byte changes unless every check passed.
pub fn write_scalar(buf: &mut [u8], field: Field, value: i64, width_bits: u32) -> Result<()> {
    if width_bits % 8 != 0 {
        return Err(Error::DataSizeInvalid { bits: width_bits });
    }
    let width = (width_bits / 8) as usize;
    let view = RangeView::new(buf.len(), field.position, width, field.order)?;
    let order = view.order();
    let window = view.slice_mut(buf);
    match width_bits {
        8 => window[0] = value as u8,
        16 => order.write_i16(window, value as i16),
        32 => order.write_i32(window, value as i32),
        64 => order.write_i64(window, value),
        _ => return Err(Error::DataSizeUnknown { bits: width_bits }),
    }
    Ok(())
}

/// Writes one byte at `field.position`: `TRUE_BYTE` for `true`, `FALSE_BYTE`
/// for `false`.
pub fn write_bool(buf: &mut [u8], field: Field, value: bool) -> Result<()> {
    let byte = if value { TRUE_BYTE } else { FALSE_BYTE };
    write_scalar(buf, field, i64::from(byte), 8)
}

/// `write_bool` at `position` in the default byte order.
pub fn write_bool_at(buf: &mut [u8], position: usize, value: bool) -> Result<()> {
    write_bool(buf, Field::at(position), value)
}

/// Writes `value` as two bytes at `field.position`.
pub fn write_i16(buf: &mut [u8], field: Field, value: i16) -> Result<()> {
    write_scalar(buf, field, i64::from(value), 16)
}

/// `write_i16` at `position` in the default byte order.
pub fn write_i16_at(buf: &mut [u8], position: usize, value: i16) -> Result<()> {
    write_i16(buf, Field::at(position), value)
}

/// Writes `value` as four bytes at `field.position`.
pub fn write_i32(buf: &mut [u8], field: Field, value: i32) -> Result<()> {
    write_scalar(buf, field, i64::from(value), 32)
}

/// `write_i32` at `position` in the default byte order.
pub fn write_i32_at(buf: &mut [u8], position: usize, value: i32) -> Result<()> {
    write_i32(buf, Field::at(position), value)
}

/// Writes `value` as eight bytes at `field.position`.
pub fn write_i64(buf: &mut [u8], field: Field, value: i64) -> Result<()> {
    write_scalar(buf, field, value, 64)
}

/// `write_i64` at `position` in the default byte order.
pub fn write_i64_at(buf: &mut [u8], position: usize, value: i64) -> Result<()> {
    write_i64(buf, Field::at(position), value)
}
