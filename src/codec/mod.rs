// Codec module for the Tessera raw byte format: bounds-checked reads and
// writes of typed values against caller-owned buffers.

pub mod bits;
pub mod encoding;
pub mod endian;
pub mod field;
pub mod read;
pub mod view;
pub mod write;

/// Byte stored for `true`. Only this value reads back as `true`.
pub const TRUE_BYTE: u8 = 1;

/// Byte stored for `false`.
pub const FALSE_BYTE: u8 = 0;
