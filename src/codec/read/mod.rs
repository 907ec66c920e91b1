// Typed reads against a caller-owned buffer.

pub mod scalar;
pub mod text;

pub use scalar::{
    read_bool, read_bool_at, read_i16, read_i16_at, read_i32, read_i32_at, read_i64, read_i64_at,
};
pub use text::{read_bytes, read_text, read_text_at};
