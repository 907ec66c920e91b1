// Typed writes against a caller-owned buffer. Every write validates
// completely before its first mutated byte.

pub mod scalar;
pub mod text;

pub use scalar::{
    write_bool, write_bool_at, write_i16, write_i16_at, write_i32, write_i32_at, write_i64,
    write_i64_at, write_scalar,
};
pub use text::{write_text, write_text_at};
