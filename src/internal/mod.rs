// Internal support types shared across the codec modules.

pub mod error;
