use thiserror::Error;

/// Unified error type for the Tessera library.
///
/// Every failure a codec operation can produce maps to exactly one variant,
/// and each variant carries the values that triggered it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A requested byte range does not fit inside the buffer.
    ///
    /// Raised before any mutation, for reads and writes alike. An overflowing
    /// `position + length` sum reports the same way.
    #[error("range out of index: position {position} + length {length} exceeds capacity {capacity}")]
    OutOfIndex {
        capacity: usize,
        position: usize,
        length: usize,
    },

    /// A scalar width that is not a whole number of bytes.
    #[error("invalid data size: {bits} bits is not a whole number of bytes")]
    DataSizeInvalid { bits: u32 },

    /// A byte-multiple scalar width with no codec at final dispatch.
    ///
    /// The width passed the byte-multiple check but matches none of the
    /// supported widths (8, 16, 32, 64).
    #[error("unknown data size: no codec for {bits} bits")]
    DataSizeUnknown { bits: u32 },

    /// An encoding label that names no supported character encoding.
    #[error("not supported encoding: {label:?}")]
    NotSupportedEncoding { label: String },

    /// A parameter violated its domain before any buffer access.
    #[error("invalid parameter {parameter:?}: {detail}")]
    ParameterInvalid {
        parameter: &'static str,
        detail: String,
    },
}

/// A specialized `Result` type for Tessera operations.
pub type Result<T> = std::result::Result<T, Error>;
