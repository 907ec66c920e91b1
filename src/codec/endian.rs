use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order for multi-byte values.
///
/// Scalar interpretation delegates to the `byteorder` routines for the
/// selected order; [`Endian::Big`] is the process-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Most significant byte first (network order).
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Interprets the first two bytes of `buf` as a two's-complement i16.
    pub fn read_i16(self, buf: &[u8]) -> i16 {
        match self {
            Endian::Big => BigEndian::read_i16(buf),
            Endian::Little => LittleEndian::read_i16(buf),
        }
    }

    /// Interprets the first four bytes of `buf` as a two's-complement i32.
    pub fn read_i32(self, buf: &[u8]) -> i32 {
        match self {
            Endian::Big => BigEndian::read_i32(buf),
            Endian::Little => LittleEndian::read_i32(buf),
        }
    }

    /// Interprets the first eight bytes of `buf` as a two's-complement i64.
    pub fn read_i64(self, buf: &[u8]) -> i64 {
        match self {
            Endian::Big => BigEndian::read_i64(buf),
            Endian::Little => LittleEndian::read_i64(buf),
        }
    }

    /// Encodes `value` into the first two bytes of `buf`.
    pub fn write_i16(self, buf: &mut [u8], value: i16) {
        match self {
            Endian::Big => BigEndian::write_i16(buf, value),
            Endian::Little => LittleEndian::write_i16(buf, value),
        }
    }

    /// Encodes `value` into the first four bytes of `buf`.
    pub fn write_i32(self, buf: &mut [u8], value: i32) {
        match self {
            Endian::Big => BigEndian::write_i32(buf, value),
            Endian::Little => LittleEndian::write_i32(buf, value),
        }
    }

    /// Encodes `value` into the first eight bytes of `buf`.
    pub fn write_i64(self, buf: &mut [u8], value: i64) {
        match self {
            Endian::Big => BigEndian::write_i64(buf, value),
            Endian::Little => LittleEndian::write_i64(buf, value),
        }
    }

    /// Reorders an arbitrary byte range in place for this order.
    ///
    /// `Big` is the identity; `Little` reverses the range. Text operations
    /// use this so both orders behave symmetrically with the numeric codecs.
    pub fn reorder(self, bytes: &mut [u8]) {
        if self == Endian::Little {
            bytes.reverse();
        }
    }
}
