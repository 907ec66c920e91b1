use crate::codec::encoding::Encoding;
use crate::codec::endian::Endian;

/// Options value for a scalar read or write: where the value sits and in
/// which byte order. Each scalar operation takes one `Field` instead of a
/// family of positional overloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Field {
    /// Byte offset of the value inside the buffer.
    pub position: usize,
    /// Byte order of the value.
    pub order: Endian,
}

impl Field {
    /// Field at `position` in the default byte order.
    pub fn at(position: usize) -> Self {
        Field {
            position,
            order: Endian::default(),
        }
    }

    /// Field at `position` in an explicit byte order.
    pub fn new(position: usize, order: Endian) -> Self {
        Field { position, order }
    }

    /// Returns the field with its byte order replaced.
    pub fn with_order(mut self, order: Endian) -> Self {
        self.order = order;
        self
    }
}

/// Options value for a text read or write.
///
/// `length` only applies to reads; `None` means "from `position` to the end
/// of the buffer". Writes take their length from the encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextField {
    /// Byte offset of the text inside the buffer.
    pub position: usize,
    /// Byte count to read, or `None` for the rest of the buffer.
    pub length: Option<usize>,
    /// Text encoding of the stored bytes.
    pub encoding: Encoding,
    /// Byte order of the stored range.
    pub order: Endian,
}

impl TextField {
    /// Text field at `position` with the default length, encoding and order.
    pub fn at(position: usize) -> Self {
        TextField {
            position,
            ..TextField::default()
        }
    }

    /// Returns the field with an explicit read length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Returns the field with its encoding replaced.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Returns the field with its byte order replaced.
    pub fn with_order(mut self, order: Endian) -> Self {
        self.order = order;
        self
    }
}
