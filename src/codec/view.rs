use std::ops::Range;

use crate::codec::endian::Endian;
use crate::internal::error::{Error, Result};

/// Bounds-checked window over `[position, position + length)` of a buffer.
///
/// Every codec operation obtains its byte range through a view, so the
/// capacity check lives in exactly one place. Construction fails with
/// `OutOfIndex` when the range does not fit in `capacity`, including when
/// `position + length` overflows `usize`. A view must be built against the
/// capacity of the same buffer it later slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeView {
    position: usize,
    length: usize,
    order: Endian,
}

impl RangeView {
    /// Validates `position + length <= capacity` and returns the window.
    pub fn new(capacity: usize, position: usize, length: usize, order: Endian) -> Result<Self> {
        match position.checked_add(length) {
            Some(end) if end <= capacity => Ok(RangeView {
                position,
                length,
                order,
            }),
            _ => Err(Error::OutOfIndex {
                capacity,
                position,
                length,
            }),
        }
    }

    /// The validated byte range.
    pub fn range(&self) -> Range<usize> {
        self.position..self.position + self.length
    }

    /// Borrows the window out of `buf`.
    pub fn slice<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.range()]
    }

    /// Mutably borrows the window out of `buf`.
    pub fn slice_mut<'a>(&self, buf: &'a mut [u8]) -> &'a mut [u8] {
        let range = self.range();
        &mut buf[range]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn order(&self) -> Endian {
        self.order
    }
}
