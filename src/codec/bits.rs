use crate::internal::error::{Error, Result};

/// Packs exactly eight 0/1 flags into one byte.
///
/// Index 0 is the least significant bit. A slice that is not exactly eight
/// elements, or holds any value other than 0 or 1, is `ParameterInvalid`.
pub fn bits_to_byte(bits: &[u8]) -> Result<u8> {
    if bits.len() != 8 {
        return Err(Error::ParameterInvalid {
            parameter: "bits",
            detail: format!("expected exactly 8 elements, got {}", bits.len()),
        });
    }
    let mut byte = 0u8;
    for (index, &bit) in bits.iter().enumerate() {
        match bit {
            0 => {}
            1 => byte |= 1 << index,
            other => {
                return Err(Error::ParameterInvalid {
                    parameter: "bits",
                    detail: format!("element {index} is {other}, expected 0 or 1"),
                });
            }
        }
    }
    Ok(byte)
}

/// Unpacks a byte into eight 0/1 flags, the exact inverse of
/// [`bits_to_byte`].
pub fn byte_to_bits(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (index, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> index) & 1;
    }
    bits
}

/// Truncates each character to its low eight bits, in order, same length out
/// as in.
///
/// Deliberately lossy narrowing; callers that need a real multi-byte
/// encoding use the text operations instead.
pub fn chars_to_bytes(chars: &[char]) -> Vec<u8> {
    chars.iter().map(|&c| c as u32 as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_to_byte_lsb_first() {
        assert_eq!(bits_to_byte(&[1, 0, 1, 0, 0, 0, 0, 0]).unwrap(), 5);
        assert_eq!(bits_to_byte(&[0, 0, 0, 0, 0, 0, 0, 1]).unwrap(), 128);
        assert_eq!(bits_to_byte(&[0; 8]).unwrap(), 0);
        assert_eq!(bits_to_byte(&[1; 8]).unwrap(), 255);
    }

    #[test]
    fn test_bits_to_byte_rejects_wrong_length() {
        for bits in [&[1u8, 0, 1] as &[u8], &[0; 9], &[]] {
            let err = bits_to_byte(bits).unwrap_err();
            assert!(matches!(
                err,
                Error::ParameterInvalid {
                    parameter: "bits",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_bits_to_byte_rejects_non_bit_element() {
        let err = bits_to_byte(&[0, 0, 2, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            Error::ParameterInvalid {
                parameter: "bits",
                detail: "element 2 is 2, expected 0 or 1".to_string()
            }
        );
    }

    #[test]
    fn test_byte_to_bits_inverts_packing() {
        assert_eq!(byte_to_bits(5), [1, 0, 1, 0, 0, 0, 0, 0]);
        for byte in [0u8, 1, 5, 0x80, 0xA5, 0xFF] {
            assert_eq!(bits_to_byte(&byte_to_bits(byte)).unwrap(), byte);
        }
    }

    #[test]
    fn test_chars_to_bytes_truncates_to_low_byte() {
        assert_eq!(chars_to_bytes(&['A', 'B', 'C']), vec![0x41, 0x42, 0x43]);
        // U+20AC narrows to its low byte.
        assert_eq!(chars_to_bytes(&['€']), vec![0xAC]);
        assert_eq!(chars_to_bytes(&[]), Vec::<u8>::new());
        assert_eq!(chars_to_bytes(&['é', 'A']).len(), 2);
    }
}
