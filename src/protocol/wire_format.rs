//! Wire format encoding and decoding.
//!
//! The protocol is asymmetric. Requests carry a packed 4-byte header:
//!
//! ```text
//! ┌────────────┬──────────────────┐
//! │ Action tag │ Payload length   │
//! │ 5 bits     │ 27 bits          │
//! └────────────┴──────────────────┘
//!  (tag << 27) | length, uint32 BE
//! ```
//!
//! Responses carry only a plain 4-byte big-endian payload length; the
//! server echoes no action tag back.

use crate::error::{Result, TextwireError};

use super::Action;

/// Header size in bytes, identical for requests and responses.
pub const HEADER_SIZE: usize = 4;

/// Number of bits the action tag is shifted into the request header.
pub const ACTION_SHIFT: u32 = 27;

/// Maximum request payload length (27 bits of the packed header).
pub const MAX_REQUEST_PAYLOAD: usize = (1 << ACTION_SHIFT) - 1;

/// Default cap on a declared response length (1 GiB).
///
/// The wire format itself allows any u32 length on the response side;
/// the decoder refuses to grow its buffer past this cap so a hostile
/// peer cannot demand unbounded memory.
pub const DEFAULT_MAX_RESPONSE_PAYLOAD: u32 = 1_073_741_824;

/// Decoded request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeader {
    /// Requested transformation.
    pub action: Action,
    /// Payload length in bytes (fits in 27 bits).
    pub payload_length: u32,
}

impl RequestHeader {
    /// Create a header for `action` with a payload of `payload_len` bytes.
    ///
    /// Fails with `PayloadTooLarge` if the length does not fit in 27 bits.
    pub fn new(action: Action, payload_len: usize) -> Result<Self> {
        if payload_len > MAX_REQUEST_PAYLOAD {
            return Err(TextwireError::PayloadTooLarge {
                len: payload_len,
                max: MAX_REQUEST_PAYLOAD,
            });
        }
        Ok(Self {
            action,
            payload_length: payload_len as u32,
        })
    }

    /// Encode to the packed 4-byte big-endian form.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let packed = (self.action.tag() << ACTION_SHIFT) | self.payload_length;
        packed.to_be_bytes()
    }

    /// Decode from the packed big-endian form.
    ///
    /// Returns `None` if the buffer is too short; `InvalidAction` if the
    /// high 5 bits are not one of the five valid tags.
    pub fn decode(buf: &[u8]) -> Option<Result<Self>> {
        if buf.len() < HEADER_SIZE {
            return None;
        }
        let packed = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let tag = packed >> ACTION_SHIFT;
        let payload_length = packed & MAX_REQUEST_PAYLOAD as u32;
        Some(Action::from_tag(tag).map(|action| Self {
            action,
            payload_length,
        }))
    }
}

/// Encode a response header (plain big-endian length).
#[inline]
pub fn encode_response_len(len: u32) -> [u8; HEADER_SIZE] {
    len.to_be_bytes()
}

/// Decode a response header (plain big-endian length).
///
/// Returns `None` if the buffer is too short.
#[inline]
pub fn decode_response_len(buf: &[u8]) -> Option<u32> {
    if buf.len() < HEADER_SIZE {
        return None;
    }
    Some(u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_header_roundtrip() {
        for action in Action::ALL {
            let original = RequestHeader::new(action, 12345).unwrap();
            let decoded = RequestHeader::decode(&original.encode()).unwrap().unwrap();
            assert_eq!(original, decoded);
        }
    }

    #[test]
    fn test_request_header_big_endian_byte_order() {
        // reverse (tag 4) with a 5-byte payload: (4 << 27) | 5 = 0x20000005
        let header = RequestHeader::new(Action::Reverse, 5).unwrap();
        assert_eq!(header.encode(), [0x20, 0x00, 0x00, 0x05]);
    }

    #[test]
    fn test_request_header_max_payload_accepted() {
        let header = RequestHeader::new(Action::Random, MAX_REQUEST_PAYLOAD).unwrap();
        let bytes = header.encode();
        // tag 16 = 0b10000 in the top 5 bits, all 27 length bits set
        assert_eq!(bytes, [0x87, 0xFF, 0xFF, 0xFF]);
        let decoded = RequestHeader::decode(&bytes).unwrap().unwrap();
        assert_eq!(decoded.payload_length as usize, MAX_REQUEST_PAYLOAD);
    }

    #[test]
    fn test_request_header_oversized_payload_rejected() {
        let result = RequestHeader::new(Action::Uppercase, MAX_REQUEST_PAYLOAD + 1);
        assert!(matches!(
            result,
            Err(TextwireError::PayloadTooLarge { len, .. }) if len == MAX_REQUEST_PAYLOAD + 1
        ));
    }

    #[test]
    fn test_request_header_invalid_tag_rejected() {
        // Tag 3 (two bits set) is not a valid action.
        let packed: u32 = (3 << ACTION_SHIFT) | 10;
        let result = RequestHeader::decode(&packed.to_be_bytes()).unwrap();
        assert!(matches!(result, Err(TextwireError::InvalidAction(3))));
    }

    #[test]
    fn test_request_header_decode_too_short() {
        assert!(RequestHeader::decode(&[0x20, 0x00, 0x00]).is_none());
    }

    #[test]
    fn test_response_len_roundtrip() {
        for len in [0u32, 1, 5, 0xFFFF, u32::MAX] {
            assert_eq!(decode_response_len(&encode_response_len(len)), Some(len));
        }
    }

    #[test]
    fn test_response_len_big_endian() {
        assert_eq!(encode_response_len(5), [0x00, 0x00, 0x00, 0x05]);
        assert_eq!(decode_response_len(&[0x01, 0x02, 0x03, 0x04]), Some(0x01020304));
    }

    #[test]
    fn test_response_len_too_short() {
        assert_eq!(decode_response_len(&[0x00, 0x00, 0x05]), None);
    }
}
