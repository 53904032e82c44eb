//! Protocol module - actions, wire format, and response framing.
//!
//! Implements the binary protocol spoken with the transformation server:
//! - the five supported actions and their bit-flag wire tags
//! - packed 4-byte request header encoding, plain 4-byte response header
//! - response buffer for accumulating partial reads

mod action;
mod frame_buffer;
mod wire_format;

pub use action::Action;
pub use frame_buffer::ResponseBuffer;
pub use wire_format::{
    decode_response_len, encode_response_len, RequestHeader, ACTION_SHIFT,
    DEFAULT_MAX_RESPONSE_PAYLOAD, HEADER_SIZE, MAX_REQUEST_PAYLOAD,
};
