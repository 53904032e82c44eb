//! Response buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for buffer management. Implements a two-state
//! machine for reassembling fragmented response frames:
//! - `AwaitingHeader`: need at least 4 bytes to learn a payload length
//! - `AwaitingBody`: header consumed, need N more payload bytes
//!
//! Frames may span multiple socket reads, and a single read may carry
//! several frames or a fraction of one. The buffer carries pending bytes
//! across pushes so partial parsing is re-entrant without re-scanning
//! bytes that were already structured into delivered payloads.

use bytes::{Bytes, BytesMut};

use super::wire_format::{decode_response_len, DEFAULT_MAX_RESPONSE_PAYLOAD, HEADER_SIZE};
use crate::error::{Result, TextwireError};

/// Free-space level below which the buffer is grown before buffering more
/// bytes, so an incoming chunk is never truncated for lack of room.
const LOW_WATER: usize = 100;

/// Initial buffer capacity.
const INITIAL_CAPACITY: usize = 1024;

/// State machine for response frame parsing.
#[derive(Debug, Clone)]
enum State {
    /// Waiting for a complete 4-byte length header.
    AwaitingHeader,
    /// Header consumed, waiting for the declared payload bytes.
    AwaitingBody { remaining: u32 },
}

/// Buffer for accumulating incoming bytes and extracting complete
/// response payloads.
///
/// Growth policy: capacity doubles whenever free space falls under a
/// low-water mark, amortizing reallocation to O(log total-bytes)
/// regrowths. A declared payload length above `max_payload_size` is
/// rejected before any growth happens.
pub struct ResponseBuffer {
    /// Pending bytes: received but not yet structured into a payload.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Cap on a declared response payload length.
    max_payload_size: u32,
}

impl ResponseBuffer {
    /// Create a buffer with the default growth cap (1 GiB).
    pub fn new() -> Self {
        Self::with_max_payload(DEFAULT_MAX_RESPONSE_PAYLOAD)
    }

    /// Create a buffer with a custom growth cap.
    pub fn with_max_payload(max_payload_size: u32) -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
            state: State::AwaitingHeader,
            max_payload_size,
        }
    }

    /// Push bytes into the buffer and extract all complete payloads.
    ///
    /// This is the main API for processing data arriving from the socket.
    /// Payloads are returned in arrival order; fragmented remainders stay
    /// buffered for the next push.
    ///
    /// # Errors
    ///
    /// Returns `ResponseTooLarge` if a header declares a payload past the
    /// configured cap.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Bytes>> {
        self.reserve_for(data.len());
        self.buffer.extend_from_slice(data);

        let mut payloads = Vec::new();
        while let Some(payload) = self.try_extract_one()? {
            payloads.push(payload);
        }

        Ok(payloads)
    }

    /// Grow the buffer by doubling until `incoming` bytes fit with
    /// low-water slack to spare.
    fn reserve_for(&mut self, incoming: usize) {
        let needed = incoming + LOW_WATER;
        let spare = self.buffer.capacity() - self.buffer.len();
        if spare >= needed {
            return;
        }
        let mut grow = self.buffer.capacity().max(INITIAL_CAPACITY);
        while spare + grow < needed {
            grow *= 2;
        }
        self.buffer.reserve(grow);
    }

    /// Try to extract a single payload from the buffer.
    ///
    /// Returns:
    /// - `Ok(Some(payload))` if a complete frame was extracted
    /// - `Ok(None)` if more data is needed
    /// - `Err(...)` if the declared length exceeds the cap
    fn try_extract_one(&mut self) -> Result<Option<Bytes>> {
        match self.state {
            State::AwaitingHeader => {
                let Some(length) = decode_response_len(&self.buffer) else {
                    return Ok(None);
                };

                if length > self.max_payload_size {
                    return Err(TextwireError::ResponseTooLarge {
                        declared: length,
                        max: self.max_payload_size,
                    });
                }

                // Consume header bytes
                let _ = self.buffer.split_to(HEADER_SIZE);

                if length == 0 {
                    // Empty payload, frame is already complete
                    return Ok(Some(Bytes::new()));
                }

                self.state = State::AwaitingBody { remaining: length };

                // The body may already be buffered
                self.try_extract_one()
            }

            State::AwaitingBody { remaining } => {
                let remaining = remaining as usize;

                if self.buffer.len() < remaining {
                    return Ok(None);
                }

                // Extract payload (zero-copy freeze)
                let payload = self.buffer.split_to(remaining).freeze();

                // Reset state for the next frame
                self.state = State::AwaitingHeader;

                Ok(Some(payload))
            }
        }
    }

    /// Whether a frame is only partially received (pending bytes exist or
    /// a header has been consumed with its body still outstanding).
    pub fn has_partial_frame(&self) -> bool {
        !self.buffer.is_empty() || matches!(self.state, State::AwaitingBody { .. })
    }

    /// Number of pending bytes.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::AwaitingHeader;
    }

    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match self.state {
            State::AwaitingHeader => "AwaitingHeader",
            State::AwaitingBody { .. } => "AwaitingBody",
        }
    }
}

impl Default for ResponseBuffer {
    fn default() -> Self {
        Self::new()
    }
}
