//! Request sending and response receiving over an established stream.
//!
//! The protocol exchange is strictly sequential within one connection:
//! the caller sends every request with [`send_request`], then drains the
//! responses with [`receive_responses`]. Both functions borrow the stream
//! halves for the duration of the call and neither spawns tasks; the only
//! suspension points are the socket reads and writes themselves.
//!
//! # Example
//!
//! ```ignore
//! use textwire_client::{receive_responses, send_request, Action, Flow};
//!
//! let (mut reader, mut writer) = stream.into_split();
//! send_request(&mut writer, Action::Reverse, b"HELLO").await?;
//!
//! let mut seen = 0;
//! receive_responses(&mut reader, |payload| {
//!     println!("{}", String::from_utf8_lossy(&payload));
//!     seen += 1;
//!     if seen == 1 { Flow::Stop } else { Flow::Continue }
//! })
//! .await?;
//! ```

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{Result, TextwireError};
use crate::protocol::{
    Action, RequestHeader, ResponseBuffer, DEFAULT_MAX_RESPONSE_PAYLOAD, HEADER_SIZE,
};

/// Size of the scratch buffer a single socket read fills.
const READ_CHUNK_SIZE: usize = 64 * 1024;

/// Handler verdict after each delivered response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// More responses are expected; keep reading.
    Continue,
    /// All expected responses have been handled; end the session.
    Stop,
}

/// Encode one `(action, payload)` request and write it fully to the stream.
///
/// The payload must fit in the 27-bit length field; violation fails before
/// any byte is written. Short writes are retried on the remaining suffix
/// until the whole frame is on the wire. A write that reports zero bytes
/// of progress is treated as a stalled transport rather than looped on.
pub async fn send_request<W>(writer: &mut W, action: Action, payload: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let header = RequestHeader::new(action, payload.len())?;

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.extend_from_slice(&header.encode());
    frame.extend_from_slice(payload);

    let mut sent = 0;
    while sent < frame.len() {
        let n = writer.write(&frame[sent..]).await?;
        if n == 0 {
            return Err(TextwireError::WriteStalled {
                remaining: frame.len() - sent,
            });
        }
        sent += n;
    }
    writer.flush().await?;

    Ok(())
}

/// Read response frames and deliver each payload to `handler`, in arrival
/// order, until the handler returns [`Flow::Stop`].
///
/// Uses the default 1 GiB cap on declared response lengths; see
/// [`receive_responses_with_cap`] to tighten it.
///
/// # Errors
///
/// - `PrematureClose` if the stream ends before the handler signals `Stop`,
///   whether mid-frame or between frames.
/// - `Io` if a read fails.
/// - `ResponseTooLarge` if a frame declares a length past the cap.
pub async fn receive_responses<R, F>(reader: &mut R, handler: F) -> Result<()>
where
    R: AsyncRead + Unpin,
    F: FnMut(Bytes) -> Flow,
{
    receive_responses_with_cap(reader, handler, DEFAULT_MAX_RESPONSE_PAYLOAD).await
}

/// [`receive_responses`] with a custom cap on declared response lengths.
pub async fn receive_responses_with_cap<R, F>(
    reader: &mut R,
    mut handler: F,
    max_payload_size: u32,
) -> Result<()>
where
    R: AsyncRead + Unpin,
    F: FnMut(Bytes) -> Flow,
{
    let mut buffer = ResponseBuffer::with_max_payload(max_payload_size);
    let mut scratch = vec![0u8; READ_CHUNK_SIZE];

    loop {
        let n = reader.read(&mut scratch).await?;
        if n == 0 {
            // The handler has not signaled Stop, so the peer closed
            // mid-protocol regardless of where the frame boundary fell.
            return Err(TextwireError::PrematureClose);
        }

        for payload in buffer.push(&scratch[..n])? {
            if handler(payload) == Flow::Stop {
                return Ok(());
            }
        }
    }
}
