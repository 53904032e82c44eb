//! # textwire-client
//!
//! Client for the textwire line-oriented text-transformation protocol.
//!
//! A textwire server applies one of five transformations (`uppercase`,
//! `lowercase`, `reverse`, `shuffle`, `random`) to each message it is
//! sent. This crate implements the client side of the wire protocol:
//! request framing, response reassembly under arbitrary read fragmentation,
//! and the thin transport and script-file layers around them.
//!
//! ## Wire format
//!
//! - **Request**: 4-byte big-endian header `(action_tag << 27) | len`,
//!   then `len` raw payload bytes. Payloads are capped at 2^27 - 1 bytes.
//! - **Response**: 4-byte big-endian length, then that many payload bytes.
//!   Responses carry no action tag.
//!
//! ## Example
//!
//! ```ignore
//! use textwire_client::{receive_responses, send_request, transport, Action, Flow};
//!
//! #[tokio::main]
//! async fn main() -> textwire_client::Result<()> {
//!     let stream = transport::connect("localhost", 8080).await?;
//!     let (mut reader, mut writer) = stream.into_split();
//!
//!     send_request(&mut writer, Action::Uppercase, b"hello").await?;
//!
//!     receive_responses(&mut reader, |payload| {
//!         println!("{}", String::from_utf8_lossy(&payload));
//!         Flow::Stop
//!     })
//!     .await
//! }
//! ```

pub mod error;
pub mod input;
pub mod protocol;
pub mod transport;

mod client;

pub use client::{receive_responses, receive_responses_with_cap, send_request, Flow};
pub use error::{Result, TextwireError};
pub use protocol::Action;
