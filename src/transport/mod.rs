//! Transport - establishing the byte stream the protocol runs over.

mod tcp;

pub use tcp::connect;
