//! TCP connection setup.
//!
//! Resolves `host:port` and opens the connected stream the framing layer
//! operates on. Connection teardown is the caller's drop of the stream.

use tokio::net::TcpStream;

use crate::error::Result;

/// Resolve `host:port` and connect.
///
/// `host` may be a hostname or a literal address; resolution tries each
/// candidate address in order (the `ToSocketAddrs` behavior of
/// [`TcpStream::connect`]).
pub async fn connect(host: &str, port: u16) -> Result<TcpStream> {
    tracing::debug!(host, port, "connecting");
    let stream = TcpStream::connect((host, port)).await?;
    tracing::debug!(peer = %stream.peer_addr()?, "connected");
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_connect_to_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let stream = connect("127.0.0.1", port).await.unwrap();
        let (accepted, _) = listener.accept().await.unwrap();

        assert_eq!(
            stream.local_addr().unwrap(),
            accepted.peer_addr().unwrap()
        );
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        assert!(connect("127.0.0.1", port).await.is_err());
    }
}
