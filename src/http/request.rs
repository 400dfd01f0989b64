use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

/// Capacity of the single request read.
pub const MAX_REQUEST_BYTES: usize = 1024;

/// The raw bytes of one request, captured by a single bounded read.
///
/// The buffer has a fixed capacity of [`MAX_REQUEST_BYTES`]; `len` records
/// how many bytes the read actually returned. [`RawRequest::bytes`] only ever
/// exposes that prefix, so scanning can never run past the received data into
/// unwritten capacity. Anything the client sends beyond the capacity is left
/// in the socket and never read.
pub struct RawRequest {
    buf: [u8; MAX_REQUEST_BYTES],
    len: usize,
}

impl RawRequest {
    /// Performs the one read of the connection. No retry, no
    /// read-until-complete loop: whatever the single read returns is the
    /// whole request, including nothing at all when the peer already
    /// closed its write side.
    pub async fn read_from(stream: &mut TcpStream) -> anyhow::Result<Self> {
        let mut buf = [0u8; MAX_REQUEST_BYTES];
        let len = stream.read(&mut buf).await?;
        Ok(Self { buf, len })
    }

    /// The received bytes, bounded by the actual read length.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
