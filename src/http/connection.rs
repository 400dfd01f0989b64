use bytes::Bytes;
use tokio::net::TcpStream;
use tracing::info;

use crate::http::extract::extract;
use crate::http::request::RawRequest;
use crate::http::writer::ResponseWriter;

/// Form field reported from each request. Informational only: the value is
/// logged and has no effect on the response.
const LOGGED_FIELD: &str = "username";

pub struct Connection {
    stream: TcpStream,
    response: Bytes,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(RawRequest),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, response: Bytes) -> Self {
        Self {
            stream,
            response,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through a single Reading → Processing →
    /// Writing pass. The stream is dropped (closed) on every exit path,
    /// including read/write errors.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    // An empty read (peer closed its write side) still gets
                    // the response.
                    let request = RawRequest::read_from(&mut self.stream).await?;
                    self.state = ConnectionState::Processing(request);
                }

                ConnectionState::Processing(request) => {
                    if let Some(value) = extract(request.bytes(), LOGGED_FIELD) {
                        info!(
                            field = LOGGED_FIELD,
                            value = %String::from_utf8_lossy(value),
                            "field received"
                        );
                    }

                    let writer = ResponseWriter::new(self.response.clone());
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
