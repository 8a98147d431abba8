use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::{RECV_BUFFER_SIZE, parse_request};
use crate::http::request::ParsedRequest;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::resources::ResourceTable;

pub struct Connection {
    stream: TcpStream,
    table: Arc<ResourceTable>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Receiving,
    Resolving(ParsedRequest),
    Responding(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, table: Arc<ResourceTable>) -> Self {
        Self {
            stream,
            table,
            state: ConnectionState::Receiving,
        }
    }

    /// Drives the connection to `Closed`. Infallible: a failed receive
    /// closes the connection, parse anomalies degrade to a 404, and send
    /// failures are contained by the writer. Dropping `self` closes the
    /// stream, exactly once, on every path.
    pub async fn run(mut self) {
        loop {
            match &mut self.state {
                ConnectionState::Receiving => {
                    self.state = match self.read_request().await {
                        Some(parsed) => ConnectionState::Resolving(parsed),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Resolving(parsed) => {
                    let response = Self::resolve(&self.table, parsed);
                    let writer = ResponseWriter::new(&parsed.version, &response);
                    self.state = ConnectionState::Responding(writer);
                }

                ConnectionState::Responding(writer) => {
                    if !writer.send(&mut self.stream).await {
                        tracing::debug!("response dropped after exhausting send attempts");
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }
    }

    /// Single-shot receive: one read, up to the fixed buffer size. The
    /// full request is assumed to arrive in that one read; fragmented
    /// requests are parsed from whatever the first read captured.
    ///
    /// `None` means the socket was already closed or failed; no response
    /// is attempted in that case.
    async fn read_request(&mut self) -> Option<ParsedRequest> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];

        match self.stream.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => Some(parse_request(&buf[..n])),
            Err(e) => {
                tracing::debug!(error = %e, "receive failed");
                None
            }
        }
    }

    /// Maps a parsed request onto the resource table: empty path → index,
    /// registered name → its resource, anything else → the 404 page.
    fn resolve(table: &ResourceTable, parsed: &ParsedRequest) -> Response {
        match parsed.file_name.as_deref() {
            Some("") => {
                let index = table.index();
                Response::ok(index.mime.clone(), index.body.clone())
            }
            Some(name) => match table.lookup(name) {
                Some(resource) => Response::ok(resource.mime.clone(), resource.body.clone()),
                None => Response::not_found(),
            },
            None => Response::not_found(),
        }
    }
}
