use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

/// Value of the `Server` header.
const SERVER_NAME: &str = concat!("kiosk/", env!("CARGO_PKG_VERSION"));

/// Full-buffer send attempts before giving up on a connection.
const MAX_SEND_ATTEMPTS: usize = 4;

/// Serializes a response into one contiguous byte buffer: status line,
/// fixed header block, blank line, body. The status line echoes the
/// client's own version token.
///
/// Note: this function is public so integration tests can assert the
/// exact wire format.
pub fn serialize_response(version: &str, resp: &Response) -> Vec<u8> {
    let mut buf = Vec::with_capacity(resp.body.len() + 128);

    // Status line
    let status_line = format!("{} {}\r\n", version, resp.status.as_str());
    buf.extend_from_slice(status_line.as_bytes());

    // Fixed header block
    buf.extend_from_slice(format!("Server: {SERVER_NAME}\r\n").as_bytes());
    buf.extend_from_slice(format!("Content-Type: {}\r\n", resp.mime).as_bytes());
    buf.extend_from_slice(b"Accept-Ranges: bytes\r\n");
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.body.len()).as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
}

impl ResponseWriter {
    pub fn new(version: &str, response: &Response) -> Self {
        Self {
            buffer: serialize_response(version, response),
        }
    }

    /// Attempts the full buffer up to `MAX_SEND_ATTEMPTS` times. Send
    /// errors are swallowed and the next attempt starts over from the
    /// beginning of the buffer. Returns whether any attempt went through;
    /// never an error.
    pub async fn send(&self, stream: &mut TcpStream) -> bool {
        for attempt in 1..=MAX_SEND_ATTEMPTS {
            match stream.write_all(&self.buffer).await {
                Ok(()) => return true,
                Err(e) => {
                    tracing::trace!(attempt, error = %e, "send attempt failed");
                }
            }
        }

        false
    }
}
