use crate::http::request::ParsedRequest;

/// Size of the single-shot receive buffer. A request line spanning more
/// bytes than this is parsed from whatever prefix was captured.
pub const RECV_BUFFER_SIZE: usize = 2048;

/// Version token used when the request carries no recognizable `HTTP`.
pub const FALLBACK_VERSION: &str = "HTTP/1.0";

/// Length of a full version token, e.g. `HTTP/1.1`.
const VERSION_TOKEN_LEN: usize = 8;

/// Extracts the HTTP version token and the requested file name from a raw
/// receive buffer.
///
/// Total over arbitrary bytes: anything unparseable degrades to the
/// fallback version or an unresolvable file name, never a panic or an
/// error. The version token is the 8 bytes following the first `HTTP`
/// occurrence (shorter if the buffer ends first). The file name is
/// everything after the last `/` of the bytes preceding the ` HTTP`
/// marker, with backslashes normalized to forward slashes first.
pub fn parse_request(buf: &[u8]) -> ParsedRequest {
    let version = match find(buf, b"HTTP") {
        Some(at) => {
            let end = (at + VERSION_TOKEN_LEN).min(buf.len());
            String::from_utf8_lossy(&buf[at..end]).into_owned()
        }
        None => FALLBACK_VERSION.to_string(),
    };

    let file_name = find(buf, b" HTTP").map(|at| {
        // Malformed clients have been seen sending backslash paths.
        let mut path = buf[..at].to_vec();
        for b in &mut path {
            if *b == b'\\' {
                *b = b'/';
            }
        }

        let start = path.iter().rposition(|&b| b == b'/').map_or(0, |i| i + 1);
        String::from_utf8_lossy(&path[start..]).into_owned()
    });

    ParsedRequest { version, file_name }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET /Main.html HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req);

        assert_eq!(parsed.version, "HTTP/1.1");
        assert_eq!(parsed.file_name.as_deref(), Some("Main.html"));
    }

    #[test]
    fn root_path_is_empty_file_name() {
        let parsed = parse_request(b"GET / HTTP/1.1\r\n\r\n");

        assert!(parsed.wants_index());
    }
}
