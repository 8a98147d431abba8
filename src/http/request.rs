/// A request line reduced to the two things this server acts on.
///
/// The method and headers are deliberately not represented: the method is
/// ignored and no header influences the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The client's HTTP version token (e.g. "HTTP/1.1"), echoed back in
    /// the status line. Falls back to a safe default when the request
    /// carries none.
    pub version: String,
    /// Final segment of the requested path.
    ///
    /// `None` means no request line could be recovered at all; the handler
    /// resolves it as not found. `Some("")` is the bare root path and
    /// resolves to the index resource.
    pub file_name: Option<String>,
}

impl ParsedRequest {
    /// True when the request asked for the bare root path.
    pub fn wants_index(&self) -> bool {
        self.file_name.as_deref() == Some("")
    }
}
