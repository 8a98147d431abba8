use bytes::Bytes;

/// Status line text for the two outcomes this server produces.
///
/// Everything the server sends is either the requested resource or the
/// fixed 404 page; there is no other client-visible error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl Status {
    /// Returns the status text as it appears on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use kiosk::http::response::Status;
    /// assert_eq!(Status::Ok.as_str(), "200 OK");
    /// assert_eq!(Status::NotFound.as_str(), "404 Not Found");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "200 OK",
            Status::NotFound => "404 Not Found",
        }
    }
}

/// Body served when a request does not resolve to a registered resource.
pub const NOT_FOUND_BODY: &str = "<h1>404 Not Found</h1>";

/// A response ready for serialization: status text, MIME type, body bytes.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: Status,
    pub mime: String,
    pub body: Bytes,
}

impl Response {
    /// A 200 response carrying the given resource content.
    pub fn ok(mime: impl Into<String>, body: Bytes) -> Self {
        Self {
            status: Status::Ok,
            mime: mime.into(),
            body,
        }
    }

    /// The fixed 404 page.
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            mime: "text/html".to_string(),
            body: Bytes::from_static(NOT_FOUND_BODY.as_bytes()),
        }
    }
}
