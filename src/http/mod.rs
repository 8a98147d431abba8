//! HTTP protocol implementation.
//!
//! This module implements the minimal HTTP/1.0-style exchange the server
//! speaks: one request per connection, one response, then close. There is
//! no keep-alive, no chunked transfer, and request bodies are ignored.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Extracts the version token and file name from the raw receive buffer
//! - **`request`**: Parsed request representation
//! - **`response`**: HTTP response representation
//! - **`writer`**: Serializes and transmits responses with a bounded retry budget
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Receiving  │ ← Single-shot read of the request bytes
//!        └──────┬──────┘
//!               │ Bytes captured (a failed or empty read jumps to Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Parse, then look up the resource (miss → 404)
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Responding    │ ← Send with bounded retries
//!        └──────┬───────────┘
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │      Closed      │ ← Reached on every path
//!        └──────────────────┘
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
