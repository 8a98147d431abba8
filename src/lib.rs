//! Kiosk - Bounded-Concurrency Static Server
//!
//! Core library for serving a fixed set of in-memory resources over HTTP.

pub mod config;
pub mod http;
pub mod resources;
pub mod server;
