//! Curator - Sandboxed Static File Server
//!
//! Core library for HTTP handling and sandboxed file serving.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
