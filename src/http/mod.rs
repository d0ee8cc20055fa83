//! HTTP protocol implementation.
//!
//! This module implements the deliberately minimal HTTP/1.1 subset the server
//! speaks: only the request line is parsed, every response closes the
//! connection, and the produced status codes are 200, 404 and 429.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the
//!   admission/request/response state machine
//! - **`parser`**: Parses the request line from the inbound byte buffer
//! - **`request`**: The ephemeral parsed request view
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  RateCheck  │ ← Admission decision for the client IP
//!        └──────┬──────┘
//!               │ admitted           (rejected: 429 → Writing)
//!               ▼
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Request received   (EOF: → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Processing    │ ← Resolve path, produce response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
