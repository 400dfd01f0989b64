//! Request handling over raw TCP.
//!
//! This module implements the per-connection pipeline: one bounded read, one
//! field scan, one canned response, close.
//!
//! # Architecture
//!
//! - **`connection`**: The connection handler implementing the single-pass
//!   request-response state machine
//! - **`request`**: The bounded raw request buffer produced by the one read
//! - **`extract`**: Scans raw request bytes for a form-encoded field value
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection Lifecycle
//!
//! Each client connection makes a single pass through the state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of up to 1024 bytes
//!        └──────┬──────┘
//!               │ Bytes received (possibly zero)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Scan for the logged field
//!        └──────┬───────────┘
//!               │ Response is fixed in advance
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send the canned response
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close
//! ```
//!
//! The response bytes are built once at startup and shared across every
//! connection; request content never influences them.

pub mod request;
pub mod response;
pub mod extract;
pub mod connection;
pub mod writer;
