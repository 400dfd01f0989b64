//! Formtap - Fixed-Response Request Server
//!
//! Core library for the listener, connection handling, and field extraction.

pub mod config;
pub mod http;
pub mod server;
