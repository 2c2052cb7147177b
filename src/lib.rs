//! Photo upload Lambda function
//!
//! Decodes a base64-encoded request body and stores it as a publicly
//! readable JPEG object in S3, returning the object's public URL.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Upload handler
pub mod handlers;

/// S3-backed photo storage
pub mod media_storage;

/// Request, response and configuration types
pub mod types;
