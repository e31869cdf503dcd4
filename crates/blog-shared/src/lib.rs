//! # Blog Shared
//!
//! Wire types shared between the server and its clients.
//! This crate has no server-side dependencies so it can be reused by a
//! client or a WASM frontend.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
