//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Translates requests
//! into domain commands, runs them, and maps results and typed errors back
//! into JSON payloads and status codes.

pub mod rest;

pub use rest::*;
