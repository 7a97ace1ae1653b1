//! Shared fixtures and mock HTTP server for integration tests
#![allow(dead_code)]

pub mod fixtures;
pub mod mock_server;
