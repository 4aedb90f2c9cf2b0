//! Travelbook library exports for the CLI and integration tests

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod presentation;

#[cfg(test)]
pub mod test_support;
