//! # Core
//!
//! Pieces every layer depends on and that depend on nothing app-specific.
//!
//! ```text
//!   presentation ──► domain ──► data ──► api
//!         │             │         │
//!         └─────────────┴─────────┴──► core (Resource, config)
//! ```
//!
//! ## Modules
//!
//! - [`resource`]: the `Resource<T>` envelope every use case returns
//! - [`config`]: config file, env and CLI resolution

pub mod config;
pub mod resource;
