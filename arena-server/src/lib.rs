//! HTTP API and embedded web UI for side-by-side agent comparisons.
//!
//! ```rust,no_run
//! use arena_core::{MockInvoker, SingleInvokerLoader};
//! use arena_server::{ServerConfig, create_app};
//! use std::sync::Arc;
//!
//! let loader = SingleInvokerLoader::new(Arc::new(MockInvoker::new("mock")));
//! let app = create_app(ServerConfig::new(Arc::new(loader)));
//! ```

pub mod config;
pub mod rest;
pub mod store;
pub mod web_ui;

pub use config::{SecurityConfig, ServerConfig};
pub use rest::{create_app, create_app_with_store};
pub use store::ResultStore;
