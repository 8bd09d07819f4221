//! # arena-core
//!
//! Core types for comparing hosted agents side by side.
//!
//! ## Overview
//!
//! - [`AgentConfig`] - One remote agent (label, agent ID, alias ID, session ID)
//! - [`AgentInvoker`] / [`InvokerLoader`] - The seam to the remote agent API
//! - [`Comparator`] - Sends one prompt to every agent concurrently
//! - [`Comparison`] / [`InvocationResult`] - One result slot per agent, in configuration order
//! - [`ArenaError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arena_core::{AgentConfig, Comparator, ComparisonRequest, MockInvoker, SingleInvokerLoader};
//! use std::sync::Arc;
//!
//! # async fn run() -> arena_core::Result<()> {
//! let loader = SingleInvokerLoader::new(Arc::new(MockInvoker::new("mock")));
//! let comparator = Comparator::new(Arc::new(loader));
//!
//! let request = ComparisonRequest::new(
//!     "Summarize this text",
//!     vec![AgentConfig::new("Model-A", "X1"), AgentConfig::new("Model-B", "X2")],
//! );
//! let comparison = comparator.compare(request).await?;
//! for row in comparison.summary() {
//!     println!("{}: {}", row.model, row.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod compare;
pub mod error;
pub mod invoker;
pub mod mock;
pub mod result;

pub use agent::{
    AgentConfig, DEFAULT_ALIAS_ID, DEFAULT_REGION, MAX_AGENTS, MIN_AGENTS, SUPPORTED_REGIONS,
    is_supported_region,
};
pub use compare::{Comparator, ComparisonRequest};
pub use error::{ArenaError, ErrorKind, Result};
pub use invoker::{AgentInvoker, InvocationRequest, InvokerLoader, SingleInvokerLoader};
pub use mock::MockInvoker;
pub use result::{Comparison, InvocationResult, Outcome, SummaryRow, TIMESTAMP_FORMAT};
