//! Amazon Bedrock Agent Runtime invoker for Agent Arena.
//!
//! Sends prompts to preconfigured Bedrock agents through the `InvokeAgent`
//! API and returns the text assembled from the streamed completion.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use arena_bedrock::{BedrockAgentConfig, BedrockInvokerLoader};
//! use arena_core::Comparator;
//! use std::sync::Arc;
//!
//! let loader = BedrockInvokerLoader::new(BedrockAgentConfig::default());
//! let comparator = Comparator::new(Arc::new(loader));
//! ```
//!
//! # Authentication
//!
//! Credentials come from the standard AWS credential chain (environment
//! variables, `~/.aws/credentials`, SSO, IMDS, etc.). Sign in with your
//! usual AWS tooling before starting the arena.

mod client;
mod completion;
mod config;
mod error;
mod loader;

pub use client::BedrockAgentClient;
pub use completion::{CompletionBuffer, NO_RESPONSE};
pub use config::BedrockAgentConfig;
pub use error::with_remediation_hint;
pub use loader::BedrockInvokerLoader;
