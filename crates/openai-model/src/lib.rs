//! Chat-completion payloads for OpenAI-compatible APIs.
//!
//! This crate only shapes data. Sending the payload, authenticating and
//! retrying are left to the caller, who can get everything it needs from
//! [`OpenAIConfig`] and [`ChatCompletionRequest`].

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod config;
mod proto;

pub use config::{OpenAIConfig, OpenAIConfigBuilder};
pub use proto::{ChatCompletionRequest, create_request};
