//! Maps an [`Agent`] into the pieces of a chat-completion request.
//!
//! Every operation in this crate is a pure function over a borrowed agent:
//! nothing is cached, nothing is mutated, and absent or malformed fields
//! never produce an error. They simply contribute nothing.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod agent;
mod credential;
mod prompt;
mod request;
pub mod tool;

pub use agent::Agent;
pub use credential::extract_api_key;
pub use prompt::compose_system_prompt;
pub use request::build_model_request;
pub use tool::{build_tool_descriptors, normalize_tool_name};
