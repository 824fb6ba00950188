//! Turns an agent document into a ready-to-send chat-completion payload.
//!
//! The crate includes a CLI tool that prints the payload for an agent stored
//! as JSON. And you can also use it as a library, handing the payload and the
//! [`OpenAIConfig`] to whatever HTTP client your host app already has.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

use agent_adapter_core::{Agent, build_model_request};
use agent_adapter_openai_model::{
    ChatCompletionRequest, OpenAIConfig, OpenAIConfigBuilder, create_request,
};

/// Re-exports of [`agent_adapter_core`] crate.
pub mod core {
    pub use agent_adapter_core::*;
}

/// Re-exports of [`agent_adapter_openai_model`] crate.
pub mod openai {
    pub use agent_adapter_openai_model::*;
}

/// Creates a configuration builder seeded with the agent's API key.
///
/// Returns `None` if the agent has no key, the caller decides whether to
/// fall back to another key or give up.
pub fn openai_config(agent: &Agent) -> Option<OpenAIConfigBuilder> {
    let api_key = agent.api_key()?;
    Some(OpenAIConfigBuilder::with_api_key(api_key))
}

/// Prepares the chat-completion payload for the agent.
pub fn prepare_chat_completion(
    agent: &Agent,
    user_input: Option<&str>,
    config: &OpenAIConfig,
) -> ChatCompletionRequest {
    let request = build_model_request(agent, user_input);
    debug!(
        "prepared chat completion for model {} with {} tool(s), system \
         prompt of {} byte(s)",
        config.model(),
        request.tools.len(),
        request.system_prompt().map_or(0, str::len)
    );
    for tool in &request.tools {
        trace!(
            "tool {} requires {:?}",
            tool.name,
            tool.required_parameters()
        );
    }
    create_request(&request, config)
}
