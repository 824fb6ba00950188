//! Prints the chat-completion payload for an agent stored as JSON.
//!
//! Usage: `agent-adapter <AGENT_JSON_PATH> [MESSAGE]`

#[macro_use]
extern crate tracing;

use std::env;
use std::fs;
use std::process::ExitCode;

use agent_adapter::core::Agent;
use agent_adapter::openai::OpenAIConfigBuilder;
use agent_adapter::{openai_config, prepare_chat_completion};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: agent-adapter <AGENT_JSON_PATH> [MESSAGE]");
        return ExitCode::FAILURE;
    };
    let message = args.next();

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let agent: Agent = match serde_json::from_str(&contents) {
        Ok(agent) => agent,
        Err(err) => {
            eprintln!("failed to parse {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = match openai_config(&agent) {
        Some(builder) => {
            info!("agent has an API key");
            builder
        }
        None => {
            warn!("agent has no API key, the payload cannot be sent as-is");
            OpenAIConfigBuilder::with_api_key("")
        }
    };
    if let Ok(model) = env::var("OPENAI_MODEL") {
        builder = builder.with_model(model);
    }
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        builder = builder.with_base_url(base_url);
    }
    let config = builder.build();
    debug!("using {config:?}");
    info!("payload targets {}", config.chat_completions_url());

    let payload =
        prepare_chat_completion(&agent, message.as_deref(), &config);
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed to serialize payload: {err}");
            ExitCode::FAILURE
        }
    }
}
