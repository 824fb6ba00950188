use agent_adapter_model::{ModelMessage, ModelRequest};

use crate::{Agent, build_tool_descriptors, compose_system_prompt};

/// Builds a provider-neutral request for the agent.
///
/// The system prompt is only included when it is not empty, and the user
/// input, if any, follows it.
pub fn build_model_request(
    agent: &Agent,
    user_input: Option<&str>,
) -> ModelRequest {
    let mut messages = Vec::with_capacity(2);

    let system_prompt = compose_system_prompt(agent);
    if !system_prompt.is_empty() {
        messages.push(ModelMessage::System(system_prompt));
    }
    if let Some(input) = user_input {
        messages.push(ModelMessage::User(input.to_owned()));
    }

    ModelRequest {
        messages,
        tools: build_tool_descriptors(agent),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_build_model_request() {
        let agent: Agent = serde_json::from_value(json!({
            "instrucoes": "Seja útil.",
            "webhook": [{ "item": { "nome": "Ping" } }],
        }))
        .unwrap();

        let request = build_model_request(&agent, Some("Oi"));
        assert_eq!(
            request.messages,
            vec![
                ModelMessage::System("Seja útil.".to_owned()),
                ModelMessage::User("Oi".to_owned()),
            ]
        );
        assert_eq!(request.tools.len(), 1);
        assert_eq!(request.tools[0].name, "ping");
    }

    #[test]
    fn test_empty_prompt_is_omitted() {
        let request = build_model_request(&Agent::default(), None);
        assert_eq!(request, ModelRequest::default());
    }
}
