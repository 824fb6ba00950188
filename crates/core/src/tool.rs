//! Tool descriptors derived from an agent's webhooks and endpoints.

use std::collections::HashSet;

use agent_adapter_model::ModelTool;
use serde_json::{Value, json};

use crate::agent::{Agent, Endpoint, Webhook};

/// Name used for endpoints whose platform has no name.
pub const FALLBACK_ENDPOINT_NAME: &str = "endpoint";

/// Builds the tools the model may call on behalf of the agent.
///
/// Webhook tools come first, then endpoint tools, each group in the order
/// the agent lists them. Names are normalized with [`normalize_tool_name`]
/// but never deduplicated: two entries that normalize to the same name
/// yield two tools with that name.
pub fn build_tool_descriptors(agent: &Agent) -> Vec<ModelTool> {
    let webhooks = agent.webhooks();
    let endpoints = agent.endpoints();

    let mut tools = Vec::with_capacity(webhooks.len() + endpoints.len());
    tools.extend(webhooks.iter().map(|entry| webhook_tool(entry.item())));
    tools.extend(endpoints.iter().map(|entry| endpoint_tool(entry.item())));

    let mut seen = HashSet::with_capacity(tools.len());
    for tool in &tools {
        if !seen.insert(tool.name.as_str()) {
            warn!("duplicate tool name: {:?}", tool.name);
        }
    }

    debug!(
        "built {} tool(s): {} webhook(s), {} endpoint(s)",
        tools.len(),
        webhooks.len(),
        endpoints.len()
    );
    tools
}

/// Normalizes a display name into a tool name.
///
/// Every white-space character becomes `_`, then the result is
/// lower-cased. The byte order mark counts as white-space here, the next
/// line character (U+0085) does not.
pub fn normalize_tool_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_whitespace(c) { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

#[inline]
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn webhook_tool(webhook: &Webhook) -> ModelTool {
    let name = webhook.nome.as_deref().unwrap_or_default();
    let description = match webhook.contexto.as_deref() {
        Some(context) if !context.is_empty() => context.to_owned(),
        // An absent name renders as empty, not as `undefined`.
        _ => format!("Executa o webhook {name}"),
    };
    ModelTool {
        name: normalize_tool_name(name),
        description,
        parameters: webhook_parameters(),
    }
}

fn endpoint_tool(endpoint: &Endpoint) -> ModelTool {
    let platform = endpoint.platform_name();
    let name = platform
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_ENDPOINT_NAME);
    let description = format!(
        "Chama o endpoint da plataforma {} ({})",
        platform.unwrap_or_default(),
        endpoint.url.as_deref().unwrap_or_default()
    );
    ModelTool {
        name: normalize_tool_name(name),
        description,
        parameters: endpoint_parameters(),
    }
}

#[inline]
fn webhook_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "required": [],
        "additionalProperties": false
    })
}

#[inline]
fn endpoint_parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "chave_api": {
                "type": "string",
                "description": "Chave de API para autenticação"
            },
            "url": {
                "type": "string",
                "description": "URL do endpoint"
            }
        },
        "required": ["chave_api", "url"],
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Platform;

    fn webhook(nome: Option<&str>, contexto: Option<&str>) -> Webhook {
        Webhook {
            nome: nome.map(ToOwned::to_owned),
            contexto: contexto.map(ToOwned::to_owned),
        }
    }

    fn endpoint(platform: Option<&str>, url: Option<&str>) -> Endpoint {
        Endpoint {
            plataforma: platform.map(|nome| Platform {
                nome: Some(nome.to_owned()),
            }),
            url: url.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn test_no_tools() {
        assert!(build_tool_descriptors(&Agent::default()).is_empty());

        let agent = Agent {
            webhook: Some(vec![]),
            endpoints: Some(vec![]),
            ..Default::default()
        };
        assert!(build_tool_descriptors(&agent).is_empty());
    }

    #[test]
    fn test_webhook_tool() {
        let tool =
            webhook_tool(&webhook(Some("Enviar Email"), Some("Envia email")));
        assert_eq!(tool.name, "enviar_email");
        assert_eq!(tool.description, "Envia email");
        assert_eq!(tool.parameters["properties"], json!({}));
        assert!(tool.required_parameters().is_empty());
        assert_eq!(tool.parameters["additionalProperties"], json!(false));
    }

    #[test]
    fn test_webhook_description_fallback() {
        let tool = webhook_tool(&webhook(Some("Teste"), None));
        assert_eq!(tool.description, "Executa o webhook Teste");

        // An empty context falls back as well, keeping the original casing.
        let tool = webhook_tool(&webhook(Some("Novo Lead"), Some("")));
        assert_eq!(tool.name, "novo_lead");
        assert_eq!(tool.description, "Executa o webhook Novo Lead");

        let tool = webhook_tool(&webhook(None, None));
        assert_eq!(tool.name, "");
        assert_eq!(tool.description, "Executa o webhook ");
    }

    #[test]
    fn test_endpoint_tool() {
        let tool = endpoint_tool(&endpoint(Some("Slack"), Some("https://x")));
        assert_eq!(tool.name, "slack");
        assert_eq!(
            tool.description,
            "Chama o endpoint da plataforma Slack (https://x)"
        );
        assert_eq!(tool.required_parameters(), vec!["chave_api", "url"]);
        assert_eq!(tool.parameters, endpoint_parameters());
    }

    #[test]
    fn test_endpoint_fallbacks() {
        let tool = endpoint_tool(&endpoint(None, None));
        assert_eq!(tool.name, FALLBACK_ENDPOINT_NAME);
        assert_eq!(tool.description, "Chama o endpoint da plataforma  ()");

        let tool = endpoint_tool(&endpoint(Some(""), Some("https://y")));
        assert_eq!(tool.name, FALLBACK_ENDPOINT_NAME);
        assert_eq!(tool.description, "Chama o endpoint da plataforma  (https://y)");

        let tool = endpoint_tool(&Endpoint {
            plataforma: Some(Platform { nome: None }),
            url: Some("https://z".to_owned()),
        });
        assert_eq!(tool.name, FALLBACK_ENDPOINT_NAME);
    }

    #[test]
    fn test_order_and_duplicates() {
        let agent = Agent {
            endpoints: Some(vec![
                endpoint(Some("Google Sheets"), Some("https://a")).into(),
                endpoint(Some("google sheets"), Some("https://b")).into(),
            ]),
            webhook: Some(vec![
                webhook(Some("B"), None).into(),
                webhook(Some("A"), None).into(),
            ]),
            ..Default::default()
        };
        let names = build_tool_descriptors(&agent)
            .into_iter()
            .map(|tool| tool.name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["b", "a", "google_sheets", "google_sheets"]);
    }

    #[test]
    fn test_normalize_tool_name() {
        assert_eq!(normalize_tool_name("Enviar Email"), "enviar_email");
        assert_eq!(normalize_tool_name("  Two\tTabs\n"), "__two_tabs_");
        assert_eq!(normalize_tool_name("A\u{a0}B\u{feff}C"), "a_b_c");
        assert_eq!(normalize_tool_name("A\u{85}B"), "a\u{85}b");
        assert_eq!(normalize_tool_name("A\u{2028}B\u{3000}C"), "a_b_c");
        assert_eq!(normalize_tool_name("ÁREA Única"), "área_única");
        assert_eq!(normalize_tool_name(""), "");
    }

    #[test]
    fn test_idempotent() {
        let agent = Agent {
            webhook: Some(vec![webhook(Some("X"), None).into()]),
            endpoints: Some(vec![endpoint(Some("Y"), None).into()]),
            ..Default::default()
        };
        assert_eq!(
            build_tool_descriptors(&agent),
            build_tool_descriptors(&agent)
        );
    }
}
