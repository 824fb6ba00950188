//! The agent data model.
//!
//! An agent arrives as a loosely-shaped JSON document owned by the caller.
//! Every field is optional and a value of the wrong shape never fails the
//! document: sequences skip malformed entries, text fields keep numbers and
//! booleans as text, anything else is absent. Use the accessor methods to
//! walk nested fields without caring about which link is missing.

mod lenient;

use serde::{Deserialize, Serialize};

/// A configured assistant with its webhooks, endpoints, credentials,
/// instructions and knowledge articles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    /// Webhooks the model may trigger.
    #[serde(
        default,
        deserialize_with = "lenient::entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub webhook: Option<Vec<WebhookEntry>>,
    /// Platform endpoints the model may call.
    #[serde(
        default,
        deserialize_with = "lenient::entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoints: Option<Vec<EndpointEntry>>,
    /// Credentials for the chat-completion API.
    #[serde(
        default,
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub chave_openai: Option<OpenAICredential>,
    /// Base instructions of the system prompt.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub instrucoes: Option<String>,
    /// Knowledge articles appended to the system prompt.
    #[serde(
        default,
        deserialize_with = "lenient::entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub artigos: Option<Vec<ArticleEntry>>,
}

impl Agent {
    /// Returns the webhook entries, empty if absent.
    #[inline]
    pub fn webhooks(&self) -> &[WebhookEntry] {
        self.webhook.as_deref().unwrap_or_default()
    }

    /// Returns the endpoint entries, empty if absent.
    #[inline]
    pub fn endpoints(&self) -> &[EndpointEntry] {
        self.endpoints.as_deref().unwrap_or_default()
    }

    /// Returns the knowledge articles, empty if absent.
    #[inline]
    pub fn articles(&self) -> &[ArticleEntry] {
        self.artigos.as_deref().unwrap_or_default()
    }

    /// Returns the base instructions, empty if absent.
    #[inline]
    pub fn instructions(&self) -> &str {
        self.instrucoes.as_deref().unwrap_or_default()
    }

    /// Returns the chat-completion API key, if both the credential holder
    /// and the key itself are present.
    ///
    /// The key is returned as-is, an empty string is still a key.
    #[inline]
    pub fn api_key(&self) -> Option<&str> {
        self.chave_openai.as_ref()?.chave_api.as_deref()
    }
}

const REDACTED: &str = "<deducted>";

/// Holds the chat-completion API credential.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpenAICredential {
    /// The API key.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub chave_api: Option<String>,
}

impl std::fmt::Debug for OpenAICredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICredential")
            .field("chave_api", &self.chave_api.as_ref().map(|_| REDACTED))
            .finish()
    }
}

macro_rules! entry {
    ($(#[$meta:meta])* $entry:ident => $item:ident, $empty:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
        )]
        pub struct $entry {
            /// The wrapped item.
            #[serde(
                default,
                deserialize_with = "lenient::or_absent",
                skip_serializing_if = "Option::is_none"
            )]
            pub item: Option<$item>,
        }

        impl $entry {
            /// Wraps an item.
            #[inline]
            pub fn new(item: $item) -> Self {
                Self { item: Some(item) }
            }

            /// Returns the wrapped item, or an item with every field
            /// absent.
            #[inline]
            pub fn item(&self) -> &$item {
                self.item.as_ref().unwrap_or(&$empty)
            }
        }

        impl From<$item> for $entry {
            #[inline]
            fn from(item: $item) -> Self {
                Self::new(item)
            }
        }
    };
}

entry!(
    /// A webhook as stored on the agent.
    WebhookEntry => Webhook, EMPTY_WEBHOOK
);
entry!(
    /// An endpoint as stored on the agent.
    EndpointEntry => Endpoint, EMPTY_ENDPOINT
);
entry!(
    /// A knowledge article as stored on the agent.
    ArticleEntry => Article, EMPTY_ARTICLE
);

static EMPTY_WEBHOOK: Webhook = Webhook {
    nome: None,
    contexto: None,
};

static EMPTY_ENDPOINT: Endpoint = Endpoint {
    plataforma: None,
    url: None,
};

static EMPTY_ARTICLE: Article = Article {
    titulo: None,
    conteudo: None,
};

/// A named external action that takes no arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Webhook {
    /// Display name of the webhook.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub nome: Option<String>,
    /// What the webhook does, shown to the model.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub contexto: Option<String>,
}

/// An HTTP target on some platform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// The platform that serves the endpoint.
    #[serde(
        default,
        deserialize_with = "lenient::or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub plataforma: Option<Platform>,
    /// The endpoint URL.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,
}

impl Endpoint {
    /// Returns the platform name, if both the platform and its name are
    /// present.
    #[inline]
    pub fn platform_name(&self) -> Option<&str> {
        self.plataforma.as_ref()?.nome.as_deref()
    }
}

/// A platform hosting endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    /// Display name of the platform.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub nome: Option<String>,
}

/// A piece of reference material for the model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    /// Title of the article.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub titulo: Option<String>,
    /// Body of the article.
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub conteudo: Option<String>,
}
