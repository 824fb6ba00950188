use crate::Agent;

/// Looks up the chat-completion API key of an agent.
///
/// Returns `None` when the agent itself, its credential holder, or the key
/// is absent. No other validation happens.
#[inline]
pub fn extract_api_key(agent: Option<&Agent>) -> Option<&str> {
    agent?.api_key()
}
