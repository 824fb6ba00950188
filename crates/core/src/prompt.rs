use crate::Agent;
use crate::agent::ArticleEntry;

const KNOWLEDGE_BASE_HEADER: &str = "Base de conhecimento:";

/// Composes the system prompt from the agent's instructions and knowledge
/// articles.
///
/// Each article is rendered as a `---` separator line, an optional
/// `Título:` line and the content. The knowledge base section is only
/// appended when the rendered articles are not blank.
pub fn compose_system_prompt(agent: &Agent) -> String {
    let mut prompt = agent.instructions().to_owned();

    let articles = render_articles(agent.articles());
    if !articles.trim().is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(KNOWLEDGE_BASE_HEADER);
        prompt.push('\n');
        prompt.push_str(&articles);
    }

    trace!("composed system prompt of {} byte(s)", prompt.len());
    prompt
}

fn render_articles(articles: &[ArticleEntry]) -> String {
    let mut rendered = String::new();
    for entry in articles {
        let article = entry.item();
        rendered.push_str("\n---\n");
        if let Some(title) = article.titulo.as_deref().filter(|t| !t.is_empty())
        {
            rendered.push_str("Título: ");
            rendered.push_str(title);
            rendered.push('\n');
        }
        rendered.push_str(article.conteudo.as_deref().unwrap_or_default());
    }
    rendered
}
