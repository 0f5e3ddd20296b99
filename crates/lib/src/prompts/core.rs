//! # Prompt Rendering Helpers
//!
//! Templates use `{name}` placeholders, replaced verbatim.

/// Renders the summarization user prompt.
///
/// Placeholders: `{text}`
pub fn render_summarization_prompt(template: &str, text: &str) -> String {
    template.replace("{text}", text)
}

/// Renders the question-generation user prompt.
///
/// `{count}` is substituted before `{text}` so a literal `{count}` inside the
/// source material is left alone.
///
/// Placeholders: `{count}`, `{text}`
pub fn render_question_prompt(template: &str, text: &str, count: usize) -> String {
    template
        .replace("{count}", &count.to_string())
        .replace("{text}", text)
}
