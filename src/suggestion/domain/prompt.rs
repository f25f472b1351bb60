//! Prompt text sent to the language model.

use super::{SuggestionDomainError, SuggestionRequest};
use minijinja::{Environment, context};

/// System message framing the model's answer format.
pub const SYSTEM_PROMPT: &str = "You are an AI task prioritization assistant. Answer with a JSON \
object of the form {\"priority\": \"low\" | \"medium\" | \"high\", \"reason\": string}.";

/// User message template; `title` and `description` are substituted.
pub const PROMPT_TEMPLATE: &str = "\
You are an AI task prioritization assistant. Given the title and description of a task, \
you will suggest a priority level for the task.

Task Title: {{ title }}
Task Description: {{ description }}

Consider the urgency and impact of the task when suggesting the priority.
Respond with a priority level of 'low', 'medium', or 'high', along with a brief explanation \
of your reasoning.
";

/// Renders the user message for `request`.
///
/// # Errors
///
/// Returns [`SuggestionDomainError::Template`] when rendering fails.
pub fn render_prompt(request: &SuggestionRequest) -> Result<String, SuggestionDomainError> {
    let environment = Environment::new();
    environment
        .render_str(
            PROMPT_TEMPLATE,
            context! {
                title => request.title(),
                description => request.description(),
            },
        )
        .map_err(|error| SuggestionDomainError::Template(error.to_string()))
}
