//! Prompt composition for the correction call.
//!
//! A fixed system prompt plus one user message rendered from a template with
//! five named placeholders. Rendering is a single non-recursive pass over
//! the template: field values are substituted verbatim and never rescanned,
//! so placeholder-looking text inside a field stays untouched.

use crate::types::{EditRequest, Message};

/// Static system instruction for the correction model.
pub const SYSTEM_PROMPT: &str = "\
You repair failed search/replace edits to source files. Given the edit \
instruction, the search and replace text that failed to apply, the error it \
produced, and the current file content, respond with a corrected search/replace \
pair. The corrected search text must match the current file content exactly, \
including whitespace and indentation. Preserve the intent of the original edit. \
If the file already reflects the intended change, say so instead of inventing \
an edit.";

/// User-prompt template. Each placeholder is substituted exactly once.
pub const USER_PROMPT_TEMPLATE: &str = "\
An edit to a file failed to apply.

Edit instruction:
{instruction}

Search text that failed to match:
{original_text}

Intended replacement text:
{replacement_text}

Error when applying the edit:
{error_message}

Current file content:
{current_content}

Provide a corrected search/replace pair that applies cleanly to the current \
file content.";

/// The composed prompt: system instruction plus a single user message.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub system: &'static str,
    pub user: Message,
}

/// Fill the user-prompt template from a request and pair it with the system
/// prompt.
pub fn compose(request: &EditRequest) -> ComposedPrompt {
    let text = render(
        USER_PROMPT_TEMPLATE,
        &[
            ("instruction", request.instruction.as_str()),
            ("original_text", request.original_text.as_str()),
            ("replacement_text", request.replacement_text.as_str()),
            ("error_message", request.error_message.as_str()),
            ("current_content", request.current_content.as_str()),
        ],
    );
    ComposedPrompt {
        system: SYSTEM_PROMPT,
        user: Message::user(text),
    }
}

/// Substitute `{name}` tokens in one pass.
///
/// Output is built by appending template text and field values; the values
/// themselves are never scanned for tokens. Tokens that name no known field
/// pass through unchanged.
fn render(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        match after.find('}') {
            Some(close) => {
                let token = &after[1..close];
                match fields.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => {
                        out.push_str(value);
                        rest = &after[close + 1..];
                    }
                    None => {
                        // Unknown token, emit the brace and keep scanning.
                        out.push('{');
                        rest = &after[1..];
                    }
                }
            }
            None => {
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    fn request() -> EditRequest {
        EditRequest::new(
            "rename the function",
            "fn old_name(",
            "fn new_name(",
            "search text not found",
            "fn old_name() {}\n",
        )
    }

    #[test]
    fn test_compose_fills_every_placeholder() {
        let prompt = compose(&request());
        assert_eq!(prompt.user.role, MessageRole::User);
        let text = &prompt.user.content;
        assert!(text.contains("rename the function"));
        assert!(text.contains("fn old_name("));
        assert!(text.contains("fn new_name("));
        assert!(text.contains("search text not found"));
        assert!(text.contains("fn old_name() {}\n"));
        assert!(!text.contains("{instruction}"));
        assert!(!text.contains("{current_content}"));
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        let mut req = request();
        req.original_text = "{error_message}".into();
        let prompt = compose(&req);
        // The value lands verbatim; it is not expanded into the error field.
        assert!(prompt.user.content.contains("{error_message}"));
        assert_eq!(
            prompt.user.content.matches("search text not found").count(),
            1
        );
    }

    #[test]
    fn test_render_leaves_unknown_tokens_alone() {
        let out = render("keep {this} but fill {x}", &[("x", "42")]);
        assert_eq!(out, "keep {this} but fill 42");
    }

    #[test]
    fn test_render_handles_unclosed_brace() {
        let out = render("trailing {x and {y}", &[("y", "ok")]);
        assert_eq!(out, "trailing {x and ok");
    }

    #[test]
    fn test_system_prompt_is_fixed() {
        let a = compose(&request());
        let b = compose(&request());
        assert_eq!(a.system, SYSTEM_PROMPT);
        assert_eq!(a.system, b.system);
    }
}
