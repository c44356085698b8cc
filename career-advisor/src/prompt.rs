const PROMPT_PREAMBLE: &str =
    "You are an expert career advisor. Provide detailed, professional advice for the following query:";

const PROMPT_OUTLINE: &str = r#"Your response should include:
1. Specific suggestions.
2. Practical steps.
3. Additional tips or resources if applicable.

Answer:"#;

pub fn advice_prompt(question: &str) -> String {
    format!("{}\n\n'{}'\n\n{}", PROMPT_PREAMBLE, question, PROMPT_OUTLINE)
}

/// Some backends echo the prompt in front of the continuation.
pub(crate) fn strip_prompt<'a>(generated: &'a str, prompt: &str) -> &'a str {
    let generated = generated.trim_start();
    generated
        .strip_prefix(prompt.trim_start())
        .unwrap_or(generated)
        .trim()
}
