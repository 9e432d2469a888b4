//! Builds the completion prompt for a direct-address message

/// Cap on the user's question, in characters.
pub const PROMPT_TEXT_MAX_CHARS: usize = 800;

/// Context lines included in the prompt.
pub const PROMPT_CONTEXT_LINES: usize = 2;

/// Remove every `@handle` mention, ignoring ASCII case.
///
/// Telegram handles are ASCII, so matching on an ASCII-lowercased copy keeps
/// byte offsets aligned with the original text.
pub fn strip_mention(text: &str, handle: &str) -> String {
    if handle.is_empty() {
        return text.to_string();
    }

    let needle = format!("@{handle}").to_ascii_lowercase();
    let haystack = text.to_ascii_lowercase();
    let mut cleaned = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = haystack[cursor..].find(&needle) {
        let start = cursor + offset;
        cleaned.push_str(&text[cursor..start]);
        cursor = start + needle.len();
    }
    cleaned.push_str(&text[cursor..]);
    cleaned
}

/// Mention stripped, trimmed, and capped at [`PROMPT_TEXT_MAX_CHARS`].
pub fn clean_user_text(text: &str, handle: &str) -> String {
    strip_mention(text, handle)
        .trim()
        .chars()
        .take(PROMPT_TEXT_MAX_CHARS)
        .collect()
}

/// Render the prompt from the user's text and recent chat context.
///
/// Only the last [`PROMPT_CONTEXT_LINES`] entries of `context` are used.
pub fn build_prompt(user_text: &str, context: &[String], handle: &str) -> String {
    let cleaned = clean_user_text(user_text, handle);
    let skip = context.len().saturating_sub(PROMPT_CONTEXT_LINES);
    let context_block = context[skip..]
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a bot in a telegram groupchat. Reply in 1-4 sentences and be helpful and clear\n\
         \n\
         Recent chat context:\n\
         {context_block}\n\
         \n\
         The user is addressing you directly and asked:\n\
         {cleaned}\n\
         \n\
         Reply:"
    )
}
