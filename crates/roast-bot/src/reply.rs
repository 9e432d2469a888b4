//! Post-processing of model output before it is sent to the chat

/// Sent when the model answers with nothing.
pub const EMPTY_REPLY: &str = "What love? Ask me again, please.";

/// Longest reply body sent, in characters, before the ellipsis.
pub const REPLY_MAX_CHARS: usize = 3500;

const ELLIPSIS: char = '…';

/// Trim, substitute empty output, and cap the length at a word boundary.
pub fn finalize_reply(raw: &str) -> String {
    let reply = raw.trim();
    if reply.is_empty() {
        return EMPTY_REPLY.to_string();
    }
    if reply.chars().count() <= REPLY_MAX_CHARS {
        return reply.to_string();
    }

    let clipped: String = reply.chars().take(REPLY_MAX_CHARS).collect();
    let mut truncated = match clipped.rfind(' ') {
        Some(space) => clipped[..space].to_string(),
        None => clipped,
    };
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_replaced() {
        assert_eq!(finalize_reply(""), EMPTY_REPLY);
        assert_eq!(finalize_reply(" \n\t "), EMPTY_REPLY);
    }

    #[test]
    fn test_short_output_trimmed_only() {
        assert_eq!(finalize_reply("  hello there \n"), "hello there");
    }

    #[test]
    fn test_exact_limit_not_truncated() {
        let text = "a".repeat(REPLY_MAX_CHARS);
        assert_eq!(finalize_reply(&text), text);
    }

    #[test]
    fn test_long_output_cut_at_word_boundary() {
        let text = "lorem ipsum dolor ".repeat(223);
        let text = text.trim();
        assert!(text.chars().count() >= 4000);

        let reply = finalize_reply(text);

        assert!(reply.chars().count() <= REPLY_MAX_CHARS + 1);
        assert!(reply.ends_with(ELLIPSIS));
        let body = reply.trim_end_matches(ELLIPSIS);
        assert!(text.starts_with(body));
        assert_eq!(text[body.len()..].chars().next(), Some(' '));
        assert!(!body.ends_with(' '));
    }

    #[test]
    fn test_long_output_without_spaces_hard_cut() {
        let text = "x".repeat(4000);
        let reply = finalize_reply(&text);
        assert_eq!(reply.chars().count(), REPLY_MAX_CHARS + 1);
        assert!(reply.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_multibyte_output_cut_on_char_boundary() {
        let text = "ありがとう ".repeat(700);
        let reply = finalize_reply(&text);
        assert!(reply.chars().count() <= REPLY_MAX_CHARS + 1);
        assert!(reply.ends_with(ELLIPSIS));
    }
}
