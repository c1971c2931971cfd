//! Placeholder substitution turning a pattern plus one record into final
//! text. Shared by every text sink so console and file lines agree on
//! layout.

use crate::record::Metadata;
use chrono::{DateTime, Local};

/// Millisecond token expanded after strftime, always exactly three digits.
const MS_TOKEN: &str = "#ms";

/// A user-supplied template evaluated once per record.
///
/// Tokens are replaced at their first occurrence only, in fixed priority
/// order; repeated tokens are not a supported use case, which keeps
/// substitution linear in the pattern length instead of requiring a
/// tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Raw pattern text, before any substitution.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expands the pattern for one record.
    ///
    /// Steps, in order: strftime expansion of the whole pattern when the
    /// record carries a timestamp (including the `#ms` token), then one
    /// replacement each for `#severity`, `#tag_func`, `#tag`, `#function`,
    /// and `#message`. `#tag_func` falls back from tag to call-site name to
    /// the literal `"log"`. Without a `#message` token the message is
    /// appended, separated by a single space unless the expanded pattern is
    /// empty or already ends in whitespace.
    #[must_use]
    pub fn render(&self, metadata: &Metadata, message: &str) -> String {
        let mut result = match metadata.timestamp() {
            Some(timestamp) => render_timestamp(timestamp, &self.text),
            None => self.text.clone(),
        };

        replace_first(&mut result, "#severity", metadata.severity().display_name());

        // `#tag` is a prefix of `#tag_func`, so `#tag_func` must go first.
        let tag_func = metadata
            .tag()
            .or_else(|| metadata.call_site().map(|site| site.name()))
            .unwrap_or("log");
        replace_first(&mut result, "#tag_func", tag_func);

        replace_first(&mut result, "#tag", metadata.tag().unwrap_or(""));
        replace_first(
            &mut result,
            "#function",
            metadata.call_site().map_or("", |site| site.name()),
        );

        if !replace_first(&mut result, "#message", message) {
            if !(result.is_empty() || result.ends_with(char::is_whitespace)) {
                result.push(' ');
            }
            result.push_str(message);
        }

        result
    }
}

impl Default for Pattern {
    /// Timestamp, bracketed severity, tag or function name, message
    /// appended.
    fn default() -> Self {
        Self::new("%Y-%m-%d %H-%M-%S.#ms [#severity] (#tag_func)")
    }
}

/// Replaces the first occurrence of `token`, reporting whether it was found.
fn replace_first(text: &mut String, token: &str, value: &str) -> bool {
    match text.find(token) {
        Some(pos) => {
            text.replace_range(pos..pos + token.len(), value);
            true
        }
        None => false,
    }
}

/// strftime expansion via chrono, then the first `#ms` becomes the
/// zero-padded millisecond component: `7` renders as `"007"`, never `"7"`.
#[must_use]
pub fn render_timestamp(timestamp: DateTime<Local>, format: &str) -> String {
    let mut rendered = timestamp.format(format).to_string();
    if let Some(pos) = rendered.find(MS_TOKEN) {
        let ms = format!("{:03}", timestamp.timestamp_subsec_millis() % 1000);
        rendered.replace_range(pos..pos + MS_TOKEN.len(), &ms);
    }
    rendered
}
