/// Characters of extracted text embedded in the prompt. Anything past this is
/// dropped without chunking.
pub const MAX_PROMPT_CHARS: usize = 15_000;

const ANALYSIS_INSTRUCTIONS: &str = "Analyze this research text and provide:
1. CORE IDEAS: Main findings/arguments.
2. NEW SUGGESTIONS: 3 innovative future directions.
3. SUMMARY: A high-quality resume paragraph.

TEXT: ";

/// Returns the first `max_chars` characters of `text`. Cuts land on char
/// boundaries, never inside a multi-byte sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn build_analysis_prompt(text: &str) -> String {
    let excerpt = truncate_chars(text, MAX_PROMPT_CHARS);
    let mut prompt = String::with_capacity(ANALYSIS_INSTRUCTIONS.len() + excerpt.len());
    prompt.push_str(ANALYSIS_INSTRUCTIONS);
    prompt.push_str(excerpt);
    prompt
}
