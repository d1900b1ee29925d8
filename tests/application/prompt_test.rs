use scholia::application::services::{MAX_PROMPT_CHARS, build_analysis_prompt, truncate_chars};

#[test]
fn given_limit_constant_when_read_then_is_fifteen_thousand() {
    assert_eq!(MAX_PROMPT_CHARS, 15_000);
}

#[test]
fn given_text_of_exactly_limit_when_building_prompt_then_passes_unmodified() {
    let text = "x".repeat(MAX_PROMPT_CHARS);

    let prompt = build_analysis_prompt(&text);

    assert!(prompt.ends_with(&format!("TEXT: {text}")));
}

#[test]
fn given_text_one_over_limit_when_building_prompt_then_drops_last_char_only() {
    let mut text = "x".repeat(MAX_PROMPT_CHARS);
    text.push('!');

    let prompt = build_analysis_prompt(&text);

    assert!(prompt.ends_with(&format!("TEXT: {}", "x".repeat(MAX_PROMPT_CHARS))));
    assert!(!prompt.contains('!'));
}

#[test]
fn given_multibyte_text_over_limit_when_truncating_then_counts_characters() {
    let text = "é".repeat(MAX_PROMPT_CHARS + 10);

    let truncated = truncate_chars(&text, MAX_PROMPT_CHARS);

    assert_eq!(truncated.chars().count(), MAX_PROMPT_CHARS);
    assert_eq!(truncated.len(), MAX_PROMPT_CHARS * 2);
}

#[test]
fn given_text_with_layout_when_building_prompt_then_keeps_it_verbatim() {
    let text = "  Line one\n\n\tline-\ntwo  ";

    let prompt = build_analysis_prompt(text);

    assert!(prompt.ends_with(text));
}

#[test]
fn given_any_text_when_building_prompt_then_requests_three_sections() {
    let prompt = build_analysis_prompt("");

    assert!(prompt.contains("1. CORE IDEAS: Main findings/arguments."));
    assert!(prompt.contains("2. NEW SUGGESTIONS: 3 innovative future directions."));
    assert!(prompt.contains("3. SUMMARY: A high-quality resume paragraph."));
    assert!(prompt.ends_with("TEXT: "));
}
