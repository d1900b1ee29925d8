use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Renders model output as HTML. Raw HTML inside the markdown is emitted as
/// escaped text. Links and images whose URL uses a scheme other than http,
/// https or mailto lose their tag and keep only their text.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    // One entry per open link/image: true when its tags were dropped.
    let mut dropped: Vec<bool> = Vec::new();

    let parser = Parser::new_ext(content, options).filter_map(move |event| {
        if let Some(url) = link_destination(&event) {
            let safe = is_safe_url(url);
            if !safe {
                tracing::warn!(url = %url, "Dropping link with disallowed scheme");
            }
            dropped.push(!safe);
            return safe.then_some(event);
        }

        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
            Event::End(TagEnd::Link | TagEnd::Image) => {
                if dropped.pop().unwrap_or(false) {
                    None
                } else {
                    Some(event)
                }
            }
            other => Some(other),
        }
    });

    let mut html_output = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

fn link_destination<'a>(event: &'a Event<'_>) -> Option<&'a str> {
    match event {
        Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) => {
            Some(&dest_url[..])
        }
        _ => None,
    }
}

/// Relative URLs and the http, https and mailto schemes. Browsers ignore
/// whitespace and control characters inside a scheme, so those are removed
/// before it is read.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match cleaned.find([':', '/', '?', '#']) {
        Some(idx) if cleaned[idx..].starts_with(':') => {
            let scheme = cleaned[..idx].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}
