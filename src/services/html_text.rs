use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT_REGEX is a valid regex pattern"));

static SCRIPT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?(?:</script\s*>|\z)")
        .expect("SCRIPT_REGEX is a valid regex pattern")
});

static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?(?:</style\s*>|\z)")
        .expect("STYLE_REGEX is a valid regex pattern")
});

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[A-Za-z!/?][^>]*>").expect("TAG_REGEX is a valid regex pattern")
});

static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z]{2,8});")
        .expect("ENTITY_REGEX is a valid regex pattern")
});

/// Flattens an HTML document into its visible text.
///
/// Script, style and comment content is dropped. Every remaining text node is
/// entity-decoded and trimmed; empty nodes are skipped and the rest are joined
/// with newlines in document order. Structure such as tables or headings is
/// not preserved.
pub fn extract_visible_text(html: &str) -> String {
    let without_comments = COMMENT_REGEX.replace_all(html, "");
    let without_scripts = SCRIPT_REGEX.replace_all(&without_comments, "");
    let without_styles = STYLE_REGEX.replace_all(&without_scripts, "");

    TAG_REGEX
        .split(&without_styles)
        .map(decode_entities)
        .map(|node| node.trim().to_string())
        .filter(|node| !node.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes numeric references and the common named entities. Unknown names
/// are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let body = &caps[1];
            decode_entity(body).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(body: &str) -> Option<String> {
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from);
    }
    if let Some(dec) = body.strip_prefix('#') {
        return dec.parse().ok().and_then(char::from_u32).map(String::from);
    }

    let decoded = match body {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        "hellip" => "…",
        "mdash" => "—",
        "ndash" => "–",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        "laquo" => "«",
        "raquo" => "»",
        "middot" => "·",
        "bull" => "•",
        "euro" => "€",
        "pound" => "£",
        _ => return None,
    };
    Some(decoded.to_string())
}
