use std::fmt::Write;

use crate::models::{
    domain::{EvaluationRun, Principle},
    dto::request::InputMode,
};

pub const PAGE_TITLE: &str = "AI Search Optimization Evaluator";

const STYLES: &str = "body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem;color:#1f2328}\
textarea{width:100%;font-family:monospace}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #d0d7de;padding:.4rem .6rem;text-align:left}\
.score{text-align:right;font-variant-numeric:tabular-nums}\
.explanation{white-space:pre-wrap;background:#f6f8fa;padding:.75rem;border-radius:6px}\
.notice{background:#fff8c5;padding:.5rem .75rem}\
.error{background:#ffebe9;padding:.5rem .75rem}";

/// Everything the page needs for one render.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub mode: InputMode,
    pub content: &'a str,
    pub url: &'a str,
    /// Text obtained from `url`, shown read-only before the results.
    pub scraped: Option<&'a str>,
    pub run: Option<&'a EvaluationRun>,
    pub notice: Option<String>,
    pub error: Option<String>,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_page(view: &PageView<'_>, principles: &[Principle]) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLES}</style></head><body>\
<h1>🤖 {title}</h1>\
<p>Evaluate your content's readiness for AI Overviews, ChatGPT Answers, Perplexity, and more, using a locally hosted model.</p>",
        title = PAGE_TITLE,
    );

    render_form(&mut html, view);

    if let Some(scraped) = view.scraped {
        let _ = write!(
            html,
            "<h3>Scraped Content:</h3><textarea rows=\"12\" readonly>{}</textarea>",
            escape_html(scraped)
        );
    }
    if let Some(notice) = &view.notice {
        let _ = write!(html, "<p class=\"notice\">{}</p>", escape_html(notice));
    }
    if let Some(error) = &view.error {
        let _ = write!(html, "<p class=\"error\">{}</p>", escape_html(error));
    }
    if let Some(run) = view.run {
        render_run(&mut html, run, principles);
    }

    html.push_str("</body></html>");
    html
}

fn render_form(html: &mut String, view: &PageView<'_>) {
    html.push_str("<form method=\"post\" action=\"/evaluate\"><fieldset><legend>Choose input type:</legend>");
    for mode in [InputMode::Text, InputMode::Url] {
        let value = match mode {
            InputMode::Text => "text",
            InputMode::Url => "url",
        };
        let checked = if mode == view.mode { " checked" } else { "" };
        let _ = write!(
            html,
            "<label><input type=\"radio\" name=\"mode\" value=\"{}\"{}> {}</label> ",
            value,
            checked,
            mode.label()
        );
    }
    let _ = write!(
        html,
        "</fieldset>\
<p><label>Paste your page content or HTML here:<br><textarea name=\"content\" rows=\"12\">{}</textarea></label></p>\
<p><label>Enter a URL to scrape:<br><input type=\"url\" name=\"url\" size=\"80\" value=\"{}\"></label></p>\
<p><button type=\"submit\">Run Local Evaluation</button></p></form>",
        escape_html(view.content),
        escape_html(view.url)
    );
}

fn render_run(html: &mut String, run: &EvaluationRun, principles: &[Principle]) {
    html.push_str(
        "<h2>📊 Evaluation Summary Table</h2><table><thead><tr><th>Principle</th><th>Description</th><th class=\"score\">Score</th></tr></thead><tbody>",
    );
    for result in &run.results {
        let description = principles
            .iter()
            .find(|p| p.title == result.principle_title)
            .map(|p| p.description)
            .unwrap_or_default();
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td class=\"score\">{}</td></tr>",
            escape_html(&result.principle_title),
            escape_html(description),
            result.score
        );
    }
    html.push_str("</tbody></table><h2>📝 Detailed Feedback</h2>");

    for result in &run.results {
        let _ = write!(
            html,
            "<section><h3>{}</h3><p><strong>Score:</strong> {}/10</p><div class=\"explanation\">{}</div><hr></section>",
            escape_html(&result.principle_title),
            result.score,
            escape_html(&result.explanation)
        );
    }

    let _ = write!(
        html,
        "<h3>✅ Overall Content Score: <strong>{}/10</strong></h3>",
        run.average_score_display()
    );
}
