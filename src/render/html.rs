//! HTML building blocks shared by all dashboard pages.

use crate::models::{SummaryCard, Tone};

pub const BLUE: &str = "#1f4e79";
pub const LIGHT_BLUE: &str = "#60a5fa";
pub const GREEN: &str = "#059669";
pub const YELLOW: &str = "#d97706";
pub const RED: &str = "#dc2626";
pub const GRAY: &str = "#64748b";

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => GREEN,
        Tone::Warning => YELLOW,
        Tone::Critical => RED,
        Tone::Neutral => BLUE,
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "good",
        Tone::Warning => "warning",
        Tone::Critical => "critical",
        Tone::Neutral => "info",
    }
}

pub fn card(card: &SummaryCard) -> String {
    let color = tone_color(card.tone);
    format!(
        r#"<div class="card" style="border-left-color: {color};">
  <h4>{title}</h4>
  <h2 style="color: {color};">{value}</h2>
  <p>{caption}</p>
</div>"#,
        color = color,
        title = escape(&card.title),
        value = escape(&card.value),
        caption = escape(&card.caption),
    )
}

/// Coloured notice box. `body_html` is inserted as is.
pub fn notice(tone: Tone, title: &str, body_html: &str) -> String {
    format!(
        r#"<div class="notice {class}"><strong>{title}</strong>{body}</div>"#,
        class = tone_class(tone),
        title = escape(title),
        body = body_html,
    )
}

pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        html.push_str("<li>");
        html.push_str(&escape(item.as_ref()));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

/// Plain text table; every cell is escaped.
pub fn table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut html = String::from(r#"<table class="data"><thead><tr>"#);
    for header in headers {
        html.push_str("<th>");
        html.push_str(&escape(header));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape(cell.as_ref()));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Side-by-side columns.
pub fn columns(parts: &[String]) -> String {
    let mut html = format!(
        r#"<div class="columns" style="grid-template-columns: repeat({}, 1fr);">"#,
        parts.len().max(1)
    );
    for part in parts {
        html.push_str("<div>");
        html.push_str(part);
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

pub const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0; color: #0f172a; background: #f8fafc; }
.shell { display: grid; grid-template-columns: 260px 1fr; min-height: 100vh; }
nav.side { background: #eef2f7; padding: 1.5rem; font-size: 0.9rem; }
nav.side a { display: block; padding: 0.35rem 0.5rem; border-radius: 6px; color: #1f4e79; text-decoration: none; }
nav.side a.active { background: #1f4e79; color: white; }
main { padding: 2rem; }
.banner { background: linear-gradient(135deg, #1f4e79, #60a5fa); color: white; padding: 2rem; border-radius: 15px; margin-bottom: 2rem; text-align: center; }
.columns { display: grid; gap: 1rem; margin: 1rem 0; }
.card { background: white; padding: 1.5rem; border-radius: 10px; border-left: 5px solid; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.notice { padding: 1rem; border-radius: 8px; margin: 0.75rem 0; }
.notice.good { background: #ecfdf5; border: 1px solid #059669; }
.notice.warning { background: #fffbeb; border: 1px solid #d97706; }
.notice.critical { background: #fef2f2; border: 1px solid #dc2626; }
.notice.info { background: #eff6ff; border: 1px solid #60a5fa; }
.notice ul { margin: 0.5rem 0 0 0; }
table.data { border-collapse: collapse; width: 100%; background: white; margin: 0.5rem 0 1rem 0; }
table.data th, table.data td { border: 1px solid #e2e8f0; padding: 0.4rem 0.6rem; text-align: left; }
table.data th { background: #f1f5f9; }
.metric { background: white; padding: 1rem; border-radius: 8px; }
.metric .value { font-size: 1.6rem; font-weight: 600; }
hr { border: none; border-top: 1px solid #e2e8f0; margin: 2rem 0; }
"#;
