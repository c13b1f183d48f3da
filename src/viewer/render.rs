//! Markup rendering for the list and detail regions

use crate::content::Post;
use crate::helpers::{display_date, html_escape};

/// Render one summary card.
///
/// The `data-slug` attribute is the join key back to the record; event
/// handling resolves cards through it, never through list position.
pub fn render_card(post: &Post, active: bool) -> String {
    let title = html_escape(post.display_title());
    let class = if active { "news-card active" } else { "news-card" };

    let mut html = format!(
        r#"<article class="{}" role="button" tabindex="0" data-slug="{}" aria-label="Open news: {}">"#,
        class,
        html_escape(&post.slug),
        title
    );

    if let Some(src) = non_empty(&post.thumbnail) {
        html.push_str(&format!(r#"<img src="{}" alt="">"#, html_escape(src)));
    }

    html.push_str(r#"<div class="meta">"#);
    html.push_str(&format!(r#"<div class="title">{}</div>"#, title));
    if let Some(date) = non_empty(&post.date) {
        html.push_str(&format!(
            r#"<div class="date">{}</div>"#,
            html_escape(&display_date(date))
        ));
    }
    html.push_str("</div></article>");

    html
}

/// Render the full detail view of one record.
///
/// Absent fields become omitted sections, not empty placeholders.
pub fn render_detail(post: &Post, bullet_lists: bool) -> String {
    let mut html = format!("<h3>{}</h3>", html_escape(post.display_title()));

    if let Some(date) = non_empty(&post.date) {
        html.push_str(&format!(
            r#"<div class="date">{}</div>"#,
            html_escape(&display_date(date))
        ));
    }
    if let Some(summary) = non_empty(&post.summary) {
        html.push_str(&format!(
            r#"<p class="summary">{}</p>"#,
            html_escape(summary)
        ));
    }
    if let Some(body) = non_empty(&post.body) {
        html.push_str(&format!(
            r#"<div class="body">{}</div>"#,
            render_body(body, bullet_lists)
        ));
    }

    html
}

/// Render plain-text body content as HTML.
///
/// Blank lines separate paragraphs and internal newlines become `<br>`.
/// With `bullet_lists`, consecutive lines starting with `- ` group into
/// one `<ul>`. No other markup is interpreted.
pub fn render_body(text: &str, bullet_lists: bool) -> String {
    let text = text.replace("\r\n", "\n");
    let mut html = String::new();

    for block in text.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        render_block(block, bullet_lists, &mut html);
    }

    html
}

/// Render one blank-line-delimited block
fn render_block(block: &str, bullet_lists: bool, html: &mut String) {
    if !bullet_lists {
        push_paragraph(&block.lines().collect::<Vec<_>>(), html);
        return;
    }

    let mut paragraph: Vec<&str> = Vec::new();
    let mut items: Vec<&str> = Vec::new();

    for line in block.lines() {
        if let Some(item) = bullet_item(line) {
            flush_paragraph(&mut paragraph, html);
            items.push(item);
        } else {
            flush_list(&mut items, html);
            paragraph.push(line);
        }
    }

    flush_paragraph(&mut paragraph, html);
    flush_list(&mut items, html);
}

fn push_paragraph(lines: &[&str], html: &mut String) {
    html.push_str("<p>");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            html.push_str("<br>");
        }
        html.push_str(&html_escape(line.trim_end()));
    }
    html.push_str("</p>");
}

fn flush_paragraph(lines: &mut Vec<&str>, html: &mut String) {
    if !lines.is_empty() {
        push_paragraph(lines, html);
        lines.clear();
    }
}

fn flush_list(items: &mut Vec<&str>, html: &mut String) {
    if items.is_empty() {
        return;
    }
    html.push_str("<ul>");
    for item in items.iter() {
        html.push_str(&format!("<li>{}</li>", html_escape(item)));
    }
    html.push_str("</ul>");
    items.clear();
}

/// A bullet item is a line starting with a hyphen and a space
fn bullet_item(line: &str) -> Option<&str> {
    line.trim().strip_prefix("- ").map(str::trim)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
