//! Task and Category Renderer
//!
//! Builds the HTML fragments for the task list and the category panel.
//! Every user-supplied string goes through `escape_html` before it lands in
//! markup, attribute values included. Controls carry `data-action` /
//! `data-id` so one delegated listener on the container can dispatch them.

use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::filter::Filter;
use crate::models::{Priority, Task};

/// Escape text for use in element content and quoted attribute values
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

/// Format a service timestamp as `Mar 5, 2024`.
///
/// Zoned timestamps are shown in the browser's local time; naive ones are
/// taken as-is.
pub fn format_created_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Heading over the list, e.g. `Pending Tasks (Search: "milk") (2)`
pub fn tasks_heading(filter: Filter, search: &str, count: usize) -> String {
    let mut title = filter.heading().to_string();
    if !search.is_empty() {
        title.push_str(&format!(" (Search: \"{}\")", search));
    }
    format!("{} ({})", title, count)
}

/// One card per task
pub fn render_task_card(task: &Task) -> String {
    let priority = Priority::from_level(task.priority);
    let completed_class = if task.completed { " completed" } else { "" };
    let checked = if task.completed { " checked" } else { "" };
    let id = task.id;

    let mut html = String::new();
    html.push_str(&format!(
        r#"<div class="task-item{completed_class} {priority_class}" data-id="{id}">"#,
        priority_class = priority.css_class(),
    ));
    html.push_str(&format!(
        r#"<input type="checkbox" class="task-checkbox" data-action="toggle" data-id="{id}"{checked}>"#
    ));
    html.push_str(r#"<div class="task-content">"#);
    html.push_str(&format!(
        r#"<div class="task-title{completed_class}">{} <span class="task-category">{}</span></div>"#,
        escape_html(&task.title),
        escape_html(&task.category),
    ));
    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!(r#"<div class="task-description">{}</div>"#, escape_html(description)));
    }
    html.push_str(r#"<div class="task-meta">"#);
    html.push_str(&format!(
        r#"<span class="task-priority"><i class="fas fa-flag"></i> {}</span>"#,
        priority.label(),
    ));
    html.push_str(&format!(
        r#"<span class="task-date"><i class="far fa-calendar"></i> {}</span>"#,
        escape_html(&format_created_date(&task.created_at)),
    ));
    html.push_str("</div></div>");
    html.push_str(r#"<div class="task-actions">"#);
    html.push_str(&format!(
        r#"<button type="button" class="action-btn edit-btn" data-action="edit" data-id="{id}" title="Edit"><i class="fas fa-edit"></i></button>"#
    ));
    html.push_str(&format!(
        r#"<button type="button" class="action-btn delete-btn" data-action="delete" data-id="{id}" title="Delete"><i class="fas fa-trash"></i></button>"#
    ));
    html.push_str("</div></div>");
    html
}

pub fn render_task_list(tasks: &[Task]) -> String {
    tasks.iter().map(render_task_card).collect()
}

/// Tasks per category over the full (unfiltered) list
pub fn category_counts(tasks: &[Task]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for task in tasks {
        *counts.entry(task.category.as_str()).or_insert(0) += 1;
    }
    counts
}

pub fn render_category_list(categories: &[String], tasks: &[Task]) -> String {
    if categories.is_empty() {
        return "<p>No categories yet</p>".to_string();
    }
    let counts = category_counts(tasks);
    let mut html = String::new();
    for category in categories {
        let escaped = escape_html(category);
        let count = counts.get(category.as_str()).copied().unwrap_or(0);
        html.push_str(&format!(
            r#"<div class="category-item" data-category="{escaped}"><span>{escaped}</span><span class="category-count">{count}</span></div>"#
        ));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str, category: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            category: category.to_string(),
            priority: 2,
            completed: false,
            created_at: "2024-03-05T10:30:00".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>alert('x')</script>"), "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
        assert_eq!(escape_html(r#"a & "b""#), "a &amp; &quot;b&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_script_title_renders_as_text() {
        let mut task = make_task(1, "<script>", "<b>cat</b>");
        task.description = Some("<img src=x onerror=alert(1)>".to_string());
        let html = render_task_card(&task);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;cat&lt;/b&gt;"));
    }

    #[test]
    fn test_card_contents() {
        let mut task = make_task(9, "Buy Milk", "home");
        task.priority = 1;
        task.completed = true;
        task.description = Some("2 litres".to_string());
        let html = render_task_card(&task);
        assert!(html.contains(r#"class="task-item completed high-priority""#));
        assert!(html.contains(r#"data-action="toggle" data-id="9" checked>"#));
        assert!(html.contains(r#"<div class="task-description">2 litres</div>"#));
        assert!(html.contains("</i> High</span>"));
        assert!(html.contains("Mar 5, 2024"));
        assert!(html.contains(r#"data-action="edit" data-id="9""#));
        assert!(html.contains(r#"data-action="delete" data-id="9""#));
    }

    #[test]
    fn test_card_without_description_or_completion() {
        let mut task = make_task(2, "Call mom", "family");
        task.description = Some(String::new());
        task.priority = 5;
        let html = render_task_card(&task);
        assert!(!html.contains("task-description"));
        assert!(!html.contains(" checked"));
        assert!(html.contains("low-priority"));
        assert!(html.contains("</i> Low</span>"));
    }

    #[test]
    fn test_format_created_date() {
        assert_eq!(format_created_date("2024-03-05T10:30:00"), "Mar 5, 2024");
        assert_eq!(format_created_date("2023-12-31T23:59:59.123456"), "Dec 31, 2023");
        assert_eq!(format_created_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_created_date("yesterday"), "Invalid Date");
    }

    #[test]
    fn test_tasks_heading() {
        assert_eq!(tasks_heading(Filter::All, "", 4), "All Tasks (4)");
        assert_eq!(tasks_heading(Filter::Pending, "milk", 1), "Pending Tasks (Search: \"milk\") (1)");
        assert_eq!(tasks_heading(Filter::Completed, "", 0), "Completed Tasks (0)");
    }

    #[test]
    fn test_category_counts_use_full_list() {
        let mut done = make_task(3, "Pay rent", "home");
        done.completed = true;
        let tasks = vec![make_task(1, "Buy Milk", "home"), make_task(2, "Report", "work"), done];
        let counts = category_counts(&tasks);
        assert_eq!(counts.get("home"), Some(&2));
        assert_eq!(counts.get("work"), Some(&1));

        let html = render_category_list(&["home".to_string(), "garden".to_string()], &tasks);
        assert!(html.contains(r#"<span>home</span><span class="category-count">2</span>"#));
        assert!(html.contains(r#"<span>garden</span><span class="category-count">0</span>"#));
    }

    #[test]
    fn test_category_list_escapes_and_placeholder() {
        assert_eq!(render_category_list(&[], &[]), "<p>No categories yet</p>");
        let html = render_category_list(&[r#"x" onclick="boom"#.to_string()], &[]);
        assert!(html.contains(r#"data-category="x&quot; onclick=&quot;boom""#));
    }

    #[test]
    fn test_render_task_list_preserves_order() {
        let tasks = vec![make_task(5, "First", "a"), make_task(2, "Second", "b")];
        let html = render_task_list(&tasks);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert_eq!(render_task_list(&[]), "");
    }
}
