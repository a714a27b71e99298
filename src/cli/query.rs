//! Query commands: `paginate`, `publish`, `links`.
//!
//! Each has a pure `describe_*` that builds the output lines, and a thin
//! `run_*` that prints them.

use crate::{
    config::{SiteConfig, cfg},
    site::PostSchedule,
    utils::date::DateTime,
};
use std::path::Path;

// ============================================================================
// paginate
// ============================================================================

pub fn describe_pagination(config: &SiteConfig, count: usize) -> Vec<String> {
    let index = config.index_range(count);
    let pagination = config.pagination(count);

    let mut lines = vec![
        format!("index: {} of {} posts", index.len(), count),
        format!(
            "pages: {} ({} per page)",
            pagination.total_pages(),
            pagination.per_page()
        ),
    ];
    for (i, range) in pagination.pages().enumerate() {
        let line = if range.is_empty() {
            format!("  page {}: no posts", i + 1)
        } else {
            format!("  page {}: posts {}-{}", i + 1, range.start + 1, range.end)
        };
        lines.push(line);
    }
    lines
}

pub fn run_paginate(count: usize) {
    for line in describe_pagination(&cfg(), count) {
        println!("{line}");
    }
}

// ============================================================================
// publish
// ============================================================================

pub fn describe_publish(
    config: &SiteConfig,
    post: &PostSchedule,
    now: &DateTime,
    dev: bool,
) -> String {
    if post.draft {
        return "draft: never listed".to_string();
    }

    let margin = i64::try_from(config.scheduled_post_margin).unwrap_or(i64::MAX);
    let visible_from =
        DateTime::from_unix_millis(post.published_at.unix_millis().saturating_sub(margin));

    if config.is_published(&post.published_at, now) {
        format!("published (listed since {})", visible_from.to_rfc3339())
    } else if config.is_visible(post, now, dev) {
        format!(
            "scheduled, shown in dev mode (listed from {})",
            visible_from.to_rfc3339()
        )
    } else {
        format!("scheduled (listed from {})", visible_from.to_rfc3339())
    }
}

pub fn run_publish(date: DateTime, now: Option<DateTime>, draft: bool, dev: bool) {
    let post = PostSchedule::new(date).draft(draft);
    let now = now.unwrap_or_else(DateTime::now);
    println!("{}", describe_publish(&cfg(), &post, &now, dev));
}

// ============================================================================
// links
// ============================================================================

pub fn describe_links(
    config: &SiteConfig,
    file_path: &str,
    slug: Option<&str>,
    og_image: Option<&str>,
    hide_edit: bool,
) -> Vec<String> {
    let slug = slug
        .map(str::to_string)
        .unwrap_or_else(|| slug_from_path(file_path));

    let edit = match config.edit_link(file_path, hide_edit) {
        Some(link) => format!("edit: {} -> {}", link.text, link.href),
        None => "edit: none".to_string(),
    };
    vec![edit, format!("og:image: {}", config.og_image_url(&slug, og_image))]
}

pub fn run_links(file_path: &str, slug: Option<&str>, og_image: Option<&str>, hide_edit: bool) {
    for line in describe_links(&cfg(), file_path, slug, og_image, hide_edit) {
        println!("{line}");
    }
}

/// `src/data/blog/Hello World.md` -> `hello-world`
fn slug_from_path(file_path: &str) -> String {
    let stem = Path::new(file_path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut slug = String::with_capacity(stem.len());
    for c in stem.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
