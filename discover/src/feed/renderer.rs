//! Feed renderer
//!
//! Projects discovery items into display rows and renders the discover page
//! as HTML. Rows keep the server's order; nothing is sorted, filtered or
//! deduplicated.

use chrono::{DateTime, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::time_ago::time_ago_str;
use crate::domain::entities::DiscoveryItem;

/// Thumbnail shown for items without an image
pub const FALLBACK_ICON_URL: &str = "https://icon.now.sh/library_books/ccc/64";

/// Heading of the empty discover page
pub const EMPTY_HEADING: &str = "No discoveries...";

/// One rendered entry of the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    /// The item's path, unique within the feed
    pub key: String,
    pub thumbnail_url: String,
    pub thumbnail_alt: String,
    /// Link to the per-document view
    pub href: String,
    pub title: String,
    /// Timestamp as sent by the API
    pub last_modified_raw: String,
    /// Relative display of `last_modified_raw`
    pub last_modified: String,
    /// Author names joined by ", ", whenever the authors list is present
    pub authors: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
}

impl FeedRow {
    pub fn from_item(item: &DiscoveryItem, now: DateTime<Utc>) -> Self {
        let thumbnail_url = if item.image.is_empty() {
            FALLBACK_ICON_URL.to_string()
        } else {
            item.image.clone()
        };

        let title = item
            .metadata
            .title()
            .unwrap_or(item.name.as_str())
            .to_string();

        let last_modified = time_ago_str(&item.last_modified, now)
            .unwrap_or_else(|| item.last_modified.clone());

        Self {
            key: item.path.clone(),
            thumbnail_url,
            thumbnail_alt: format!("preview for {}", item.path),
            href: view_href(&item.path),
            title,
            last_modified_raw: item.last_modified.clone(),
            last_modified,
            authors: item.metadata.author_names().map(|names| names.join(", ")),
            description: item.metadata.nteract.description.clone(),
            tags: item.metadata.nteract.tags.clone(),
        }
    }
}

/// The two terminal states of the discover page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    Empty,
    Populated(Vec<FeedRow>),
}

impl FeedView {
    pub fn from_items(items: &[DiscoveryItem], now: DateTime<Utc>) -> Self {
        if items.is_empty() {
            FeedView::Empty
        } else {
            FeedView::Populated(items.iter().map(|i| FeedRow::from_item(i, now)).collect())
        }
    }

    pub fn rows(&self) -> &[FeedRow] {
        match self {
            FeedView::Empty => &[],
            FeedView::Populated(rows) => rows,
        }
    }
}

/// Link to the document view, one percent-encoded segment per path component
pub fn view_href(path: &str) -> String {
    let encoded = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("/view/{}", encoded)
}

/// Render the full discover page
pub fn render_page(view: &FeedView) -> String {
    let body = match view {
        FeedView::Empty => html! {
            (render_header(None))
            main class="body" {
                h1 { (EMPTY_HEADING) }
            }
        },
        FeedView::Populated(_) => html! {
            (render_header(Some("discover")))
            main class="body" {
                div class="discoveries" {
                    @for row in view.rows() {
                        (render_row(row))
                    }
                }
            }
        },
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Discover - commuter" }
                style { (PreEscaped(CSS)) }
            }
            body { (body) }
        }
    }
    .into_string()
}

fn render_header(active: Option<&str>) -> Markup {
    let nav_class = |name: &str| {
        if active == Some(name) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    html! {
        header class="header" {
            a class="brand" href="/" { "commuter" }
            nav {
                a class=(nav_class("view")) href="/view/" { "view" }
                a class=(nav_class("discover")) href="/discover" { "discover" }
            }
        }
    }
}

fn render_row(row: &FeedRow) -> Markup {
    html! {
        div class="post" data-path=(row.key) {
            div class="post-thumb" {
                img alt=(row.thumbnail_alt) src=(row.thumbnail_url) height="64";
            }
            div class="post-summary" {
                h3 class="post-title" {
                    a href=(row.href) { (row.title) }
                }
                div class="post-metadata" {
                    span {
                        "Last modified "
                        time datetime=(row.last_modified_raw) { (row.last_modified) }
                    }
                    " "
                    @if let Some(authors) = &row.authors {
                        span {
                            "by "
                            span class="authors" { (authors) }
                        }
                    }
                }
                div class="post-description" {
                    p { (row.description) }
                }
                div class="post-tags" {
                    @for tag in &row.tags {
                        span class="tag" { (tag) }
                    }
                }
            }
        }
    }
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; margin: 0; }
.header { display: flex; align-items: center; padding: 0 1rem; height: 50px; background: #2a2a2a; }
.header a { color: #ddd; text-decoration: none; margin-right: 1rem; }
.header .brand { font-weight: 600; color: #fff; }
.header .active { color: #fff; border-bottom: 2px solid #fff; }
.body { padding: 0 1rem; }
.discoveries { margin: 1rem 1rem 0 1rem; }
.discoveries > * { display: block; }
.post { display: flex; flex-direction: row; border-bottom: 1px #e1e4e8 solid; padding: 24px 0; }
.post-summary { margin-left: 2rem; }
.post-title { font-size: 20px; font-weight: 600; margin: 0 0 4px 0; }
.post-title a { color: #0366d6; text-decoration: none; }
.post-metadata { font-style: italic; }
.post-metadata, .post-description { color: #586069; }
.post-tags { margin-top: 0.5rem; }
.tag { display: inline-block; padding: 0.2em 0.9em; margin: 0 0.5em 0.5em 0; white-space: nowrap; background-color: #f1f8ff; border-radius: 3px; color: #0366d6; }
.tag:hover { background-color: #ddeeff; }
"#;
