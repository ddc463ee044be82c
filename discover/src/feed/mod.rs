//! Feed module
//!
//! Display projection and HTML rendering of the discovery feed.

pub mod renderer;
pub mod time_ago;

pub use renderer::{render_page, view_href, FeedRow, FeedView, EMPTY_HEADING, FALLBACK_ICON_URL};
pub use time_ago::{time_ago, time_ago_str};
