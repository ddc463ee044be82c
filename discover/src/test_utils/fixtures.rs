//! Test fixtures
//!
//! Factory functions for creating discovery items with sensible defaults.
//! Each fixture creates a valid item that can be customized.

use crate::domain::entities::{Author, DiscoveryItem, ItemMetadata, NteractMetadata};

/// Create an item at `path` with no title, no authors and no image
pub fn test_item(path: &str) -> DiscoveryItem {
    let name = path.rsplit('/').next().unwrap_or(path).to_string();
    DiscoveryItem {
        path: path.to_string(),
        name,
        image: String::new(),
        last_modified: "2020-01-01T00:00:00Z".to_string(),
        metadata: ItemMetadata {
            title: None,
            authors: None,
            nteract: NteractMetadata {
                description: format!("About {}", path),
                tags: vec![],
            },
        },
    }
}

/// Create an item with every optional field filled in
pub fn test_item_full(path: &str, title: &str, authors: &[&str], tags: &[&str]) -> DiscoveryItem {
    let mut item = test_item(path);
    item.image = format!("https://img.example.com/{}.png", item.name);
    item.metadata.title = Some(title.to_string());
    item.metadata.authors = Some(
        authors
            .iter()
            .map(|name| Author {
                name: name.to_string(),
            })
            .collect(),
    );
    item.metadata.nteract.tags = tags.iter().map(|t| t.to_string()).collect();
    item
}
