//! Discovery domain entities
//!
//! A discovered notebook and the envelope one page load produces.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize null as default (empty string, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry in the discovery feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryItem {
    /// Addressable location of the source document, unique within a response
    pub path: String,
    /// Display name used when no title metadata exists
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    /// Thumbnail URL; empty means "use the fallback icon"
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image: String,
    /// Last modification time as sent by the API (ISO-8601)
    #[serde(
        alias = "lastModified",
        default,
        deserialize_with = "deserialize_null_default"
    )]
    pub last_modified: String,
    pub metadata: ItemMetadata,
}

/// Document-level descriptive fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Author>>,
    pub nteract: NteractMetadata,
}

impl ItemMetadata {
    /// Title metadata, ignoring an empty string
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Author names in order, or `None` when the list is absent
    ///
    /// A present but empty list yields `Some` with no names.
    pub fn author_names(&self) -> Option<Vec<&str>> {
        self.authors
            .as_ref()
            .map(|authors| authors.iter().map(|a| a.name.as_str()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
}

/// The `nteract` section of notebook metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NteractMetadata {
    pub description: String,
    pub tags: Vec<String>,
}

/// Result of one discovery load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryResponse {
    pub results: Vec<DiscoveryItem>,
    /// HTTP status returned by the discovery API, passed through unchanged
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl DiscoveryResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal_item() {
        let item: DiscoveryItem = serde_json::from_value(json!({
            "path": "a/b.ipynb",
            "name": "b.ipynb",
            "image": "",
            "last_modified": "2020-01-01T00:00:00Z",
            "metadata": { "nteract": { "description": "d", "tags": ["x", "y"] } }
        }))
        .unwrap();

        assert_eq!(item.path, "a/b.ipynb");
        assert_eq!(item.last_modified, "2020-01-01T00:00:00Z");
        assert!(item.metadata.title.is_none());
        assert!(item.metadata.authors.is_none());
        assert_eq!(item.metadata.nteract.tags, vec!["x", "y"]);
    }

    #[test]
    fn accepts_camel_case_last_modified() {
        let item: DiscoveryItem = serde_json::from_value(json!({
            "path": "n.ipynb",
            "name": "n.ipynb",
            "lastModified": "2021-06-01T12:00:00Z",
            "metadata": { "nteract": { "description": "", "tags": [] } }
        }))
        .unwrap();

        assert_eq!(item.last_modified, "2021-06-01T12:00:00Z");
    }

    #[test]
    fn null_image_decodes_as_empty() {
        let item: DiscoveryItem = serde_json::from_value(json!({
            "path": "n.ipynb",
            "name": "n.ipynb",
            "image": null,
            "last_modified": "2021-06-01T12:00:00Z",
            "metadata": { "nteract": { "description": "", "tags": [] } }
        }))
        .unwrap();

        assert_eq!(item.image, "");
    }

    #[test]
    fn missing_nteract_is_rejected() {
        let result: Result<DiscoveryItem, _> = serde_json::from_value(json!({
            "path": "n.ipynb",
            "name": "n.ipynb",
            "metadata": { "title": "Nope" }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn missing_path_is_rejected() {
        let result: Result<DiscoveryItem, _> = serde_json::from_value(json!({
            "name": "n.ipynb",
            "metadata": { "nteract": { "description": "", "tags": [] } }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn empty_title_counts_as_absent() {
        let metadata = ItemMetadata {
            title: Some(String::new()),
            authors: None,
            nteract: NteractMetadata {
                description: String::new(),
                tags: vec![],
            },
        };

        assert!(metadata.title().is_none());
        assert!(metadata.author_names().is_none());
    }

    #[test]
    fn empty_authors_list_is_still_present() {
        let metadata = ItemMetadata {
            title: None,
            authors: Some(vec![]),
            nteract: NteractMetadata {
                description: String::new(),
                tags: vec![],
            },
        };

        assert_eq!(metadata.author_names(), Some(vec![]));
    }

    #[test]
    fn author_without_name_decodes_as_empty() {
        let item: DiscoveryItem = serde_json::from_value(json!({
            "path": "n.ipynb",
            "name": "n.ipynb",
            "metadata": {
                "authors": [{ "name": "Ada" }, {}, { "name": null }],
                "nteract": { "description": "", "tags": [] }
            }
        }))
        .unwrap();

        assert_eq!(item.metadata.author_names(), Some(vec!["Ada", "", ""]));
    }

    #[test]
    fn response_serializes_status_code_in_camel_case() {
        let response = DiscoveryResponse {
            results: vec![],
            status_code: 200,
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "results": [], "statusCode": 200 }));
        assert!(response.is_success());
    }
}
