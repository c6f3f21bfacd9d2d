use serde::{Deserialize, Serialize};

/// One blog post as described by the content pipeline's manifest.
///
/// The record is read-only input: the card components never mutate it, they
/// only pick fields out of it for display.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PostSummary {
    pub metadata: PostMetadata,
    #[serde(default)]
    pub assets: PostAssets,
    #[serde(rename = "frontMatter")]
    pub front_matter: FrontMatter,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PostMetadata {
    /// Route of the full post, used as the card's link target.
    pub permalink: String,
    /// Used as the link tooltip, not the visible heading.
    pub title: String,
    /// Raw publish date string, parsed lazily at render time.
    pub date: String,
}

/// Assets resolved by the pipeline. The whole object may be missing from a
/// manifest entry, in which case every asset is absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PostAssets {
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FrontMatter {
    pub image: String,
    pub title: String,
    pub author: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_manifest_entry() {
        let raw = r#"{
            "metadata": {"permalink": "/p/1", "title": "T", "date": "2021-01-02"},
            "assets": {},
            "frontMatter": {"image": "/img.png", "title": "Hello", "author": "Jane", "description": "World"}
        }"#;

        let post: PostSummary = serde_json::from_str(raw).expect("entry should deserialize");
        assert_eq!(post.metadata.permalink, "/p/1");
        assert_eq!(post.metadata.title, "T");
        assert_eq!(post.metadata.date, "2021-01-02");
        assert_eq!(post.assets.image, None);
        assert_eq!(post.front_matter.image, "/img.png");
        assert_eq!(post.front_matter.title, "Hello");
        assert_eq!(post.front_matter.author, "Jane");
        assert_eq!(post.front_matter.description, "World");
    }

    #[test]
    fn missing_assets_object_defaults_to_empty() {
        let raw = r#"{
            "metadata": {"permalink": "/p/2", "title": "T2", "date": "2020-06-01"},
            "frontMatter": {"image": "/fallback.png", "title": "Second", "author": "Ann", "description": "More"}
        }"#;

        let post: PostSummary = serde_json::from_str(raw).expect("entry should deserialize");
        assert_eq!(post.assets, PostAssets::default());
    }
}
