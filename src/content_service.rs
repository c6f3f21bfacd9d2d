#[cfg(feature = "ssr")]
pub mod server {
    use std::env;
    use std::fmt;
    use std::fs;
    use std::path::{Path, PathBuf};

    use leptos::prelude::ServerFnError;
    use log::{error, warn};

    use crate::components::blog_item::parse_post_date;
    use crate::models::posts::PostSummary;

    const DEFAULT_MANIFEST: &str = "content/posts.json";

    #[derive(Debug)]
    pub enum ContentError {
        ReadError(String),
        JsonParseError(String),
    }

    impl fmt::Display for ContentError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ContentError::ReadError(e) => write!(f, "manifest read error: {}", e),
                ContentError::JsonParseError(e) => write!(f, "JSON parse error: {}", e),
            }
        }
    }

    pub fn to_server_error(e: ContentError) -> ServerFnError {
        ServerFnError::ServerError(e.to_string())
    }

    /// Where the content pipeline drops its manifest. Overridable so a
    /// deployment can point at the generator's output directory.
    pub fn manifest_path() -> PathBuf {
        env::var("CONTENT_MANIFEST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MANIFEST))
    }

    pub fn load_post_summaries(path: &Path) -> Result<Vec<PostSummary>, ContentError> {
        let body = fs::read_to_string(path).map_err(|e| {
            error!("failed to read manifest {}: {}", path.display(), e);
            ContentError::ReadError(e.to_string())
        })?;

        parse_manifest(&body)
    }

    pub fn parse_manifest(body: &str) -> Result<Vec<PostSummary>, ContentError> {
        if body.trim().is_empty() {
            error!("empty content manifest");
            return Err(ContentError::JsonParseError("empty manifest".to_string()));
        }

        let mut posts: Vec<PostSummary> = serde_json::from_str(body).map_err(|e| {
            error!("manifest parse error: {}", e);
            ContentError::JsonParseError(format!("failed to parse manifest: {}", e))
        })?;

        for post in &posts {
            if parse_post_date(&post.metadata.date).is_err() {
                warn!(
                    "unparseable publish date {:?} for {}",
                    post.metadata.date, post.metadata.permalink
                );
            }
        }

        // newest first; entries whose date cannot be parsed sink to the end
        posts.sort_by(|a, b| {
            let a_date = parse_post_date(&a.metadata.date).ok();
            let b_date = parse_post_date(&b.metadata.date).ok();
            b_date.cmp(&a_date)
        });

        Ok(posts)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn entry(permalink: &str, date: &str) -> String {
            format!(
                r#"{{
                    "metadata": {{"permalink": "{permalink}", "title": "t", "date": "{date}"}},
                    "assets": {{}},
                    "frontMatter": {{"image": "/i.png", "title": "t", "author": "a", "description": "d"}}
                }}"#
            )
        }

        #[test]
        fn orders_newest_first() {
            let body = format!(
                "[{},{},{}]",
                entry("/old", "2019-03-01"),
                entry("/new", "2022-11-30"),
                entry("/mid", "2021-01-02"),
            );

            let posts = parse_manifest(&body).expect("manifest should parse");
            let permalinks: Vec<&str> = posts.iter().map(|p| p.metadata.permalink.as_str()).collect();
            assert_eq!(permalinks, vec!["/new", "/mid", "/old"]);
        }

        #[test]
        fn unparseable_dates_sink_to_the_end() {
            let body = format!(
                "[{},{},{}]",
                entry("/mystery", "someday"),
                entry("/new", "2022-11-30"),
                entry("/old", "2019-03-01"),
            );

            let posts = parse_manifest(&body).expect("manifest should parse");
            assert_eq!(posts.last().unwrap().metadata.permalink, "/mystery");
        }

        #[test]
        fn rejects_empty_manifest() {
            match parse_manifest("   \n") {
                Err(ContentError::JsonParseError(_)) => (),
                other => panic!("expected JsonParseError, got {:?}", other),
            }
        }

        #[test]
        fn rejects_malformed_manifest() {
            match parse_manifest("{not json") {
                Err(ContentError::JsonParseError(_)) => (),
                other => panic!("expected JsonParseError, got {:?}", other),
            }
        }

        #[test]
        fn missing_manifest_is_a_read_error() {
            let path = Path::new("content/definitely-not-here.json");
            match load_post_summaries(path) {
                Err(ContentError::ReadError(_)) => (),
                other => panic!("expected ReadError, got {:?}", other),
            }
        }
    }
}
