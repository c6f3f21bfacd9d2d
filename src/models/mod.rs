pub mod posts;

pub use posts::{FrontMatter, PostAssets, PostMetadata, PostSummary};
