pub mod cache;
pub mod invalidate_posts_cache;
