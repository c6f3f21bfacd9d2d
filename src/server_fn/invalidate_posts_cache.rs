use leptos::prelude::*;
use leptos::server_fn::codec::PostUrl;

#[server(
    name = InvalidatePostsCache,
    prefix = "/api",
    endpoint = "invalidate_posts_cache",
    input = PostUrl
)]
pub async fn invalidate_posts_cache() -> Result<(), ServerFnError> {
    use crate::server_fn::cache::POSTS_CACHE;

    let mut cache = POSTS_CACHE.lock().unwrap();
    *cache = (None, std::time::Instant::now());

    log::info!("post summaries cache invalidated");
    Ok(())
}
