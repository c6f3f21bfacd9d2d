use leptos::prelude::*;

use crate::components::blog_item::BlogItemCard;
use crate::models::posts::PostSummary;

#[server(GetPostSummaries, "/api")]
pub async fn get_post_summaries() -> Result<Vec<PostSummary>, ServerFnError> {
    use crate::content_service::server::{load_post_summaries, manifest_path, to_server_error};
    use crate::server_fn::cache::{CACHE_DURATION, POSTS_CACHE};
    use log::info;
    use std::time::Instant;

    // serve from cache while it is fresh
    {
        let cached_data = POSTS_CACHE.lock().unwrap().clone();

        if let (Some(cached_posts), last_fetch) = cached_data {
            if last_fetch.elapsed() < CACHE_DURATION {
                info!("returning cached post summaries");
                return Ok(cached_posts);
            }
        }
    }

    let path = manifest_path();
    info!("loading post summaries from {}", path.display());

    let posts = load_post_summaries(&path).map_err(to_server_error)?;

    info!("loaded {} post summaries", posts.len());

    let mut cache = POSTS_CACHE.lock().unwrap();
    *cache = (Some(posts.clone()), Instant::now());

    Ok(posts)
}

#[component]
pub fn BlogList() -> impl IntoView {
    let summaries = Resource::new(|| (), |_| get_post_summaries());

    view! {
        <div class="pt-4 space-y-4">
            <Suspense fallback=|| {
                view! { <p class="text-center text-gray-500 dark:text-gray-400">"Loading..."</p> }
            }>
                {move || {
                    summaries.get().map(|result| {
                        match result {
                            Ok(posts) => {
                                if posts.is_empty() {
                                    view! {
                                        <div class="text-center text-gray-500 dark:text-gray-400">
                                            "No posts yet"
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="flex flex-wrap">
                                            <For
                                                each=move || posts.clone()
                                                key=|post| post.metadata.permalink.clone()
                                                children=move |post| view! { <BlogItemCard post=post/> }
                                            />
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => {
                                view! {
                                    <p class="text-center text-red-500">
                                        "Error loading posts: " {e.to_string()}
                                    </p>
                                }
                                    .into_any()
                            }
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
