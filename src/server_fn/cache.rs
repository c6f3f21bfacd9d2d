use crate::models::posts::PostSummary;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub static POSTS_CACHE: Lazy<Mutex<(Option<Vec<PostSummary>>, Instant)>> =
    Lazy::new(|| Mutex::new((None, Instant::now())));
pub const CACHE_DURATION: Duration = Duration::from_secs(300);
