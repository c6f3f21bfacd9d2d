use chrono::{DateTime, NaiveDate};
use leptos::prelude::*;
use thiserror::Error;

use crate::models::posts::PostSummary;

#[derive(Clone, Debug, PartialEq, Error)]
#[error("unparseable post date: {0:?}")]
pub struct DateParseError(pub String);

/// Parses a manifest date string. The content pipeline emits either a plain
/// calendar date or a full RFC 3339 timestamp depending on the source.
pub fn parse_post_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DateParseError(raw.to_string()))
}

pub fn format_post_date(raw: &str) -> Result<String, DateParseError> {
    parse_post_date(raw).map(|date| date.format("%-m/%-d/%Y").to_string())
}

/// Render policy for the card: show the short date when it parses, otherwise
/// fall back to the raw string rather than an "Invalid Date" artifact.
fn display_post_date(raw: &str) -> String {
    match format_post_date(raw) {
        Ok(formatted) => formatted,
        Err(_) => raw.to_string(),
    }
}

/// First non-empty value among the pipeline-resolved cover and the
/// front-matter cover. A blank fallback is returned as-is; the card degrades
/// to a broken image rather than failing.
pub fn select_cover_image<'a>(primary: Option<&'a str>, fallback: &'a str) -> &'a str {
    match primary {
        Some(url) if !url.trim().is_empty() => url,
        _ => fallback,
    }
}

fn card_shell_class(focused: bool) -> String {
    let base = "transition-all duration-300 hover:shadow-2xl shadow bg-white dark:bg-gray-800 rounded-lg overflow-hidden";
    if focused {
        format!("{} focused", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn BlogItemCard(post: PostSummary) -> impl IntoView {
    let (focused, set_focused) = signal(false);

    let permalink = post.metadata.permalink.clone();
    let link_title = post.metadata.title.clone();
    let cover =
        select_cover_image(post.assets.image.as_deref(), &post.front_matter.image).to_string();
    let byline = format!(
        "{} by {}",
        display_post_date(&post.metadata.date),
        post.front_matter.author
    );
    let title = post.front_matter.title.clone();
    let description = post.front_matter.description.clone();

    view! {
        <div class="blog-item w-full md:w-1/2 lg:w-1/3 p-4">
            <div class=move || card_shell_class(focused.get())>
                <a
                    href=permalink
                    title=link_title
                    class="block no-underline text-gray-900 dark:text-gray-100"
                    on:focus=move |_: web_sys::FocusEvent| set_focused.set(true)
                    on:blur=move |_: web_sys::FocusEvent| set_focused.set(false)
                >
                    <div class="image">
                        <img src=cover alt="" class="w-full"/>
                    </div>
                    <div class="p-4 py-3">
                        <h4 class="text-3xl pt-1">{title}</h4>
                        <div class="flex items-center">
                            <CalendarIcon/>
                            <small class="pl-2 font-sans text-gray-600 dark:text-gray-400">{byline}</small>
                        </div>
                        <p class="pt-3">{description}</p>
                    </div>
                </a>
            </div>
        </div>
    }
}

#[component]
fn CalendarIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="stroke-current"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <rect x="3" y="4" width="18" height="18" rx="2" ry="2"></rect>
            <line x1="16" y1="2" x2="16" y2="6"></line>
            <line x1="8" y1="2" x2="8" y2="6"></line>
            <line x1="3" y1="10" x2="21" y2="10"></line>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_prefers_resolved_asset() {
        assert_eq!(
            select_cover_image(Some("/assets/cover.png"), "/img.png"),
            "/assets/cover.png"
        );
    }

    #[test]
    fn cover_falls_back_when_asset_missing() {
        assert_eq!(select_cover_image(None, "/img.png"), "/img.png");
    }

    #[test]
    fn cover_falls_back_when_asset_blank() {
        assert_eq!(select_cover_image(Some(""), "/img.png"), "/img.png");
        assert_eq!(select_cover_image(Some("   "), "/img.png"), "/img.png");
    }

    #[test]
    fn formats_plain_calendar_date() {
        assert_eq!(format_post_date("2021-01-02").unwrap(), "1/2/2021");
    }

    #[test]
    fn formats_rfc3339_timestamp() {
        assert_eq!(
            format_post_date("2021-01-02T10:30:00Z").unwrap(),
            "1/2/2021"
        );
    }

    #[test]
    fn rejects_garbage_date() {
        let err = format_post_date("next tuesday").unwrap_err();
        assert_eq!(err, DateParseError("next tuesday".to_string()));
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn display_date_degrades_to_raw_input() {
        assert_eq!(display_post_date("2021-01-02"), "1/2/2021");
        assert_eq!(display_post_date("not a date"), "not a date");
    }

    #[test]
    fn shell_class_tracks_focus_flag() {
        assert!(card_shell_class(true).contains("focused"));
        assert!(!card_shell_class(false).contains("focused"));
    }
}
