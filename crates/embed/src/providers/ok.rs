//! OK.ru video and live pages.

use crate::resolver::EmbedContext;
use crate::util::until;

pub(crate) fn matches(url: &str) -> bool {
    url.contains("ok.ru/video") || url.contains("ok.ru/live")
}

pub(crate) fn rewrite(url: &str, _ctx: &EmbedContext) -> Option<String> {
    // Video id is the last path segment, minus any query string.
    let id = until(url.rsplit('/').next().unwrap_or(""), '?');
    Some(format!("https://ok.ru/videoembed/{id}?autoplay=1"))
}
