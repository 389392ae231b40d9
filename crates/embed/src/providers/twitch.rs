//! Twitch channel pages and `player.twitch.tv` embed URLs.
//!
//! Twitch's player refuses to load inside an iframe unless the embedding
//! page's hostname is passed as the `parent` query parameter, so both rewrite
//! forms need the deployment's parent host from the context.

use crate::resolver::EmbedContext;
use crate::util::{after, until};

pub(crate) fn matches_channel(url: &str) -> bool {
    url.contains("twitch.tv/") && !is_player_embed(url)
}

pub(crate) fn is_player_embed(url: &str) -> bool {
    url.contains("player.twitch.tv")
}

pub(crate) fn rewrite_channel(url: &str, ctx: &EmbedContext) -> Option<String> {
    // Channel name is the first path segment: strip the query, then any
    // trailing path ("/videos", "/about", ...).
    let channel = after(url, "twitch.tv/").map(|rest| until(until(rest, '?'), '/'))?;
    Some(format!(
        "https://player.twitch.tv/?channel={channel}&parent={parent}&autoplay=true&muted=false",
        parent = ctx.parent_host
    ))
}

pub(crate) fn rewrite_player_embed(url: &str, ctx: &EmbedContext) -> Option<String> {
    if url.contains("parent=") {
        // Already a complete embed URL; leave it alone.
        return None;
    }
    let sep = if url.contains('?') { '&' } else { '?' };
    Some(format!(
        "{url}{sep}parent={parent}&autoplay=true&muted=false",
        parent = ctx.parent_host
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EmbedContext {
        EmbedContext::new("example.com")
    }

    #[test]
    fn channel_url_becomes_player_embed() {
        let out = rewrite_channel("https://twitch.tv/somechannel", &ctx()).unwrap();
        assert_eq!(
            out,
            "https://player.twitch.tv/?channel=somechannel&parent=example.com&autoplay=true&muted=false"
        );
    }

    #[test]
    fn channel_name_stops_at_query_or_path() {
        let out = rewrite_channel("https://www.twitch.tv/somechannel/videos?filter=all", &ctx())
            .unwrap();
        assert!(out.contains("channel=somechannel&"));
    }

    #[test]
    fn channel_predicate_excludes_player_urls() {
        assert!(matches_channel("https://twitch.tv/foo"));
        assert!(!matches_channel("https://player.twitch.tv/?channel=foo"));
    }

    #[test]
    fn player_url_without_parent_gets_one_appended() {
        let out = rewrite_player_embed("https://player.twitch.tv/?channel=foo", &ctx()).unwrap();
        assert_eq!(
            out,
            "https://player.twitch.tv/?channel=foo&parent=example.com&autoplay=true&muted=false"
        );
    }

    #[test]
    fn player_url_without_query_uses_question_mark() {
        let out = rewrite_player_embed("https://player.twitch.tv", &ctx()).unwrap();
        assert_eq!(
            out,
            "https://player.twitch.tv?parent=example.com&autoplay=true&muted=false"
        );
    }

    #[test]
    fn player_url_with_parent_passes_through() {
        let url = "https://player.twitch.tv/?channel=foo&parent=example.com";
        assert_eq!(rewrite_player_embed(url, &ctx()), None);
    }
}
