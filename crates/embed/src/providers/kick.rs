//! Kick channel pages.

use crate::resolver::EmbedContext;
use crate::util::{after, until};

pub(crate) fn matches(url: &str) -> bool {
    url.contains("kick.com/")
}

pub(crate) fn rewrite(url: &str, _ctx: &EmbedContext) -> Option<String> {
    let channel = after(url, "kick.com/").map(|rest| until(until(rest, '?'), '/'))?;
    Some(format!(
        "https://player.kick.com/{channel}?autoplay=true&muted=false&quality=auto"
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
        let out = rewrite("https://kick.com/somechannel", &ctx()).unwrap();
        assert_eq!(
            out,
            "https://player.kick.com/somechannel?autoplay=true&muted=false&quality=auto"
        );
    }

    #[test]
    fn channel_name_stops_at_query_or_path() {
        let out = rewrite("https://kick.com/somechannel/videos?sort=new", &ctx()).unwrap();
        assert!(out.starts_with("https://player.kick.com/somechannel?"));
    }
}
