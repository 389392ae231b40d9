//! Goodgame channel pages.
//!
//! Goodgame pages cannot be iframed directly, so the rewrite targets the
//! site's own proxy endpoint, which serves a minimal HTML page wrapping the
//! platform's JS player for the requested channel.

use std::sync::LazyLock;

use regex::Regex;

use crate::resolver::EmbedContext;
use crate::util::capture_group_1;

static CHANNEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"goodgame\.ru/([^/?]+)").unwrap());

pub(crate) fn matches(url: &str) -> bool {
    url.contains("goodgame.ru/")
}

pub(crate) fn rewrite(url: &str, ctx: &EmbedContext) -> Option<String> {
    let channel = capture_group_1(&CHANNEL_REGEX, url)?;
    Some(format!("{}?channel={channel}", ctx.goodgame_proxy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EmbedContext {
        EmbedContext::new("example.com").goodgame_proxy("https://proxy.test/gg")
    }

    #[test]
    fn channel_page_targets_proxy() {
        let out = rewrite("https://goodgame.ru/Miker?from=main", &ctx()).unwrap();
        assert_eq!(out, "https://proxy.test/gg?channel=Miker");
    }

    #[test]
    fn bare_domain_fails_the_pattern() {
        // No channel segment to capture; the caller passes the URL through.
        assert_eq!(rewrite("https://goodgame.ru/", &ctx()), None);
    }
}
