//! Stream-link normalization.
//!
//! Operators paste whatever URL their browser shows: a YouTube watch page, a
//! Twitch channel, a VK video, ... `normalize` rewrites each recognized form
//! into the provider's embeddable player URL so the site can drop it straight
//! into an iframe `src`. Anything unrecognized passes through unchanged; the
//! function never fails. Whether the result actually plays is discovered by
//! the player, not here.

use std::fmt;

use tracing::trace;

use crate::providers::{goodgame, kick, ok, twitch, vk, youtube};

/// Proxy endpoint used for Goodgame channels when the context does not
/// override it.
pub const DEFAULT_GOODGAME_PROXY: &str =
    "https://functions.poehali.dev/1c6c72e8-7a72-433e-bd18-5667031c9e3f";

/// Deployment facts the rewrite rules need.
///
/// The parent host goes into Twitch player URLs (Twitch refuses to embed
/// without it); the Goodgame proxy is the site-internal endpoint that wraps
/// Goodgame's player.
#[derive(Debug, Clone)]
pub struct EmbedContext {
    pub parent_host: String,
    pub goodgame_proxy: String,
}

impl EmbedContext {
    pub fn new<S: Into<String>>(parent_host: S) -> Self {
        Self {
            parent_host: parent_host.into(),
            goodgame_proxy: DEFAULT_GOODGAME_PROXY.to_string(),
        }
    }

    pub fn goodgame_proxy<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.goodgame_proxy = endpoint.into();
        self
    }
}

/// Classification of a raw stream link by hosting provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    YouTubeShort,
    Twitch,
    TwitchPlayerEmbed,
    Goodgame,
    Vk,
    Ok,
    Kick,
    Unknown,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::YouTube => "YouTube",
            Provider::YouTubeShort => "YouTube (short link)",
            Provider::Twitch => "Twitch",
            Provider::TwitchPlayerEmbed => "Twitch (player embed)",
            Provider::Goodgame => "Goodgame",
            Provider::Vk => "VK",
            Provider::Ok => "OK.ru",
            Provider::Kick => "Kick",
            Provider::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type MatchFn = fn(&str) -> bool;
/// `None` means the entry matched but could not extract what it needed; the
/// caller passes the input through unchanged.
type RewriteFn = fn(&str, &EmbedContext) -> Option<String>;

struct ProviderEntry {
    provider: Provider,
    matches: MatchFn,
    rewrite: RewriteFn,
}

// Checked in order; first match wins. The youtube.com forms sit ahead of the
// youtu.be short link, and the twitch.tv channel form must stay ahead of the
// player.twitch.tv entry (its predicate also excludes player URLs outright).
static PROVIDERS: &[ProviderEntry] = &[
    ProviderEntry {
        provider: Provider::YouTube,
        matches: youtube::matches_watch,
        rewrite: youtube::rewrite_watch,
    },
    ProviderEntry {
        provider: Provider::YouTubeShort,
        matches: youtube::matches_short,
        rewrite: youtube::rewrite_short,
    },
    ProviderEntry {
        provider: Provider::Twitch,
        matches: twitch::matches_channel,
        rewrite: twitch::rewrite_channel,
    },
    ProviderEntry {
        provider: Provider::TwitchPlayerEmbed,
        matches: twitch::is_player_embed,
        rewrite: twitch::rewrite_player_embed,
    },
    ProviderEntry {
        provider: Provider::Goodgame,
        matches: goodgame::matches,
        rewrite: goodgame::rewrite,
    },
    ProviderEntry {
        provider: Provider::Vk,
        matches: vk::matches,
        rewrite: vk::rewrite,
    },
    ProviderEntry {
        provider: Provider::Ok,
        matches: ok::matches,
        rewrite: ok::rewrite,
    },
    ProviderEntry {
        provider: Provider::Kick,
        matches: kick::matches,
        rewrite: kick::rewrite,
    },
];

/// Classify a raw link without rewriting it.
pub fn detect(raw_url: &str) -> Provider {
    PROVIDERS
        .iter()
        .find(|entry| (entry.matches)(raw_url))
        .map(|entry| entry.provider)
        .unwrap_or(Provider::Unknown)
}

/// Rewrite a raw stream link into an embeddable player URL.
///
/// Infallible: unrecognized providers, and recognized ones whose id
/// extraction fails, return the input byte-for-byte. Re-running the result
/// through `normalize` is a no-op.
pub fn normalize(raw_url: &str, ctx: &EmbedContext) -> String {
    for entry in PROVIDERS {
        if (entry.matches)(raw_url) {
            return match (entry.rewrite)(raw_url, ctx) {
                Some(embed) => {
                    trace!(provider = %entry.provider, "rewrote stream link");
                    embed
                }
                None => {
                    trace!(provider = %entry.provider, "extraction failed; passing through");
                    raw_url.to_string()
                }
            };
        }
    }
    raw_url.to_string()
}
