//! VK video pages (`vk.com` and the `vk.ru` mirror).
//!
//! A VK video is addressed by an `{owner}_{video}` id pair; the owner id is
//! negative for community-owned videos. Both halves go into the
//! `video_ext.php` external-player URL.

use std::sync::LazyLock;

use regex::Regex;

use crate::resolver::EmbedContext;
use crate::util::capture_group_1;

static VIDEO_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"video(-?\d+_\d+)").unwrap());

pub(crate) fn matches(url: &str) -> bool {
    url.contains("vk.com/video") || url.contains("vk.ru/video")
}

pub(crate) fn rewrite(url: &str, _ctx: &EmbedContext) -> Option<String> {
    let ids = capture_group_1(&VIDEO_ID_REGEX, url)?;
    let (oid, id) = ids.split_once('_')?;
    Some(format!(
        "https://vk.com/video_ext.php?oid={oid}&id={id}&hd=2&autoplay=1"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EmbedContext {
        EmbedContext::new("example.com")
    }

    #[test]
    fn community_video_keeps_negative_owner_id() {
        let out = rewrite("https://vk.com/video-12345_6789", &ctx()).unwrap();
        assert_eq!(
            out,
            "https://vk.com/video_ext.php?oid=-12345&id=6789&hd=2&autoplay=1"
        );
    }

    #[test]
    fn user_video_works_on_vk_ru() {
        let out = rewrite("https://vk.ru/video98765_111", &ctx()).unwrap();
        assert_eq!(
            out,
            "https://vk.com/video_ext.php?oid=98765&id=111&hd=2&autoplay=1"
        );
    }

    #[test]
    fn unparseable_video_path_fails_the_pattern() {
        assert_eq!(rewrite("https://vk.com/videos12345", &ctx()), None);
    }
}
