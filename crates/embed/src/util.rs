use regex::Regex;

/// Everything after the first occurrence of `pat`, if present.
#[inline]
pub(crate) fn after<'a>(s: &'a str, pat: &str) -> Option<&'a str> {
    s.find(pat).map(|i| &s[i + pat.len()..])
}

/// Everything before the first occurrence of `stop`.
#[inline]
pub(crate) fn until(s: &str, stop: char) -> &str {
    match s.find(stop) {
        Some(i) => &s[..i],
        None => s,
    }
}

#[inline]
pub(crate) fn capture_group_1<'a>(re: &Regex, input: &'a str) -> Option<&'a str> {
    re.captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_returns_tail() {
        assert_eq!(after("https://youtu.be/abc", "youtu.be/"), Some("abc"));
        assert_eq!(after("https://youtu.be/", "youtu.be/"), Some(""));
        assert_eq!(after("https://example.com", "youtu.be/"), None);
    }

    #[test]
    fn until_stops_at_first_occurrence() {
        assert_eq!(until("abc?t=5", '?'), "abc");
        assert_eq!(until("abc", '?'), "abc");
        assert_eq!(until("?x", '?'), "");
    }
}
