//! Culture name helpers

/// Pick the preferred culture from an `Accept-Language` header value.
///
/// Entries are ranked by their `q` weight (default 1.0); ties keep header
/// order. `*`, entries with `q=0`, malformed weights (outside `0..=1` or
/// not a number) and tags that are not `ALPHA{1,8}(-ALNUM{1,8})*` are
/// ignored.
pub fn negotiate_culture(accept_language: &str) -> Option<String> {
    let mut best: Option<(&str, f32)> = None;

    for entry in accept_language.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        if !is_language_tag(tag) {
            continue;
        }

        let weight = match parts.find_map(|p| p.trim().strip_prefix("q=")) {
            Some(q) => match parse_weight(q) {
                Some(w) => w,
                None => continue,
            },
            None => 1.0,
        };

        if weight <= 0.0 {
            continue;
        }

        match best {
            Some((_, w)) if w >= weight => {}
            _ => best = Some((tag, weight)),
        }
    }

    best.map(|(tag, _)| tag.to_string())
}

fn parse_weight(q: &str) -> Option<f32> {
    q.trim()
        .parse::<f32>()
        .ok()
        .filter(|w| w.is_finite() && (0.0..=1.0).contains(w))
}

/// `ALPHA{1,8}(-ALNUM{1,8})*`
fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');

    let primary_ok = subtags.next().is_some_and(|primary| {
        (1..=8).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_alphabetic())
    });

    primary_ok
        && subtags.all(|sub| {
            (1..=8).contains(&sub.len()) && sub.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

/// Parent of a culture, dropping the last subtag
/// ("zh-Hans-CN" -> "zh-Hans" -> "zh")
pub fn parent_culture(culture: &str) -> Option<&str> {
    culture
        .rsplit_once('-')
        .map(|(parent, _)| parent)
        .filter(|parent| !parent.is_empty())
}

/// The culture followed by all of its parents, most specific first
pub fn culture_chain(culture: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(culture), |c| parent_culture(*c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negotiate_first_tag() {
        assert_eq!(negotiate_culture("de-DE,en;q=0.8"), Some("de-DE".to_string()));
    }

    #[test]
    fn test_negotiate_by_weight() {
        assert_eq!(
            negotiate_culture("fr;q=0.4, en-US;q=0.9, zh-Hans;q=0.5"),
            Some("en-US".to_string())
        );
    }

    #[test]
    fn test_negotiate_ignores_wildcard_and_zero() {
        assert_eq!(negotiate_culture("*, en;q=0"), None);
        assert_eq!(negotiate_culture(""), None);
    }

    #[test]
    fn test_negotiate_rejects_malformed_weights() {
        assert_eq!(negotiate_culture("en;q=NaN, de;q=0.9"), Some("de".to_string()));
        assert_eq!(negotiate_culture("fr;q=0.5, xx;q=inf"), Some("fr".to_string()));
        assert_eq!(negotiate_culture("fr;q=0.5, xx;q=2"), Some("fr".to_string()));
        assert_eq!(negotiate_culture("fr;q=0.5, xx;q=-1"), Some("fr".to_string()));
        assert_eq!(negotiate_culture("en;q=abc"), None);
    }

    #[test]
    fn test_negotiate_rejects_invalid_tags() {
        assert_eq!(negotiate_culture("<script>"), None);
        assert_eq!(negotiate_culture("<script>, en;q=0.1"), Some("en".to_string()));
        assert_eq!(negotiate_culture("toolongtag-US"), None);
        assert_eq!(negotiate_culture("en--US, de"), Some("de".to_string()));
        assert_eq!(negotiate_culture("1en"), None);
        assert_eq!(
            negotiate_culture("zh-Hans-CN;q=0.8"),
            Some("zh-Hans-CN".to_string())
        );
    }

    #[test]
    fn test_parent_culture() {
        assert_eq!(parent_culture("zh-Hans-CN"), Some("zh-Hans"));
        assert_eq!(parent_culture("zh-Hans"), Some("zh"));
        assert_eq!(parent_culture("en"), None);
    }

    #[test]
    fn test_culture_chain() {
        let chain: Vec<&str> = culture_chain("zh-Hans-CN").collect();
        assert_eq!(chain, vec!["zh-Hans-CN", "zh-Hans", "zh"]);
        assert_eq!(culture_chain("en").collect::<Vec<_>>(), vec!["en"]);
    }
}
