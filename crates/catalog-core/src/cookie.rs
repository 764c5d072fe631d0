//! `document.cookie` parsing.

/// Find a cookie's value in a `document.cookie` string
/// (`"a=1; b=2; c=3"`). Returns the first match.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_csrf_cookie_among_others() {
        let header = "session=abc; csrf_access_token=tok-123; theme=dark";
        assert_eq!(
            cookie_value(header, "csrf_access_token").as_deref(),
            Some("tok-123")
        );
    }

    #[test]
    fn name_match_is_exact() {
        let header = "xcsrf_access_token=nope; csrf_access_token=yes";
        assert_eq!(
            cookie_value(header, "csrf_access_token").as_deref(),
            Some("yes")
        );
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(cookie_value("", "csrf_access_token"), None);
        assert_eq!(cookie_value("a=1", "csrf_access_token"), None);
    }

    #[test]
    fn values_may_contain_equals_signs() {
        let header = "csrf_access_token=abc=def";
        assert_eq!(
            cookie_value(header, "csrf_access_token").as_deref(),
            Some("abc=def")
        );
    }
}
