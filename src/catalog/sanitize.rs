/// Sanitizers for untrusted asset URLs
///
/// Catalog documents come from outside the application, so every image path
/// is rewritten before it is handed to the UI layer. Absolute http(s) URLs
/// pass through unchanged; anything else is percent-encoded so it can be
/// embedded safely, with apostrophes always escaped to block attribute
/// breakout. Re-sanitizing already-sanitized input is a no-op.
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// ASCII characters that must be escaped in an asset path.
/// Everything outside this set (letters, digits, and standard URL
/// punctuation) is left readable. Apostrophes are deliberately kept in the
/// escape set.
const ASSET_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Make an untrusted path or URL safe for embedding in rendered output.
///
/// Absolute http(s) URLs are trusted as-is. Relative paths are
/// percent-encoded; an existing `%XX` escape passes through untouched while
/// a bare percent sign is escaped itself, which keeps the function
/// idempotent.
pub fn safe_asset_url(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    if is_absolute_http(path) {
        return path.to_owned();
    }

    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(ch) = rest.chars().next() {
        let len = ch.len_utf8();
        if ch == '%' {
            let mut follow = rest[len..].chars();
            let escaped = matches!(
                (follow.next(), follow.next()),
                (Some(a), Some(b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
            );
            out.push_str(if escaped { "%" } else { "%25" });
        } else {
            for piece in utf8_percent_encode(&rest[..len], ASSET_ESCAPE) {
                out.push_str(piece);
            }
        }
        rest = &rest[len..];
    }
    out
}

/// Sanitize a `srcset` attribute value candidate by candidate.
///
/// Each comma-separated candidate is split into a URL and an optional width
/// or density descriptor. The URL goes through [`safe_asset_url`]; the
/// descriptor is reattached unchanged. Empty candidates are dropped.
pub fn safe_srcset(srcset: &str) -> String {
    if srcset.is_empty() {
        return String::new();
    }

    srcset
        .split(',')
        .filter_map(|candidate| {
            let mut parts = candidate.split_whitespace();
            let url = parts.next()?;
            let descriptor = parts.collect::<Vec<_>>().join(" ");
            let safe = safe_asset_url(url);
            if descriptor.is_empty() {
                Some(safe)
            } else {
                Some(format!("{} {}", safe, descriptor))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_absolute_http(path: &str) -> bool {
    let head: String = path.chars().take(8).collect::<String>().to_ascii_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_pass_through() {
        let url = "https://cdn.example.com/images/kitchen 1.jpg";
        assert_eq!(safe_asset_url(url), url);
        assert_eq!(safe_asset_url("HTTP://example.com/a.jpg"), "HTTP://example.com/a.jpg");
    }

    #[test]
    fn test_relative_paths_are_encoded() {
        assert_eq!(
            safe_asset_url("images/harbor loft.jpg"),
            "images/harbor%20loft.jpg"
        );
        assert_eq!(safe_asset_url("images/\"x\".jpg"), "images/%22x%22.jpg");
    }

    #[test]
    fn test_apostrophes_are_escaped() {
        assert_eq!(
            safe_asset_url("images/sam's-interiors.jpg"),
            "images/sam%27s-interiors.jpg"
        );
    }

    #[test]
    fn test_bare_percent_is_escaped_but_escapes_survive() {
        assert_eq!(safe_asset_url("a%20b.jpg"), "a%20b.jpg");
        assert_eq!(safe_asset_url("100% done.jpg"), "100%25%20done.jpg");
    }

    #[test]
    fn test_unicode_is_encoded() {
        assert_eq!(safe_asset_url("images/café.jpg"), "images/caf%C3%A9.jpg");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(safe_asset_url(""), "");
        assert_eq!(safe_srcset(""), "");
    }

    #[test]
    fn test_srcset_candidates() {
        let srcset = "images/a'b.jpg 400w, images/b.jpg 2x, images/c.jpg";
        assert_eq!(
            safe_srcset(srcset),
            "images/a%27b.jpg 400w, images/b.jpg 2x, images/c.jpg"
        );
    }

    #[test]
    fn test_srcset_drops_empty_candidates() {
        assert_eq!(
            safe_srcset("images/a.jpg 400w,, ,images/b.jpg"),
            "images/a.jpg 400w, images/b.jpg"
        );
    }

    #[test]
    fn test_srcset_is_idempotent() {
        let inputs = [
            "images/a b.jpg 400w, images/c'd.jpg 800w",
            "a%20b.jpg 1x, 100%.jpg",
            "https://cdn.example.com/x.jpg 2x",
            "images/café.jpg 640w",
        ];
        for input in inputs {
            let once = safe_srcset(input);
            assert_eq!(safe_srcset(&once), once, "srcset not idempotent: {input}");
        }
    }

    #[test]
    fn test_asset_url_is_idempotent() {
        let inputs = ["images/a b'c.jpg", "100%", "café/été.png", "plain.jpg"];
        for input in inputs {
            let once = safe_asset_url(input);
            assert_eq!(safe_asset_url(&once), once, "url not idempotent: {input}");
        }
    }
}
