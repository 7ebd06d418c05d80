/// Asset fetching over HTTP
///
/// The catalog references images by absolute URL or by a path relative to
/// the catalog document, the way a web page references them relative to
/// itself. Errors are strings so results can ride inside UI messages.
use url::Url;

/// Resolve a possibly-relative asset path against the catalog document URL.
/// Returns `None` when the path is empty or cannot be resolved (e.g. a
/// relative path with no catalog URL to resolve against).
pub fn resolve_asset_url(base: Option<&str>, path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }

    if let Ok(absolute) = Url::parse(path) {
        return Some(absolute.into());
    }

    let base = Url::parse(base?).ok()?;
    base.join(path).ok().map(Into::into)
}

/// Pick the widest candidate from a srcset attribute value, for the
/// full-size lightbox fetch. Candidates without a width descriptor count as
/// width zero. Returns `None` when the srcset has no candidates.
pub fn best_srcset_candidate(srcset: &str) -> Option<String> {
    let mut best: Option<(u32, &str)> = None;
    for candidate in srcset.split(',') {
        let mut parts = candidate.split_whitespace();
        let url = match parts.next() {
            Some(url) => url,
            None => continue,
        };
        let width = parts
            .next()
            .and_then(|descriptor| descriptor.strip_suffix('w'))
            .and_then(|digits| digits.parse::<u32>().ok())
            .unwrap_or(0);

        match best {
            Some((best_width, _)) if best_width >= width => {}
            _ => best = Some((width, url)),
        }
    }
    best.map(|(_, url)| url.to_owned())
}

/// Download an image asset.
pub async fn fetch_asset(url: String) -> Result<Vec<u8>, String> {
    let response = reqwest::get(url.as_str())
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", url, e))?;

    if !response.status().is_success() {
        return Err(format!(
            "Failed to fetch {}: server answered {}",
            url,
            response.status()
        ));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("Failed to read {}: {}", url, e))?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_resolve_without_a_base() {
        assert_eq!(
            resolve_asset_url(None, "https://cdn.example.com/a.jpg").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn test_relative_paths_resolve_against_the_catalog() {
        assert_eq!(
            resolve_asset_url(
                Some("https://samsinteriors.example/portfolio.json"),
                "images/kitchen.jpg"
            )
            .as_deref(),
            Some("https://samsinteriors.example/images/kitchen.jpg")
        );
    }

    #[test]
    fn test_relative_paths_without_a_base_do_not_resolve() {
        assert_eq!(resolve_asset_url(None, "images/kitchen.jpg"), None);
        assert_eq!(resolve_asset_url(Some("not a url"), "images/kitchen.jpg"), None);
    }

    #[test]
    fn test_empty_paths_do_not_resolve() {
        assert_eq!(resolve_asset_url(Some("https://samsinteriors.example/"), ""), None);
    }

    #[test]
    fn test_widest_srcset_candidate_wins() {
        let srcset = "images/k-400.jpg 400w, images/k-1600.jpg 1600w, images/k-800.jpg 800w";
        assert_eq!(best_srcset_candidate(srcset).as_deref(), Some("images/k-1600.jpg"));
    }

    #[test]
    fn test_srcset_without_widths_keeps_the_first_candidate() {
        assert_eq!(
            best_srcset_candidate("images/a.jpg 2x, images/b.jpg").as_deref(),
            Some("images/a.jpg")
        );
        assert_eq!(best_srcset_candidate(""), None);
    }
}
