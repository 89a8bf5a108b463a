use site_sniffer::{resolve_website, resolve_websites, NameToUrlsMap};

#[cfg(test)]
mod tests {
    use super::*;

    fn gigsky_urls() -> Vec<String> {
        vec![
            "https://www.gigsky.com/".to_string(),
            "https://apps.apple.com/us/app/gigsky/id1043396848".to_string(),
            "https://en.wikipedia.org/wiki/GigSky".to_string(),
        ]
    }

    fn unrelated_urls() -> Vec<String> {
        vec![
            "https://example.com/".to_string(),
            "https://en.wikipedia.org/wiki/Example".to_string(),
        ]
    }

    #[test]
    fn test_buckets_matched_and_unmatched_names() {
        let mut name_to_urls = NameToUrlsMap::new();
        name_to_urls.insert("GigSky".to_string(), gigsky_urls());
        name_to_urls.insert("Quidditch Collective".to_string(), unrelated_urls());

        let (matches, unmatched) =
            resolve_websites(&name_to_urls).expect("Failed to resolve websites");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches["GigSky"].domain, "www.gigsky.com");
        assert_eq!(unmatched, vec!["Quidditch Collective".to_string()]);
    }

    #[test]
    fn test_names_with_empty_candidate_lists_are_unmatched() {
        let mut name_to_urls = NameToUrlsMap::new();
        name_to_urls.insert("GigSky".to_string(), Vec::new());

        let (matches, unmatched) =
            resolve_websites(&name_to_urls).expect("Failed to resolve websites");

        assert!(matches.is_empty());
        assert_eq!(unmatched, vec!["GigSky".to_string()]);
    }

    #[test]
    fn test_batch_result_agrees_with_single_resolution() {
        let mut name_to_urls = NameToUrlsMap::new();
        name_to_urls.insert("GigSky".to_string(), gigsky_urls());
        name_to_urls.insert("Quidditch Collective".to_string(), unrelated_urls());

        let (matches, _) = resolve_websites(&name_to_urls).expect("Failed to resolve websites");
        let single = resolve_website("GigSky", &gigsky_urls())
            .expect("Failed to resolve website")
            .expect("Expected a match");

        assert_eq!(matches["GigSky"], single);
    }
}
