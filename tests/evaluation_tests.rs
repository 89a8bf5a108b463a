use site_sniffer::{resolve_websites, NameToUrlsMap};
use test_utils::load_evaluation_set;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_every_evaluation_name_to_its_known_domain() {
        let records = load_evaluation_set("tests/test_evaluation_set.csv")
            .expect("Failed to load evaluation dataset");
        assert!(!records.is_empty());

        let mut name_to_urls = NameToUrlsMap::new();
        for record in &records {
            name_to_urls.insert(record.name.clone(), record.candidate_urls.clone());
        }

        let (matches, unmatched) =
            resolve_websites(&name_to_urls).expect("Failed to resolve websites");

        assert!(
            unmatched.is_empty(),
            "Expected every name to match, but these did not: {:?}",
            unmatched
        );

        for record in &records {
            let website_match = matches
                .get(&record.name)
                .unwrap_or_else(|| panic!("Missing match for {}", record.name));
            assert_eq!(
                website_match.domain, record.expected_domain,
                "{} - expected {:?}, but got {:?} ({})",
                record.name, record.expected_domain, website_match.domain, website_match.reason
            );
        }
    }
}
