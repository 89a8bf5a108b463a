use site_sniffer::{resolve_website, MatchReason};
use test_utils::assert_fixture_outcome;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_overlap_with_file() {
        assert_fixture_outcome("tests/test_files/microsoft.txt");
    }

    #[test]
    fn test_prefers_top_ranked_short_brand_with_file() {
        assert_fixture_outcome("tests/test_files/flynn.txt");
    }

    #[test]
    fn test_matches_small_domain_with_file() {
        assert_fixture_outcome("tests/test_files/national_pen.txt");
    }

    #[test]
    fn test_matches_invented_brand_with_file() {
        assert_fixture_outcome("tests/test_files/designzillas.txt");
    }

    #[test]
    fn test_matches_partial_domain_with_file() {
        assert_fixture_outcome("tests/test_files/california_college.txt");
    }

    #[test]
    fn test_matches_acronym_with_file() {
        assert_fixture_outcome("tests/test_files/ibm.txt");
    }

    #[test]
    fn test_matches_nonword_with_file() {
        assert_fixture_outcome("tests/test_files/zyxel.txt");
    }

    #[test]
    fn test_returns_no_match_with_file() {
        assert_fixture_outcome("tests/test_files/no_match.txt");
    }

    #[test]
    fn test_empty_candidate_list_yields_no_match() {
        let result = resolve_website("Microsoft", &[]).expect("Failed to resolve website");
        assert!(result.is_none());
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let urls = vec![
            "https://www.microsoft.com/".to_string(),
            "https://support.microsoft.com/".to_string(),
            "https://en.wikipedia.org/wiki/Microsoft".to_string(),
        ];

        let first = resolve_website("Microsoft", &urls).expect("Failed to resolve website");
        let second = resolve_website("Microsoft", &urls).expect("Failed to resolve website");

        assert_eq!(first, second);
    }

    #[test]
    fn test_reversed_candidate_order_still_finds_the_overlap() {
        let urls = vec![
            "http://www.flynncenter.org/".to_string(),
            "https://flynn.io/".to_string(),
            "https://github.com/flynn/flynn".to_string(),
        ];
        let mut reversed = urls.clone();
        reversed.reverse();

        let forward = resolve_website("Flynn", &urls)
            .expect("Failed to resolve website")
            .expect("Expected a match");
        let backward = resolve_website("Flynn", &reversed)
            .expect("Failed to resolve website")
            .expect("Expected a match");

        // Reversing the candidate order changes the rank scores, but the
        // overlap rule still accepts the same domain here.
        assert_eq!(forward.domain, "flynn.io");
        assert_eq!(backward.domain, "flynn.io");
        assert_eq!(forward.reason, MatchReason::NameOverlap);
        assert_eq!(backward.reason, MatchReason::NameOverlap);
    }

    #[test]
    fn test_unparseable_candidate_does_not_hijack_the_match() {
        let urls = vec![
            "https://www.good.com/".to_string(),
            "not a url".to_string(),
        ];

        let result = resolve_website("Good", &urls)
            .expect("Failed to resolve website")
            .expect("Expected a match");

        assert_eq!(result.domain, "www.good.com");
    }

    #[test]
    fn test_confidence_is_normalized() {
        let urls = vec![
            "https://www.microsoft.com/".to_string(),
            "https://support.microsoft.com/".to_string(),
            "https://en.wikipedia.org/wiki/Microsoft".to_string(),
        ];

        let result = resolve_website("Microsoft", &urls)
            .expect("Failed to resolve website")
            .expect("Expected a match");

        assert!(result.confidence >= 0.0 && result.confidence <= 1.0);
        assert!((result.confidence - 0.5).abs() < 1e-6);
    }
}
