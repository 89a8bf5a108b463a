use site_sniffer::{EmbeddedWordList, WordDictionary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_word_list_loads() {
        let dictionary = EmbeddedWordList::load().expect("Failed to load embedded word list");
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn test_lookups_are_case_insensitive() {
        let dictionary = EmbeddedWordList::load().expect("Failed to load embedded word list");

        assert!(dictionary.contains("national"));
        assert!(dictionary.contains("National"));
        assert!(dictionary.contains("NETWORK"));
    }

    #[test]
    fn test_brand_terms_are_not_words() {
        let dictionary = EmbeddedWordList::load().expect("Failed to load embedded word list");

        assert!(!dictionary.contains("mineraltree"));
        assert!(!dictionary.contains("designzillas"));
        assert!(!dictionary.contains("gigsky"));
    }
}
