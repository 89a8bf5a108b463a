use crate::constants::TRIVIAL_WORDS;
use crate::models::WordDictionary;
use crate::types::Token;
use std::collections::HashSet;

/// Splits an organization name into ranked, filtered word lists and derives
/// acronym candidates.
///
/// The dictionary is injected rather than read from a module-level singleton
/// so a known vocabulary can be substituted in tests.
pub struct NameTokenizer<'a> {
    dictionary: &'a dyn WordDictionary,
}

impl<'a> NameTokenizer<'a> {
    pub fn new(dictionary: &'a dyn WordDictionary) -> Self {
        Self { dictionary }
    }

    /// Arranges the name's words by importance, returning
    /// `(nonwords, others)`.
    ///
    /// Words are lowercased and sorted by length descending (longest words
    /// considered most distinguishing; the sort is stable for ties), trivial
    /// organizational words are dropped, and the remainder is partitioned by
    /// dictionary membership: absent words are presumed brand-specific and
    /// land in `nonwords`, known words land in `others`.
    ///
    /// The length-descending order within each list is load-bearing: the
    /// match rules iterate these lists in order when doing substring work.
    pub fn arrange_words_by_importance(&self, name: &str) -> (Vec<Token>, Vec<Token>) {
        let mut words: Vec<Token> = name
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let mut nonwords: Vec<Token> = Vec::new();
        let mut others: Vec<Token> = Vec::new();

        for word in words {
            if TRIVIAL_WORDS.contains(&word.as_str()) {
                continue;
            }
            if !self.dictionary.contains(&word) {
                nonwords.push(word);
            } else {
                others.push(word);
            }
        }

        (nonwords, others)
    }

    /// Generates acronym candidates from the name: the first letters of all
    /// words, and the first letters of words that are not trivial
    /// organizational words. Both are lowercased; the two coincide for names
    /// without trivial words, in which case the set has a single element.
    pub fn acronyms(&self, name: &str) -> HashSet<String> {
        let all_words: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_lowercase();

        let important: String = name
            .split_whitespace()
            .filter(|word| !TRIVIAL_WORDS.contains(&word.to_lowercase().as_str()))
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_lowercase();

        HashSet::from([all_words, important])
    }
}
