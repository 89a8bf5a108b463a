use crate::models::{NameTokenizer, UrlRanker, WebsiteMatcherConfig, WordDictionary};
use crate::types::{
    CandidateUrl, MatchConfidence, NameToUrlsMap, OrganizationName, SimplifiedDomain,
    WebsiteMatchMap,
};
use log::{debug, info};
use std::fmt;

/// Why a domain was accepted for an organization name. `Display` renders the
/// human-readable justification reported alongside each match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// The normalized domain and the space-stripped name contain one another.
    NameOverlap,
    /// The normalized domain equals one of the name's acronym candidates.
    AcronymMatch,
    /// A non-dictionary name token appears inside the normalized domain.
    NonwordMatch,
    /// The domain is short and nearly empty once known name words are
    /// stripped from it.
    SmallDomainMatch,
    /// The domain is short once known name words are stripped from it.
    PartialDomainMatch,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::NameOverlap => write!(f, "domain in companyName or vice versa"),
            MatchReason::AcronymMatch => write!(f, "domain in company acronyms"),
            MatchReason::NonwordMatch => write!(f, "nonword match"),
            MatchReason::SmallDomainMatch => write!(f, "small domain match"),
            MatchReason::PartialDomainMatch => write!(f, "partial domain match"),
        }
    }
}

/// The best website guess for one organization name.
#[derive(Debug, Clone, PartialEq)]
pub struct WebsiteMatch {
    pub domain: SimplifiedDomain,
    pub confidence: MatchConfidence,
    pub reason: MatchReason,
}

/// Walks ranked candidate domains against a tokenized organization name
/// through an ordered cascade of match rules.
///
/// The cascade is deliberately greedy: domains are visited in rank order and
/// the first satisfied rule wins, with no backtracking and no comparison of
/// matches across domains. A weak rule firing on a top-ranked domain
/// therefore outranks a strong rule on a lower-ranked one.
pub struct WebsiteMatcher<'a> {
    config: &'a WebsiteMatcherConfig,
    dictionary: &'a dyn WordDictionary,
}

impl<'a> WebsiteMatcher<'a> {
    pub fn new(config: &'a WebsiteMatcherConfig, dictionary: &'a dyn WordDictionary) -> Self {
        Self { config, dictionary }
    }

    /// Identifies the best matching URL for an organization name, or `None`
    /// when no rule matches any ranked domain.
    pub fn match_best(
        &self,
        name: &str,
        candidate_urls: &[CandidateUrl],
    ) -> Option<WebsiteMatch> {
        let name: String = name.chars().filter(|c| *c != '.' && *c != ',').collect();

        let ranked_urls = UrlRanker::new(self.config).rank(candidate_urls);

        let tokenizer = NameTokenizer::new(self.dictionary);
        let (nonwords, others) = tokenizer.arrange_words_by_importance(&name);
        let acronyms = tokenizer.acronyms(&name);
        let simplified_name = name.replace(' ', "").to_lowercase();

        for (domain, rank_score) in &ranked_urls {
            // Same part-count extraction as the ranker, except the subdomain
            // form is taken at three or more parts here rather than exactly
            // three. The asymmetry is intentional.
            let domain_parts: Vec<&str> = domain.split('.').collect();
            let normalized_domain = if domain_parts.len() >= 3 {
                domain_parts[1]
            } else {
                domain_parts[0]
            };

            // An unparseable URL reduces to an empty domain; the empty string
            // would pass the substring rule against any name.
            if normalized_domain.is_empty() {
                continue;
            }

            if simplified_name.contains(normalized_domain)
                || normalized_domain.contains(&simplified_name)
            {
                debug!("'{}' overlaps name '{}'", normalized_domain, simplified_name);
                return Some(WebsiteMatch {
                    domain: domain.clone(),
                    confidence: *rank_score,
                    reason: MatchReason::NameOverlap,
                });
            }

            if acronyms.contains(normalized_domain) {
                debug!("'{}' is an acronym of '{}'", normalized_domain, name);
                return Some(WebsiteMatch {
                    domain: domain.clone(),
                    confidence: *rank_score,
                    reason: MatchReason::AcronymMatch,
                });
            }

            if nonwords
                .iter()
                .any(|nonword| normalized_domain.contains(nonword.as_str()))
            {
                debug!("'{}' contains a nonword of '{}'", normalized_domain, name);
                return Some(WebsiteMatch {
                    domain: domain.clone(),
                    confidence: rank_score * self.config.nonword_confidence_factor,
                    reason: MatchReason::NonwordMatch,
                });
            }

            // Erode the domain by the known words, in tokenizer order. Each
            // removal operates on the progressively-reduced string, so
            // overlapping words interact order-dependently.
            let reduced_domain = others.iter().fold(
                normalized_domain.to_string(),
                |reduced, word| reduced.replace(word.as_str(), ""),
            );

            let normalized_len = normalized_domain.chars().count();
            let reduced_len = reduced_domain.chars().count();

            if normalized_len <= 4 && reduced_len <= 1 {
                debug!("'{}' reduces to '{}'", normalized_domain, reduced_domain);
                return Some(WebsiteMatch {
                    domain: domain.clone(),
                    confidence: rank_score * self.config.reduced_domain_confidence_factor,
                    reason: MatchReason::SmallDomainMatch,
                });
            } else if reduced_len <= 4 {
                debug!("'{}' reduces to '{}'", normalized_domain, reduced_domain);
                return Some(WebsiteMatch {
                    domain: domain.clone(),
                    confidence: rank_score * self.config.reduced_domain_confidence_factor,
                    reason: MatchReason::PartialDomainMatch,
                });
            }
        }

        None
    }

    /// Applies [`Self::match_best`] across many (name, URL-list) pairs,
    /// partitioning the names into matched and unmatched. Pairs are
    /// independent; iteration order does not affect any individual result.
    pub fn resolve_all(
        &self,
        name_to_urls: &NameToUrlsMap,
    ) -> (WebsiteMatchMap, Vec<OrganizationName>) {
        let mut matches = WebsiteMatchMap::new();
        let mut unmatched: Vec<OrganizationName> = Vec::new();

        for (name, urls) in name_to_urls {
            match self.match_best(name, urls) {
                Some(website_match) => {
                    matches.insert(name.clone(), website_match);
                }
                None => unmatched.push(name.clone()),
            }
        }

        info!(
            "Resolved {} of {} names",
            matches.len(),
            name_to_urls.len()
        );

        (matches, unmatched)
    }
}
