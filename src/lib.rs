mod config;
mod constants;
pub mod models;
pub use config::DEFAULT_WEBSITE_MATCHER_CONFIG;
#[cfg(feature = "embed-dictionary")]
pub use models::EmbeddedWordList;
pub use models::{
    Error, MatchReason, NameTokenizer, UrlRanker, WebsiteMatch, WebsiteMatcher,
    WebsiteMatcherConfig, WordDictionary,
};
pub mod types;
mod utils;
pub use types::{
    CandidateUrl, CandidateUrlList, MatchConfidence, NameToUrlsMap, OrganizationName,
    SimplifiedDomain, Token, WebsiteMatchMap,
};
pub use utils::simplify_url;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Guesses the website for a single organization name from its ordered
/// candidate URL list, using the bundled English word list and the default
/// weights. `Ok(None)` means no rule matched any candidate.
#[cfg(feature = "embed-dictionary")]
pub fn resolve_website(
    name: &str,
    candidate_urls: &[CandidateUrl],
) -> Result<Option<WebsiteMatch>, Error> {
    resolve_website_with_custom_config(DEFAULT_WEBSITE_MATCHER_CONFIG, name, candidate_urls)
}

#[cfg(feature = "embed-dictionary")]
pub fn resolve_website_with_custom_config(
    website_matcher_config: &WebsiteMatcherConfig,
    name: &str,
    candidate_urls: &[CandidateUrl],
) -> Result<Option<WebsiteMatch>, Error> {
    let dictionary = EmbeddedWordList::load()?;
    let website_matcher = WebsiteMatcher::new(website_matcher_config, &dictionary);

    Ok(website_matcher.match_best(name, candidate_urls))
}

/// Guesses websites for many organization names at once, returning the
/// matches plus the list of names for which no rule matched.
#[cfg(feature = "embed-dictionary")]
pub fn resolve_websites(
    name_to_urls: &NameToUrlsMap,
) -> Result<(WebsiteMatchMap, Vec<OrganizationName>), Error> {
    resolve_websites_with_custom_config(DEFAULT_WEBSITE_MATCHER_CONFIG, name_to_urls)
}

#[cfg(feature = "embed-dictionary")]
pub fn resolve_websites_with_custom_config(
    website_matcher_config: &WebsiteMatcherConfig,
    name_to_urls: &NameToUrlsMap,
) -> Result<(WebsiteMatchMap, Vec<OrganizationName>), Error> {
    let dictionary = EmbeddedWordList::load()?;
    let website_matcher = WebsiteMatcher::new(website_matcher_config, &dictionary);

    Ok(website_matcher.resolve_all(name_to_urls))
}
