pub mod config;
pub use config::WebsiteMatcherConfig;

pub mod error;
pub use error::Error;

pub mod name_tokenizer;
pub use name_tokenizer::NameTokenizer;

pub mod url_ranker;
pub use url_ranker::UrlRanker;

pub mod website_matcher;
pub use website_matcher::{MatchReason, WebsiteMatch, WebsiteMatcher};

pub mod word_dictionary;
#[cfg(feature = "embed-dictionary")]
pub use word_dictionary::EmbeddedWordList;
pub use word_dictionary::WordDictionary;
