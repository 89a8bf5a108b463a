use crate::models::WebsiteMatch;
use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a name token as an owned `String`. Tokens are the basic units
/// derived from an organization name.
pub type Token = String;

/// Represents the name of an organization as an owned `String`.
pub type OrganizationName = String;

/// A single candidate URL for an organization, as returned by an external
/// search provider.
pub type CandidateUrl = String;

/// An ordered list of candidate URLs for one organization. The order is the
/// external search-result rank (position 0 = most relevant) and is preserved
/// end-to-end.
pub type CandidateUrlList = Vec<CandidateUrl>;

/// The network-location portion of a URL (e.g. `www.example.com`), used as the
/// unit of ranking and matching. Multiple URLs may reduce to the same
/// simplified domain.
pub type SimplifiedDomain = String;

/// A normalized match confidence in the `[0, 1]` range.
pub type MatchConfidence = f32;

/// Maps each organization name to its ordered candidate URL list.
pub type NameToUrlsMap = HashMap<OrganizationName, CandidateUrlList>;

/// Maps each organization name to the best website match found for it.
/// Names for which no rule matched are reported separately.
pub type WebsiteMatchMap = HashMap<OrganizationName, WebsiteMatch>;
