use crate::models::WebsiteMatcherConfig;
use crate::types::{CandidateUrl, SimplifiedDomain};
use crate::utils::simplify_url;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Assigns each candidate URL a normalized score combining result order,
/// frequency, and domain label length.
pub struct UrlRanker<'a> {
    config: &'a WebsiteMatcherConfig,
}

impl<'a> UrlRanker<'a> {
    pub fn new(config: &'a WebsiteMatcherConfig) -> Self {
        Self { config }
    }

    /// Ranks the candidate URLs using a weighted linear combination of
    /// features, returning `(domain, score)` pairs sorted by score descending.
    ///
    /// Scores accumulate per simplified domain, so a domain recurring across
    /// several result slots collects a contribution from each slot. The final
    /// accumulated totals are min-max scaled into `[0, 1]`, with the divisor
    /// floored at exactly 1.0 to keep the single-domain and all-equal cases
    /// total. Ties keep first-accumulation order (the sort is stable).
    ///
    /// An empty input yields an empty output. A URL that cannot be parsed
    /// contributes an empty simplified domain rather than failing the pass.
    pub fn rank(&self, urls: &[CandidateUrl]) -> Vec<(SimplifiedDomain, f32)> {
        let mut accumulation_order: Vec<SimplifiedDomain> = Vec::new();
        let mut totals: HashMap<SimplifiedDomain, f32> = HashMap::new();

        for (i, url) in urls.iter().enumerate() {
            let simplified = simplify_url(url);

            // Label whose length feeds the score: the second-level label when
            // the domain has exactly three dot-separated parts (a subdomain),
            // otherwise the first label.
            let parts: Vec<&str> = simplified.split('.').collect();
            let domain_label_len = if parts.len() == 3 {
                parts[1].chars().count()
            } else {
                parts[0].chars().count()
            };

            let raw_score = self.config.url_count_weight
                + self.config.url_order_weight * (i as f32 + 1.0)
                + self.config.url_len_weight * domain_label_len as f32;

            if !totals.contains_key(&simplified) {
                accumulation_order.push(simplified.clone());
            }
            *totals.entry(simplified).or_insert(0.0) += raw_score;
        }

        if accumulation_order.is_empty() {
            return Vec::new();
        }

        let min_total = totals.values().fold(f32::INFINITY, |min, &v| min.min(v));
        let max_total = totals
            .values()
            .fold(f32::NEG_INFINITY, |max, &v| max.max(v));
        let divisor = (max_total - min_total).max(1.0); // Prevent division by zero

        let mut ranked: Vec<(SimplifiedDomain, f32)> = accumulation_order
            .into_iter()
            .map(|domain| {
                let normalized = (totals[&domain] - min_total) / divisor;
                (domain, normalized)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        ranked
    }
}
