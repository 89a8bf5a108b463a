/// Fixed weights and penalty factors driving URL ranking and the match rule
/// cascade. These are author-chosen constants, not learned parameters; the
/// defaults live in [`crate::DEFAULT_WEBSITE_MATCHER_CONFIG`].
pub struct WebsiteMatcherConfig {
    /// Flat score contribution per occurrence of a domain in the result list.
    pub url_count_weight: f32,
    /// Per-position contribution; negative values penalize later results.
    pub url_order_weight: f32,
    /// Per-character contribution of the domain label length; negative values
    /// penalize longer labels.
    pub url_len_weight: f32,
    /// Confidence multiplier applied when a match is justified only by a
    /// non-dictionary name token appearing inside the domain.
    pub nonword_confidence_factor: f32,
    /// Confidence multiplier applied when a match is justified only by the
    /// domain being short after known name words are stripped from it.
    pub reduced_domain_confidence_factor: f32,
}
