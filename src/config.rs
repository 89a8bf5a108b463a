use crate::models::WebsiteMatcherConfig;

pub const DEFAULT_WEBSITE_MATCHER_CONFIG: &WebsiteMatcherConfig = &WebsiteMatcherConfig {
    url_count_weight: 0.25,
    url_order_weight: -0.25,
    url_len_weight: -0.1,
    nonword_confidence_factor: 0.5,
    reduced_domain_confidence_factor: 0.4,
};
