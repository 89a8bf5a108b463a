pub mod simplify_url;

pub use simplify_url::simplify_url;
