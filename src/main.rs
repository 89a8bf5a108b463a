use log::error;
use site_sniffer::{resolve_websites, Error, NameToUrlsMap, WebsiteMatch};
use std::io;

/// Reads a headerless CSV from stdin where each row is an organization name
/// followed by its candidate URLs in search-result order, and prints the best
/// website guess per name.
fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(io::stdin());

    let mut name_to_urls = NameToUrlsMap::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let error = Error::ParserError(format!("Failed to read CSV record: {}", e));
                error!("{}", error);
                std::process::exit(1);
            }
        };

        let name = match record.get(0) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => continue,
        };
        let urls: Vec<String> = record
            .iter()
            .skip(1)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();

        name_to_urls.insert(name, urls);
    }

    match resolve_websites(&name_to_urls) {
        Ok((matches, mut unmatched)) => {
            // Convert the HashMap into a Vec and sort it by confidence
            // (descending), then by name (ascending) for deterministic order.
            let mut sorted_matches: Vec<(&String, &WebsiteMatch)> = matches.iter().collect();
            sorted_matches.sort_by(|a, b| {
                b.1.confidence
                    .partial_cmp(&a.1.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.0.cmp(b.0))
            });

            for (name, website_match) in sorted_matches {
                println!(
                    "{}: {} ({:.2}, {})",
                    name, website_match.domain, website_match.confidence, website_match.reason
                );
            }

            unmatched.sort();
            for name in unmatched {
                println!("{}: no match", name);
            }
        }
        Err(e) => {
            error!("Error resolving websites: {}", e);
            std::process::exit(1);
        }
    }
}
