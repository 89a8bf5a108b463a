use log::info;
use site_sniffer::{resolve_websites, NameToUrlsMap};
use std::collections::HashMap;
use test_utils::load_evaluation_set;

const DEFAULT_EVALUATION_SET_PATH: &str = "tests/test_evaluation_set.csv";

/// Offline evaluation runner: resolves every name in an evaluation dataset
/// and compares the guesses against the known domains.
fn main() {
    env_logger::init();

    let dataset_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_EVALUATION_SET_PATH.to_string());

    let records =
        load_evaluation_set(&dataset_path).expect("Failed to load the evaluation dataset");
    info!("Loaded {} evaluation records from {}", records.len(), dataset_path);

    let mut name_to_urls = NameToUrlsMap::new();
    let mut expected: HashMap<String, String> = HashMap::new();
    for record in &records {
        name_to_urls.insert(record.name.clone(), record.candidate_urls.clone());
        expected.insert(record.name.clone(), record.expected_domain.clone());
    }

    let (matches, mut unmatched) =
        resolve_websites(&name_to_urls).expect("Failed to resolve websites");

    let mut correct = 0;
    let mut matched_names: Vec<&String> = matches.keys().collect();
    matched_names.sort();

    for name in matched_names {
        let website_match = &matches[name];
        println!(
            "{}: {} ({:.2}, {})",
            name, website_match.domain, website_match.confidence, website_match.reason
        );
        println!("Expected: {}", expected[name]);
        if website_match.domain == expected[name] {
            println!("correct");
            correct += 1;
        } else {
            println!("incorrect");
        }
    }
    println!("Total correct: {} out of {}", correct, matches.len());
    println!();

    unmatched.sort();
    for name in &unmatched {
        println!("{}: {:?}", name, name_to_urls[name]);
        println!("Expected: {}", expected[name]);
    }
}
