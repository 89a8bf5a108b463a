use csv::Reader;
use site_sniffer::{resolve_website, WebsiteMatch};
use std::error::Error;
use std::fs;

/// One match scenario loaded from a fixture file. Fixture files use line
/// markers: `NAME:` for the organization name, one `URL:` line per candidate
/// in search-result order, `EXPECTED:` for the expected domain (absent when
/// no match is expected), `EXPECTED_REASON:` for the expected justification,
/// and `COMMENT:` for free-form notes.
pub struct MatchFixture {
    pub name: String,
    pub urls: Vec<String>,
    pub expected_domain: Option<String>,
    pub expected_reason: Option<String>,
}

/// One row of an evaluation dataset: a name, the domain its website is known
/// to live at, and the candidate URLs a search for the name produced.
pub struct EvaluationRecord {
    pub name: String,
    pub expected_domain: String,
    pub candidate_urls: Vec<String>,
}

/// Utility to load a match scenario from a fixture file for testing.
pub fn load_fixture(file_path: &str) -> MatchFixture {
    let content = fs::read_to_string(file_path).expect("Failed to read fixture file");

    let mut fixture = MatchFixture {
        name: String::new(),
        urls: Vec::new(),
        expected_domain: None,
        expected_reason: None,
    };

    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("NAME:") {
            fixture.name = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("URL:") {
            fixture.urls.push(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("EXPECTED_REASON:") {
            fixture.expected_reason = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("EXPECTED:") {
            fixture.expected_domain = Some(value.trim().to_string());
        }
        // COMMENT: lines and anything unmarked are ignored
    }

    assert!(
        !fixture.name.is_empty(),
        "{} - fixture has no NAME: line",
        file_path
    );

    fixture
}

/// Runs the matcher on a fixture file and returns the fixture together with
/// the outcome.
pub fn run_match_for_file(file_path: &str) -> (MatchFixture, Option<WebsiteMatch>) {
    let fixture = load_fixture(file_path);
    let result =
        resolve_website(&fixture.name, &fixture.urls).expect("Failed to resolve website");
    (fixture, result)
}

/// Runs the matcher on a fixture file and asserts that the outcome agrees
/// with the fixture's `EXPECTED:` / `EXPECTED_REASON:` lines.
pub fn assert_fixture_outcome(file_path: &str) {
    let (fixture, result) = run_match_for_file(file_path);

    match (&fixture.expected_domain, &result) {
        (Some(expected_domain), Some(website_match)) => {
            assert_eq!(
                &website_match.domain, expected_domain,
                "{} - expected domain {:?}, but got {:?}",
                file_path, expected_domain, website_match.domain
            );
            if let Some(expected_reason) = &fixture.expected_reason {
                assert_eq!(
                    &website_match.reason.to_string(),
                    expected_reason,
                    "{} - expected reason {:?}, but got {:?}",
                    file_path,
                    expected_reason,
                    website_match.reason.to_string()
                );
            }
        }
        (None, None) => {}
        (Some(expected_domain), None) => {
            panic!(
                "{} - expected domain {:?}, but no rule matched",
                file_path, expected_domain
            );
        }
        (None, Some(website_match)) => {
            panic!(
                "{} - expected no match, but got {:?}",
                file_path, website_match
            );
        }
    }
}

/// Utility to load an evaluation dataset from a CSV file for testing and the
/// dev evaluation harness. Columns: `name`, `expected_domain`,
/// `candidate_urls` (pipe-separated, in search-result order).
pub fn load_evaluation_set(file_path: &str) -> Result<Vec<EvaluationRecord>, Box<dyn Error>> {
    let mut records = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 3 {
            let name = record.get(0).unwrap().trim().to_string();
            let expected_domain = record.get(1).unwrap().trim().to_string();
            let candidate_urls: Vec<String> = record
                .get(2)
                .unwrap()
                .split('|')
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect();
            records.push(EvaluationRecord {
                name,
                expected_domain,
                candidate_urls,
            });
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(records)
}
