/// Trivial organizational words excluded from tokenization and acronym
/// generation. Membership is checked case-insensitively against whole tokens.
pub const TRIVIAL_WORDS: &[&str] = &[
    "company",
    "inc",
    "group",
    "corporation",
    "co",
    "corp",
    "university",
    "college",
    "&",
    "llc",
    "the",
    "of",
    "a",
    "an",
];
