#[cfg(feature = "embed-dictionary")]
use crate::Error;
#[cfg(feature = "embed-dictionary")]
use flate2::read::GzDecoder;
#[cfg(feature = "embed-dictionary")]
use std::collections::HashSet;
#[cfg(feature = "embed-dictionary")]
use std::io::Read;

/// Read-only word-membership oracle used to classify name tokens as
/// dictionary words or brand-specific terms.
///
/// The tokenizer takes this as an injected capability so that tests can
/// substitute a double with a known vocabulary.
pub trait WordDictionary {
    /// Whether `word` is a known English word. Implementations are expected
    /// to be case-insensitive.
    fn contains(&self, word: &str) -> bool;
}

// Embed the bytes of the word list compressed by the build script
#[cfg(feature = "embed-dictionary")]
const COMPRESSED_WORD_LIST_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/english_word_list.txt.gz"));

/// Default [`WordDictionary`] backed by the bundled English word list.
///
/// The list is shipped gzip-compressed and parsed once at load time; lookups
/// afterwards are plain hash-set probes.
#[cfg(feature = "embed-dictionary")]
pub struct EmbeddedWordList {
    words: HashSet<String>,
}

#[cfg(feature = "embed-dictionary")]
impl EmbeddedWordList {
    /// Decompress and parse the bundled word list.
    pub fn load() -> Result<Self, Error> {
        let mut decoder = GzDecoder::new(COMPRESSED_WORD_LIST_BYTES);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        let words: HashSet<String> = decompressed_data
            .lines()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(Error::DictionaryError(
                "Embedded word list is empty".to_string(),
            ));
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(feature = "embed-dictionary")]
impl WordDictionary for EmbeddedWordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
