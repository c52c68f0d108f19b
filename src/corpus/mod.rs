// Corpus loading: the posts to score and the word lists they are scored with.

pub mod loader;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::text::stemmer::StemLanguage;
use crate::text::vectorizer::Vectorizer;

/// Read the stopword file, or fall back to the bundled list for `language`
/// when it does not exist.
pub fn load_stopwords(path: &Path, language: StemLanguage) -> Result<Vec<String>> {
    if path.exists() {
        return loader::load_lines(path);
    }
    warn!(
        path = %path.display(),
        language = %language,
        "Stopword file not found, using bundled list"
    );
    Ok(loader::bundled_stopwords(language))
}

/// Where each resource file lives.
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    pub dictionary: PathBuf,
    pub stopwords: PathBuf,
    pub emoticons: PathBuf,
    pub emojis: PathBuf,
}

/// The read-only word lists shared by every post in a run.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub dictionary: Vec<String>,
    pub stopwords: Vec<String>,
    pub emoticons: Vec<String>,
    pub emojis: Vec<String>,
}

impl Resources {
    /// Load every list. A missing stopword file falls back to the bundled
    /// list for `language`; every other file is required.
    pub fn load(paths: &ResourcePaths, language: StemLanguage) -> Result<Self> {
        let stopwords = load_stopwords(&paths.stopwords, language)?;

        let resources = Self {
            dictionary: loader::load_dictionary(&paths.dictionary)?,
            stopwords,
            emoticons: loader::load_lines(&paths.emoticons)?,
            emojis: loader::load_emojis(&paths.emojis)?,
        };

        debug!(
            dictionary = resources.dictionary.len(),
            stopwords = resources.stopwords.len(),
            emoticons = resources.emoticons.len(),
            emojis = resources.emojis.len(),
            "Loaded resources"
        );

        Ok(resources)
    }

    /// Build a vectorizer over these lists.
    pub fn vectorizer(&self, language: StemLanguage) -> Result<Vectorizer> {
        Vectorizer::builder()
            .stopwords(self.stopwords.iter().cloned())
            .emoticons(self.emoticons.iter().cloned())
            .emojis(self.emojis.iter().cloned())
            .language(language)
            .build()
    }
}
