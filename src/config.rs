use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::corpus::ResourcePaths;
use crate::scoring::similarity::SimilarityFormula;
use crate::text::stemmer::StemLanguage;

/// Central configuration loaded from environment variables.
///
/// Every path has a default under the data directory, matching the layout
/// the sample data ships with. The .env file is loaded at startup via
/// dotenvy, so any of these can be set there instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the relative file names below are resolved against
    pub data_dir: PathBuf,
    /// Corpus of posts (`<id>_sep_<text>` records)
    pub dataset_path: PathBuf,
    /// Reference lexicon, one word per record
    pub dictionary_path: PathBuf,
    /// Optional; the bundled list is used when the file is missing
    pub stopwords_path: PathBuf,
    pub emoticons_path: PathBuf,
    pub emojis_path: PathBuf,
    /// Stemming language (default Spanish, never detected)
    pub language: StemLanguage,
    /// Similarity formula (default: the reference formula)
    pub formula: SimilarityFormula,
}

fn resolve(data_dir: &std::path::Path, var: &str, default: &str) -> PathBuf {
    let name = env::var(var).unwrap_or_else(|_| default.to_string());
    let path = PathBuf::from(name);
    if path.is_absolute() {
        path
    } else {
        data_dir.join(path)
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let data_dir = env::var("DEVIGER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let language = match env::var("DEVIGER_LANGUAGE") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid DEVIGER_LANGUAGE `{value}`"))?,
            Err(_) => StemLanguage::default(),
        };

        let formula = match env::var("DEVIGER_SIMILARITY") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid DEVIGER_SIMILARITY `{value}`"))?,
            Err(_) => SimilarityFormula::default(),
        };

        Ok(Self {
            dataset_path: resolve(&data_dir, "DEVIGER_DATASET", "train.txt"),
            dictionary_path: resolve(&data_dir, "DEVIGER_DICTIONARY", "dict.txt"),
            stopwords_path: resolve(&data_dir, "DEVIGER_STOPWORDS", "stopwords_spanish.txt"),
            emoticons_path: resolve(&data_dir, "DEVIGER_EMOTICONS", "emoticons.txt"),
            emojis_path: resolve(&data_dir, "DEVIGER_EMOJIS", "emojis.csv"),
            data_dir,
            language,
            formula,
        })
    }

    pub fn resource_paths(&self) -> ResourcePaths {
        ResourcePaths {
            dictionary: self.dictionary_path.clone(),
            stopwords: self.stopwords_path.clone(),
            emoticons: self.emoticons_path.clone(),
            emojis: self.emojis_path.clone(),
        }
    }

    /// Check that the files a scan needs are present.
    /// The stopword file is optional and not checked.
    pub fn require_resources(&self) -> Result<()> {
        for (label, path) in [
            ("dictionary", &self.dictionary_path),
            ("emoticon list", &self.emoticons_path),
            ("emoji table", &self.emojis_path),
        ] {
            if !path.exists() {
                anyhow::bail!(
                    "{label} not found at {}\n\
                     Set DEVIGER_DATA_DIR or the matching DEVIGER_* variable in your .env file.",
                    path.display()
                );
            }
        }
        Ok(())
    }

    /// Check that the dataset file is present.
    pub fn require_dataset(&self) -> Result<()> {
        if !self.dataset_path.exists() {
            anyhow::bail!(
                "dataset not found at {}\n\
                 Pass --dataset or set DEVIGER_DATASET.",
                self.dataset_path.display()
            );
        }
        Ok(())
    }
}
