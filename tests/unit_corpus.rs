// Unit tests for corpus and resource loading.
//
// Each test writes small fixture files to a temp directory and reads them
// back through the loaders.

use std::fs;
use std::path::{Path, PathBuf};

use deviger::corpus::loader::{load_dataset, load_dictionary, load_emojis, load_lines};
use deviger::corpus::{load_stopwords, ResourcePaths, Resources};
use deviger::text::stemmer::StemLanguage;
use deviger::Error;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================
// Dataset
// ============================================================

#[test]
fn dataset_takes_text_after_first_separator() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "train.txt",
        "1_sep_hola mundo\n\"2_sep_con, coma\"\n3_sep_a_sep_b\n".as_bytes(),
    );
    let posts = load_dataset(&path).unwrap();
    assert_eq!(posts, vec!["hola mundo", "con, coma", "a_sep_b"]);
}

#[test]
fn sample_dataset_keeps_quoted_commas() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/train.txt");
    let posts = load_dataset(&path).unwrap();
    assert_eq!(posts.len(), 6);
    assert_eq!(posts[5], "Eres una zorra, te voy a pegar 😡");
    assert!(posts.iter().all(|p| !p.contains('"')), "got {posts:?}");
}

#[test]
fn dataset_without_separator_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "train.txt", b"1_sep_ok\nsin separador\n");
    let err = load_dataset(&path).unwrap_err();
    assert!(
        matches!(err, Error::MalformedRecord { record: 2, .. }),
        "got {err:?}"
    );
}

#[test]
fn dataset_invalid_utf8_is_type_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "train.txt", b"1_sep_\xff\xfe\n");
    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }), "got {err:?}");
}

#[test]
fn dataset_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_dataset(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

// ============================================================
// Word lists
// ============================================================

#[test]
fn dictionary_first_column() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "dict.txt", "matar\npegar,extra\nzorra\n".as_bytes());
    assert_eq!(load_dictionary(&path).unwrap(), vec!["matar", "pegar", "zorra"]);
}

#[test]
fn lines_kept_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "emoticons.txt", b":)\n:-(\n\n;)\n");
    assert_eq!(load_lines(&path).unwrap(), vec![":)", ":-(", "", ";)"]);
}

#[test]
fn emojis_from_named_column() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "emojis.csv",
        "name,emoji\nangry,😡\nfist,✊\n".as_bytes(),
    );
    assert_eq!(load_emojis(&path).unwrap(), vec!["😡", "✊"]);
}

#[test]
fn emojis_without_column_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "emojis.csv", b"name,symbol\nangry,x\n");
    let err = load_emojis(&path).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { .. }), "got {err:?}");
}

// ============================================================
// Resources
// ============================================================

fn fixture(dir: &Path, with_stopwords: bool) -> ResourcePaths {
    let stopwords = if with_stopwords {
        write(dir, "stopwords_spanish.txt", b"te\nvoy\na\n")
    } else {
        dir.join("stopwords_spanish.txt")
    };
    ResourcePaths {
        dictionary: write(dir, "dict.txt", b"matar\npegar\n"),
        stopwords,
        emoticons: write(dir, "emoticons.txt", b":)\n"),
        emojis: write(dir, "emojis.csv", "emoji\n😡\n".as_bytes()),
    }
}

#[test]
fn resources_load_all_lists() {
    let dir = TempDir::new().unwrap();
    let resources = Resources::load(&fixture(dir.path(), true), StemLanguage::Spanish).unwrap();
    assert_eq!(resources.dictionary, vec!["matar", "pegar"]);
    assert_eq!(resources.stopwords, vec!["te", "voy", "a"]);
    assert_eq!(resources.emoticons, vec![":)"]);
    assert_eq!(resources.emojis, vec!["😡"]);

    let vectorizer = resources.vectorizer(StemLanguage::Spanish).unwrap();
    let tf = vectorizer.term_frequency("te voy a matar :) 😡");
    assert_eq!(tf.get("EMOTICON"), 1);
    assert_eq!(tf.get("EMOJI"), 1);
    assert_eq!(tf.len(), 3);
}

#[test]
fn resources_fall_back_to_bundled_stopwords() {
    let dir = TempDir::new().unwrap();
    let resources = Resources::load(&fixture(dir.path(), false), StemLanguage::Spanish).unwrap();
    assert!(resources.stopwords.iter().any(|w| w == "de"));
}

#[test]
fn stopword_helper_prefers_file_then_bundled() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("stopwords_spanish.txt");
    let bundled = load_stopwords(&missing, StemLanguage::Spanish).unwrap();
    assert!(bundled.iter().any(|w| w == "de"));

    let path = write(dir.path(), "stopwords_spanish.txt", b"foo\n");
    assert_eq!(load_stopwords(&path, StemLanguage::Spanish).unwrap(), vec!["foo"]);
}

#[test]
fn resources_missing_dictionary_fails() {
    let dir = TempDir::new().unwrap();
    let mut paths = fixture(dir.path(), true);
    paths.dictionary = dir.path().join("missing.txt");
    assert!(Resources::load(&paths, StemLanguage::Spanish).is_err());
}
