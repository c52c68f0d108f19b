// Corpus scan pipeline: score every post against the reference lexicon.
//
// Strategy: vectorize the lexicon once, then vectorize and score each post
// independently. Posts share nothing but the read-only vectorizer, so the
// per-post work can run on the rayon pool; every result carries its source
// index, which keeps the output order independent of scheduling.
//
// Any error aborts the whole scan. In particular a post whose text reduces
// to no terms (only stopwords, only punctuation) fails with EmptyVector.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;

use crate::error::{Error, Result};
use crate::scoring::similarity::SimilarityFormula;
use crate::text::vectorizer::{TermVector, Vectorizer};

/// One post's similarity to the lexicon.
#[derive(Debug, Clone)]
pub struct ScoredPost {
    /// Position of the post in the input corpus
    pub index: usize,
    pub text: String,
    /// Distinct terms left after preprocessing
    pub term_count: usize,
    pub score: f64,
}

/// Everything a scan produced.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub formula: SimilarityFormula,
    /// Distinct terms in the lexicon vector
    pub lexicon_terms: usize,
    /// Scores in corpus order
    pub posts: Vec<ScoredPost>,
}

impl ScanReport {
    /// Posts sorted by descending score (stable for ties).
    pub fn ranked(&self) -> Vec<&ScoredPost> {
        let mut ranked: Vec<&ScoredPost> = self.posts.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Options for [`run`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub formula: SimilarityFormula,
    /// Vectorize posts on the rayon thread pool
    pub parallel: bool,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

/// Build the lexicon vector from a word list. The words are joined with
/// spaces and run through the same pipeline as posts.
pub fn lexicon_vector<S: AsRef<str>>(vectorizer: &Vectorizer, words: &[S]) -> TermVector {
    let joined = words.iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>().join(" ");
    vectorizer.term_frequency(&joined)
}

fn score_one(
    vectorizer: &Vectorizer,
    lexicon: &TermVector,
    formula: SimilarityFormula,
    index: usize,
    text: &str,
) -> Result<ScoredPost> {
    let vector = vectorizer.term_frequency(text);
    let score = formula.score(&vector, lexicon)?;
    Ok(ScoredPost {
        index,
        text: text.to_string(),
        term_count: vector.len(),
        score,
    })
}

/// Score every post against an already-built lexicon vector.
pub fn score_corpus<S>(
    posts: &[S],
    lexicon: &TermVector,
    vectorizer: &Vectorizer,
    options: ScanOptions,
) -> Result<Vec<ScoredPost>>
where
    S: AsRef<str> + Sync,
{
    if lexicon.is_empty() {
        return Err(Error::EmptyVector { side: "lexicon" });
    }

    let pb = if options.progress {
        let pb = ProgressBar::new(posts.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("  Scoring [{bar:30}] {pos}/{len} ({eta})") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let score = |(index, post): (usize, &S)| {
        let scored = score_one(vectorizer, lexicon, options.formula, index, post.as_ref());
        pb.inc(1);
        scored
    };

    let mut scored: Vec<ScoredPost> = if options.parallel {
        posts.par_iter().enumerate().map(score).collect::<Result<_>>()?
    } else {
        posts.iter().enumerate().map(score).collect::<Result<_>>()?
    };
    pb.finish_and_clear();

    scored.sort_by_key(|p| p.index);
    Ok(scored)
}

/// Vectorize the lexicon and score the whole corpus.
pub fn run<P, W>(
    posts: &[P],
    lexicon_words: &[W],
    vectorizer: &Vectorizer,
    options: ScanOptions,
) -> Result<ScanReport>
where
    P: AsRef<str> + Sync,
    W: AsRef<str>,
{
    let lexicon = lexicon_vector(vectorizer, lexicon_words);
    info!(
        words = lexicon_words.len(),
        terms = lexicon.len(),
        "Built lexicon vector"
    );

    let posts = score_corpus(posts, &lexicon, vectorizer, options)?;
    info!(
        posts = posts.len(),
        formula = %options.formula,
        parallel = options.parallel,
        "Scored corpus"
    );

    Ok(ScanReport {
        formula: options.formula,
        lexicon_terms: lexicon.len(),
        posts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn vectorizer() -> Vectorizer {
        Vectorizer::builder()
            .stopwords(["la", "el", "de", "a"])
            .emoticons(NONE)
            .emojis(NONE)
            .build()
            .unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let v = vectorizer();
        let posts = vec![
            "te voy a matar",
            "qué bonito día de sol",
            "eres una zorra y te voy a pegar",
            "mañana partido de fútbol",
        ];
        let lexicon = ["matar", "pegar", "zorra", "golpear"];

        let seq = run(&posts, &lexicon, &v, ScanOptions::default()).unwrap();
        let par = run(
            &posts,
            &lexicon,
            &v,
            ScanOptions {
                parallel: true,
                ..Default::default()
            },
        )
        .unwrap();

        let seq_scores: Vec<(usize, f64)> = seq.posts.iter().map(|p| (p.index, p.score)).collect();
        let par_scores: Vec<(usize, f64)> = par.posts.iter().map(|p| (p.index, p.score)).collect();
        assert_eq!(seq_scores, par_scores);
        assert_eq!(seq.lexicon_terms, 4);
    }

    #[test]
    fn test_ranked_puts_matches_first() {
        let v = vectorizer();
        let posts = vec!["buenos días", "te voy a matar"];
        let report = run(&posts, &["matar"], &v, ScanOptions::default()).unwrap();
        let ranked = report.ranked();
        assert_eq!(ranked[0].index, 1);
        assert!(ranked[0].score > 0.0);
        assert_eq!(ranked[1].score, 0.0);
        assert!(ranked[1].score.is_sign_positive());
    }

    #[test]
    fn test_stopword_only_post_aborts() {
        let v = vectorizer();
        let posts = vec!["matar", "el la de"];
        let err = run(&posts, &["matar"], &v, ScanOptions::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyVector { side: "first" }));
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let v = vectorizer();
        let err = run(&["hola"], &NONE, &v, ScanOptions::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyVector { side: "lexicon" }));
    }
}
