use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use deviger::config::Config;
use deviger::corpus::{self, loader, Resources};
use deviger::pipeline::scan::{self, ScanOptions};
use deviger::text::stemmer::StemLanguage;

/// DeViGeR: gender-based violence language detection for social media.
///
/// Compares each post's term-frequency profile with a reference lexicon
/// and reports the similarity. Scores are reported, never thresholded.
#[derive(Parser)]
#[command(name = "deviger", version, about)]
struct Cli {
    /// Stemming language (overrides DEVIGER_LANGUAGE)
    #[arg(long, global = true)]
    language: Option<StemLanguage>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every post in the dataset against the lexicon (the default)
    Scan {
        /// Dataset file (overrides DEVIGER_DATASET)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// How many of the highest-scoring posts to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,

        /// Vectorize posts in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Print the term-frequency vector of a text as JSON
    Vector {
        /// The text to vectorize
        text: String,
    },

    /// Print a text after placeholder substitution and cleanup
    Preprocess {
        /// The text to preprocess
        text: String,
    },

    /// Score the similarity between two texts
    Compare {
        first: String,
        second: String,
    },

    /// Show configured resource files and whether they exist
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("deviger=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(language) = cli.language {
        config.language = language;
    }

    let command = cli.command.unwrap_or(Commands::Scan {
        dataset: None,
        top: 20,
        parallel: false,
    });

    match command {
        Commands::Scan {
            dataset,
            top,
            parallel,
        } => {
            deviger::output::terminal::display_banner();

            if let Some(dataset) = dataset {
                config.dataset_path = dataset;
            }
            config.require_resources()?;
            config.require_dataset()?;

            println!("Loading resources from {}...", config.data_dir.display());
            let resources = Resources::load(&config.resource_paths(), config.language)?;
            let vectorizer = resources.vectorizer(config.language)?;

            println!("Loading dataset {}...", config.dataset_path.display());
            let posts = loader::load_dataset(&config.dataset_path)?;
            info!(posts = posts.len(), "Loaded dataset");

            let report = scan::run(
                &posts,
                &resources.dictionary,
                &vectorizer,
                ScanOptions {
                    formula: config.formula,
                    parallel,
                    progress: true,
                },
            )?;

            deviger::output::terminal::display_scan_report(&report, top);
        }

        Commands::Vector { text } => {
            let vectorizer = load_vectorizer(&config)?;
            let vector = vectorizer.term_frequency(&text);
            println!("{}", serde_json::to_string_pretty(&vector)?);
        }

        Commands::Preprocess { text } => {
            let vectorizer = load_vectorizer(&config)?;
            println!("{}", vectorizer.preprocess(&text));
        }

        Commands::Compare { first, second } => {
            let vectorizer = load_vectorizer(&config)?;
            let a = vectorizer.term_frequency(&first);
            let b = vectorizer.term_frequency(&second);

            println!("{}", "First text:".bold());
            deviger::output::terminal::display_term_vector(&a);
            println!("{}", "Second text:".bold());
            deviger::output::terminal::display_term_vector(&b);

            let score = config.formula.score(&a, &b)?;
            println!("\nSimilarity ({}): {score}", config.formula);
        }

        Commands::Status => {
            deviger::status::show(&config);
        }
    }

    Ok(())
}

/// Build a vectorizer from the configured word lists. The lexicon itself
/// is not needed for single-text commands.
fn load_vectorizer(config: &Config) -> Result<deviger::Vectorizer> {
    let stopwords = corpus::load_stopwords(&config.stopwords_path, config.language)?;
    let emoticons = optional_list(&config.emoticons_path, loader::load_lines)?;
    let emojis = optional_list(&config.emojis_path, loader::load_emojis)?;

    let resources = Resources {
        dictionary: Vec::new(),
        stopwords,
        emoticons,
        emojis,
    };
    Ok(resources.vectorizer(config.language)?)
}

/// Load a list if its file exists; an absent file means an empty list.
fn optional_list(
    path: &std::path::Path,
    load: fn(&std::path::Path) -> deviger::Result<Vec<String>>,
) -> Result<Vec<String>> {
    if path.exists() {
        Ok(load(path)?)
    } else {
        warn!(path = %path.display(), "List not found, treating it as empty");
        Ok(Vec::new())
    }
}
