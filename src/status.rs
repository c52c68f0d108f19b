// System status display: shows configured resource files and whether they exist.

use std::path::Path;

use colored::Colorize;

use crate::config::Config;

/// Display configuration and resource status to the terminal.
pub fn show(config: &Config) {
    println!("Data directory: {}", config.data_dir.display());
    println!("Stemming language: {}", config.language);
    println!("Similarity formula: {}", config.formula);
    println!();

    for (label, path) in [
        ("Dataset", &config.dataset_path),
        ("Dictionary", &config.dictionary_path),
        ("Stopwords", &config.stopwords_path),
        ("Emoticons", &config.emoticons_path),
        ("Emojis", &config.emojis_path),
    ] {
        println!("{:<11} {}", format!("{label}:"), describe(path));
    }

    if !config.stopwords_path.exists() {
        println!(
            "\n{}",
            format!(
                "No stopword file; the bundled {} list will be used.",
                config.language
            )
            .dimmed()
        );
    }
}

fn describe(path: &Path) -> String {
    match std::fs::metadata(path) {
        Ok(meta) => format!("{} ({})", path.display(), format_bytes(meta.len())),
        Err(_) => format!("{} {}", path.display(), "(missing)".yellow()),
    }
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
