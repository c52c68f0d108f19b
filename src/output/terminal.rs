// Colored terminal output for scan reports and term vectors.
//
// This module handles all terminal-specific formatting. The main.rs
// command handlers delegate here.

use colored::Colorize;

use super::truncate_chars;
use crate::pipeline::scan::{ScanReport, ScoredPost};
use crate::text::vectorizer::TermVector;

/// Program banner, printed before any command runs a scan.
pub fn display_banner() {
    println!("{}", "DeViGeR".bold());
}

/// Display the posts of a scan, highest similarity first.
///
/// Scores are shown as-is; nothing here decides whether a post is violent.
pub fn display_scan_report(report: &ScanReport, top: usize) {
    if report.posts.is_empty() {
        println!("No posts in the dataset.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Similarity to lexicon ({} posts, {} lexicon terms, {} formula) ===",
            report.posts.len(),
            report.lexicon_terms,
            report.formula
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:>6}  {:>12}  {:>5}  {}",
        "Rank".dimmed(),
        "Post".dimmed(),
        "Score".dimmed(),
        "Terms".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    let ranked = report.ranked();
    for (i, post) in ranked.iter().take(top).enumerate() {
        println!(
            "  {:>4}. {:>6}  {}  {:>5}  {}",
            i + 1,
            post.index,
            colorize_score(post),
            post.term_count,
            truncate_chars(&post.text, 60),
        );
    }

    if ranked.len() > top {
        println!("  {}", format!("... {} more", ranked.len() - top).dimmed());
    }

    println!();

    let sharing = report.posts.iter().filter(|p| p.score > 0.0).count();
    println!(
        "Posts sharing at least one term with the lexicon: {} of {}",
        sharing,
        report.posts.len()
    );
}

fn colorize_score(post: &ScoredPost) -> colored::ColoredString {
    let text = format!("{:>12.6e}", post.score);
    if post.score > 0.0 {
        text.bold()
    } else {
        text.dimmed()
    }
}

/// Display a term vector as a ranked term list.
pub fn display_term_vector(vector: &TermVector) {
    if vector.is_empty() {
        println!("{}", "(no terms)".dimmed());
        return;
    }
    for (term, count) in vector.ranked() {
        println!("  {:>4}  {}", count, term);
    }
}
