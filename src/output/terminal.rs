// Colored terminal output for batch summaries and word sets.
//
// main.rs display calls delegate here so the formatting lives in one place.

use std::collections::BTreeSet;

use colored::Colorize;

use crate::pipeline::batch::BatchReport;

/// Display the end-of-run summary: written albums, then failures.
pub fn display_batch_report(report: &BatchReport) {
    println!(
        "\n{}",
        format!(
            "=== Batch Summary ({} written, {} failed) ===",
            report.written.len(),
            report.failures.len()
        )
        .bold()
    );

    if report.written.is_empty() && report.failures.is_empty() {
        println!("No album directories found. Expected subdirectories named \"<Artist> - <Album>\".");
        return;
    }

    if !report.written.is_empty() {
        println!();
        println!(
            "  {:<48} {:>6}  {:>7}",
            "Album".dimmed(),
            "Songs".dimmed(),
            "Unique".dimmed(),
        );
        println!("  {}", "-".repeat(64).dimmed());

        for album in &report.written {
            println!(
                "  {:<48} {:>6}  {:>7}",
                super::truncate_chars(&album.directory, 45),
                album.song_count,
                album.unique_word_count,
            );
        }
    }

    if !report.failures.is_empty() {
        println!();
        for failure in &report.failures {
            println!(
                "  {} {}: {}",
                "!!".red().bold(),
                failure.directory,
                format!("{:#}", failure.error).red()
            );
        }
    }

    if report.skipped > 0 {
        println!(
            "\n  {}",
            format!("{} other directories skipped", report.skipped).dimmed()
        );
    }
}

/// Display a single song's normalized word set.
pub fn display_word_set(title: &str, words: &BTreeSet<String>) {
    println!(
        "\n{}",
        format!("=== {} ({} words) ===", title, words.len()).bold()
    );

    if words.is_empty() {
        println!("  {}", "(no dictionary words of 5+ letters)".dimmed());
        return;
    }

    let joined = words.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    println!("  {}", joined);
}
