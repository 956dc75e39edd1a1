//! `gradle-miner` — mine dependency declarations from Gradle build scripts.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load scan config ([`config::load_config`]).
//! 3. Discover build scripts under the project root ([`discover`]).
//! 4. Parse each script into a syntax tree ([`parser`]); unparsable scripts
//!    are reported and excluded, the run continues.
//! 5. Extract dependencies and project coordinates per script ([`extractor`]).
//! 6. Export `gradle-model.json` and `il-deps.json` ([`report::json`]).
//! 7. Render the terminal summary ([`report::terminal`]).
//! 8. Exit `0` (scan completed) or `1` (no build scripts found).

mod ast;
mod cli;
mod config;
mod discover;
mod error;
mod extractor;
mod models;
mod parser;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::Cli;
use config::load_config;
use discover::{find_build_scripts, relative_to};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve project path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    // Load scan config
    let config = load_config(&path, cli.config.as_deref())?;

    // Discover build scripts
    let scripts = find_build_scripts(&path, &config.scan);

    if scripts.is_empty() {
        eprintln!("No build scripts found in {}", path.display());
        std::process::exit(1);
    }

    if !cli.quiet {
        eprintln!(
            "  {} {} build script{}",
            "→".cyan(),
            scripts.len(),
            if scripts.len() == 1 { "" } else { "s" }
        );
    }

    let pb = if !cli.quiet {
        let pb = ProgressBar::new(scripts.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Parse and extract per file; failures stay isolated to their file.
    let mut projects = Vec::new();
    let mut failed_files = 0usize;

    for script in &scripts {
        let rel = relative_to(script, &path);

        match mine_script(script, &rel) {
            Ok(Some(project)) => projects.push(project),
            Ok(None) => {} // blank script
            Err(message) => {
                eprintln!(
                    "  {} skipping {}: {}",
                    "⚠".yellow(),
                    rel.display(),
                    message
                );
                failed_files += 1;
            }
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // Export the JSON inventory
    let out_dir = cli.out.unwrap_or(config.output.dir);
    let (model_path, inventory_path) = report::json::write(&projects, &out_dir)?;

    if !cli.quiet {
        eprintln!("  {} exported {}", "→".cyan(), model_path.display());
        eprintln!("  {} exported {}", "→".cyan(), inventory_path.display());
    }

    report::terminal::render(&projects, &path, failed_files, cli.verbose, cli.quiet)?;

    Ok(())
}

/// Read, parse, and extract one build script. The error message covers both
/// I/O and parse failures; either excludes just this file from the results.
fn mine_script(
    script: &std::path::Path,
    rel: &std::path::Path,
) -> Result<Option<models::GradleProject>, String> {
    let text = std::fs::read_to_string(script).map_err(|e| e.to_string())?;

    if text.trim().is_empty() {
        return Ok(None);
    }

    let tree = parser::parse(&text).map_err(|e| e.to_string())?;
    Ok(extractor::extract(&tree, rel))
}
