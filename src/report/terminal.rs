use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::models::{inventory_view, GradleProject};

/// Render the scan summary; with `verbose`, list every extracted dependency.
pub fn render(
    projects: &[GradleProject],
    path: &Path,
    failed_files: usize,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let total_deps: usize = projects.iter().map(|p| p.dependencies.len()).sum();
    let distinct = inventory_view(projects).len();

    if quiet {
        println!(
            "Projects: {}  Dependencies: {}  Distinct: {}  Failed: {}",
            projects.len(),
            total_deps,
            distinct,
            if failed_files > 0 {
                failed_files.to_string().red().to_string()
            } else {
                failed_files.to_string()
            }
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "gradle-miner".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanned: {}\n", path.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Projects extracted  : {}", projects.len())
    );
    println!(
        " │  {:<48} │",
        format!("Dependencies        : {}", total_deps)
    );
    println!(
        " │  {:<48} │",
        format!("Distinct coordinates: {}", distinct)
    );
    println!(
        " │  {:<48} │",
        format!("Unparsable scripts  : {}", failed_files)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if verbose && total_deps > 0 {
        render_table(projects);
        println!();
    }

    Ok(())
}

fn render_table(projects: &[GradleProject]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Project").add_attribute(Attribute::Bold),
            Cell::new("Group").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Scope").add_attribute(Attribute::Bold),
        ]);

    for project in projects {
        for dep in &project.dependencies {
            table.add_row(vec![
                Cell::new(project.path.display().to_string()),
                Cell::new(dep.group.as_deref().unwrap_or("-")),
                Cell::new(dep.name.as_deref().unwrap_or("-")),
                Cell::new(dep.version.as_deref().unwrap_or("-")),
                Cell::new(&dep.scope),
            ]);
        }
    }

    println!("{}", table);
}
