//! Info command - show book metadata and statistics.

use crate::app::App;

/// Run the info command.
pub fn run(app: App) -> anyhow::Result<()> {
    let meta = app.book.metadata();
    let stats = app.book.stats();

    println!("{}", meta.title);
    println!("{}", "=".repeat(meta.title.chars().count().max(8)));
    println!();

    if !meta.subtitle.is_empty() {
        println!("  Subtitle:     {}", meta.subtitle);
    }
    if !meta.author.is_empty() {
        println!("  Author:       {}", meta.author);
    }
    if !meta.dedication.is_empty() {
        println!("  Dedication:   {}", meta.dedication);
    }
    if !meta.version.is_empty() {
        println!("  Edition:      {} · {}", meta.version, meta.last_updated);
    }
    if !meta.compiled_by.is_empty() {
        println!("  Compiled by:  {}", meta.compiled_by);
    }

    println!();
    println!("Summary:");
    println!("  Total pages:      {}", stats.total_pages);
    println!("  Themes:           {}", stats.theme_count);
    println!("  Paragraphs:       {}", stats.total_paragraphs);
    println!("  Insights:         {}", stats.total_insights);

    println!();
    println!("Book file: {}", app.source_description);

    Ok(())
}
