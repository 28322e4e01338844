//! Show command - print one page to stdout.

use crate::app::App;
use folio_core::{Navigator, ThemeFilter};

/// Run the show command.
///
/// Optional theme/search narrowing is applied first, then the requested
/// page number is resolved with the navigator's clamp-and-fallback rules,
/// so `show 999` prints the last page rather than failing.
pub fn run(
    app: App,
    page: i64,
    theme: Option<String>,
    search: Option<String>,
) -> anyhow::Result<()> {
    let mut nav = Navigator::new(app.book.clone());

    if let Some(label) = theme {
        nav.set_theme(ThemeFilter::Theme(label));
    }
    if let Some(term) = search {
        nav.set_search(term);
    }
    nav.jump_to(page);

    let Some(record) = nav.displayed() else {
        eprintln!("No page matches the given filters.");
        return Ok(());
    };

    let total = app.book.total_pages();

    println!(
        "पृष्ठ {} / {} · {} · {:.0}%",
        record.number,
        total,
        record.theme,
        nav.progress()
    );
    println!();
    println!("{}", record.title);
    println!("{}", "=".repeat(record.title.chars().count().max(8)));
    println!();
    println!("{}", record.summary);

    for paragraph in &record.paragraphs {
        println!();
        println!("{}", paragraph);
    }

    if !record.quote.is_empty() {
        println!();
        println!("  \u{201c}{}\u{201d}", record.quote);
    }

    if app.config.ui.show_insights && !record.insights.is_empty() {
        println!();
        for insight in &record.insights {
            println!("  • {}", insight);
        }
    }

    if app.config.ui.show_metadata {
        println!();
        println!(
            "{} · {} · {} · {}",
            record.year, record.location, record.event, record.mentor
        );
    }

    if !record.call_to_action.is_empty() {
        println!();
        println!("{}", record.call_to_action);
    }

    Ok(())
}
