//! Themes command - list the book's themes with page counts.

use crate::app::App;

/// Run the themes command.
pub fn run(app: App) -> anyhow::Result<()> {
    let themes = app.book.themes();

    if themes.is_empty() {
        println!("The book has no pages.");
        return Ok(());
    }

    println!("Themes ({}):", themes.len());
    for theme in themes {
        println!(
            "  {:<16} {} pages",
            theme,
            app.book.theme_page_count(theme)
        );
    }

    Ok(())
}
