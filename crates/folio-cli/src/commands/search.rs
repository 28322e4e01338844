//! Search command - list pages matching a query.

use crate::app::App;
use crate::OutputFormat;
use folio_core::{parse_query, ThemeFilter};

/// Run the search command.
pub fn run(
    app: App,
    query_string: &str,
    theme: Option<String>,
    limit: usize,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let mut query = parse_query(query_string)?;

    // An explicit --theme wins over a theme: token inside the query
    if let Some(label) = theme {
        query = query.with_theme(ThemeFilter::Theme(label));
    }

    let matches = query.filter(&app.book);
    let shown = &matches[..matches.len().min(limit)];

    match output {
        OutputFormat::Text => {
            for record in shown {
                println!(
                    "{:>4}  {:<12}  {}",
                    record.number, record.theme, record.title
                );
            }

            eprintln!();
            if matches.len() > shown.len() {
                eprintln!(
                    "Found {} pages (showing first {})",
                    matches.len(),
                    shown.len()
                );
            } else {
                eprintln!("Found {} pages", matches.len());
            }
        }
        OutputFormat::Json => {
            let json_results: Vec<serde_json::Value> = shown
                .iter()
                .map(|record| {
                    serde_json::json!({
                        "number": record.number,
                        "theme": record.theme,
                        "title": record.title,
                        "summary": record.summary,
                        "year": record.year,
                        "location": record.location,
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&json_results)?);
        }
    }

    Ok(())
}
