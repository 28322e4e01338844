//! Interactive TUI (Terminal User Interface) reader for Folio.
//!
//! Provides a book-reading interface with:
//! - Live search as you type
//! - Theme cycling and page navigation with clamped jumps
//! - A reading-progress gauge and an explicit empty-results state

use crate::app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{Navigator, ThemeFilter};
use ratatui::{prelude::*, widgets::*};
use std::io;
use std::time::Duration;

/// TUI application state.
struct TuiApp {
    /// Shared application state
    app: App,

    /// Reading position and filters
    nav: Navigator,

    /// Theme labels in first-appearance order, for cycling
    themes: Vec<String>,

    /// Digits being collected for a jump (None = not jumping)
    jump_buffer: Option<String>,

    /// Content scroll offset within the displayed page
    scroll: u16,

    /// Whether we should quit
    should_quit: bool,
}

impl TuiApp {
    fn new(app: App) -> Self {
        let themes: Vec<String> = app.book.themes().iter().map(|t| t.to_string()).collect();
        let nav = Navigator::new(app.book.clone());

        TuiApp {
            app,
            nav,
            themes,
            jump_buffer: None,
            scroll: 0,
            should_quit: false,
        }
    }

    /// Handle a typed character: jump digits while jumping, search
    /// input otherwise.
    fn on_char(&mut self, c: char) {
        if let Some(ref mut buffer) = self.jump_buffer {
            if c.is_ascii_digit() {
                buffer.push(c);
            }
            return;
        }

        let mut term = self.nav.term().to_string();
        term.push(c);
        self.nav.set_search(term);
        self.scroll = 0;
    }

    /// Handle backspace in both input modes.
    fn on_backspace(&mut self) {
        if let Some(ref mut buffer) = self.jump_buffer {
            buffer.pop();
            return;
        }

        let mut term = self.nav.term().to_string();
        term.pop();
        self.nav.set_search(term);
        self.scroll = 0;
    }

    /// Apply the collected jump digits, if any parse.
    fn commit_jump(&mut self) {
        if let Some(buffer) = self.jump_buffer.take() {
            if let Ok(page) = buffer.parse::<i64>() {
                self.nav.jump_to(page);
                self.scroll = 0;
            }
        }
    }

    /// Cycle the theme filter: All, then each theme in order, then All.
    fn cycle_theme(&mut self) {
        let next = match self.nav.theme() {
            ThemeFilter::All => self.themes.first().cloned().map(ThemeFilter::Theme),
            ThemeFilter::Theme(current) => self
                .themes
                .iter()
                .position(|t| t == current)
                .and_then(|i| self.themes.get(i + 1))
                .cloned()
                .map(ThemeFilter::Theme),
        };

        self.nav.set_theme(next.unwrap_or(ThemeFilter::All));
        self.scroll = 0;
    }

    fn next_page(&mut self) {
        self.nav.next();
        self.scroll = 0;
    }

    fn previous_page(&mut self) {
        self.nav.previous();
        self.scroll = 0;
    }

    /// Jump to the first page of the filtered subset.
    fn first_visible(&mut self) {
        self.nav.jump_to(1);
        self.scroll = 0;
    }

    /// Jump to the last page of the filtered subset.
    fn last_visible(&mut self) {
        if let Some(last) = self.nav.visible_pages().last().map(|p| p.number) {
            self.nav.jump_to(i64::from(last.as_u32()));
            self.scroll = 0;
        }
    }

    fn reset(&mut self) {
        self.nav.reset();
        self.jump_buffer = None;
        self.scroll = 0;
    }
}

/// Run the TUI application.
pub fn run(app: App) -> anyhow::Result<()> {
    if app.book.is_empty() {
        eprintln!("The book has no pages.");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut tui_app = TuiApp::new(app);

    // Main loop
    let result = run_loop(&mut terminal, &mut tui_app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => {
                            // Esc cancels an active jump before it quits
                            if app.jump_buffer.take().is_none() {
                                app.should_quit = true;
                            }
                        }
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.jump_buffer = Some(String::new());
                        }
                        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.reset();
                        }
                        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.cycle_theme();
                        }
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.on_char(c);
                        }
                        KeyCode::Backspace => {
                            app.on_backspace();
                        }
                        KeyCode::Enter => {
                            app.commit_jump();
                        }
                        KeyCode::Tab => {
                            app.cycle_theme();
                        }
                        KeyCode::Left | KeyCode::PageUp => {
                            app.previous_page();
                        }
                        KeyCode::Right | KeyCode::PageDown => {
                            app.next_page();
                        }
                        KeyCode::Up => {
                            app.scroll = app.scroll.saturating_sub(1);
                        }
                        KeyCode::Down => {
                            app.scroll = app.scroll.saturating_add(1);
                        }
                        KeyCode::Home => {
                            app.first_visible();
                        }
                        KeyCode::End => {
                            app.last_visible();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

mod ui {
    use super::*;

    /// Draw the UI.
    pub fn draw(f: &mut Frame, app: &mut TuiApp) {
        let show_progress = app.app.config.ui.show_progress;

        let constraints = if show_progress {
            vec![
                Constraint::Length(3), // Search box
                Constraint::Min(10),   // Page content
                Constraint::Length(1), // Progress gauge
                Constraint::Length(2), // Status bar
            ]
        } else {
            vec![
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(2),
            ]
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(f.area());

        draw_search_box(f, app, chunks[0]);
        draw_page(f, app, chunks[1]);

        if show_progress {
            draw_progress(f, app, chunks[2]);
            draw_status_bar(f, app, chunks[3]);
        } else {
            draw_status_bar(f, app, chunks[2]);
        }
    }

    /// Draw the search input box (or the jump prompt while jumping).
    fn draw_search_box(f: &mut Frame, app: &TuiApp, area: Rect) {
        let (title, text) = match app.jump_buffer {
            Some(ref buffer) => (" Jump to page (Enter to go, Esc to cancel) ", buffer.as_str()),
            None => (" Search (type to filter) ", app.nav.term()),
        };

        let input = Paragraph::new(text)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(input, area);

        // Show cursor
        f.set_cursor_position(Position::new(
            area.x + text.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }

    /// Draw the displayed page, or the empty-results state.
    fn draw_page(f: &mut Frame, app: &TuiApp, area: Rect) {
        let total = app.app.book.total_pages();

        let Some(page) = app.nav.displayed() else {
            let empty = Paragraph::new(
                "\nNo pages match the current filters.\n\nChange the search term, cycle the theme with Tab, or press Ctrl+R to reset.",
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Reader "));
            f.render_widget(empty, area);
            return;
        };

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            page.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            page.summary.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )));

        for paragraph in &page.paragraphs {
            lines.push(Line::default());
            lines.push(Line::from(paragraph.clone()));
        }

        if !page.quote.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", page.quote),
                Style::default().fg(Color::Green),
            )));
        }

        if app.app.config.ui.show_insights && !page.insights.is_empty() {
            lines.push(Line::default());
            for insight in &page.insights {
                lines.push(Line::from(format!("  • {}", insight)));
            }
        }

        if app.app.config.ui.show_metadata {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "{} · {} · {} · {}",
                    page.year, page.location, page.event, page.mentor
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        if !page.call_to_action.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                page.call_to_action.clone(),
                Style::default().fg(Color::Cyan),
            )));
        }

        let title = format!(" पृष्ठ {} / {} · {} ", page.number, total, page.theme);

        let content = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(content, area);
    }

    /// Draw the reading-progress gauge.
    fn draw_progress(f: &mut Frame, app: &TuiApp, area: Rect) {
        let progress = app.nav.progress();

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0}%", progress));

        f.render_widget(gauge, area);
    }

    /// Draw the status bar.
    fn draw_status_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
        let theme_label = match app.nav.theme() {
            ThemeFilter::All => "All",
            ThemeFilter::Theme(label) => label.as_str(),
        };

        let status = format!(
            "{} of {} pages | Theme: {} | ←→:Page Tab:Theme Ctrl+G:Jump Ctrl+R:Reset Esc:Quit",
            app.nav.visible_count(),
            app.app.book.total_pages(),
            theme_label
        );

        let status_bar = Paragraph::new(status).style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
