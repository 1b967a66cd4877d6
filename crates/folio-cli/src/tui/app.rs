//! Main TUI application
//!
//! Terminal setup/teardown and the event loop. Everything on screen goes
//! through the scrollable text panel.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};

use folio_core::constants::reader;
use folio_core::TextStyle;

use crate::tui::components::{ScrollableTextPanel, Tag};
use crate::tui::themes::Theme;

/// Poll interval for input events
const TICK: Duration = Duration::from_millis(250);

/// The reader application
pub struct App {
    panel: ScrollableTextPanel,
    theme: Theme,
    book_path: PathBuf,
    /// Cache key for the opened book (its path as given)
    book_key: String,
    /// Lines per page jump, captured from the last layout
    page_lines: usize,
    should_quit: bool,
}

impl App {
    pub fn new(book_path: PathBuf, theme: Theme, cache_path: PathBuf) -> Self {
        let book_key = book_path.to_string_lossy().into_owned();
        Self {
            panel: ScrollableTextPanel::new(TextStyle::default(), cache_path),
            theme,
            book_path,
            book_key,
            page_lines: 1,
            should_quit: false,
        }
    }

    /// Run the reader until the user quits
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        self.open_book();

        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Load the book and restore its last reading position.
    ///
    /// Every failure lands on screen through `show_error`; the reader itself
    /// keeps running.
    fn open_book(&mut self) {
        match self.load_book() {
            Ok(()) => {
                if let Err(err) = self.panel.restore_scroll_position(&self.book_key) {
                    tracing::warn!(error = %err, "could not restore reading position");
                    self.panel.show_error("CacheError", &err.to_string());
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, book = %self.book_key, "could not load book");
                self.panel.show_error("ReadError", &err.to_string());
            }
        }
    }

    fn load_book(&mut self) -> Result<()> {
        let contents = fs::read_to_string(&self.book_path)?;
        let title = self
            .book_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.book_key.clone());

        self.panel.reset();
        self.panel.append_text(&title, Some(Tag::H1), false, false);
        for paragraph in contents.split("\n\n") {
            let paragraph = paragraph.trim_end();
            if paragraph.is_empty() {
                continue;
            }
            self.panel.append_text("", None, false, true);
            self.panel.append_text(paragraph, None, false, true);
        }
        self.panel.refresh();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let page = self.page_lines.saturating_sub(reader::PAGE_OVERLAP).max(1) as isize;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.panel.scroll_lines(-(reader::SCROLL_STEP as isize));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.panel.scroll_lines(reader::SCROLL_STEP as isize);
            }
            KeyCode::PageUp => self.panel.scroll_lines(-page),
            KeyCode::PageDown | KeyCode::Char(' ') => self.panel.scroll_lines(page),
            KeyCode::Home | KeyCode::Char('g') => self.panel.scroll_to_start(),
            KeyCode::End | KeyCode::Char('G') => self.panel.scroll_to_end(),
            KeyCode::Char('c') => self.panel.toggle_center(),
            _ => {}
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        if let Some(bg) = self.theme.background_color {
            f.render_widget(Block::default().style(Style::default().bg(bg)), f.area());
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        self.page_lines = chunks[0].height as usize;
        self.panel.render(f, chunks[0], &self.theme);
        self.draw_status_line(f, chunks[1]);
    }

    fn draw_status_line(&self, f: &mut Frame, area: Rect) {
        let status = format!(
            " {}  ·  j/k scroll  ·  space page  ·  c center  ·  q quit",
            self.book_key
        );
        let line = Paragraph::new(Line::from(status)).style(self.theme.dim_style());
        f.render_widget(line, area);
    }
}
