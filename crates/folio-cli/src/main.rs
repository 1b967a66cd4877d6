//! Folio - a terminal book reader
//!
//! Opens a plain-text book in a scrollable, styled reading view and picks up
//! where you last left off via the reading-position cache.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_core::paths;

use folio::tui::themes::THEME_REGISTRY;
use folio::tui::App;

/// Folio - terminal book reader
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Read plain-text books in the terminal", long_about = None)]
struct Cli {
    /// Book file to open (plain text)
    book: Option<PathBuf>,

    /// Theme name
    #[arg(short, long, default_value = "folio")]
    theme: String,

    /// Reading-position cache file (defaults to ~/.folio/cache.json)
    #[arg(long)]
    cache: Option<PathBuf>,

    /// List available themes and exit
    #[arg(long)]
    themes: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.themes {
        for name in THEME_REGISTRY.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(book) = cli.book else {
        anyhow::bail!(
            "no book given; try `folio <book.txt>` (books live in {} by default)",
            paths::default_books_dir().display()
        );
    };

    let theme = THEME_REGISTRY.get_or_default(&cli.theme).clone();
    let cache = cli.cache.unwrap_or_else(paths::default_cache_file);

    tracing::info!(book = %book.display(), theme = %theme.name, "starting reader");
    App::new(book, theme, cache).run()
}
