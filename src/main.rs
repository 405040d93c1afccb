//! make-rss: a terminal feed reader and a feed generator for sites without
//! one.
//!
//! ## Architecture overview
//!
//! ```text
//!  read:      HttpFeedSource ──► scan ──► FeedStore ──► ui
//!              (source/)        (scan/)   (store.rs)   (ui.rs)
//!                  ▲                          ▲
//!             RefreshClock               handle_key_event()
//!              (poll.rs)                   (input.rs)
//!
//!  generate:  fetch_page ──► Scraper ──► publish::serialize ──► feed.xml
//!                            (scrape/ + segment/)
//! ```
//!
//! * **`scan`**: string-search RSS/Atom scanner used by the reader.
//! * **`segment`**: byline removal and title/teaser heuristics.
//! * **`scrape`**: turns anchors on a listing page into feed items.
//! * **`publish`**: RSS 2.0 serializer for the generator.
//! * **`source`**: the `DataSource` trait, `FeedItem` and HTTP transport.
//! * **`app` / `store` / `poll`**: reader state, article list, refresh timer.
//! * **`ui` / `input`**: rendering and key handling.
//! * **`main`**: wires everything together and runs the reader loop or a
//!   single generator pass.

mod app;
mod cli;
mod error;
mod input;
mod poll;
mod publish;
mod scan;
mod scrape;
mod segment;
mod source;
mod store;
mod telemetry;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use url::Url;

use app::App;
use cli::{Cli, Command, GenerateArgs, ReadArgs};
use poll::RefreshClock;
use scrape::{Scraper, SiteProfile};
use source::{fetch_page, DataSource, HttpFeedSource};

/// Input poll timeout; doubles as the loop's idle sleep.
const TICK: Duration = Duration::from_millis(50);
/// Redraw at least this often so the countdown keeps moving.
const REDRAW_EVERY: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// RAII terminal guard, restored on drop and on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, app: &App) -> Result<()> {
        let now = Instant::now();
        self.terminal.draw(|f| ui::draw(app, f, now))?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Read(args) => run_reader(args),
        Command::Generate(args) => run_generator(args),
    }
}

/// Poll, render and handle keys until the user quits.
///
/// Everything happens on this thread: a due refresh blocks the loop until
/// the request returns or times out.
fn run_reader(args: ReadArgs) -> Result<()> {
    if let Some(path) = &args.log_file {
        telemetry::init_file(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
    }
    install_panic_hook();

    let source = HttpFeedSource::new(
        &args.url,
        args.max_items,
        Duration::from_secs(args.timeout_secs),
    )?;
    info!(url = %args.url, refresh_secs = args.refresh_secs, "Reader starting");

    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(RefreshClock::new(Duration::from_secs(args.refresh_secs)));
    let mut last_draw: Option<Instant> = None;

    loop {
        // 1. Refresh when due (blocking)
        if app.clock.is_due(Instant::now()) {
            app.status = format!("Fetching {}…", source.name());
            guard.draw(&app)?;
            let result = source.fetch();
            app.apply_fetch(result, Instant::now());
            last_draw = None;
        }

        // 2. Handle input
        let mut dirty = false;
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
                dirty = true;
            }
        }

        if app.quit {
            break;
        }

        // 3. Render on input, and once a second for the countdown
        if dirty || last_draw.map_or(true, |t| t.elapsed() >= REDRAW_EVERY) {
            guard.draw(&app)?;
            last_draw = Some(Instant::now());
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}

/// Fetch the listing once, scrape it and write the feed.
///
/// A failed download aborts before anything is written.  A page without
/// matching articles still produces a valid, empty feed.
fn run_generator(args: GenerateArgs) -> Result<()> {
    telemetry::init_stderr();

    let base = Url::parse(&args.site_url)
        .with_context(|| format!("invalid SITE_URL {}", args.site_url))?;
    let scraper = Scraper::new(SiteProfile::make_magazin())?;

    let html = fetch_page(&args.site_url, Duration::from_secs(args.timeout_secs))?;
    let now = Utc::now();
    let items = scraper.scrape(&html, &base, args.max_items, now);
    if items.is_empty() {
        warn!(site = %args.site_url, "No articles found; writing an empty feed");
    }

    let bytes = publish::serialize(&args.channel_meta(), &items, now)?;
    publish::write_feed(&args.output, &bytes)?;
    Ok(())
}
