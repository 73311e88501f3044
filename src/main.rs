use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use moonitor_dashboard::app::TITLE;
use moonitor_dashboard::render::html;
use moonitor_dashboard::ui::{self, Theme};
use moonitor_dashboard::{events, App, DashboardController, DashboardView, HttpApi, Loader, Settings};

#[derive(Parser, Debug)]
#[command(name = "moonitor")]
#[command(about = "Terminal dashboard for Moonitor trading-signal analysis")]
struct Args {
    /// Base URL of the Moonitor web server
    #[arg(short, long)]
    api_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Refresh interval in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Messages per page
    #[arg(long)]
    per_page: Option<u32>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Load the dashboard once, write it to an HTML file and exit
    #[arg(short, long)]
    export_html: Option<PathBuf>,
}

impl Args {
    /// Command-line flags take precedence over file and environment settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(ref url) = self.api_url {
            settings.api_url = url.clone();
        }
        if let Some(refresh) = self.refresh {
            settings.refresh_secs = refresh;
        }
        if let Some(per_page) = self.per_page {
            settings.per_page = per_page;
        }
        if let Some(ref path) = self.log_file {
            settings.log_file = path.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply(&mut settings);
    settings.validate()?;

    init_logging(&settings.log_file)?;
    info!(api_url = %settings.api_url, refresh_secs = settings.refresh_secs, "starting");

    let rt = Runtime::new()?;
    let api = HttpApi::builder()
        .endpoint(settings.api_url.clone())
        .timeout(settings.request_timeout())
        .build()?;
    let loader = Loader::new(Arc::new(api), rt.handle().clone());

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export_html {
        return export_to_file(&rt, loader, settings.per_page, export_path);
    }

    run_tui(loader, &settings)
}

/// Send tracing output to a file so it never draws over the terminal UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the TUI against the given loader
fn run_tui(loader: Loader, settings: &Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal. Request tasks that panic on
    // runtime workers are reported by the loader and the UI keeps running.
    let ui_thread = std::thread::current().id();
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        if std::thread::current().id() == ui_thread {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic);
        } else {
            error!(%panic, "background task panicked");
        }
    }));

    let mut app = App::new(loader, settings.per_page, settings.refresh_interval(), Theme::auto_detect());
    app.start();

    let result = run_app(&mut terminal, &mut app);
    if let Err(ref e) = result {
        error!(error = %e, "dashboard loop failed");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.tick();

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                // Terminal will redraw on next iteration
                _ => {}
            }
        }
    }

    info!("shutting down");
    Ok(())
}

/// Load every region once and write the dashboard to an HTML file
fn export_to_file(rt: &Runtime, mut loader: Loader, per_page: u32, export_path: &Path) -> Result<()> {
    let mut controller = DashboardController::new(per_page);
    loader.dispatch_all(controller.initial_load());

    rt.block_on(async {
        while let Some(outcome) = loader.recv().await {
            controller.apply(outcome);
        }
    });

    let view = DashboardView::build(&controller, Utc::now());
    let document = html::render_document(&view, TITLE)?;
    std::fs::write(export_path, document)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    info!(path = %export_path.display(), "exported dashboard snapshot");
    println!("Exported dashboard to: {}", export_path.display());
    Ok(())
}
