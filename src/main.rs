use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use garden_doctor::data::duration::format_duration;
use garden_doctor::ui::{self, Theme};
use garden_doctor::{
    events, score, App, DataSource, FileSource, Gauge, HttpSensorClient, PollLoop, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "garden-doctor")]
#[command(about = "Terminal dashboard for a garden moisture, humidity and temperature sensor")]
struct Args {
    /// Sensor endpoint URL (overrides config)
    #[arg(short, long, conflicts_with = "file")]
    endpoint: Option<String>,

    /// Poll interval (e.g. "5s", "500ms"; overrides config)
    #[arg(short, long)]
    interval: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// View to show on start
    #[arg(long, default_value = "dashboardView")]
    view: String,

    /// Log file (overrides config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Replay readings from a JSON file instead of polling the sensor
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Fetch a single reading, print its score as JSON and exit
    #[arg(long, conflicts_with = "file")]
    once: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint.clone() {
        settings.endpoint = endpoint;
    }
    if let Some(interval) = args.interval.clone() {
        settings.interval = interval;
    }
    if let Some(log_file) = args.log_file.clone() {
        settings.log_file = log_file;
    }

    init_logging(&settings.log_file)?;

    let interval = settings.poll_interval()?;
    let timeout = settings.request_timeout()?;
    let client = HttpSensorClient::new(settings.endpoint.clone(), timeout)
        .context("failed to build HTTP client")?;

    // Handle one-shot mode (non-interactive)
    if args.once {
        return fetch_once(&client);
    }

    // Build a tokio runtime for the poll loop; the TUI stays on this thread
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let source: Box<dyn DataSource> = match args.file {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => Box::new(PollLoop::spawn(Arc::new(client), interval)),
    };

    info!(
        source = source.description(),
        interval = %format_duration(interval),
        "Starting garden-doctor"
    );

    let theme = Theme::auto_detect();
    let mut app = App::new(source, settings.optimum, settings.profile);
    app.theme = theme;
    app.show_view(&args.view);

    run_tui(app)
}

/// Send tracing output to `path`; the terminal belongs to the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Fetch one reading and print the resulting gauge.
fn fetch_once(client: &HttpSensorClient) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let reading = rt.block_on(client.fetch_reading());
    let reading = reading.context("failed to fetch sensor reading")?;

    let mut gauge = Gauge::default();
    gauge.update(score(&reading));

    let output = serde_json::json!({
        "endpoint": client.endpoint(),
        "reading": reading,
        "score": gauge.score,
        "angle": gauge.angle,
        "status": gauge.status.label(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Apply whatever the poll loop has finished since the last frame
        app.reload_data();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                // Redrawn on the next iteration
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    Ok(())
}
