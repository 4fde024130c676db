use mindwell::adapters::{FileTokenStore, ReqwestHttpClient};
use mindwell::api::ApiClient;
use mindwell::app::{App, AppMessage};
use mindwell::config::AppConfig;
use mindwell::logging;
use mindwell::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: mindwell [--api-url <url>]

Options:
  --api-url <url>  Backend base URL (overrides MINDWELL_API_URL)
  --version        Print the version and exit
  --help           Print this help and exit";

/// Value following `flag` on the command line, if the flag is present.
fn flag_value(args: &[String], flag: &str) -> Result<Option<String>> {
    match args.iter().position(|arg| arg == flag) {
        None => Ok(None),
        Some(idx) => args
            .get(idx + 1)
            .cloned()
            .map(Some)
            .ok_or_else(|| eyre!("{} needs a value\n\n{}", flag, USAGE)),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Handle --version and --help before any initialization
    if args.iter().any(|arg| arg == "--version") {
        println!("mindwell {}", VERSION);
        return Ok(());
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    color_eyre::install()?;

    let mut config = AppConfig::from_env()?;
    if let Some(url) = flag_value(&args, "--api-url")? {
        config = config.with_api_url(url)?;
    }

    let local = config.local_store()?;
    let log_path = logging::init(local.root(), &config.log_filter)?;
    tracing::info!(
        version = VERSION,
        api_url = %config.api_url,
        log = %log_path.display(),
        "Starting mindwell"
    );

    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let tokens = FileTokenStore::new(local.clone());
    let api = ApiClient::new(config.api_url.clone(), Arc::new(http), Arc::new(tokens));
    let mut app = App::new(api, local);

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // UI events, network continuations and breathing ticks share one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(async {
        // A stored token may still be valid; skip the welcome flow if so
        app.restore_session();
        run_app(&mut terminal, &mut app).await
    });

    app.breathing_driver.stop();
    restore_terminal(&mut terminal)?;
    tracing::info!("Exiting");

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        // 16ms tick drives toasts and spinners
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    // Input closed
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
