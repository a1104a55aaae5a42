//! src/main.rs
//! Terminal client for a remote file-explorer backend

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event as TerminalEvent, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::Notify};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use rex_core::{
    AppError, Logger,
    api::client::{ExplorerApi, HttpExplorerApi},
    config::Config,
    controller::{
        actions::Action,
        event_loop::{DispatchResult, EventLoop, MetricsSnap},
        navigator::Navigator,
    },
    view::{theme, ui::UIRenderer},
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Browse and search a remote file-explorer backend from the terminal.
#[derive(Debug, Parser)]
#[command(name = "rex", version, about)]
struct Args {
    /// Backend base URL, overriding `backend.base_url` from the config file
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Read configuration from this file instead of the platform default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_panic_handler();

    let app = App::new(args)
        .await
        .context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop,
    ui_renderer: UIRenderer,
    shutdown: Arc<Notify>,
    _log_guard: WorkerGuard,
}

impl App {
    async fn new(args: Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Config::load_from(path)
                .await
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::load().await.unwrap_or_else(|e| {
                eprintln!("Failed to load config, using defaults: {e}");
                Config::default()
            }),
        };
        if let Some(server) = args.server {
            config.backend.base_url = server;
        }

        let log_guard =
            Logger::init_tracing(&config.logging).context("Failed to initialize logging")?;
        info!("Starting rex against {}", config.backend.base_url);
        theme::init_theme();

        let api: Arc<dyn ExplorerApi> = Arc::new(
            HttpExplorerApi::new(&config.backend).context("Failed to build HTTP client")?,
        );
        let navigator = Navigator::new(config.backend.fallback_root.clone());
        let mut event_loop = EventLoop::new(navigator, api);

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        event_loop.dispatch(Action::LoadConfig);
        info!("Application initialized successfully");

        Ok(Self {
            terminal,
            event_loop,
            ui_renderer: UIRenderer::new(),
            shutdown: Arc::new(Notify::new()),
            _log_guard: log_guard,
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream = EventStream::new();

        loop {
            self.render()?;

            let outcome = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.process_terminal_event(event),
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                        DispatchResult::Continue
                    }
                    None => {
                        info!("Terminal event stream closed");
                        break;
                    }
                },

                Some(response) = self.event_loop.next_response() => {
                    self.event_loop.dispatch(Action::Response(response))
                }
            };

            if outcome == DispatchResult::Quit {
                break;
            }
        }

        self.log_final_metrics();
        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn process_terminal_event(&mut self, event: TerminalEvent) -> DispatchResult {
        match event {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => {
                self.event_loop.handle_key(key)
            }
            TerminalEvent::Resize(width, height) => {
                self.event_loop.dispatch(Action::Resize(width, height))
            }
            _ => DispatchResult::Continue,
        }
    }

    fn render(&mut self) -> Result<()> {
        if !self.event_loop.ui_state().needs_redraw() {
            return Ok(());
        }

        let navigator = self.event_loop.navigator();
        let ui_state = self.event_loop.ui_state();
        let renderer = &mut self.ui_renderer;

        self.terminal
            .draw(|frame: &mut Frame<'_>| renderer.render(frame, navigator, ui_state))
            .map_err(|e| AppError::terminal("drawing a frame", e))?;

        self.event_loop.ui_state_mut().clear_redraw();
        Ok(())
    }

    fn log_final_metrics(&self) {
        let metrics: MetricsSnap = self.event_loop.snapshot_metrics();
        let render = self.ui_renderer.stats();

        info!("Final metrics:");
        info!("  Actions processed: {}", metrics.actions);
        info!("  Requests sent: {}", metrics.requests);
        info!("  Responses received: {}", metrics.responses);
        info!("  Frames drawn: {} ({} slow)", render.frames, render.slow);
        if let Some(avg) = render.average() {
            info!("  Average frame time: {:.2}ms", avg.as_secs_f64() * 1000.0);
        }
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = Arc::clone(&self.shutdown);

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let mut sigterm = match signal(SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(e) => {
                        warn!("Failed to create SIGTERM handler: {}", e);
                        return;
                    }
                };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal, AppError> {
    enable_raw_mode().map_err(|e| AppError::terminal("enabling raw mode", e))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| AppError::terminal("entering the alternate screen", e))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal =
        Terminal::new(backend).map_err(|e| AppError::terminal("creating the terminal", e))?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<(), AppError> {
    disable_raw_mode().map_err(|e| AppError::terminal("disabling raw mode", e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AppError::terminal("leaving the alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| AppError::terminal("showing the cursor", e))?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
