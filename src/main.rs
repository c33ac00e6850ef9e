use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use walletscope::app::{App, StatusLevel};
use walletscope::config;
use walletscope::core::Intent;
use walletscope::infrastructure::{BlockCypherClient, ClipboardWriter, RuntimeBridge, SystemClipboard};
use walletscope::{logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "walletscope",
    version,
    about = "walletscope: browse wallet balances and transactions from the terminal"
)]
struct Args {
    /// Address API base URL (e.g. https://api.blockcypher.com/v1)
    #[arg(long)]
    api_url: Option<String>,

    /// Address API token
    #[arg(long)]
    token: Option<String>,

    /// Start with an empty wallet list instead of the examples
    #[arg(long)]
    no_defaults: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = config::load();
    if let Some(url) = args.api_url {
        config.api_url = url;
    }
    if let Some(token) = args.token {
        config.api_token = Some(token);
    }

    // Logging is best effort; the TUI works without it
    let _log_guard = match config.log_dir() {
        Some(dir) => match logging::init(&dir, &config.log_level) {
            Ok(guard) => Some(guard),
            Err(err) => {
                eprintln!("Warning: logging disabled: {err:#}");
                None
            }
        },
        None => None,
    };

    let client = BlockCypherClient::new(config.client_config())?;
    let runtime = RuntimeBridge::new(Arc::new(client))?;
    let mut clipboard = SystemClipboard::new();

    let mut app = App::new();
    if !args.no_defaults {
        app.dispatch(Intent::DisplayDefaultWallets);
    }
    app.set_status(format!("API {}", config.api_url), StatusLevel::Info);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &runtime, &mut clipboard);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:#}");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: &RuntimeBridge,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        app.pump_runtime(runtime, clipboard);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let effects = app.handle_key(key);
                    app.execute_effects(effects, runtime, clipboard);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
