// ABOUTME: Main entry point for gh-pair with TUI and CLI support
//
// Binary: gh-pair
// Usage: gh-pair [COMMAND]
// - No command: launches TUI
// - add/remove/list/clear: manage active pairs
// - init/uninstall: manage the commit-msg hook

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::io::{self, IsTerminal};

use gh_pair::app::{App, EventHandler, SessionPolicy};
use gh_pair::cli::{self, util::RepoContext};
use gh_pair::components::LayoutComponent;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let result = match args.command {
        // CLI commands
        Some(cli::Commands::Add(add_args)) => cli::add::execute(&add_args, args.format),
        Some(cli::Commands::Remove(remove_args)) => {
            cli::remove::execute(&remove_args, args.format)
        }
        Some(cli::Commands::List) => cli::list::execute(args.format),
        Some(cli::Commands::Clear) => cli::remove::clear(args.format),
        Some(cli::Commands::Init) => cli::hook::init(),
        Some(cli::Commands::Uninstall) => cli::hook::uninstall(),

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui) | None => run_tui().await,
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui() -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. gh-pair needs a terminal for the interactive view.\n\
             Use `gh-pair add`, `gh-pair list` or `gh-pair remove` in scripts."
        ));
    }

    let context = RepoContext::open()?;
    let policy = SessionPolicy::from_config(&context.config);
    let timeout = context.config.command_timeout();
    let mut app = App::new(policy, context.into_services(), timeout);
    let layout = LayoutComponent::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(&mut app, &layout, &mut terminal).await;

    // Always clean up terminal using unified cleanup
    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        // Fallback to basic cleanup
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let _input = EventHandler::spawn_input_reader(app.sender());
    app.start();

    loop {
        terminal.draw(|frame| layout.render(frame, &app.state))?;

        let Some(message) = app.next_message().await else {
            break;
        };
        app.handle_message(message);

        // Apply everything already queued before drawing again
        while !app.state.should_quit {
            let Some(message) = app.try_next_message() else {
                break;
            };
            app.handle_message(message);
        }

        if app.state.should_quit {
            break;
        }
    }

    tracing::info!("Pair session ended");
    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    // Create log directory if it doesn't exist
    let log_dir = dirs::home_dir()
        .map_or_else(|| PathBuf::from(".gh-pair/logs"), |home| home.join(".gh-pair").join("logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "gh-pair-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // The TUI owns stdout, so without a log file we log nowhere
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()             // Output in JSON Lines format
                .with_target(true)  // Include target module in JSON
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gh_pair=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
