//! Committed CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`committed_engine`] (composer state) and [`committed_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> Args + config + git -> SessionState -> Composer
//!                                                     |
//!                                                     v
//!                         TerminalSession::new() -> run() -> CommitResult
//! ```
//!
//! # Event Loop
//!
//! The loop is synchronous and blocks on input:
//!
//! 1. Drain the effects of the previous step ([`Effect::Quit`] ends the loop)
//! 2. Render frame
//! 3. Wait for one input event
//! 4. Feed it to the composer

use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        size as terminal_size,
    },
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use committed_config::CommittedConfig;
use committed_engine::{Composer, Effect, Hook, Options, SessionState, repository};
use committed_tui::{ThemeRegistry, draw, read_event, resize_event};
use committed_types::{CommitResult, EmojiSet};

const LOG_ENV: &str = "COMMITTED_LOG";

/// `prepare-commit-msg` source that marks an amend.
const AMEND_SOURCE: &str = "commit";

#[derive(Debug, Parser)]
#[command(name = "committed", version, about = "Compose a git commit message")]
struct Args {
    /// Start in amend mode with the message of HEAD.
    #[arg(long)]
    amend: bool,

    /// Run as a prepare-commit-msg hook. Takes git's hook arguments.
    #[arg(long, num_args = 1..=2, value_names = ["MSG_FILE", "SOURCE"])]
    hook: Vec<String>,

    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn hook_file(&self) -> Option<&Path> {
        self.hook.first().map(Path::new)
    }

    fn hook_source(&self) -> Option<&str> {
        self.hook.get(1).map(String::as_str)
    }
}

fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = env::var_os(LOG_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
    else {
        // Nothing may write to the terminal while the composer owns it.
        tracing_subscriber::registry().with(env_filter).init();
        return Ok(());
    };

    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %log_path.display(), "Logging initialized");
    Ok(())
}

fn load_config(path: Option<&Path>) -> CommittedConfig {
    let loaded = match path {
        Some(path) => CommittedConfig::load_from(path),
        None => CommittedConfig::load(),
    };
    match loaded {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default config: {err}");
            CommittedConfig::default()
        }
    }
}

fn load_hook(args: &Args) -> Hook {
    let Some(path) = args.hook_file() else {
        return Hook::default();
    };

    let message = match fs::read_to_string(path) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!("Failed to read hook message {}: {err}", path.display());
            String::new()
        }
    };

    Hook {
        enabled: true,
        amend: args.hook_source() == Some(AMEND_SOURCE),
        message,
    }
}

fn build_session(args: &Args, config: &CommittedConfig) -> (SessionState, ThemeRegistry) {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let state = SessionState {
        repository: repository::load(&cwd),
        options: Options {
            amend: args.amend,
            signoff: config.commit.signoff,
            focus: config.view.focus,
            compatibility: config.view.compatibility,
            authors: config.authors(),
        },
        hook: load_hook(args),
        snapshot: None,
        emojis: EmojiSet::gitmoji(),
    };

    let mut themes = ThemeRegistry::new(config.view.colour);
    if let Some(theme) = &config.view.theme
        && !themes.set_id(theme)
    {
        tracing::warn!(theme = %theme, "Unknown theme, keeping {}", themes.id());
    }

    (state, themes)
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, the alternate screen and bracketed paste are all undone on drop,
/// so the shell is usable again after an error or early return.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err).context("failed to enter the alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err).context("failed to start the terminal");
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing()?;

    let config = load_config(args.config.as_deref());
    let (state, mut themes) = build_session(&args, &config);
    let composer = Composer::new(state);

    let result = {
        let mut session = TerminalSession::new()?;
        run(&mut session.terminal, composer, &mut themes)?
    };

    if !result.commit {
        tracing::info!("Commit cancelled");
        return Ok(());
    }
    tracing::info!(amend = result.amend, "Commit message composed");
    write_message(&result, args.hook_file())
}

fn run<B>(
    terminal: &mut Terminal<B>,
    composer: Composer,
    themes: &mut ThemeRegistry,
) -> Result<CommitResult>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let (mut composer, mut effects) = composer.init();

    // The status bar lays out against the real width from the first frame.
    if let Ok((width, height)) = terminal_size() {
        let (resized, resize_effects) = composer.update(&resize_event(width, height));
        composer = resized;
        effects.extend(resize_effects);
    }

    loop {
        if apply_effects(&effects, themes) {
            break;
        }

        terminal.draw(|frame| draw(frame, &composer, themes))?;

        let event = read_event()?;
        tracing::trace!(?event, "Input");
        (composer, effects) = composer.update(&event);
    }

    Ok(composer.into_result())
}

/// Apply host-side effects. Returns true when the session should end.
fn apply_effects(effects: &[Effect], themes: &mut ThemeRegistry) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Quit => quit = true,
            Effect::NextTheme => {
                let id = themes.next();
                tracing::debug!(theme = id, "Switched theme");
            }
        }
    }
    quit
}

fn write_message(result: &CommitResult, hook_file: Option<&Path>) -> Result<()> {
    let message = result.message();
    match hook_file {
        Some(path) => fs::write(path, message)
            .with_context(|| format!("failed to write commit message to {}", path.display())),
        None => {
            let mut out = stdout().lock();
            out.write_all(message.as_bytes())?;
            out.flush()?;
            Ok(())
        }
    }
}
