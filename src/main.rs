// Copyright (c) 2026 rezky_nightky

mod bouncer;
mod cell;
mod config;
mod error;
mod frame;
mod logging;
mod logo;
mod palette;
mod runner;
mod surface;
mod terminal;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::builder::styling::{AnsiColor as ClapAnsiColor, Color as ClapColor};
use clap::builder::styling::{Effects as ClapEffects, Style as ClapStyle};
use clap::builder::Styles as ClapStyles;
use clap::{CommandFactory, FromArgMatches};
use rand::{rngs::StdRng, SeedableRng};

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

use crate::bouncer::{Bouncer, StopReason};
use crate::config::{print_list_colors, Args, Settings};
use crate::error::{BounceError, ConfigurationError};
use crate::logging::init_file_logging;
use crate::logo::LogoBlock;
use crate::runner::frame_period;
use crate::terminal::{restore_terminal_best_effort, Terminal, TerminalInput};

const INPUT_STOP_EXIT: u8 = 255;

fn info_lines() -> Vec<String> {
    vec![
        format!("Version: v{}", env!("CARGO_PKG_VERSION")),
        format!(
            "Target: {}-{}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        format!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS")),
        format!("License: {}", env!("CARGO_PKG_LICENSE")),
    ]
}

/// Maps how the animation ended to the process exit status. Only an
/// interrupt counts as a clean stop.
fn exit_status(outcome: &Result<StopReason, BounceError>) -> u8 {
    match outcome {
        Ok(StopReason::Interrupted) => 0,
        Ok(StopReason::Input) => INPUT_STOP_EXIT,
        Err(_) => 1,
    }
}

fn clap_styles() -> ClapStyles {
    ClapStyles::styled()
        .header(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Cyan))),
        )
        .usage(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Green))),
        )
        .literal(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Yellow))))
        .placeholder(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Magenta))))
}

fn install_interrupt_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));

    #[cfg(unix)]
    {
        for sig in [SIGINT, SIGTERM, SIGHUP] {
            if let Err(e) = signal_hook::flag::register(sig, Arc::clone(&flag)) {
                tracing::warn!(signal = sig, error = %e, "failed to install signal handler");
            }
        }
    }

    #[cfg(windows)]
    {
        let f = Arc::clone(&flag);
        if let Err(e) = ctrlc::set_handler(move || f.store(true, Ordering::Relaxed)) {
            tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        }
    }

    flag
}

/// Everything that can be rejected without touching the terminal.
fn prepare(args: &Args) -> Result<(Settings, LogoBlock), ConfigurationError> {
    let settings = args.settings()?;
    let logo = LogoBlock::load(&args.file)?;
    if logo.is_empty() {
        return Err(ConfigurationError::EmptyLogo);
    }
    Ok((settings, logo))
}

fn animate(args: &Args) -> Result<StopReason, BounceError> {
    let (settings, logo) = prepare(args)?;
    tracing::info!(
        file = %args.file.display(),
        width = logo.width(),
        height = logo.height(),
        policy = ?settings.policy,
        fps = settings.fps,
        "starting animation"
    );

    let interrupted = install_interrupt_flag();
    let term = Terminal::new()?;
    let bouncer = match args.seed {
        Some(seed) => {
            Bouncer::with_rng(logo, term, settings.policy, StdRng::seed_from_u64(seed))?
        }
        None => Bouncer::new(logo, term, settings.policy)?,
    };
    let mut bouncer = bouncer
        .with_steps(settings.step_x, settings.step_y)?
        .with_margin(settings.margin);

    let reason = runner::run(
        &mut bouncer,
        &mut TerminalInput,
        frame_period(settings.fps),
        &interrupted,
    )?;
    if interrupted.load(Ordering::Relaxed) {
        tracing::debug!("interrupt flag raised");
    }
    Ok(reason)
}

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    let mut cmd = Args::command();
    cmd = cmd.styles(clap_styles());
    let matches = cmd.get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if args.list_colors {
        print_list_colors();
        return ExitCode::SUCCESS;
    }

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    if args.info {
        for line in info_lines() {
            println!("{}", line);
        }
        return ExitCode::SUCCESS;
    }

    let _log_guard = match &args.log_file {
        Some(path) => match init_file_logging(path) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("failed to open log file {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let outcome = animate(&args);
    if let Err(e) = &outcome {
        tracing::error!(error = %e, "animation failed");
        eprintln!("{}", e);
    }
    ExitCode::from(exit_status(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::{self, Write};

    fn args_for(path: &std::path::Path, extra: &[&str]) -> Args {
        let argv = ["logobounce", path.to_str().unwrap()]
            .into_iter()
            .chain(extra.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn interrupt_exits_zero() {
        assert_eq!(exit_status(&Ok(StopReason::Interrupted)), 0);
    }

    #[test]
    fn key_stop_exits_255() {
        assert_eq!(exit_status(&Ok(StopReason::Input)), 255);
    }

    #[test]
    fn errors_exit_one() {
        let surface = Err(BounceError::Surface(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "tty gone",
        )));
        assert_eq!(exit_status(&surface), 1);
        let config = Err(BounceError::Config(ConfigurationError::EmptyLogo));
        assert_eq!(exit_status(&config), 1);
    }

    #[test]
    fn empty_logo_is_rejected_before_the_terminal_opens() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = prepare(&args_for(f.path(), &[])).err().unwrap();
        assert!(matches!(err, ConfigurationError::EmptyLogo));

        // animate() goes through the same check first, so no tty is needed
        // to see the configuration error.
        let err = animate(&args_for(f.path(), &[])).unwrap_err();
        assert!(matches!(
            err,
            BounceError::Config(ConfigurationError::EmptyLogo)
        ));
    }

    #[test]
    fn blank_lines_only_logo_is_empty() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f).unwrap();
        writeln!(f).unwrap();
        let err = prepare(&args_for(f.path(), &[])).err().unwrap();
        assert!(matches!(err, ConfigurationError::EmptyLogo));
    }

    #[test]
    fn bad_color_wins_over_logo_contents() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = prepare(&args_for(f.path(), &["-c", "purple"])).err().unwrap();
        assert!(matches!(err, ConfigurationError::UnknownColor(_)));
    }

    #[test]
    fn valid_logo_is_prepared() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "HI").unwrap();
        let (settings, logo) = prepare(&args_for(f.path(), &["-c", "red"])).unwrap();
        assert_eq!(logo.width(), 2);
        assert_eq!(settings.fps, 10.0);
    }

    #[test]
    fn info_names_version_and_license() {
        let lines = info_lines();
        assert_eq!(lines[0], format!("Version: v{}", env!("CARGO_PKG_VERSION")));
        assert!(lines.iter().any(|l| l == "License: MIT"));
    }
}
