// Copyright (c) 2026 rezky_nightky

use std::fmt::Display;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::bouncer::{DEFAULT_STEP_X, DEFAULT_STEP_Y, EDGE_MARGIN};
use crate::error::ConfigurationError;
use crate::palette::{ColorPolicy, LogoColor};
use crate::runner::DEFAULT_FPS;

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "logobounce",
    about = "Bounce a text logo around the terminal",
    disable_version_flag = true
)]
pub struct Args {
    #[arg(
        value_name = "FILE",
        default_value = "logo.txt",
        help = "Path to the logo file to display"
    )]
    pub file: PathBuf,

    #[arg(
        short = 'c',
        long = "color",
        default_value = "random",
        help_heading = "APPEARANCE",
        help = "Logo color, or 'random' to change color on every bounce (see --list-colors)"
    )]
    pub color: String,

    #[arg(
        short = 'f',
        long = "fps",
        default_value_t = DEFAULT_FPS,
        help_heading = "MOTION",
        help = "Frames per second (min 1 max 240)"
    )]
    pub fps: f64,

    #[arg(
        long = "step-x",
        default_value_t = DEFAULT_STEP_X,
        allow_negative_numbers = true,
        help_heading = "MOTION",
        help = "Columns moved per frame (nonzero, min -50 max 50)"
    )]
    pub step_x: i32,

    #[arg(
        long = "step-y",
        default_value_t = DEFAULT_STEP_Y,
        allow_negative_numbers = true,
        help_heading = "MOTION",
        help = "Rows moved per frame (nonzero, min -50 max 50)"
    )]
    pub step_y: i32,

    #[arg(
        long = "margin",
        default_value_t = EDGE_MARGIN,
        allow_negative_numbers = true,
        help_heading = "MOTION",
        help = "Columns kept free at the right edge (min 0 max 10)"
    )]
    pub margin: i32,

    #[arg(
        long = "seed",
        help_heading = "MOTION",
        help = "Seed for random colors (reproducible runs)"
    )]
    pub seed: Option<u64>,

    #[arg(
        long = "log-file",
        value_name = "PATH",
        help_heading = "GENERAL",
        help = "Write diagnostics to PATH (filter with RUST_LOG)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "list-colors",
        help_heading = "HELP",
        help = "List available colors and exit"
    )]
    pub list_colors: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'v',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

/// Validated animation settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub policy: ColorPolicy,
    pub fps: f64,
    pub step_x: i32,
    pub step_y: i32,
    pub margin: i32,
}

fn require_range<T>(name: &'static str, v: T, min: T, max: T) -> Result<T, ConfigurationError>
where
    T: PartialOrd + Display + Copy,
{
    if v < min || v > max {
        return Err(ConfigurationError::OutOfRange {
            name,
            value: v.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(v)
}

fn require_step(axis: char, name: &'static str, v: i32) -> Result<i32, ConfigurationError> {
    if v == 0 {
        return Err(ConfigurationError::ZeroStep { axis });
    }
    require_range(name, v, -50, 50)
}

impl Args {
    pub fn settings(&self) -> Result<Settings, ConfigurationError> {
        if !self.fps.is_finite() {
            return Err(ConfigurationError::OutOfRange {
                name: "--fps",
                value: self.fps.to_string(),
                min: "1".into(),
                max: "240".into(),
            });
        }
        Ok(Settings {
            policy: self.color.parse()?,
            fps: require_range("--fps", self.fps, 1.0, 240.0)?,
            step_x: require_step('x', "--step-x", self.step_x)?,
            step_y: require_step('y', "--step-y", self.step_y)?,
            margin: require_range("--margin", self.margin, 0, 10)?,
        })
    }
}

pub fn print_list_colors() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE COLORS:\x1b[0m");
    } else {
        println!("AVAILABLE COLORS:");
    }
    println!();
    for c in LogoColor::ALL {
        println!("{:<12} Fixed {} logo", c.name(), c);
    }
    println!("random       Pick a new color on every bounce (default)");
}
