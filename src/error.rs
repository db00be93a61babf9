// Copyright (c) 2026 rezky_nightky

use std::io;
use std::path::PathBuf;

/// Problems detected before the animation starts. Nothing is drawn when one
/// of these is returned.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("failed to read logo {}: {source}", .path.display())]
    UnreadableLogo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logo is empty (nothing to render)")]
    EmptyLogo,

    #[error("invalid color: {0} (see --list-colors)")]
    UnknownColor(String),

    #[error("failed to apply --step-{axis} 0 (step must be nonzero)")]
    ZeroStep { axis: char },

    #[error("failed to apply {name} {value} (min {min} max {max})")]
    OutOfRange {
        name: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum BounceError {
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    #[error("terminal I/O failed: {0}")]
    Surface(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_flag() {
        let e = ConfigurationError::OutOfRange {
            name: "--fps",
            value: "500".into(),
            min: "1".into(),
            max: "240".into(),
        };
        assert_eq!(e.to_string(), "failed to apply --fps 500 (min 1 max 240)");
    }

    #[test]
    fn surface_errors_convert_from_io() {
        let e: BounceError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(e, BounceError::Surface(_)));
        assert_eq!(e.to_string(), "terminal I/O failed: gone");
    }
}
