// Copyright (c) 2026 rezky_nightky

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;

use crate::error::ConfigurationError;

/// The seven logo colors. Random draws pick uniformly from [`LogoColor::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogoColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl LogoColor {
    pub const ALL: [LogoColor; 7] = [
        LogoColor::Red,
        LogoColor::Green,
        LogoColor::Yellow,
        LogoColor::Blue,
        LogoColor::Magenta,
        LogoColor::Cyan,
        LogoColor::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LogoColor::Red => "red",
            LogoColor::Green => "green",
            LogoColor::Yellow => "yellow",
            LogoColor::Blue => "blue",
            LogoColor::Magenta => "magenta",
            LogoColor::Cyan => "cyan",
            LogoColor::White => "white",
        }
    }

    pub fn to_crossterm(self) -> Color {
        match self {
            LogoColor::Red => Color::DarkRed,
            LogoColor::Green => Color::DarkGreen,
            LogoColor::Yellow => Color::DarkYellow,
            LogoColor::Blue => Color::DarkBlue,
            LogoColor::Magenta => Color::DarkMagenta,
            LogoColor::Cyan => Color::DarkCyan,
            LogoColor::White => Color::Grey,
        }
    }
}

impl fmt::Display for LogoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogoColor {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LogoColor::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ConfigurationError::UnknownColor(s.to_string()))
    }
}

/// How the logo color reacts to bounces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPolicy {
    Fixed(LogoColor),
    RandomOnBounce,
}

impl ColorPolicy {
    pub fn initial_color(self) -> LogoColor {
        match self {
            ColorPolicy::Fixed(c) => c,
            ColorPolicy::RandomOnBounce => LogoColor::White,
        }
    }
}

impl FromStr for ColorPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            return Ok(ColorPolicy::RandomOnBounce);
        }
        s.parse().map(ColorPolicy::Fixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("red", ColorPolicy::Fixed(LogoColor::Red))]
    #[case("Cyan", ColorPolicy::Fixed(LogoColor::Cyan))]
    #[case(" WHITE ", ColorPolicy::Fixed(LogoColor::White))]
    #[case("random", ColorPolicy::RandomOnBounce)]
    #[case("RANDOM", ColorPolicy::RandomOnBounce)]
    fn parses_color_choices(#[case] input: &str, #[case] expected: ColorPolicy) {
        assert_eq!(input.parse::<ColorPolicy>().unwrap(), expected);
    }

    #[test]
    fn unknown_color_is_a_configuration_error() {
        let err = "purple".parse::<ColorPolicy>().unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownColor(ref s) if s == "purple"));
    }

    #[test]
    fn every_color_round_trips_through_its_name() {
        for c in LogoColor::ALL {
            assert_eq!(c.name().parse::<LogoColor>().unwrap(), c);
        }
    }

    #[test]
    fn random_policy_starts_white() {
        assert_eq!(ColorPolicy::RandomOnBounce.initial_color(), LogoColor::White);
        assert_eq!(
            ColorPolicy::Fixed(LogoColor::Blue).initial_color(),
            LogoColor::Blue
        );
    }
}
