// Copyright (c) 2026 rezky_nightky

use std::fs;
use std::path::Path;

use crate::error::ConfigurationError;

const TAB_WIDTH: usize = 8;

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - col % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}

/// The text being bounced around. Never mutated after loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoBlock {
    lines: Vec<String>,
    width: usize,
}

impl LogoBlock {
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines().map(str::to_string).collect())
    }

    /// Tabs are expanded to 8-column stops so every char is one cell.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let lines: Vec<String> = lines.iter().map(|l| expand_tabs(l)).collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Self { lines, width }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigurationError::UnreadableLogo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() || self.width == 0
    }
}
