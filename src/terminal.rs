// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::frame::Frame;
use crate::palette::LogoColor;
use crate::surface::{InputEvent, InputSource, Surface};

/// Crossterm-backed [`Surface`]. Owns raw mode and the alternate screen for
/// as long as it lives.
pub struct Terminal {
    stdout: Stdout,
    frame: Frame,
    last: Option<Frame>,
    run_buf: String,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let init_res: Result<(u16, u16)> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            terminal::size()
        })();
        let (w, h) = match init_res {
            Ok(size) => size,
            Err(e) => {
                restore_terminal_best_effort();
                return Err(e);
            }
        };
        let mut term = Self {
            stdout: out,
            frame: Frame::new(w, h),
            last: None,
            run_buf: String::with_capacity(64),
        };
        term.cursor_visible(false)?;
        Ok(term)
    }

    fn flush_run(&mut self, fg: Option<Color>, cur_fg: &mut Option<Color>) -> Result<()> {
        if self.run_buf.is_empty() {
            return Ok(());
        }
        if fg != *cur_fg {
            self.stdout
                .queue(SetForegroundColor(fg.unwrap_or(Color::Reset)))?;
            *cur_fg = fg;
        }
        self.stdout.queue(Print(self.run_buf.as_str()))?;
        self.run_buf.clear();
        Ok(())
    }

    /// Emits only the cells that differ from the previously presented frame,
    /// batching horizontal runs that share a color.
    fn draw(&mut self) -> Result<()> {
        let full = self
            .last
            .as_ref()
            .map(|l| l.width != self.frame.width || l.height != self.frame.height)
            .unwrap_or(true);
        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            self.last = Some(Frame::new(self.frame.width, self.frame.height));
        }
        let Some(mut last) = self.last.take() else {
            return Ok(());
        };

        let mut cur_fg: Option<Color> = None;
        self.stdout.queue(ResetColor)?;

        for y in 0..self.frame.height {
            let mut run_fg: Option<Color> = None;
            let mut next_x: Option<u16> = None;
            for x in 0..self.frame.width {
                let idx = y as usize * self.frame.width as usize + x as usize;
                let cell = self.frame.cell_at_index(idx);
                if last.cell_at_index(idx) == cell {
                    continue;
                }
                last.set(x, y, cell);

                if next_x != Some(x) || cell.fg != run_fg {
                    self.flush_run(run_fg, &mut cur_fg)?;
                    if next_x != Some(x) {
                        self.stdout.queue(cursor::MoveTo(x, y))?;
                    }
                    run_fg = cell.fg;
                }
                self.run_buf.push(cell.ch);
                next_x = Some(x.saturating_add(1));
            }
            self.flush_run(run_fg, &mut cur_fg)?;
        }

        self.last = Some(last);
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()
    }
}

impl Surface for Terminal {
    fn dimensions(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn clear(&mut self) -> Result<()> {
        let (w, h) = terminal::size()?;
        if w != self.frame.width || h != self.frame.height {
            tracing::debug!(cols = w, rows = h, "viewport resized");
            self.frame = Frame::new(w, h);
        } else {
            self.frame.clear();
        }
        Ok(())
    }

    fn draw_line(&mut self, row: i32, col: i32, text: &str, color: LogoColor) -> Result<()> {
        self.frame.put_str(row, col, text, color.to_crossterm());
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.draw()
    }

    fn cursor_visible(&mut self, visible: bool) -> Result<()> {
        if visible {
            self.stdout.execute(cursor::Show)?;
        } else {
            self.stdout.execute(cursor::Hide)?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.stdout.execute(SetAttribute(Attribute::Reset));
        let _ = self.stdout.execute(ResetColor);
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.execute(terminal::EnableLineWrap);
        let _ = self.stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
    }
}

pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}

/// Decides whether a crossterm event stops the animation. Raw mode turns
/// Ctrl-C into a key event, so it is reported as an interrupt here. Resizes
/// are picked up by the next `dimensions()` call instead.
pub fn classify(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(k) if k.kind == KeyEventKind::Press => {
            if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                Some(InputEvent::Interrupt)
            } else {
                Some(InputEvent::Key)
            }
        }
        Event::Key(_) | Event::Resize(..) | Event::FocusGained | Event::FocusLost => None,
        _ => Some(InputEvent::Key),
    }
}

pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = classify(event::read()?) {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }
}
