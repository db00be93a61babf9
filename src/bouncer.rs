// Copyright (c) 2026 rezky_nightky

use std::io;
use std::ops::ControlFlow;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{BounceError, ConfigurationError},
    logo::LogoBlock,
    palette::{ColorPolicy, LogoColor},
    surface::{InputEvent, InputSource, Surface},
};

pub const DEFAULT_STEP_X: i32 = 2;
pub const DEFAULT_STEP_Y: i32 = 1;

/// Columns kept free at the right edge. Without it the logo gets drawn one
/// column past the last addressable one. There is no matching margin on the
/// bottom edge.
pub const EDGE_MARGIN: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Input,
    Interrupted,
}

/// Which axes reflected during a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

pub struct Bouncer<S, R = StdRng> {
    logo: LogoBlock,
    width: i32,
    height: i32,
    surface: S,
    policy: ColorPolicy,
    color: LogoColor,
    x: i32,
    y: i32,
    vx: i32,
    vy: i32,
    margin: i32,
    rng: R,
}

impl<S: Surface> Bouncer<S, StdRng> {
    pub fn new(logo: LogoBlock, surface: S, policy: ColorPolicy) -> Result<Self, ConfigurationError> {
        Self::with_rng(logo, surface, policy, StdRng::from_os_rng())
    }
}

impl<S: Surface, R: Rng> Bouncer<S, R> {
    pub fn with_rng(
        logo: LogoBlock,
        surface: S,
        policy: ColorPolicy,
        rng: R,
    ) -> Result<Self, ConfigurationError> {
        if logo.is_empty() {
            return Err(ConfigurationError::EmptyLogo);
        }
        let width = i32::try_from(logo.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(logo.height()).unwrap_or(i32::MAX);
        Ok(Self {
            logo,
            width,
            height,
            surface,
            policy,
            color: policy.initial_color(),
            x: 0,
            y: 0,
            vx: DEFAULT_STEP_X,
            vy: DEFAULT_STEP_Y,
            margin: EDGE_MARGIN,
            rng,
        })
    }

    /// Sets the per-tick step. Only magnitudes matter; motion always starts
    /// towards the bottom right.
    pub fn with_steps(mut self, step_x: i32, step_y: i32) -> Result<Self, ConfigurationError> {
        if step_x == 0 {
            return Err(ConfigurationError::ZeroStep { axis: 'x' });
        }
        if step_y == 0 {
            return Err(ConfigurationError::ZeroStep { axis: 'y' });
        }
        self.vx = step_x.saturating_abs();
        self.vy = step_y.saturating_abs();
        Ok(self)
    }

    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.vx, self.vy)
    }

    pub fn color(&self) -> LogoColor {
        self.color
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, (x, y): (i32, i32), (vx, vy): (i32, i32)) {
        self.x = x;
        self.y = y;
        self.vx = vx;
        self.vy = vy;
    }

    /// Runs one frame: bounds query, collision, move, render, then a single
    /// non-blocking input poll.
    pub fn tick<I: InputSource>(
        &mut self,
        input: &mut I,
    ) -> Result<ControlFlow<StopReason>, BounceError> {
        let (rows, cols) = self.surface.dimensions()?;
        let bounce = self.step(rows, cols);
        if bounce.any() {
            tracing::debug!(
                x = self.x,
                y = self.y,
                vx = self.vx,
                vy = self.vy,
                color = %self.color,
                "bounce"
            );
        }
        self.render()?;

        Ok(match input.poll()? {
            None => ControlFlow::Continue(()),
            Some(InputEvent::Key) => ControlFlow::Break(StopReason::Input),
            Some(InputEvent::Interrupt) => ControlFlow::Break(StopReason::Interrupted),
        })
    }

    /// Collision check against the current position, then move with the
    /// possibly reflected velocity.
    pub fn step(&mut self, rows: u16, cols: u16) -> Bounce {
        let rows = i32::from(rows);
        let cols = i32::from(cols);
        let mut bounce = Bounce::default();

        if (self.x <= 0 && self.vx < 0) || (self.x + self.width >= cols - self.margin && self.vx > 0)
        {
            self.vx = -self.vx;
            self.bounce_color();
            bounce.x = true;
        }

        // Compares the top edge against rows - height, no margin.
        if (self.y <= 0 && self.vy < 0) || (self.y >= rows - self.height && self.vy > 0) {
            self.vy = -self.vy;
            self.bounce_color();
            bounce.y = true;
        }

        self.x += self.vx;
        self.y += self.vy;
        bounce
    }

    fn bounce_color(&mut self) {
        if self.policy == ColorPolicy::RandomOnBounce {
            self.color = LogoColor::ALL[self.rng.random_range(0..LogoColor::ALL.len())];
        }
    }

    pub fn render(&mut self) -> io::Result<()> {
        self.surface.clear()?;
        for (row, line) in (self.y..).zip(self.logo.lines()) {
            self.surface.draw_line(row, self.x, line, self.color)?;
        }
        self.surface.present()
    }
}
