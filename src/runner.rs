// Copyright (c) 2026 rezky_nightky

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    bouncer::{Bouncer, StopReason},
    error::BounceError,
    surface::{InputSource, Surface},
};

pub const DEFAULT_FPS: f64 = 10.0;

pub fn frame_period(fps: f64) -> Duration {
    Duration::from_secs_f64(1.0 / fps)
}

/// Ticks `bouncer` every `period` until input arrives or `interrupted` is
/// raised. The flag is checked once per tick, before any work.
pub fn run<S, R, I>(
    bouncer: &mut Bouncer<S, R>,
    input: &mut I,
    period: Duration,
    interrupted: &AtomicBool,
) -> Result<StopReason, BounceError>
where
    S: Surface,
    R: Rng,
    I: InputSource,
{
    let mut next_frame = Instant::now();
    let mut ticks: u64 = 0;

    let reason = loop {
        if interrupted.load(Ordering::Relaxed) {
            break StopReason::Interrupted;
        }

        let flow = bouncer.tick(input)?;
        ticks = ticks.saturating_add(1);
        tracing::trace!(tick = ticks, pos = ?bouncer.position(), vel = ?bouncer.velocity());
        if let ControlFlow::Break(reason) = flow {
            break reason;
        }

        next_frame += period;
        let now = Instant::now();
        if now > next_frame {
            next_frame = now;
        } else {
            thread::sleep(next_frame - now);
        }
    };

    tracing::info!(?reason, ticks, color = %bouncer.color(), "animation stopped");
    Ok(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bouncer::tests::{Recorder, Script};
    use crate::logo::LogoBlock;
    use crate::palette::{ColorPolicy, LogoColor};
    use crate::surface::InputEvent;
    use rand::{rngs::StdRng, SeedableRng};

    fn bouncer(screen: &Recorder) -> Bouncer<Recorder> {
        Bouncer::with_rng(
            LogoBlock::from_text("LOGO\nLOGO"),
            screen.clone(),
            ColorPolicy::Fixed(LogoColor::Red),
            StdRng::seed_from_u64(3),
        )
        .unwrap()
    }

    #[test]
    fn period_matches_fps() {
        assert_eq!(frame_period(DEFAULT_FPS), Duration::from_millis(100));
    }

    #[test]
    fn stops_on_first_input_with_no_further_frames() {
        let screen = Recorder::new(10, 20);
        let mut b = bouncer(&screen);
        let mut input = Script::after(4, InputEvent::Key);
        let flag = AtomicBool::new(false);

        let reason = run(&mut b, &mut input, Duration::ZERO, &flag).unwrap();
        assert_eq!(reason, StopReason::Input);
        assert_eq!(screen.presents(), 5);
        assert_eq!(b.position(), (10, 5));
    }

    #[test]
    fn raised_flag_stops_before_any_tick() {
        let screen = Recorder::new(10, 20);
        let mut b = bouncer(&screen);
        let flag = AtomicBool::new(true);

        let reason = run(&mut b, &mut Script::default(), Duration::ZERO, &flag).unwrap();
        assert_eq!(reason, StopReason::Interrupted);
        assert_eq!(screen.presents(), 0);
        assert_eq!(b.position(), (0, 0));
    }

    #[test]
    fn ctrl_c_event_is_an_interrupt() {
        let screen = Recorder::new(10, 20);
        let mut b = bouncer(&screen);
        let mut input = Script::after(1, InputEvent::Interrupt);
        let flag = AtomicBool::new(false);

        let reason = run(&mut b, &mut input, Duration::ZERO, &flag).unwrap();
        assert_eq!(reason, StopReason::Interrupted);
        assert_eq!(screen.presents(), 2);
    }

    #[test]
    fn surface_errors_end_the_loop() {
        let screen = Recorder::new(10, 20);
        screen.0.borrow_mut().fail_present = true;
        let mut b = bouncer(&screen);
        let flag = AtomicBool::new(false);

        let err = run(&mut b, &mut Script::default(), Duration::ZERO, &flag).unwrap_err();
        assert!(matches!(err, BounceError::Surface(_)));
    }

    #[test]
    fn keeps_pace_with_the_period() {
        let screen = Recorder::new(10, 20);
        let mut b = bouncer(&screen);
        let mut input = Script::after(3, InputEvent::Key);
        let flag = AtomicBool::new(false);

        let start = Instant::now();
        run(&mut b, &mut input, Duration::from_millis(5), &flag).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
