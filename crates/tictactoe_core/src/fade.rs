//! Frame-driven fade for the win banner.
//!
//! The banner pulses between transparent and opaque for a fixed duration.
//! Nothing here sleeps; the event loop calls [`BannerFade::tick`] once per
//! frame and keeps handling input in between.

use std::time::{Duration, Instant};
use tracing::instrument;

/// Alpha change per frame.
pub const FADE_STEP: u8 = 5;

/// Default time the banner keeps pulsing.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_secs(4);

/// Ping-pong alpha animation with a deadline.
#[derive(Debug, Clone)]
pub struct BannerFade {
    started: Instant,
    duration: Duration,
    alpha: u8,
    fading_in: bool,
}

impl BannerFade {
    /// Starts a fade now, fully transparent and brightening.
    #[instrument]
    pub fn start(duration: Duration) -> Self {
        Self::start_at(Instant::now(), duration)
    }

    /// Starts a fade at a given instant.
    pub fn start_at(started: Instant, duration: Duration) -> Self {
        Self {
            started,
            duration,
            alpha: 0,
            fading_in: true,
        }
    }

    /// Advances the animation by one frame.
    pub fn tick(&mut self) {
        if self.fading_in {
            self.alpha = self.alpha.saturating_add(FADE_STEP);
            if self.alpha == u8::MAX {
                self.fading_in = false;
            }
        } else {
            self.alpha = self.alpha.saturating_sub(FADE_STEP);
            if self.alpha == 0 {
                self.fading_in = true;
            }
        }
    }

    /// True once the duration has elapsed at `now`.
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// True once the duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.is_finished_at(Instant::now())
    }

    /// Current alpha, or fully opaque after the deadline.
    pub fn alpha_at(&self, now: Instant) -> u8 {
        if self.is_finished_at(now) {
            u8::MAX
        } else {
            self.alpha
        }
    }

    /// Current alpha as a `0.0..=1.0` factor.
    pub fn opacity_at(&self, now: Instant) -> f32 {
        f32::from(self.alpha_at(now)) / f32::from(u8::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_transparent() {
        let now = Instant::now();
        let fade = BannerFade::start_at(now, DEFAULT_FADE_DURATION);
        assert_eq!(fade.alpha_at(now), 0);
    }

    #[test]
    fn test_ping_pong() {
        let now = Instant::now();
        let mut fade = BannerFade::start_at(now, Duration::from_secs(60));

        // 255 / 5 frames to reach full opacity
        for _ in 0..51 {
            fade.tick();
        }
        assert_eq!(fade.alpha_at(now), 255);

        fade.tick();
        assert_eq!(fade.alpha_at(now), 250);

        for _ in 0..50 {
            fade.tick();
        }
        assert_eq!(fade.alpha_at(now), 0);

        fade.tick();
        assert_eq!(fade.alpha_at(now), 5);
    }

    #[test]
    fn test_solid_after_deadline() {
        let now = Instant::now();
        let fade = BannerFade::start_at(now, Duration::from_millis(100));
        assert!(!fade.is_finished_at(now));

        let later = now + Duration::from_millis(100);
        assert!(fade.is_finished_at(later));
        assert_eq!(fade.alpha_at(later), 255);
        assert!((fade.opacity_at(later) - 1.0).abs() < f32::EPSILON);
    }
}
