//! Trigger-once viewport reveal and entrance timing.

use thiserror::Error;

/// Fraction of a section that must be visible before it is revealed.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Duration of a section entrance transition.
pub const ENTRANCE_MS: u32 = 600;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RevealError {
    #[error("visibility threshold {0} must be within 0.0..=1.0")]
    InvalidThreshold(f64),
}

/// Latches the first time a section is seen and never reverts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    revealed: bool,
    threshold: f64,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self {
            revealed: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Result<Self, RevealError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(RevealError::InvalidThreshold(threshold));
        }
        Ok(Self {
            revealed: false,
            threshold,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one visibility sample. Returns `true` only for the sample that
    /// flips the latch; every later sample is ignored.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.revealed || visible_fraction.is_nan() || visible_fraction < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Per-child start offsets: `base + step * index`, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    /// Saturates at `u32::MAX` for very long lists.
    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.step_ms.saturating_mul(index).saturating_add(self.base_ms)
    }
}

/// Where an element rests before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Fade,
    Rise,
    RiseFar,
    FromLeft,
    FromRight,
    Nudge,
    Pop,
}

impl Entrance {
    pub fn classes(self, revealed: bool) -> &'static str {
        if revealed {
            return "opacity-100 translate-x-0 translate-y-0 scale-100";
        }
        match self {
            Self::Fade => "opacity-0",
            Self::Rise => "opacity-0 translate-y-5",
            Self::RiseFar => "opacity-0 translate-y-12",
            Self::FromLeft => "opacity-0 -translate-x-12",
            Self::FromRight => "opacity-0 translate-x-12",
            Self::Nudge => "opacity-0 -translate-x-5",
            Self::Pop => "opacity-0 scale-75",
        }
    }

    /// Alternates sides for zig-zag lists: even rows from the left.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Self::FromLeft
        } else {
            Self::FromRight
        }
    }
}

pub fn transition_style(duration_ms: u32, delay_ms: u32) -> String {
    format!("transition-duration: {duration_ms}ms; transition-delay: {delay_ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert!(!latch.observe(0.05));
        // a bogus ratio from the observer is not a sighting
        assert!(!latch.observe(f64::NAN));
        assert!(!latch.is_revealed());
        assert!(latch.observe(0.1));
        assert!(latch.is_revealed());
        // scrolling out and back in changes nothing
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(1.0));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_latch_counts_flips() {
        let mut latch = RevealLatch::new(0.5).unwrap();
        let samples = [0.1, 0.6, 0.0, 0.9, 0.2, 0.7, 1.0];
        let flips = samples.iter().filter(|&&s| latch.observe(s)).count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn test_threshold_is_validated() {
        assert_eq!(RevealLatch::new(1.5), Err(RevealError::InvalidThreshold(1.5)));
        assert!(RevealLatch::new(-0.1).is_err());
        assert!(RevealLatch::new(f64::NAN).is_err());
        assert_eq!(RevealLatch::new(1.0).unwrap().threshold(), 1.0);
        assert_eq!(RevealLatch::default().threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_stagger_delay() {
        let stagger = Stagger::new(600, 100);
        assert_eq!(stagger.delay_ms(0), 600);
        assert_eq!(stagger.delay_ms(3), 900);
        assert_eq!(Stagger::new(0, 150).delay_ms(2), 300);
    }

    #[test]
    fn test_stagger_delay_saturates() {
        assert_eq!(Stagger::new(600, 100).delay_ms(50_000_000), u32::MAX);
        assert_eq!(Stagger::new(600, 0).delay_ms(usize::MAX), 600);
        assert_eq!(Stagger::new(u32::MAX, 1).delay_ms(1), u32::MAX);
    }

    #[test]
    fn test_entrance_classes() {
        assert_eq!(Entrance::Rise.classes(false), "opacity-0 translate-y-5");
        assert_eq!(Entrance::Pop.classes(true), Entrance::Rise.classes(true));
        assert_eq!(Entrance::alternating(0), Entrance::FromLeft);
        assert_eq!(Entrance::alternating(1), Entrance::FromRight);
    }

    #[test]
    fn test_transition_style() {
        assert_eq!(
            transition_style(600, 200),
            "transition-duration: 600ms; transition-delay: 200ms;"
        );
    }
}
