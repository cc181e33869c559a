//! Quick-tap vs. long-hold press disambiguation.
//!
//! A pressed region either fires its quick action on release (tap) or, once
//! the hold threshold elapses, fires a single haptic pulse and swallows the
//! quick action for the rest of that gesture. The hold deadline is checked
//! from the frame loop rather than armed on a timer thread, the same way
//! toast expiry works; cancelling means replacing the session, so an
//! unpaired press-down can never leak an armed deadline.

use std::time::{Duration, Instant};

use crate::services::haptics::Haptics;

/// Per-instance gesture timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// How long a press must be held before it counts as a long hold.
    pub hold_threshold: Duration,
    /// Length of the haptic pulse fired for a long hold.
    pub pulse: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hold_threshold: Duration::from_millis(5000),
            pulse: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Holding { started_at: Instant },
    /// The pulse fired; the press has not been released yet.
    Vibrated,
}

/// What a completed gesture turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Release without a matching press; nothing to do.
    None,
    /// Released before the threshold; the caller runs the quick action.
    QuickTap,
    /// Held past the threshold; the pulse already fired and the quick
    /// action must not run.
    LongHold,
}

/// State machine for one pressable region.
///
/// Exactly one session is live at a time: a press-down while a session is
/// active replaces it outright.
#[derive(Debug)]
pub struct PressGesture {
    config: GestureConfig,
    phase: Phase,
}

impl PressGesture {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// A press is currently in progress (held, whether or not the pulse
    /// already fired).
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// The derived holding flag: armed and still before the threshold.
    pub fn is_holding(&self) -> bool {
        matches!(self.phase, Phase::Holding { .. })
    }

    /// Start a gesture. Replaces any session already in progress.
    pub fn press_started(&mut self, now: Instant) {
        self.phase = Phase::Holding { started_at: now };
    }

    /// Frame tick while the region may be pressed. Fires the haptic pulse
    /// exactly once when the threshold elapses. Returns the holding flag so
    /// the caller can keep requesting repaints while a deadline is armed.
    pub fn poll(&mut self, now: Instant, haptics: &mut dyn Haptics) -> bool {
        if let Phase::Holding { started_at } = self.phase {
            if now.duration_since(started_at) >= self.config.hold_threshold {
                haptics.vibrate(self.config.pulse);
                self.phase = Phase::Vibrated;
                return false;
            }
            return true;
        }
        false
    }

    /// End the gesture and classify it. A release after the threshold counts
    /// as a long hold even if no frame ran in between; the pulse is fired
    /// here in that case so it still happens exactly once.
    pub fn press_released(&mut self, now: Instant, haptics: &mut dyn Haptics) -> GestureOutcome {
        let outcome = match self.phase {
            Phase::Idle => GestureOutcome::None,
            Phase::Holding { started_at } => {
                if now.duration_since(started_at) >= self.config.hold_threshold {
                    haptics.vibrate(self.config.pulse);
                    GestureOutcome::LongHold
                } else {
                    GestureOutcome::QuickTap
                }
            }
            Phase::Vibrated => GestureOutcome::LongHold,
        };
        self.phase = Phase::Idle;
        outcome
    }

    /// Drop any session without classifying it. Used when the owning screen
    /// unmounts mid-press.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}

impl Default for PressGesture {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::haptics::MockHaptics;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn release_before_threshold_is_a_quick_tap() {
        let mut gesture = PressGesture::default();
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().never();

        let t0 = Instant::now();
        gesture.press_started(t0);
        assert!(gesture.poll(t0 + ms(2000), &mut haptics));
        assert_eq!(
            gesture.press_released(t0 + ms(2000), &mut haptics),
            GestureOutcome::QuickTap
        );
        assert!(!gesture.is_active());
    }

    #[test]
    fn threshold_expiry_fires_one_pulse_and_suppresses_the_tap() {
        let mut gesture = PressGesture::default();
        let mut haptics = MockHaptics::new();
        haptics
            .expect_vibrate()
            .withf(|d| *d == Duration::from_millis(500))
            .times(1)
            .return_const(());

        let t0 = Instant::now();
        gesture.press_started(t0);
        assert!(gesture.poll(t0 + ms(4999), &mut haptics));
        assert!(!gesture.poll(t0 + ms(5000), &mut haptics));
        // Further frames while still pressed must not pulse again.
        assert!(!gesture.poll(t0 + ms(6000), &mut haptics));
        assert_eq!(
            gesture.press_released(t0 + ms(6000), &mut haptics),
            GestureOutcome::LongHold
        );
    }

    #[test]
    fn two_fast_gestures_yield_two_quick_taps() {
        let mut gesture = PressGesture::default();
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().never();

        let t0 = Instant::now();
        gesture.press_started(t0);
        assert_eq!(
            gesture.press_released(t0 + ms(1000), &mut haptics),
            GestureOutcome::QuickTap
        );
        gesture.press_started(t0 + ms(1200));
        assert_eq!(
            gesture.press_released(t0 + ms(2000), &mut haptics),
            GestureOutcome::QuickTap
        );
    }

    #[test]
    fn repress_without_release_replaces_the_session() {
        let mut gesture = PressGesture::default();
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().never();

        let t0 = Instant::now();
        gesture.press_started(t0);
        // A second press-down 4s in restarts the clock; 2s later the first
        // session's deadline would have expired but the live one has not.
        gesture.press_started(t0 + ms(4000));
        assert!(gesture.poll(t0 + ms(6000), &mut haptics));
        assert!(gesture.is_holding());
    }

    #[test]
    fn release_after_missed_deadline_still_pulses_once() {
        let mut gesture = PressGesture::default();
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().times(1).return_const(());

        let t0 = Instant::now();
        gesture.press_started(t0);
        // No frame ran between arming and release; the threshold elapsed
        // regardless, so this is a long hold and the pulse fires on release.
        assert_eq!(
            gesture.press_released(t0 + ms(7000), &mut haptics),
            GestureOutcome::LongHold
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut gesture = PressGesture::default();
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().never();

        assert_eq!(
            gesture.press_released(Instant::now(), &mut haptics),
            GestureOutcome::None
        );
    }

    #[test]
    fn cancel_drops_the_session_silently() {
        let mut gesture = PressGesture::default();
        let mut haptics = MockHaptics::new();
        haptics.expect_vibrate().never();

        let t0 = Instant::now();
        gesture.press_started(t0);
        gesture.cancel();
        assert!(!gesture.is_active());
        assert_eq!(
            gesture.press_released(t0 + ms(100), &mut haptics),
            GestureOutcome::None
        );
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut gesture = PressGesture::new(GestureConfig {
            hold_threshold: ms(1000),
            pulse: ms(250),
        });
        let mut haptics = MockHaptics::new();
        haptics
            .expect_vibrate()
            .withf(|d| *d == Duration::from_millis(250))
            .times(1)
            .return_const(());

        let t0 = Instant::now();
        gesture.press_started(t0);
        assert!(!gesture.poll(t0 + ms(1000), &mut haptics));
    }
}
