//! Haptic feedback abstraction.
//!
//! The press-duration gesture fires a single vibration pulse through this
//! trait. It is a fire-and-forget collaborator: no return value, no failure
//! observable to the caller.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Haptics {
    fn vibrate(&mut self, duration: Duration);
}

/// Desktop backend. There is no vibration hardware to drive, so the pulse
/// is only logged.
#[derive(Debug, Default)]
pub struct DesktopHaptics;

impl Haptics for DesktopHaptics {
    fn vibrate(&mut self, duration: Duration) {
        log::debug!("haptic pulse for {:?}", duration);
    }
}
