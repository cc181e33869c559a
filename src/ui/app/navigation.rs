use super::state::{MainState, Screen};
use super::SalusApp;

impl SalusApp {
    /// Swap the mounted screen. The departing screen's state is discarded;
    /// the destination mounts fresh.
    pub fn navigate(&mut self, target: Screen) {
        if target == self.screen {
            return;
        }
        log::info!("Navigating {:?} -> {:?}", self.screen, target);
        self.unmount(self.screen);
        if target == Screen::Main {
            self.main_state = MainState::new(self.clock.today());
        }
        self.screen = target;
    }

    /// Reset state owned by the screen being left.
    fn unmount(&mut self, departing: Screen) {
        match departing {
            Screen::Login => self.login_form = Default::default(),
            Screen::Appointment => self.appointment_form = Default::default(),
            Screen::ChangePassword => self.password_form = Default::default(),
            // A press held across navigation must not fire later.
            Screen::Main => self.main_state.reminder_gesture.cancel(),
            Screen::Home | Screen::Prescription | Screen::Profile => {}
        }
    }
}
