//! Screen identifiers and per-screen state.
//!
//! Form state lives here so the shell can reset it when the user navigates
//! away; nothing in this module outlives navigation.

use chrono::NaiveDate;

use crate::services::calendar::DisplayedMonth;
use crate::services::gesture::PressGesture;

/// Every navigable screen. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Main,
    Appointment,
    Prescription,
    Profile,
    ChangePassword,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Salus",
            Screen::Login => "Sign in",
            Screen::Main => "My health",
            Screen::Appointment => "Request appointment",
            Screen::Prescription => "Prescription",
            Screen::Profile => "Profile",
            Screen::ChangePassword => "Change password",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub patient_id: String,
    pub password: String,
}

impl LoginForm {
    /// Required-field check; nothing beyond non-emptiness is validated.
    pub fn is_complete(&self) -> bool {
        !self.patient_id.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppointmentForm {
    pub doctor: String,
    pub motive: String,
}

impl AppointmentForm {
    pub fn is_complete(&self) -> bool {
        !self.doctor.trim().is_empty() && !self.motive.trim().is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

impl PasswordForm {
    pub fn is_complete(&self) -> bool {
        !self.current.trim().is_empty()
            && !self.new_password.trim().is_empty()
            && !self.confirm.trim().is_empty()
    }
}

/// State owned by the main calendar screen.
pub struct MainState {
    pub displayed_month: DisplayedMonth,
    pub reminder_gesture: PressGesture,
}

impl MainState {
    /// Fresh state for a newly mounted main screen; the calendar opens on
    /// the current month.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            displayed_month: DisplayedMonth::from_date(today),
            reminder_gesture: PressGesture::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_require_every_field() {
        let mut login = LoginForm::default();
        assert!(!login.is_complete());
        login.patient_id = "MX-2041-88".to_string();
        assert!(!login.is_complete());
        login.password = "hunter2".to_string();
        assert!(login.is_complete());
    }

    #[test]
    fn whitespace_only_fields_do_not_count() {
        let form = AppointmentForm {
            doctor: "  ".to_string(),
            motive: "Checkup".to_string(),
        };
        assert!(!form.is_complete());
    }

    #[test]
    fn main_state_opens_on_the_current_month() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
        let state = MainState::new(today);
        assert_eq!(state.displayed_month, DisplayedMonth::new(2025, 11));
        assert!(!state.reminder_gesture.is_active());
    }
}
