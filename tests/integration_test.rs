// Integration tests for navigation and form submission flows.
// The shell is driven through the same ScreenResult values the screens
// produce, so no window is needed.

use chrono::NaiveDate;
use salus::models::settings::{AppSettings, ThemePreference};
use salus::services::calendar::DisplayedMonth;
use salus::services::clock::Clock;
use salus::services::haptics::Haptics;
use salus::ui::app::state::Screen;
use salus::ui::screens::{Notice, ScreenResult};
use salus::ui::SalusApp;
use std::time::{Duration, Instant};

/// Fixed clock so month assertions do not depend on the wall clock.
struct FrozenClock {
    today: NaiveDate,
    now: Instant,
}

impl FrozenClock {
    fn new() -> Self {
        Self {
            today: NaiveDate::from_ymd_opt(2025, 11, 15).unwrap(),
            now: Instant::now(),
        }
    }
}

impl Clock for FrozenClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now(&self) -> Instant {
        self.now
    }
}

/// The shell is never polled here, so pulses can be dropped.
struct NullHaptics;

impl Haptics for NullHaptics {
    fn vibrate(&mut self, _duration: Duration) {}
}

fn test_app() -> SalusApp {
    // Explicit theme avoids asking the OS during tests.
    let settings = AppSettings {
        theme: ThemePreference::Dark,
    };
    SalusApp::with_settings(
        settings,
        None,
        Box::new(FrozenClock::new()),
        Box::new(NullHaptics),
    )
}

#[test]
fn app_starts_on_the_home_screen() {
    let app = test_app();
    assert_eq!(app.screen(), Screen::Home);
    assert!(!app.notice_open());
}

#[test]
fn full_walkthrough_reaches_every_screen() {
    let mut app = test_app();

    for target in [
        Screen::Login,
        Screen::Main,
        Screen::Appointment,
        Screen::Main,
        Screen::Prescription,
        Screen::Main,
        Screen::Profile,
        Screen::ChangePassword,
        Screen::Profile,
        Screen::Main,
    ] {
        app.apply_result(ScreenResult::navigate(target));
        assert_eq!(app.screen(), target);
    }
}

#[test]
fn incomplete_login_raises_a_blocking_notice_and_stays_put() {
    let mut app = test_app();
    app.apply_result(ScreenResult::navigate(Screen::Login));

    app.login_form_mut().patient_id = "MX-2041-88".to_string();
    let result = if app.login_form_mut().is_complete() {
        ScreenResult::navigate(Screen::Main)
    } else {
        ScreenResult::notice(Notice::required_fields())
    };
    app.apply_result(result);

    assert_eq!(app.screen(), Screen::Login);
    assert!(app.notice_open());
}

#[test]
fn complete_login_proceeds_to_main() {
    let mut app = test_app();
    app.apply_result(ScreenResult::navigate(Screen::Login));

    app.login_form_mut().patient_id = "MX-2041-88".to_string();
    app.login_form_mut().password = "hunter2".to_string();
    assert!(app.login_form_mut().is_complete());

    app.apply_result(ScreenResult::navigate(Screen::Main));
    assert_eq!(app.screen(), Screen::Main);
    assert!(!app.notice_open());
}

#[test]
fn form_state_is_discarded_on_navigation_away() {
    let mut app = test_app();
    app.apply_result(ScreenResult::navigate(Screen::Login));
    app.login_form_mut().patient_id = "MX-2041-88".to_string();
    app.login_form_mut().password = "hunter2".to_string();

    app.apply_result(ScreenResult::navigate(Screen::Main));
    app.apply_result(ScreenResult::navigate(Screen::Login));

    assert!(app.login_form_mut().patient_id.is_empty());
    assert!(app.login_form_mut().password.is_empty());
}

#[test]
fn calendar_remounts_on_the_current_month() {
    let mut app = test_app();
    app.apply_result(ScreenResult::navigate(Screen::Main));
    assert_eq!(
        app.main_state().displayed_month,
        DisplayedMonth::new(2025, 11)
    );

    // Page two months ahead, leave, and come back: the month resets.
    let state = app.main_state_mut();
    state.displayed_month = state.displayed_month.next().next();
    assert_eq!(state.displayed_month, DisplayedMonth::new(2026, 1));

    app.apply_result(ScreenResult::navigate(Screen::Profile));
    app.apply_result(ScreenResult::navigate(Screen::Main));
    assert_eq!(
        app.main_state().displayed_month,
        DisplayedMonth::new(2025, 11)
    );
}

#[test]
fn press_held_across_navigation_is_cancelled() {
    let mut app = test_app();
    app.apply_result(ScreenResult::navigate(Screen::Main));

    let now = Instant::now();
    app.main_state_mut().reminder_gesture.press_started(now);
    assert!(app.main_state().reminder_gesture.is_active());

    app.apply_result(ScreenResult::navigate(Screen::Profile));
    app.apply_result(ScreenResult::navigate(Screen::Main));
    assert!(!app.main_state().reminder_gesture.is_active());
}

#[test]
fn submit_confirmation_shows_a_notice_and_navigates() {
    let mut app = test_app();
    app.apply_result(ScreenResult::navigate(Screen::Login));
    app.apply_result(ScreenResult::navigate(Screen::Main));
    app.apply_result(ScreenResult::navigate(Screen::Appointment));

    app.appointment_form_mut().doctor = "Dr. Elena Ruiz".to_string();
    app.appointment_form_mut().motive = "Quarterly follow-up".to_string();
    assert!(app.appointment_form_mut().is_complete());

    app.apply_result(ScreenResult::notice_then(
        Notice::new("Appointment", "Your appointment request was sent."),
        Screen::Main,
    ));
    assert_eq!(app.screen(), Screen::Main);
    assert!(app.notice_open());
}
