//! Appointment request screen.
//!
//! Collects a doctor name and a motive; the request goes nowhere beyond a
//! confirmation notice.

use super::{card_frame, screen_header, Notice, ScreenResult};
use crate::ui::app::state::{AppointmentForm, Screen};
use crate::ui::theme::AppTheme;
use crate::ui::widgets::{primary_button, LabeledField};

pub fn show(ui: &mut egui::Ui, form: &mut AppointmentForm, theme: &AppTheme) -> ScreenResult {
    let mut result = ScreenResult::none();

    if let Some(back) = screen_header(ui, theme, "Request appointment", Some(Screen::Main)) {
        return ScreenResult::navigate(back);
    }

    card_frame(theme).show(ui, |ui| {
        LabeledField::new("Doctor")
            .placeholder("Who would you like to see?")
            .show(ui, &mut form.doctor, theme);

        LabeledField::new("Motive")
            .placeholder("Describe the reason for your visit")
            .multiline()
            .show(ui, &mut form.motive, theme);

        if primary_button(ui, theme, "Send request").clicked() {
            result = if form.is_complete() {
                ScreenResult::notice_then(
                    Notice::new("Appointment", "Your appointment request was sent."),
                    Screen::Main,
                )
            } else {
                ScreenResult::notice(Notice::required_fields())
            };
        }
    });

    result
}
