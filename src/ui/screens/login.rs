//! Sign-in screen.
//!
//! There is no authentication backend; any non-empty credentials proceed.

use super::{card_frame, screen_header, Notice, ScreenResult};
use crate::ui::app::state::{LoginForm, Screen};
use crate::ui::theme::AppTheme;
use crate::ui::widgets::{primary_button, LabeledField};

pub fn show(ui: &mut egui::Ui, form: &mut LoginForm, theme: &AppTheme) -> ScreenResult {
    let mut result = ScreenResult::none();

    if let Some(back) = screen_header(ui, theme, "Sign in", Some(Screen::Home)) {
        return ScreenResult::navigate(back);
    }

    card_frame(theme).show(ui, |ui| {
        LabeledField::new("Patient ID")
            .placeholder("Your clave única")
            .show(ui, &mut form.patient_id, theme);

        LabeledField::new("Password")
            .placeholder("••••••••")
            .obscured()
            .show(ui, &mut form.password, theme);

        if primary_button(ui, theme, "Sign in").clicked() {
            result = if form.is_complete() {
                ScreenResult::navigate(Screen::Main)
            } else {
                ScreenResult::notice(Notice::required_fields())
            };
        }
    });

    result
}
