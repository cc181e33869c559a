//! Change password screen.
//!
//! Like the rest of the app there is no account backend; the only check is
//! that every field is filled in.

use super::{card_frame, screen_header, Notice, ScreenResult};
use crate::ui::app::state::{PasswordForm, Screen};
use crate::ui::theme::AppTheme;
use crate::ui::widgets::{primary_button, LabeledField};

pub fn show(ui: &mut egui::Ui, form: &mut PasswordForm, theme: &AppTheme) -> ScreenResult {
    let mut result = ScreenResult::none();

    if let Some(back) = screen_header(ui, theme, "Change password", Some(Screen::Profile)) {
        return ScreenResult::navigate(back);
    }

    card_frame(theme).show(ui, |ui| {
        LabeledField::new("Current password")
            .obscured()
            .show(ui, &mut form.current, theme);

        LabeledField::new("New password")
            .obscured()
            .show(ui, &mut form.new_password, theme);

        LabeledField::new("Confirm new password")
            .obscured()
            .show(ui, &mut form.confirm, theme);

        if primary_button(ui, theme, "Update password").clicked() {
            result = if form.is_complete() {
                ScreenResult::notice_then(
                    Notice::new("Password", "Your password was updated."),
                    Screen::Profile,
                )
            } else {
                ScreenResult::notice(Notice::required_fields())
            };
        }
    });

    result
}
