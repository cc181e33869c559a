//! Landing screen shown before sign-in.

use egui::RichText;

use super::ScreenResult;
use crate::ui::app::state::Screen;
use crate::ui::theme::AppTheme;
use crate::ui::widgets::primary_button;

pub fn show(ui: &mut egui::Ui, theme: &AppTheme) -> ScreenResult {
    let mut result = ScreenResult::none();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.18);
        ui.label(RichText::new("♥").size(64.0).color(theme.accent));
        ui.add_space(8.0);
        ui.label(
            RichText::new("Salus")
                .size(34.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new("Medication and appointment reminders")
                .size(14.0)
                .color(theme.text_secondary),
        );
        ui.add_space(40.0);

        ui.scope(|ui| {
            ui.set_max_width(240.0);
            if primary_button(ui, theme, "Get started").clicked() {
                result = ScreenResult::navigate(Screen::Login);
            }
        });
    });

    result
}
