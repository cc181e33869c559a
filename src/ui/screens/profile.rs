//! Profile screen: patient details, theme preference, account actions.

use egui::RichText;

use super::{card_frame, screen_header, ScreenResult};
use crate::models::patient::Patient;
use crate::models::settings::ThemePreference;
use crate::ui::app::state::Screen;
use crate::ui::theme::AppTheme;
use crate::ui::widgets::{link_button, primary_button};

/// Profile output: besides navigation, the screen can change the theme
/// preference, which the shell owns.
#[derive(Debug, Default)]
pub struct ProfileOutput {
    pub result: ScreenResult,
    pub theme_preference: Option<ThemePreference>,
}

pub fn show(
    ui: &mut egui::Ui,
    patient: &Patient,
    current_preference: ThemePreference,
    theme: &AppTheme,
) -> ProfileOutput {
    let mut output = ProfileOutput::default();

    if let Some(back) = screen_header(ui, theme, "Profile", Some(Screen::Main)) {
        output.result = ScreenResult::navigate(back);
        return output;
    }

    card_frame(theme).show(ui, |ui| {
        detail_row(ui, theme, "Name", &patient.name);
        detail_row(ui, theme, "Patient ID", &patient.patient_id);
        detail_row(
            ui,
            theme,
            "Born",
            &patient.birth_date.format("%B %d, %Y").to_string(),
        );
        detail_row(ui, theme, "Blood type", &patient.blood_type);
        detail_row(ui, theme, "Contact", &patient.contact);
    });
    ui.add_space(14.0);

    card_frame(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Theme")
                    .size(13.0)
                    .color(theme.text_secondary),
            );
            let mut selected = current_preference;
            egui::ComboBox::from_id_source("theme_preference")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for preference in [
                        ThemePreference::System,
                        ThemePreference::Light,
                        ThemePreference::Dark,
                    ] {
                        ui.selectable_value(&mut selected, preference, preference.label());
                    }
                });
            if selected != current_preference {
                output.theme_preference = Some(selected);
            }
        });
    });
    ui.add_space(14.0);

    if primary_button(ui, theme, "Change password").clicked() {
        output.result.merge(ScreenResult::navigate(Screen::ChangePassword));
    }
    ui.add_space(8.0);
    if link_button(ui, theme, "Sign out").clicked() {
        output.result.merge(ScreenResult::navigate(Screen::Login));
    }

    output
}

fn detail_row(ui: &mut egui::Ui, theme: &AppTheme, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(label)
                .size(13.0)
                .color(theme.text_secondary),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).color(theme.text_primary));
        });
    });
    ui.add_space(4.0);
}
