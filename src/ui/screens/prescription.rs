//! Prescription screen: the patient's medication list, read-only.

use egui::RichText;

use super::{card_frame, screen_header, ScreenResult};
use crate::models::patient::Patient;
use crate::ui::app::state::Screen;
use crate::ui::theme::AppTheme;

pub fn show(ui: &mut egui::Ui, patient: &Patient, theme: &AppTheme) -> ScreenResult {
    if let Some(back) = screen_header(ui, theme, "Prescription", Some(Screen::Main)) {
        return ScreenResult::navigate(back);
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for medication in &patient.medications {
                card_frame(theme).show(ui, |ui| {
                    ui.label(
                        RichText::new(format!("{} {}", medication.name, medication.dose))
                            .size(16.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(
                        RichText::new(medication.frequency.clone())
                            .size(13.0)
                            .color(theme.text_secondary),
                    );
                    if let Some(instructions) = &medication.instructions {
                        ui.label(
                            RichText::new(instructions.clone())
                                .size(13.0)
                                .italics()
                                .color(theme.text_secondary),
                        );
                    }
                });
                ui.add_space(10.0);
            }
        });

    ScreenResult::none()
}
