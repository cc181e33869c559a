//! Blocking notice dialog.
//!
//! The app's only modal surface: a title, a message, and an OK button.
//! While a notice is open the screen underneath is disabled, matching the
//! "surface a blocking notice and take no other action" form semantics.

use egui::{Context, RichText};

use crate::ui::screens::Notice;

#[derive(Debug, Default)]
pub struct NoticeDialog {
    pending: Option<Notice>,
}

impl NoticeDialog {
    pub fn show(&mut self, notice: Notice) {
        self.pending = Some(notice);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn render(&mut self, ctx: &Context) {
        let Some(notice) = self.pending.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(260.0);
                ui.set_max_width(340.0);

                ui.add_space(8.0);
                ui.label(&notice.message);
                ui.add_space(14.0);
                ui.separator();
                ui.add_space(8.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("OK").strong()).clicked() {
                        dismissed = true;
                    }
                });
                ui.add_space(4.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            || ctx.input(|i| i.key_pressed(egui::Key::Enter))
        {
            dismissed = true;
        }

        if dismissed {
            self.pending = None;
        }
    }
}
