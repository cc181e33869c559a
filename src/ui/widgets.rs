//! Shared form widgets.
//!
//! Every form screen renders its inputs through the same labeled text
//! field instead of re-deriving field layout per screen.

use egui::{Response, RichText, TextEdit, Ui};

use crate::ui::theme::AppTheme;

/// A captioned text input, optionally obscured or multiline.
pub struct LabeledField<'a> {
    label: &'a str,
    placeholder: &'a str,
    obscured: bool,
    multiline: bool,
}

impl<'a> LabeledField<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            placeholder: "",
            obscured: false,
            multiline: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn obscured(mut self) -> Self {
        self.obscured = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn show(self, ui: &mut Ui, value: &mut String, theme: &AppTheme) -> Response {
        ui.label(
            RichText::new(self.label)
                .size(13.0)
                .color(theme.text_secondary),
        );
        ui.add_space(2.0);

        let edit = if self.multiline {
            TextEdit::multiline(value).desired_rows(3)
        } else {
            TextEdit::singleline(value).password(self.obscured)
        };
        let response = ui.add(
            edit.hint_text(self.placeholder)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);
        response
    }
}

/// Full-width accent button used for the primary action of a screen.
pub fn primary_button(ui: &mut Ui, theme: &AppTheme, text: &str) -> Response {
    ui.add_sized(
        [ui.available_width(), 36.0],
        egui::Button::new(RichText::new(text).color(theme.accent_text).strong())
            .fill(theme.accent)
            .rounding(egui::Rounding::same(6.0)),
    )
}

/// Borderless secondary action rendered as accent-colored text.
pub fn link_button(ui: &mut Ui, theme: &AppTheme, text: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(text).color(theme.accent)).frame(false))
}
