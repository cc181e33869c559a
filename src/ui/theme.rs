//! Theme palettes for the app shell.
//!
//! Two built-in palettes (light and dark) cover every color the screens
//! use. The active palette follows the system by default and can be
//! overridden from the profile screen.

use egui::{Color32, Context};

use crate::models::settings::ThemePreference;

#[derive(Debug, Clone)]
pub struct AppTheme {
    /// Whether this palette is based on the dark egui visuals.
    pub is_dark: bool,

    /// Window background behind every screen.
    pub app_background: Color32,

    /// Card surfaces (forms, calendar, medication entries).
    pub card_background: Color32,

    /// Card outline.
    pub card_border: Color32,

    /// Primary action color (buttons, highlights).
    pub accent: Color32,

    /// Text drawn on top of the accent color.
    pub accent_text: Color32,

    /// Background of today's cell in the calendar grid.
    pub today_background: Color32,

    /// Border of today's cell.
    pub today_border: Color32,

    /// Background of empty placeholder cells.
    pub calendar_empty: Color32,

    /// Primary text color.
    pub text_primary: Color32,

    /// Secondary text color (labels, captions).
    pub text_secondary: Color32,
}

impl AppTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 246, 248),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(222, 226, 230),
            accent: Color32::from_rgb(32, 120, 108),
            accent_text: Color32::WHITE,
            today_background: Color32::from_rgb(218, 240, 235),
            today_border: Color32::from_rgb(32, 120, 108),
            calendar_empty: Color32::from_rgb(240, 241, 243),
            text_primary: Color32::from_rgb(38, 42, 46),
            text_secondary: Color32::from_rgb(108, 116, 124),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 26, 28),
            card_background: Color32::from_rgb(34, 37, 40),
            card_border: Color32::from_rgb(56, 60, 64),
            accent: Color32::from_rgb(64, 168, 152),
            accent_text: Color32::from_rgb(18, 20, 22),
            today_background: Color32::from_rgb(36, 62, 56),
            today_border: Color32::from_rgb(64, 168, 152),
            calendar_empty: Color32::from_rgb(29, 31, 34),
            text_primary: Color32::from_rgb(228, 230, 232),
            text_secondary: Color32::from_rgb(148, 154, 160),
        }
    }

    /// Resolve a stored preference, asking the OS when set to System.
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Push this palette into the egui visuals for the frame.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.card_background;
        visuals.window_stroke = egui::Stroke::new(1.0, self.card_border);
        visuals.override_text_color = Some(self.text_primary);
        ctx.set_visuals(visuals);
    }
}
