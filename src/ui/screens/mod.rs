//! Screen rendering modules.
//!
//! Each screen exposes a `show` function that draws into the provided `Ui`
//! and reports what the user asked for through a [`ScreenResult`]; the app
//! shell applies the result after the frame. Screens never navigate or open
//! dialogs themselves.

pub mod appointment;
pub mod change_password;
pub mod home;
pub mod login;
pub mod main_screen;
pub mod prescription;
pub mod profile;

use egui::{Margin, RichText, Stroke, Ui};

use crate::ui::app::state::Screen;
use crate::ui::theme::AppTheme;

/// A blocking notice surfaced to the user (title + message + OK).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The standard incomplete-form notice.
    pub fn required_fields() -> Self {
        Self::new("Missing information", "All fields are required.")
    }
}

/// What a screen asked the shell to do this frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScreenResult {
    pub navigate: Option<Screen>,
    pub notice: Option<Notice>,
}

impl ScreenResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn navigate(target: Screen) -> Self {
        Self {
            navigate: Some(target),
            notice: None,
        }
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            navigate: None,
            notice: Some(notice),
        }
    }

    /// Show a notice over `target`: the navigation happens immediately and
    /// the notice stays on top of the destination screen.
    pub fn notice_then(notice: Notice, target: Screen) -> Self {
        Self {
            navigate: Some(target),
            notice: Some(notice),
        }
    }

    pub fn merge(&mut self, other: ScreenResult) {
        if other.navigate.is_some() {
            self.navigate = other.navigate;
        }
        if other.notice.is_some() {
            self.notice = other.notice;
        }
    }
}

/// Card frame shared by every screen surface.
pub(crate) fn card_frame(theme: &AppTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(egui::Rounding::same(8.0))
        .stroke(Stroke::new(1.0, theme.card_border))
        .inner_margin(Margin::same(16.0))
}

/// Header strip with an optional back action. Returns the back target when
/// it was clicked.
pub(crate) fn screen_header(
    ui: &mut Ui,
    theme: &AppTheme,
    title: &str,
    back: Option<Screen>,
) -> Option<Screen> {
    let mut clicked_back = None;
    ui.horizontal(|ui| {
        if let Some(target) = back {
            if ui
                .add(egui::Button::new(RichText::new("←").size(18.0)).frame(false))
                .on_hover_text("Back")
                .clicked()
            {
                clicked_back = Some(target);
            }
        }
        ui.label(
            RichText::new(title)
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
    });
    ui.add_space(12.0);
    clicked_back
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_the_latest_request() {
        let mut result = ScreenResult::navigate(Screen::Login);
        result.merge(ScreenResult::notice(Notice::required_fields()));
        assert_eq!(result.navigate, Some(Screen::Login));
        assert!(result.notice.is_some());

        result.merge(ScreenResult::navigate(Screen::Main));
        assert_eq!(result.navigate, Some(Screen::Main));
    }
}
