//! Transient feedback messages.
//!
//! Non-blocking confirmations ("Theme updated") that sit at the bottom of
//! the window for a few seconds and fade out. Anything that needs an
//! acknowledgement goes through the notice dialog instead.

// Allow unused variants/methods - these are API surface for future use
#![allow(dead_code)]

use egui::{Align2, Color32, Context, RichText};
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(3);
const FADE_WINDOW: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

#[derive(Debug)]
struct Toast {
    message: String,
    kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    fn opacity(&self) -> f32 {
        let elapsed = self.shown_at.elapsed();
        if elapsed >= TOAST_TTL {
            return 0.0;
        }
        let remaining = TOAST_TTL - elapsed;
        if remaining < FADE_WINDOW {
            remaining.as_secs_f32() / FADE_WINDOW.as_secs_f32()
        } else {
            1.0
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    fn accent(kind: ToastKind, is_dark: bool) -> Color32 {
        match (kind, is_dark) {
            (ToastKind::Info, true) => Color32::from_rgb(110, 170, 240),
            (ToastKind::Info, false) => Color32::from_rgb(40, 90, 160),
            (ToastKind::Success, true) => Color32::from_rgb(110, 210, 140),
            (ToastKind::Success, false) => Color32::from_rgb(40, 130, 70),
        }
    }

    pub fn render(&mut self, ctx: &Context, is_dark: bool) {
        self.toasts.retain(|t| t.shown_at.elapsed() < TOAST_TTL);
        if self.toasts.is_empty() {
            return;
        }
        ctx.request_repaint();

        let base = if is_dark {
            Color32::from_rgb(48, 52, 56)
        } else {
            Color32::from_rgb(250, 250, 250)
        };

        for (index, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }
            let alpha = |c: Color32, max: f32| {
                Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (max * opacity) as u8)
            };
            let accent = Self::accent(toast.kind, is_dark);
            let y_offset = -16.0 - (index as f32) * 44.0;

            egui::Area::new(egui::Id::new(("toast", index)))
                .anchor(Align2::CENTER_BOTTOM, [0.0, y_offset])
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(alpha(base, 235.0))
                        .rounding(egui::Rounding::same(18.0))
                        .stroke(egui::Stroke::new(1.0, alpha(accent, 200.0)))
                        .inner_margin(egui::Margin::symmetric(14.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&toast.message).color(alpha(accent, 255.0)),
                            );
                        });
                });
        }
    }
}
