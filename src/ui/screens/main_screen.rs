//! Main screen: greeting, month calendar, reminder card, shortcuts.
//!
//! The calendar grid is regenerated every frame from the displayed month;
//! the reminder card routes its presses through the gesture state machine
//! so a quick tap opens the prescription while a five second hold fires a
//! haptic pulse instead.

use std::time::Instant;

use chrono::NaiveDate;
use egui::{Align2, FontId, RichText, Sense, Stroke, Vec2};

use super::{card_frame, ScreenResult};
use crate::models::patient::Patient;
use crate::services::calendar::{month_grid, CalendarCell, DisplayedMonth};
use crate::services::gesture::GestureOutcome;
use crate::services::haptics::Haptics;
use crate::ui::app::state::{MainState, Screen};
use crate::ui::theme::AppTheme;
use crate::ui::widgets::link_button;

const CELL_HEIGHT: f32 = 34.0;
const GRID_SPACING: f32 = 4.0;

pub fn show(
    ui: &mut egui::Ui,
    patient: &Patient,
    state: &mut MainState,
    haptics: &mut dyn Haptics,
    today: NaiveDate,
    now: Instant,
    theme: &AppTheme,
) -> ScreenResult {
    let mut result = ScreenResult::none();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("Hello, {}", patient.name))
                    .size(22.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(
                RichText::new(today.format("%A, %B %d").to_string())
                    .size(13.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(14.0);

            card_frame(theme).show(ui, |ui| {
                render_month_header(ui, state, today, theme);
                ui.add_space(6.0);
                render_month_grid(ui, state, today, theme);
            });
            ui.add_space(14.0);

            card_frame(theme).show(ui, |ui| {
                render_reminder_card(ui, patient, state, haptics, now, theme, &mut result);
            });
            ui.add_space(14.0);

            card_frame(theme).show(ui, |ui| {
                render_appointments(ui, patient, theme);
            });
            ui.add_space(14.0);

            ui.horizontal(|ui| {
                if link_button(ui, theme, "Request appointment").clicked() {
                    result.merge(ScreenResult::navigate(Screen::Appointment));
                }
                ui.separator();
                if link_button(ui, theme, "Prescription").clicked() {
                    result.merge(ScreenResult::navigate(Screen::Prescription));
                }
                ui.separator();
                if link_button(ui, theme, "Profile").clicked() {
                    result.merge(ScreenResult::navigate(Screen::Profile));
                }
            });
        });

    result
}

fn render_month_header(
    ui: &mut egui::Ui,
    state: &mut MainState,
    today: NaiveDate,
    theme: &AppTheme,
) {
    ui.horizontal(|ui| {
        if ui.small_button("◀").on_hover_text("Previous month").clicked() {
            state.displayed_month = state.displayed_month.previous();
        }

        // The next-month button claims the right edge first; the title is
        // centered in whatever width remains.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                state.displayed_month = state.displayed_month.next();
            }

            let title = state.displayed_month.title();
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    if ui
                        .selectable_label(false, RichText::new(title).strong())
                        .on_hover_text("Go to current month")
                        .clicked()
                    {
                        state.displayed_month = DisplayedMonth::from_date(today);
                    }
                },
            );
        });
    });

    ui.add_space(6.0);

    // Weekday strip, Sunday first to match the grid's leading offset.
    let day_names = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
    let col_width = (ui.available_width() - GRID_SPACING * 6.0) / 7.0;
    egui::Grid::new("weekday_header")
        .num_columns(7)
        .spacing([GRID_SPACING, GRID_SPACING])
        .min_col_width(col_width)
        .max_col_width(col_width)
        .show(ui, |ui| {
            for name in day_names {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(name)
                            .size(12.0)
                            .strong()
                            .color(theme.text_secondary),
                    );
                });
            }
            ui.end_row();
        });
}

fn render_month_grid(ui: &mut egui::Ui, state: &mut MainState, today: NaiveDate, theme: &AppTheme) {
    let cells = month_grid(state.displayed_month, today);
    let col_width = (ui.available_width() - GRID_SPACING * 6.0) / 7.0;

    egui::Grid::new("month_grid")
        .num_columns(7)
        .spacing([GRID_SPACING, GRID_SPACING])
        .min_col_width(col_width)
        .max_col_width(col_width)
        .show(ui, |ui| {
            for (index, cell) in cells.iter().enumerate() {
                render_cell(ui, *cell, col_width, theme);
                if index % 7 == 6 {
                    ui.end_row();
                }
            }
        });
}

fn render_cell(ui: &mut egui::Ui, cell: CalendarCell, col_width: f32, theme: &AppTheme) {
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::hover());

    match cell {
        CalendarCell::Empty => {
            ui.painter().rect_filled(rect, 4.0, theme.calendar_empty);
        }
        CalendarCell::Day { day, is_today } => {
            if is_today {
                ui.painter().rect_filled(rect, 4.0, theme.today_background);
                ui.painter()
                    .rect_stroke(rect, 4.0, Stroke::new(1.5, theme.today_border));
            } else {
                ui.painter().rect_filled(rect, 4.0, theme.card_background);
            }
            let text_color = if is_today {
                theme.today_border
            } else {
                theme.text_primary
            };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                day.to_string(),
                FontId::proportional(14.0),
                text_color,
            );
        }
    }
}

fn render_reminder_card(
    ui: &mut egui::Ui,
    patient: &Patient,
    state: &mut MainState,
    haptics: &mut dyn Haptics,
    now: Instant,
    theme: &AppTheme,
    result: &mut ScreenResult,
) {
    ui.label(
        RichText::new("Next dose")
            .size(13.0)
            .color(theme.text_secondary),
    );
    if let Some(med) = patient.medications.first() {
        ui.label(
            RichText::new(format!("{} {}", med.name, med.dose))
                .size(17.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            RichText::new(med.frequency.clone())
                .size(13.0)
                .color(theme.text_secondary),
        );
    }
    ui.add_space(8.0);

    let label = if state.reminder_gesture.is_holding() {
        "Keep holding to buzz…"
    } else {
        "Tap to review (hold 5s to buzz)"
    };
    let response = ui.add_sized(
        [ui.available_width(), 40.0],
        egui::Button::new(RichText::new(label).color(theme.accent_text))
            .fill(theme.accent)
            .rounding(egui::Rounding::same(8.0)),
    );

    if response.is_pointer_button_down_on() {
        if !state.reminder_gesture.is_active() {
            state.reminder_gesture.press_started(now);
        }
        if state.reminder_gesture.poll(now, haptics) {
            // Keep frames coming while the hold deadline is armed.
            ui.ctx().request_repaint();
        }
    } else if state.reminder_gesture.is_active() {
        match state.reminder_gesture.press_released(now, haptics) {
            GestureOutcome::QuickTap => {
                result.merge(ScreenResult::navigate(Screen::Prescription));
            }
            GestureOutcome::LongHold | GestureOutcome::None => {}
        }
    }
}

fn render_appointments(ui: &mut egui::Ui, patient: &Patient, theme: &AppTheme) {
    ui.label(
        RichText::new("Upcoming appointments")
            .size(13.0)
            .color(theme.text_secondary),
    );
    ui.add_space(4.0);

    if patient.appointments.is_empty() {
        ui.label(RichText::new("Nothing scheduled.").color(theme.text_secondary));
        return;
    }

    for appointment in &patient.appointments {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(appointment.date.format("%b %d").to_string())
                    .strong()
                    .color(theme.accent),
            );
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} · {}",
                        appointment.doctor, appointment.specialty
                    ))
                    .color(theme.text_primary),
                );
                ui.label(
                    RichText::new(appointment.motive.clone())
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            });
        });
        ui.add_space(6.0);
    }
}
