//! The application shell.
//!
//! Owns the mounted screen, the demo patient record, per-screen state, the
//! theme, and the dialog/toast surfaces. Screens draw and report what the
//! user asked for; the shell applies those requests after the frame.

mod alert;
mod navigation;
pub mod state;
mod toast;

use self::alert::NoticeDialog;
use self::state::{AppointmentForm, LoginForm, MainState, PasswordForm, Screen};
use self::toast::ToastQueue;
use crate::models::patient::Patient;
use crate::models::settings::{AppSettings, ThemePreference};
use crate::services::clock::{Clock, SystemClock};
use crate::services::haptics::{DesktopHaptics, Haptics};
use crate::services::settings::SettingsService;
use crate::ui::screens::{self, ScreenResult};
use crate::ui::theme::AppTheme;

pub struct SalusApp {
    patient: Patient,
    settings: AppSettings,
    /// None when no config directory could be resolved; settings then live
    /// for the session only.
    settings_service: Option<SettingsService>,
    clock: Box<dyn Clock>,
    haptics: Box<dyn Haptics>,
    theme: AppTheme,
    screen: Screen,
    login_form: LoginForm,
    appointment_form: AppointmentForm,
    password_form: PasswordForm,
    main_state: MainState,
    notice_dialog: NoticeDialog,
    toasts: ToastQueue,
}

impl SalusApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_project_dirs();
        if settings_service.is_none() {
            log::warn!("No config directory available; settings will not persist");
        }
        let settings = settings_service
            .as_ref()
            .map(|service| service.load())
            .unwrap_or_default();

        let app = Self::with_settings(
            settings,
            settings_service,
            Box::new(SystemClock),
            Box::new(DesktopHaptics),
        );
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Assemble the shell from explicit parts. Used by `new` and by tests,
    /// which pass their own clock and haptics.
    pub fn with_settings(
        settings: AppSettings,
        settings_service: Option<SettingsService>,
        clock: Box<dyn Clock>,
        haptics: Box<dyn Haptics>,
    ) -> Self {
        let theme = AppTheme::from_preference(settings.theme);
        let main_state = MainState::new(clock.today());
        Self {
            patient: Patient::demo(),
            settings,
            settings_service,
            clock,
            haptics,
            theme,
            screen: Screen::Home,
            login_form: LoginForm::default(),
            appointment_form: AppointmentForm::default(),
            password_form: PasswordForm::default(),
            main_state,
            notice_dialog: NoticeDialog::default(),
            toasts: ToastQueue::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login_form
    }

    pub fn appointment_form_mut(&mut self) -> &mut AppointmentForm {
        &mut self.appointment_form
    }

    pub fn password_form_mut(&mut self) -> &mut PasswordForm {
        &mut self.password_form
    }

    pub fn main_state(&self) -> &MainState {
        &self.main_state
    }

    pub fn main_state_mut(&mut self) -> &mut MainState {
        &mut self.main_state
    }

    pub fn notice_open(&self) -> bool {
        self.notice_dialog.is_open()
    }

    /// Apply a screen's requests: notices first, then navigation.
    pub fn apply_result(&mut self, result: ScreenResult) {
        if let Some(notice) = result.notice {
            self.notice_dialog.show(notice);
        }
        if let Some(target) = result.navigate {
            self.navigate(target);
        }
    }

    fn set_theme_preference(&mut self, preference: ThemePreference) {
        if self.settings.theme == preference {
            return;
        }
        self.settings.theme = preference;
        self.theme = AppTheme::from_preference(preference);
        if let Some(service) = &self.settings_service {
            if let Err(err) = service.save(&self.settings) {
                log::warn!("Could not save settings: {}", err);
            }
        }
        self.toasts.success("Theme updated");
    }

    fn render_screen(&mut self, ui: &mut egui::Ui) -> ScreenResult {
        let today = self.clock.today();
        let now = self.clock.now();
        match self.screen {
            Screen::Home => screens::home::show(ui, &self.theme),
            Screen::Login => screens::login::show(ui, &mut self.login_form, &self.theme),
            Screen::Main => screens::main_screen::show(
                ui,
                &self.patient,
                &mut self.main_state,
                &mut *self.haptics,
                today,
                now,
                &self.theme,
            ),
            Screen::Appointment => {
                screens::appointment::show(ui, &mut self.appointment_form, &self.theme)
            }
            Screen::Prescription => screens::prescription::show(ui, &self.patient, &self.theme),
            Screen::Profile => {
                let output = screens::profile::show(ui, &self.patient, self.settings.theme, &self.theme);
                if let Some(preference) = output.theme_preference {
                    self.set_theme_preference(preference);
                }
                output.result
            }
            Screen::ChangePassword => {
                screens::change_password::show(ui, &mut self.password_form, &self.theme)
            }
        }
    }
}

impl eframe::App for SalusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme.apply(ctx);

        let blocked = self.notice_dialog.is_open();
        let result = egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.app_background)
                    .inner_margin(egui::Margin::symmetric(24.0, 20.0)),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| self.render_screen(ui)).inner
            })
            .inner;

        self.notice_dialog.render(ctx);
        let is_dark = self.theme.is_dark;
        self.toasts.render(ctx, is_dark);

        self.apply_result(result);
    }
}
