// Application settings model
// The theme preference is the only thing that survives a restart; screen
// and form state never do.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::System => "System",
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    pub theme: ThemePreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = AppSettings {
            theme: ThemePreference::Dark,
        };
        let raw = toml::to_string(&settings).unwrap();
        assert!(raw.contains("theme = \"dark\""));
        let parsed: AppSettings = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: AppSettings = toml::from_str("").unwrap();
        assert_eq!(parsed.theme, ThemePreference::System);
    }
}
