/// Per-call options handed over by the JavaScript loader
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Where outcome notices are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSurface {
    /// Transient banner injected into the Gmail page
    #[default]
    Banner,
    /// Notification API of the browser
    Host,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub surface: NoticeSurface,
    pub banner_duration_ms: u32,
    pub fade_ms: u32,
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            surface: NoticeSurface::Banner,
            banner_duration_ms: 3000,
            fade_ms: 300,
        }
    }

    /// Read settings from a JS object, falling back to defaults
    pub fn from_js(value: JsValue) -> Self {
        if value.is_null() || value.is_undefined() {
            return Settings::new();
        }

        match serde_wasm_bindgen::from_value(value) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {:?}", e);
                Settings::new()
            }
        }
    }

    /// Same settings, reporting through browser notifications
    pub fn on_host_surface(&self) -> Self {
        Settings {
            surface: NoticeSurface::Host,
            ..self.clone()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.surface, NoticeSurface::Banner);
        assert_eq!(settings.banner_duration_ms, 3000);
        assert_eq!(settings.fade_ms, 300);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"surface":"host"}"#).unwrap();

        assert_eq!(settings.surface, NoticeSurface::Host);
        assert_eq!(settings.banner_duration_ms, 3000);
    }

    #[test]
    fn test_on_host_surface_keeps_durations() {
        let settings = Settings {
            banner_duration_ms: 1500,
            ..Settings::default()
        };
        let host = settings.on_host_surface();

        assert_eq!(host.surface, NoticeSurface::Host);
        assert_eq!(host.banner_duration_ms, 1500);
    }

    #[test]
    fn test_settings_field_names() {
        let settings: Settings = serde_json::from_str(r#"{"bannerDurationMs":1500,"fadeMs":100}"#).unwrap();

        assert_eq!(settings.surface, NoticeSurface::Banner);
        assert_eq!(settings.banner_duration_ms, 1500);
        assert_eq!(settings.fade_ms, 100);
    }
}
