use log::warn;

pub const DEFAULT_WEBHOOK_URL: &str = "/api/webhook/youtube-summary";
pub const DEFAULT_APP_NAME: &str = "YouTube Video Summarizer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub webhook_url: String,
    pub app_name: String,
    pub debug_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            debug_mode: false,
        }
    }
}

impl AppConfig {
    /// Builds the config from a key lookup such as `window.ENV_CONFIG`.
    /// Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let webhook_url = lookup("WEBHOOK_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.webhook_url);
        let app_name = lookup("APP_NAME").unwrap_or(defaults.app_name);
        let debug_mode = match lookup("DEBUG_MODE") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("DEBUG_MODE value '{raw}' is not a bool, using false");
                false
            }),
            None => defaults.debug_mode,
        };

        Self {
            webhook_url,
            app_name,
            debug_mode,
        }
    }
}
