use lazy_static::lazy_static;
use log::debug;
use web_sys::window;
use yt_summary_core::AppConfig;

lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_lookup(get_env_var);
}

/// Reads `window.ENV_CONFIG[key]`, injected by the page that hosts the app.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;
    if env_config.is_undefined() {
        debug!("ENV_CONFIG is undefined - using defaults for '{}'", key);
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;
    if value.is_undefined() {
        debug!("Environment variable '{}' is undefined", key);
        None
    } else {
        value.as_string()
    }
}
