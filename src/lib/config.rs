//! Build-time configuration for the auth backend with an optional runtime
//! override. The runtime config is read from `window.MEDISENSE_CONFIG` (if
//! present) so static deployments can change endpoints without rebuilding.
//! The anon key is a public client key; do not store secrets here.

use crate::routes::paths;
use url::Url;

/// Redirect target used when neither the build nor the page provides one.
const FALLBACK_RESET_REDIRECT_URL: &str = "http://localhost:3000/reset-password";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub supabase_url: String,
    pub anon_key: String,
    pub reset_redirect_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let supabase_url = option_env!("MEDISENSE_SUPABASE_URL").unwrap_or("");
        let anon_key = option_env!("MEDISENSE_SUPABASE_ANON_KEY").unwrap_or("");
        let reset_redirect_url = option_env!("MEDISENSE_RESET_REDIRECT_URL")
            .and_then(normalize_runtime_value)
            .or_else(|| page_origin().and_then(|origin| reset_redirect_for_origin(&origin)))
            .unwrap_or_else(|| FALLBACK_RESET_REDIRECT_URL.to_string());

        let mut config = Self {
            supabase_url: supabase_url.to_string(),
            anon_key: anon_key.to_string(),
            reset_redirect_url,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    supabase_url: Option<String>,
    anon_key: Option<String>,
    reset_redirect_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.supabase_url {
        config.supabase_url = value;
    }
    if let Some(value) = runtime.anon_key {
        config.anon_key = value;
    }
    if let Some(value) = runtime.reset_redirect_url {
        config.reset_redirect_url = value;
    }
}

/// Builds the password-reset landing URL on the given site origin.
fn reset_redirect_for_origin(origin: &str) -> Option<String> {
    let base = Url::parse(origin.trim()).ok()?;
    if base.cannot_be_a_base() {
        return None;
    }
    base.join(paths::RESET_PASSWORD).ok().map(String::from)
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MEDISENSE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        supabase_url: read_runtime_value(&object, "supabase_url"),
        anon_key: read_runtime_value(&object, "anon_key"),
        reset_redirect_url: read_runtime_value(&object, "reset_redirect_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
