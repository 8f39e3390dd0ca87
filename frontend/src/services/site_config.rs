use shared::SiteConfig;

use crate::services::logging::Logger;

/// Id of the optional `<script type="application/json">` override in index.html.
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Site config for this page: the embedded JSON override when present and
/// valid, the built-in defaults otherwise.
pub fn load_site_config() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match SiteConfig::from_json(&raw) {
            Ok(config) => {
                Logger::info_with_component("site-config", "using embedded config override");
                config
            }
            Err(e) => {
                Logger::error_with_component("site-config", &format!("{}; falling back to defaults", e));
                SiteConfig::default()
            }
        },
        _ => SiteConfig::default(),
    }
}
