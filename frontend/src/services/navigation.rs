use shared::Effect;
use yew::Callback;

use crate::services::logging::Logger;

/// Open `url` in a new tab. Nothing is awaited or retried.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        Logger::error_with_component("navigation", "no window available");
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Logger::info_with_component("navigation", &format!("opened {}", host_of(url))),
        Ok(None) => Logger::warn_with_component("navigation", "popup blocked by the browser"),
        Err(e) => Logger::error_with_component("navigation", &format!("window.open failed: {:?}", e)),
    }
}

/// Run the effects returned by a panel transition, in order.
pub fn run_effects(effects: Vec<Effect>, on_close: &Callback<()>) {
    for effect in effects {
        match effect {
            Effect::OpenExternal(url) => open_external(&url),
            Effect::CloseModal => on_close.emit(()),
        }
    }
}

/// Scheme and host only; message text in query strings stays out of the logs.
fn host_of(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    let end = url[after_scheme..]
        .find(['/', '?'])
        .map(|i| after_scheme + i)
        .unwrap_or(url.len());
    &url[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_host_of_strips_message() {
        assert_eq!(host_of("https://wa.me/5542999118913?text=Ol%C3%A1"), "https://wa.me");
        assert_eq!(host_of("https://search.google.com/local/writereview?placeid=x"), "https://search.google.com");
        assert_eq!(host_of("/portfolio-milano-2025.pdf"), "");
        assert_eq!(host_of("https://example.com"), "https://example.com");
    }
}
