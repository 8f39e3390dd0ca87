use gloo::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, component);
    }

    fn log(level: Level, message: &str, component: &str) {
        // Debug output is for local builds only
        if level == Level::Debug && !cfg!(debug_assertions) {
            return;
        }

        let line = format_line(level, component, message);
        match level {
            Level::Debug => console::debug!(line),
            Level::Info => console::info!(line),
            Level::Warn => console::warn!(line),
            Level::Error => console::error!(line),
        }
    }
}

fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{}] {}: {}", level.as_str(), component, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_line_tags_component() {
        assert_eq!(
            format_line(Level::Info, "booking-wizard", "step 2 -> 3"),
            "[info] booking-wizard: step 2 -> 3"
        );
        assert_eq!(
            format_line(Level::Error, "navigation", "popup blocked"),
            "[error] navigation: popup blocked"
        );
    }
}
