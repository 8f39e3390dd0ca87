pub mod logging;
pub mod navigation;
pub mod site_config;
