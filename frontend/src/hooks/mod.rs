pub mod use_landing;
pub mod use_site_config;

pub use use_landing::use_landing;
pub use use_site_config::use_site_config;
