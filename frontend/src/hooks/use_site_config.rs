use shared::SiteConfig;
use yew::prelude::*;

/// Config provided at the root, or the defaults outside a provider.
#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
