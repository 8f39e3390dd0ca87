use yew::prelude::*;

use crate::hooks::use_site_config;

#[function_component(LocationPanel)]
pub fn location_panel() -> Html {
    let config = use_site_config();

    html! {
        <div class="panel location-panel">
            <h2 class="panel-title">{"Nossa Localização"}</h2>
            <div class="map-frame">
                <iframe
                    src={config.maps_embed_url.clone()}
                    width="100%"
                    height="100%"
                    style="border: 0;"
                    allowfullscreen={true}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
            </div>
            <p class="address">{config.street_address.clone()}</p>
            <a
                class="primary-button"
                href={config.maps_directions_url.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"Ver no Google Maps"}
            </a>
        </div>
    }
}
