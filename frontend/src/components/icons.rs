//! Stateless inline SVG glyphs.

use shared::FaqIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

fn outline(class: &Classes, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("icon", class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.8"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {body}
        </svg>
    }
}

#[function_component(InstagramIcon)]
pub fn instagram_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
        </>
    })
}

#[function_component(LocationIcon)]
pub fn location_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z" />
            <circle cx="12" cy="10" r="3" />
        </>
    })
}

#[function_component(AboutIcon)]
pub fn about_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <circle cx="12" cy="12" r="10" />
            <line x1="12" y1="16" x2="12" y2="12" />
            <line x1="12" y1="8" x2="12.01" y2="8" />
        </>
    })
}

#[function_component(ReviewIcon)]
pub fn review_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
    })
}

#[function_component(WhatsAppIcon)]
pub fn whatsapp_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <path d="M3 21l1.65-3.8a9 9 0 1 1 3.4 2.9L3 21" />
            <path d="M9 10a.5.5 0 0 0 1 0V9a.5.5 0 0 0-1 0v1a5 5 0 0 0 5 5h1a.5.5 0 0 0 0-1h-1a.5.5 0 0 0 0 1" />
        </>
    })
}

#[function_component(CalendarIcon)]
pub fn calendar_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
            <line x1="16" y1="2" x2="16" y2="6" />
            <line x1="8" y1="2" x2="8" y2="6" />
            <line x1="3" y1="10" x2="21" y2="10" />
        </>
    })
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </>
    })
}

#[function_component(DownloadIcon)]
pub fn download_icon(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            <polyline points="7 10 12 15 17 10" />
            <line x1="12" y1="15" x2="12" y2="3" />
        </>
    })
}

#[derive(Properties, PartialEq)]
pub struct StarIconProps {
    pub filled: bool,
}

#[function_component(StarIcon)]
pub fn star_icon(props: &StarIconProps) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("icon", "star", props.filled.then_some("star-filled"))}
            viewBox="0 0 24 24"
            fill={if props.filled { "currentColor" } else { "none" }}
            stroke="currentColor"
            stroke-width="1.5"
        >
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqGlyphProps {
    pub icon: FaqIcon,
}

/// Icon for a FAQ entry.
#[function_component(FaqGlyph)]
pub fn faq_glyph(props: &FaqGlyphProps) -> Html {
    let class = Classes::from("faq-icon");
    match props.icon {
        FaqIcon::Contract => outline(&class, html! {
            <>
                <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" />
                <polyline points="14 2 14 8 20 8" />
                <line x1="8" y1="13" x2="16" y2="13" />
                <line x1="8" y1="17" x2="13" y2="17" />
            </>
        }),
        FaqIcon::DateReserve => outline(&class, html! {
            <>
                <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
                <line x1="3" y1="10" x2="21" y2="10" />
                <polyline points="9 15 11 17 15 13" />
            </>
        }),
        FaqIcon::CreditCard => outline(&class, html! {
            <>
                <rect x="1" y="4" width="22" height="16" rx="2" ry="2" />
                <line x1="1" y1="10" x2="23" y2="10" />
            </>
        }),
        FaqIcon::Users => outline(&class, html! {
            <>
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M23 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        }),
    }
}
