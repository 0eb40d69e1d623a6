use yew::prelude::*;

use crate::content::Team;

#[derive(Properties, PartialEq)]
pub struct BrandLogoProps {
    pub team: Team,
}

#[function_component(BrandLogo)]
pub fn brand_logo(props: &BrandLogoProps) -> Html {
    let mark = match props.team {
        Team::Notion => html! {
            <>
                <rect x="3" y="3" width="26" height="26" rx="6" fill="#111111" />
                <path d="M10 23V9h3.2l8 10.8V9h2.8v14h-3.1L12.8 12.2V23H10Z" fill="#ffffff" />
            </>
        },
        Team::Linear => html! {
            <>
                <circle cx="16" cy="16" r="11" fill="none" stroke="#5E6AD2" stroke-width="3" />
                <path d="M10 22L22 10" stroke="#5E6AD2" stroke-width="3" stroke-linecap="round" />
            </>
        },
        Team::Intercom => html! {
            <>
                <rect x="4" y="4" width="24" height="24" rx="7" fill="#1F6FFF" />
                <path d="M10 12v6M14 10v8M18 10v8M22 12v6" stroke="#ffffff" stroke-width="2" stroke-linecap="round" />
                <path d="M11 21c1.6 1.3 3.3 2 5 2s3.4-.7 5-2" stroke="#ffffff" stroke-width="2" stroke-linecap="round" />
            </>
        },
        Team::Figma => html! {
            <>
                <rect x="8" y="3" width="8" height="8" rx="4" fill="#F24E1E" />
                <rect x="16" y="3" width="8" height="8" rx="4" fill="#FF7262" />
                <rect x="8" y="11" width="8" height="8" rx="4" fill="#A259FF" />
                <rect x="16" y="11" width="8" height="8" rx="4" fill="#1ABCFE" />
                <rect x="8" y="19" width="8" height="8" rx="4" fill="#0ACF83" />
            </>
        },
        Team::Spotify => html! {
            <>
                <circle cx="16" cy="16" r="13" fill="#1DB954" />
                <path d="M10 12.3c4-1 8.2-.7 12 1" stroke="#101010" stroke-width="2.1" stroke-linecap="round" fill="none" />
                <path d="M10.8 16c3.2-.8 6.8-.5 9.8.8" stroke="#101010" stroke-width="1.8" stroke-linecap="round" fill="none" />
                <path d="M11.8 19.3c2.4-.5 5-.3 7.2.6" stroke="#101010" stroke-width="1.6" stroke-linecap="round" fill="none" />
            </>
        },
        Team::Stripe => html! {
            <g transform="translate(4 8) rotate(-15 12 8)">
                <rect x="0" y="0" width="24" height="3" rx="1.5" fill="#635BFF" />
                <rect x="0" y="5" width="24" height="3" rx="1.5" fill="#635BFF" />
                <rect x="0" y="10" width="24" height="3" rx="1.5" fill="#635BFF" />
                <rect x="0" y="15" width="20" height="3" rx="1.5" fill="#635BFF" />
            </g>
        },
        Team::Dropbox => html! {
            <>
                <path d="M8 8l8-5 8 5-8 5-8-5Z" fill="#0061FF" />
                <path d="M8 18l8-5 8 5-8 5-8-5Z" fill="#0061FF" />
                <path d="M16 23l8-5v6l-8 5-8-5v-6l8 5Z" fill="#0061FF" />
            </>
        },
    };

    html! {
        <span class="logo-mark" aria-hidden="true">
            <svg viewBox="0 0 32 32" role="img">
                { mark }
            </svg>
        </span>
    }
}
