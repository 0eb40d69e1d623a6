use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod format;
mod hooks;
mod lead;
mod motion {
    pub mod browser;
    pub mod count_up;
    pub mod easing;
    pub mod error;
    pub mod frame_loop;
    pub mod reveal;
}
mod components {
    pub mod brand_logo;
    pub mod email_dashboard;
    pub mod lead_form;
    pub mod workflow_preview;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/404")]
    #[not_found]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
