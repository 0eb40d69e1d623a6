use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: "Manrope", -apple-system, BlinkMacSystemFont, sans-serif;
                    color: #14161c;
                }
                .not-found h1 { margin: 0; font-size: 2rem; }
                .not-found a { color: #d9430d; font-weight: 700; }
                "#}
            </style>
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to EmailStack"}</Link<Route>>
        </div>
    }
}
