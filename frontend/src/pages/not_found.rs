use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for has moved or never existed."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to the home page"}
            </Link<Route>>
        </div>
    }
}
