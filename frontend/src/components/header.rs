use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{ "AI Medellín" }</h1>
                <nav>
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    { " | " }
                    <Link<Route> to={Route::Events}>{ "Events" }</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
