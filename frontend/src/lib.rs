pub mod components;
pub mod data;
pub mod pages;
pub mod router;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div id="app">
                <components::header::Header />
                <yew_router::Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
