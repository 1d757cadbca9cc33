use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{events::Events, home::Home, not_found::NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/events")]
    Events,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Events => html! { <Events /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
