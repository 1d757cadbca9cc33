use std::rc::Rc;

use yew::prelude::*;

use crate::components::events_grid::EventsGrid;
use crate::data::featured_events;
use crate::state::LoadState;

#[function_component(Events)]
pub fn events() -> Html {
    let state = use_memo((), |_| LoadState::Loaded(Rc::new(featured_events())));

    html! {
        <div class="container mx-auto py-20 px-4">
            <h2 class="text-3xl font-bold tracking-tight mb-12 text-center">{ "All Events" }</h2>
            <EventsGrid state={(*state).clone()} />
        </div>
    }
}
