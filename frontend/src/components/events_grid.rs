use yew::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::skeleton::EventCardSkeleton;
use crate::state::LoadState;

/// Number of placeholders shown while events are pending.
pub const SKELETON_COUNT: usize = 3;

const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 items-stretch";

#[derive(Properties, PartialEq)]
pub struct EventsGridProps {
    pub state: LoadState,
}

#[function_component(EventsGrid)]
pub fn events_grid(props: &EventsGridProps) -> Html {
    match &props.state {
        LoadState::Idle | LoadState::Loading => html! {
            <div class={GRID_CLASS} aria-busy="true">
                { for (0..SKELETON_COUNT).map(|i| html! { <EventCardSkeleton key={i} /> }) }
            </div>
        },
        LoadState::Loaded(events) => html! {
            <div class={GRID_CLASS}>
                { for events.iter().map(|event| html! {
                    <EventCard
                        key={event.id.clone()}
                        id={event.id.clone()}
                        title={event.title.clone()}
                        description={event.description.clone()}
                        date={event.date.clone()}
                        location={event.location.clone()}
                        image_url={event.image_url.clone()}
                        status={event.status}
                        capacity={event.capacity}
                        attendees={event.attendees}
                    />
                }) }
            </div>
        },
        LoadState::Failed(message) => html! {
            <div class="events-error text-center" role="alert">
                <p class="text-lg">{ "Unable to load events right now." }</p>
                <p class="text-sm text-muted-foreground">{ message }</p>
            </div>
        },
    }
}
